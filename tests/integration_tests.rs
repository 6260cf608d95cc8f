use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use cadence::{ComponentKind, Console, Theme};
use serde_json::json;

/// Shared byte sink a test console renders into.
#[derive(Clone, Default)]
struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Test context wiring a console to a capture sink
struct TestContext {
    console: Console,
    sink: SharedSink,
}

impl TestContext {
    fn new() -> Self {
        let sink = SharedSink::default();
        let console = Console::with_writer(Box::new(sink.clone()));
        Self { console, sink }
    }

    fn output(&self) -> String {
        String::from_utf8_lossy(&self.sink.0.lock().unwrap()).into_owned()
    }

    /// Count fully blank lines between the line containing `first` and the
    /// line containing `second`. Styled lines carry ANSI codes but never
    /// collapse to empty, so an empty line is exactly a lead-spacing blank.
    fn blank_lines_between(&self, first: &str, second: &str) -> usize {
        let output = self.output();
        let lines: Vec<&str> = output.lines().collect();
        let start = lines
            .iter()
            .position(|l| l.contains(first))
            .unwrap_or_else(|| panic!("no line containing {first:?}"));
        let end = lines
            .iter()
            .skip(start + 1)
            .position(|l| l.contains(second))
            .map(|offset| start + 1 + offset)
            .unwrap_or_else(|| panic!("no line containing {second:?} after {first:?}"));
        lines[start + 1..end]
            .iter()
            .filter(|l| l.is_empty())
            .count()
    }
}

#[test]
fn test_first_render_emits_no_lead_spacing() {
    let ctx = TestContext::new();
    ctx.console.header("Deploy", None, None).unwrap();

    assert!(!ctx.output().starts_with('\n'));
}

#[test]
fn test_consecutive_messages_use_message_spacing() {
    let ctx = TestContext::new();
    ctx.console.info("first step").unwrap();
    ctx.console.success("second step").unwrap();

    let spacing = ctx.console.theme().spacing;
    assert_eq!(
        ctx.blank_lines_between("first step", "second step"),
        spacing.message
    );
}

#[test]
fn test_header_spaced_wider_than_messages() {
    let ctx = TestContext::new();
    ctx.console.info("preamble").unwrap();
    ctx.console.header("Report", None, None).unwrap();

    let spacing = ctx.console.theme().spacing;
    assert_eq!(ctx.blank_lines_between("preamble", "Report"), spacing.header);
    assert!(spacing.message < spacing.header);
}

#[test]
fn test_every_lead_matches_engine_answer() {
    let ctx = TestContext::new();
    ctx.console.section("fetch").unwrap();
    ctx.console.info("downloading").unwrap();
    ctx.console.summary(&[("Files", "3")]).unwrap();

    let spacing = ctx.console.theme().spacing;
    assert_eq!(
        ctx.blank_lines_between("FETCH", "downloading"),
        spacing.between(ComponentKind::Section, ComponentKind::Info)
    );
    assert_eq!(
        ctx.blank_lines_between("downloading", "Files"),
        spacing.between(ComponentKind::Info, ComponentKind::Summary)
    );
}

#[test]
fn test_block_suppresses_inner_spacing() {
    let ctx = TestContext::new();
    ctx.console.info("before group").unwrap();
    {
        let _group = ctx.console.block();
        ctx.console.summary(&[("Key", "value")]).unwrap();
        ctx.console.success("inside group").unwrap();
    }

    // Grouped renders hug each other and whatever came before the group.
    assert_eq!(ctx.blank_lines_between("before group", "Key"), 0);
    assert_eq!(ctx.blank_lines_between("Key", "inside group"), 0);
}

#[test]
fn test_element_after_block_spaced_from_first_member() {
    let ctx = TestContext::new();
    {
        let _group = ctx.console.block();
        ctx.console.header("Build", None, None).unwrap();
        ctx.console.info("artifacts ready").unwrap();
    }
    ctx.console.section("publish").unwrap();

    // (Header, Section) carries an override of 1 blank line, while
    // (Info, Section) would use the section default of 2. Getting 1 here
    // proves the group anchors on its first member.
    let spacing = ctx.console.theme().spacing;
    let expected = spacing.between(ComponentKind::Header, ComponentKind::Section);
    assert_ne!(
        expected,
        spacing.between(ComponentKind::Info, ComponentKind::Section)
    );
    assert_eq!(
        ctx.blank_lines_between("artifacts ready", "PUBLISH"),
        expected
    );
}

#[test]
fn test_nested_blocks_resume_only_at_outermost_exit() {
    let ctx = TestContext::new();
    ctx.console.info("start").unwrap();
    {
        let _outer = ctx.console.block();
        ctx.console.info("outer member").unwrap();
        {
            let _inner = ctx.console.block();
            ctx.console.info("inner member").unwrap();
        }
        // Inner scope closed, outer still open: still contiguous.
        ctx.console.summary(&[("Depth", "outer")]).unwrap();
    }
    ctx.console.header("After", None, None).unwrap();

    assert_eq!(ctx.blank_lines_between("outer member", "inner member"), 0);
    assert_eq!(ctx.blank_lines_between("inner member", "Depth"), 0);
    let spacing = ctx.console.theme().spacing;
    assert_eq!(ctx.blank_lines_between("Depth", "After"), spacing.header);
}

#[test]
fn test_clear_resets_to_fresh_session() {
    let ctx = TestContext::new();
    ctx.console.info("old output").unwrap();
    ctx.console.clear().unwrap();
    ctx.console.header("Fresh", None, None).unwrap();

    // A header after clear is a first render: zero lead blanks.
    assert_eq!(ctx.blank_lines_between("old output", "Fresh"), 0);
    assert_eq!(ctx.console.component_count(), 1);
}

#[test]
fn test_theme_round_trip_and_respacing() {
    let ctx = TestContext::new();
    let mut theme = Theme::default();
    theme.spacing.header = 4;
    theme.icons.success = "+";
    ctx.console.configure("demo", theme).unwrap();

    let read_back = ctx.console.theme();
    assert_eq!(read_back.spacing.header, 4);
    assert_eq!(read_back.icons.success, "+");

    ctx.console.info("lead-up").unwrap();
    ctx.console.header("Spaced", None, None).unwrap();
    assert_eq!(ctx.blank_lines_between("lead-up", "Spaced"), 4);
}

#[test]
fn test_table_columns_in_first_seen_order() {
    let ctx = TestContext::new();
    let rows = vec![
        json!({"Name": "Alice", "Age": 30}).as_object().unwrap().clone(),
        json!({"Name": "Bob", "Age": 25}).as_object().unwrap().clone(),
    ];
    ctx.console.table(&rows, Some("People")).unwrap();

    let output = ctx.output();
    assert!(output.find("Name").unwrap() < output.find("Age").unwrap());
    assert!(output.find("Alice").unwrap() < output.find("Bob").unwrap());
    assert!(output.contains("People"));
}

#[test]
fn test_code_block_renders_each_line() {
    let ctx = TestContext::new();
    ctx.console
        .code("let answer = 42;", "rust", Some("snippet"), true)
        .unwrap();

    let output = ctx.output();
    assert!(output.contains("snippet"));
    assert!(output.contains("answer"));
    assert!(output.contains("1 │"));
}

#[test]
fn test_json_pretty_prints_value() {
    let ctx = TestContext::new();
    ctx.console
        .json(&json!({"name": "apl", "ok": true}), None)
        .unwrap();

    let output = ctx.output();
    assert!(output.contains("name"));
    assert!(output.contains("true"));
}

#[test]
fn test_multi_progress_clamps_to_task_total() {
    let ctx = TestContext::new();
    let mut multi = ctx.console.multi_progress("building").unwrap();
    let compile = multi.add_task("compile", 10, "c1");
    let link = multi.add_task("link", 4, "l1");

    multi.update(compile, 7);
    multi.update(compile, 7);
    multi.update(link, 1);

    assert_eq!(multi.position(compile), Some(10));
    assert_eq!(multi.position(link), Some(1));
}

#[test]
fn test_progress_participates_in_spacing() {
    let ctx = TestContext::new();
    ctx.console.info("about to work").unwrap();
    let bar = ctx.console.progress("working").unwrap();
    bar.update_progress(50, None);
    bar.stop();
    ctx.console.success("worked").unwrap();

    // Progress registered one descriptor, so the trailing message is
    // spaced against it, not against the info line.
    assert_eq!(ctx.console.component_count(), 3);
}

#[test]
fn test_spinner_registers_single_descriptor() {
    let ctx = TestContext::new();
    let spinner = ctx.console.spinner("thinking").unwrap();
    spinner.update_message("still thinking");
    spinner.stop();

    assert_eq!(ctx.console.component_count(), 1);
}
