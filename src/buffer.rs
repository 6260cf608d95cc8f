//! Output Buffer - the session's write sink
//!
//! Wraps the stream a session renders into. Defaults to stdout; tests and
//! embedders can substitute any writer. All vertical whitespace and styled
//! content goes through here so a session's output stays a single ordered
//! stream.

use crossterm::{
    QueueableCommand, cursor,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// A buffer that owns the session's output stream
pub struct OutputBuffer {
    sink: Box<dyn Write + Send>,
}

impl OutputBuffer {
    /// Buffer writing to the process stdout
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Buffer writing to an arbitrary sink
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self { sink }
    }

    /// Emit `count` blank lines
    pub fn blank_lines(&mut self, count: usize) -> io::Result<()> {
        for _ in 0..count {
            writeln!(self.sink)?;
        }
        Ok(())
    }

    /// Write text followed by a newline
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.sink, "{text}")
    }

    /// Write text without a newline
    pub fn write_raw(&mut self, text: &str) -> io::Result<()> {
        write!(self.sink, "{text}")
    }

    /// Clear the visible terminal and move the cursor home
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.sink.queue(Clear(ClearType::All))?;
        self.sink.queue(cursor::MoveTo(0, 0))?;
        self.sink.flush()
    }

    /// Hide cursor
    pub fn hide_cursor(&mut self) -> io::Result<()> {
        self.sink.queue(cursor::Hide)?;
        self.sink.flush()
    }

    /// Show cursor
    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.sink.queue(cursor::Show)?;
        self.sink.flush()
    }

    /// Flush pending output
    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl std::fmt::Debug for OutputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputBuffer").finish_non_exhaustive()
    }
}
