//! Data tables from ordered records
//!
//! Rows are insertion-ordered JSON objects; the column set is the union of
//! keys across all rows in first-seen order. Grid drawing, column sizing,
//! and wrapping are comfy-table's job.

use comfy_table::{Cell, ContentArrangement, Table, presets};
use serde_json::{Map, Value};

use crate::theme::{TableBorder, Theme};

/// One table row: column name to cell value, insertion-ordered.
pub type Row = Map<String, Value>;

/// Column names across all rows, in first-seen order.
pub fn columns(rows: &[Row]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !names.iter().any(|n| n == key) {
                names.push(key.clone());
            }
        }
    }
    names
}

/// Build the comfy-table grid for `rows` using the theme's layout.
pub fn build_table(theme: &Theme, rows: &[Row]) -> Table {
    let mut table = Table::new();
    table.load_preset(match theme.layout.table_border {
        TableBorder::Full => presets::UTF8_FULL,
        TableBorder::Horizontal => presets::UTF8_HORIZONTAL_ONLY,
        TableBorder::None => presets::NOTHING,
    });
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let names = columns(rows);
    let header_color = theme
        .typography
        .table_header
        .foreground_color
        .map(table_color);
    table.set_header(
        names
            .iter()
            .map(|name| {
                let cell = Cell::new(name);
                match header_color {
                    Some(color) => cell.fg(color),
                    None => cell,
                }
            })
            .collect::<Vec<_>>(),
    );

    for (idx, row) in rows.iter().enumerate() {
        let banded = theme.layout.row_banding && idx % 2 == 1;
        table.add_row(
            names
                .iter()
                .map(|name| {
                    let text = row.get(name).map(cell_text).unwrap_or_default();
                    let cell = Cell::new(text);
                    if banded {
                        cell.fg(comfy_table::Color::DarkGrey)
                    } else {
                        cell
                    }
                })
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Cell display text: strings bare, everything else as compact JSON.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn table_color(color: crossterm::style::Color) -> comfy_table::Color {
    use comfy_table::Color as Table;
    use crossterm::style::Color as Term;
    match color {
        Term::Reset => Table::Reset,
        Term::Black => Table::Black,
        Term::DarkGrey => Table::DarkGrey,
        Term::Red => Table::Red,
        Term::DarkRed => Table::DarkRed,
        Term::Green => Table::Green,
        Term::DarkGreen => Table::DarkGreen,
        Term::Yellow => Table::Yellow,
        Term::DarkYellow => Table::DarkYellow,
        Term::Blue => Table::Blue,
        Term::DarkBlue => Table::DarkBlue,
        Term::Magenta => Table::Magenta,
        Term::DarkMagenta => Table::DarkMagenta,
        Term::Cyan => Table::Cyan,
        Term::DarkCyan => Table::DarkCyan,
        Term::White => Table::White,
        Term::Grey => Table::Grey,
        Term::Rgb { r, g, b } => Table::Rgb { r, g, b },
        Term::AnsiValue(v) => Table::AnsiValue(v),
    }
}
