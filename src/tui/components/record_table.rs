//! Record table component.
//!
//! Renders the filtered records as fixed columns sized to the terminal
//! width. Only rows inside the scroll window are rendered.

use unicode_width::UnicodeWidthStr;

use crate::fields::{ADMISSIONS, BALANCE, CATEGORY, STATE, TERMINATIONS};
use crate::record::Record;

use super::text_fit::{Align, fit_cell};

/// Column headings, in display order.
pub const TABLE_HEADERS: [&str; 5] = ["Categorias", "UF", "Admissões", "Desligamentos", "Saldo"];
/// Row shown while the load is in flight.
pub const LOADING_TEXT: &str = "Carregando...";
/// Row shown when no record passes the filters.
pub const EMPTY_TEXT: &str = "Nenhum dado encontrado";

const COLUMN_FIELDS: [&str; 5] = [CATEGORY, STATE, ADMISSIONS, TERMINATIONS, BALANCE];
const SEPARATOR: &str = " | ";
const CURSOR_PREFIX_WIDTH: usize = 2;
const MIN_TEXT_COLUMN: usize = 4;

/// Context for rendering the record table.
#[derive(Debug, Clone)]
pub struct RecordTableViewContext<'a> {
    /// Every loaded record.
    pub records: &'a [Record],
    /// Indices of records passing the filters, in order.
    pub filtered_indices: &'a [usize],
    /// Cursor row within the filtered list.
    pub cursor_position: usize,
    /// First visible filtered row.
    pub scroll_offset: usize,
    /// Number of data rows that fit.
    pub visible_height: usize,
    /// Terminal width in columns.
    pub max_width: usize,
    /// Whether the load is still in flight.
    pub loading: bool,
    /// Whether the table has keyboard focus.
    pub focused: bool,
}

/// Component rendering the record table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordTableComponent;

impl RecordTableComponent {
    /// Renders the heading, a rule, and the visible rows.
    #[must_use]
    pub fn view(ctx: &RecordTableViewContext<'_>) -> String {
        let widths = column_widths(ctx.max_width);
        let mut output = String::new();

        output.push_str(&format_row("  ", &TABLE_HEADERS.map(str::to_owned), &widths));
        output.push('\n');
        output.push_str(&"-".repeat(total_width(&widths)));
        output.push('\n');

        if ctx.loading {
            output.push_str(&format!("  {LOADING_TEXT}\n"));
            return output;
        }
        if ctx.filtered_indices.is_empty() {
            output.push_str(&format!("  {EMPTY_TEXT}\n"));
            return output;
        }

        for (row, &record_index) in ctx
            .filtered_indices
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(ctx.visible_height.max(1))
        {
            let Some(record) = ctx.records.get(record_index) else {
                continue;
            };
            let prefix = if ctx.focused && row == ctx.cursor_position {
                "> "
            } else {
                "  "
            };
            let cells = COLUMN_FIELDS.map(|field| record.display_value(field).unwrap_or_default());
            output.push_str(&format_row(prefix, &cells, &widths));
            output.push('\n');
        }

        output
    }
}

/// Numeric columns take their heading width; the two text columns share
/// what is left, category first.
fn column_widths(max_width: usize) -> [usize; 5] {
    let numeric = [TABLE_HEADERS[2], TABLE_HEADERS[3], TABLE_HEADERS[4]]
        .map(UnicodeWidthStr::width);
    let fixed = CURSOR_PREFIX_WIDTH
        + numeric.iter().sum::<usize>()
        + SEPARATOR.len() * (COLUMN_FIELDS.len() - 1);
    let remaining = max_width.saturating_sub(fixed).max(MIN_TEXT_COLUMN * 2);
    let state = remaining.div_euclid(3).max(MIN_TEXT_COLUMN);
    let category = remaining.saturating_sub(state).max(MIN_TEXT_COLUMN);

    [category, state, numeric[0], numeric[1], numeric[2]]
}

fn total_width(widths: &[usize; 5]) -> usize {
    CURSOR_PREFIX_WIDTH + widths.iter().sum::<usize>() + SEPARATOR.len() * (widths.len() - 1)
}

fn format_row(prefix: &str, cells: &[String; 5], widths: &[usize; 5]) -> String {
    let rendered: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, width))| {
            let align = if column < 2 { Align::Left } else { Align::Right };
            fit_cell(cell, *width, align)
        })
        .collect();
    format!("{prefix}{}", rendered.join(SEPARATOR))
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn records() -> Vec<Record> {
        vec![
            Record::new()
                .with("categoria", "Sexo")
                .with("uf", "Bahia")
                .with("admissoes", 10_i64)
                .with("desligamentos", 4_i64)
                .with("saldo", 6_i64),
            Record::new().with("categoria", "Raça/Cor").with("uf", "Ceará"),
        ]
    }

    fn context<'a>(records: &'a [Record], indices: &'a [usize]) -> RecordTableViewContext<'a> {
        RecordTableViewContext {
            records,
            filtered_indices: indices,
            cursor_position: 0,
            scroll_offset: 0,
            visible_height: 10,
            max_width: 100,
            loading: false,
            focused: true,
        }
    }

    #[rstest]
    fn renders_headers_and_rows(records: Vec<Record>) {
        let output = RecordTableComponent::view(&context(&records, &[0, 1]));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        for header in TABLE_HEADERS {
            assert!(lines[0].contains(header), "missing header {header}");
        }
        assert!(lines[2].starts_with("> Sexo"));
        assert!(lines[2].contains("Bahia"));
        assert!(lines[2].trim_end().ends_with('6'));
        assert!(lines[3].starts_with("  Raça/Cor"));
    }

    #[rstest]
    fn loading_row_replaces_data(records: Vec<Record>) {
        let ctx = RecordTableViewContext {
            loading: true,
            ..context(&records, &[0, 1])
        };
        let output = RecordTableComponent::view(&ctx);

        assert!(output.contains(LOADING_TEXT));
        assert!(!output.contains("Bahia"));
    }

    #[rstest]
    fn empty_filter_result_shows_message(records: Vec<Record>) {
        let output = RecordTableComponent::view(&context(&records, &[]));
        assert!(output.contains(EMPTY_TEXT));
    }

    #[rstest]
    fn rows_respect_scroll_window(records: Vec<Record>) {
        let ctx = RecordTableViewContext {
            scroll_offset: 1,
            visible_height: 1,
            cursor_position: 1,
            ..context(&records, &[0, 1])
        };
        let output = RecordTableComponent::view(&ctx);

        assert!(!output.contains("Sexo"));
        assert!(output.contains("> Raça/Cor"));
    }

    #[rstest]
    #[case::narrow(40)]
    #[case::standard(80)]
    #[case::wide(160)]
    fn rule_spans_the_row(#[case] max_width: usize) {
        let widths = column_widths(max_width);
        let header = format_row("  ", &TABLE_HEADERS.map(str::to_owned), &widths);

        assert_eq!(UnicodeWidthStr::width(header.as_str()), total_width(&widths));
    }
}
