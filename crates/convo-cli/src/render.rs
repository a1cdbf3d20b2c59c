//! Text and JSON rendering of a table view

use convo_core::{SortColumn, SortDirection, TableView};

/// Output format for a rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain text table
    #[default]
    Text,
    /// Pretty printed JSON view model
    Json,
}

const COLUMN_GAP: &str = "  ";

/// Arrow shown next to the active header
const fn direction_marker(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

fn header_text(view: &TableView, column: SortColumn) -> String {
    view.columns
        .iter()
        .find(|cell| cell.column == column)
        .map_or_else(
            || column.label().to_string(),
            |cell| {
                if cell.active {
                    format!("{} {}", cell.label, direction_marker(cell.direction))
                } else {
                    cell.label.clone()
                }
            },
        )
}

fn column_widths(view: &TableView) -> Vec<usize> {
    SortColumn::ALL
        .into_iter()
        .map(|column| {
            let header = header_text(view, column).chars().count();
            view.rows
                .iter()
                .map(|visible| visible.row.cell(column).chars().count())
                .fold(header, usize::max)
        })
        .collect()
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render a view as an aligned text table
///
/// Filler rows render as empty lines so every page has the same height.
#[must_use]
pub fn render_text(view: &TableView) -> String {
    let widths = column_widths(view);
    let total_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
    let mut out = String::new();

    out.push_str(&view.title);
    out.push('\n');

    let headers: Vec<String> = SortColumn::ALL
        .into_iter()
        .map(|column| header_text(view, column))
        .collect();
    push_line(&mut out, &headers, &widths);
    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    for visible in &view.rows {
        let cells: Vec<String> = SortColumn::ALL
            .into_iter()
            .map(|column| visible.row.cell(column))
            .collect();
        push_line(&mut out, &cells, &widths);
    }
    for _ in 0..view.filler_count {
        out.push('\n');
    }

    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    let pagination = &view.pagination;
    let previous = if pagination.has_previous { "<" } else { "-" };
    let next = if pagination.has_next { ">" } else { "-" };
    out.push_str(&format!(
        "Rows per page: {}   {}   {previous} {next}\n",
        pagination.page_size, pagination.range
    ));

    out
}

/// Render a view as pretty printed JSON
///
/// # Errors
///
/// Returns an error if the view cannot be serialized.
pub fn render_json(view: &TableView) -> convo_core::Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

/// Render a view in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(view: &TableView, format: OutputFormat) -> convo_core::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => render_json(view),
    }
}
