//! Terminal rendering of a `RenderedTable` using outstanding

use console::{measure_text_width, pad_str, Alignment, Style};
use datatablelib::{
    Align, FilterInput, FilterInputKind, HeaderCell, RenderedTable, SortDirection, StatusCategory,
};
use outstanding::Theme;
use serde::Serialize;

/// Include template at compile time
const TABLE_TEMPLATE: &str = include_str!("../templates/table.jinja");

/// Gap between columns
const COLUMN_GAP: usize = 2;

/// Cell data for template rendering (pre-padded)
#[derive(Debug, Serialize)]
struct TemplateCell {
    text: String,
    /// Theme style for status badges
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<&'static str>,
}

/// Row data for template rendering
#[derive(Debug, Serialize)]
struct TemplateRow {
    cells: Vec<TemplateCell>,
}

/// Data context for the table template
#[derive(Debug, Serialize)]
struct TableContext {
    /// Search text, when a search is active
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    /// Filter panel lines, when the panel is open
    filters: Vec<String>,
    /// Pre-padded header labels
    headers: Vec<String>,
    separator: String,
    rows: Vec<TemplateRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    empty_message: Option<String>,
    summary: String,
    page_label: String,
}

fn create_theme() -> Theme {
    Theme::new()
        .add("header", Style::new().bold())
        .add("muted", Style::new().dim())
        .add("paid", Style::new().green())
        .add("unpaid", Style::new().red())
        .add("pending", Style::new().yellow())
}

fn header_label(header: &HeaderCell) -> String {
    match header.sort {
        Some(SortDirection::Ascending) => format!("{} ↑", header.label),
        Some(SortDirection::Descending) => format!("{} ↓", header.label),
        None => header.label.clone(),
    }
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    }
}

fn status_style(status: Option<StatusCategory>) -> Option<&'static str> {
    match status {
        Some(StatusCategory::Other) | None => None,
        Some(category) => Some(category.style_name()),
    }
}

/// One line per filter input: `Label: value` plus any select choices.
fn filter_line(input: &FilterInput) -> String {
    let value = match &input.kind {
        FilterInputKind::Text { value, .. } | FilterInputKind::Number { value, .. } => {
            value.clone()
        }
        FilterInputKind::Select { value, options } => {
            let choices: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
            format!("{} [{}]", value, choices.join(", "))
        }
        FilterInputKind::DateRange { from, to } => format!("{} .. {}", from, to),
    };
    let marker = if input.active { "*" } else { " " };
    format!("{} {}: {}", marker, input.label, value.trim())
}

fn build_context(table: &RenderedTable) -> TableContext {
    let labels: Vec<String> = table.headers.iter().map(header_label).collect();

    let widths: Vec<usize> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|cell| measure_text_width(&cell.text))
                .max()
                .unwrap_or(0)
                .max(measure_text_width(label))
        })
        .collect();

    let headers = labels
        .iter()
        .zip(&table.headers)
        .zip(&widths)
        .map(|((label, header), width)| {
            pad_str(label, *width, alignment(header.align), None).into_owned()
        })
        .collect();

    let rows = table
        .rows
        .iter()
        .map(|row| TemplateRow {
            cells: row
                .cells
                .iter()
                .zip(&table.headers)
                .zip(&widths)
                .map(|((cell, header), width)| TemplateCell {
                    text: pad_str(&cell.text, *width, alignment(header.align), None).into_owned(),
                    style: status_style(cell.status),
                })
                .collect(),
        })
        .collect();

    let total_width = widths.iter().sum::<usize>() + COLUMN_GAP * widths.len().saturating_sub(1);

    TableContext {
        search: Some(table.search.value.clone()).filter(|s| !s.is_empty()),
        filters: table
            .filters
            .as_ref()
            .map(|panel| panel.inputs.iter().map(filter_line).collect())
            .unwrap_or_default(),
        headers,
        separator: "-".repeat(total_width.max(1)),
        rows,
        empty_message: table.empty_message.clone(),
        summary: table.pagination.summary.clone(),
        page_label: table.pagination.page_label.clone(),
    }
}

/// Render a table to a string using outstanding
pub fn render_table(table: &RenderedTable) -> anyhow::Result<String> {
    let context = serde_json::to_value(build_context(table))?;
    let rendered = outstanding::render(TABLE_TEMPLATE, &context, &create_theme())?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use datatablelib::{ColumnConfig, Columns, DataType, Row, TableState};

    fn rendered() -> RenderedTable {
        let columns = Columns::new(vec![
            ColumnConfig::new("customer", "Customer", DataType::String),
            ColumnConfig::new("amount", "Amount", DataType::Currency).with_align(Align::Right),
            ColumnConfig::new("status", "Status", DataType::Status),
        ])
        .unwrap();
        let rows = vec![
            Row::new()
                .with("customer", "Acme")
                .with("amount", 123456)
                .with("status", "PAID"),
            Row::new()
                .with("customer", "Globex")
                .with("amount", 900)
                .with("status", "void"),
        ];
        let mut table = TableState::new(columns, rows);
        table.toggle_sort("amount").unwrap();
        table.render()
    }

    #[test]
    fn test_columns_are_padded_to_widest_cell() {
        let context = build_context(&rendered());
        assert_eq!(context.headers[0], "Customer");
        assert_eq!(context.headers[1], "Amount ↑");
        assert_eq!(context.rows[0].cells[1].text, "    9.00");
        assert_eq!(context.rows[1].cells[1].text, "1,234.56");
        assert_eq!(context.rows[0].cells[0].text, "Globex  ");
    }

    #[test]
    fn test_status_styles() {
        let context = build_context(&rendered());
        assert_eq!(context.rows[0].cells[2].style, None);
        assert_eq!(context.rows[1].cells[2].style, Some("paid"));
    }

    #[test]
    fn test_filter_lines() {
        let input = FilterInput {
            key: "status".to_string(),
            label: "Status".to_string(),
            id: "filter-status".to_string(),
            kind: FilterInputKind::Select {
                value: "PAID".to_string(),
                options: Vec::new(),
            },
            active: true,
        };
        assert_eq!(filter_line(&input), "* Status: PAID []");
    }
}
