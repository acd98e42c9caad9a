use prettytable::{Cell, Row, Table, format};

use crate::dashboard::dashboard_state::DashboardState;
use crate::types::quote::Quote;

pub fn format_change_percent(change_percent: f64) -> String {
    format!("{change_percent:+.2}%")
}

pub fn quote_table(quotes: &[Quote]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    table.add_row(Row::new(vec![
        Cell::new("SYMBOL"),
        Cell::new("PRICE"),
        Cell::new("CHANGE %"),
    ]));

    for quote in quotes {
        table.add_row(Row::new(vec![
            Cell::new(&quote.symbol),
            Cell::new(&format!("${}", quote.price)).style_spec("r"),
            Cell::new(&format_change_percent(quote.change_percent)).style_spec("r"),
        ]));
    }

    table
}

/// Full text rendering of the dashboard: status line, stats, table.
pub fn render(state: &DashboardState) -> String {
    let mut out = String::new();

    if state.is_loading() {
        out.push_str("Loading...\n");
        return out;
    }

    if let Some(error) = state.error() {
        out.push_str(&format!("! {error}\n"));
    }

    let visible = state.visible();
    let stats = state.stats();

    if stats.total > 0 {
        let average = stats
            .average_price
            .map(|price| format!("${price}"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "Total stocks: {}  Average price: {}  Filtered results: {}\n",
            stats.total, average, stats.filtered
        ));
    }

    let mut filters = Vec::new();
    if !state.search_term().is_empty() {
        filters.push(format!("search {:?}", state.search_term()));
    }
    if let Some(sort) = state.sort_config() {
        filters.push(format!("sort {sort}"));
    }
    if let Some(loaded_at) = state.last_loaded_at() {
        filters.push(format!("updated {}", loaded_at.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    if !filters.is_empty() {
        out.push_str(&filters.join("  |  "));
        out.push('\n');
    }

    if visible.is_empty() {
        if stats.total > 0 {
            out.push_str("No stocks match the current search.\n");
        }
    } else {
        out.push_str(&quote_table(&visible).to_string());
    }

    out
}
