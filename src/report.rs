use crate::graph::summarize::GroupedSummaries;

use prettytable::{format::Alignment, Cell, Row, Table};

use std::fmt::Display;

const COLUMNS: [&str; 5] = ["min", "q1", "median", "q3", "max"];

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// One header row spanning the table, a column row, then a row per group.
pub fn summary_table<K: Display>(title: &str, summaries: &GroupedSummaries<K>) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new_align(title, Alignment::CENTER)
        .with_hspan(COLUMNS.len() + 1)]));

    let mut cells: Vec<Cell> = vec![Cell::new("group")];
    cells.extend(COLUMNS.iter().map(|c| Cell::new(c)));
    table.add_row(Row::new(cells));

    for (group, summary) in summaries {
        let mut cells: Vec<Cell> = vec![Cell::new(&group.to_string())];
        cells.extend(
            summary
                .values()
                .iter()
                .map(|v| Cell::new_align(&format_value(*v), Alignment::RIGHT)),
        );
        table.add_row(Row::new(cells));
    }
    table
}

pub fn print_summaries<K: Display>(title: &str, summaries: &GroupedSummaries<K>) {
    summary_table(title, summaries).printstd();
}
