//! Fixed-width text table for terminal output.

use crate::aggregator::SummaryRow;
use crate::utils::config::{NAME_COLUMN_WIDTH, TABLE_RULE_WIDTH};

/// Render rows as a table
///
/// ```text
/// Top 2 timings:
/// Name                                                  Count   Total (ms)
/// ------------------------------------------------------------------------
/// typeset                                                  12       431.20
/// layout                                                    3         1.50
/// ```
pub fn render_table(rows: &[SummaryRow]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Top {} timings:\n", rows.len()));
    out.push_str(&format!(
        "{:<width$} {:>8} {:>12}\n",
        "Name",
        "Count",
        "Total (ms)",
        width = NAME_COLUMN_WIDTH
    ));
    out.push_str(&format!("{}\n", "-".repeat(TABLE_RULE_WIDTH)));

    for row in rows {
        out.push_str(&format!(
            "{:<width$} {:>8} {:>12.2}\n",
            truncate_name(&row.name),
            row.stat.count,
            row.stat.total_ms(),
            width = NAME_COLUMN_WIDTH
        ));
    }

    out
}

/// Cut a name to the column width, counting characters rather than bytes
fn truncate_name(name: &str) -> &str {
    match name.char_indices().nth(NAME_COLUMN_WIDTH) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}
