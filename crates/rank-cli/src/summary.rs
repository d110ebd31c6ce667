//! Terminal summary tables for ranking runs.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rank_model::RankingSummary;
use rank_transform::ScoredFrame;

/// Print the run summary and the rank-1 class distribution.
pub fn print_rank_summary(summary: &RankingSummary) {
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Classes"),
        header_cell("Requested ranks"),
        header_cell("Effective ranks"),
        header_cell("Old confidences"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let old_confidences = if summary.removed_old_confidences {
        Cell::new("removed").fg(Color::Yellow)
    } else {
        Cell::new("kept").fg(Color::Green)
    };
    table.add_row(vec![
        Cell::new(summary.rows),
        Cell::new(summary.classes),
        Cell::new(summary.requested_ranks),
        Cell::new(summary.effective_ranks),
        old_confidences,
    ]);
    println!("{table}");
    print_distribution_table(summary);
}

fn print_distribution_table(summary: &RankingSummary) {
    if summary.rank_one_counts.is_empty() {
        return;
    }
    let total: usize = summary.rank_one_counts.iter().map(|count| count.rows).sum();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Class"),
        header_cell("Rank-1 rows"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for count in &summary.rank_one_counts {
        let share = if total == 0 {
            0.0
        } else {
            100.0 * count.rows as f64 / total as f64
        };
        table.add_row(vec![
            Cell::new(&count.class).add_attribute(Attribute::Bold),
            Cell::new(count.rows),
            Cell::new(format!("{share:.1}%")),
        ]);
    }
    println!();
    println!("Rank-1 distribution:");
    println!("{table}");
}

/// Print the schema detected for a scoring export.
pub fn print_schema_table(frame: &ScoredFrame) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Role"),
        header_cell("Classes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for meta in frame.columns() {
        let classes = match &meta.mapping {
            Some(mapping) => Cell::new(mapping.len()),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&meta.name),
            Cell::new(meta.value_type.as_str()),
            Cell::new(meta.role.describe()),
            classes,
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
