//! Result summary printing.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::PatchOutcome;

/// Prints the end-of-run report.
pub fn print_summary(outcome: &PatchOutcome) {
    println!("Export root: {}", outcome.export_root.display());
    if !outcome.scripts_dir_found {
        println!("No Scripts folder; script references were left alone.");
    }
    if !outcome.shader_dir_found {
        println!("No Shader folder; shader references were left alone.");
    }
    if let Some(path) = &outcome.report_path {
        println!("Run report: {}", path.display());
    }

    if outcome.counts.is_empty() {
        println!("Nothing was replaced.");
        return;
    }

    println!("Replaced references in {} files.", outcome.counts.total());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Mappings"),
        header_cell("Files changed"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Instances"),
        Cell::new(outcome.tables.scripts.len()),
        count_cell(outcome.counts.instance_files_changed),
    ]);
    table.add_row(vec![
        Cell::new("Shaders"),
        Cell::new(outcome.tables.shaders.len()),
        count_cell(outcome.counts.shader_files_changed),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(outcome.tables.scripts.len() + outcome.tables.shaders.len())
            .add_attribute(Attribute::Bold),
        count_cell(outcome.counts.total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

/// Shared table styling for summary and listing commands.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
