//! Terminal tables for command output.

use std::path::Path;

use brandmap_model::{
    BrandMapSummary, FormRouteRecord, NormalizedIngredient, VaccineComponentSet, VaccineMatch,
    VaccineName,
};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Brand-map counters, one row per stage.
pub fn summary_table(summary: &BrandMapSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Read"), Cell::new(summary.rows_read)]);
    table.add_row(vec![
        Cell::new("Skipped (incomplete)"),
        count_cell(summary.rows_incomplete, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Brand/generic swapped"),
        count_cell(summary.rows_flipped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates dropped"),
        count_cell(summary.duplicates_dropped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.rows_written).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn print_summary(summary: &BrandMapSummary, output: &Path) {
    println!("Output: {}", output.display());
    println!("{}", summary_table(summary));
}

pub fn split_table(ingredients: &[NormalizedIngredient]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Text"), header_cell("Base"), header_cell("Salts")]);
    apply_table_style(&mut table);
    for ingredient in ingredients {
        table.add_row(vec![
            Cell::new(&ingredient.original_text),
            Cell::new(&ingredient.base_name).add_attribute(Attribute::Bold),
            text_or_dash(&ingredient.salt_label()),
        ]);
    }
    table
}

pub fn form_table(records: &[FormRouteRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Form"),
        header_cell("Canonical"),
        header_cell("Primary route"),
        header_cell("Valid routes"),
    ]);
    apply_table_style(&mut table);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.raw_form),
            Cell::new(&record.canonical_form).add_attribute(Attribute::Bold),
            text_or_dash(record.primary_route.as_deref().unwrap_or_default()),
            text_or_dash(&record.all_valid_routes.join(", ")),
        ]);
    }
    table
}

pub fn vaccine_table(found: &VaccineMatch, name: Option<&VaccineName>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    let components = found
        .components
        .as_ref()
        .map(VaccineComponentSet::key)
        .unwrap_or_default();
    table.add_row(vec![
        Cell::new("Acronym"),
        text_or_dash(found.acronym.as_deref().unwrap_or_default()),
    ]);
    table.add_row(vec![Cell::new("Components"), text_or_dash(&components)]);
    table.add_row(vec![
        Cell::new("Canonical name"),
        text_or_dash(name.map(|n| n.canonical.as_str()).unwrap_or_default()),
    ]);
    table.add_row(vec![
        Cell::new("Details"),
        text_or_dash(name.and_then(|n| n.details.as_deref()).unwrap_or_default()),
    ]);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn text_or_dash(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
