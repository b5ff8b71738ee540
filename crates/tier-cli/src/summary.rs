use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tier_ingest::ParseOutcome;
use tier_map::{AliasIndex, TierMatch};
use tier_model::TierModifier;

pub fn print_parse_summary(outcome: &ParseOutcome, output: &Path) {
    println!("Records: {}", output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Grid"),
        header_cell("Start row"),
        header_cell("Records"),
        header_cell("Skipped"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(format!("{} x {}", outcome.grid_height, outcome.grid_width)),
        Cell::new(outcome.start_row),
        Cell::new(outcome.records.len()).add_attribute(Attribute::Bold),
        count_cell(outcome.skipped_rows, Color::Yellow),
    ]);
    println!("{table}");
}

pub fn print_index_summary(index: &AliasIndex, output: &Path) {
    println!("Index: {}", output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Brand keys"),
        header_cell("Entries"),
        header_cell("Largest bucket"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    let largest = index
        .iter()
        .max_by_key(|(_, bucket)| bucket.len())
        .map(|(key, bucket)| format!("{key} ({})", bucket.len()));
    table.add_row(vec![
        Cell::new(index.len()),
        Cell::new(index.candidate_count()),
        largest.map_or_else(|| dim_cell("-"), Cell::new),
    ]);
    println!("{table}");
}

pub fn print_match(found: Option<&TierMatch<'_>>) {
    let Some(found) = found else {
        println!("no match");
        return;
    };
    println!("{}", found.tier);

    let record = &found.candidate.record;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Tier"), tier_cell(found)]);
    table.add_row(vec![Cell::new("Brand"), Cell::new(&record.brand)]);
    table.add_row(vec![Cell::new("Brand key"), Cell::new(found.brand_key)]);
    table.add_row(vec![Cell::new("Alias"), Cell::new(&found.candidate.match_series)]);
    table.add_row(vec![Cell::new("Rule"), Cell::new(found.rule)]);
    table.add_row(vec![Cell::new("Wattage"), optional_cell(record.wattage.as_deref())]);
    table.add_row(vec![Cell::new("Efficiency"), optional_cell(record.efficiency.as_deref())]);
    table.add_row(vec![Cell::new("ODM"), optional_cell(record.odm.as_deref())]);
    table.add_row(vec![Cell::new("Platform"), optional_cell(record.platform.as_deref())]);
    table.add_row(vec![Cell::new("Notes"), optional_cell(record.notes.as_deref())]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn tier_cell(found: &TierMatch<'_>) -> Cell {
    let tier = found.candidate.tier();
    let color = match tier.base().as_str() {
        "A" => Color::Green,
        "B" => Color::Cyan,
        "C" => Color::Yellow,
        "D" | "E" | "F" => Color::Red,
        _ => Color::White,
    };
    let cell = Cell::new(tier).fg(color).add_attribute(Attribute::Bold);
    match tier.modifier() {
        Some(TierModifier::Minus) => cell.add_attribute(Attribute::Dim),
        Some(TierModifier::Plus) | None => cell,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) if !value.is_empty() => Cell::new(value),
        _ => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
