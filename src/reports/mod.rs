use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keytap::config::KeypadConfig;

pub fn keypad(config: &KeypadConfig) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Letters").fg(Color::Cyan),
    ]);

    if let Some(col) = table.column_mut(0) {
        col.set_cell_alignment(CellAlignment::Center);
    }

    for digit in config.digits() {
        let letters: String = config.letter_group(digit).unwrap_or(&[]).iter().collect();
        table.add_row(vec![Cell::new(digit), Cell::new(letters)]);
    }

    table.add_row(vec![
        Cell::new("separator").add_attribute(Attribute::Bold),
        Cell::new(display_symbol(config.separator())),
    ]);
    table.add_row(vec![
        Cell::new("backspace").add_attribute(Attribute::Bold),
        Cell::new(display_symbol(config.backspace())),
    ]);
    table.add_row(vec![
        Cell::new("terminator").add_attribute(Attribute::Bold),
        Cell::new(display_symbol(config.terminator())),
    ]);

    println!("\n{}", table);
}

pub fn decoded(results: &[(String, String)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Sequence").add_attribute(Attribute::Bold),
        Cell::new("Text").fg(Color::Green),
    ]);

    for (sequence, text) in results {
        table.add_row(vec![Cell::new(sequence), Cell::new(text)]);
    }

    println!("\n{}", table);
}

fn display_symbol(symbol: char) -> String {
    if symbol == ' ' {
        "<space>".to_string()
    } else {
        symbol.to_string()
    }
}
