use comfy_table::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::session::Session;
use crate::strength::StrengthLevel;

/// Reads one line of input; `None` on Ctrl-C or Ctrl-D.
pub fn read_command(rl: &mut DefaultEditor, prompt: &str) -> Option<String> {
    match rl.readline(prompt) {
        Ok(line) => Some(line),
        Err(ReadlineError::Interrupted) => None,
        Err(ReadlineError::Eof) => None,
        Err(err) => {
            println!("Error: {:?}", err);
            None
        }
    }
}

pub fn show_session(session: &Session) {
    let mut table = Table::new();
    let label_cell = |label: &str| -> Cell { Cell::new(label).fg(Color::Green) };
    let flag_cell = |on: bool| -> Cell { Cell::new(if on { "on" } else { "off" }) };
    let options = session.options();

    table.add_row(vec![
        label_cell("Password"),
        Cell::new(session.password()).fg(Color::Yellow),
    ]);
    table.add_row(vec![
        label_cell("Strength"),
        Cell::new(session.strength().to_string()).fg(strength_color(session.strength())),
    ]);
    table.add_row(vec![
        label_cell("Length"),
        Cell::new(options.length.to_string()),
    ]);
    table.add_row(vec![label_cell("Uppercase (u)"), flag_cell(options.upper)]);
    table.add_row(vec![label_cell("Lowercase (l)"), flag_cell(options.lower)]);
    table.add_row(vec![label_cell("Digits (d)"), flag_cell(options.digits)]);
    table.add_row(vec![label_cell("Symbols (s)"), flag_cell(options.symbols)]);
    println!("{table}");
}

fn strength_color(level: StrengthLevel) -> Color {
    match level {
        StrengthLevel::Weak => Color::Red,
        StrengthLevel::Medium => Color::Yellow,
        StrengthLevel::Strong => Color::Green,
    }
}
