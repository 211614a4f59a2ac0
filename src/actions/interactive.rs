use clap::ArgMatches;
use log::debug;
use rustyline::DefaultEditor;

use crate::actions::{copy_to_clipboard, Action};
use crate::options::GenerationOptions;
use crate::session::{Session, SessionCommand};
use crate::ui;

pub struct InteractiveAction {
    options: GenerationOptions,
}

impl InteractiveAction {
    pub fn new(matches: &ArgMatches) -> InteractiveAction {
        InteractiveAction {
            options: GenerationOptions::from_matches(matches),
        }
    }
}

impl Action for InteractiveAction {
    fn run(&self) -> anyhow::Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut session = Session::new(self.options.clone());

        println!("Commands: + / - adjust length, u l d s toggle classes, g new password, c copy, q quit");
        ui::show_session(&session);

        loop {
            let line = match ui::read_command(&mut rl, "> ") {
                Some(line) => line,
                None => break,
            };
            let command = match SessionCommand::parse(&line) {
                Some(command) => command,
                None => {
                    if !line.trim().is_empty() {
                        println!("Unknown command '{}'. Use + - u l d s g c q.", line.trim());
                    }
                    continue;
                }
            };
            debug!("command: {:?}", command);
            match command {
                SessionCommand::Quit => break,
                SessionCommand::Copy => {
                    // Empty password: no clipboard call, no message.
                    if let Some(password) = session.clipboard_payload() {
                        match copy_to_clipboard(password) {
                            Ok(()) => println!("Password copied to clipboard!"),
                            Err(e) => println!("Failed to copy to clipboard: {}", e),
                        }
                    }
                }
                command => {
                    session.apply(command);
                    ui::show_session(&session);
                }
            }
        }
        Ok(())
    }
}
