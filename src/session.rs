use crate::generator;
use crate::options::GenerationOptions;
use crate::strength::{self, StrengthLevel};

/// One command of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    IncreaseLength,
    DecreaseLength,
    ToggleUpper,
    ToggleLower,
    ToggleDigits,
    ToggleSymbols,
    Generate,
    Copy,
    Quit,
}

impl SessionCommand {
    pub fn parse(input: &str) -> Option<SessionCommand> {
        match input.trim() {
            "+" => Some(SessionCommand::IncreaseLength),
            "-" => Some(SessionCommand::DecreaseLength),
            "u" => Some(SessionCommand::ToggleUpper),
            "l" => Some(SessionCommand::ToggleLower),
            "d" => Some(SessionCommand::ToggleDigits),
            "s" => Some(SessionCommand::ToggleSymbols),
            "g" => Some(SessionCommand::Generate),
            "c" => Some(SessionCommand::Copy),
            "q" => Some(SessionCommand::Quit),
            _ => None,
        }
    }
}

/// Holds the generation options together with the password and strength
/// derived from them. The derived pair is recomputed on every option
/// change and cannot be set independently.
pub struct Session {
    options: GenerationOptions,
    password: String,
    strength: StrengthLevel,
}

impl Session {
    pub fn new(options: GenerationOptions) -> Session {
        let mut session = Session {
            options,
            password: String::new(),
            strength: StrengthLevel::Weak,
        };
        session.regenerate();
        session
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn strength(&self) -> StrengthLevel {
        self.strength
    }

    /// Applies a state transition. `Copy` and `Quit` touch no state and
    /// are handled by the caller.
    pub fn apply(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::IncreaseLength => {
                if self.options.increase_length() {
                    self.regenerate();
                }
            }
            SessionCommand::DecreaseLength => {
                if self.options.decrease_length() {
                    self.regenerate();
                }
            }
            SessionCommand::ToggleUpper => {
                self.options.upper = !self.options.upper;
                self.regenerate();
            }
            SessionCommand::ToggleLower => {
                self.options.lower = !self.options.lower;
                self.regenerate();
            }
            SessionCommand::ToggleDigits => {
                self.options.digits = !self.options.digits;
                self.regenerate();
            }
            SessionCommand::ToggleSymbols => {
                self.options.symbols = !self.options.symbols;
                self.regenerate();
            }
            SessionCommand::Generate => self.regenerate(),
            SessionCommand::Copy | SessionCommand::Quit => {}
        }
    }

    /// What a copy command would put on the clipboard; `None` when the
    /// password is empty, in which case no clipboard call is made.
    pub fn clipboard_payload(&self) -> Option<&str> {
        if self.password.is_empty() {
            None
        } else {
            Some(&self.password)
        }
    }

    fn regenerate(&mut self) {
        self.password = generator::generate(&self.options);
        self.strength = strength::score(&self.password);
    }
}
