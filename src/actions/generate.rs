use clap::ArgMatches;
use log::debug;

use crate::actions::{copy_to_clipboard, Action};
use crate::generator;
use crate::options::GenerationOptions;
use crate::strength;

pub struct GenerateAction {
    options: GenerationOptions,
    copy: bool,
}

impl GenerateAction {
    pub fn new(matches: &ArgMatches) -> GenerateAction {
        GenerateAction {
            options: GenerationOptions::from_matches(matches),
            copy: matches.get_one::<bool>("copy").map_or(false, |v| *v),
        }
    }
}

impl Action for GenerateAction {
    fn run(&self) -> anyhow::Result<()> {
        debug!("generating with {:?}", self.options);
        let password = generator::generate(&self.options);
        if password.is_empty() {
            println!("No character classes selected - nothing to generate");
            return Ok(());
        }
        println!("{}", password);
        println!("Strength: {}", strength::score(&password));
        if self.copy {
            match copy_to_clipboard(&password) {
                Ok(()) => println!("Password copied to clipboard!"),
                Err(e) => println!("Failed to copy to clipboard: {}", e),
            }
        }
        Ok(())
    }
}
