use clap::ArgMatches;

use crate::actions::Action;
use crate::strength;

pub struct StrengthAction {
    password: String,
}

impl StrengthAction {
    pub fn new(matches: &ArgMatches) -> StrengthAction {
        StrengthAction {
            password: matches
                .get_one::<String>("PASSWORD")
                .expect("required")
                .to_string(),
        }
    }
}

impl Action for StrengthAction {
    fn run(&self) -> anyhow::Result<()> {
        println!("Strength: {}", strength::score(&self.password));
        Ok(())
    }
}
