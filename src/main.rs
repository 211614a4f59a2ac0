use clap::{arg, value_parser, Arg, ArgAction, Command};

use crate::actions::Action;

mod actions;
mod generator;
mod options;
mod session;
mod strength;
mod ui;

fn cli() -> Command {
    Command::new("passforge")
        .about("A random password generator with a strength rating and clipboard copy")
        .subcommand_required(false)
        .arg_required_else_help(false)
        .subcommand(
            Command::new("generate")
                .about("Generates a password with the given options.")
                .arg(length_arg())
                .args(class_args())
                .arg(
                    arg!(-c --copy "Copy the generated password to the clipboard.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("strength")
                .about("Estimates the strength of a password.")
                .arg(arg!(<PASSWORD> "The password to rate."))
                .arg_required_else_help(true),
        )
        .subcommand(
            Command::new("interactive")
                .about("Starts an interactive session for tuning the options.")
                .arg(length_arg())
                .args(class_args()),
        )
}

fn length_arg() -> Arg {
    arg!(-l --length <LENGTH> "Password length, between 4 and 32.")
        .value_parser(value_parser!(usize))
        .required(false)
}

fn class_args() -> Vec<Arg> {
    vec![
        arg!(--"no-upper" "Leave out uppercase letters.").action(ArgAction::SetTrue),
        arg!(--"no-lower" "Leave out lowercase letters.").action(ArgAction::SetTrue),
        arg!(--"no-digits" "Leave out digits.").action(ArgAction::SetTrue),
        arg!(-s --symbols "Include symbols.").action(ArgAction::SetTrue),
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("generate", sub_matches)) => actions::generate::GenerateAction::new(sub_matches).run()?,
        Some(("strength", sub_matches)) => actions::strength::StrengthAction::new(sub_matches).run()?,
        Some(("interactive", sub_matches)) => {
            actions::interactive::InteractiveAction::new(sub_matches).run()?
        }
        _ => {
            let password = generator::generate(&options::GenerationOptions::default());
            match actions::copy_to_clipboard(&password) {
                Ok(()) => println!("Password - also copied to clipboard: {}", password),
                Err(e) => {
                    println!("Password: {}", password);
                    println!("Failed to copy to clipboard: {}", e);
                }
            }
            println!("Strength: {}", strength::score(&password));
        }
    }
    Ok(())
}
