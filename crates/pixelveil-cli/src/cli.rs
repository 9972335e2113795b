use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
}

/// interactive password prompt, empty input means no password
pub fn ask_for_password(confirmation: bool) -> Option<String> {
    let prompt = dialoguer::Password::new()
        .with_prompt("Password")
        .allow_empty_password(true);
    let prompt = if confirmation {
        prompt.with_confirmation("Repeat password", "Error: the passwords don't match.")
    } else {
        prompt
    };

    match prompt.interact() {
        Ok(password) if !password.is_empty() => Some(password),
        _ => None,
    }
}
