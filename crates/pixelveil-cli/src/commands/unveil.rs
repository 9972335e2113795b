use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils a hidden message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to encrypt the message; prompted for interactively when absent
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub image: PathBuf,

    /// Write the recovered message to this file instead of stdout
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let password = if self.password.is_none() {
            crate::cli::ask_for_password(false)
        } else {
            self.password
        };

        let message = pixelveil_core::commands::unveil(&self.image, password)?;

        match self.output_file {
            Some(path) => std::fs::write(path, message)?,
            None => println!("{message}"),
        }

        Ok(())
    }
}
