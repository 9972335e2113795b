use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a text message in a PNG, JPEG or GIF image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the message
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier image file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Final image will be stored as file (always PNG)
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// The text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        pixelveil_core::commands::hide(
            &self.image,
            &self.write_to_file,
            &self.message,
            self.password,
        )
    }
}
