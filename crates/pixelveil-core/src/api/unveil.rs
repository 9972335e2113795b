use std::path::{Path, PathBuf};

use crate::media;
use crate::PixelveilError;

use super::Password;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    password: Password,
}

impl UnveilApi {
    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Set the password used for encrypting the data
    /// If `None` is passed, the payload is returned as plain text
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and return the recovered message
    pub fn execute(self) -> Result<String, PixelveilError> {
        let Some(secret_media) = self.secret_media else {
            return Err(PixelveilError::CarrierNotSet);
        };

        let image = media::load_image(&secret_media)?;
        crate::unveil_message(&image, self.password.as_str())
    }
}
