use std::path::{Path, PathBuf};

use crate::media;
use crate::PixelveilError;

use super::Password;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, the message is hidden unencrypted
    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    pub fn execute(self) -> Result<(), PixelveilError> {
        let Some(image) = self.image else {
            return Err(PixelveilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PixelveilError::TargetNotSet);
        };
        let Some(message) = self.message else {
            return Err(PixelveilError::MissingMessage);
        };

        let carrier = media::load_image(&image)?;
        let secret = crate::hide_message(&carrier, &message, self.password.as_str())?;

        media::save_image(&secret, &output)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::test_utils::prepare_carrier_file;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = prepare_carrier_file(temp_dir.path());

        crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(&carrier)
            .with_password("SuperSecret42")
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide message in image");
    }

    #[test]
    fn should_complain_about_a_missing_message() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = prepare_carrier_file(temp_dir.path());

        let result = crate::api::hide::prepare()
            .with_image(&carrier)
            .with_output(temp_dir.path().join("out.png"))
            .execute();

        assert!(matches!(result, Err(crate::PixelveilError::MissingMessage)));
    }

    #[test]
    fn should_complain_about_a_missing_carrier() {
        let result = crate::api::hide::prepare()
            .with_message("message without a home")
            .with_output("/tmp/out.png")
            .execute();

        assert!(matches!(result, Err(crate::PixelveilError::CarrierNotSet)));
    }
}
