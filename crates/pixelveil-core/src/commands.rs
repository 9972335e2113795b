use std::path::Path;

use crate::PixelveilError;

/// hides `message` inside the image at `image` and writes the result to `output`
pub fn hide(
    image: &Path,
    output: &Path,
    message: &str,
    password: Option<String>,
) -> Result<(), PixelveilError> {
    crate::api::hide::prepare()
        .with_image(image)
        .with_output(output)
        .with_message(message)
        .use_password(password)
        .execute()
}

/// recovers the message hidden inside the image at `secret_media`
pub fn unveil(secret_media: &Path, password: Option<String>) -> Result<String, PixelveilError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .using_password(password)
        .execute()
}
