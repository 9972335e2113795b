use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelveilError {
    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents an error when encrypting the message, caused by the cipher or the random source
    #[error("Encryption error")]
    EncryptionError,

    /// Represents an authentication failure when decrypting. Deliberately generic:
    /// a wrong password and corrupted data must not be distinguishable
    #[error("invalid password or corrupted data")]
    DecryptionError,

    /// Represents an encrypted payload that is too small to even contain a nonce
    #[error("ciphertext too short")]
    CiphertextTooShort,

    /// Represents a payload that does not fit into the carrier image
    #[error(
        "Capacity error: the {0}x{1} carrier image holds at most {2} bytes, but {3} bytes were provided"
    )]
    ImageCapacityError(u32, u32, usize, usize),

    /// Represents a payload whose size cannot be represented by the length header
    #[error("Capacity error: a payload of {0} bytes exceeds the length header limit")]
    PayloadTooLarge(usize),

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
