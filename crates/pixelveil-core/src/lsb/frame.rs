//! The length framing of the embedded bitstream: an 8-byte zero-padded
//! ASCII decimal header in front of the raw payload bytes. The header is the
//! only place the payload length lives.

/// length header width in bytes, 64 bits on the wire
pub const LENGTH_HEADER_LEN: usize = 8;

/// exclusive upper bound of what the 8-digit decimal header can represent
pub const MAX_HEADER_VALUE: usize = 100_000_000;

/// plausibility ceiling applied when parsing a header back; anything above
/// is treated as "no message present"
pub const UNVEIL_LENGTH_CEILING: usize = 1_000_000;

/// renders `payload_len` as the zero-padded decimal header
///
/// The caller must have bounded `payload_len` below [`MAX_HEADER_VALUE`].
pub(crate) fn length_header(payload_len: usize) -> [u8; LENGTH_HEADER_LEN] {
    debug_assert!(payload_len < MAX_HEADER_VALUE);

    let mut header = [0u8; LENGTH_HEADER_LEN];
    header.copy_from_slice(format!("{payload_len:08}").as_bytes());
    header
}

/// parses a header read back from a carrier image
///
/// `None` means the bits do not look like a message: not decimal digits,
/// zero, or beyond the plausibility ceiling.
pub(crate) fn parse_length_header(header: &[u8; LENGTH_HEADER_LEN]) -> Option<usize> {
    let digits = std::str::from_utf8(header).ok()?;
    let payload_len = digits.parse::<usize>().ok()?;

    if (1..=UNVEIL_LENGTH_CEILING).contains(&payload_len) {
        Some(payload_len)
    } else {
        None
    }
}
