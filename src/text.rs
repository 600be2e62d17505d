//! Latin-1 view of raw payload bytes.
//!
//! AX.25 does not prescribe a payload encoding; by convention monitoring
//! software shows each octet as the character with the same code point.
//! These conversions are lossless in both directions for code points up to
//! U+00FF.

use alloc::{string::String, vec::Vec};

use crate::ValidationError;

/// The character-per-octet reading of `bytes`.
pub fn from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

/// The octet-per-character writing of `text`. Characters above U+00FF have
/// no single-octet representation and are rejected.
pub fn to_bytes(text: &str) -> Result<Vec<u8>, ValidationError> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).map_err(|_| ValidationError::TextNotLatin1))
        .collect()
}
