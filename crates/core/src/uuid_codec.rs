//! Conversion between textual movie identifiers and their stored form.
//!
//! Externally a movie is addressed by a hyphenated UUID string
//! (`"0f8fad5b-d9cb-469f-a165-70867728950e"`). In storage the same identifier
//! is a `BYTEA` holding the 16 raw bytes, which keeps the primary key and the
//! junction table's foreign key compact.
//!
//! Every place an identifier crosses into or out of storage goes through this
//! module; it is the only identifier validation the catalog performs.

use uuid::Uuid;

use crate::error::CoreError;
use crate::types::BinaryUuid;

/// Length of the hyphenated text form.
const HYPHENATED_LEN: usize = 36;

/// Encode a hyphenated UUID string into its 16-byte storage form.
///
/// Letter case is ignored. The simple, braced and URN forms are rejected so
/// that [`decode`] always reverses this function for canonical input.
///
/// # Examples
///
/// ```
/// use movies_core::uuid_codec::{decode, encode};
///
/// let text = "0f8fad5b-d9cb-469f-a165-70867728950e";
/// assert_eq!(decode(&encode(text).unwrap()), text);
/// assert!(encode("not-a-uuid").is_err());
/// ```
pub fn encode(text: &str) -> Result<BinaryUuid, CoreError> {
    if text.len() != HYPHENATED_LEN {
        return Err(CoreError::InvalidIdentifier(text.to_string()));
    }
    Uuid::try_parse(text)
        .map(|uuid| *uuid.as_bytes())
        .map_err(|_| CoreError::InvalidIdentifier(text.to_string()))
}

/// Decode a 16-byte identifier into lowercase hyphenated text.
pub fn decode(bytes: &BinaryUuid) -> String {
    Uuid::from_bytes(*bytes).hyphenated().to_string()
}

/// Decode an identifier column value read back from storage.
///
/// Fails when the value is not exactly 16 bytes long.
pub fn decode_slice(bytes: &[u8]) -> Result<String, CoreError> {
    to_binary(bytes).map(|binary| decode(&binary))
}

/// Narrow a storage column value to a fixed-width identifier.
pub fn to_binary(bytes: &[u8]) -> Result<BinaryUuid, CoreError> {
    BinaryUuid::try_from(bytes).map_err(|_| {
        CoreError::InvalidIdentifier(format!("expected 16 bytes, got {}", bytes.len()))
    })
}

/// Mint a fresh random identifier for a new movie.
pub fn generate() -> BinaryUuid {
    *Uuid::new_v4().as_bytes()
}
