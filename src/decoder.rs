// src/decoder.rs
//! Strict JSON decoding of the model reply. All-or-nothing: no markdown-fence
//! stripping, no repair, no partial extraction. Any future preprocessing is a
//! relaxation of this contract and must be documented as such.
//!
//! The decoder guarantees syntactic validity only; it does not check the
//! parsed value against the five documented response shapes. A structurally
//! valid but semantically wrong reply passes through as `Ok`.

use serde_json::Value;

use crate::error::DecodeError;

/// Maximum number of characters of raw model output kept in a decode error.
pub const PREVIEW_LIMIT: usize = 200;

/// Parse the raw reply as a single JSON value.
///
/// On failure the error carries a preview of at most [`PREVIEW_LIMIT`]
/// characters plus an ellipsis marker, never the full payload.
pub fn decode(raw_text: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(raw_text).map_err(|_| DecodeError {
        preview: truncate_preview(raw_text),
    })
}

fn truncate_preview(raw_text: &str) -> String {
    // Char-based so multibyte input never splits a boundary.
    raw_text.chars().take(PREVIEW_LIMIT).collect()
}
