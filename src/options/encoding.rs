//! Binary-safe storage for free-text directive arguments
//!
//! Watermark text, style sheets, URLs and filenames are stored as standard
//! (padded) base64, the form the proxy decodes for these arguments.

use base64::{engine::general_purpose::STANDARD, Engine};

pub(crate) fn encode_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Best-effort read-back: anything that is not base64 of UTF-8 yields `None`
pub(crate) fn decode_text(encoded: &str) -> Option<String> {
    let bytes = STANDARD.decode(encoded).ok()?;
    String::from_utf8(bytes).ok()
}

pub(crate) fn percent_encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

pub(crate) fn percent_decode(encoded: &str) -> Option<String> {
    urlencoding::decode(encoded).ok().map(|s| s.into_owned())
}
