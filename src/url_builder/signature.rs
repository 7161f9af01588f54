//! URL signing with HMAC-SHA256
//!
//! The proxy authenticates a URL by recomputing:
//! ```text
//! signature = base64url(HMAC-SHA256(key, salt + path))
//! ```
//! where `path` is everything after the signature segment, starting with `/`.
//! Key and salt are configured as hex strings and used as raw bytes.

use std::fmt;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Decoded signing credentials
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey {
    key: Vec<u8>,
    salt: Vec<u8>,
}

impl SigningKey {
    /// Decode hex-encoded key and salt
    ///
    /// Fails with [`Error::InvalidHex`] instead of producing signatures the
    /// proxy would reject.
    pub fn from_hex(key: &str, salt: &str) -> Result<Self> {
        let key = hex::decode(key.trim()).map_err(|e| Error::invalid_hex("key", e))?;
        let salt = hex::decode(salt.trim()).map_err(|e| Error::invalid_hex("salt", e))?;
        Ok(Self { key, salt })
    }

    pub fn from_bytes(key: impl Into<Vec<u8>>, salt: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            salt: salt.into(),
        }
    }

    /// Sign a path (`/options/plain/source`), returning the unpadded
    /// base64url signature segment
    pub fn sign(&self, path: &str) -> String {
        base64_url_encode(&self.compute_hmac(path))
    }

    /// Check a signature segment against a path
    pub fn verify(&self, path: &str, signature: &str) -> bool {
        constant_time_compare(signature, &self.sign(path))
    }

    fn compute_hmac(&self, path: &str) -> Vec<u8> {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC can take key of any size");
        mac.update(&self.salt);
        mac.update(path.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("key", &"<redacted>")
            .field("salt", &"<redacted>")
            .finish()
    }
}

/// Base64url encode (URL-safe, no padding)
pub(crate) fn base64_url_encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
