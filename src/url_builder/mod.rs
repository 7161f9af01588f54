//! Proxy URL assembly
//!
//! Two URL shapes are produced:
//!
//! ## Plain source
//! ```text
//! {base}/{signature}/{options}/plain/{source}[@{extension}]
//! ```
//!
//! ## Base64 source
//! ```text
//! {base}/{signature}/{options}/{base64url(source)}[.{extension}]
//! ```
//!
//! `{signature}` is `unsafe` unless a key and salt are configured, in which
//! case it is the HMAC-SHA256 of everything that follows it.

pub mod signature;

use crate::config::ProxyConfig;
use crate::error::Result;
use crate::options::Options;

pub use signature::SigningKey;

use signature::base64_url_encode;

/// Signature segment used when no signing credentials are configured
pub const UNSAFE_SIGNATURE: &str = "unsafe";

/// Builds (and optionally signs) proxy URLs
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: String,
    signing: Option<SigningKey>,
    encode_source: bool,
    custom_signature: Option<String>,
}

impl UrlBuilder {
    /// Create an unsigned builder; source URLs are base64-embedded by default
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            signing: None,
            encode_source: true,
            custom_signature: None,
        }
    }

    /// Attach hex-encoded signing credentials
    ///
    /// An empty key or salt leaves the builder unsigned. Malformed hex fails
    /// here, before any URL is built.
    pub fn with_signing(mut self, key: &str, salt: &str) -> Result<Self> {
        self.signing = if key.trim().is_empty() || salt.trim().is_empty() {
            None
        } else {
            Some(SigningKey::from_hex(key, salt)?)
        };
        Ok(self)
    }

    pub fn with_signing_key(mut self, signing: SigningKey) -> Self {
        self.signing = Some(signing);
        self
    }

    /// Embed source URLs as base64 (`true`) or as `plain/...` (`false`)
    pub fn with_encoded_source(mut self, encode: bool) -> Self {
        self.encode_source = encode;
        self
    }

    /// Use a fixed signature segment instead of `unsafe` or a computed HMAC
    pub fn with_custom_signature(mut self, signature: impl Into<String>) -> Self {
        self.custom_signature = Some(signature.into());
        self
    }

    pub fn from_config(config: &ProxyConfig) -> Result<Self> {
        let mut builder = Self::new(&config.base_url).with_encoded_source(config.encode_source);

        if let (Some(key), Some(salt)) = (&config.key, &config.salt) {
            builder = builder.with_signing(key, salt)?;
        }
        if let Some(signature) = &config.custom_signature {
            builder = builder.with_custom_signature(signature.clone());
        }

        Ok(builder)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_signed(&self) -> bool {
        self.signing.is_some()
    }

    pub fn encodes_source(&self) -> bool {
        self.encode_source
    }

    /// Build the full proxy URL for `source_url`
    ///
    /// `options` defaults to an empty set. `extension` selects the output
    /// format through the URL rather than a `format` directive.
    ///
    /// ```
    /// use imgproxy_url::{Options, UrlBuilder};
    ///
    /// let builder = UrlBuilder::new("https://p.example.com/").with_encoded_source(false);
    /// let mut options = Options::new();
    /// options.set_width(300);
    ///
    /// assert_eq!(
    ///     builder.build_url("https://e.com/i.jpg", Some(&options), None),
    ///     "https://p.example.com/unsafe/width:300/plain/https://e.com/i.jpg"
    /// );
    /// ```
    pub fn build_url(
        &self,
        source_url: &str,
        options: Option<&Options>,
        extension: Option<&str>,
    ) -> String {
        let path = self.build_path(source_url, options, extension);
        let signature = self.signature(&path);

        tracing::debug!(
            signed = self.signing.is_some(),
            encoded = self.encode_source,
            path_len = path.len(),
            "Built proxy URL"
        );

        format!("{}/{}{}", self.base_url, signature, path)
    }

    /// The path part that gets signed: `/{options}/...source...`
    pub fn build_path(
        &self,
        source_url: &str,
        options: Option<&Options>,
        extension: Option<&str>,
    ) -> String {
        let rendered = options.map(Options::to_string).unwrap_or_default();

        let mut path = String::with_capacity(rendered.len() + source_url.len() + 16);
        if !rendered.is_empty() {
            path.push('/');
            path.push_str(&rendered);
        }

        if self.encode_source {
            path.push('/');
            path.push_str(&base64_url_encode(source_url.as_bytes()));
            if let Some(ext) = extension {
                path.push('.');
                path.push_str(ext);
            }
        } else {
            path.push_str("/plain/");
            path.push_str(&escape_plain_source(source_url));
            if let Some(ext) = extension {
                path.push('@');
                path.push_str(ext);
            }
        }

        path
    }

    /// Signature segment for an already assembled path
    pub fn signature(&self, path: &str) -> String {
        if let Some(custom) = &self.custom_signature {
            return custom.clone();
        }
        match &self.signing {
            Some(signing) => signing.sign(path),
            None => UNSAFE_SIGNATURE.to_string(),
        }
    }
}

/// `?` and `@` are meaningful to the proxy in plain sources; nothing else
/// is escaped
fn escape_plain_source(source_url: &str) -> String {
    if !source_url.contains(['?', '@']) {
        return source_url.to_string();
    }
    source_url.replace('?', "%3F").replace('@', "%40")
}
