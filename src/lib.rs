// imgproxy URL builder library
//
// Builds processing-option paths and signed URLs for an imgproxy server.

pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod url_builder;

pub use error::{Error, Result};
pub use options::{OneOrMany, OptionValue, Options, Value};
pub use url_builder::{SigningKey, UrlBuilder};
