//! Processing options
//!
//! [`Options`] accumulates directives (`width`, `resize`, `watermark_text`, ...)
//! and renders them in the proxy's path grammar:
//!
//! ```text
//! width:300/height:400/resize:fill:300:400:0/gravity:sm
//! ```
//!
//! Directives are separated by `/`, arguments by `:`. Each directive keeps
//! the position where it was first set; setting it again replaces its
//! arguments wholesale.
//!
//! # Example
//!
//! ```
//! use imgproxy_url::Options;
//!
//! let mut options = Options::new();
//! options.set_enlarge(true).set_auto_rotate(false).set_strip_metadata(true);
//! assert_eq!(options.to_string(), "enlarge:1/auto_rotate:0/strip_metadata:1");
//! ```

mod directives;
mod dispatch;
mod encoding;
pub mod value;

use std::fmt;

pub use directives::OneOrMany;
pub use value::{OptionValue, Value};

/// Separator between rendered directives
pub const OPTION_SEPARATOR: char = '/';

/// Separator between the arguments of one directive
pub const ARGUMENT_SEPARATOR: char = ':';

/// Ordered set of processing directives
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    entries: Vec<(String, Vec<Value>)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from ordered `(name, value)` pairs
    ///
    /// Names may be written in `snake_case`, `camelCase`, `PascalCase` or
    /// `kebab-case`; each is routed to the matching typed setter. A list
    /// value supplies positional arguments, a scalar supplies one. Unknown
    /// names and entries whose arguments don't fit the setter are skipped.
    ///
    /// ```
    /// use imgproxy_url::{OptionValue, Options};
    ///
    /// let options = Options::from_map([
    ///     ("width", OptionValue::from(300)),
    ///     ("height", 400.into()),
    ///     ("resizingType", "fill".into()),
    ///     ("gravity", "sm".into()),
    /// ]);
    /// assert_eq!(options.to_string(), "width:300/height:400/resizing_type:fill/gravity:sm");
    /// ```
    pub fn from_map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        let mut options = Self::new();
        for (key, value) in pairs {
            options.apply(key.as_ref(), value);
        }
        options
    }

    /// Route one `(name, value)` pair to its typed setter
    ///
    /// Same rules as [`Options::from_map`]; use it to layer entries on top
    /// of existing options.
    pub fn apply(&mut self, key: &str, value: impl Into<OptionValue>) -> &mut Self {
        dispatch::apply(self, key, value.into().into_args());
        self
    }

    /// Set an arbitrary directive verbatim
    ///
    /// Escape hatch for proxy options without a typed setter. Arguments are
    /// stored exactly as given, including trailing `Null`s.
    pub fn directive<I, V>(&mut self, name: impl Into<String>, args: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let name = name.into();
        let args = args.into_iter().map(Into::into).collect();
        self.set(&name, args)
    }

    /// Arguments stored for `name`, in positional order
    pub fn get(&self, name: &str) -> Option<&[Value]> {
        self.position(name).map(|i| self.entries[i].1.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove a directive, returning its arguments
    pub fn remove(&mut self, name: &str) -> Option<Vec<Value>> {
        self.position(name).map(|i| self.entries.remove(i).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Directives in the order they were first set
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.entries
            .iter()
            .map(|(name, args)| (name.as_str(), args.as_slice()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    fn first(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(|args| args.first())
    }

    /// Replace (or append) a directive's argument list
    fn set(&mut self, name: &str, args: Vec<Value>) -> &mut Self {
        match self.position(name) {
            Some(i) => self.entries[i].1 = args,
            None => self.entries.push((name.to_string(), args)),
        }
        self
    }

    /// Like [`Options::set`], but omitted trailing arguments are dropped so
    /// only the supplied prefix is emitted. Gaps before a supplied argument
    /// stay as empty slots.
    fn set_positional(&mut self, name: &str, mut args: Vec<Value>) -> &mut Self {
        while args.last().is_some_and(Value::is_null) {
            args.pop();
        }
        self.set(name, args)
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, args)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", OPTION_SEPARATOR)?;
            }
            f.write_str(name)?;

            let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
            if rendered.iter().any(|arg| !arg.is_empty()) {
                write!(f, "{}", ARGUMENT_SEPARATOR)?;
                f.write_str(&rendered.join(&ARGUMENT_SEPARATOR.to_string()))?;
            }
        }
        Ok(())
    }
}
