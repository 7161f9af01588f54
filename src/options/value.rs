//! Positional argument values
//!
//! Every directive argument is one of a handful of scalars. Rendering is a
//! single match: booleans become `1`/`0`, an omitted argument renders empty,
//! everything else uses its plain decimal/string form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single positional argument of a directive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Argument omitted; keeps its slot but renders empty
    #[default]
    Null,
}

impl Value {
    /// Parse free-form text into the narrowest matching scalar
    ///
    /// `true`/`false` become booleans, integers and floats become numbers,
    /// the empty string becomes `Null`, anything else stays a string.
    pub fn parse_lenient(s: &str) -> Self {
        if s.is_empty() {
            return Value::Null;
        }
        match s {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
        if let Ok(n) = s.parse::<i64>() {
            return Value::Int(n);
        }
        if let Ok(f) = s.parse::<f64>() {
            if f.is_finite() {
                return Value::Float(f);
            }
        }
        Value::Str(s.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Coerce to an integer; numeric strings are accepted
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            Value::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Coerce to a float; integers and numeric strings are accepted
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            Value::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Coerce to a boolean; accepts `1`/`0` and `true`/`false` spellings
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Int(1) => Some(true),
            Value::Int(0) => Some(false),
            Value::Str(s) => match s.as_str() {
                "1" | "true" | "t" => Some(true),
                "0" | "false" | "f" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Coerce to text; numbers are rendered, booleans and `Null` are not
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s.clone()),
            Value::Int(_) | Value::Float(_) => Some(self.to_string()),
            Value::Bool(_) | Value::Null => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("1"),
            Value::Bool(false) => f.write_str("0"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::Null => Ok(()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// A value supplied for one directive in an option map: either a single
/// scalar (one argument) or a list that expands to positional arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    List(Vec<Value>),
    Scalar(Value),
}

impl OptionValue {
    pub fn into_args(self) -> Vec<Value> {
        match self {
            OptionValue::List(values) => values,
            OptionValue::Scalar(value) => vec![value],
        }
    }
}

macro_rules! scalar_option_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(v: $ty) -> Self {
                    OptionValue::Scalar(v.into())
                }
            }
        )*
    };
}

scalar_option_value!(Value, bool, i32, i64, u32, f32, f64, &str, String);

impl From<Vec<Value>> for OptionValue {
    fn from(values: Vec<Value>) -> Self {
        OptionValue::List(values)
    }
}
