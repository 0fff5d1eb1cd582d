//! Query-string builder for API requests.
//!
//! Parameters are kept in insertion order. A parameter whose value is `None`
//! is remembered but never rendered, so optional filters can be passed straight
//! through without branching at every call site. Builder methods return
//! `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use dabs_explorer::QueryParams;
//! let qs = QueryParams::new()
//!     .set("search", "red wine")
//!     .set_opt("category", None::<String>)
//!     .set("limit", 20)
//!     .to_query_string();
//! assert_eq!(qs, "search=red%20wine&limit=20");
//! ```

use std::fmt;

/// A scalar query-parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        ParamValue::Text(v.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v.into())
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(n) => ParamValue::Int(n),
            Err(_) => ParamValue::Text(v.to_string()),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// Ordered mapping from parameter name to optional value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter to a present value.
    pub fn set<V: Into<ParamValue>>(&mut self, key: &str, value: V) -> &mut Self {
        self.put(key, Some(value.into()))
    }

    /// Set a parameter that may be absent. `None` values are omitted from the
    /// rendered query string.
    pub fn set_opt<V: Into<ParamValue>>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        self.put(key, value.map(Into::into))
    }

    fn put(&mut self, key: &str, value: Option<ParamValue>) -> &mut Self {
        // Re-setting a key replaces it in place so each key renders at most once.
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
        self
    }

    /// Look up the value of a present parameter.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Iterate over the parameters that will actually be sent.
    pub fn present(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v)))
    }

    /// True when no parameter survives filtering.
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }

    /// Render `key=value` pairs joined by `&`, percent-encoding both sides.
    ///
    /// Returns an empty string when nothing survives filtering.
    pub fn to_query_string(&self) -> String {
        self.present()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(&v.to_string())
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the query string to `base`, adding `?` only if needed.
    pub fn append_to(&self, base: &str) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            base.to_string()
        } else {
            format!("{}?{}", base, qs)
        }
    }
}
