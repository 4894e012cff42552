//! SU2 configuration files (`KEY= value` text format).
//!
//! Comments start with `%`. A value wrapped in parentheses or containing a
//! comma is a list, written back as `( a, b, c )`. Key order is preserved so
//! that a rewritten file diffs cleanly against its template.

use std::fmt;
use std::path::Path;

use crate::error::Su2Error;

/// A configuration value: a single token or a comma-separated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Scalar(String),
    List(Vec<String>),
}

impl ConfigValue {
    /// Parse a raw value as found right of the `=`.
    ///
    /// `( Wing )` is a one-item list; `( )` is an empty one.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let wrapped = raw.len() >= 2 && raw.starts_with('(') && raw.ends_with(')');
        if !wrapped && !raw.contains(',') {
            return Self::Scalar(raw.to_string());
        }
        let inner = raw.replace(['(', ')'], "");
        if inner.trim().is_empty() {
            return Self::List(Vec::new());
        }
        Self::List(inner.split(',').map(|item| item.trim().to_string()).collect())
    }

    /// The scalar text, if this is a scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// The scalar parsed as a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_str().and_then(|s| s.parse().ok())
    }

    /// The list items, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => f.write_str(s),
            Self::List(items) => write!(f, "( {} )", items.join(", ")),
        }
    }
}

/// Text goes through [`ConfigValue::parse`], so `"Wing,Flap"` becomes the
/// list it would be read back as.
impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v.to_string())
    }
}

impl From<u32> for ConfigValue {
    fn from(v: u32) -> Self {
        Self::Scalar(v.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        Self::Scalar(v.to_string())
    }
}

impl From<&[&str]> for ConfigValue {
    fn from(items: &[&str]) -> Self {
        Self::List(items.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ConfigValue {
    fn from(items: [&str; N]) -> Self {
        Self::from(&items[..])
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// An ordered SU2 configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Su2Config {
    entries: Vec<(String, ConfigValue)>,
}

impl Su2Config {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration text. `origin` is only used in error messages.
    pub fn parse_named(text: &str, origin: &str) -> Result<Self, Su2Error> {
        let mut config = Self::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('%') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(Su2Error::Parse {
                    path: origin.to_string(),
                    line: idx + 1,
                    message: format!("expected KEY= value, got \"{line}\""),
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(Su2Error::Parse {
                    path: origin.to_string(),
                    line: idx + 1,
                    message: "empty key".into(),
                });
            }
            config.set(key, ConfigValue::parse(value));
        }
        Ok(config)
    }

    /// Parse configuration text.
    pub fn parse(text: &str) -> Result<Self, Su2Error> {
        Self::parse_named(text, "<string>")
    }

    /// Read a configuration file.
    pub fn read(path: &Path) -> Result<Self, Su2Error> {
        let text = std::fs::read_to_string(path).map_err(|e| Su2Error::io(path, e))?;
        Self::parse_named(&text, &path.display().to_string())
    }

    /// Write the configuration to a file, replacing it.
    pub fn write(&self, path: &Path) -> Result<(), Su2Error> {
        std::fs::write(path, self.to_string()).map_err(|e| Su2Error::io(path, e))?;
        tracing::debug!(path = %path.display(), entries = self.len(), "wrote SU2 config");
        Ok(())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a value, replacing an existing key in place or appending a new one.
    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key.to_string(), value));
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Iterate over entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Su2Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{key}= {value}")?;
        }
        Ok(())
    }
}
