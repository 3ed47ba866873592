//! Bare inline at-rules such as `@apply font-bold;`.

use crate::error::StyleError;
use crate::parser;
use std::fmt;
use std::str::FromStr;

/// An inline at-rule: `@name value;` or `@name;`.
///
/// The name is stored without its leading `@`. A value that trims to nothing
/// is stored as `None`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InlineAtRule {
    name: String,
    value: Option<String>,
}

impl InlineAtRule {
    /// Creates an at-rule with a trailing value.
    ///
    /// An at-rule value cannot contain `;`, so anything from the first `;` on
    /// is dropped. The rest is trimmed.
    pub fn new(name: impl Into<String>, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        let value = value.split(';').next().unwrap_or(value).trim();
        Self {
            name: name.into(),
            value: (!value.is_empty()).then(|| value.to_string()),
        }
    }

    /// Creates a bare directive with no value.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Serializes to `@name value;`, or `@name;` when there is no value.
    pub fn build(&self) -> String {
        match &self.value {
            Some(value) => format!("@{} {};", self.name, value),
            None => format!("@{};", self.name),
        }
    }

    /// Parses a single at-rule, returning `None` when `text` is not one.
    ///
    /// Surrounding whitespace and a trailing `;` are ignored.
    ///
    /// ```rust
    /// use wstyle::InlineAtRule;
    ///
    /// let rule = InlineAtRule::parse("@apply font-bold text-md;").unwrap();
    /// assert_eq!(rule.name(), "apply");
    /// assert_eq!(rule.value(), Some("font-bold text-md"));
    ///
    /// assert!(InlineAtRule::parse("padding: 1rem").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FromStr for InlineAtRule {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::at_rule(s).map(|raw| Self {
            name: raw.name.to_string(),
            value: raw.value.map(str::to_string),
        })
    }
}

impl fmt::Display for InlineAtRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
