//! Selector-scoped style blocks.

use std::borrow::Cow;
use std::fmt;

/// Escapes every `:` in `selector` as `\:`.
///
/// Utility class names carry variant prefixes like `sm:p-4`, which are only
/// valid selectors once their colons are escaped.
pub fn escape_selector(selector: &str) -> Cow<'_, str> {
    if selector.contains(':') {
        Cow::Owned(selector.replace(':', "\\:"))
    } else {
        Cow::Borrowed(selector)
    }
}

/// Built declaration text, optionally wrapped in `selector { ... }`.
///
/// Body lines are indented by two spaces inside the block. A style without a
/// selector builds to its body unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style {
    selector: Option<String>,
    body: String,
    escape: bool,
}

impl Style {
    /// A block under `selector`. Escaping is on by default.
    pub fn new(selector: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            body: body.into(),
            escape: true,
        }
    }

    /// A style with no selector.
    pub fn bare(body: impl Into<String>) -> Self {
        Self {
            selector: None,
            body: body.into(),
            escape: true,
        }
    }

    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn build(&self) -> String {
        let Some(selector) = self.selector.as_deref() else {
            return self.body.clone();
        };

        let header = if self.escape {
            escape_selector(selector)
        } else {
            Cow::Borrowed(selector)
        };

        if self.body.is_empty() {
            return format!("{header} {{\n}}");
        }

        let body: Vec<String> = self.body.lines().map(|line| format!("  {line}")).collect();
        format!("{header} {{\n{}\n}}", body.join("\n"))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_only_touches_colons() {
        assert_eq!(escape_selector(".sm:hover:p-4"), ".sm\\:hover\\:p-4");
        assert!(matches!(escape_selector(".p-4"), Cow::Borrowed(".p-4")));
    }

    #[test]
    fn empty_body_builds_empty_block() {
        assert_eq!(Style::new(".p-4", "").build(), ".p-4 {\n}");
        assert_eq!(Style::bare("").build(), "");
    }
}
