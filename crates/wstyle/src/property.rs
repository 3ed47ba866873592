//! CSS declarations: one or more property names sharing a value.
//!
//! A [`Property`] is the unit a utility generator emits: `padding: 1rem;`, or a
//! grouped `padding-left`/`padding-right` pair that shares `1rem`. Properties
//! build to text under [`BuildOptions`], parse back from text, and can be
//! promoted into a selector-scoped [`Style`] block.

use crate::error::StyleError;
use crate::options::BuildOptions;
use crate::parser;
use crate::statement::Parsed;
use crate::style::Style;
use std::fmt;
use std::str::FromStr;

/// The ordered names of a [`Property`].
///
/// Converts from a single name or from any list of names, so both
/// `Property::new("padding", ..)` and
/// `Property::new(["padding-left", "padding-right"], ..)` work.
///
/// There is no empty default; a property always has a name.
///
/// ```compile_fail
/// let names = wstyle::PropertyNames::default();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyNames(Vec<String>);

impl From<&str> for PropertyNames {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for PropertyNames {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<Vec<String>> for PropertyNames {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<Vec<&str>> for PropertyNames {
    fn from(names: Vec<&str>) -> Self {
        Self(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for PropertyNames {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|name| name.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PropertyNames {
    fn from(names: [&str; N]) -> Self {
        Self(names.iter().map(|name| name.to_string()).collect())
    }
}

/// A declaration such as `padding: 1rem;`.
///
/// `value` may be absent: the property is then declared but not
/// serializable, and [`build`](Self::build) returns an empty string.
///
/// The `comment` is a write-only annotation. It only shows up in expanded
/// [`build`](Self::build) output, is never recovered by [`parse`](Self::parse),
/// and is ignored by `PartialEq`.
#[derive(Clone, Debug)]
pub struct Property {
    names: Vec<String>,
    value: Option<String>,
    comment: Option<String>,
}

impl Property {
    /// Creates a property with a value.
    ///
    /// # Panics
    ///
    /// Panics if `names` is an empty list.
    pub fn new(names: impl Into<PropertyNames>, value: impl Into<String>) -> Self {
        let mut property = Self::unset(names);
        property.value = Some(value.into());
        property
    }

    /// Creates a property that has names but no value.
    ///
    /// # Panics
    ///
    /// Panics if `names` is an empty list.
    pub fn unset(names: impl Into<PropertyNames>) -> Self {
        let PropertyNames(names) = names.into();
        assert!(!names.is_empty(), "a property needs at least one name");
        Self {
            names,
            value: None,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Appends ` !important` to the value unless it already ends in it.
    /// A property without a value is left unchanged.
    pub fn with_important(mut self) -> Self {
        if let Some(value) = self.value.as_mut().filter(|value| !parser::is_important(value)) {
            value.push_str(" !important");
        }
        self
    }

    /// The first name; the only one for the common single-name case.
    pub fn name(&self) -> &str {
        &self.names[0]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Whether the value ends in `!important`.
    pub fn is_important(&self) -> bool {
        self.value.as_deref().is_some_and(parser::is_important)
    }

    /// Serializes one declaration line per name.
    ///
    /// Expanded output is `name: value;` with an optional ` /* comment */`,
    /// lines joined by `\n`. Minimized output is `name:value;` with no
    /// comment, lines concatenated.
    ///
    /// ```rust
    /// use wstyle::Property;
    ///
    /// let p = Property::new(["padding-left", "padding-right"], "1rem");
    /// assert_eq!(p.build(false), "padding-left: 1rem;\npadding-right: 1rem;");
    /// assert_eq!(p.build(true), "padding-left:1rem;padding-right:1rem;");
    /// ```
    pub fn build(&self, minimized: bool) -> String {
        let options = if minimized {
            BuildOptions::minimized()
        } else {
            BuildOptions::expanded()
        };
        self.build_with(&options)
    }

    pub fn build_with(&self, options: &BuildOptions) -> String {
        let Some(value) = self.value.as_deref() else {
            return String::new();
        };

        let lines: Vec<String> = self
            .names
            .iter()
            .map(|name| self.build_line(name, value, options))
            .collect();

        lines.join(if options.minimized { "" } else { "\n" })
    }

    fn build_line(&self, name: &str, value: &str, options: &BuildOptions) -> String {
        if options.minimized {
            return format!("{name}:{value};");
        }

        let mut line = format!("{name}: {value};");
        if let Some(comment) = self.comment.as_deref().filter(|_| options.emits_comments()) {
            line.push_str(&format!(" /* {comment} */"));
        }
        line
    }

    /// Parses one or more `;`-separated statements.
    ///
    /// Declarations become [`Property`] values and `@` statements become
    /// [`InlineAtRule`](crate::InlineAtRule) values. Fragments that are
    /// neither, such as a bare `padding`, are dropped without error.
    ///
    /// ```rust
    /// use wstyle::{Parsed, Property};
    ///
    /// let parsed = Property::parse("padding:1rem;@apply font-bold;");
    /// assert_eq!(parsed.len(), 2);
    ///
    /// assert!(matches!(Property::parse("padding;"), Parsed::Empty));
    /// ```
    pub fn parse(text: &str) -> Parsed {
        Parsed::parse(text)
    }

    /// Wraps the expanded build in a selector block.
    ///
    /// Without a selector the style builds to exactly [`build(false)`](Self::build).
    /// With `escape`, every `:` in the selector is written as `\:`.
    pub fn to_style(&self, selector: Option<&str>, escape: bool) -> Style {
        self.to_style_with(selector, &BuildOptions::expanded().with_escape(escape))
    }

    /// Like [`to_style`](Self::to_style), taking comments and escaping from
    /// `options`. The body is always built expanded.
    pub fn to_style_with(&self, selector: Option<&str>, options: &BuildOptions) -> Style {
        let body = self.build_with(&BuildOptions {
            minimized: false,
            ..*options
        });

        match selector {
            Some(selector) => Style::new(selector, body).with_escape(options.escape),
            None => Style::bare(body),
        }
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names && self.value == other.value
    }
}

impl Eq for Property {}

/// Strict single-declaration parsing.
///
/// Unlike [`Property::parse`], this reports why the text is not a declaration.
impl FromStr for Property {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean = parser::strip_comments(s);
        parser::declaration(&clean).map(|raw| Self::new(raw.name, raw.value))
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build(false))
    }
}
