//! Heterogeneous statement lists.
//!
//! Parsing a fragment such as `padding:1rem;@apply font-bold;` yields a mix of
//! declarations and at-rules. [`Statement`] is the sum of the two and
//! [`Parsed`] is the outcome of parsing a whole fragment: nothing, exactly one
//! statement, or several in source order.

use crate::at_rule::InlineAtRule;
use crate::error::StyleError;
use crate::parser;
use crate::property::Property;
use std::fmt;
use std::str::FromStr;

/// A single parsed statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Property(Property),
    AtRule(InlineAtRule),
}

impl Statement {
    /// The property's first name, or the at-rule's name without `@`.
    pub fn name(&self) -> &str {
        match self {
            Statement::Property(property) => property.name(),
            Statement::AtRule(rule) => rule.name(),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Statement::Property(property) => property.value(),
            Statement::AtRule(rule) => rule.value(),
        }
    }

    /// At-rules have no optional whitespace, so `minimized` only affects
    /// declarations.
    pub fn build(&self, minimized: bool) -> String {
        match self {
            Statement::Property(property) => property.build(minimized),
            Statement::AtRule(rule) => rule.build(),
        }
    }

    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Statement::Property(property) => Some(property),
            Statement::AtRule(_) => None,
        }
    }

    pub fn as_at_rule(&self) -> Option<&InlineAtRule> {
        match self {
            Statement::AtRule(rule) => Some(rule),
            Statement::Property(_) => None,
        }
    }
}

impl From<Property> for Statement {
    fn from(property: Property) -> Self {
        Statement::Property(property)
    }
}

impl From<InlineAtRule> for Statement {
    fn from(rule: InlineAtRule) -> Self {
        Statement::AtRule(rule)
    }
}

/// Dispatches on a leading `@`: at-rule if present, declaration otherwise.
impl FromStr for Statement {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with('@') {
            s.parse::<InlineAtRule>().map(Statement::AtRule)
        } else {
            s.parse::<Property>().map(Statement::Property)
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build(false))
    }
}

/// The result of parsing a fragment of statements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Parsed {
    /// No fragment produced a statement.
    #[default]
    Empty,
    /// Exactly one statement.
    Single(Statement),
    /// Two or more statements in source order.
    Many(Vec<Statement>),
}

impl Parsed {
    /// Strips comments, splits on `;` and parses each fragment, skipping any
    /// that are neither a declaration nor an at-rule.
    pub fn parse(text: &str) -> Self {
        let clean = parser::strip_comments(text);

        let statements = parser::split_statements(&clean)
            .filter_map(|fragment| {
                log::trace!("parsing statement fragment: {fragment:?}");
                match fragment.parse::<Statement>() {
                    Ok(statement) => Some(statement),
                    Err(err) => {
                        log::debug!("dropping unparsable statement {fragment:?}: {err}");
                        None
                    }
                }
            })
            .collect();

        Self::from_statements(statements)
    }

    /// Like [`parse`](Self::parse), but fails on the first fragment that is
    /// neither a declaration nor an at-rule.
    pub fn try_parse(text: &str) -> Result<Self, StyleError> {
        let clean = parser::strip_comments(text);

        let statements = parser::split_statements(&clean)
            .map(str::parse::<Statement>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_statements(statements))
    }

    pub fn from_statements(mut statements: Vec<Statement>) -> Self {
        match statements.len() {
            0 => Parsed::Empty,
            1 => statements.pop().map_or(Parsed::Empty, Parsed::Single),
            _ => Parsed::Many(statements),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Parsed::Empty)
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// The statement, if exactly one was parsed.
    pub fn single(&self) -> Option<&Statement> {
        match self {
            Parsed::Single(statement) => Some(statement),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> &[Statement] {
        match self {
            Parsed::Empty => &[],
            Parsed::Single(statement) => std::slice::from_ref(statement),
            Parsed::Many(statements) => statements,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.as_slice().iter()
    }

    pub fn into_vec(self) -> Vec<Statement> {
        match self {
            Parsed::Empty => Vec::new(),
            Parsed::Single(statement) => vec![statement],
            Parsed::Many(statements) => statements,
        }
    }

    /// Builds every statement, joined by `\n` (expanded) or nothing (minimized).
    pub fn build(&self, minimized: bool) -> String {
        let built: Vec<String> = self
            .iter()
            .map(|statement| statement.build(minimized))
            .filter(|text| !text.is_empty())
            .collect();
        built.join(if minimized { "" } else { "\n" })
    }
}

impl IntoIterator for Parsed {
    type Item = Statement;
    type IntoIter = std::vec::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Parsed {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Statement>> for Parsed {
    fn from(statements: Vec<Statement>) -> Self {
        Self::from_statements(statements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_statements_picks_variant() {
        assert_eq!(Parsed::from_statements(vec![]), Parsed::Empty);

        let one = Parsed::from_statements(vec![Property::new("a", "1").into()]);
        assert!(matches!(one, Parsed::Single(Statement::Property(_))));

        let two = Parsed::from_statements(vec![
            Property::new("a", "1").into(),
            InlineAtRule::bare("apply").into(),
        ]);
        assert_eq!(two.len(), 2);
        assert!(two.single().is_none());
    }

    #[test]
    fn statement_dispatch_on_at_sign() {
        let rule: Statement = "  @apply font-bold".parse().unwrap();
        assert!(rule.as_at_rule().is_some());

        let decl: Statement = "color: red".parse().unwrap();
        assert!(decl.as_property().is_some());

        assert_eq!(
            "color".parse::<Statement>(),
            Err(StyleError::MissingColon("color".to_string()))
        );
    }

    #[test]
    fn try_parse_stops_at_bad_fragment() {
        assert_eq!(
            Parsed::try_parse("margin: 0; padding; color: red"),
            Err(StyleError::MissingColon("padding".to_string()))
        );
        assert_eq!(Parsed::try_parse(" ; "), Ok(Parsed::Empty));
        assert_eq!(
            Parsed::try_parse("margin: 0; @apply p-4"),
            Ok(Parsed::parse("margin: 0; @apply p-4"))
        );
    }

    #[test]
    fn build_joins_statements() {
        let parsed = Parsed::parse("padding:1rem;@apply font-bold;");
        assert_eq!(parsed.build(false), "padding: 1rem;\n@apply font-bold;");
        assert_eq!(parsed.build(true), "padding:1rem;@apply font-bold;");
    }
}
