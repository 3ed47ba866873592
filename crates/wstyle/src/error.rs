//! Error types for strict statement parsing.
//!
//! The lenient entry points ([`Property::parse`](crate::Property::parse) and
//! [`InlineAtRule::parse`](crate::InlineAtRule::parse)) never surface these;
//! they drop what they cannot read. The `FromStr` implementations report the
//! reason instead.

use thiserror::Error;

/// Errors that can occur when a single statement is parsed strictly.
///
/// # Examples
///
/// ```rust
/// use wstyle::{Property, StyleError};
///
/// let err = "padding;".parse::<Property>().unwrap_err();
/// assert_eq!(err, StyleError::MissingColon("padding".to_string()));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The input was empty or whitespace only.
    #[error("empty statement")]
    Empty,

    /// A declaration had no `:` between name and value.
    #[error("declaration is missing ':': {0}")]
    MissingColon(String),

    /// A declaration value trimmed to nothing.
    #[error("declaration has no value: {0}")]
    EmptyValue(String),

    /// A property or at-rule name contained whitespace, `:`, `;` or `@`.
    #[error("invalid name in statement: {0}")]
    InvalidName(String),

    /// At-rule input did not start with `@`.
    #[error("not an at-rule: {0}")]
    NotAnAtRule(String),

    /// Something other than whitespace followed the terminating `;`.
    #[error("unexpected input after statement: {0}")]
    TrailingInput(String),
}
