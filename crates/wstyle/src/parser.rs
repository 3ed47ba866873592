//! Statement-level parsing.
//!
//! This module holds the nom combinators behind [`Property`](crate::Property)
//! and [`InlineAtRule`](crate::InlineAtRule) parsing:
//!
//! - [`strip_comments`]: removes `/* */` block comments before splitting
//! - [`split_statements`]: breaks a blob into trimmed `;`-separated fragments
//! - [`parse_name`]: property and at-rule identifiers
//!
//! ## Grammar
//!
//! ```text
//! statement   := at_rule | declaration
//! declaration := WS* name WS* ":" WS* value WS* ";"?
//! at_rule     := WS* "@" name (WS+ value)? WS* ";"?
//! name        := [^:;@\s]+
//! value       := [^;]*
//! ```
//!
//! Values are kept verbatim after trimming, including any `!important`.

use crate::error::StyleError;
use nom::{
    IResult,
    bytes::complete::{tag_no_case, take_till, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, opt},
    sequence::{preceded, terminated, tuple},
};
use std::borrow::Cow;

/// A `name: value` declaration borrowed from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RawDeclaration<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// An `@name value` statement borrowed from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RawAtRule<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

/// Parses a statement name: everything up to whitespace, `:`, `;` or `@`.
pub fn parse_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && !matches!(c, ':' | ';' | '@'))(input)
}

/// Parses `name :`, returning the name and leaving the raw value.
fn parse_declaration_head(input: &str) -> IResult<&str, &str> {
    terminated(
        preceded(multispace0, parse_name),
        tuple((multispace0, char(':'))),
    )(input)
}

/// Parses `@name`, returning the name without its `@`.
fn parse_at_keyword(input: &str) -> IResult<&str, &str> {
    preceded(char('@'), parse_name)(input)
}

/// Takes one statement off the front of `input`, consuming its `;` if present.
fn parse_statement_body(input: &str) -> IResult<&str, &str> {
    terminated(take_till(|c: char| c == ';'), opt(char(';')))(input)
}

fn parse_important(input: &str) -> IResult<&str, &str> {
    all_consuming(preceded(
        tuple((char('!'), multispace0)),
        terminated(tag_no_case("important"), multispace0),
    ))(input)
}

/// Trims a single statement and checks nothing but whitespace follows its `;`.
fn statement_body(input: &str) -> Result<&str, StyleError> {
    let (rest, body) = parse_statement_body(input).map_err(|_| StyleError::Empty)?;

    let rest = rest.trim();
    if !rest.is_empty() {
        return Err(StyleError::TrailingInput(rest.to_string()));
    }

    let body = body.trim();
    if body.is_empty() {
        return Err(StyleError::Empty);
    }
    Ok(body)
}

/// Whether a value ends in `!important`.
pub(crate) fn is_important(value: &str) -> bool {
    value
        .rfind('!')
        .is_some_and(|idx| parse_important(&value[idx..]).is_ok())
}

/// Parses exactly one declaration statement.
pub(crate) fn declaration(input: &str) -> Result<RawDeclaration<'_>, StyleError> {
    let body = statement_body(input)?;

    let (value, name) = parse_declaration_head(body).map_err(|_| {
        if body.contains(':') {
            StyleError::InvalidName(body.to_string())
        } else {
            StyleError::MissingColon(body.to_string())
        }
    })?;

    let value = value.trim();
    if value.is_empty() {
        return Err(StyleError::EmptyValue(name.to_string()));
    }

    Ok(RawDeclaration { name, value })
}

/// Parses exactly one inline at-rule statement.
pub(crate) fn at_rule(input: &str) -> Result<RawAtRule<'_>, StyleError> {
    let body = statement_body(input)?;
    if !body.starts_with('@') {
        return Err(StyleError::NotAnAtRule(body.to_string()));
    }

    let (rest, name) =
        parse_at_keyword(body).map_err(|_| StyleError::InvalidName(body.to_string()))?;

    // `@apply:foo` or `@a@b` run straight on from the name
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return Err(StyleError::InvalidName(body.to_string()));
    }

    let value = rest.trim();
    Ok(RawAtRule {
        name,
        value: (!value.is_empty()).then_some(value),
    })
}

/// Removes `/* ... */` block comments. An unterminated comment runs to the end
/// of the input.
///
/// `/*` inside a quoted string or inside parentheses (as in
/// `url(/img/*.png)`) is part of the value. Every `;` outside quotes closes
/// the statement and resets the nesting, matching [`split_statements`].
pub fn strip_comments(source: &str) -> Cow<'_, str> {
    if !source.contains("/*") {
        return Cow::Borrowed(source);
    }

    let mut clean = String::with_capacity(source.len());
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if let Some(open) = quote {
            clean.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    clean.push(escaped);
                }
            } else if c == open {
                quote = None;
            } else if c == ';' {
                quote = None;
                depth = 0;
            }
            continue;
        }

        match c {
            '/' if depth == 0 && chars.peek() == Some(&'*') => {
                chars.next();
                while let Some(inner) = chars.next() {
                    if inner == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        break;
                    }
                }
                continue;
            }
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ';' => depth = 0,
            _ => {}
        }
        clean.push(c);
    }
    Cow::Owned(clean)
}

/// Splits `source` on `;` into trimmed, non-empty fragments in source order.
pub fn split_statements(source: &str) -> impl Iterator<Item = &str> {
    source
        .split(';')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
}
