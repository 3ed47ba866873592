//! Integration tests for inline at-rules.

use wstyle::{InlineAtRule, StyleError};

#[test]
fn test_build_with_value() {
    let rule = InlineAtRule::new("apply", "font-bold text-md");
    assert_eq!(rule.build(), "@apply font-bold text-md;");
    assert_eq!(rule.to_string(), "@apply font-bold text-md;");
}

#[test]
fn test_build_bare() {
    assert_eq!(InlineAtRule::bare("apply").build(), "@apply;");
    assert_eq!(InlineAtRule::new("apply", "   ").build(), "@apply;");
}

#[test]
fn test_new_cuts_value_at_semicolon() {
    let rule = InlineAtRule::new("apply", "font-bold ; text-md");
    assert_eq!(rule.value(), Some("font-bold"));
    assert_eq!(rule.build(), "@apply font-bold;");
    assert_eq!(InlineAtRule::parse(&rule.build()), Some(rule));

    assert_eq!(InlineAtRule::new("apply", ";x").value(), None);
}

#[test]
fn test_parse_trailing_whitespace() {
    let rule = InlineAtRule::parse("@apply  ").unwrap();
    assert_eq!(rule.name(), "apply");
    assert_eq!(rule.value(), None);
}

#[test]
fn test_parse_with_value() {
    let r2 = InlineAtRule::parse("@apply font-bold text-md;").unwrap();
    let r3 = InlineAtRule::parse("  @apply  font-bold text-md ").unwrap();

    for rule in [r2, r3] {
        assert_eq!(rule.name(), "apply");
        assert_eq!(rule.value(), Some("font-bold text-md"));
    }
}

#[test]
fn test_parse_bare_with_semicolon() {
    let rule = InlineAtRule::parse("@apply;").unwrap();
    assert_eq!(rule, InlineAtRule::bare("apply"));
}

#[test]
fn test_parse_rejects_non_at_rules() {
    assert!(InlineAtRule::parse("padding: 1rem").is_none());
    assert!(InlineAtRule::parse("").is_none());
    assert!(InlineAtRule::parse("@").is_none());
    assert!(InlineAtRule::parse("@apply a; @apply b").is_none());
}

#[test]
fn test_from_str_errors() {
    assert_eq!(
        "apply x".parse::<InlineAtRule>(),
        Err(StyleError::NotAnAtRule("apply x".to_string()))
    );
    assert_eq!(
        "@apply a; b".parse::<InlineAtRule>(),
        Err(StyleError::TrailingInput("b".to_string()))
    );
}
