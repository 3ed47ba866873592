//! Build-then-parse round trips.

use wstyle::{InlineAtRule, Parsed, Property, Statement};

fn fields(parsed: &Parsed) -> Vec<(String, Option<String>)> {
    parsed
        .iter()
        .map(|s| (s.name().to_string(), s.value().map(str::to_string)))
        .collect()
}

#[test]
fn test_declaration_round_trip() {
    for minimized in [false, true] {
        let p = Property::new("padding", "1rem 2rem");
        let reparsed = Property::parse(&p.build(minimized));
        assert_eq!(reparsed, Parsed::Single(Statement::Property(p)));
    }
}

#[test]
fn test_grouped_declaration_round_trip() {
    let p = Property::new(["padding-left", "padding-right"], "1rem");
    let reparsed = Property::parse(&p.build(false));
    assert_eq!(
        fields(&reparsed),
        vec![
            ("padding-left".to_string(), Some("1rem".to_string())),
            ("padding-right".to_string(), Some("1rem".to_string())),
        ]
    );
}

#[test]
fn test_comment_is_write_only() {
    let p = Property::new(["padding-left", "padding-right"], "1rem").with_comment("px-4");
    let reparsed = Property::parse(&p.build(false));

    assert_eq!(reparsed.len(), 2);
    for statement in &reparsed {
        let property = statement.as_property().unwrap();
        assert_eq!(property.value(), Some("1rem"));
        assert_eq!(property.comment(), None);
    }
}

#[test]
fn test_important_round_trip() {
    let p = Property::new("color", "red").with_important();
    for minimized in [false, true] {
        let reparsed = Property::parse(&p.build(minimized));
        assert_eq!(reparsed.single().and_then(Statement::as_property), Some(&p));
    }
}

#[test]
fn test_at_rule_round_trip() {
    for rule in [
        InlineAtRule::new("apply", "font-bold text-md"),
        InlineAtRule::bare("apply"),
    ] {
        assert_eq!(InlineAtRule::parse(&rule.build()), Some(rule));
    }
}

#[test]
fn test_mixed_list_round_trip() {
    let parsed = Property::parse("padding:1rem;@apply font-bold;");
    let rebuilt = parsed.build(false);
    assert_eq!(rebuilt, "padding: 1rem;\n@apply font-bold;");
    assert_eq!(Property::parse(&rebuilt), parsed);
}
