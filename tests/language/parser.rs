//! Integration tests for the parser
//!
//! Tests statement trees built from token streams.

use omnicore_foundation::ErrorKind;
use omnicore_language::{
    Document, InterpretConfig, Modifier, Named, Parser, Sentiment, Statement, parse, tokenize,
};

fn parse_str(source: &str) -> Document {
    parse(&tokenize(source))
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn parse_scenario_trees() {
    assert_eq!(
        parse_str("#usr").statements,
        vec![Statement::Topic(Named::new("usr"))]
    );
    assert_eq!(
        parse_str("@sys^high").statements,
        vec![Statement::Entity(
            Named::new("sys").with_modifier(Modifier::Importance("high".into()))
        )]
    );
    assert_eq!(
        parse_str("@a;@b").statements,
        vec![
            Statement::Entity(Named::new("a")),
            Statement::Entity(Named::new("b")),
        ]
    );
}

#[test]
fn statement_kinds() {
    let doc = parse_str("<pov2>@a;#b;?#c;!d");
    let names: Vec<&str> = doc.statements.iter().map(Statement::kind_name).collect();
    assert_eq!(names, vec!["perspective", "topic", "query", "command"]);
}

#[test]
fn marker_without_name() {
    let doc = parse_str("@+");
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.statements[0].name(), Some(""));
    assert_eq!(
        doc.statements[0].modifiers(),
        &[Modifier::Sentiment(Sentiment::Positive)]
    );
}

// =============================================================================
// Brackets
// =============================================================================

#[test]
fn closed_parameters_stop_at_their_closer() {
    let Statement::Command(command) = &parse_str("!cmd(a (b) c)-;@next").statements[0] else {
        panic!("expected a command");
    };
    assert_eq!(command.parameters, vec!["a", "b", "c"]);
    assert_eq!(
        command.modifiers,
        vec![Modifier::Sentiment(Sentiment::Negative)]
    );
}

#[test]
fn unclosed_parameters_swallow_the_rest() {
    let doc = parse_str("!cmd(a;@b");
    assert_eq!(doc.len(), 1);
    let Statement::Command(command) = &doc.statements[0] else {
        panic!("expected a command");
    };
    assert_eq!(command.parameters, vec!["a", "b"]);
}

#[test]
fn groups_ignore_parentheses() {
    assert_eq!(
        parse_str("@x[a (b) c]").statements[0].modifiers(),
        &[Modifier::Group("a-b-c".into())]
    );
}

// =============================================================================
// Nesting
// =============================================================================

#[test]
fn results_nest() {
    let doc = parse_str("@a>@b>@c");
    let [Modifier::Result(b)] = doc.statements[0].modifiers() else {
        panic!("expected a result");
    };
    let [Modifier::Result(c)] = b.modifiers() else {
        panic!("expected a nested result");
    };
    assert_eq!(c.name(), Some("c"));
}

#[test]
fn nesting_limit_is_configurable() {
    let tokens = tokenize("@a>@b>@c");
    let config = InterpretConfig::default().with_max_depth(1);
    let (doc, diagnostics) = Parser::with_config(&tokens, &config).parse_with_diagnostics();

    let [Modifier::Result(b)] = doc.statements[0].modifiers() else {
        panic!("expected a result");
    };
    assert!(b.modifiers().is_empty());
    assert!(
        diagnostics
            .iter()
            .any(|e| matches!(e.kind, ErrorKind::NestingTooDeep { limit: 1, .. }))
    );
}

#[test]
fn perspective_wraps_exactly_one_statement() {
    let doc = parse_str("<pov3>#a;#b");
    assert_eq!(doc.len(), 2);
    let Statement::Perspective(perspective) = &doc.statements[0] else {
        panic!("expected a perspective");
    };
    assert_eq!(perspective.code, "pov3");
    assert_eq!(perspective.child.as_deref().and_then(Statement::name), Some("a"));
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn well_formed_input_has_no_diagnostics() {
    let tokens = tokenize("<pov1>#usr.joy^high;@sys<:>;!cmd(a b)>>?#ctx");
    let (_, diagnostics) = Parser::new(&tokens).parse_with_diagnostics();
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[test]
fn importance_without_value_is_diagnosed() {
    let tokens = tokenize("@a^");
    let (doc, diagnostics) = Parser::new(&tokens).parse_with_diagnostics();
    assert!(doc.statements[0].modifiers().is_empty());
    assert_eq!(diagnostics.len(), 1);
}
