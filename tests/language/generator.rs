//! Integration tests for the generator
//!
//! Tests English output for parsed and hand-built trees.

use omnicore_foundation::{ErrorKind, Namespace};
use omnicore_language::{
    Command, Document, Modifier, Named, Perspective, Statement, check, generate,
    generate_statement, parse, tokenize,
};

fn render(source: &str) -> String {
    generate(&parse(&tokenize(source)))
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn command_without_parameters() {
    assert_eq!(render("!qry"), "query");
    assert_eq!(render("!qry()"), "query");
}

#[test]
fn command_parameters_are_not_expanded() {
    assert_eq!(render("!fnc(usr ctx)"), "function usr, ctx");
}

#[test]
fn query_forms() {
    assert_eq!(render("?"), "A question about");
    assert_eq!(render("?#inf"), "A question about Regarding information");
    assert_eq!(
        render("?#inf.f"),
        "A question about Regarding information (in the future)"
    );
}

#[test]
fn every_perspective_phrase() {
    assert_eq!(render("<pov2>@a"), "From second-person perspective, a");
    assert_eq!(render("<pov3>@a"), "From third-person perspective, a");
    assert_eq!(render("<povO>@a"), "From omniscient perspective, a");
    assert_eq!(render("<povL>@a"), "From limited perspective, a");
}

#[test]
fn perspective_without_child() {
    assert_eq!(render("<pov1>"), "From first-person perspective, ");
}

// =============================================================================
// Modifiers
// =============================================================================

#[test]
fn sentiment_and_emphasis() {
    assert_eq!(render("@a+"), "a (positive)");
    assert_eq!(render("@a-*"), "a (negative, emphasized)");
}

#[test]
fn relationships_render_their_phrase() {
    assert_eq!(render("@usr<:>"), "user (is a)");
    assert_eq!(render("@a><"), "a (is part of)");
    assert_eq!(render("@a-->"), "a (leads to)");
    assert_eq!(render("@a<!>"), "a (opposes)");
}

#[test]
fn coded_modifiers() {
    assert_eq!(render("@usr.ang"), "user (with anger)");
    assert_eq!(render("@leaf.plunge"), "leaf (plunging)");
    assert_eq!(render("@clock.c"), "clock (continuously)");
    assert_eq!(render("@clock.n"), "clock");
}

#[test]
fn nested_fragments() {
    assert_eq!(
        render("@rain>@flood>>!evacuate(town)"),
        "rain (resulting in flood (then evacuate town))"
    );
}

#[test]
fn additions_follow_source_order() {
    assert_eq!(
        render("#mem^low~2[old notes]+"),
        "Regarding memory (importance low, approximately 2, (old-notes), positive)"
    );
}

#[test]
fn tense_annotates_the_base_text() {
    assert_eq!(
        render("@sys^high.p"),
        "system (in the past) (importance high)"
    );
    assert_eq!(
        render("@sys.p^high"),
        "system (in the past) (importance high)"
    );
}

#[test]
fn operator_before_perspective_needs_a_space() {
    assert_eq!(
        render("@a><pov1>#b"),
        "a (is part of, resulting in Regarding b)"
    );
    assert_eq!(
        render("@a> <pov1>#b"),
        "a (resulting in From first-person perspective, Regarding b)"
    );
}

// =============================================================================
// Hand-built Trees
// =============================================================================

#[test]
fn hand_built_unknown_codes_fall_back() {
    let statement = Statement::Command(Command {
        action: "run".into(),
        parameters: Vec::new(),
        modifiers: vec![
            Modifier::Temporal("someday".into()),
            Modifier::Motion("hover".into()),
        ],
    });
    assert_eq!(generate_statement(&statement), "run (hover)");
}

#[test]
fn check_reports_unknown_perspective() {
    let doc = Document::new(vec![Statement::Perspective(Perspective {
        code: "pov7".into(),
        child: Some(Box::new(Statement::Topic(Named::new("a")))),
    })]);
    assert_eq!(generate(&doc), "From unknown perspective, Regarding a");

    let err = check(&doc).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnknownCode {
            namespace: Namespace::Perspective,
            code: "pov7".into()
        }
    );
}

#[test]
fn check_accepts_parsed_trees() {
    let doc = parse(&tokenize("<pov1>#usr.joy>@sys.drift<->;!cmd(x)"));
    assert!(check(&doc).is_ok());
}
