//! End-to-end translations through the root crate.

use omnicore::interpret;
use omnicore::language::{Modifier, Named, Statement, TokenKind, parse, tokenize};

#[test]
fn topic() {
    let tokens = tokenize("#usr");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::TopicMarker, TokenKind::Text]
    );
    assert_eq!(
        parse(&tokens).statements,
        vec![Statement::Topic(Named::new("usr"))]
    );
    assert_eq!(interpret("#usr"), "Regarding user");
}

#[test]
fn entity_with_importance() {
    assert_eq!(interpret("@sys^high"), "system (importance high)");
}

#[test]
fn command_with_parameter() {
    assert_eq!(interpret("!cmd(arg1)"), "command arg1");
}

#[test]
fn topic_with_tense() {
    let document = parse(&tokenize("#topic.p"));
    assert_eq!(
        document.statements[0].modifiers(),
        &[Modifier::Temporal("p".into())]
    );
    assert_eq!(interpret("#topic.p"), "Regarding topic (in the past)");
}

#[test]
fn perspective() {
    assert_eq!(
        interpret("<pov1>#usr"),
        "From first-person perspective, Regarding user"
    );
}

#[test]
fn two_entities() {
    assert_eq!(interpret("@a;@b"), "a. b");
}

#[test]
fn malformed_input_degrades() {
    assert_eq!(interpret("@a $ ;; = #b"), "a. Regarding b");
    assert_eq!(interpret("!cmd(a b"), "command a, b");
    assert_eq!(interpret("$$$"), "");
}

#[test]
fn a_longer_passage() {
    assert_eq!(
        interpret("<povO>@usr.won^high<->@sys; ?#mem.p; !rsp(ctx inf)>>#doc.f*"),
        "From omniscient perspective, user (with wonder, importance high, relates bidirectionally with). \
         A question about Regarding memory (in the past). \
         response ctx, inf (then Regarding documentation (in the future) (emphasized))"
    );
}
