//! Integration tests for the lexer
//!
//! Tests tokenization of OmniCore notation.

use omnicore_foundation::ErrorKind;
use omnicore_language::{InterpretConfig, Lexer, TokenKind, tokenize};

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|t| t.kind).collect()
}

fn texts(input: &str) -> Vec<String> {
    tokenize(input).into_iter().map(|t| t.text).collect()
}

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_topic() {
    assert_eq!(kinds("#usr"), vec![TokenKind::TopicMarker, TokenKind::Text]);
    assert_eq!(texts("#usr"), vec!["#", "usr"]);
}

#[test]
fn tokenize_command_with_parameters() {
    assert_eq!(
        kinds("!cmd(arg1)"),
        vec![
            TokenKind::CommandMarker,
            TokenKind::Text,
            TokenKind::ParamStart,
            TokenKind::Text,
            TokenKind::ParamEnd,
        ]
    );
}

#[test]
fn tokenize_every_single_sigil() {
    let tokens = tokenize("# @ ? ! ^ + - = > < . : ; [ ] ( ) ~ | & { } *");
    assert_eq!(tokens.len(), 23);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Text));
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(kinds("  #\n\tusr  "), kinds("#usr"));
}

// =============================================================================
// Perspectives
// =============================================================================

#[test]
fn tokenize_perspective() {
    let tokens = tokenize("<pov1>#usr");
    assert_eq!(tokens[0].kind, TokenKind::Perspective);
    assert_eq!(tokens[0].text, "pov1");
    assert_eq!(tokens[0].span.len(), 6);
    assert_eq!(tokens[1].kind, TokenKind::TopicMarker);
}

#[test]
fn unknown_perspective_falls_through() {
    assert_eq!(
        kinds("<pov9>"),
        vec![TokenKind::Source, TokenKind::Text, TokenKind::Result]
    );
}

// =============================================================================
// Relationships
// =============================================================================

#[test]
fn relationships_match_longest_first() {
    assert_eq!(texts("@a<->@b")[2], "<->");
    assert_eq!(texts("@a<>@b")[2], "<>");
    assert_eq!(texts("@a-->@b")[2], "-->");
    assert_eq!(kinds("@a<:>@b")[2], TokenKind::Relationship);
}

#[test]
fn lone_angle_brackets_are_sigils() {
    assert_eq!(
        kinds("@a<@b"),
        vec![
            TokenKind::EntityMarker,
            TokenKind::Text,
            TokenKind::Source,
            TokenKind::EntityMarker,
            TokenKind::Text,
        ]
    );
}

// =============================================================================
// Words and Coded Modifiers
// =============================================================================

#[test]
fn coded_suffixes_split() {
    assert_eq!(
        kinds("#topic.p"),
        vec![TokenKind::TopicMarker, TokenKind::Text, TokenKind::Temporal]
    );
    assert_eq!(texts("@usr.joy"), vec!["@", "usr", "joy"]);
    assert_eq!(kinds("@leaf.drift")[2], TokenKind::Motion);
}

#[test]
fn unregistered_suffix_stays_in_word() {
    assert_eq!(texts("@file.txt"), vec!["@", "file.txt"]);
    assert_eq!(texts("@a.b.p"), vec!["@", "a.b.p"]);
}

#[test]
fn visual_suffix_needs_config() {
    assert_eq!(texts("@sky.bright"), vec!["@", "sky.bright"]);

    let config = InterpretConfig::default().with_visual_modifiers(true);
    let tokens: Vec<_> = Lexer::with_config("@sky.bright", &config).collect();
    assert_eq!(tokens[2].kind, TokenKind::Visual);
    assert_eq!(tokens[2].text, "bright");
}

#[test]
fn internal_hyphens_join_words() {
    assert_eq!(texts("@well-known"), vec!["@", "well-known"]);
    assert_eq!(
        kinds("@a-"),
        vec![
            TokenKind::EntityMarker,
            TokenKind::Text,
            TokenKind::Negative
        ]
    );
}

// =============================================================================
// Spans and Diagnostics
// =============================================================================

#[test]
fn spans_track_lines_and_columns() {
    let tokens = tokenize("#usr\n  @a");
    let entity = &tokens[2];
    assert_eq!(entity.kind, TokenKind::EntityMarker);
    assert_eq!(entity.span.line, 2);
    assert_eq!(entity.span.column, 3);
    assert_eq!(entity.span.start, 7);
}

#[test]
fn split_tokens_have_their_own_spans() {
    let tokens = tokenize("#topic.p");
    assert_eq!((tokens[1].span.start, tokens[1].span.end), (1, 6));
    assert_eq!((tokens[2].span.start, tokens[2].span.end), (7, 8));
}

#[test]
fn dropped_characters_are_diagnosed() {
    let (tokens, diagnostics) = Lexer::new("@a%b").tokenize_with_diagnostics();
    assert_eq!(tokens.len(), 3);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].kind,
        ErrorKind::UnexpectedCharacter {
            character: '%',
            offset: 2
        }
    );
    assert_eq!(diagnostics[0].context.as_deref(), Some("@a%b"));
}

#[test]
fn only_unknown_characters_yield_nothing() {
    assert!(tokenize("$%`'\",\\ \t").is_empty());
}
