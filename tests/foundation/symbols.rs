//! Integration tests for sigils and symbol tables

use omnicore_foundation::{
    ABBREVIATIONS, EMOTION, MOTION, Namespace, PERSPECTIVE, RELATIONSHIP, Sigil, TEMPORAL, VISUAL,
    expand_abbreviation, modifier_namespace,
};

// =============================================================================
// Sigils
// =============================================================================

#[test]
fn every_sigil_is_distinct() {
    let mut chars: Vec<char> = Sigil::ALL.iter().map(|s| s.as_char()).collect();
    chars.sort_unstable();
    chars.dedup();
    assert_eq!(chars.len(), Sigil::ALL.len());
}

#[test]
fn sigil_lookup() {
    assert_eq!(Sigil::from_char('#'), Some(Sigil::Topic));
    assert_eq!(Sigil::from_char('*'), Some(Sigil::Emphasis));
    assert_eq!(Sigil::from_char('$'), None);
    assert_eq!(Sigil::Separator.meaning(), "separator");
}

// =============================================================================
// Tables
// =============================================================================

#[test]
fn table_sizes() {
    assert_eq!(TEMPORAL.iter().count(), 6);
    assert_eq!(EMOTION.iter().count(), 10);
    assert_eq!(VISUAL.iter().count(), 10);
    assert_eq!(MOTION.iter().count(), 10);
    assert_eq!(RELATIONSHIP.iter().count(), 7);
    assert_eq!(PERSPECTIVE.iter().count(), 5);
    assert_eq!(ABBREVIATIONS.iter().count(), 20);
}

#[test]
fn table_namespaces() {
    assert_eq!(TEMPORAL.namespace(), Namespace::Temporal);
    assert_eq!(RELATIONSHIP.namespace(), Namespace::Relationship);
    assert_eq!(ABBREVIATIONS.namespace(), Namespace::Abbreviation);
    assert_eq!(Namespace::Perspective.to_string(), "perspective");
}

#[test]
fn lookups_are_exact() {
    assert_eq!(TEMPORAL.lookup("f"), Some("future"));
    assert_eq!(TEMPORAL.lookup("F"), None);
    assert_eq!(EMOTION.lookup("won"), Some("wonder"));
    assert_eq!(MOTION.lookup("zigzag"), Some("zigzagging"));
    assert_eq!(PERSPECTIVE.lookup("povL"), Some("limited perspective"));
    assert!(!PERSPECTIVE.contains("povl"));
}

#[test]
fn relationship_longest_prefix() {
    assert_eq!(
        RELATIONSHIP.longest_prefix("<=>@b").map(|(op, _)| op),
        Some("<=>")
    );
    assert_eq!(
        RELATIONSHIP.longest_prefix("<!>").map(|(_, meaning)| meaning),
        Some("opposes")
    );
    assert_eq!(
        RELATIONSHIP.longest_prefix("><@b").map(|(op, _)| op),
        Some("><")
    );
    assert_eq!(RELATIONSHIP.longest_prefix("<pov1>"), None);
}

#[test]
fn abbreviations_expand() {
    assert_eq!(expand_abbreviation("fnc"), "function");
    assert_eq!(expand_abbreviation("attr"), "attribute");
    assert_eq!(expand_abbreviation("user"), "user");
}

#[test]
fn modifier_namespace_precedence() {
    assert_eq!(modifier_namespace("seq", false), Some(Namespace::Temporal));
    assert_eq!(modifier_namespace("ant", false), Some(Namespace::Emotion));
    assert_eq!(modifier_namespace("circle", false), Some(Namespace::Motion));
    assert_eq!(modifier_namespace("dense", false), None);
    assert_eq!(modifier_namespace("dense", true), Some(Namespace::Visual));
}
