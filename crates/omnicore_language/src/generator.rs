//! Natural-language generation from a parsed document.
//!
//! Each top-level statement becomes one sentence fragment and the fragments
//! are joined with `". "`. Modifiers become a parenthesised list of additions
//! after the statement text, except tense, which annotates the text itself.
//!
//! # Example
//!
//! ```
//! use omnicore_language::{generate, parse, tokenize};
//!
//! let document = parse(&tokenize("@sys^high"));
//! assert_eq!(generate(&document), "system (importance high)");
//! ```

use std::fmt::Write;

use omnicore_foundation::{
    EMOTION, Error, MOTION, PERSPECTIVE, RELATIONSHIP, Result, SymbolTable, TEMPORAL,
    VISUAL, expand_abbreviation,
};

use crate::ast::{Document, Modifier, Named, Statement};

/// Phrase used for a perspective code missing from the table.
const UNKNOWN_PERSPECTIVE: &str = "unknown perspective";

/// Generates the natural-language text for a whole document.
#[must_use]
pub fn generate(document: &Document) -> String {
    document
        .statements
        .iter()
        .map(generate_statement)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(". ")
}

/// Generates the sentence fragment for a single statement.
#[must_use]
pub fn generate_statement(statement: &Statement) -> String {
    match statement {
        Statement::Perspective(perspective) => {
            let phrase = PERSPECTIVE
                .lookup(&perspective.code)
                .unwrap_or(UNKNOWN_PERSPECTIVE);
            let content = perspective
                .child
                .as_deref()
                .map(generate_statement)
                .unwrap_or_default();
            format!("From {phrase}, {content}")
        }
        Statement::Topic(named) => topic_phrase(named),
        Statement::Entity(named) => {
            apply_modifiers(expand_abbreviation(&named.name).to_string(), &named.modifiers)
        }
        Statement::Query(query) => {
            let mut text = String::from("A question about");
            if let Some(target) = &query.target {
                text.push(' ');
                text.push_str(&topic_phrase(target));
            }
            apply_modifiers(text, &query.modifiers)
        }
        Statement::Command(command) => {
            let mut text = expand_abbreviation(&command.action).to_string();
            if !command.parameters.is_empty() {
                text.push(' ');
                text.push_str(&command.parameters.join(", "));
            }
            apply_modifiers(text, &command.modifiers)
        }
    }
}

fn topic_phrase(named: &Named) -> String {
    let text = format!("Regarding {}", expand_abbreviation(&named.name));
    apply_modifiers(text, &named.modifiers)
}

/// Appends the modifiers of a statement to its base text.
///
/// Additions keep the order the modifiers were written in.
fn apply_modifiers(mut text: String, modifiers: &[Modifier]) -> String {
    let mut additions: Vec<String> = Vec::new();

    for modifier in modifiers {
        match modifier {
            Modifier::Importance(value) => additions.push(format!("importance {value}")),
            Modifier::Sentiment(sentiment) => additions.push(sentiment.as_str().to_string()),
            Modifier::Emphasis => additions.push("emphasized".to_string()),
            Modifier::Temporal(code) => {
                if let Some(annotation) = tense_annotation(lookup_or_raw(&TEMPORAL, code)) {
                    text.push_str(annotation);
                }
            }
            Modifier::Emotion(code) => {
                additions.push(format!("with {}", lookup_or_raw(&EMOTION, code)));
            }
            Modifier::Motion(code) => additions.push(lookup_or_raw(&MOTION, code).to_string()),
            Modifier::Visual(code) => additions.push(lookup_or_raw(&VISUAL, code).to_string()),
            Modifier::Relationship(code) => {
                additions.push(lookup_or_raw(&RELATIONSHIP, code).to_string());
            }
            Modifier::Approximate(value) => additions.push(format!("approximately {value}")),
            Modifier::Group(value) => additions.push(format!("({value})")),
            Modifier::Result(nested) => {
                additions.push(format!("resulting in {}", generate_statement(nested)));
            }
            Modifier::Sequence(nested) => {
                additions.push(format!("then {}", generate_statement(nested)));
            }
        }
    }

    if !additions.is_empty() {
        let _ = write!(text, " ({})", additions.join(", "));
    }
    text
}

fn lookup_or_raw<'a>(table: &SymbolTable, code: &'a str) -> &'a str {
    table.lookup(code).unwrap_or(code)
}

/// Returns the annotation a tense adds to the statement text.
///
/// The present tense, and any tense without an annotation, leaves the text
/// unchanged.
fn tense_annotation(tense: &str) -> Option<&'static str> {
    match tense {
        "past" => Some(" (in the past)"),
        "future" => Some(" (in the future)"),
        "continuous" => Some(" (continuously)"),
        "perfect" => Some(" (perfectly)"),
        "sequential" => Some(" (sequentially)"),
        _ => None,
    }
}

/// Checks that every code in the document is registered in its table.
///
/// Trees built by the parser always pass; hand-built trees may not.
///
/// # Errors
/// Returns the first unregistered perspective, temporal, emotion, motion,
/// visual, or relationship code.
pub fn check(document: &Document) -> Result<()> {
    document.statements.iter().try_for_each(check_statement)
}

fn check_statement(statement: &Statement) -> Result<()> {
    match statement {
        Statement::Perspective(perspective) => {
            require(&PERSPECTIVE, &perspective.code)?;
            perspective.child.as_deref().map_or(Ok(()), check_statement)
        }
        Statement::Topic(named) | Statement::Entity(named) => check_modifiers(&named.modifiers),
        Statement::Query(query) => {
            if let Some(target) = &query.target {
                check_modifiers(&target.modifiers)?;
            }
            check_modifiers(&query.modifiers)
        }
        Statement::Command(command) => check_modifiers(&command.modifiers),
    }
}

fn check_modifiers(modifiers: &[Modifier]) -> Result<()> {
    for modifier in modifiers {
        match modifier {
            Modifier::Temporal(code) => require(&TEMPORAL, code)?,
            Modifier::Emotion(code) => require(&EMOTION, code)?,
            Modifier::Motion(code) => require(&MOTION, code)?,
            Modifier::Visual(code) => require(&VISUAL, code)?,
            Modifier::Relationship(code) => require(&RELATIONSHIP, code)?,
            Modifier::Result(nested) | Modifier::Sequence(nested) => check_statement(nested)?,
            Modifier::Importance(_)
            | Modifier::Sentiment(_)
            | Modifier::Emphasis
            | Modifier::Approximate(_)
            | Modifier::Group(_) => {}
        }
    }
    Ok(())
}

fn require(table: &SymbolTable, code: &str) -> Result<()> {
    if table.contains(code) {
        Ok(())
    } else {
        Err(Error::unknown_code(table.namespace(), code))
    }
}
