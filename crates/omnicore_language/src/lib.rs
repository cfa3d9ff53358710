//! Lexer, parser, and generator for the OmniCore notation.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of OmniCore text
//! - [`Parser`] - Parsing tokens into a [`Document`]
//! - [`generate`] - Rendering a document as English
//! - [`interpret`] - The whole pipeline in one call
//!
//! # Example
//!
//! ```
//! use omnicore_language::interpret;
//!
//! assert_eq!(interpret("#usr"), "Regarding user");
//! assert_eq!(
//!     interpret("<pov1>#usr"),
//!     "From first-person perspective, Regarding user"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod config;
pub mod generator;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;


pub use ast::{Command, Document, Modifier, Named, Perspective, Query, Sentiment, Statement};
pub use config::{DEFAULT_MAX_DEPTH, InterpretConfig};
pub use generator::{check, generate, generate_statement};
pub use lexer::{Lexer, tokenize};
pub use parser::{Parser, parse};
pub use span::Span;
pub use token::{Token, TokenKind};

use omnicore_foundation::Result;

/// Translates OmniCore text into English.
///
/// Never fails: malformed fragments are skipped and unknown codes fall back
/// to their raw text.
#[must_use]
pub fn interpret(text: &str) -> String {
    let tokens = tokenize(text);
    generate(&parse(&tokens))
}

/// The intermediate products of one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    /// The token stream.
    pub tokens: Vec<Token>,
    /// The parsed document.
    pub document: Document,
}

/// Lexes and parses OmniCore text with the given configuration.
///
/// # Errors
/// In strict mode, returns the first problem found: a skipped character, then
/// a malformed statement, then an unregistered code.
pub fn analyze(text: &str, config: &InterpretConfig) -> Result<Analysis> {
    let (tokens, lex_diagnostics) = Lexer::with_config(text, config).tokenize_with_diagnostics();
    let (document, parse_diagnostics) =
        Parser::with_config(&tokens, config).parse_with_diagnostics();

    log::trace!(
        "analyzed {} tokens into {} statements ({} diagnostics)",
        tokens.len(),
        document.len(),
        lex_diagnostics.len() + parse_diagnostics.len()
    );

    if config.strict {
        if let Some(error) = lex_diagnostics.into_iter().chain(parse_diagnostics).next() {
            return Err(error);
        }
        check(&document)?;
    }

    Ok(Analysis { tokens, document })
}

/// Translates OmniCore text into English with the given configuration.
///
/// In lenient mode this matches [`interpret`] apart from the configured
/// visual codes and nesting limit.
///
/// # Errors
/// In strict mode, returns the first problem found in the input.
pub fn interpret_with(text: &str, config: &InterpretConfig) -> Result<String> {
    analyze(text, config).map(|analysis| generate(&analysis.document))
}

/// Translates OmniCore text into English, rejecting malformed input.
///
/// # Errors
/// Returns the first problem found in the input.
pub fn interpret_strict(text: &str) -> Result<String> {
    interpret_with(text, &InterpretConfig::strict())
}
