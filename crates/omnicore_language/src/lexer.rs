//! Lexer for the OmniCore notation.
//!
//! The lexer converts source text into a flat stream of tokens. It never
//! fails: characters it cannot classify are dropped and recorded as
//! diagnostics for the strict pipeline.
//!
//! At each position the lexer tries, in order: a perspective marker
//! (`<pov1>`), the longest relationship operator (`<:>` before `<>`), a
//! single-character sigil, and finally a word. Words may contain `-` and `.`
//! only between word characters, so `topic.p` splits into `topic` plus the
//! tense code `p` while a trailing `-` still lexes as the negative sigil.
//!
//! Operators win over the characters they start with even when that splits a
//! later marker: `@a><pov1>#b` lexes as `><`, `pov1`, `>` rather than `>`
//! followed by the perspective `<pov1>`. Separate them with a space to get the
//! perspective.

use omnicore_foundation::{Error, Namespace, PERSPECTIVE, RELATIONSHIP, Sigil, modifier_namespace};

use crate::config::InterpretConfig;
use crate::span::{Span, line_at};
use crate::token::{Token, TokenKind};

/// Lexer for OmniCore notation.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Whether visual codes split off words.
    visual_modifiers: bool,
    /// Coded modifier split off the previous word, emitted next.
    pending: Option<Token>,
    /// Characters that were dropped.
    diagnostics: Vec<Error>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            visual_modifiers: false,
            pending: None,
            diagnostics: Vec::new(),
        }
    }

    /// Creates a new lexer honouring the given configuration.
    #[must_use]
    pub fn with_config(source: &'src str, config: &InterpretConfig) -> Self {
        Self {
            visual_modifiers: config.visual_modifiers,
            ..Self::new(source)
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        loop {
            self.skip_whitespace();

            let c = self.peek_char()?;
            let start = self.position;
            let line = self.line;
            let column = self.column;

            if c == '<' && self.rest.starts_with("<pov") {
                if let Some(token) = self.scan_perspective() {
                    return Some(token);
                }
            }

            if let Some((op, _)) = RELATIONSHIP.longest_prefix(self.rest) {
                self.advance_by(op.len());
                return Some(self.finish(TokenKind::Relationship, op, start, line, column));
            }

            if let Some(sigil) = Sigil::from_char(c) {
                self.advance();
                return Some(self.finish(sigil.into(), c.to_string(), start, line, column));
            }

            if is_word_char(c) {
                return Some(self.scan_word());
            }

            log::debug!("dropping unexpected character {c:?} at offset {start}");
            let context = line_at(self.source, start);
            self.diagnostics
                .push(Error::unexpected_character(c, start).with_context(context));
            self.advance();
        }
    }

    /// Tokenizes all source and returns a vector of tokens.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    /// Tokenizes the remaining source, also returning every dropped character.
    #[must_use]
    pub fn tokenize_with_diagnostics(mut self) -> (Vec<Token>, Vec<Error>) {
        let tokens: Vec<Token> = self.by_ref().collect();
        log::trace!(
            "lexed {} tokens, dropped {} characters",
            tokens.len(),
            self.diagnostics.len()
        );
        (tokens, self.diagnostics)
    }

    /// Builds a token that ends at the current position.
    fn finish(
        &self,
        kind: TokenKind,
        text: impl Into<String>,
        start: usize,
        line: u32,
        column: u32,
    ) -> Token {
        Token::new(kind, text, Span::new(start, self.position, line, column))
    }

    /// Scans `<pov…>` if the bracketed code is a registered perspective.
    ///
    /// Leaves the lexer untouched when it is not, so `<` falls through to the
    /// remaining rules.
    fn scan_perspective(&mut self) -> Option<Token> {
        let end = self.rest.find('>')?;
        let code = PERSPECTIVE.code(&self.rest[1..end])?;

        let start = self.position;
        let line = self.line;
        let column = self.column;
        self.advance_by(end + 1);
        Some(self.finish(TokenKind::Perspective, code, start, line, column))
    }

    /// Scans a word, splitting off a trailing coded modifier.
    fn scan_word(&mut self) -> Token {
        let start = self.position;
        let line = self.line;
        let column = self.column;

        while let Some(c) = self.peek_char() {
            let internal =
                matches!(c, '-' | '.') && self.peek_char_n(1).is_some_and(is_word_char);
            if is_word_char(c) || internal {
                self.advance();
            } else {
                break;
            }
        }

        let source = self.source;
        let raw = &source[start..self.position];

        if let Some((base, code_token)) = self.split_coded(raw, start, line, column) {
            self.pending = Some(code_token);
            return base;
        }

        self.finish(TokenKind::Text, raw, start, line, column)
    }

    /// Splits `base.code` into a text token and a coded modifier token.
    ///
    /// Only words with exactly one dot are split, and only when `code` is a
    /// registered temporal, emotion, or motion code (or visual, if enabled).
    fn split_coded(
        &self,
        raw: &str,
        start: usize,
        line: u32,
        column: u32,
    ) -> Option<(Token, Token)> {
        if raw.matches('.').count() != 1 {
            return None;
        }
        let (base, code) = raw.split_once('.')?;

        let kind = match modifier_namespace(code, self.visual_modifiers)? {
            Namespace::Temporal => TokenKind::Temporal,
            Namespace::Emotion => TokenKind::Emotion,
            Namespace::Motion => TokenKind::Motion,
            Namespace::Visual => TokenKind::Visual,
            _ => return None,
        };

        let dot = start + base.len();
        let code_column = column.saturating_add(to_column(base.len() + 1));
        let base_token = Token::new(
            TokenKind::Text,
            base,
            Span::new(start, dot, line, column),
        );
        let code_token = Token::new(
            kind,
            code,
            Span::new(dot + 1, self.position, line, code_column),
        );
        Some((base_token, code_token))
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks `n` characters past the next one.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Advances past `bytes` bytes of input.
    fn advance_by(&mut self, bytes: usize) {
        let target = self.position + bytes;
        while self.position < target && !self.rest.is_empty() {
            self.advance();
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenizes `input` into a flat token sequence.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::tokenize_all(input)
}

/// Returns true if `c` can appear anywhere in a word.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn to_column(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
