//! Parser for the OmniCore notation.
//!
//! The parser converts a token sequence into a [`Document`] by recursive
//! descent. Every production takes the cursor it starts at and returns the
//! cursor it stopped at; the parser holds no position of its own.
//!
//! Parsing is lenient. Tokens that cannot start a statement are skipped, an
//! unclosed `(` or `[` swallows the rest of the input, and a `>` with no
//! statement after it records nothing. Each of these is also recorded as a
//! diagnostic so the strict pipeline can report it.

use omnicore_foundation::Error;

use crate::ast::{Command, Document, Modifier, Named, Perspective, Query, Sentiment, Statement};
use crate::config::{DEFAULT_MAX_DEPTH, InterpretConfig};
use crate::token::{Token, TokenKind};

/// Parser over a borrowed token sequence.
pub struct Parser<'t> {
    /// The tokens being parsed.
    tokens: &'t [Token],
    /// Maximum nesting depth of statements inside statements.
    max_depth: usize,
    /// Malformed fragments that were skipped.
    diagnostics: Vec<Error>,
}

/// Words collected between a delimiter and its matching closer.
struct Delimited {
    /// `Text` token values inside the delimiters, in order.
    words: Vec<String>,
    /// Number of tokens strictly inside the delimiters.
    inner: usize,
    /// Cursor just past the closer, or the end of input if unclosed.
    end: usize,
}

impl<'t> Parser<'t> {
    /// Creates a parser with the default configuration.
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            max_depth: DEFAULT_MAX_DEPTH,
            diagnostics: Vec::new(),
        }
    }

    /// Creates a parser honouring the given configuration.
    #[must_use]
    pub fn with_config(tokens: &'t [Token], config: &InterpretConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            ..Self::new(tokens)
        }
    }

    /// Parses all tokens into a document.
    #[must_use]
    pub fn parse(self) -> Document {
        self.parse_with_diagnostics().0
    }

    /// Parses all tokens, also returning every malformed fragment skipped.
    #[must_use]
    pub fn parse_with_diagnostics(mut self) -> (Document, Vec<Error>) {
        let mut statements = Vec::new();
        let mut pos = 0;

        while pos < self.tokens.len() {
            let (statement, next) = self.parse_statement(pos, 0);
            if let Some(statement) = statement {
                log::trace!("parsed {} statement at token {pos}", statement.kind_name());
                statements.push(statement);
            }
            pos = next.max(pos + 1);

            if self.kind_at(pos) == Some(TokenKind::Separator) {
                pos += 1;
            }
        }

        (Document::new(statements), self.diagnostics)
    }

    /// Parses one statement starting at `pos`.
    ///
    /// Returns no statement, and a cursor one past `pos`, when the token at
    /// `pos` cannot start a statement.
    fn parse_statement(&mut self, pos: usize, depth: usize) -> (Option<Statement>, usize) {
        let tokens = self.tokens;
        let Some(token) = tokens.get(pos) else {
            return (None, pos);
        };

        match token.kind {
            TokenKind::Perspective => {
                let (perspective, next) = self.parse_perspective(pos, depth);
                (Some(Statement::Perspective(perspective)), next)
            }
            TokenKind::TopicMarker => {
                let (named, next) = self.parse_named(pos, depth);
                (Some(Statement::Topic(named)), next)
            }
            TokenKind::EntityMarker => {
                let (named, next) = self.parse_named(pos, depth);
                (Some(Statement::Entity(named)), next)
            }
            TokenKind::QueryMarker => {
                let (query, next) = self.parse_query(pos, depth);
                (Some(Statement::Query(query)), next)
            }
            TokenKind::CommandMarker => {
                let (command, next) = self.parse_command(pos, depth);
                (Some(Statement::Command(command)), next)
            }
            // An empty statement between separators.
            TokenKind::Separator => (None, pos + 1),
            kind => {
                log::debug!("skipping {} that cannot start a statement", kind.name());
                self.diagnostics
                    .push(Error::unexpected_token(kind.name(), token.offset()));
                (None, pos + 1)
            }
        }
    }

    /// Parses a statement nested one level below `depth`.
    ///
    /// Consumes nothing when the next token cannot start a statement or the
    /// nesting limit is reached.
    fn parse_nested(&mut self, pos: usize, depth: usize) -> (Option<Statement>, usize) {
        match self.kind_at(pos) {
            Some(kind) if kind.starts_statement() => {}
            found => {
                let name = found.map_or("end of input", TokenKind::name);
                self.diagnostics.push(Error::unexpected_token(
                    format!("{name} where a statement was expected"),
                    self.offset_at(pos),
                ));
                return (None, pos);
            }
        }

        if depth >= self.max_depth {
            log::debug!("nesting limit {} reached at token {pos}", self.max_depth);
            self.diagnostics
                .push(Error::nesting_too_deep(self.max_depth, self.offset_at(pos)));
            return (None, pos);
        }

        self.parse_statement(pos, depth + 1)
    }

    /// Parses `<povX>` followed by the statement it wraps.
    fn parse_perspective(&mut self, pos: usize, depth: usize) -> (Perspective, usize) {
        let code = self.tokens[pos].text.clone();
        let (child, next) = self.parse_nested(pos + 1, depth);
        let perspective = Perspective {
            code,
            child: child.map(Box::new),
        };
        (perspective, next)
    }

    /// Parses `#name` or `@name` and its modifiers.
    fn parse_named(&mut self, pos: usize, depth: usize) -> (Named, usize) {
        let mut pos = pos + 1;
        let mut named = Named::default();

        if let Some(text) = self.text_at(pos) {
            named.name = text.to_string();
            pos += 1;
        }

        let (modifiers, next) = self.parse_modifiers(pos, depth);
        named.modifiers = modifiers;
        (named, next)
    }

    /// Parses `?`, an optional `#topic` target, and modifiers.
    fn parse_query(&mut self, pos: usize, depth: usize) -> (Query, usize) {
        let mut pos = pos + 1;
        let mut query = Query::default();

        if self.kind_at(pos) == Some(TokenKind::TopicMarker) {
            let (target, next) = self.parse_named(pos, depth);
            query.target = Some(target);
            pos = next;
        }

        let (modifiers, next) = self.parse_modifiers(pos, depth);
        query.modifiers = modifiers;
        (query, next)
    }

    /// Parses `!action`, an optional `(parameter list)`, and modifiers.
    fn parse_command(&mut self, pos: usize, depth: usize) -> (Command, usize) {
        let mut pos = pos + 1;
        let mut command = Command::default();

        if let Some(text) = self.text_at(pos) {
            command.action = text.to_string();
            pos += 1;
        }

        if self.kind_at(pos) == Some(TokenKind::ParamStart) {
            let params = self.scan_delimited(pos);
            command.parameters = params.words;
            pos = params.end;
        }

        let (modifiers, next) = self.parse_modifiers(pos, depth);
        command.modifiers = modifiers;
        (command, next)
    }

    /// Parses modifiers until a separator or the end of input.
    fn parse_modifiers(&mut self, pos: usize, depth: usize) -> (Vec<Modifier>, usize) {
        let tokens = self.tokens;
        let mut modifiers = Vec::new();
        let mut pos = pos;

        while let Some(token) = tokens.get(pos) {
            match token.kind {
                TokenKind::Separator => break,
                TokenKind::ImportanceMarker => {
                    pos += 1;
                    if let Some(text) = self.expect_text(pos, token) {
                        modifiers.push(Modifier::Importance(text.to_string()));
                        pos += 1;
                    }
                }
                TokenKind::Approximate => {
                    pos += 1;
                    if let Some(text) = self.expect_text(pos, token) {
                        modifiers.push(Modifier::Approximate(text.to_string()));
                        pos += 1;
                    }
                }
                TokenKind::Positive => {
                    modifiers.push(Modifier::Sentiment(Sentiment::Positive));
                    pos += 1;
                }
                TokenKind::Negative => {
                    modifiers.push(Modifier::Sentiment(Sentiment::Negative));
                    pos += 1;
                }
                TokenKind::Emphasis => {
                    modifiers.push(Modifier::Emphasis);
                    pos += 1;
                }
                TokenKind::Temporal => {
                    modifiers.push(Modifier::Temporal(token.text.clone()));
                    pos += 1;
                }
                TokenKind::Emotion => {
                    modifiers.push(Modifier::Emotion(token.text.clone()));
                    pos += 1;
                }
                TokenKind::Motion => {
                    modifiers.push(Modifier::Motion(token.text.clone()));
                    pos += 1;
                }
                TokenKind::Visual => {
                    modifiers.push(Modifier::Visual(token.text.clone()));
                    pos += 1;
                }
                TokenKind::Relationship => {
                    modifiers.push(Modifier::Relationship(token.text.clone()));
                    pos += 1;
                }
                // `>>` has to be tried before `>` claims its first half.
                TokenKind::Result if self.kind_at(pos + 1) == Some(TokenKind::Result) => {
                    let (nested, next) = self.parse_nested(pos + 2, depth);
                    if let Some(nested) = nested {
                        modifiers.push(Modifier::Sequence(Box::new(nested)));
                    }
                    pos = next;
                }
                TokenKind::Result => {
                    let (nested, next) = self.parse_nested(pos + 1, depth);
                    if let Some(nested) = nested {
                        modifiers.push(Modifier::Result(Box::new(nested)));
                    }
                    pos = next;
                }
                TokenKind::GroupStart => {
                    let group = self.scan_delimited(pos);
                    if group.inner > 0 {
                        modifiers.push(Modifier::Group(group.words.join("-")));
                    }
                    pos = group.end;
                }
                kind => {
                    log::debug!("skipping {} inside modifiers", kind.name());
                    self.diagnostics
                        .push(Error::unexpected_token(kind.name(), token.offset()));
                    pos += 1;
                }
            }
        }

        (modifiers, pos)
    }

    /// Collects the words between the delimiter at `open` and its matching
    /// closer, honouring nested delimiters of the same kind.
    fn scan_delimited(&mut self, open: usize) -> Delimited {
        let tokens = self.tokens;
        let opener = &tokens[open];
        let open_kind = opener.kind;
        let close_kind = match open_kind {
            TokenKind::ParamStart => TokenKind::ParamEnd,
            _ => TokenKind::GroupEnd,
        };

        let mut depth = 1usize;
        let mut pos = open + 1;
        let mut words = Vec::new();

        while let Some(token) = tokens.get(pos) {
            if token.kind == open_kind {
                depth += 1;
            } else if token.kind == close_kind {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            } else if token.kind == TokenKind::Text {
                words.push(token.text.clone());
            }
            pos += 1;
        }

        let inner = pos - (open + 1);
        let end = if pos < tokens.len() {
            pos + 1
        } else {
            log::debug!("unbalanced {} swallowed the rest of the input", open_kind.name());
            let open_char = opener.text.chars().next().unwrap_or('(');
            self.diagnostics
                .push(Error::unbalanced_delimiter(open_char, opener.offset()));
            tokens.len()
        };

        Delimited { words, inner, end }
    }

    /// Returns the text at `pos`, recording a diagnostic when the marker
    /// before it is left without a value.
    fn expect_text(&mut self, pos: usize, marker: &Token) -> Option<&'t str> {
        let text = self.text_at(pos);
        if text.is_none() {
            let found = self.kind_at(pos).map_or("end of input", TokenKind::name);
            self.diagnostics.push(Error::unexpected_token(
                format!("{found} after {}", marker.kind.name()),
                self.offset_at(pos),
            ));
        }
        text
    }

    /// Returns the kind of the token at `pos`.
    fn kind_at(&self, pos: usize) -> Option<TokenKind> {
        self.tokens.get(pos).map(|t| t.kind)
    }

    /// Returns the value of the token at `pos` if it is `Text`.
    fn text_at(&self, pos: usize) -> Option<&'t str> {
        let tokens = self.tokens;
        tokens
            .get(pos)
            .filter(|t| t.kind == TokenKind::Text)
            .map(|t| t.text.as_str())
    }

    /// Returns the source offset of the token at `pos`, or the end of the
    /// last token when `pos` is past the end.
    fn offset_at(&self, pos: usize) -> usize {
        self.tokens
            .get(pos)
            .or_else(|| self.tokens.last())
            .map_or(0, |t| if pos < self.tokens.len() { t.offset() } else { t.span.end })
    }
}

/// Parses a token sequence into a document.
#[must_use]
pub fn parse(tokens: &[Token]) -> Document {
    Parser::new(tokens).parse()
}
