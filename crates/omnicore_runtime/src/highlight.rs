//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use omnicore_language::{InterpretConfig, Lexer, TokenKind};

const RESET: &str = "\x1b[0m";

/// Highlighter for OmniCore notation, driven by the lexer itself.
pub struct OmniHighlighter {
    config: InterpretConfig,
}

impl OmniHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: InterpretConfig::default(),
        }
    }

    /// Sets whether visual codes are highlighted as modifiers.
    pub fn set_visual_modifiers(&mut self, visual: bool) {
        self.config.visual_modifiers = visual;
    }

    /// Highlight a line of input.
    ///
    /// Characters the lexer drops are shown in red; whitespace and the dot
    /// before a coded modifier are copied through unchanged.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with(':') {
            return Cow::Owned(format!("\x1b[1;34m{line}{RESET}"));
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut cursor = 0;

        for token in Lexer::with_config(line, &self.config) {
            push_gap(&mut result, &line[cursor..token.span.start]);

            let text = token.span.text(line);
            match color(token.kind) {
                Some(color) => {
                    result.push_str(color);
                    result.push_str(text);
                    result.push_str(RESET);
                }
                None => result.push_str(text),
            }
            cursor = token.span.end;
        }
        push_gap(&mut result, &line[cursor..]);

        Cow::Owned(result)
    }
}

impl Default for OmniHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the text between tokens, marking anything the lexer dropped.
fn push_gap(result: &mut String, gap: &str) {
    for c in gap.chars() {
        if c.is_whitespace() || c == '.' {
            result.push(c);
        } else {
            result.push_str("\x1b[4;31m");
            result.push(c);
            result.push_str(RESET);
        }
    }
}

fn color(kind: TokenKind) -> Option<&'static str> {
    let color = match kind {
        TokenKind::Perspective => "\x1b[1;36m",
        TokenKind::TopicMarker | TokenKind::EntityMarker => "\x1b[1;32m",
        TokenKind::QueryMarker | TokenKind::CommandMarker => "\x1b[1;34m",
        TokenKind::Temporal | TokenKind::Emotion | TokenKind::Motion | TokenKind::Visual => {
            "\x1b[35m"
        }
        TokenKind::Relationship | TokenKind::Result => "\x1b[33m",
        TokenKind::ParamStart
        | TokenKind::ParamEnd
        | TokenKind::GroupStart
        | TokenKind::GroupEnd => "\x1b[1m",
        TokenKind::Separator => "\x1b[2m",
        TokenKind::Text => return None,
        _ => "\x1b[36m",
    };
    Some(color)
}
