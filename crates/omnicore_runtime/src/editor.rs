//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while remaining testable.

use std::borrow::Cow;

use omnicore_foundation::{
    ABBREVIATIONS, EMOTION, Error, ErrorKind, MOTION, PERSPECTIVE, Result, TEMPORAL, VISUAL,
};
use omnicore_language::{Parser, tokenize};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};

use crate::highlight::OmniHighlighter;

/// Meta commands understood by the REPL.
pub const META_COMMANDS: &[&str] = &[":tokens", ":ast", ":strict", ":visual", ":help", ":quit"];

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Read a continuation line (for multi-line input).
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_continuation(&mut self, prompt: &str) -> Result<ReadResult> {
        self.read_line(prompt)
    }

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Switch highlighting of visual codes on or off.
    fn set_visual_modifiers(&mut self, _visual: bool) {}
}

/// Helper for rustyline that provides completion, hints, highlighting, and validation.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct OmniHelper {
    #[rustyline(Completer)]
    completer: CodeCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: BracketValidator,
    highlighter: OmniHighlighter,
}

impl Highlighter for OmniHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for abbreviations, coded modifiers, perspectives, and meta commands.
#[derive(Default)]
struct CodeCompleter;

impl CodeCompleter {
    /// Returns the candidates for the word ending at `pos`, and where it starts.
    fn candidates(line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before = &line[..pos];

        if before.starts_with(':') && !before.contains(char::is_whitespace) {
            return (0, matching(META_COMMANDS.iter().map(|c| (*c, "")), before));
        }

        let start = before
            .rfind(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .map_or(0, |i| i + 1);
        let word = &before[start..];

        let candidates = match before[..start].chars().next_back() {
            Some('.') => matching(
                TEMPORAL
                    .iter()
                    .chain(EMOTION.iter())
                    .chain(MOTION.iter())
                    .chain(VISUAL.iter()),
                word,
            ),
            Some('<') => matching(PERSPECTIVE.iter(), word),
            _ => matching(ABBREVIATIONS.iter(), word),
        };

        (start, candidates)
    }
}

fn matching<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>, word: &str) -> Vec<Pair> {
    entries
        .filter(|(code, _)| code.starts_with(word))
        .map(|(code, meaning)| Pair {
            display: if meaning.is_empty() || meaning == code {
                code.to_string()
            } else {
                format!("{code}  {meaning}")
            },
            replacement: code.to_string(),
        })
        .collect()
}

impl Completer for CodeCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(Self::candidates(line, pos))
    }
}

/// Returns true while a parameter list or group in the input is still open.
///
/// Brackets are matched by the parser itself, so a line is incomplete exactly
/// when parsing it would swallow the rest of the input.
#[must_use]
pub fn has_open_delimiter(input: &str) -> bool {
    let tokens = tokenize(input);
    let (_, diagnostics) = Parser::new(&tokens).parse_with_diagnostics();
    diagnostics
        .iter()
        .any(|e| matches!(e.kind, ErrorKind::UnbalancedDelimiter { .. }))
}

/// Validator for bracket matching (enables multi-line input).
#[derive(Default)]
struct BracketValidator;

impl Validator for BracketValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if has_open_delimiter(ctx.input()) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<OmniHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = OmniHelper {
            completer: CodeCompleter,
            hinter: HistoryHinter::new(),
            validator: BracketValidator,
            highlighter: OmniHighlighter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(ReadlineError::Io(e)) => Err(e.into()),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_visual_modifiers(&mut self, visual: bool) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.highlighter.set_visual_modifiers(visual);
        }
    }
}
