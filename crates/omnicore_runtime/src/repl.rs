//! The main REPL implementation.

use std::io::{self, Write};

use omnicore_foundation::{Error, ErrorKind, Result};
use omnicore_language::{Analysis, InterpretConfig, analyze, generate};

use crate::dump::{format_document, format_tokens};
use crate::editor::{LineEditor, ReadResult, RustylineEditor, has_open_delimiter};

/// What the REPL does after evaluating one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print this text and keep going.
    Output(String),
    /// Leave the REPL.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Pipeline configuration, toggled by meta commands.
    config: InterpretConfig,

    /// Print the token stream before each translation.
    show_tokens: bool,

    /// Print the statement tree before each translation.
    show_ast: bool,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            config: InterpretConfig::default(),
            show_tokens: false,
            show_ast: false,
            show_banner: true,
            prompt: "omni> ".to_string(),
            continuation_prompt: "  ... ".to_string(),
        }
    }

    /// Sets the pipeline configuration.
    #[must_use]
    pub fn with_config(mut self, config: InterpretConfig) -> Self {
        self.editor.set_visual_modifiers(config.visual_modifiers);
        self.config = config;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the current pipeline configuration.
    #[must_use]
    pub const fn config(&self) -> &InterpretConfig {
        &self.config
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    if matches!(e.kind, ErrorKind::Io(_)) {
                        return Err(e);
                    }
                    self.print_error(&e);
                }
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false);
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Response::Output(text)) => {
                if !text.is_empty() {
                    println!("{}", self.format_output(&text));
                }
                Ok(true)
            }
            Ok(Response::Quit) => Ok(false),
            Err(e) => {
                self.print_error(&e);
                Ok(true)
            }
        }
    }

    /// Reads a potentially multi-line input.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let result = if first_line {
                self.editor.read_line(&self.prompt)?
            } else {
                self.editor.read_continuation(&self.continuation_prompt)?
            };

            match result {
                ReadResult::Line(line) => {
                    if first_line {
                        input = line;
                    } else {
                        input.push('\n');
                        input.push_str(&line);
                    }

                    if self.is_complete(&input) {
                        return Ok(Some(input));
                    }

                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::new(ErrorKind::Internal(
                        "unexpected EOF in multi-line input".to_string(),
                    )));
                }
            }
        }
    }

    /// Checks if input is complete (no open parameter list or group).
    #[allow(clippy::unused_self)]
    fn is_complete(&self, input: &str) -> bool {
        input.starts_with(':') || !has_open_delimiter(input)
    }

    /// Evaluates one input: a meta command or OmniCore text.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown meta command, or for malformed text
    /// while strict mode is on.
    pub fn eval(&mut self, input: &str) -> Result<Response> {
        let input = input.trim();
        if let Some(command) = input.strip_prefix(':') {
            return self.meta_command(command);
        }

        let Analysis { tokens, document } = analyze(input, &self.config)?;

        let mut out = String::new();
        if self.show_tokens {
            out.push_str(&format_tokens(&tokens));
        }
        if self.show_ast {
            out.push_str(&format_document(&document));
            out.push('\n');
        }
        out.push_str(&generate(&document));

        Ok(Response::Output(out))
    }

    /// Handles `:command`.
    fn meta_command(&mut self, command: &str) -> Result<Response> {
        let toggled = |name: &str, on: bool| {
            Response::Output(format!("{name} {}", if on { "on" } else { "off" }))
        };

        let command = command.trim();
        log::debug!("meta command :{command}");

        match command {
            "tokens" => {
                self.show_tokens = !self.show_tokens;
                Ok(toggled("token display", self.show_tokens))
            }
            "ast" => {
                self.show_ast = !self.show_ast;
                Ok(toggled("tree display", self.show_ast))
            }
            "strict" => {
                self.config.strict = !self.config.strict;
                Ok(toggled("strict mode", self.config.strict))
            }
            "visual" => {
                self.config.visual_modifiers = !self.config.visual_modifiers;
                self.editor.set_visual_modifiers(self.config.visual_modifiers);
                Ok(toggled("visual modifiers", self.config.visual_modifiers))
            }
            "help" | "h" => Ok(Response::Output(HELP.trim_end().to_string())),
            "quit" | "q" | "exit" => Ok(Response::Quit),
            other => Err(Error::new(ErrorKind::Internal(format!(
                "unknown command :{other} (try :help)"
            )))),
        }
    }

    /// Formats a translation for display.
    #[allow(clippy::unused_self)]
    fn format_output(&self, text: &str) -> String {
        format!("\x1b[1m{text}\x1b[0m")
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
        if let Some(context) = &error.context {
            eprintln!("  in: {context}");
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mOmniCore\x1b[0m interpreter v{}", env!("CARGO_PKG_VERSION"));
        println!("Type notation to translate it. :help for commands, Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}

const HELP: &str = "
:tokens   toggle the token stream display
:ast      toggle the statement tree display
:strict   toggle strict mode (report malformed input)
:visual   toggle visual codes such as sky.bright
:help     show this help
:quit     leave the REPL
";
