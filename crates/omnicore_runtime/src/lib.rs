//! REPL, CLI, and dumps for OmniCore.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-translate-print loop
//! - [`LineEditor`] - The editor seam the REPL reads through
//! - [`dump`] - Token and tree dumps, as text or JSON

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dump;
pub mod editor;
pub mod highlight;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::OmniHighlighter;
pub use repl::{Repl, Response};
