//! Symbol tables and error types for OmniCore.
//!
//! This crate provides:
//! - [`Sigil`] - The single-character sigils of the notation
//! - [`SymbolTable`] - Read-only code-to-meaning tables (temporal, emotion, ...)
//! - [`Error`] - Rich error types used by the strict pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod symbols;

pub use error::{Error, ErrorKind, Result};
pub use symbols::{
    ABBREVIATIONS, EMOTION, MOTION, Namespace, PERSPECTIVE, RELATIONSHIP, Sigil, SymbolTable,
    TEMPORAL, VISUAL, expand_abbreviation, modifier_namespace,
};
