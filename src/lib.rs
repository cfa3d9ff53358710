//! OmniCore - Translator from symbolic notation into English
//!
//! This crate re-exports all layers of the OmniCore system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: omnicore_runtime    - REPL, CLI, token and tree dumps
//! Layer 1: omnicore_language   - Lexer, parser, generator
//! Layer 0: omnicore_foundation - Sigils, symbol tables, errors
//! ```

pub use omnicore_foundation as foundation;
pub use omnicore_language as language;
pub use omnicore_runtime as runtime;

pub use omnicore_language::{InterpretConfig, interpret, interpret_strict, interpret_with};
