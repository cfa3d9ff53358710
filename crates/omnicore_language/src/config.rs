//! Configuration for the interpretation pipeline.

/// Default limit on nested statements (perspective children, results, sequences).
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for lexing, parsing, and generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpretConfig {
    /// Report malformed input as an error instead of skipping it.
    pub strict: bool,

    /// Recognise visual codes (`sky.bright`) as dot-suffix modifiers.
    pub visual_modifiers: bool,

    /// Maximum nesting depth of statements inside statements.
    pub max_depth: usize,
}

impl Default for InterpretConfig {
    fn default() -> Self {
        Self {
            strict: false,
            visual_modifiers: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl InterpretConfig {
    /// Creates a configuration with strict error reporting enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Builder method to set strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder method to enable or disable visual modifiers.
    #[must_use]
    pub fn with_visual_modifiers(mut self, visual: bool) -> Self {
        self.visual_modifiers = visual;
        self
    }

    /// Builder method to set the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
