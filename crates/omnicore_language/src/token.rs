//! Token types for the OmniCore notation.
//!
//! Tokens are the output of the lexer and input to the parser.

use omnicore_foundation::Sigil;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The category of this token.
    pub kind: TokenKind,
    /// The token's value: the sigil, the word, or the bare code.
    pub text: String,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns the byte offset where this token starts.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.span.start
    }
}

/// Token categories of the notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Statement sigils
    /// `#`
    TopicMarker,
    /// `@`
    EntityMarker,
    /// `?`
    QueryMarker,
    /// `!`
    CommandMarker,

    // Modifier sigils
    /// `^`
    ImportanceMarker,
    /// `+`
    Positive,
    /// `-`
    Negative,
    /// `=`
    Equals,
    /// `>`
    Result,
    /// `<`
    Source,
    /// `.`
    PropertyDot,
    /// `:`
    Elaboration,
    /// `;`
    Separator,
    /// `[`
    GroupStart,
    /// `]`
    GroupEnd,
    /// `(`
    ParamStart,
    /// `)`
    ParamEnd,
    /// `~`
    Approximate,
    /// `|`
    Alternative,
    /// `&`
    Conjunction,
    /// `{`
    OptionalStart,
    /// `}`
    OptionalEnd,
    /// `*`
    Emphasis,

    // Multi-character and coded tokens
    /// `<pov1>` and friends; the token text is the bare code.
    Perspective,
    /// `<:>`, `-->`, ...
    Relationship,
    /// Tense code split off a word, as in `topic.p`.
    Temporal,
    /// Emotion code split off a word, as in `usr.joy`.
    Emotion,
    /// Motion code split off a word, as in `leaf.drift`.
    Motion,
    /// Visual code split off a word, only when visual modifiers are enabled.
    Visual,
    /// A word: letters, digits, `_`, and internal `-` or `.`.
    Text,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopicMarker => "'#'",
            Self::EntityMarker => "'@'",
            Self::QueryMarker => "'?'",
            Self::CommandMarker => "'!'",
            Self::ImportanceMarker => "'^'",
            Self::Positive => "'+'",
            Self::Negative => "'-'",
            Self::Equals => "'='",
            Self::Result => "'>'",
            Self::Source => "'<'",
            Self::PropertyDot => "'.'",
            Self::Elaboration => "':'",
            Self::Separator => "';'",
            Self::GroupStart => "'['",
            Self::GroupEnd => "']'",
            Self::ParamStart => "'('",
            Self::ParamEnd => "')'",
            Self::Approximate => "'~'",
            Self::Alternative => "'|'",
            Self::Conjunction => "'&'",
            Self::OptionalStart => "'{'",
            Self::OptionalEnd => "'}'",
            Self::Emphasis => "'*'",
            Self::Perspective => "perspective",
            Self::Relationship => "relationship",
            Self::Temporal => "temporal code",
            Self::Emotion => "emotion code",
            Self::Motion => "motion code",
            Self::Visual => "visual code",
            Self::Text => "text",
        }
    }

    /// Returns true if this kind can begin a statement.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(
            self,
            Self::Perspective
                | Self::TopicMarker
                | Self::EntityMarker
                | Self::QueryMarker
                | Self::CommandMarker
        )
    }
}

impl From<Sigil> for TokenKind {
    fn from(sigil: Sigil) -> Self {
        match sigil {
            Sigil::Topic => Self::TopicMarker,
            Sigil::Entity => Self::EntityMarker,
            Sigil::Query => Self::QueryMarker,
            Sigil::Command => Self::CommandMarker,
            Sigil::Importance => Self::ImportanceMarker,
            Sigil::Positive => Self::Positive,
            Sigil::Negative => Self::Negative,
            Sigil::Equals => Self::Equals,
            Sigil::Result => Self::Result,
            Sigil::Source => Self::Source,
            Sigil::Property => Self::PropertyDot,
            Sigil::Elaboration => Self::Elaboration,
            Sigil::Separator => Self::Separator,
            Sigil::GroupStart => Self::GroupStart,
            Sigil::GroupEnd => Self::GroupEnd,
            Sigil::ParamStart => Self::ParamStart,
            Sigil::ParamEnd => Self::ParamEnd,
            Sigil::Approximate => Self::Approximate,
            Sigil::Alternative => Self::Alternative,
            Sigil::Conjunction => Self::Conjunction,
            Sigil::OptionalStart => Self::OptionalStart,
            Sigil::OptionalEnd => Self::OptionalEnd,
            Sigil::Emphasis => Self::Emphasis,
        }
    }
}
