//! Statement tree for the OmniCore notation.
//!
//! Every nested statement is owned by exactly one parent: the document, a
//! perspective's child slot, a query's target, or a `Result`/`Sequence`
//! modifier.

/// A parsed document: the top-level statements in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    /// Top-level statements. Unparseable fragments never make it in here.
    pub statements: Vec<Statement>,
}

impl Document {
    /// Creates a document from statements.
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Returns the number of top-level statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns true if nothing could be parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// One statement of the notation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Statement {
    /// `<pov1>` wrapping the statement after it.
    Perspective(Perspective),
    /// `#name`
    Topic(Named),
    /// `@name`
    Entity(Named),
    /// `?` optionally followed by a topic.
    Query(Query),
    /// `!action(params)`
    Command(Command),
}

impl Statement {
    /// Returns the modifiers attached directly to this statement.
    ///
    /// Perspectives carry no modifiers of their own.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        match self {
            Self::Perspective(_) => &[],
            Self::Topic(named) | Self::Entity(named) => &named.modifiers,
            Self::Query(query) => &query.modifiers,
            Self::Command(command) => &command.modifiers,
        }
    }

    /// Returns the kind of statement as a lowercase name.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Perspective(_) => "perspective",
            Self::Topic(_) => "topic",
            Self::Entity(_) => "entity",
            Self::Query(_) => "query",
            Self::Command(_) => "command",
        }
    }

    /// Returns the name if this is a topic or entity.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Topic(named) | Self::Entity(named) => Some(&named.name),
            _ => None,
        }
    }
}

/// A perspective marker and the statement it wraps.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Perspective {
    /// The bare perspective code, e.g. `pov1`.
    pub code: String,
    /// The wrapped statement, if one followed.
    pub child: Option<Box<Statement>>,
}

/// A topic or entity: a possibly abbreviated name and its modifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Named {
    /// The name as written, e.g. `usr`.
    pub name: String,
    /// Modifiers in source order.
    pub modifiers: Vec<Modifier>,
}

impl Named {
    /// Creates a name without modifiers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
        }
    }

    /// Builder method to append a modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

/// A question, optionally about a topic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Query {
    /// The topic asked about.
    pub target: Option<Named>,
    /// Modifiers in source order.
    pub modifiers: Vec<Modifier>,
}

/// An action with parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Command {
    /// The action name as written.
    pub action: String,
    /// Parameter words in source order; duplicates are kept.
    pub parameters: Vec<String>,
    /// Modifiers in source order.
    pub modifiers: Vec<Modifier>,
}

/// Polarity of a `+` or `-` sentiment marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Sentiment {
    /// `+`
    Positive,
    /// `-`
    Negative,
}

impl Sentiment {
    /// Returns the sentiment as a word.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// An attribute refining a statement.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "snake_case"))]
pub enum Modifier {
    /// `^high`
    Importance(String),
    /// `+` or `-`
    Sentiment(Sentiment),
    /// `*`
    Emphasis,
    /// Tense code such as `p`.
    Temporal(String),
    /// Emotion code such as `joy`.
    Emotion(String),
    /// Motion code such as `drift`.
    Motion(String),
    /// Visual code such as `bright`.
    Visual(String),
    /// Relationship operator such as `<:>`.
    Relationship(String),
    /// `~value`
    Approximate(String),
    /// `[a b]`, words joined with `-`.
    Group(String),
    /// `> statement`
    Result(Box<Statement>),
    /// `>> statement`
    Sequence(Box<Statement>),
}
