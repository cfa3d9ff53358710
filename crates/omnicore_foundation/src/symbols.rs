//! Symbol tables for the OmniCore notation.
//!
//! All tables are process-wide constants. Lookups are exact string matches,
//! except for relationship operators which are matched longest-prefix-first
//! against the remaining input.

use std::fmt;

/// A single reserved punctuation character with a fixed meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Sigil {
    /// `#`
    Topic,
    /// `@`
    Entity,
    /// `?`
    Query,
    /// `!`
    Command,
    /// `^`
    Importance,
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
    Property,
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
}

impl Sigil {
    /// Every sigil, in table order.
    pub const ALL: [Self; 23] = [
        Self::Topic,
        Self::Entity,
        Self::Query,
        Self::Command,
        Self::Importance,
        Self::Positive,
        Self::Negative,
        Self::Equals,
        Self::Result,
        Self::Source,
        Self::Property,
        Self::Elaboration,
        Self::Separator,
        Self::GroupStart,
        Self::GroupEnd,
        Self::ParamStart,
        Self::ParamEnd,
        Self::Approximate,
        Self::Alternative,
        Self::Conjunction,
        Self::OptionalStart,
        Self::OptionalEnd,
        Self::Emphasis,
    ];

    /// Looks up the sigil for a character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '#' => Self::Topic,
            '@' => Self::Entity,
            '?' => Self::Query,
            '!' => Self::Command,
            '^' => Self::Importance,
            '+' => Self::Positive,
            '-' => Self::Negative,
            '=' => Self::Equals,
            '>' => Self::Result,
            '<' => Self::Source,
            '.' => Self::Property,
            ':' => Self::Elaboration,
            ';' => Self::Separator,
            '[' => Self::GroupStart,
            ']' => Self::GroupEnd,
            '(' => Self::ParamStart,
            ')' => Self::ParamEnd,
            '~' => Self::Approximate,
            '|' => Self::Alternative,
            '&' => Self::Conjunction,
            '{' => Self::OptionalStart,
            '}' => Self::OptionalEnd,
            '*' => Self::Emphasis,
            _ => return None,
        })
    }

    /// Returns the character for this sigil.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Topic => '#',
            Self::Entity => '@',
            Self::Query => '?',
            Self::Command => '!',
            Self::Importance => '^',
            Self::Positive => '+',
            Self::Negative => '-',
            Self::Equals => '=',
            Self::Result => '>',
            Self::Source => '<',
            Self::Property => '.',
            Self::Elaboration => ':',
            Self::Separator => ';',
            Self::GroupStart => '[',
            Self::GroupEnd => ']',
            Self::ParamStart => '(',
            Self::ParamEnd => ')',
            Self::Approximate => '~',
            Self::Alternative => '|',
            Self::Conjunction => '&',
            Self::OptionalStart => '{',
            Self::OptionalEnd => '}',
            Self::Emphasis => '*',
        }
    }

    /// Returns the semantic category name of this sigil.
    #[must_use]
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Entity => "entity",
            Self::Query => "query",
            Self::Command => "command",
            Self::Importance => "importance",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Equals => "equals",
            Self::Result => "result",
            Self::Source => "source",
            Self::Property => "property",
            Self::Elaboration => "elaboration",
            Self::Separator => "separator",
            Self::GroupStart => "group_start",
            Self::GroupEnd => "group_end",
            Self::ParamStart => "param_start",
            Self::ParamEnd => "param_end",
            Self::Approximate => "approximate",
            Self::Alternative => "alternative",
            Self::Conjunction => "conjunction",
            Self::OptionalStart => "optional_start",
            Self::OptionalEnd => "optional_end",
            Self::Emphasis => "emphasis",
        }
    }
}

/// The namespace a symbol table belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Namespace {
    /// Single-character sigils.
    Special,
    /// Tense codes such as `p` or `prf`.
    Temporal,
    /// Emotion codes such as `joy`.
    Emotion,
    /// Visual quality codes such as `bright`.
    Visual,
    /// Motion quality codes such as `drift`.
    Motion,
    /// Multi-character relationship operators such as `<:>`.
    Relationship,
    /// Perspective codes such as `pov1`.
    Perspective,
    /// Name abbreviations such as `usr`.
    Abbreviation,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Special => "special",
            Self::Temporal => "temporal",
            Self::Emotion => "emotion",
            Self::Visual => "visual",
            Self::Motion => "motion",
            Self::Relationship => "relationship",
            Self::Perspective => "perspective",
            Self::Abbreviation => "abbreviation",
        };
        f.write_str(name)
    }
}

/// An immutable `code -> meaning` table.
#[derive(Debug)]
pub struct SymbolTable {
    namespace: Namespace,
    entries: &'static [(&'static str, &'static str)],
}

impl SymbolTable {
    /// Creates a table over static entries.
    #[must_use]
    pub const fn new(
        namespace: Namespace,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { namespace, entries }
    }

    /// Returns the namespace of this table.
    #[must_use]
    pub const fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Looks up the meaning of a code.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, meaning)| *meaning)
    }

    /// Returns true if the code is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// Returns the registered code that is equal to `code`, with a static lifetime.
    #[must_use]
    pub fn code(&self, code: &str) -> Option<&'static str> {
        self.entries.iter().find(|(c, _)| *c == code).map(|(c, _)| *c)
    }

    /// Finds the longest registered code that `input` starts with.
    ///
    /// Codes are unique, so at most one code of any given length can match and
    /// the result does not depend on table order.
    #[must_use]
    pub fn longest_prefix(&self, input: &str) -> Option<(&'static str, &'static str)> {
        self.entries
            .iter()
            .filter(|(code, _)| input.starts_with(code))
            .max_by_key(|(code, _)| code.len())
            .copied()
    }

    /// Iterates over `(code, meaning)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

/// Tense codes.
pub static TEMPORAL: SymbolTable = SymbolTable::new(
    Namespace::Temporal,
    &[
        ("p", "past"),
        ("n", "present"),
        ("f", "future"),
        ("c", "continuous"),
        ("prf", "perfect"),
        ("seq", "sequential"),
    ],
);

/// Emotion codes.
pub static EMOTION: SymbolTable = SymbolTable::new(
    Namespace::Emotion,
    &[
        ("joy", "joy"),
        ("sad", "sadness"),
        ("ang", "anger"),
        ("fear", "fear"),
        ("surp", "surprise"),
        ("disg", "disgust"),
        ("trust", "trust"),
        ("ant", "anticipation"),
        ("won", "wonder"),
        ("conf", "confusion"),
    ],
);

/// Visual quality codes.
pub static VISUAL: SymbolTable = SymbolTable::new(
    Namespace::Visual,
    &[
        ("dim", "dim"),
        ("bright", "bright"),
        ("vast", "vast"),
        ("tiny", "tiny"),
        ("dense", "dense"),
        ("sparse", "sparse"),
        ("smooth", "smooth"),
        ("rough", "rough"),
        ("round", "round"),
        ("sharp", "sharp"),
    ],
);

/// Motion quality codes.
pub static MOTION: SymbolTable = SymbolTable::new(
    Namespace::Motion,
    &[
        ("fast", "fast"),
        ("slow", "slow"),
        ("sudden", "sudden"),
        ("steady", "steady"),
        ("erratic", "erratic"),
        ("drift", "drifting"),
        ("plunge", "plunging"),
        ("ascend", "ascending"),
        ("circle", "circular"),
        ("zigzag", "zigzagging"),
    ],
);

/// Relationship operators.
pub static RELATIONSHIP: SymbolTable = SymbolTable::new(
    Namespace::Relationship,
    &[
        ("<:>", "is a"),
        ("<>", "has"),
        ("><", "is part of"),
        ("<->", "relates bidirectionally with"),
        ("-->", "leads to"),
        ("<=>", "equals"),
        ("<!>", "opposes"),
    ],
);

/// Perspective codes.
pub static PERSPECTIVE: SymbolTable = SymbolTable::new(
    Namespace::Perspective,
    &[
        ("pov1", "first-person perspective"),
        ("pov2", "second-person perspective"),
        ("pov3", "third-person perspective"),
        ("povO", "omniscient perspective"),
        ("povL", "limited perspective"),
    ],
);

/// Common name abbreviations.
pub static ABBREVIATIONS: SymbolTable = SymbolTable::new(
    Namespace::Abbreviation,
    &[
        ("usr", "user"),
        ("sys", "system"),
        ("ctx", "context"),
        ("inf", "information"),
        ("qry", "query"),
        ("rsp", "response"),
        ("cmd", "command"),
        ("arg", "argument"),
        ("obj", "object"),
        ("fnc", "function"),
        ("def", "definition"),
        ("ref", "reference"),
        ("val", "value"),
        ("var", "variable"),
        ("op", "operation"),
        ("cnd", "condition"),
        ("rel", "relation"),
        ("attr", "attribute"),
        ("doc", "documentation"),
        ("mem", "memory"),
    ],
);

/// Expands a name through the abbreviation table, or returns it unchanged.
#[must_use]
pub fn expand_abbreviation(name: &str) -> &str {
    ABBREVIATIONS.lookup(name).unwrap_or(name)
}

/// Classifies a dot-suffix code as a modifier namespace.
///
/// Temporal codes win over emotion codes, which win over motion codes. The
/// visual table is only consulted when `visual` is set.
#[must_use]
pub fn modifier_namespace(code: &str, visual: bool) -> Option<Namespace> {
    if TEMPORAL.contains(code) {
        Some(Namespace::Temporal)
    } else if EMOTION.contains(code) {
        Some(Namespace::Emotion)
    } else if MOTION.contains(code) {
        Some(Namespace::Motion)
    } else if visual && VISUAL.contains(code) {
        Some(Namespace::Visual)
    } else {
        None
    }
}
