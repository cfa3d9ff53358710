//! Property tests over the whole pipeline.

use omnicore::interpret;
use omnicore::language::{Modifier, Sentiment, parse, tokenize};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Text made only of characters outside the notation yields no tokens.
    #[test]
    fn unknown_characters_yield_nothing(input in "[$%\"',`\\\\ \t\n\u{e9}\u{3bb}]{0,40}") {
        prop_assert!(tokenize(&input).is_empty());
        prop_assert_eq!(interpret(&input), "");
    }

    /// Sentence count follows statement count.
    #[test]
    fn one_fragment_per_entity(names in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let input = names.iter().map(|n| format!("@{n}")).collect::<Vec<_>>().join(";");
        let output = interpret(&input);
        prop_assert_eq!(output.split(". ").count(), names.len());
    }

    /// Modifiers are recorded in the order they were written.
    #[test]
    fn modifier_order(flags in prop::collection::vec(prop::sample::select(vec!['+', '*', '-']), 0..8)) {
        let input = format!("@x{}", flags.iter().collect::<String>());
        let document = parse(&tokenize(&input));
        let recorded: Vec<char> = document.statements[0]
            .modifiers()
            .iter()
            .map(|m| match m {
                Modifier::Emphasis => '*',
                Modifier::Sentiment(Sentiment::Positive) => '+',
                _ => '-',
            })
            .collect();
        prop_assert_eq!(recorded, flags);
    }
}
