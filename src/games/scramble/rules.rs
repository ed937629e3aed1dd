use serde::{Deserialize, Serialize};

use crate::{games::scramble::dictionary::SpellChecker, models::scramble::Outcome, state::RoundState};

pub const LOCALE: &str = "en";

/// Optional restrictions layered on top of the three core rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPolicy {
    pub allow_base_word: bool,
    pub min_word_length: usize,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            allow_base_word: true,
            min_word_length: 0,
        }
    }
}

pub struct RuleContext<'a> {
    pub base_word: &'a str,
    pub answers: &'a [String],
    pub dictionary: &'a dyn SpellChecker,
    pub policy: SubmissionPolicy,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        state: &'a RoundState,
        dictionary: &'a dyn SpellChecker,
        policy: SubmissionPolicy,
    ) -> Self {
        Self {
            base_word: state.base_word(),
            answers: state.answers(),
            dictionary,
            policy,
        }
    }
}

pub struct Rule {
    pub name: &'static str,
    pub rejection: Outcome,
    pub validate: fn(&str, &RuleContext) -> bool,
}

/// Rules in evaluation order. The first failing rule decides the outcome.
pub fn get_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "possible",
            rejection: Outcome::RejectedNotPossible,
            validate: |word, ctx| word_is_possible(word, ctx.base_word),
        },
        Rule {
            name: "original",
            rejection: Outcome::RejectedNotOriginal,
            validate: |word, ctx| word_is_original(word, ctx.answers),
        },
        Rule {
            name: "real",
            rejection: Outcome::RejectedNotReal,
            validate: |word, ctx| word_is_real(word, ctx.dictionary),
        },
        Rule {
            name: "not_base_word",
            rejection: Outcome::RejectedBaseWord,
            validate: |word, ctx| {
                ctx.policy.allow_base_word || word.to_lowercase() != ctx.base_word.to_lowercase()
            },
        },
        Rule {
            name: "min_length",
            rejection: Outcome::RejectedTooShort,
            validate: |word, ctx| word.chars().count() >= ctx.policy.min_word_length,
        },
    ]
}

pub fn find_rule_by_name<'a>(rules: &'a [Rule], name: &str) -> Option<&'a Rule> {
    rules.iter().find(|rule| rule.name == name)
}

/// True when every letter of `word` can be taken from `base_word`, each base
/// letter used at most once. Case is ignored.
pub fn word_is_possible(word: &str, base_word: &str) -> bool {
    let mut remaining: Vec<char> = base_word.to_lowercase().chars().collect();

    for letter in word.to_lowercase().chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.remove(pos);
            }
            None => return false,
        }
    }

    true
}

pub fn word_is_original(word: &str, answers: &[String]) -> bool {
    let word = word.to_lowercase();
    !answers.iter().any(|answer| answer.to_lowercase() == word)
}

pub fn word_is_real(word: &str, dictionary: &dyn SpellChecker) -> bool {
    dictionary.is_real(&word.to_lowercase(), LOCALE)
}

pub fn classify(
    candidate: &str,
    state: &RoundState,
    dictionary: &dyn SpellChecker,
    policy: SubmissionPolicy,
) -> Outcome {
    let ctx = RuleContext::new(state, dictionary, policy);

    let outcome = get_rules()
        .iter()
        .find(|rule| !(rule.validate)(candidate, &ctx))
        .map(|rule| rule.rejection)
        .unwrap_or(Outcome::Accepted);

    tracing::debug!(
        "Classified '{}' against '{}': {:?}",
        candidate,
        state.base_word(),
        outcome
    );
    outcome
}
