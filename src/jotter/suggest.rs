//! # Suggestion Workflow
//!
//! Extends a seed text by a number of predicted words. Each word is predicted from
//! the text accumulated so far, so the loop is strictly sequential:
//!
//! ```text
//! "Neural nets"  ─oracle─▶ "are"       → "Neural nets are"
//! "Neural nets are" ─oracle─▶ "powerful" → "Neural nets are powerful"
//! ```
//!
//! The workflow never touches the note store. It hands back a candidate string that
//! the caller may save.

use crate::error::{JotError, Result};
use crate::oracle::PredictionOracle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const MIN_WORDS: usize = 1;
pub const MAX_WORDS: usize = 20;

/// Clamp a requested word count into `MIN_WORDS..=MAX_WORDS`.
pub fn clamp_words(count: usize) -> usize {
    count.clamp(MIN_WORDS, MAX_WORDS)
}

/// What to do when the oracle predicts an index that has no word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTokenPolicy {
    /// Append an empty word, which shows up as a doubled space.
    #[default]
    Keep,
    /// Drop the prediction. The oracle is still called `count` times.
    Skip,
}

impl fmt::Display for UnknownTokenPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownTokenPolicy::Keep => write!(f, "keep"),
            UnknownTokenPolicy::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for UnknownTokenPolicy {
    type Err = JotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(UnknownTokenPolicy::Keep),
            "skip" => Ok(UnknownTokenPolicy::Skip),
            other => Err(JotError::Api(format!(
                "Unknown token policy '{}' (expected keep or skip)",
                other
            ))),
        }
    }
}

/// Result of a suggestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub seed: String,
    /// The appended words, in order. With `Keep`, unknown predictions are empty strings.
    pub words: Vec<String>,
    /// `seed` followed by each word, every word preceded by one space.
    pub text: String,
}

pub struct Suggester<O: PredictionOracle> {
    oracle: O,
    policy: UnknownTokenPolicy,
}

impl<O: PredictionOracle> Suggester<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            policy: UnknownTokenPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: UnknownTokenPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> UnknownTokenPolicy {
        self.policy
    }

    /// Lazily predict `count` tokens after `seed`, one oracle call per item.
    pub fn tokens(&self, seed: &str, count: usize) -> Predictions<'_, O> {
        Predictions {
            oracle: &self.oracle,
            text: seed.to_string(),
            remaining: count,
        }
    }

    /// Extend `seed` by `count` predicted words.
    pub fn suggest(&self, seed: &str, count: usize) -> Result<Suggestion> {
        if !(MIN_WORDS..=MAX_WORDS).contains(&count) {
            return Err(JotError::InvalidWordCount(count));
        }

        let mut words = Vec::with_capacity(count);
        for token in self.tokens(seed, count) {
            match (token, self.policy) {
                (Some(word), _) => words.push(word),
                (None, UnknownTokenPolicy::Keep) => words.push(String::new()),
                (None, UnknownTokenPolicy::Skip) => {}
            }
        }

        let mut text = seed.to_string();
        for word in &words {
            text.push(' ');
            text.push_str(word);
        }

        debug!(requested = count, appended = words.len(), "suggestion built");
        Ok(Suggestion {
            seed: seed.to_string(),
            words,
            text,
        })
    }
}

/// Iterator returned by [`Suggester::tokens`].
///
/// The accumulated text always grows by `" " + token` (an empty token for `None`),
/// so each prediction sees exactly what a full suggestion would contain.
pub struct Predictions<'a, O: PredictionOracle> {
    oracle: &'a O,
    text: String,
    remaining: usize,
}

impl<O: PredictionOracle> Iterator for Predictions<'_, O> {
    type Item = Option<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let token = self.oracle.next_token(&self.text);
        debug!(token = token.as_deref().unwrap_or(""), "predicted");
        self.text.push(' ');
        if let Some(word) = &token {
            self.text.push_str(word);
        }
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fakes {
    use super::*;
    use std::cell::RefCell;

    /// Replays a fixed script of predictions and records every input it saw.
    pub struct ScriptedOracle {
        script: Vec<Option<String>>,
        seen: RefCell<Vec<String>>,
    }

    impl ScriptedOracle {
        pub fn new(script: &[Option<&str>]) -> Self {
            Self {
                script: script.iter().map(|t| t.map(str::to_string)).collect(),
                seen: RefCell::new(Vec::new()),
            }
        }

        /// Predicts `word` forever.
        pub fn repeating(word: &str) -> Self {
            Self::new(&[Some(word)])
        }

        pub fn seen(&self) -> Vec<String> {
            self.seen.borrow().clone()
        }
    }

    impl PredictionOracle for ScriptedOracle {
        fn next_token(&self, text: &str) -> Option<String> {
            let mut seen = self.seen.borrow_mut();
            let call = seen.len();
            seen.push(text.to_string());
            if self.script.is_empty() {
                return None;
            }
            self.script[call.min(self.script.len() - 1)].clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::ScriptedOracle;
    use super::*;

    #[test]
    fn appends_words_one_at_a_time() {
        let suggester = Suggester::new(ScriptedOracle::new(&[Some("are"), Some("powerful")]));
        let s = suggester.suggest("Neural nets", 2).unwrap();
        assert_eq!(s.text, "Neural nets are powerful");
        assert_eq!(s.words, vec!["are", "powerful"]);
        assert_eq!(s.seed, "Neural nets");
    }

    #[test]
    fn each_prediction_sees_the_growing_text() {
        let suggester = Suggester::new(ScriptedOracle::new(&[Some("b"), Some("c"), Some("d")]));
        suggester.suggest("a", 3).unwrap();
        assert_eq!(suggester.oracle.seen(), vec!["a", "a b", "a b c"]);
    }

    #[test]
    fn appends_exactly_k_words_for_every_k() {
        for k in MIN_WORDS..=MAX_WORDS {
            let suggester = Suggester::new(ScriptedOracle::repeating("word"));
            let s = suggester.suggest("seed text", k).unwrap();
            let tail = s.text.strip_prefix("seed text").unwrap();
            assert_eq!(tail.split_whitespace().count(), k);
            assert_eq!(s.words.len(), k);
        }
    }

    #[test]
    fn unknown_token_is_kept_as_empty_word() {
        assert_eq!(
            Suggester::new(ScriptedOracle::repeating("x")).policy(),
            UnknownTokenPolicy::Keep
        );
        let suggester = Suggester::new(ScriptedOracle::new(&[Some("x"), None, Some("y")]));
        let s = suggester.suggest("seed", 3).unwrap();
        assert_eq!(s.text, "seed x  y");
        assert_eq!(s.words, vec!["x", "", "y"]);
        assert_eq!(suggester.oracle.seen(), vec!["seed", "seed x", "seed x "]);
    }

    #[test]
    fn unknown_token_can_be_skipped() {
        let suggester = Suggester::new(ScriptedOracle::new(&[Some("x"), None, Some("y")]))
            .with_policy(UnknownTokenPolicy::Skip);
        assert_eq!(suggester.policy(), UnknownTokenPolicy::Skip);
        let s = suggester.suggest("seed", 3).unwrap();
        assert_eq!(s.text, "seed x y");
        assert_eq!(suggester.oracle.seen().len(), 3);
    }

    #[test]
    fn rejects_counts_out_of_range() {
        let suggester = Suggester::new(ScriptedOracle::repeating("w"));
        assert!(matches!(
            suggester.suggest("s", 0),
            Err(JotError::InvalidWordCount(0))
        ));
        assert!(matches!(
            suggester.suggest("s", 21),
            Err(JotError::InvalidWordCount(21))
        ));
        assert!(suggester.oracle.seen().is_empty());
    }

    #[test]
    fn tokens_are_lazy() {
        let suggester = Suggester::new(ScriptedOracle::repeating("w"));
        let mut tokens = suggester.tokens("s", 5);
        assert_eq!(tokens.size_hint(), (5, Some(5)));
        assert_eq!(tokens.next(), Some(Some("w".to_string())));
        assert_eq!(suggester.oracle.seen().len(), 1);
    }

    #[test]
    fn clamps_requested_counts() {
        assert_eq!(clamp_words(0), 1);
        assert_eq!(clamp_words(7), 7);
        assert_eq!(clamp_words(99), 20);
    }

    #[test]
    fn policy_parses() {
        assert_eq!(
            "SKIP".parse::<UnknownTokenPolicy>().unwrap(),
            UnknownTokenPolicy::Skip
        );
        assert!("drop".parse::<UnknownTokenPolicy>().is_err());
    }
}
