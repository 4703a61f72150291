//! # Prediction Oracle
//!
//! The oracle answers one question: given the text so far, what is the next word?
//!
//! [`PredictionOracle`] is the seam the suggestion workflow depends on. The production
//! implementation, [`ModelOracle`], pairs a [`Tokenizer`] with a pre-trained
//! [`NgramModel`] loaded from a JSON model file:
//!
//! ```text
//! text ──tokenize──▶ [3, 7, 1] ──last max_len ids──▶ model ──argmax──▶ 5 ──index_word──▶ "networks"
//! ```
//!
//! The model may predict an index the tokenizer has no word for (index 0 is padding).
//! That surfaces as `None`; what to do with it is the caller's policy.

use crate::error::{JotError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

mod ngram;
mod tokenizer;

pub use ngram::NgramModel;
pub use tokenizer::Tokenizer;

/// Deterministic next-token predictor.
pub trait PredictionOracle {
    /// The most likely next word after `text`, or `None` when the predicted
    /// index has no word.
    fn next_token(&self, text: &str) -> Option<String>;
}

impl<O: PredictionOracle + ?Sized> PredictionOracle for Box<O> {
    fn next_token(&self, text: &str) -> Option<String> {
        (**self).next_token(text)
    }
}

/// Tokenizer and model, loaded together from one model file.
#[derive(Debug, Clone)]
pub struct ModelOracle {
    tokenizer: Tokenizer,
    model: NgramModel,
}

impl ModelOracle {
    pub fn new(tokenizer: Tokenizer, model: NgramModel) -> Self {
        Self { tokenizer, model }
    }

    /// Load a model file. Any failure means the oracle is unavailable.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            JotError::OracleUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        let oracle = Self::from_json(&raw).map_err(|e| match e {
            JotError::OracleUnavailable(msg) => {
                JotError::OracleUnavailable(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        if oracle.tokenizer.is_empty() {
            warn!(
                path = %path.display(),
                "prediction model has no words; every suggestion will be blank"
            );
        }
        debug!(
            path = %path.display(),
            words = oracle.tokenizer.len(),
            vocab_size = oracle.model.vocab_size(),
            max_len = oracle.model.max_len(),
            "prediction model loaded"
        );
        Ok(oracle)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let file: ngram::ModelFile = serde_json::from_str(raw)
            .map_err(|e| JotError::OracleUnavailable(format!("malformed model file: {}", e)))?;
        let (tokenizer, model) = file.into_parts()?;
        Ok(Self::new(tokenizer, model))
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

impl PredictionOracle for ModelOracle {
    fn next_token(&self, text: &str) -> Option<String> {
        let sequence = self.tokenizer.text_to_sequence(text);
        let index = self.model.predict(&sequence);
        self.tokenizer.word(index).map(str::to_string)
    }
}
