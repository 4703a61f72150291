use super::Tokenizer;
use crate::error::{JotError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// On-disk layout of a model file.
///
/// `contexts` maps a space-separated sequence of word indices (oldest first, the
/// empty string for "no context") to the scores of candidate next indices.
#[derive(Debug, Deserialize)]
pub(super) struct ModelFile {
    max_len: usize,
    vocab_size: usize,
    index_word: HashMap<usize, String>,
    contexts: HashMap<String, HashMap<usize, f32>>,
}

impl ModelFile {
    pub(super) fn into_parts(self) -> Result<(Tokenizer, NgramModel)> {
        if self.vocab_size == 0 {
            return Err(unavailable("vocab_size must be positive"));
        }
        if let Some(index) = self.index_word.keys().find(|i| **i >= self.vocab_size) {
            return Err(unavailable(format!(
                "word index {} exceeds vocab_size {}",
                index, self.vocab_size
            )));
        }

        let mut contexts = HashMap::with_capacity(self.contexts.len());
        for (key, scores) in self.contexts {
            let context = parse_context(&key)?;
            if context.len() > self.max_len {
                return Err(unavailable(format!(
                    "context '{}' is longer than max_len {}",
                    key, self.max_len
                )));
            }
            let mut candidates: Vec<(usize, f32)> = scores.into_iter().collect();
            if let Some((index, _)) = candidates.iter().find(|(i, _)| *i >= self.vocab_size) {
                return Err(unavailable(format!(
                    "candidate index {} exceeds vocab_size {}",
                    index, self.vocab_size
                )));
            }
            candidates.sort_by_key(|(index, _)| *index);
            contexts.insert(context, candidates);
        }

        let tokenizer = Tokenizer::from_index_word(self.index_word);
        let model = NgramModel {
            max_len: self.max_len,
            vocab_size: self.vocab_size,
            contexts,
        };
        Ok((tokenizer, model))
    }
}

fn parse_context(key: &str) -> Result<Vec<usize>> {
    key.split_whitespace()
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| unavailable(format!("bad context key '{}'", key)))
        })
        .collect()
}

fn unavailable(msg: impl Into<String>) -> JotError {
    JotError::OracleUnavailable(msg.into())
}

/// A pre-trained back-off n-gram table.
///
/// Only the last `max_len` indices of the input are considered. The longest
/// suffix of those that the table knows decides the scores; shorter suffixes are
/// tried down to the empty context. The prediction is the index with the highest
/// score, the lowest index winning ties, exactly like an argmax over the model's
/// output vector. When nothing matches, every score is zero and index 0 wins.
#[derive(Debug, Clone)]
pub struct NgramModel {
    max_len: usize,
    vocab_size: usize,
    contexts: HashMap<Vec<usize>, Vec<(usize, f32)>>,
}

impl NgramModel {
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn predict(&self, sequence: &[usize]) -> usize {
        let window = &sequence[sequence.len().saturating_sub(self.max_len)..];

        (0..=window.len())
            .find_map(|start| self.contexts.get(&window[start..]))
            .map(|candidates| argmax(candidates, self.vocab_size))
            .unwrap_or(0)
    }
}

/// Argmax over a sparse score vector of length `vocab_size`.
///
/// `candidates` is sorted by index with no duplicates; every other index scores 0.0.
/// The lowest index wins ties.
fn argmax(candidates: &[(usize, f32)], vocab_size: usize) -> usize {
    let first_absent = candidates
        .iter()
        .enumerate()
        .find(|(position, (index, _))| position != index)
        .map(|(position, _)| position)
        .or_else(|| (candidates.len() < vocab_size).then_some(candidates.len()));

    let mut best = first_absent.map(|index| (index, 0.0_f32));
    for &(index, score) in candidates {
        best = match best {
            Some((b, s)) if score > s || (score == s && index < b) => Some((index, score)),
            None => Some((index, score)),
            kept => kept,
        };
    }
    best.map(|(index, _)| index).unwrap_or(0)
}
