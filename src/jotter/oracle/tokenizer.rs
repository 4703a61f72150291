use std::collections::HashMap;

/// Characters removed before splitting text into words.
pub const DEFAULT_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

/// Word ↔ index vocabulary.
///
/// Text is lowercased, the filter characters become spaces, and the remaining
/// whitespace-separated words are mapped to their indices. Words outside the
/// vocabulary are dropped. Index 0 is reserved for padding and never has a word.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    word_index: HashMap<String, usize>,
    index_word: HashMap<usize, String>,
}

impl Tokenizer {
    pub fn from_index_word(index_word: HashMap<usize, String>) -> Self {
        let index_word: HashMap<usize, String> = index_word
            .into_iter()
            .filter(|(index, _)| *index != 0)
            .collect();
        let word_index = index_word
            .iter()
            .map(|(index, word)| (word.clone(), *index))
            .collect();
        Self {
            word_index,
            index_word,
        }
    }

    pub fn len(&self) -> usize {
        self.index_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_word.is_empty()
    }

    pub fn index(&self, word: &str) -> Option<usize> {
        self.word_index.get(word).copied()
    }

    /// The word for `index`, if the vocabulary has one.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.index_word.get(&index).map(String::as_str)
    }

    pub fn text_to_sequence(&self, text: &str) -> Vec<usize> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| if DEFAULT_FILTERS.contains(c) { ' ' } else { c })
            .collect();

        cleaned
            .split_whitespace()
            .filter_map(|word| self.index(word))
            .collect()
    }
}
