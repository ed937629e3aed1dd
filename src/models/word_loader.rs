use std::{
    collections::HashSet,
    fs,
    path::PathBuf,
    sync::Arc,
};

use once_cell::sync::Lazy;
use rand::{Rng, seq::SliceRandom};

use crate::errors::AppError;

pub const FALLBACK_WORD: &str = "silkworm";

pub fn load_word_list() -> HashSet<String> {
    let json = include_str!("../../assets/words.json");
    serde_json::from_str(json).expect("Failed to parse words.json")
}

pub static WORD_LIST: Lazy<Arc<HashSet<String>>> = Lazy::new(|| Arc::new(load_word_list()));

pub static START_WORDS: Lazy<Vec<String>> =
    Lazy::new(|| split_lines(include_str!("../../assets/start.txt")));

/// Splits newline-separated text into trimmed, non-blank entries.
pub fn split_lines(text: &str) -> Vec<String> {
    clean_words(text.lines())
}

fn clean_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .filter_map(|word| {
            let word = word.as_ref().trim();
            (!word.is_empty()).then(|| word.to_string())
        })
        .collect()
}

/// Parses a word list that is either a JSON array of strings or one word per line.
pub fn parse_word_list(text: &str) -> Result<Vec<String>, AppError> {
    if text.trim_start().starts_with('[') {
        let words: Vec<String> = serde_json::from_str(text)
            .map_err(|e| AppError::Deserialization(format!("Failed to parse word list: {}", e)))?;
        Ok(clean_words(words))
    } else {
        Ok(split_lines(text))
    }
}

/// Supplies candidate base words for rounds.
pub trait WordSource {
    fn load(&self) -> Result<Vec<String>, AppError>;
}

/// The start words bundled with the crate.
pub struct EmbeddedWordSource;

impl WordSource for EmbeddedWordSource {
    fn load(&self) -> Result<Vec<String>, AppError> {
        Ok(START_WORDS.to_vec())
    }
}

pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    fn load(&self) -> Result<Vec<String>, AppError> {
        let text = fs::read_to_string(&self.path)?;
        parse_word_list(&text)
    }
}

impl WordSource for Vec<String> {
    fn load(&self) -> Result<Vec<String>, AppError> {
        Ok(self.clone())
    }
}

/// Ordered, never-empty sequence of base words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Trims every word and drops blank ones. Fails when nothing is left.
    pub fn new(words: Vec<String>) -> Result<Self, AppError> {
        let words = clean_words(words);
        if words.is_empty() {
            return Err(AppError::EmptyWordPool);
        }
        Ok(Self { words })
    }

    pub fn fallback() -> Self {
        Self {
            words: vec![FALLBACK_WORD.to_string()],
        }
    }

    /// Loads from `source`, falling back to a single-word pool when the source
    /// fails or yields nothing.
    pub fn load_or_fallback(source: &dyn WordSource) -> Self {
        match source.load().and_then(WordPool::new) {
            Ok(pool) => {
                tracing::info!("Loaded {} start words", pool.len());
                pool
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load start words ({}), using '{}'",
                    e,
                    FALLBACK_WORD
                );
                Self::fallback()
            }
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
    }

    pub fn first(&self) -> &str {
        &self.words[0]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
