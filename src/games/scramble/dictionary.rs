use std::{collections::HashSet, sync::Arc};

use crate::{
    errors::AppError,
    models::word_loader::{WORD_LIST, WordSource},
};

/// Answers whether a word is spelled correctly in a locale.
pub trait SpellChecker {
    fn is_real(&self, word: &str, locale: &str) -> bool;
}

impl<F> SpellChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_real(&self, word: &str, locale: &str) -> bool {
        self(word, locale)
    }
}

/// Word-list backed checker. A candidate is real when every whitespace
/// separated token is in the list.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: Arc<HashSet<String>>,
    locale: String,
}

impl WordListDictionary {
    pub fn new(words: impl IntoIterator<Item = String>, locale: &str) -> Self {
        let words = words.into_iter().map(|w| w.to_lowercase()).collect();
        Self {
            words: Arc::new(words),
            locale: locale.to_string(),
        }
    }

    pub fn embedded() -> Self {
        Self {
            words: Arc::clone(&WORD_LIST),
            locale: "en".to_string(),
        }
    }

    pub fn from_source(source: &dyn WordSource, locale: &str) -> Result<Self, AppError> {
        let dictionary = Self::new(source.load()?, locale);
        tracing::info!("Loaded dictionary with {} words", dictionary.len());
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn supports(&self, locale: &str) -> bool {
        let language = locale.split(['-', '_']).next().unwrap_or(locale);
        language.eq_ignore_ascii_case(&self.locale)
    }
}

impl SpellChecker for WordListDictionary {
    fn is_real(&self, word: &str, locale: &str) -> bool {
        if !self.supports(locale) {
            tracing::warn!("Dictionary has no '{}' word list", locale);
            return false;
        }

        word.split_whitespace()
            .all(|token| self.words.contains(&token.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dictionary_knows_common_words() {
        let dictionary = WordListDictionary::embedded();
        assert!(dictionary.is_real("silk", "en"));
        assert!(dictionary.is_real("Worm", "en"));
        assert!(!dictionary.is_real("silkworms", "en"));
        assert!(!dictionary.is_real("zzz", "en"));
    }

    #[test]
    fn locale_must_match() {
        let dictionary = WordListDictionary::new(vec!["silk".to_string()], "en");
        assert!(dictionary.is_real("silk", "en-GB"));
        assert!(!dictionary.is_real("silk", "fr"));
    }

    #[test]
    fn every_token_must_be_known() {
        let dictionary =
            WordListDictionary::new(vec!["silk".to_string(), "worm".to_string()], "en");
        assert!(dictionary.is_real("silk worm", "en"));
        assert!(!dictionary.is_real("silk wurm", "en"));
    }
}
