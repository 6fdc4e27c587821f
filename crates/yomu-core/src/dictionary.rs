use crate::error::LookupError;
use crate::types::{Character, Reading, WordEntry};

/// Word lookup variants understood by every backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordQuery {
    /// Exact kanji spelling, exact kana spelling, or exact English gloss (case-insensitive)
    Exact(String),
    /// Kanji or kana spelling contains the term
    Contains(String),
    /// Kana spelling contains the term
    ReadingContains(String),
    /// English gloss starts with the term, or reads "to <term>" (case-insensitive)
    GlossPrefix(String),
}

impl WordQuery {
    pub fn term(&self) -> &str {
        match self {
            WordQuery::Exact(term)
            | WordQuery::Contains(term)
            | WordQuery::ReadingContains(term)
            | WordQuery::GlossPrefix(term) => term,
        }
    }
}

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Word entries matching the query, in dictionary order
    fn lookup_words(&self, query: &WordQuery) -> Result<Vec<WordEntry>, LookupError>;

    /// Character record for a single literal
    fn lookup_character(&self, literal: char) -> Result<Option<Character>, LookupError>;

    /// Readings stored for a character id in the backend's reading table
    ///
    /// Backends without such a table keep the default.
    fn query_readings(&self, _character_id: &str) -> Result<Vec<Reading>, LookupError> {
        Err(LookupError::Unsupported("structured reading query"))
    }

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Upper bound on word results of a general search
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_results: 100 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub word_count: usize,
    pub character_count: usize,
}
