//! Dictionaries for tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;
use yomu_config::dictionary::DictionaryConfig;
use yomu_core::dictionary::{Dictionary, DictionaryMetadata, SearchOptions, WordQuery};
use yomu_core::error::LookupError;
use yomu_core::types::{Character, Reading, WordEntry};

use crate::dictionary::JMdict;
use crate::kanjidic::Kanjidic;
use crate::loader::load_dictionary;
use crate::search::SearchService;
use crate::store::JapaneseDictionary;

pub fn sample_dictionary() -> Arc<dyn Dictionary> {
    Arc::new(load_dictionary(&DictionaryConfig::default()).unwrap())
}

pub fn sample_service() -> SearchService {
    SearchService::new(sample_dictionary(), SearchOptions::default())
}

/// `words` is a jmdict-simplified words array, `characters` either a
/// KANJIDIC2 characters object or a flat kanji list
pub fn dictionary_from(words: Value, characters: Value) -> Arc<dyn Dictionary> {
    let words = JMdict::from_json(&serde_json::json!({ "words": words }).to_string()).unwrap();
    let characters = Kanjidic::from_json(&characters.to_string()).unwrap();
    Arc::new(JapaneseDictionary::new(words, characters))
}

pub fn word(id: &str, kanji: &[&str], kana: &[&str], gloss: &str) -> Value {
    serde_json::json!({
        "id": id,
        "kanji": kanji.iter().map(|t| serde_json::json!({ "text": t })).collect::<Vec<_>>(),
        "kana": kana.iter().map(|t| serde_json::json!({ "text": t })).collect::<Vec<_>>(),
        "sense": [{ "partOfSpeech": ["n"], "gloss": [{ "lang": "eng", "text": gloss }] }],
    })
}

pub fn flat_kanji(kanji: char, on: &[&str], kun: &[&str], meanings: &[&str]) -> Value {
    serde_json::json!({
        "kanji": kanji.to_string(),
        "on_readings": on,
        "kun_readings": kun,
        "meanings": meanings,
        "grade": 1,
        "stroke_count": 4,
    })
}

/// Delegates characters to `inner`, fails every word lookup
pub struct BrokenWords {
    pub inner: Arc<dyn Dictionary>,
}

impl Dictionary for BrokenWords {
    fn lookup_words(&self, _query: &WordQuery) -> Result<Vec<WordEntry>, LookupError> {
        Err(LookupError::Backend("word index unavailable".into()))
    }

    fn lookup_character(&self, literal: char) -> Result<Option<Character>, LookupError> {
        self.inner.lookup_character(literal)
    }

    fn query_readings(&self, character_id: &str) -> Result<Vec<Reading>, LookupError> {
        self.inner.query_readings(character_id)
    }

    fn metadata(&self) -> DictionaryMetadata {
        self.inner.metadata()
    }
}

/// Fails the word lookups `fails` selects and counts character lookups
pub struct FailingQueries {
    pub inner: Arc<dyn Dictionary>,
    pub fails: fn(&WordQuery) -> bool,
    pub character_lookups: AtomicUsize,
}

impl FailingQueries {
    pub fn new(inner: Arc<dyn Dictionary>, fails: fn(&WordQuery) -> bool) -> Self {
        Self {
            inner,
            fails,
            character_lookups: AtomicUsize::new(0),
        }
    }

    pub fn character_lookups(&self) -> usize {
        self.character_lookups.load(Ordering::SeqCst)
    }
}

impl Dictionary for FailingQueries {
    fn lookup_words(&self, query: &WordQuery) -> Result<Vec<WordEntry>, LookupError> {
        if (self.fails)(query) {
            return Err(LookupError::Backend(format!("cannot serve {query:?}")));
        }
        self.inner.lookup_words(query)
    }

    fn lookup_character(&self, literal: char) -> Result<Option<Character>, LookupError> {
        self.character_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup_character(literal)
    }

    fn query_readings(&self, character_id: &str) -> Result<Vec<Reading>, LookupError> {
        self.inner.query_readings(character_id)
    }

    fn metadata(&self) -> DictionaryMetadata {
        self.inner.metadata()
    }
}
