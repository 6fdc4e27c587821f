//! JSON shapes returned by the search endpoints

use serde::{Deserialize, Serialize};
use yomu_core::types::{Sense, WordEntry};

pub const MAX_EXAMPLE_WORDS: usize = 7;
pub const MAX_SENTENCES: usize = 5;
pub const MAX_SIMILAR: usize = 7;
pub const MAX_SENSE_EXAMPLES: usize = 3;
pub const MAX_SIMILAR_MEANINGS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanjiInfo {
    pub kanji: String,
    pub meanings: Vec<String>,
    pub on_yomi: Vec<String>,
    pub kun_yomi: Vec<String>,
    pub stroke_count: u32,
    pub jlpt_level: String,
    pub frequency: u32,
    pub examples: Vec<ExampleWord>,
    pub sentences: Vec<ExampleSentence>,
    pub similar: Vec<SimilarKanji>,
}

/// A word spelled with the kanji
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleWord {
    pub word: String,
    pub reading: String,
    pub meaning: String,
}

/// Japanese/English sentence pair; `reading` is always empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub japanese: String,
    pub reading: String,
    pub english: String,
}

impl ExampleSentence {
    pub fn new(japanese: String, english: String) -> Self {
        Self {
            japanese,
            reading: String::new(),
            english,
        }
    }
}

/// Kanji sharing one reading with the looked-up kanji
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarKanji {
    pub kanji: String,
    pub shared_reading: String,
    pub all_on_yomi: Vec<String>,
    pub all_kun_yomi: Vec<String>,
    pub meanings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseResult {
    pub glosses: Vec<String>,
    pub pos: Vec<String>,
    pub misc: Vec<String>,
    pub field: Vec<String>,
    pub dialect: Vec<String>,
    pub examples: Vec<ExampleSentence>,
}

impl From<&Sense> for SenseResult {
    fn from(sense: &Sense) -> Self {
        Self {
            glosses: sense.glosses.clone(),
            pos: sense.pos.clone(),
            misc: sense.misc.clone(),
            field: sense.field.clone(),
            dialect: sense.dialect.clone(),
            examples: sense
                .examples
                .iter()
                .filter_map(|ex| ex.pair("jpn", "eng"))
                .take(MAX_SENSE_EXAMPLES)
                .map(|(japanese, english)| ExampleSentence::new(japanese, english))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResult {
    pub idseq: Option<String>,
    pub kanji_forms: Vec<String>,
    pub kana_forms: Vec<String>,
    pub senses: Vec<SenseResult>,
}

impl From<&WordEntry> for WordResult {
    fn from(entry: &WordEntry) -> Self {
        let non_empty = |forms: &[String]| {
            forms
                .iter()
                .filter(|f| !f.is_empty())
                .cloned()
                .collect::<Vec<_>>()
        };

        Self {
            idseq: entry.id.clone(),
            kanji_forms: non_empty(&entry.kanji),
            kana_forms: non_empty(&entry.kana),
            senses: entry.senses.iter().map(SenseResult::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum SearchResult {
    Word(WordResult),
    KanjiDetail(KanjiInfo),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSearchResponse {
    pub results: Vec<SearchResult>,
}
