use std::collections::HashSet;

use yomu_core::dictionary::{Dictionary, WordQuery};
use yomu_core::error::LookupError;
use yomu_core::types::WordEntry;

use crate::response::{ExampleSentence, ExampleWord, MAX_EXAMPLE_WORDS, MAX_SENTENCES};

/// Entries with a kanji spelling containing `literal`
pub(super) fn words_containing(
    dictionary: &dyn Dictionary,
    literal: char,
) -> Result<Vec<WordEntry>, LookupError> {
    let entries = dictionary.lookup_words(&WordQuery::Contains(literal.to_string()))?;
    Ok(entries
        .into_iter()
        .filter(|e| e.kanji_form_containing(literal).is_some())
        .collect())
}

pub(super) fn example_words(entries: &[WordEntry], literal: char) -> Vec<ExampleWord> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for entry in entries {
        if words.len() >= MAX_EXAMPLE_WORDS {
            break;
        }
        let Some(word) = entry.kanji_form_containing(literal) else {
            continue;
        };
        if !seen.insert(word) {
            continue;
        }

        words.push(ExampleWord {
            word: word.to_string(),
            reading: entry.kana.first().cloned().unwrap_or_default(),
            meaning: entry.first_gloss().unwrap_or_default().to_string(),
        });
    }

    words
}

pub(super) fn example_sentences(entries: &[WordEntry]) -> Vec<ExampleSentence> {
    entries
        .iter()
        .flat_map(|e| e.senses.iter())
        .flat_map(|s| s.examples.iter())
        .filter_map(|ex| ex.pair("jpn", "eng"))
        .take(MAX_SENTENCES)
        .map(|(japanese, english)| ExampleSentence::new(japanese, english))
        .collect()
}
