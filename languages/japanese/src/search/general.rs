use std::collections::HashSet;

use yomu_core::dictionary::WordQuery;
use yomu_core::error::LookupError;
use yomu_core::preprocess::{Preprocessor, QueryPreprocessor};
use yomu_core::script::{is_single_japanese_char, single_char};
use yomu_core::types::WordEntry;

use super::SearchService;
use crate::response::{GeneralSearchResponse, KanjiInfo, SearchResult, WordResult};

/// (sorted kanji forms, sorted kana forms, first gloss)
type EntryKey = (Vec<String>, Vec<String>, String);

fn entry_key(word: &WordResult) -> EntryKey {
    let mut kanji = word.kanji_forms.clone();
    kanji.sort();
    let mut kana = word.kana_forms.clone();
    kana.sort();
    let first_gloss = word
        .senses
        .first()
        .and_then(|s| s.glosses.first())
        .cloned()
        .unwrap_or_default();
    (kanji, kana, first_gloss)
}

fn kanji_key(query: &str, info: &KanjiInfo) -> EntryKey {
    (
        vec![query.to_string()],
        vec![query.to_string()],
        info.meanings.first().cloned().unwrap_or_default(),
    )
}

impl SearchService {
    /// Words, kana and English search, with kanji detail for single characters
    pub fn search(&self, query: &str) -> GeneralSearchResponse {
        let query = QueryPreprocessor.process(query);
        if query.is_empty() {
            return GeneralSearchResponse::default();
        }

        tracing::info!("Performing general search for: '{query}'");

        let mut results = Vec::new();
        let mut seen: HashSet<EntryKey> = HashSet::new();
        let single_japanese = is_single_japanese_char(&query);

        if single_japanese {
            match self.kanji(&query) {
                Ok(Some(info)) => {
                    seen.insert(kanji_key(&query, &info));
                    results.push(SearchResult::KanjiDetail(info));
                }
                Ok(None) => {}
                Err(e) => tracing::error!("Kanji lookup for '{query}' failed: {e}"),
            }
        }

        let collected = self.collect_words(&query, single_japanese, &mut seen, &mut results);
        if let Err(e) = collected {
            tracing::error!("Error during general lookup for '{query}': {e}");
        }

        tracing::info!("General search for '{query}' yielded {} results", results.len());
        GeneralSearchResponse { results }
    }

    fn collect_words(
        &self,
        query: &str,
        single_japanese: bool,
        seen: &mut HashSet<EntryKey>,
        results: &mut Vec<SearchResult>,
    ) -> Result<(), LookupError> {
        let dictionary = self.dictionary.as_ref();
        let mut entries: Vec<WordEntry> =
            dictionary.lookup_words(&WordQuery::Exact(query.to_string()))?;

        if entries.is_empty() && query.is_ascii() && !single_japanese {
            tracing::info!("No direct match for '{query}', trying English glosses");
            entries = dictionary.lookup_words(&WordQuery::GlossPrefix(query.to_string()))?;
        }

        if !entries.is_empty() {
            let mut added = 0;
            for entry in &entries {
                if added >= self.options.max_results {
                    break;
                }
                let word = WordResult::from(entry);
                if seen.insert(entry_key(&word)) {
                    results.push(SearchResult::Word(word));
                    added += 1;
                } else {
                    tracing::debug!(idseq = ?word.idseq, "skipping duplicate entry");
                }
            }
            return Ok(());
        }

        // No words: the query may still name a character. Single Japanese
        // characters already went through the kanji lookup above.
        if single_japanese {
            return Ok(());
        }
        let Some(literal) = single_char(query) else {
            return Ok(());
        };
        if dictionary.lookup_character(literal)?.is_none() {
            return Ok(());
        }

        match self.kanji(query) {
            Ok(Some(info)) => {
                seen.insert(kanji_key(query, &info));
                results.push(SearchResult::KanjiDetail(info));
            }
            Ok(None) => {}
            Err(e) => tracing::error!("Kanji lookup for '{query}' failed: {e}"),
        }
        Ok(())
    }
}
