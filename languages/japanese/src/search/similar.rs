use std::collections::HashSet;

use yomu_core::dictionary::{Dictionary, WordQuery};
use yomu_core::error::LookupError;
use yomu_core::script::is_cjk_unified;

use crate::kana::reading_search_key;
use crate::readings::{KanjiReadings, extract_readings};
use crate::response::{MAX_SIMILAR, MAX_SIMILAR_MEANINGS, SimilarKanji};

/// Kun readings longest first, then on readings
fn search_order(readings: &KanjiReadings) -> Vec<&str> {
    let mut kun: Vec<&str> = readings
        .kun_yomi
        .iter()
        .map(String::as_str)
        .filter(|r| !r.is_empty())
        .collect();
    kun.sort_by_key(|r| std::cmp::Reverse(r.chars().count()));

    kun.into_iter()
        .chain(readings.on_yomi.iter().map(String::as_str).filter(|r| !r.is_empty()))
        .collect()
}

/// Kanji that appear in words read with one of `literal`'s readings and
/// themselves carry that exact reading.
///
/// A failed word lookup skips that reading. The phase only fails when no
/// reading could be searched at all.
pub(super) fn find_similar(
    dictionary: &dyn Dictionary,
    literal: char,
    readings: &KanjiReadings,
) -> Result<Vec<SimilarKanji>, LookupError> {
    let mut similar = Vec::new();
    let mut accepted: HashSet<char> = HashSet::new();
    let mut searched = false;
    let mut last_error = None;

    for reading in search_order(readings) {
        if similar.len() >= MAX_SIMILAR {
            break;
        }

        let key = reading_search_key(reading);
        if key.is_empty() {
            continue;
        }

        let entries = match dictionary.lookup_words(&WordQuery::ReadingContains(key)) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(%literal, reading, "word lookup failed, skipping reading: {e}");
                last_error = Some(e);
                continue;
            }
        };
        searched = true;
        tracing::debug!(%literal, reading, "{} candidate words", entries.len());

        let candidates = entries
            .iter()
            .flat_map(|e| e.kanji.iter())
            .flat_map(|form| form.chars())
            .filter(|&c| is_cjk_unified(c));

        for candidate in candidates {
            if similar.len() >= MAX_SIMILAR {
                break;
            }
            if candidate == literal || accepted.contains(&candidate) {
                continue;
            }

            if let Some(entry) = verify(dictionary, candidate, reading) {
                tracing::debug!(%literal, %candidate, reading, "similar kanji");
                accepted.insert(candidate);
                similar.push(entry);
            }
        }
    }

    match last_error {
        Some(e) if !searched => Err(e),
        _ => Ok(similar),
    }
}

/// `Some` if `candidate` has `reading` among its own readings
fn verify(dictionary: &dyn Dictionary, candidate: char, reading: &str) -> Option<SimilarKanji> {
    let character = match dictionary.lookup_character(candidate) {
        Ok(Some(c)) => c,
        Ok(None) => {
            tracing::debug!(%candidate, "no character record");
            return None;
        }
        Err(e) => {
            tracing::warn!(%candidate, "character lookup failed: {e}");
            return None;
        }
    };

    let readings = match extract_readings(dictionary, &character) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(%candidate, "skipping candidate: {e}");
            return None;
        }
    };

    if !readings.contains(reading) {
        return None;
    }

    let mut meanings = character.english_meanings();
    meanings.truncate(MAX_SIMILAR_MEANINGS);

    Some(SimilarKanji {
        kanji: candidate.to_string(),
        shared_reading: reading.to_string(),
        all_on_yomi: readings.on_yomi,
        all_kun_yomi: readings.kun_yomi,
        meanings,
    })
}
