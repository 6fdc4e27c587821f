use yomu_core::script::single_char;

use super::{SearchError, SearchService, examples, similar};
use crate::jlpt::JlptLevel;
use crate::readings::{KanjiReadings, extract_readings};
use crate::response::KanjiInfo;

impl SearchService {
    /// Full record for a single kanji.
    ///
    /// `Ok(None)` when `term` is not exactly one character or the dictionary
    /// has no record for it.
    pub fn kanji(&self, term: &str) -> Result<Option<KanjiInfo>, SearchError> {
        let Some(literal) = single_char(term) else {
            tracing::warn!("Search term must be a single character: '{term}'");
            return Ok(None);
        };

        let dictionary = self.dictionary.as_ref();
        let Some(character) = dictionary.lookup_character(literal)? else {
            tracing::info!("No character info found for kanji: {literal}");
            return Ok(None);
        };

        let readings = match extract_readings(dictionary, &character) {
            Ok(readings) => readings,
            Err(e) if e.is_unsupported() => {
                tracing::warn!(%literal, "no reading source: {e}");
                KanjiReadings::default()
            }
            Err(e) => return Err(e.into()),
        };

        let related = examples::words_containing(dictionary, literal);
        let example_words = self.settle(
            "example words",
            related
                .as_ref()
                .map(|entries| examples::example_words(entries, literal))
                .map_err(Clone::clone),
        )?;
        let sentences = self.settle(
            "example sentences",
            related
                .as_ref()
                .map(|entries| examples::example_sentences(entries))
                .map_err(Clone::clone),
        )?;
        let similar = self.settle(
            "similar kanji",
            similar::find_similar(dictionary, literal, &readings),
        )?;

        tracing::info!(
            %literal,
            examples = example_words.len(),
            sentences = sentences.len(),
            similar = similar.len(),
            "kanji lookup complete"
        );

        Ok(Some(KanjiInfo {
            kanji: literal.to_string(),
            meanings: character.english_meanings(),
            on_yomi: readings.on_yomi,
            kun_yomi: readings.kun_yomi,
            stroke_count: character.stroke_count.unwrap_or(0),
            jlpt_level: JlptLevel::label(JlptLevel::from_grade(character.grade)),
            frequency: character.frequency.unwrap_or(0),
            examples: example_words,
            sentences,
            similar,
        }))
    }
}
