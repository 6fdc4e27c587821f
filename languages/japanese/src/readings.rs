//! On/kun reading extraction across backend record shapes

use yomu_core::dictionary::Dictionary;
use yomu_core::error::LookupError;
use yomu_core::types::{Character, Reading, ReadingType};

/// Sources of readings, tried in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingStrategy {
    /// The backend's reading table, keyed by character id
    StructuredQuery,
    /// Reading/meaning groups on the character record
    GroupedRecords,
    /// Flat `on_yomi`/`kun_yomi` attributes on the character record
    FlatAttributes,
}

impl ReadingStrategy {
    pub const ORDER: [ReadingStrategy; 3] = [
        ReadingStrategy::StructuredQuery,
        ReadingStrategy::GroupedRecords,
        ReadingStrategy::FlatAttributes,
    ];

    fn apply(
        self,
        dictionary: &dyn Dictionary,
        character: &Character,
    ) -> Result<KanjiReadings, LookupError> {
        match self {
            ReadingStrategy::StructuredQuery => {
                let id = character
                    .id
                    .as_deref()
                    .ok_or(LookupError::Unsupported("character id"))?;
                Ok(KanjiReadings::from_readings(&dictionary.query_readings(id)?))
            }
            ReadingStrategy::GroupedRecords => {
                if character.groups.is_empty() {
                    return Err(LookupError::Unsupported("reading groups"));
                }
                let readings: Vec<Reading> = character
                    .groups
                    .iter()
                    .flat_map(|g| g.readings.iter().cloned())
                    .collect();
                Ok(KanjiReadings::from_readings(&readings))
            }
            ReadingStrategy::FlatAttributes => {
                if character.on_yomi.is_empty()
                    && character.kun_yomi.is_empty()
                    && character.meanings.is_empty()
                {
                    return Err(LookupError::Unsupported("flat reading attributes"));
                }
                Ok(KanjiReadings::new(
                    character.on_yomi.iter().cloned(),
                    character.kun_yomi.iter().cloned(),
                ))
            }
        }
    }
}

/// Deduplicated, sorted on-yomi and kun-yomi
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanjiReadings {
    pub on_yomi: Vec<String>,
    pub kun_yomi: Vec<String>,
}

impl KanjiReadings {
    pub fn new(
        on_yomi: impl IntoIterator<Item = String>,
        kun_yomi: impl IntoIterator<Item = String>,
    ) -> Self {
        fn normalize(values: impl IntoIterator<Item = String>) -> Vec<String> {
            let mut values: Vec<String> = values.into_iter().filter(|v| !v.is_empty()).collect();
            values.sort();
            values.dedup();
            values
        }

        Self {
            on_yomi: normalize(on_yomi),
            kun_yomi: normalize(kun_yomi),
        }
    }

    /// Keeps `ja_on` and `ja_kun`, drops every other reading type
    pub fn from_readings(readings: &[Reading]) -> Self {
        let of_type = |t: ReadingType| {
            readings
                .iter()
                .filter(move |r| r.r_type == t)
                .map(|r| r.value.clone())
        };
        Self::new(of_type(ReadingType::JaOn), of_type(ReadingType::JaKun))
    }

    pub fn is_empty(&self) -> bool {
        self.on_yomi.is_empty() && self.kun_yomi.is_empty()
    }

    pub fn contains(&self, reading: &str) -> bool {
        self.on_yomi.iter().chain(self.kun_yomi.iter()).any(|r| r == reading)
    }
}

/// Readings of `character`, from the first strategy that yields any.
///
/// Strategies the backend cannot serve are skipped. When none can be served
/// the result is `Unsupported`, or the backend error if one occurred.
pub fn extract_readings(
    dictionary: &dyn Dictionary,
    character: &Character,
) -> Result<KanjiReadings, LookupError> {
    let mut supported = false;
    let mut backend_error = None;

    for strategy in ReadingStrategy::ORDER {
        match strategy.apply(dictionary, character) {
            Ok(readings) if !readings.is_empty() => return Ok(readings),
            Ok(_) => supported = true,
            Err(LookupError::Unsupported(what)) => {
                tracing::debug!(literal = %character.literal, ?strategy, "unsupported: {what}");
            }
            Err(e) => {
                tracing::warn!(literal = %character.literal, ?strategy, "reading lookup failed: {e}");
                backend_error = Some(e);
            }
        }
    }

    match (supported, backend_error) {
        (true, _) => Ok(KanjiReadings::default()),
        (false, Some(e)) => Err(e),
        (false, None) => Err(LookupError::Unsupported("no reading source for character")),
    }
}
