use std::collections::HashMap;

use serde::Deserialize;
use yomu_core::error::{LoadError, LookupError};
use yomu_core::script::single_char;
use yomu_core::types::{Character, Meaning, Reading, ReadingMeaningGroup, ReadingType};

// KANJIDIC2 in jmdict-simplified format
#[derive(Debug, Deserialize)]
struct KanjidicJson {
    characters: Vec<CharacterJson>,
}

#[derive(Debug, Deserialize)]
struct CharacterJson {
    literal: String,
    #[serde(default)]
    codepoints: Vec<CodepointJson>,
    #[serde(default)]
    misc: MiscJson,
    #[serde(rename = "readingMeaning", default)]
    reading_meaning: Option<ReadingMeaningJson>,
}

#[derive(Debug, Deserialize)]
struct CodepointJson {
    #[serde(rename = "type")]
    cp_type: String,
    value: String,
}

#[derive(Debug, Default, Deserialize)]
struct MiscJson {
    grade: Option<u8>,
    #[serde(rename = "strokeCounts", default)]
    stroke_counts: Vec<u32>,
    frequency: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ReadingMeaningJson {
    #[serde(default)]
    groups: Vec<GroupJson>,
}

#[derive(Debug, Deserialize)]
struct GroupJson {
    #[serde(default)]
    readings: Vec<ReadingJson>,
    #[serde(default)]
    meanings: Vec<MeaningJson>,
}

#[derive(Debug, Deserialize)]
struct ReadingJson {
    #[serde(rename = "type")]
    r_type: String,
    value: String,
}

#[derive(Debug, Deserialize)]
struct MeaningJson {
    lang: String,
    value: String,
}

// Flat kanji list: [{kanji, on_readings, kun_readings, meanings, ...}]
#[derive(Debug, Deserialize)]
struct FlatKanjiJson {
    kanji: String,
    #[serde(default)]
    on_readings: Vec<String>,
    #[serde(default)]
    kun_readings: Vec<String>,
    #[serde(default)]
    meanings: Vec<String>,
    grade: Option<u8>,
    stroke_count: Option<u32>,
    freq: Option<u32>,
}

impl CharacterJson {
    fn into_character(self) -> Option<Character> {
        let literal = single_char(&self.literal)?;
        let id = self
            .codepoints
            .into_iter()
            .find(|cp| cp.cp_type == "ucs")
            .map(|cp| cp.value);

        let groups = self
            .reading_meaning
            .map(|rm| rm.groups)
            .unwrap_or_default()
            .into_iter()
            .map(|group| ReadingMeaningGroup {
                readings: group
                    .readings
                    .into_iter()
                    .map(|r| Reading {
                        r_type: ReadingType::from_tag(&r.r_type),
                        value: r.value,
                    })
                    .collect(),
                meanings: group
                    .meanings
                    .into_iter()
                    .map(|m| Meaning {
                        lang: m.lang,
                        value: m.value,
                    })
                    .collect(),
            })
            .collect();

        Some(Character {
            literal,
            id,
            stroke_count: self.misc.stroke_counts.first().copied(),
            grade: self.misc.grade,
            frequency: self.misc.frequency,
            groups,
            ..Default::default()
        })
    }
}

impl FlatKanjiJson {
    fn into_character(self) -> Option<Character> {
        Some(Character {
            literal: single_char(&self.kanji)?,
            id: None,
            stroke_count: self.stroke_count,
            grade: self.grade,
            frequency: self.freq,
            groups: Vec::new(),
            on_yomi: self.on_readings,
            kun_yomi: self.kun_readings,
            meanings: self.meanings,
        })
    }
}

/// Shape of the character data a [`Kanjidic`] was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanjiFormat {
    /// KANJIDIC2 records with reading/meaning groups and a reading table by id
    Grouped,
    /// Plain attribute lists, no groups and no reading table
    Flat,
}

/// Character dictionary
pub struct Kanjidic {
    format: KanjiFormat,
    characters: HashMap<char, Character>,
    reading_table: Option<HashMap<String, Vec<Reading>>>,
}

impl Kanjidic {
    /// Load from JSON, detecting the format from the top-level shape
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let value: serde_json::Value = serde_json::from_str(json_str)?;

        if value.get("characters").is_some() {
            let data: KanjidicJson = serde_json::from_value(value)?;
            let characters = data
                .characters
                .into_iter()
                .filter_map(CharacterJson::into_character)
                .collect();
            Ok(Self::from_characters(KanjiFormat::Grouped, characters))
        } else if value.is_array() {
            let data: Vec<FlatKanjiJson> = serde_json::from_value(value)?;
            let characters = data
                .into_iter()
                .filter_map(FlatKanjiJson::into_character)
                .collect();
            Ok(Self::from_characters(KanjiFormat::Flat, characters))
        } else {
            Err(LoadError::InvalidFormat(
                "expected a KANJIDIC2 object with \"characters\" or a flat kanji list".to_string(),
            ))
        }
    }

    /// Grouped characters also get a reading table keyed by character id
    pub fn from_characters(format: KanjiFormat, characters: Vec<Character>) -> Self {
        let reading_table = (format == KanjiFormat::Grouped).then(|| {
            characters
                .iter()
                .filter_map(|c| {
                    let id = c.id.clone()?;
                    let readings = c
                        .groups
                        .iter()
                        .flat_map(|g| g.readings.iter().cloned())
                        .collect();
                    Some((id, readings))
                })
                .collect()
        });

        Self {
            format,
            characters: characters.into_iter().map(|c| (c.literal, c)).collect(),
            reading_table,
        }
    }

    pub fn format(&self) -> KanjiFormat {
        self.format
    }

    pub fn character(&self, literal: char) -> Option<&Character> {
        self.characters.get(&literal)
    }

    /// Readings recorded for `id`; unknown ids have none
    pub fn readings_for(&self, id: &str) -> Result<Vec<Reading>, LookupError> {
        let table = self
            .reading_table
            .as_ref()
            .ok_or(LookupError::Unsupported("structured reading query"))?;
        Ok(table.get(id).cloned().unwrap_or_default())
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }
}
