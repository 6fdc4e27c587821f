/// Reading classification as tagged by KANJIDIC2 (`ja_on`, `ja_kun`, `pinyin`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReadingType {
    JaOn,
    JaKun,
    Other(String),
}

impl ReadingType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ja_on" => ReadingType::JaOn,
            "ja_kun" => ReadingType::JaKun,
            other => ReadingType::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub r_type: ReadingType,
    pub value: String,
}

impl Reading {
    pub fn on(value: impl Into<String>) -> Self {
        Self {
            r_type: ReadingType::JaOn,
            value: value.into(),
        }
    }

    pub fn kun(value: impl Into<String>) -> Self {
        Self {
            r_type: ReadingType::JaKun,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meaning {
    /// ISO 639-1 code, KANJIDIC2 uses "en" for English
    pub lang: String,
    pub value: String,
}

/// One `rmgroup` of a character record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingMeaningGroup {
    pub readings: Vec<Reading>,
    pub meanings: Vec<Meaning>,
}

/// Character record as returned by a dictionary backend.
///
/// Grouped backends fill `groups`; flat backends fill `on_yomi`, `kun_yomi`
/// and `meanings` directly. Consumers must not assume either shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Character {
    pub literal: char,
    /// Backend key for structured reading queries
    pub id: Option<String>,
    pub stroke_count: Option<u32>,
    pub grade: Option<u8>,
    /// Newspaper frequency rank (lower = more common)
    pub frequency: Option<u32>,
    pub groups: Vec<ReadingMeaningGroup>,
    pub on_yomi: Vec<String>,
    pub kun_yomi: Vec<String>,
    pub meanings: Vec<String>,
}

impl Character {
    /// English meanings from the groups, falling back to the flat list
    pub fn english_meanings(&self) -> Vec<String> {
        let grouped: Vec<String> = self
            .groups
            .iter()
            .flat_map(|group| group.meanings.iter())
            .filter(|meaning| meaning.lang == "en")
            .map(|meaning| meaning.value.clone())
            .collect();

        if grouped.is_empty() {
            self.meanings.clone()
        } else {
            grouped
        }
    }
}

/// A sentence fragment in one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleText {
    /// ISO 639-2 code as used by JMdict ("jpn", "eng")
    pub lang: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenseExample {
    pub sentences: Vec<ExampleText>,
}

impl SenseExample {
    /// Join all fragments of each language; `None` unless both sides are non-empty
    pub fn pair(&self, source_lang: &str, target_lang: &str) -> Option<(String, String)> {
        let join = |lang: &str| {
            self.sentences
                .iter()
                .filter(|s| s.lang == lang)
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        };

        let source = join(source_lang);
        let target = join(target_lang);

        if source.is_empty() || target.is_empty() {
            None
        } else {
            Some((source, target))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sense {
    pub glosses: Vec<String>,
    pub pos: Vec<String>,
    pub misc: Vec<String>,
    pub field: Vec<String>,
    pub dialect: Vec<String>,
    pub examples: Vec<SenseExample>,
}

/// Word entry (JMdict `entry`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordEntry {
    pub id: Option<String>,
    pub kanji: Vec<String>,
    pub kana: Vec<String>,
    pub senses: Vec<Sense>,
}

impl WordEntry {
    pub fn first_gloss(&self) -> Option<&str> {
        self.senses
            .first()
            .and_then(|sense| sense.glosses.first())
            .map(String::as_str)
    }

    /// First kanji spelling containing `literal`
    pub fn kanji_form_containing(&self, literal: char) -> Option<&str> {
        self.kanji
            .iter()
            .find(|form| !form.is_empty() && form.contains(literal))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_meanings_prefer_groups() {
        let character = Character {
            literal: '日',
            groups: vec![ReadingMeaningGroup {
                readings: vec![Reading::on("ニチ")],
                meanings: vec![
                    Meaning { lang: "en".into(), value: "day".into() },
                    Meaning { lang: "fr".into(), value: "jour".into() },
                ],
            }],
            meanings: vec!["sun".into()],
            ..Default::default()
        };

        assert_eq!(character.english_meanings(), vec!["day".to_string()]);
    }

    #[test]
    fn english_meanings_fall_back_to_flat() {
        let character = Character {
            literal: '日',
            meanings: vec!["sun".into()],
            ..Default::default()
        };

        assert_eq!(character.english_meanings(), vec!["sun".to_string()]);
    }

    #[test]
    fn example_pair_requires_both_languages() {
        let example = SenseExample {
            sentences: vec![
                ExampleText { lang: "jpn".into(), text: "パンを食べる。".into() },
                ExampleText { lang: "eng".into(), text: "I eat bread.".into() },
            ],
        };
        assert_eq!(
            example.pair("jpn", "eng"),
            Some(("パンを食べる。".to_string(), "I eat bread.".to_string()))
        );

        let one_sided = SenseExample {
            sentences: vec![ExampleText { lang: "jpn".into(), text: "日本".into() }],
        };
        assert_eq!(one_sided.pair("jpn", "eng"), None);
    }

    #[test]
    fn kanji_form_containing_skips_other_forms() {
        let entry = WordEntry {
            kanji: vec!["本".into(), "日本".into()],
            ..Default::default()
        };
        assert_eq!(entry.kanji_form_containing('日'), Some("日本"));
        assert_eq!(entry.kanji_form_containing('月'), None);
    }
}
