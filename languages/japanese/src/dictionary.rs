use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use yomu_core::dictionary::WordQuery;
use yomu_core::error::LoadError;
use yomu_core::types::{ExampleText, Sense, SenseExample, WordEntry};

// JSON structures for parsing jmdict-simplified format
#[derive(Debug, Deserialize)]
struct JMdictJson {
    words: Vec<JMdictJsonEntry>,
}

#[derive(Debug, Deserialize)]
struct JMdictJsonEntry {
    id: String,
    #[serde(default)]
    kanji: Vec<TextElement>,
    #[serde(default)]
    kana: Vec<TextElement>,
    #[serde(default)]
    sense: Vec<SenseJson>,
}

#[derive(Debug, Deserialize)]
struct TextElement {
    text: String,
}

#[derive(Debug, Deserialize)]
struct SenseJson {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Vec<String>,
    #[serde(default)]
    misc: Vec<String>,
    #[serde(default)]
    field: Vec<String>,
    #[serde(default)]
    dialect: Vec<String>,
    #[serde(default)]
    gloss: Vec<GlossJson>,
    #[serde(default)]
    examples: Vec<ExampleJson>,
}

#[derive(Debug, Deserialize)]
struct GlossJson {
    lang: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ExampleJson {
    #[serde(default)]
    sentences: Vec<SentenceJson>,
}

#[derive(Debug, Deserialize)]
struct SentenceJson {
    lang: String,
    text: String,
}

impl SenseJson {
    fn into_sense(self) -> Sense {
        Sense {
            // Only use English glosses
            glosses: self
                .gloss
                .into_iter()
                .filter(|g| g.lang == "eng")
                .map(|g| g.text)
                .collect(),
            pos: self.part_of_speech,
            misc: self.misc,
            field: self.field,
            dialect: self.dialect,
            examples: self
                .examples
                .into_iter()
                .map(|example| SenseExample {
                    sentences: example
                        .sentences
                        .into_iter()
                        .map(|s| ExampleText {
                            lang: s.lang,
                            text: s.text,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// JMdict word dictionary
#[derive(Default)]
pub struct JMdict {
    entries: Vec<WordEntry>,
    kanji_index: HashMap<String, Vec<usize>>,
    reading_index: HashMap<String, Vec<usize>>,
    gloss_index: HashMap<String, Vec<usize>>,
}

impl JMdict {
    /// Load JMdict from JSON string (jmdict-simplified format)
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: JMdictJson = serde_json::from_str(json_str)?;
        Ok(Self::from_entries(
            data.words.into_iter().filter_map(convert_entry).collect(),
        ))
    }

    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        let mut dict = Self {
            entries,
            ..Self::default()
        };
        dict.reindex();
        dict
    }

    /// Get the number of entries in the dictionary
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Merge another dictionary into this one
    /// Entries from the other dictionary with the same ID replace existing ones in place
    pub fn merge(mut self, other: JMdict) -> Self {
        let mut positions: HashMap<String, usize> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(idx, e)| e.id.clone().map(|id| (id, idx)))
            .collect();

        for entry in other.entries {
            match entry.id.as_ref().and_then(|id| positions.get(id)) {
                Some(&idx) => self.entries[idx] = entry,
                None => {
                    if let Some(id) = &entry.id {
                        positions.insert(id.clone(), self.entries.len());
                    }
                    self.entries.push(entry);
                }
            }
        }

        self.reindex();
        self
    }

    /// Entries matching the query, in dictionary order
    pub fn lookup(&self, query: &WordQuery) -> Vec<WordEntry> {
        let term = query.term();
        if term.is_empty() {
            return Vec::new();
        }

        match query {
            WordQuery::Exact(term) => {
                let mut result_indices: Vec<usize> = Vec::new();

                for index in [
                    self.kanji_index.get(term.as_str()),
                    self.reading_index.get(term.as_str()),
                    self.gloss_index.get(&term.to_lowercase()),
                ]
                .into_iter()
                .flatten()
                {
                    result_indices.extend(index);
                }

                // Deduplicate and collect entries
                result_indices.sort_unstable();
                result_indices.dedup();

                result_indices
                    .into_iter()
                    .filter_map(|idx| self.entries.get(idx))
                    .cloned()
                    .collect()
            }
            WordQuery::Contains(term) => self.scan(|e| {
                e.kanji.iter().chain(e.kana.iter()).any(|form| form.contains(term.as_str()))
            }),
            WordQuery::ReadingContains(term) => {
                self.scan(|e| e.kana.iter().any(|form| form.contains(term.as_str())))
            }
            WordQuery::GlossPrefix(term) => {
                let prefix = term.to_lowercase();
                let infinitive = format!("to {prefix}");
                self.scan(|e| {
                    e.senses
                        .iter()
                        .flat_map(|s| s.glosses.iter())
                        .map(|g| g.to_lowercase())
                        .any(|g| g.starts_with(&prefix) || g == infinitive)
                })
            }
        }
    }

    fn scan<F>(&self, predicate: F) -> Vec<WordEntry>
    where
        F: Fn(&WordEntry) -> bool,
    {
        self.entries.iter().filter(|e| predicate(e)).cloned().collect()
    }

    fn reindex(&mut self) {
        self.kanji_index.clear();
        self.reading_index.clear();
        self.gloss_index.clear();

        for (entry_idx, entry) in self.entries.iter().enumerate() {
            for k in &entry.kanji {
                self.kanji_index.entry(k.clone()).or_default().push(entry_idx);
            }
            for r in &entry.kana {
                self.reading_index.entry(r.clone()).or_default().push(entry_idx);
            }

            let glosses: HashSet<String> = entry
                .senses
                .iter()
                .flat_map(|s| s.glosses.iter())
                .map(|g| g.to_lowercase())
                .collect();
            for g in glosses {
                self.gloss_index.entry(g).or_default().push(entry_idx);
            }
        }
    }
}

fn convert_entry(json_entry: JMdictJsonEntry) -> Option<WordEntry> {
    let senses: Vec<Sense> = json_entry
        .sense
        .into_iter()
        .map(SenseJson::into_sense)
        .filter(|s| !s.glosses.is_empty())
        .collect();

    // Skip entries with no English meanings
    if senses.is_empty() {
        return None;
    }

    Some(WordEntry {
        id: Some(json_entry.id),
        kanji: json_entry.kanji.into_iter().map(|k| k.text).collect(),
        kana: json_entry.kana.into_iter().map(|k| k.text).collect(),
        senses,
    })
}
