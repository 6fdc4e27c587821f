use yomu_core::dictionary::{Dictionary, DictionaryMetadata, WordQuery};
use yomu_core::error::LookupError;
use yomu_core::types::{Character, Reading, WordEntry};

use crate::dictionary::JMdict;
use crate::kanjidic::Kanjidic;

/// In-memory Japanese dictionary backed by JMdict words and KANJIDIC characters
pub struct JapaneseDictionary {
    words: JMdict,
    characters: Kanjidic,
}

impl JapaneseDictionary {
    pub fn new(words: JMdict, characters: Kanjidic) -> Self {
        Self { words, characters }
    }
}

impl Dictionary for JapaneseDictionary {
    fn lookup_words(&self, query: &WordQuery) -> Result<Vec<WordEntry>, LookupError> {
        Ok(self.words.lookup(query))
    }

    fn lookup_character(&self, literal: char) -> Result<Option<Character>, LookupError> {
        Ok(self.characters.character(literal).cloned())
    }

    fn query_readings(&self, character_id: &str) -> Result<Vec<Reading>, LookupError> {
        self.characters.readings_for(character_id)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "JMdict/KANJIDIC2".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            language: "ja".to_string(),
            word_count: self.words.entry_count(),
            character_count: self.characters.character_count(),
        }
    }
}
