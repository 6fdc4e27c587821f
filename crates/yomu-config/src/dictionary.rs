use serde::{Deserialize, Serialize};

use crate::split_list;

/// Dictionary sources; unset paths fall back to the bundled sample data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// jmdict-simplified words JSON
    pub jmdict_path: Option<String>,
    /// jmdict-simplified KANJIDIC2 JSON, or a flat kanji list
    pub kanjidic_path: Option<String>,
    /// Extra JMdict files merged on top, later ids override earlier ones
    pub additional_paths: Vec<String>,
}

impl DictionaryConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            jmdict_path: non_blank("JMDICT_PATH"),
            kanjidic_path: non_blank("KANJIDIC_PATH"),
            additional_paths: non_blank("ADDITIONAL_DICTIONARIES")
                .map(|v| split_list(&v))
                .unwrap_or_default(),
        }
    }
}
