use std::path::Path;

use anyhow::Context;
use yomu_config::dictionary::DictionaryConfig;
use yomu_core::error::LoadError;

use crate::dictionary::JMdict;
use crate::kanjidic::Kanjidic;
use crate::store::JapaneseDictionary;

fn read_file(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

pub struct JMdictLoader;

impl JMdictLoader {
    /// Load embedded dictionary data
    pub fn load_embedded() -> Result<JMdict, LoadError> {
        let json = include_str!("../data/jmdict-eng-sample.json");
        tracing::info!("Loading embedded JMdict dictionary...");
        let dict = JMdict::from_json(json)?;
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<JMdict, LoadError> {
        tracing::info!("Loading JMdict from file: {}", path.display());
        let dict = JMdict::from_json(&read_file(path)?)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    /// Merge two dictionaries (later entries override earlier ones by ID)
    pub fn merge(base: JMdict, additional: JMdict) -> JMdict {
        base.merge(additional)
    }
}

pub struct KanjidicLoader;

impl KanjidicLoader {
    pub fn load_embedded() -> Result<Kanjidic, LoadError> {
        let json = include_str!("../data/kanjidic2-en-sample.json");
        tracing::info!("Loading embedded KANJIDIC2 sample...");
        let dict = Kanjidic::from_json(json)?;
        tracing::info!("Loaded {} characters", dict.character_count());
        Ok(dict)
    }

    pub fn load_from_file(path: &Path) -> Result<Kanjidic, LoadError> {
        tracing::info!("Loading kanji dictionary from file: {}", path.display());
        let dict = Kanjidic::from_json(&read_file(path)?)?;
        tracing::info!(
            format = ?dict.format(),
            "Loaded {} characters from file",
            dict.character_count()
        );
        Ok(dict)
    }
}

/// Build the dictionary described by `config`.
///
/// Unset paths use the bundled samples. A configured primary file that cannot
/// be loaded is an error; additional dictionaries that fail are skipped.
pub fn load_dictionary(config: &DictionaryConfig) -> anyhow::Result<JapaneseDictionary> {
    let mut words = match &config.jmdict_path {
        Some(path) => JMdictLoader::load_from_file(Path::new(path))
            .with_context(|| format!("failed to load JMdict from {path}"))?,
        None => JMdictLoader::load_embedded().context("failed to load embedded JMdict")?,
    };

    for path in &config.additional_paths {
        match JMdictLoader::load_from_file(Path::new(path)) {
            Ok(additional) => {
                words = JMdictLoader::merge(words, additional);
                tracing::info!("Merged additional dictionary {path}");
            }
            Err(e) => tracing::warn!("Skipping additional dictionary {path}: {e}"),
        }
    }

    let characters = match &config.kanjidic_path {
        Some(path) => KanjidicLoader::load_from_file(Path::new(path))
            .with_context(|| format!("failed to load kanji dictionary from {path}"))?,
        None => KanjidicLoader::load_embedded().context("failed to load embedded KANJIDIC2")?,
    };

    Ok(JapaneseDictionary::new(words, characters))
}
