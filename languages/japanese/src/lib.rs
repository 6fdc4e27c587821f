pub mod dictionary;
pub mod jlpt;
pub mod kana;
pub mod kanjidic;
pub mod loader;
pub mod readings;
pub mod response;
pub mod search;
pub mod store;

#[cfg(test)]
mod testutil;
#[cfg(test)]
mod tests;

pub use dictionary::JMdict;
pub use jlpt::JlptLevel;
pub use kanjidic::{Kanjidic, KanjiFormat};
pub use loader::{JMdictLoader, KanjidicLoader, load_dictionary};
pub use readings::{KanjiReadings, ReadingStrategy, extract_readings};
pub use response::{
    ExampleSentence, ExampleWord, GeneralSearchResponse, KanjiInfo, SearchResult, SenseResult,
    SimilarKanji, WordResult,
};
pub use search::{EnrichmentPolicy, SearchError, SearchService};
pub use store::JapaneseDictionary;
