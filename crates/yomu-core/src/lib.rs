pub mod dictionary;
pub mod error;
pub mod preprocess;
pub mod script;
pub mod types;

pub use dictionary::{Dictionary, DictionaryMetadata, SearchOptions, WordQuery};
pub use error::{LoadError, LookupError};
pub use types::{
    Character, ExampleText, Meaning, Reading, ReadingMeaningGroup, ReadingType, Sense,
    SenseExample, WordEntry,
};
