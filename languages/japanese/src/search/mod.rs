//! Kanji lookup and general search over a [`Dictionary`]

mod examples;
mod general;
mod kanji;
mod similar;

use std::sync::Arc;

use yomu_config::EnrichmentMode;
use yomu_core::dictionary::{Dictionary, DictionaryMetadata, SearchOptions};
use yomu_core::error::LookupError;

/// How kanji lookups treat a failed enrichment phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnrichmentPolicy {
    /// Log the failure and continue with an empty list
    #[default]
    Degrade,
    /// Fail the whole lookup
    Fail,
}

impl From<EnrichmentMode> for EnrichmentPolicy {
    fn from(mode: EnrichmentMode) -> Self {
        match mode {
            EnrichmentMode::Degrade => EnrichmentPolicy::Degrade,
            EnrichmentMode::Fail => EnrichmentPolicy::Fail,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("{phase} failed: {source}")]
    Enrichment {
        phase: &'static str,
        source: LookupError,
    },
}

pub struct SearchService {
    dictionary: Arc<dyn Dictionary>,
    options: SearchOptions,
    policy: EnrichmentPolicy,
}

impl SearchService {
    pub fn new(dictionary: Arc<dyn Dictionary>, options: SearchOptions) -> Self {
        Self {
            dictionary,
            options,
            policy: EnrichmentPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: EnrichmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn metadata(&self) -> DictionaryMetadata {
        self.dictionary.metadata()
    }

    /// Apply the enrichment policy to one phase's outcome
    fn settle<T: Default>(
        &self,
        phase: &'static str,
        result: Result<T, LookupError>,
    ) -> Result<T, SearchError> {
        match result {
            Ok(value) => Ok(value),
            Err(source) => match self.policy {
                EnrichmentPolicy::Degrade => {
                    tracing::error!(phase, "enrichment failed, continuing without it: {source}");
                    Ok(T::default())
                }
                EnrichmentPolicy::Fail => Err(SearchError::Enrichment { phase, source }),
            },
        }
    }
}
