use std::collections::HashSet;

use trail_core::fixture::FixtureFile;
use trail_core::model::{Topic, TopicId};

use crate::error::CatalogError;

/// Immutable, ordered collection of study topics loaded from fixture data.
///
/// The catalog is built once at startup and never changes afterwards;
/// tiles render in exactly the order the fixture lists them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
}

impl TopicCatalog {
    /// Builds a catalog from already-validated topics.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two topics share an id, since
    /// ids are the join key for progress records and the render key for
    /// tiles.
    pub fn from_topics(topics: Vec<Topic>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(topics.len());
        for topic in &topics {
            if !seen.insert(topic.id().clone()) {
                return Err(CatalogError::DuplicateId(topic.id().clone()));
            }
        }
        Ok(Self { topics })
    }

    /// Parses and validates a fixture document (`{ "data": [...] }`).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for malformed JSON, invalid records, or
    /// duplicate ids.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: FixtureFile = serde_json::from_str(json)?;
        let mut topics = Vec::with_capacity(file.data.len());
        for record in file.data {
            topics.push(record.into_topic()?);
        }
        Self::from_topics(topics)
    }

    /// Topics in fixture order.
    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn get(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
