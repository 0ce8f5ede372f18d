//! Fixture record types for the static topic data file.
//!
//! The on-disk shape is `{ "data": [ { "id", "title", "body", "status"? } ] }`,
//! loaded once at startup and validated into domain [`Topic`]s.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{EmptyIdError, Status, Topic, TopicError, TopicId};

/// Top-level fixture document.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureFile {
    pub data: Vec<TopicRecord>,
}

/// One raw topic entry as it appears in fixture JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub status: Option<Status>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FixtureError {
    #[error(transparent)]
    Id(#[from] EmptyIdError),

    #[error(transparent)]
    Topic(#[from] TopicError),
}

impl TopicRecord {
    /// Validates the raw record into a domain `Topic`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if the id or title fails validation.
    pub fn into_topic(self) -> Result<Topic, FixtureError> {
        let id = TopicId::new(self.id)?;
        let topic = Topic::new(id, self.title, self.body, self.status)?;
        Ok(topic)
    }
}
