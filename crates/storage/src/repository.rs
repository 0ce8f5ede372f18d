use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use trail_core::model::{Status, TopicId, UserId, UserTopic};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape for one user's progress mark against one topic.
///
/// This mirrors the domain `UserTopic` so repositories can
/// serialize/deserialize without leaking storage concerns into the
/// domain layer.
#[derive(Debug, Clone)]
pub struct UserTopicRecord {
    pub user_id: String,
    pub topic_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserTopicRecord {
    #[must_use]
    pub fn from_user_topic(user_topic: &UserTopic) -> Self {
        Self {
            user_id: user_topic.user_id().as_str().to_owned(),
            topic_id: user_topic.topic_id().as_str().to_owned(),
            status: user_topic.status().as_str().to_owned(),
            created_at: user_topic.created_at(),
            updated_at: user_topic.updated_at(),
        }
    }

    /// Convert the record back into a domain `UserTopic`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the ids or status fail to
    /// parse.
    pub fn into_user_topic(self) -> Result<UserTopic, StorageError> {
        let user_id = UserId::new(self.user_id)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let topic_id = TopicId::new(self.topic_id)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let status: Status = self
            .status
            .parse()
            .map_err(|e: trail_core::model::ParseStatusError| {
                StorageError::Serialization(e.to_string())
            })?;

        Ok(UserTopic::from_persisted(
            user_id,
            topic_id,
            status,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Repository contract for per-user topic progress.
#[async_trait]
pub trait UserTopicRepository: Send + Sync {
    /// Persist a status write.
    ///
    /// The first write for a (user, topic) pair creates the record; later
    /// writes replace the status and `updated_at` while `created_at`
    /// keeps the value from the first write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn upsert_status(&self, user_topic: &UserTopic) -> Result<(), StorageError>;

    /// Fetch the record for one (user, topic) pair.
    ///
    /// Returns `Ok(None)` when the user has never marked the topic.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if repository access fails.
    async fn get_status(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
    ) -> Result<Option<UserTopic>, StorageError>;

    /// Fetch every record for the user, ordered by topic id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if repository access fails.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<UserTopic>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    user_topics: Arc<Mutex<HashMap<(UserId, TopicId), UserTopic>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_topics: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserTopicRepository for InMemoryRepository {
    async fn upsert_status(&self, user_topic: &UserTopic) -> Result<(), StorageError> {
        let mut guard = self
            .user_topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let key = (user_topic.user_id().clone(), user_topic.topic_id().clone());
        let stored = match guard.remove(&key) {
            // keep created_at from the first write
            Some(existing) => existing.with_status(user_topic.status(), user_topic.updated_at()),
            None => user_topic.clone(),
        };
        guard.insert(key, stored);
        Ok(())
    }

    async fn get_status(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
    ) -> Result<Option<UserTopic>, StorageError> {
        let guard = self
            .user_topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&(user_id.clone(), topic_id.clone())).cloned())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<UserTopic>, StorageError> {
        let guard = self
            .user_topics
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut found: Vec<UserTopic> = guard
            .values()
            .filter(|user_topic| user_topic.user_id() == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.topic_id().cmp(b.topic_id()));
        Ok(found)
    }
}

/// Aggregates progress repositories behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub user_topics: Arc<dyn UserTopicRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let user_topics: Arc<dyn UserTopicRepository> = Arc::new(repo);
        Self { user_topics }
    }
}
