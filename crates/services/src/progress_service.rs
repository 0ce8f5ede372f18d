use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use storage::repository::UserTopicRepository;
use trail_core::model::{Status, TopicId, UserId, UserTopic};

use crate::Clock;
use crate::error::ProgressServiceError;

/// Orchestrates reads and writes of per-user topic progress.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    user_topics: Arc<dyn UserTopicRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, user_topics: Arc<dyn UserTopicRepository>) -> Self {
        Self { clock, user_topics }
    }

    /// Live status for one (user, topic) pair.
    ///
    /// Returns `Ok(None)` when the user has never marked the topic.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if repository access fails.
    pub async fn status_for(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
    ) -> Result<Option<Status>, ProgressServiceError> {
        let found = self.user_topics.get_status(user_id, topic_id).await?;
        Ok(found.map(|user_topic| user_topic.status()))
    }

    /// Record a status for a (user, topic) pair.
    ///
    /// The first write creates the record; later writes replace the status.
    /// Concurrent writers resolve as last write wins.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if persistence fails.
    pub async fn set_status(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
        status: Status,
    ) -> Result<(), ProgressServiceError> {
        let now = self.clock.now();
        let user_topic = UserTopic::new(user_id.clone(), topic_id.clone(), status, now);
        self.user_topics.upsert_status(&user_topic).await?;
        debug!(user = %user_id, topic = %topic_id, status = %status, "progress updated");
        Ok(())
    }

    /// Every stored status for the user, keyed by topic id.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if repository access fails.
    pub async fn statuses_for(
        &self,
        user_id: &UserId,
    ) -> Result<HashMap<TopicId, Status>, ProgressServiceError> {
        let records = self.user_topics.list_for_user(user_id).await?;
        Ok(records
            .into_iter()
            .map(|user_topic| (user_topic.topic_id().clone(), user_topic.status()))
            .collect())
    }
}
