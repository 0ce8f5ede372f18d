use chrono::{DateTime, Utc};

use crate::model::{Status, TopicId, UserId};

/// One user's progress record against one topic.
///
/// A record is created on the first status write for a (user, topic)
/// pair and updated in place on later writes; `created_at` never moves
/// after the first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTopic {
    user_id: UserId,
    topic_id: TopicId,
    status: Status,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserTopic {
    /// Creates the record for a first status write.
    #[must_use]
    pub fn new(user_id: UserId, topic_id: TopicId, status: Status, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            topic_id,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a record from storage.
    #[must_use]
    pub fn from_persisted(
        user_id: UserId,
        topic_id: TopicId,
        status: Status,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            topic_id,
            status,
            created_at,
            updated_at,
        }
    }

    /// Returns the record with a new status, keeping `created_at`.
    #[must_use]
    pub fn with_status(self, status: Status, now: DateTime<Utc>) -> Self {
        Self {
            status,
            updated_at: now,
            ..self
        }
    }

    // Accessors
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn topic_id(&self) -> &TopicId {
        &self.topic_id
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
