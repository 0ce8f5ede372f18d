use trail_core::model::{TopicId, UserId, UserTopic};

use super::{SqliteRepository, mapping::map_user_topic_row};
use crate::repository::{StorageError, UserTopicRecord, UserTopicRepository};

#[async_trait::async_trait]
impl UserTopicRepository for SqliteRepository {
    async fn upsert_status(&self, user_topic: &UserTopic) -> Result<(), StorageError> {
        let record = UserTopicRecord::from_user_topic(user_topic);

        sqlx::query(
            r"
            INSERT INTO user_topics (user_id, topic_id, status, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(user_id, topic_id) DO UPDATE SET
                -- keep created_at from the original insert; only update mutable fields
                status = excluded.status,
                updated_at = excluded.updated_at
            ",
        )
        .bind(record.user_id)
        .bind(record.topic_id)
        .bind(record.status)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn get_status(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
    ) -> Result<Option<UserTopic>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT user_id, topic_id, status, created_at, updated_at
            FROM user_topics
            WHERE user_id = ?1 AND topic_id = ?2
            ",
        )
        .bind(user_id.as_str())
        .bind(topic_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.as_ref().map(map_user_topic_row).transpose()
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<UserTopic>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT user_id, topic_id, status, created_at, updated_at
            FROM user_topics
            WHERE user_id = ?1
            ORDER BY topic_id ASC
            ",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut found = Vec::with_capacity(rows.len());
        for row in rows {
            found.push(map_user_topic_row(&row)?);
        }
        Ok(found)
    }
}
