use sqlx::Row;
use trail_core::model::UserTopic;

use crate::repository::{StorageError, UserTopicRecord};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn map_user_topic_row(row: &sqlx::sqlite::SqliteRow) -> Result<UserTopic, StorageError> {
    let record = UserTopicRecord {
        user_id: row.try_get("user_id").map_err(ser)?,
        topic_id: row.try_get("topic_id").map_err(ser)?,
        status: row.try_get("status").map_err(ser)?,
        created_at: row.try_get("created_at").map_err(ser)?,
        updated_at: row.try_get("updated_at").map_err(ser)?,
    };
    record.into_user_topic()
}
