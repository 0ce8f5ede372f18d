use thiserror::Error;

use crate::model::{Status, TopicId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic title cannot be empty")]
    EmptyTitle,
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// A static unit of study content: a title plus a markdown body.
///
/// Topics are immutable once loaded from fixture data. The optional
/// `default_status` is a fixture-provided fallback, superseded by any
/// live per-user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    id: TopicId,
    title: String,
    body: String,
    default_status: Option<Status>,
}

impl Topic {
    /// Creates a new Topic.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::EmptyTitle` if the title is empty or
    /// whitespace-only.
    pub fn new(
        id: TopicId,
        title: impl Into<String>,
        body: impl Into<String>,
        default_status: Option<Status>,
    ) -> Result<Self, TopicError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TopicError::EmptyTitle);
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            body: body.into(),
            default_status,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Markdown source of the topic body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn default_status(&self) -> Option<Status> {
        self.default_status
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn topic_id(raw: &str) -> TopicId {
        TopicId::new(raw).unwrap()
    }

    #[test]
    fn topic_new_rejects_empty_title() {
        let err = Topic::new(topic_id("a"), "   ", "body", None).unwrap_err();
        assert_eq!(err, TopicError::EmptyTitle);
    }

    #[test]
    fn topic_new_happy_path() {
        let topic = Topic::new(
            topic_id("cdb"),
            "CDB",
            "**Certificado** de Deposito Bancario",
            Some(Status::Pending),
        )
        .unwrap();

        assert_eq!(topic.id().as_str(), "cdb");
        assert_eq!(topic.title(), "CDB");
        assert_eq!(topic.body(), "**Certificado** de Deposito Bancario");
        assert_eq!(topic.default_status(), Some(Status::Pending));
    }

    #[test]
    fn topic_trims_title_and_keeps_body_verbatim() {
        let topic = Topic::new(topic_id("a"), "  Tesouro Direto  ", "  body  ", None).unwrap();
        assert_eq!(topic.title(), "Tesouro Direto");
        assert_eq!(topic.body(), "  body  ");
    }

    #[test]
    fn topic_allows_empty_body() {
        let topic = Topic::new(topic_id("a"), "Stub", "", None).unwrap();
        assert_eq!(topic.body(), "");
    }
}
