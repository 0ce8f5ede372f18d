use std::sync::Arc;

use storage::repository::{StorageError, UserTopicRepository};
use trail_core::model::{Status, TopicId, UserId, UserTopic};

use super::test_harness::{setup_modal_harness, setup_view_harness, setup_view_harness_with_repo};

const THREE_TOPICS: &str = r#"{
    "data": [
        { "id": "tesouro", "title": "Tesouro Direto", "body": "**Titulos** publicos." },
        { "id": "cdb", "title": "CDB", "body": "Certificado de deposito." },
        { "id": "lci", "title": "LCI e LCA", "body": "Letras de credito." }
    ]
}"#;

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_renders_tiles_in_fixture_order() {
    let mut harness = setup_view_harness(THREE_TOPICS).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(
        html.matches("topic-tile-title").count(),
        3,
        "expected three tiles in {html}"
    );

    let first = html.find("Tesouro Direto").expect("first title");
    let second = html.find("CDB").expect("second title");
    let third = html.find("LCI e LCA").expect("third title");
    assert!(first < second && second < third, "order broken in {html}");

    // No record and no fixture default: every tile reads as pending.
    assert_eq!(html.matches("topic-tile--pending").count(), 3);
    assert!(html.contains("0 of 3 done"), "missing overview in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_renders_empty_catalog() {
    let mut harness = setup_view_harness(r#"{ "data": [] }"#).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(html.matches("topic-tile-title").count(), 0);
    assert!(html.contains("0 of 0 done"), "missing overview in {html}");
    assert!(html.contains("Fixed Income"), "missing heading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tile_prefers_live_status_over_fixture_default() {
    let fixture = r#"{
        "data": [
            { "id": "cdb", "title": "CDB", "body": "", "status": "IN_PROGRESS" }
        ]
    }"#;
    let mut harness = setup_view_harness(fixture).await;

    let topic_id = TopicId::new("cdb").unwrap();
    harness
        .progress
        .set_status(&harness.user_id, &topic_id, Status::Done)
        .await
        .expect("seed status");

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("topic-tile--done"), "missing done in {html}");
    assert!(
        !html.contains("topic-tile--in-progress"),
        "fixture default leaked into {html}"
    );
    assert!(html.contains("1 of 1 done"), "missing overview in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tile_falls_back_to_fixture_default_then_pending() {
    let fixture = r#"{
        "data": [
            { "id": "a", "title": "With default", "body": "", "status": "SKIP" },
            { "id": "b", "title": "Without default", "body": "" }
        ]
    }"#;
    let mut harness = setup_view_harness(fixture).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("topic-tile--skip"), "missing skip in {html}");
    assert!(
        html.contains("topic-tile--pending"),
        "missing pending in {html}"
    );
}

struct StalledRepo;

#[async_trait::async_trait]
impl UserTopicRepository for StalledRepo {
    async fn upsert_status(&self, _user_topic: &UserTopic) -> Result<(), StorageError> {
        std::future::pending().await
    }

    async fn get_status(
        &self,
        _user_id: &UserId,
        _topic_id: &TopicId,
    ) -> Result<Option<UserTopic>, StorageError> {
        std::future::pending().await
    }

    async fn list_for_user(&self, _user_id: &UserId) -> Result<Vec<UserTopic>, StorageError> {
        std::future::pending().await
    }
}

#[tokio::test(flavor = "current_thread")]
async fn tiles_render_nothing_while_status_is_loading() {
    let mut harness = setup_view_harness_with_repo(THREE_TOPICS, Arc::new(StalledRepo)).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    // The page shell is there, but no tile markup until reads resolve.
    assert!(html.contains("Fixed Income"), "missing heading in {html}");
    assert_eq!(
        html.matches("topic-tile").count(),
        0,
        "tiles rendered during loading window: {html}"
    );
}

struct FailingRepo;

#[async_trait::async_trait]
impl UserTopicRepository for FailingRepo {
    async fn upsert_status(&self, _user_topic: &UserTopic) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_status(
        &self,
        _user_id: &UserId,
        _topic_id: &TopicId,
    ) -> Result<Option<UserTopic>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_for_user(&self, _user_id: &UserId) -> Result<Vec<UserTopic>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn tile_renders_error_state_with_retry() {
    let fixture = r#"{ "data": [ { "id": "a", "title": "T1", "body": "" } ] }"#;
    let mut harness = setup_view_harness_with_repo(fixture, Arc::new(FailingRepo)).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Something went wrong"),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn modal_is_absent_when_closed() {
    let mut harness = setup_modal_harness(false, "**b**").await;
    harness.rebuild();

    let html = harness.render();
    assert!(!html.contains("topic-modal"), "closed modal left markup in {html}");
    assert!(!html.contains("Progress"), "closed modal left control in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn modal_open_shows_progress_control_and_rendered_markdown() {
    let mut harness = setup_modal_harness(true, "**b**").await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("topic-modal-overlay"), "missing backdrop in {html}");
    assert!(
        html.contains("<strong>b</strong>"),
        "markdown body not rendered in {html}"
    );
    assert!(html.contains("Progress"), "missing control in {html}");
    for label in ["Pending", "In progress", "Done", "Skip"] {
        assert!(html.contains(label), "missing option {label} in {html}");
    }
}
