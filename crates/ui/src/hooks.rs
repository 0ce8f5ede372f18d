use dioxus::prelude::*;

use trail_core::model::{Status, Topic};

use crate::context::AppContext;
use crate::views::ViewError;

/// Starts one asynchronous read of the live status for (current user, topic).
///
/// `Ok(None)` means the read resolved and the user has never marked the
/// topic. This is a thin pass-through over `ProgressService`; caching and
/// cancellation are whatever `use_resource` provides.
#[must_use]
pub fn use_topic_status(topic: &Topic) -> Resource<Result<Option<Status>, ViewError>> {
    let ctx = use_context::<AppContext>();
    let topic_id = topic.id().clone();
    use_resource(move || {
        let progress = ctx.progress();
        let user_id = ctx.current_user_id();
        let topic_id = topic_id.clone();
        async move {
            progress
                .status_for(&user_id, &topic_id)
                .await
                .map_err(|_| ViewError::Unknown)
        }
    })
}
