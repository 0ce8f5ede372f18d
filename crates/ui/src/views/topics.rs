use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::count_done;

pub(crate) mod components;

use components::TopicList;

#[component]
pub fn TopicsView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let topics = catalog.topics().to_vec();

    // One page-level read backs the overview line; each tile still does its
    // own independent status read.
    let overview = use_resource(move || {
        let progress = ctx.progress();
        let user_id = ctx.current_user_id();
        async move {
            progress
                .statuses_for(&user_id)
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });
    let on_progress_changed = use_callback(move |()| {
        let mut overview = overview;
        overview.restart();
    });

    let state = view_state_from_resource(&overview);
    let total = topics.len();

    rsx! {
        div { class: "page topics-page",
            header { class: "view-header",
                h3 { class: "view-title", "Fixed Income" }
                p { class: "view-subtitle", "Topics to study about fixed income." }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {},
                ViewState::Error(err) => rsx! {
                    p { class: "topics-overview topics-overview--error", "{err.message()}" }
                },
                ViewState::Ready(statuses) => {
                    let done = count_done(&topics, &statuses);
                    rsx! {
                        p { class: "topics-overview", "{done} of {total} done" }
                    }
                }
            }
            TopicList { topics, on_progress_changed }
        }
    }
}
