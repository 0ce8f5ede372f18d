use dioxus::prelude::*;

use trail_core::model::Topic;

use crate::hooks::use_topic_status;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{markdown_to_html, resolve_status, topic_color_classes};

use super::TopicModal;

/// One clickable topic tile. Owns its modal's open/closed flag and its own
/// live status read.
#[component]
pub fn TopicTile(topic: Topic, on_progress_changed: Callback<()>) -> Element {
    let mut is_open = use_signal(|| false);
    let resource = use_topic_status(&topic);

    let toggle = use_callback(move |()| {
        let open = is_open();
        is_open.set(!open);
    });
    let on_saved = use_callback(move |_| {
        let mut resource = resource;
        resource.restart();
        on_progress_changed.call(());
    });

    let state = view_state_from_resource(&resource);
    match state {
        // Nothing renders until the live status resolves, so the tile
        // cannot be activated during the loading window.
        ViewState::Idle | ViewState::Loading => rsx! {},
        ViewState::Error(err) => rsx! {
            div { class: "topic-cell topic-cell--error",
                p { class: "topic-error", "{err.message()}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let mut resource = resource;
                        resource.restart();
                    },
                    "Retry"
                }
            }
        },
        ViewState::Ready(live) => {
            let status = resolve_status(live, topic.default_status());
            let color_classes = topic_color_classes(status);
            let body_html = markdown_to_html(topic.body());
            let topic_id = topic.id().clone();
            rsx! {
                div { class: "topic-cell",
                    button {
                        class: "topic-tile {color_classes}",
                        r#type: "button",
                        onclick: move |_| toggle.call(()),
                        h5 { class: "topic-tile-title", "{topic.title()}" }
                    }
                    TopicModal {
                        is_open: is_open(),
                        on_toggle: toggle,
                        topic_id,
                        progress: status,
                        on_saved,
                        div { class: "topic-body", dangerous_inner_html: "{body_html}" }
                    }
                }
            }
        }
    }
}
