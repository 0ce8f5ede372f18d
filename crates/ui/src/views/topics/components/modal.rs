use dioxus::prelude::*;

use trail_core::model::{Status, TopicId};

use super::ProgressControl;

/// Overlay for one topic's full content.
///
/// Renders nothing at all while closed, so child state (e.g. scroll
/// position) is discarded on close. A backdrop click toggles the modal
/// shut; clicks inside the content area do not reach the backdrop.
#[component]
pub fn TopicModal(
    is_open: bool,
    on_toggle: Callback<()>,
    topic_id: TopicId,
    progress: Status,
    on_saved: Callback<Status>,
    children: Element,
) -> Element {
    rsx! {
        if is_open {
            div {
                class: "topic-modal-overlay",
                onclick: move |_| on_toggle.call(()),
                div {
                    class: "topic-modal",
                    onclick: move |evt| evt.stop_propagation(),
                    button {
                        class: "topic-modal-close",
                        r#type: "button",
                        aria_label: "close",
                        onclick: move |_| on_toggle.call(()),
                        span { class: "topic-modal-close-icon", "\u{d7}" }
                    }
                    ProgressControl { topic_id, current: progress, on_saved }
                    {children}
                }
            }
        }
    }
}
