use dioxus::prelude::*;

use trail_core::model::Topic;

use super::TopicTile;

/// Renders one tile per topic, in catalog order, keyed by topic id.
#[component]
pub fn TopicList(topics: Vec<Topic>, on_progress_changed: Callback<()>) -> Element {
    rsx! {
        div { class: "topic-grid",
            for topic in topics {
                TopicTile {
                    key: "{topic.id()}",
                    topic: topic.clone(),
                    on_progress_changed,
                }
            }
        }
    }
}
