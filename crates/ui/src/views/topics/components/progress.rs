use dioxus::prelude::*;

use trail_core::model::{Status, TopicId};

use crate::context::AppContext;
use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Error(ViewError),
}

/// One button per status value; clicking writes the new status for the
/// current user and this topic. The write is the only reconciliation: the
/// owning tile restarts its status read via `on_saved`.
#[component]
pub fn ProgressControl(topic_id: TopicId, current: Status, on_saved: Callback<Status>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut save_state = use_signal(|| SaveState::Idle);

    let options = Status::ALL.iter().map(|&status| {
        let ctx = ctx.clone();
        let topic_id = topic_id.clone();
        rsx! {
            button {
                key: "{status.as_str()}",
                class: if status == current {
                    "progress-option progress-option--current"
                } else {
                    "progress-option"
                },
                r#type: "button",
                disabled: save_state() == SaveState::Saving,
                onclick: move |_| {
                    let progress = ctx.progress();
                    let user_id = ctx.current_user_id();
                    let topic_id = topic_id.clone();
                    let mut save_state = save_state;
                    spawn(async move {
                        save_state.set(SaveState::Saving);
                        match progress.set_status(&user_id, &topic_id, status).await {
                            Ok(()) => {
                                save_state.set(SaveState::Idle);
                                on_saved.call(status);
                            }
                            Err(_) => {
                                save_state.set(SaveState::Error(ViewError::Unknown));
                            }
                        }
                    });
                },
                "{status.label()}"
            }
        }
    });

    rsx! {
        div { class: "progress-control",
            span { class: "progress-control-label", "Progress" }
            div { class: "progress-options",
                {options}
            }
            if let SaveState::Error(err) = save_state() {
                p { class: "progress-error", "{err.message()}" }
            }
        }
    }
}
