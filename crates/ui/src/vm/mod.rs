mod markdown_vm;
mod topic_vm;

pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use topic_vm::{count_done, resolve_status, topic_color_classes};
