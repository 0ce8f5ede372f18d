use std::collections::HashMap;

use trail_core::model::{Status, Topic, TopicId};

/// Tile style classes per status: a background plus a text decoration.
///
/// The match is exhaustive so a new status value cannot ship without a
/// style.
#[must_use]
pub fn topic_color_classes(status: Status) -> &'static str {
    match status {
        Status::Pending => "topic-tile--pending",
        Status::InProgress => "topic-tile--in-progress topic-tile--underline",
        Status::Done => "topic-tile--done topic-tile--struck",
        Status::Skip => "topic-tile--skip topic-tile--struck",
    }
}

/// The live status wins over the fixture default; everything else reads
/// as pending.
#[must_use]
pub fn resolve_status(live: Option<Status>, fixture_default: Option<Status>) -> Status {
    live.or(fixture_default).unwrap_or_default()
}

/// How many topics currently resolve to `Done` for the overview line.
#[must_use]
pub fn count_done(topics: &[Topic], statuses: &HashMap<TopicId, Status>) -> usize {
    topics
        .iter()
        .filter(|topic| {
            let live = statuses.get(topic.id()).copied();
            resolve_status(live, topic.default_status()) == Status::Done
        })
        .count()
}
