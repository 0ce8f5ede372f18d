mod ids;
mod status;
mod topic;
mod user_topic;

pub use ids::{EmptyIdError, TopicId, UserId};
pub use status::{ParseStatusError, Status};
pub use topic::{Topic, TopicError};
pub use user_topic::UserTopic;
