mod state;
mod topics;

pub use state::{ViewError, ViewState, view_state_from_resource};
pub use topics::TopicsView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
