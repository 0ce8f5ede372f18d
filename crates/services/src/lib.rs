#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod progress_service;

pub use trail_core::Clock;

pub use catalog::TopicCatalog;
pub use error::{CatalogError, ProgressServiceError};
pub use progress_service::ProgressService;
