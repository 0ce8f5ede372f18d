use std::sync::Arc;

use services::{ProgressService, TopicCatalog};
use trail_core::model::UserId;

pub trait UiApp: Send + Sync {
    fn current_user_id(&self) -> UserId;

    fn catalog(&self) -> Arc<TopicCatalog>;
    fn progress(&self) -> Arc<ProgressService>;
}

#[derive(Clone)]
pub struct AppContext {
    current_user_id: UserId,
    catalog: Arc<TopicCatalog>,
    progress: Arc<ProgressService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            current_user_id: app.current_user_id(),
            catalog: app.catalog(),
            progress: app.progress(),
        }
    }

    /// The ambient user identity every read and write is keyed by.
    #[must_use]
    pub fn current_user_id(&self) -> UserId {
        self.current_user_id.clone()
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<TopicCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
