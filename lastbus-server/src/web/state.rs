//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::{LanguagePacks, StandDirectory};
use crate::schedules::{DatasetSource, ScheduleLoader};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// The stand catalog
    pub stands: Arc<StandDirectory>,

    /// Language labels and captions
    pub languages: Arc<LanguagePacks>,

    /// Cached per-stand schedule loader
    pub schedules: Arc<ScheduleLoader<DatasetSource>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        stands: StandDirectory,
        languages: LanguagePacks,
        schedules: ScheduleLoader<DatasetSource>,
    ) -> Self {
        Self {
            stands: Arc::new(stands),
            languages: Arc::new(languages),
            schedules: Arc::new(schedules),
        }
    }
}
