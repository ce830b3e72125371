//! Stand selection with "latest request wins" semantics.
//!
//! A client that switches stands while a load is still pending must end up
//! showing the stand it asked for last. Each selection takes a ticket from
//! a monotonically increasing counter; a completed load is applied only if
//! its ticket is still the newest one when the state lock is taken.
//!
//! This is for stateful clients that hold one session across several
//! selections. The HTTP handlers serve each request on its own and go to
//! [`ScheduleLoader`] directly.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{ScheduleError, StandCode};

use super::loader::{ScheduleLoader, Schedules};
use super::source::ScheduleSource;

/// The schedules currently on display.
#[derive(Debug, Clone)]
pub struct LoadedSchedule {
    pub stand: StandCode,
    pub records: Schedules,
}

/// What happened to a selection request.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The load finished and is now the current schedule.
    Applied(LoadedSchedule),
    /// A newer selection was made while this one was loading; its result
    /// was discarded.
    Superseded,
    /// `retry` was called before any stand was selected.
    Idle,
}

#[derive(Default)]
struct SessionState {
    current: Option<LoadedSchedule>,
    requested: Option<StandCode>,
}

/// One client's view of the schedule loader.
pub struct ScheduleSession<S> {
    loader: Arc<ScheduleLoader<S>>,
    latest: AtomicU64,
    state: RwLock<SessionState>,
}

impl<S: ScheduleSource> ScheduleSession<S> {
    pub fn new(loader: Arc<ScheduleLoader<S>>) -> Self {
        Self {
            loader,
            latest: AtomicU64::new(0),
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Select a stand and load its schedules.
    ///
    /// Errors from a superseded load are swallowed along with its data.
    pub async fn select(&self, stand: &StandCode) -> Result<LoadOutcome, ScheduleError> {
        let ticket = {
            let mut state = self.state.write().await;
            state.requested = Some(stand.clone());
            self.latest.fetch_add(1, Ordering::SeqCst) + 1
        };

        let result = self.loader.load(stand).await;

        let mut state = self.state.write().await;
        if self.latest.load(Ordering::SeqCst) != ticket {
            debug!(%stand, ticket, "discarding superseded schedule load");
            return Ok(LoadOutcome::Superseded);
        }

        let loaded = LoadedSchedule {
            stand: stand.clone(),
            records: result?,
        };
        state.current = Some(loaded.clone());

        Ok(LoadOutcome::Applied(loaded))
    }

    /// Repeat the most recent selection.
    pub async fn retry(&self) -> Result<LoadOutcome, ScheduleError> {
        let requested = self.state.read().await.requested.clone();
        match requested {
            Some(stand) => self.select(&stand).await,
            None => Ok(LoadOutcome::Idle),
        }
    }

    /// The schedules currently on display, if any load has been applied.
    pub async fn current(&self) -> Option<LoadedSchedule> {
        self.state.read().await.current.clone()
    }
}
