//! Per-stand schedule datasets.
//!
//! Datasets are read from a [`ScheduleSource`] (local files or a static
//! file host), cached by [`ScheduleLoader`], and selected by clients through
//! a [`ScheduleSession`] that ignores stale loads.

mod http;
mod loader;
mod session;
mod source;

pub use http::{HttpScheduleSource, HttpSourceConfig};
pub use loader::{LoaderConfig, ScheduleLoader, Schedules, WarmReport};
pub use session::{LoadOutcome, LoadedSchedule, ScheduleSession};
pub use source::{DatasetSource, FileScheduleSource, ScheduleSource};
