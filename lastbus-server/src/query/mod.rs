//! The schedule query pipeline.
//!
//! Everything here is a pure function of its inputs: the stand's schedule
//! list, the caption packs, the active language, and the user's filter and
//! sort choices.

mod destinations;
mod filter;
mod resolve;
mod sort;
mod view;

pub use destinations::extract_destinations;
pub use filter::{FilterCriteria, apply_filters};
pub use resolve::{resolve_caption, resolve_field, via_stops};
pub use sort::{SortOrder, sort_by_departure};
pub use view::{Departure, ScheduleQuery, ScheduleView, VIA_CAPTION};
