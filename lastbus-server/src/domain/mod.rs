//! Domain types for the bus schedule server.
//!
//! These types represent validated schedule data. Stand codes and language
//! codes are checked at construction time, so code that receives them can
//! trust their validity.

mod error;
mod language;
mod record;
mod stand;
mod time;

pub use error::ScheduleError;
pub use language::{InvalidLanguage, Language};
pub use record::{LocalizedField, ScheduleRecord, TimePart};
pub use stand::{InvalidStandCode, Stand, StandCode};
pub use time::{ValidationError, format_time, parse_time_bound};
