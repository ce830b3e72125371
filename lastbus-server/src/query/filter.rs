//! Time-window and destination filtering.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Language, LocalizedField, ScheduleRecord, parse_time_bound};

use super::resolve::{resolve_field, via_stops};

/// Lower bound used when no "from" time is given.
const DEFAULT_FROM: f64 = 0.0;

/// Upper bound used when no "to" time is given.
const DEFAULT_TO: f64 = 24.0;

/// Filters chosen by the user. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Earliest departure, "HH:MM"
    #[serde(default)]
    pub time_from: Option<String>,

    /// Latest departure, "HH:MM"
    #[serde(default)]
    pub time_to: Option<String>,

    /// Destination or via-stop to match, case-insensitively
    #[serde(default)]
    pub destination: Option<String>,
}

impl FilterCriteria {
    /// Whether any criterion is set.
    ///
    /// When this is false, [`apply_filters`] returns the full list.
    pub fn is_active(&self) -> bool {
        self.time_window_is_active() || self.destination().is_some()
    }

    fn time_window_is_active(&self) -> bool {
        non_empty(&self.time_from).is_some() || non_empty(&self.time_to).is_some()
    }

    fn destination(&self) -> Option<&str> {
        non_empty(&self.destination)
    }

    /// The time window as fractional hours.
    ///
    /// Malformed bounds are logged and replaced by their defaults.
    fn time_window(&self) -> (f64, f64) {
        (
            bound_or(&self.time_from, DEFAULT_FROM),
            bound_or(&self.time_to, DEFAULT_TO),
        )
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn bound_or(value: &Option<String>, default: f64) -> f64 {
    match non_empty(value).map(parse_time_bound) {
        Some(Ok(bound)) => bound,
        Some(Err(e)) => {
            warn!(error = %e, "ignoring malformed time filter");
            default
        }
        None => default,
    }
}

/// Keep the records that match every active criterion.
///
/// The time window compares the stored clock reading directly against
/// bounds parsed on a 24-hour scale, so a 9 PM departure stored as `9.00`
/// matches a "09:00" bound. Records keep their relative order.
pub fn apply_filters<'a>(
    records: &'a [ScheduleRecord],
    criteria: &FilterCriteria,
    lang: Language,
) -> Vec<&'a ScheduleRecord> {
    if !criteria.is_active() {
        return records.iter().collect();
    }

    let window = criteria
        .time_window_is_active()
        .then(|| criteria.time_window());
    let destination = criteria.destination().map(str::to_lowercase);

    records
        .iter()
        .filter(|record| {
            window.is_none_or(|(from, to)| from <= record.time && record.time <= to)
        })
        .filter(|record| {
            destination
                .as_deref()
                .is_none_or(|wanted| serves_destination(record, wanted, lang))
        })
        .collect()
}

/// Whether the record's destination or any via-stop equals `wanted`
/// (already lower-cased).
fn serves_destination(record: &ScheduleRecord, wanted: &str, lang: Language) -> bool {
    resolve_field(record, LocalizedField::Destination, lang).to_lowercase() == wanted
        || via_stops(record, lang).any(|stop| stop.to_lowercase() == wanted)
}
