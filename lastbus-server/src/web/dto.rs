//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalog::LanguagePack;
use crate::domain::{Language, Stand};
use crate::query::{FilterCriteria, ScheduleQuery, ScheduleView, SortOrder};

/// Query string of the stand picker.
#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    /// Stand to jump straight to
    pub stand: Option<String>,
}

/// Query string of a schedule page.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleParams {
    /// Earliest departure, "HH:MM"
    pub time_from: Option<String>,

    /// Latest departure, "HH:MM"
    pub time_to: Option<String>,

    /// Destination or via-stop
    pub destination: Option<String>,

    /// "early" or "late"; anything else means early
    pub sort: Option<String>,

    /// One-off language override
    pub lang: Option<String>,
}

impl ScheduleParams {
    /// The schedule query these parameters describe.
    pub fn query(&self) -> ScheduleQuery {
        let sort = match self.sort.as_deref() {
            Some(s) if s.trim().eq_ignore_ascii_case("late") => SortOrder::Late,
            _ => SortOrder::Early,
        };

        ScheduleQuery::new(
            FilterCriteria {
                time_from: self.time_from.clone(),
                time_to: self.time_to.clone(),
                destination: self.destination.clone(),
            },
            sort,
        )
    }

    /// The requested language override, ignoring unknown codes.
    pub fn language(&self) -> Option<Language> {
        self.lang.as_deref().and_then(|code| Language::parse(code).ok())
    }
}

/// Stand catalog response.
#[derive(Debug, Serialize)]
pub struct StandListResponse {
    pub stands: Vec<Stand>,
}

/// An entry in the language list.
#[derive(Debug, Serialize)]
pub struct LanguageResult {
    pub value: Language,
    pub label: String,
}

impl From<&LanguagePack> for LanguageResult {
    fn from(pack: &LanguagePack) -> Self {
        Self {
            value: pack.value,
            label: pack.label.clone(),
        }
    }
}

/// A stand's schedule after filtering and sorting.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub stand: Stand,

    #[serde(flatten)]
    pub view: ScheduleView,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
