//! Askama templates for the web frontend.

use askama::Template;

use crate::catalog::LanguagePacks;
use crate::domain::{Language, Stand};
use crate::query::{Departure, ScheduleView, SortOrder};

use super::dto::ScheduleParams;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Stand picker.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub lang: Language,
    pub languages: Vec<LanguageOption>,
    pub stands: Vec<Stand>,
}

impl IndexTemplate {
    pub fn new(stands: &[Stand], packs: &LanguagePacks, lang: Language) -> Self {
        Self {
            lang,
            languages: language_options(packs, lang),
            stands: stands.to_vec(),
        }
    }
}

/// A stand's departures with the filter form.
#[derive(Template)]
#[template(path = "schedule.html")]
pub struct ScheduleTemplate {
    pub lang: Language,
    pub languages: Vec<LanguageOption>,
    pub stand: Stand,
    pub departures: Vec<Departure>,
    pub destinations: Vec<DestinationOption>,
    pub via_caption: String,
    pub total: usize,
    pub filtered: bool,
    /// Filter form values, echoed back
    pub time_from: String,
    pub time_to: String,
    pub late: bool,
}

impl ScheduleTemplate {
    pub fn new(
        stand: Stand,
        view: ScheduleView,
        params: &ScheduleParams,
        packs: &LanguagePacks,
    ) -> Self {
        let query = params.query();
        let selected = query.criteria.destination.as_deref().unwrap_or("");

        let destinations = view
            .destinations
            .into_iter()
            .map(|name| DestinationOption {
                selected: name == selected,
                name,
            })
            .collect();

        Self {
            lang: view.language,
            languages: language_options(packs, view.language),
            stand,
            departures: view.departures,
            destinations,
            via_caption: view.via_caption,
            total: view.total,
            filtered: view.filtered,
            time_from: query.criteria.time_from.unwrap_or_default(),
            time_to: query.criteria.time_to.unwrap_or_default(),
            late: query.sort == SortOrder::Late,
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub lang: Language,
    pub title: String,
    pub message: String,
    /// Link that repeats the failed request; empty for none
    pub retry_url: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A language in the language switcher.
#[derive(Debug, Clone)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: String,
    pub active: bool,
}

/// A choice in the destination filter.
#[derive(Debug, Clone)]
pub struct DestinationOption {
    pub name: String,
    pub selected: bool,
}

fn language_options(packs: &LanguagePacks, active: Language) -> Vec<LanguageOption> {
    Language::ALL
        .iter()
        .map(|&lang| LanguageOption {
            code: lang.code(),
            label: packs.label(lang).to_string(),
            active: lang == active,
        })
        .collect()
}
