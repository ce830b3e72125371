//! The full query: filter, sort, and format a stand's schedules.

use serde::{Deserialize, Serialize};

use crate::catalog::LanguagePacks;
use crate::domain::{Language, LocalizedField, ScheduleRecord, TimePart, format_time};
use crate::preferences::LanguagePreference;

use super::destinations::extract_destinations;
use super::filter::{FilterCriteria, apply_filters};
use super::resolve::{resolve_caption, resolve_field, via_stops};
use super::sort::{SortOrder, sort_by_departure};

/// Caption key for the via-stops label.
pub const VIA_CAPTION: &str = "Via";

/// One departure, resolved and formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Departure {
    /// "HH:MM" on the 12-hour dial
    pub time: String,
    pub time_part: TimePart,
    pub bus: String,
    pub origin: String,
    pub destination: String,
    /// Via-stops as stored, for display
    pub via: String,
    /// Via-stops split and trimmed
    pub via_stops: Vec<String>,
}

impl Departure {
    pub fn from_record(record: &ScheduleRecord, lang: Language) -> Self {
        Self {
            time: format_time(record.time, record.time_part),
            time_part: record.time_part,
            bus: resolve_field(record, LocalizedField::Bus, lang).to_string(),
            origin: resolve_field(record, LocalizedField::Origin, lang).to_string(),
            destination: resolve_field(record, LocalizedField::Destination, lang).to_string(),
            via: resolve_field(record, LocalizedField::Via, lang).to_string(),
            via_stops: via_stops(record, lang).map(str::to_string).collect(),
        }
    }
}

/// Result of running a [`ScheduleQuery`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleView {
    pub language: Language,
    /// Number of departures before filtering
    pub total: usize,
    /// Whether any filter was active
    pub filtered: bool,
    pub departures: Vec<Departure>,
    /// Destinations offered by the destination filter
    pub destinations: Vec<String>,
    /// Localized "Via" label
    pub via_caption: String,
}

impl ScheduleView {
    /// Whether the query left nothing to show.
    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }
}

/// What the user asked to see.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleQuery {
    #[serde(flatten)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub sort: SortOrder,
}

impl ScheduleQuery {
    pub fn new(criteria: FilterCriteria, sort: SortOrder) -> Self {
        Self { criteria, sort }
    }

    /// Run the query against a stand's schedules.
    pub fn run(
        &self,
        records: &[ScheduleRecord],
        packs: &LanguagePacks,
        preference: &impl LanguagePreference,
    ) -> ScheduleView {
        let lang = preference.language();

        let matching = apply_filters(records, &self.criteria, lang);
        let departures = sort_by_departure(&matching, self.sort)
            .into_iter()
            .map(|record| Departure::from_record(record, lang))
            .collect();

        ScheduleView {
            language: lang,
            total: records.len(),
            filtered: self.criteria.is_active(),
            departures,
            destinations: extract_destinations(records, lang),
            via_caption: resolve_caption(packs, VIA_CAPTION, lang).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LanguagePack;
    use std::collections::HashMap;

    fn packs() -> LanguagePacks {
        LanguagePacks::new(vec![LanguagePack {
            value: Language::Ta,
            label: "தமிழ்".to_string(),
            captions: HashMap::from([("Via".to_string(), "வழி".to_string())]),
        }])
    }

    fn record(
        time: f64,
        part: TimePart,
        dest_en: &str,
        dest_ta: &str,
        via_en: &str,
    ) -> ScheduleRecord {
        ScheduleRecord::new(time, part)
            .with_field(LocalizedField::Bus, Language::En, "12")
            .with_field(LocalizedField::Origin, Language::En, "Thanjavur")
            .with_field(LocalizedField::Destination, Language::En, dest_en)
            .with_field(LocalizedField::Destination, Language::Ta, dest_ta)
            .with_field(LocalizedField::Via, Language::En, via_en)
    }

    fn records() -> Vec<ScheduleRecord> {
        vec![
            record(5.3, TimePart::Am, "Trichy", "திருச்சி", "Vallam, Sengipatti"),
            record(9.45, TimePart::Am, "Kumbakonam", "கும்பகோணம்", "Papanasam"),
            record(13.15, TimePart::Pm, "Trichy", "திருச்சி", ""),
        ]
    }

    #[test]
    fn default_query_shows_everything_in_order() {
        let view = ScheduleQuery::default().run(&records(), &packs(), &Language::En);

        assert_eq!(view.total, 3);
        assert!(!view.filtered);
        let times: Vec<&str> = view.departures.iter().map(|d| d.time.as_str()).collect();
        assert_eq!(times, vec!["05:30", "09:45", "01:15"]);
        assert_eq!(view.departures[0].via_stops, vec!["Vallam", "Sengipatti"]);
        assert_eq!(view.departures[0].bus, "12");
        assert_eq!(view.departures[0].origin, "Thanjavur");
    }

    #[test]
    fn late_sort_reverses_filtered_list() {
        let query = ScheduleQuery::new(
            FilterCriteria {
                destination: Some("trichy".to_string()),
                ..FilterCriteria::default()
            },
            SortOrder::Late,
        );
        let view = query.run(&records(), &packs(), &Language::En);

        assert!(view.filtered);
        assert_eq!(view.total, 3);
        let times: Vec<&str> = view.departures.iter().map(|d| d.time.as_str()).collect();
        assert_eq!(times, vec!["01:15", "05:30"]);
    }

    #[test]
    fn destinations_come_from_full_list() {
        let query = ScheduleQuery::new(
            FilterCriteria {
                destination: Some("Kumbakonam".to_string()),
                ..FilterCriteria::default()
            },
            SortOrder::Early,
        );
        let view = query.run(&records(), &packs(), &Language::En);

        assert_eq!(view.departures.len(), 1);
        assert_eq!(
            view.destinations,
            vec!["Kumbakonam", "Papanasam", "Sengipatti", "Trichy", "Vallam"]
        );
    }

    #[test]
    fn language_comes_from_preference() {
        let view = ScheduleQuery::default().run(&records(), &packs(), &Language::Ta);

        assert_eq!(view.language, Language::Ta);
        assert_eq!(view.via_caption, "வழி");
        assert_eq!(view.departures[1].destination, "கும்பகோணம்");
        // No Tamil bus number or via in these records
        assert_eq!(view.departures[1].bus, "");
        assert_eq!(view.departures[1].via, "");
        assert_eq!(view.destinations, vec!["கும்பகோணம்", "திருச்சி"]);
    }

    #[test]
    fn caption_falls_back_to_key() {
        let view = ScheduleQuery::default().run(&records(), &packs(), &Language::En);
        assert_eq!(view.via_caption, "Via");
    }

    #[test]
    fn empty_result() {
        let query = ScheduleQuery::new(
            FilterCriteria {
                destination: Some("Chennai".to_string()),
                ..FilterCriteria::default()
            },
            SortOrder::Early,
        );
        let view = query.run(&records(), &packs(), &Language::En);
        assert!(view.is_empty());
        assert_eq!(view.total, 3);
    }

    #[test]
    fn query_deserializes_flat() {
        let query: ScheduleQuery =
            serde_json::from_str(r#"{"time_to": "10:00", "sort": "late"}"#).unwrap();
        assert_eq!(query.criteria.time_to.as_deref(), Some("10:00"));
        assert_eq!(query.sort, SortOrder::Late);
    }
}
