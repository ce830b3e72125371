//! Destination set extraction.

use std::collections::BTreeSet;

use crate::domain::{Language, LocalizedField, ScheduleRecord};

use super::resolve::{resolve_field, via_stops};

/// Every place a bus from this list can take you, in the given language.
///
/// Collects each record's destination and via-stops, deduplicated by exact
/// string equality and sorted by codepoint. Case is not folded, so
/// "Central" and "central" are listed separately.
pub fn extract_destinations(records: &[ScheduleRecord], lang: Language) -> Vec<String> {
    let mut destinations = BTreeSet::new();

    for record in records {
        let destination = resolve_field(record, LocalizedField::Destination, lang);
        if !destination.is_empty() {
            destinations.insert(destination);
        }
        destinations.extend(via_stops(record, lang));
    }

    destinations.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimePart;

    fn record(destination: &str, via: &str) -> ScheduleRecord {
        ScheduleRecord::new(6.0, TimePart::Am)
            .with_field(LocalizedField::Destination, Language::En, destination)
            .with_field(LocalizedField::Via, Language::En, via)
    }

    #[test]
    fn empty_list() {
        assert!(extract_destinations(&[], Language::En).is_empty());
    }

    #[test]
    fn merges_destinations_and_via_stops() {
        let records = vec![
            record("Trichy", "Vallam, Sengipatti"),
            record("Kumbakonam", "Papanasam"),
            record("Trichy", "Sengipatti , Budalur"),
        ];

        let destinations = extract_destinations(&records, Language::En);
        assert_eq!(
            destinations,
            vec!["Budalur", "Kumbakonam", "Papanasam", "Sengipatti", "Trichy", "Vallam"]
        );
    }

    #[test]
    fn skips_empty_values() {
        let records = vec![record("", ""), record("Madurai", " , ")];
        assert_eq!(extract_destinations(&records, Language::En), vec!["Madurai"]);
    }

    #[test]
    fn case_variants_are_distinct() {
        let records = vec![record("Central", "central")];
        assert_eq!(
            extract_destinations(&records, Language::En),
            vec!["Central", "central"]
        );
    }

    #[test]
    fn uses_requested_language_only() {
        let records = vec![
            record("Trichy", "")
                .with_field(LocalizedField::Destination, Language::Ta, "திருச்சி"),
        ];
        assert_eq!(extract_destinations(&records, Language::Ta), vec!["திருச்சி"]);
        assert_eq!(extract_destinations(&records, Language::En), vec!["Trichy"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::TimePart;
    use proptest::prelude::*;

    fn arb_record() -> impl Strategy<Value = ScheduleRecord> {
        (
            "[A-Ca-c ]{0,4}",
            proptest::collection::vec("[A-Ca-c ]{0,4}", 0..4),
        )
            .prop_map(|(destination, via)| {
                ScheduleRecord::new(8.0, TimePart::Pm)
                    .with_field(LocalizedField::Destination, Language::En, destination)
                    .with_field(LocalizedField::Via, Language::En, via.join(","))
            })
    }

    proptest! {
        /// Output has no duplicates and is non-decreasing
        #[test]
        fn sorted_and_unique(records in proptest::collection::vec(arb_record(), 0..12)) {
            let destinations = extract_destinations(&records, Language::En);
            for pair in destinations.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        /// Every via-stop of every record is offered
        #[test]
        fn covers_every_stop(records in proptest::collection::vec(arb_record(), 0..12)) {
            let destinations = extract_destinations(&records, Language::En);
            for record in &records {
                for stop in via_stops(record, Language::En) {
                    prop_assert!(destinations.iter().any(|d| d == stop));
                }
            }
        }
    }
}
