//! Schedule records as stored in the per-stand datasets.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Language;

/// Half of the day a 12-hour departure time falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimePart {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl TimePart {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePart::Am => "AM",
            TimePart::Pm => "PM",
        }
    }
}

impl fmt::Display for TimePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record field that exists once per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalizedField {
    Bus,
    Origin,
    Destination,
    Via,
}

impl LocalizedField {
    pub const ALL: [LocalizedField; 4] = [
        LocalizedField::Bus,
        LocalizedField::Origin,
        LocalizedField::Destination,
        LocalizedField::Via,
    ];
}

/// One scheduled departure from a stand.
///
/// Localized fields are stored flat, the way the datasets spell them
/// (`origin_ta`, `origin_en`, ...). Any of them may be missing.
///
/// `time` is a decimal clock reading: the integer part is the hour and the
/// fractional part times 100 is the minute, so `7.30` means 7:30. Most
/// datasets use a 12-hour clock with `time_part` disambiguating; some PM
/// entries are stored as 13.xx to 23.xx instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_ta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_ta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_ta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_ta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_en: Option<String>,
    pub time: f64,
    pub time_part: TimePart,
}

impl ScheduleRecord {
    /// Create a record with a departure time and no localized fields.
    pub fn new(time: f64, time_part: TimePart) -> Self {
        Self {
            bus_ta: None,
            bus_en: None,
            origin_ta: None,
            origin_en: None,
            destination_ta: None,
            destination_en: None,
            via_ta: None,
            via_en: None,
            time,
            time_part,
        }
    }

    /// Set one localized field.
    pub fn with_field(
        mut self,
        field: LocalizedField,
        lang: Language,
        value: impl Into<String>,
    ) -> Self {
        *self.slot_mut(field, lang) = Some(value.into());
        self
    }

    /// Look up a localized field.
    pub fn field(&self, field: LocalizedField, lang: Language) -> Option<&str> {
        let slot = match (field, lang) {
            (LocalizedField::Bus, Language::Ta) => &self.bus_ta,
            (LocalizedField::Bus, Language::En) => &self.bus_en,
            (LocalizedField::Origin, Language::Ta) => &self.origin_ta,
            (LocalizedField::Origin, Language::En) => &self.origin_en,
            (LocalizedField::Destination, Language::Ta) => &self.destination_ta,
            (LocalizedField::Destination, Language::En) => &self.destination_en,
            (LocalizedField::Via, Language::Ta) => &self.via_ta,
            (LocalizedField::Via, Language::En) => &self.via_en,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, field: LocalizedField, lang: Language) -> &mut Option<String> {
        match (field, lang) {
            (LocalizedField::Bus, Language::Ta) => &mut self.bus_ta,
            (LocalizedField::Bus, Language::En) => &mut self.bus_en,
            (LocalizedField::Origin, Language::Ta) => &mut self.origin_ta,
            (LocalizedField::Origin, Language::En) => &mut self.origin_en,
            (LocalizedField::Destination, Language::Ta) => &mut self.destination_ta,
            (LocalizedField::Destination, Language::En) => &mut self.destination_en,
            (LocalizedField::Via, Language::Ta) => &mut self.via_ta,
            (LocalizedField::Via, Language::En) => &mut self.via_en,
        }
    }
}
