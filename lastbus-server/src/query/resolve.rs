//! Localized field and caption resolution.

use crate::catalog::LanguagePacks;
use crate::domain::{Language, LocalizedField, ScheduleRecord};

/// Resolve a localized field, or `""` if the record lacks that variant.
pub fn resolve_field(record: &ScheduleRecord, field: LocalizedField, lang: Language) -> &str {
    record.field(field, lang).unwrap_or("")
}

/// Resolve a UI caption, or the key itself if the language pack lacks it.
pub fn resolve_caption<'a>(packs: &'a LanguagePacks, key: &'a str, lang: Language) -> &'a str {
    packs.caption(key, lang)
}

/// The record's via-stops in display order, trimmed, empties dropped.
pub fn via_stops(record: &ScheduleRecord, lang: Language) -> impl Iterator<Item = &str> {
    resolve_field(record, LocalizedField::Via, lang)
        .split(',')
        .map(str::trim)
        .filter(|stop| !stop.is_empty())
}
