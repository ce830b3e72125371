//! Per-language caption packs.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::Language;

use super::error::CatalogError;

/// Captions and display name for one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagePack {
    pub value: Language,
    /// Name of the language, in that language.
    pub label: String,
    #[serde(default)]
    pub captions: HashMap<String, String>,
}

/// All caption packs, in the order they are offered to the user.
#[derive(Debug, Clone, Default)]
pub struct LanguagePacks {
    packs: Vec<LanguagePack>,
}

impl LanguagePacks {
    pub fn new(packs: Vec<LanguagePack>) -> Self {
        Self { packs }
    }

    /// Parse packs from `[{"value", "label", "captions": {...}}]`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let packs: Vec<LanguagePack> =
            serde_json::from_str(json).map_err(|e| CatalogError::Json {
                message: e.to_string(),
            })?;
        Ok(Self::new(packs))
    }

    /// Read packs from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn packs(&self) -> &[LanguagePack] {
        &self.packs
    }

    pub fn get(&self, lang: Language) -> Option<&LanguagePack> {
        self.packs.iter().find(|p| p.value == lang)
    }

    /// Display name of a language; the code itself if there is no pack.
    pub fn label(&self, lang: Language) -> &str {
        self.get(lang).map_or(lang.code(), |p| p.label.as_str())
    }

    /// Look up a caption, falling back to the key itself.
    pub fn caption<'a>(&'a self, key: &'a str, lang: Language) -> &'a str {
        self.get(lang)
            .and_then(|p| p.captions.get(key))
            .map_or(key, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKS: &str = r#"[
        {"value": "ta", "label": "தமிழ்", "captions": {"Via": "வழி"}},
        {"value": "en", "label": "English", "captions": {"Via": "Via", "Bus": "Bus"}}
    ]"#;

    #[test]
    fn caption_lookup() {
        let packs = LanguagePacks::from_json(PACKS).unwrap();
        assert_eq!(packs.caption("Via", Language::Ta), "வழி");
        assert_eq!(packs.caption("Bus", Language::En), "Bus");
    }

    #[test]
    fn caption_falls_back_to_key() {
        let packs = LanguagePacks::from_json(PACKS).unwrap();
        assert_eq!(packs.caption("Bus", Language::Ta), "Bus");
        assert_eq!(packs.caption("Destination", Language::En), "Destination");
    }

    #[test]
    fn missing_pack_falls_back() {
        let packs = LanguagePacks::default();
        assert_eq!(packs.caption("Via", Language::Ta), "Via");
        assert_eq!(packs.label(Language::En), "en");
    }

    #[test]
    fn labels_and_order() {
        let packs = LanguagePacks::from_json(PACKS).unwrap();
        assert_eq!(packs.label(Language::Ta), "தமிழ்");
        assert_eq!(packs.packs()[1].value, Language::En);
    }

    #[test]
    fn captions_are_optional() {
        let packs = LanguagePacks::from_json(r#"[{"value": "en", "label": "English"}]"#).unwrap();
        assert_eq!(packs.caption("Via", Language::En), "Via");
    }

    #[test]
    fn unknown_language_rejected() {
        let result = LanguagePacks::from_json(r#"[{"value": "fr", "label": "Français"}]"#);
        assert!(matches!(result, Err(CatalogError::Json { .. })));
    }
}
