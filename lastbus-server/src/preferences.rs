//! Language preference.
//!
//! The active language is passed into the query pipeline explicitly through
//! [`LanguagePreference`]. In the web layer it comes from the `lang` cookie,
//! optionally overridden per request.

use crate::domain::Language;

/// Name of the cookie that stores the language preference.
pub const LANG_COOKIE: &str = "lang";

/// One year, in seconds.
const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Something that knows which language to render in.
pub trait LanguagePreference {
    fn language(&self) -> Language;
}

impl LanguagePreference for Language {
    fn language(&self) -> Language {
        *self
    }
}

/// Language preference carried by a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CookiePreference {
    stored: Option<Language>,
    requested: Option<Language>,
}

impl CookiePreference {
    /// Read the preference from a raw `Cookie` header value.
    ///
    /// The first `lang` cookie holding a supported code wins; anything else
    /// is ignored.
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        let stored = header.and_then(|h| {
            h.split(';')
                .filter_map(|pair| pair.trim().split_once('='))
                .filter(|(name, _)| *name == LANG_COOKIE)
                .find_map(|(_, value)| Language::parse(value).ok())
        });

        Self {
            stored,
            requested: None,
        }
    }

    /// Prefer an explicitly requested language over the stored one.
    pub fn with_override(mut self, requested: Option<Language>) -> Self {
        self.requested = requested;
        self
    }

    /// The language stored in the cookie, if any.
    pub fn stored(&self) -> Option<Language> {
        self.stored
    }

    /// `Set-Cookie` value that persists `lang` across sessions.
    pub fn set_cookie(lang: Language) -> String {
        format!(
            "{LANG_COOKIE}={}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax",
            lang.code()
        )
    }
}

impl LanguagePreference for CookiePreference {
    fn language(&self) -> Language {
        self.requested.or(self.stored).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_language_preference() {
        assert_eq!(Language::En.language(), Language::En);
    }

    #[test]
    fn absent_cookie_defaults_to_tamil() {
        let pref = CookiePreference::from_cookie_header(None);
        assert_eq!(pref.language(), Language::Ta);
        assert_eq!(pref.stored(), None);
    }

    #[test]
    fn reads_lang_among_other_cookies() {
        let pref = CookiePreference::from_cookie_header(Some("session=abc; lang=en; theme=dark"));
        assert_eq!(pref.language(), Language::En);
    }

    #[test]
    fn unknown_value_defaults_to_tamil() {
        let pref = CookiePreference::from_cookie_header(Some("lang=fr"));
        assert_eq!(pref.language(), Language::Ta);
        assert_eq!(pref.stored(), None);
    }

    #[test]
    fn first_valid_lang_cookie_wins() {
        let pref = CookiePreference::from_cookie_header(Some("lang=xx; lang=en; lang=ta"));
        assert_eq!(pref.language(), Language::En);
    }

    #[test]
    fn similar_cookie_names_are_ignored() {
        let pref = CookiePreference::from_cookie_header(Some("language=en; xlang=en"));
        assert_eq!(pref.stored(), None);
    }

    #[test]
    fn override_takes_precedence() {
        let pref =
            CookiePreference::from_cookie_header(Some("lang=ta")).with_override(Some(Language::En));
        assert_eq!(pref.language(), Language::En);

        let pref = CookiePreference::from_cookie_header(Some("lang=en")).with_override(None);
        assert_eq!(pref.language(), Language::En);
    }

    #[test]
    fn set_cookie_value() {
        assert_eq!(
            CookiePreference::set_cookie(Language::En),
            "lang=en; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }
}
