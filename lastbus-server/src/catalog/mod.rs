//! Static catalogs loaded at startup.
//!
//! Provides the stand directory (stand code → display name) and the
//! per-language caption packs.

mod error;
mod languages;
mod stands;

pub use error::CatalogError;
pub use languages::{LanguagePack, LanguagePacks};
pub use stands::StandDirectory;
