//! plume - Static marketing site localizer
//!
//! Swaps the visible copy of a fixed marketing page between languages by
//! fetching per-language JSON translation documents and writing their
//! fields into selector-addressed page locations.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`language`] - Language codes and host locale detection
//! - [`document`] - Translation document wire types
//! - [`fetch`] - Translation retrieval over HTTP
//! - [`dom`] - Page write access (HTML adapter + in-memory fake)
//! - [`storage`] - Persisted language selection
//! - [`localizer`] - The localization pass itself
//! - [`events`] - Page events and the session loop
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use plume::dom::HtmlPage;
//! use plume::events::{PageEvent, Session};
//! use plume::fetch::HttpTranslationSource;
//! use plume::language::SystemLocale;
//! use plume::localizer::ContentLocalizer;
//! use plume::storage::FileSelectionStore;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let localizer = ContentLocalizer::new(
//!     Arc::new(HttpTranslationSource::new("http://localhost:8000/")?),
//!     Arc::new(FileSelectionStore::new("data/selection.json")),
//!     Arc::new(SystemLocale),
//! );
//!
//! let page = HtmlPage::parse("<html>...</html>");
//! let mut session = Session::new(localizer, page);
//! session.dispatch(PageEvent::Load).await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod dom;
pub mod error;
pub mod events;
pub mod fetch;
pub mod language;
pub mod localizer;
pub mod storage;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::document::{ClientProject, TeamMember, TranslationDocument};
    pub use crate::dom::{DomPort, HtmlPage, MemoryPage};
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventOutcome, PageEvent, Session};
    pub use crate::fetch::{HttpTranslationSource, TranslationSource};
    pub use crate::language::LanguageCode;
    pub use crate::localizer::{ContentLocalizer, SELECTED_LANGUAGE_KEY};
    pub use crate::storage::{FileSelectionStore, InMemoryStore, SelectionStore};
}

// Direct re-exports for convenience
pub use document::{ClientProject, TeamMember, TranslationDocument};
pub use language::LanguageCode;
pub use localizer::ContentLocalizer;
