//! The localization pass and its surrounding decisions
//!
//! [`ContentLocalizer`] owns the three ports and implements the page
//! lifecycle: resolve the initial language, apply a translation document
//! to the page, switch languages on demand, and fill in the deferred
//! navigation links once the sections heading is opened.
//!
//! A pass is write-only: a field present in the document is written into
//! its fixed target exactly once; an absent field leaves its target
//! untouched. Running the same pass twice leaves the page in the same
//! state. Failures never propagate past this module: a failed fetch
//! abandons the pass with the page unchanged, and a missing target is a
//! per-field warning, not an abort.

use std::sync::Arc;

use crate::document::{ClientProject, TeamMember, TranslationDocument};
use crate::dom::{targets, DomPort, Target};
use crate::fetch::TranslationSource;
use crate::language::{LanguageCode, LocalePreference};
use crate::storage::SelectionStore;

/// Storage key holding the active language code.
pub const SELECTED_LANGUAGE_KEY: &str = "selectedLanguage";

/// Outcome of one application pass.
#[derive(Debug, Default)]
pub struct ApplyStats {
    /// Fields written into the page
    pub written: usize,

    /// Target names that were missing from the page
    pub missing: Vec<String>,
}

/// Applies translation documents to a page and manages the active
/// language.
pub struct ContentLocalizer {
    source: Arc<dyn TranslationSource>,
    store: Arc<dyn SelectionStore>,
    preference: Arc<dyn LocalePreference>,
    fallback: LanguageCode,
}

impl ContentLocalizer {
    pub fn new(
        source: Arc<dyn TranslationSource>,
        store: Arc<dyn SelectionStore>,
        preference: Arc<dyn LocalePreference>,
    ) -> Self {
        Self {
            source,
            store,
            preference,
            fallback: LanguageCode::fallback(),
        }
    }

    /// Override the fallback language (default `en`).
    #[must_use]
    pub fn with_fallback(mut self, fallback: LanguageCode) -> Self {
        self.fallback = fallback;
        self
    }

    /// Determine the language for the initial pass. First match wins:
    /// persisted selection, host preference, fixed fallback. The result is
    /// not validated against the shipped languages; an unsupported code
    /// surfaces later as a failed fetch.
    pub fn resolve_initial(&self) -> LanguageCode {
        match self.store.get(SELECTED_LANGUAGE_KEY) {
            Ok(Some(saved)) => match LanguageCode::parse(&saved) {
                Some(code) => return code,
                None => {
                    tracing::warn!(value = %saved, "ignoring unparseable persisted selection")
                }
            },
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "selection store unavailable"),
        }

        if let Some(tag) = self.preference.preferred() {
            if let Some(code) = LanguageCode::parse(&tag) {
                tracing::debug!(tag = %tag, language = %code, "using host language preference");
                return code;
            }
        }

        self.fallback.clone()
    }

    /// Fetch the document for `code` and apply it. On any fetch failure
    /// the pass is abandoned, the page stays as it was, and the failure
    /// goes to the diagnostic stream only.
    pub async fn apply_language(&self, dom: &mut dyn DomPort, code: &LanguageCode) {
        match self.localize_once(dom, code).await {
            Ok(stats) => tracing::info!(
                language = %code,
                written = stats.written,
                missing = stats.missing.len(),
                "localization pass complete"
            ),
            Err(e) => tracing::error!(
                language = %code,
                error = %e,
                "localization pass abandoned, page left unchanged"
            ),
        }
    }

    /// Like [`apply_language`](Self::apply_language) but propagates the
    /// fetch error and reports what was written; the CLI uses this to exit
    /// non-zero on failure.
    pub async fn localize_once(
        &self,
        dom: &mut dyn DomPort,
        code: &LanguageCode,
    ) -> crate::error::Result<ApplyStats> {
        let document = self.source.fetch(code).await?;
        Ok(apply_document(dom, &document))
    }

    /// Handle a click on a language-selector control: persist the
    /// selection (unconditionally, before the fetch resolves), then apply.
    /// Re-selecting the active language repeats the pass; that repeat is
    /// harmless by idempotence.
    pub async fn switch_language(&self, dom: &mut dyn DomPort, code: &LanguageCode) {
        if let Err(e) = self.store.set(SELECTED_LANGUAGE_KEY, code.as_str()) {
            tracing::warn!(language = %code, error = %e, "failed to persist selection");
        }
        self.apply_language(dom, code).await;
    }

    /// Handle the sections-heading click: the deferred navigation links
    /// get their text now. The active language is re-resolved from
    /// storage rather than from any in-memory state.
    pub async fn reveal_section_links(&self, dom: &mut dyn DomPort) {
        let code = self.resolve_initial();
        match self.source.fetch(&code).await {
            Ok(document) => {
                let stats = apply_deferred(dom, &document);
                tracing::info!(
                    language = %code,
                    written = stats.written,
                    "deferred navigation links applied"
                );
            }
            Err(e) => tracing::error!(
                language = %code,
                error = %e,
                "deferred link pass abandoned"
            ),
        }
    }
}

/// Write every non-deferred field present in `document` into its target.
///
/// Matches the page-load pass: the deferred navigation links
/// (mission/team/contact) are excluded and only land via
/// [`apply_deferred`].
pub fn apply_document(dom: &mut dyn DomPort, document: &TranslationDocument) -> ApplyStats {
    let mut stats = ApplyStats::default();

    // Head
    write_text(dom, &mut stats, &targets::TITLE, &document.title);
    write_attr(
        dom,
        &mut stats,
        &targets::META_DESCRIPTION,
        "content",
        &document.meta_description,
    );

    // Header navigation (minus the deferred links)
    write_text(dom, &mut stats, &targets::HOME_LINK, &document.home_link);
    write_text(dom, &mut stats, &targets::SECTIONS_TITLE, &document.sections_title);
    write_text(dom, &mut stats, &targets::LANGUAGE_TITLE, &document.language_title);
    write_text(
        dom,
        &mut stats,
        &targets::LANGUAGE_OPTION_EN,
        &document.language_option_english,
    );
    write_text(
        dom,
        &mut stats,
        &targets::LANGUAGE_OPTION_FR,
        &document.language_option_french,
    );

    // Banner
    write_text(dom, &mut stats, &targets::TAGLINE, &document.tagline);
    write_text(
        dom,
        &mut stats,
        &targets::BANNER_BUTTON_PRIMARY,
        &document.banner_button1,
    );
    write_text(
        dom,
        &mut stats,
        &targets::BANNER_BUTTON_SECONDARY,
        &document.banner_button2,
    );

    // Mission
    write_text(dom, &mut stats, &targets::MISSION_HEADING, &document.mission_heading);
    write_text(dom, &mut stats, &targets::MISSION_TEXT, &document.mission_text);

    // Team
    if let Some(members) = &document.team_members {
        write_team(dom, &mut stats, members);
    }

    // Clients
    write_text(dom, &mut stats, &targets::CLIENT_HEADING, &document.client_heading);
    if let Some(projects) = &document.client_projects {
        write_clients(dom, &mut stats, projects);
    }

    // Call to action; the buttons are inputs, so their label is the value
    // attribute
    write_text(dom, &mut stats, &targets::CTA_HEADING, &document.cta_heading);
    write_text(dom, &mut stats, &targets::CTA_TEXT, &document.cta_text);
    write_attr(
        dom,
        &mut stats,
        &targets::CTA_EMAIL_BUTTON,
        "value",
        &document.cta_email_button,
    );
    write_attr(
        dom,
        &mut stats,
        &targets::CTA_CALL_BUTTON,
        "value",
        &document.cta_call_button,
    );

    // Footer
    write_text(dom, &mut stats, &targets::FOOTER_TEXT, &document.footer_text);
    write_markup(dom, &mut stats, &targets::COPYRIGHT, &document.copyright);

    stats
}

/// Write only the deferred navigation-link fields.
pub fn apply_deferred(dom: &mut dyn DomPort, document: &TranslationDocument) -> ApplyStats {
    let mut stats = ApplyStats::default();
    let values = [
        &document.mission_link,
        &document.team_link,
        &document.contact_link,
    ];
    for (target, value) in targets::deferred_nav_links().into_iter().zip(values) {
        write_text(dom, &mut stats, target, value);
    }
    stats
}

fn write_text(dom: &mut dyn DomPort, stats: &mut ApplyStats, target: &Target, value: &Option<String>) {
    if let Some(text) = value {
        record(stats, target, dom.set_text(target, text));
    }
}

fn write_markup(
    dom: &mut dyn DomPort,
    stats: &mut ApplyStats,
    target: &Target,
    value: &Option<String>,
) {
    if let Some(markup) = value {
        record(stats, target, dom.set_markup(target, markup));
    }
}

fn write_attr(
    dom: &mut dyn DomPort,
    stats: &mut ApplyStats,
    target: &Target,
    attr: &str,
    value: &Option<String>,
) {
    if let Some(text) = value {
        record(stats, target, dom.set_attr(target, attr, text));
    }
}

fn record(stats: &mut ApplyStats, target: &Target, result: Result<(), crate::dom::DomError>) {
    match result {
        Ok(()) => stats.written += 1,
        Err(e) => {
            tracing::warn!(field = target.name, error = %e, "target missing, field skipped");
            stats.missing.push(target.name.to_string());
        }
    }
}

fn write_team(dom: &mut dyn DomPort, stats: &mut ApplyStats, members: &[TeamMember]) {
    let available = dom.section_count(&targets::TEAM_SECTIONS);
    if members.len() > available {
        tracing::debug!(
            provided = members.len(),
            available,
            "extra team entries ignored"
        );
    }

    for (index, member) in members.iter().take(available).enumerate() {
        write_section_field(dom, stats, index, &targets::TEAM_NAME, &member.name);
        write_section_field(dom, stats, index, &targets::TEAM_ROLE, &member.role);
        write_section_field(dom, stats, index, &targets::TEAM_LOCATION, &member.location);
        write_section_field(dom, stats, index, &targets::TEAM_DESCRIPTION, &member.description);
    }
}

fn write_clients(dom: &mut dyn DomPort, stats: &mut ApplyStats, projects: &[ClientProject]) {
    let available = dom.section_count(&targets::CLIENT_SECTIONS);
    if projects.len() > available {
        tracing::debug!(
            provided = projects.len(),
            available,
            "extra client entries ignored"
        );
    }

    for (index, project) in projects.iter().take(available).enumerate() {
        write_client_field(dom, stats, index, &targets::CLIENT_TITLE, &project.title);
        write_client_field(dom, stats, index, &targets::CLIENT_DESCRIPTION, &project.description);
        write_client_field(dom, stats, index, &targets::CLIENT_CTA, &project.cta);
    }
}

fn write_section_field(
    dom: &mut dyn DomPort,
    stats: &mut ApplyStats,
    index: usize,
    field: &Target,
    value: &Option<String>,
) {
    if let Some(text) = value {
        record(
            stats,
            field,
            dom.set_section_text(&targets::TEAM_SECTIONS, index, field, text),
        );
    }
}

fn write_client_field(
    dom: &mut dyn DomPort,
    stats: &mut ApplyStats,
    index: usize,
    field: &Target,
    value: &Option<String>,
) {
    if let Some(text) = value {
        record(
            stats,
            field,
            dom.set_section_text(&targets::CLIENT_SECTIONS, index, field, text),
        );
    }
}
