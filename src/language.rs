//! Language codes and host locale detection
//!
//! A [`LanguageCode`] is a normalized primary language subtag (`"en"`,
//! `"fr"`). The site ships English and French translation files, but codes
//! outside that pair are deliberately representable: an unsupported code is
//! not a validation error, it simply resolves to a resource that does not
//! exist and surfaces as a fetch failure.

use std::fmt;

/// Fixed fallback when neither a persisted selection nor a host preference
/// yields a language.
pub const FALLBACK_LANGUAGE: &str = "en";

/// A normalized language code: lowercase primary subtag of a BCP-47 tag.
///
/// # Examples
///
/// ```
/// use plume::language::LanguageCode;
///
/// let code = LanguageCode::parse("fr-CA").unwrap();
/// assert_eq!(code.as_str(), "fr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parse a language tag, reducing it to its lowercase primary subtag.
    ///
    /// Accepts full BCP-47 tags (`en-US`, `fr_FR.UTF-8`) as reported by
    /// browsers and POSIX locales. Returns `None` for empty or
    /// non-alphabetic primary subtags.
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        Some(Self(primary))
    }

    /// The site-wide fallback language (`en`).
    pub fn fallback() -> Self {
        Self(FALLBACK_LANGUAGE.to_string())
    }

    pub fn english() -> Self {
        Self("en".to_string())
    }

    pub fn french() -> Self {
        Self("fr".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Host-side language preference, the analog of the browser's
/// `navigator.language`.
pub trait LocalePreference: Send + Sync {
    /// First preferred language tag reported by the host, if any.
    fn preferred(&self) -> Option<String>;
}

/// Reads the preference from the operating system locale.
#[derive(Debug, Default)]
pub struct SystemLocale;

impl LocalePreference for SystemLocale {
    fn preferred(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Fixed preference for tests and headless runs.
#[derive(Debug, Default)]
pub struct FixedPreference(pub Option<String>);

impl LocalePreference for FixedPreference {
    fn preferred(&self) -> Option<String> {
        self.0.clone()
    }
}
