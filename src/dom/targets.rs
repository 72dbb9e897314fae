//! Fixed page locations for every translation field
//!
//! The host page is a fixed marketing layout; each translation field lands
//! in exactly one place, addressed by id or CSS selector. Selectors are
//! compiled once at startup.
//!
//! Two matching decisions worth noting: every id-addressed element is
//! matched with a `#id` selector, and the CTA buttons are matched by id
//! rather than by value-attribute selector: a `input[value="E-mail us"]`
//! selector stops matching as soon as the first pass rewrites the value.

use lazy_static::lazy_static;
use scraper::Selector;

/// Attribute that marks a language-selector control and carries its code.
pub const LANGUAGE_CONTROL_ATTR: &str = "data-lang";

/// A single write target: a stable name for diagnostics plus its compiled
/// selector.
pub struct Target {
    pub name: &'static str,
    pub css: &'static str,
    pub selector: Selector,
}

// Helper macro to build targets with compile-checked literals
macro_rules! target {
    ($name:literal, $css:literal) => {
        Target {
            name: $name,
            css: $css,
            selector: Selector::parse($css).expect(concat!("Invalid CSS selector: ", $css)),
        }
    };
}

lazy_static! {
    // Head
    pub static ref TITLE: Target = target!("title", "#title");
    pub static ref META_DESCRIPTION: Target = target!("metaDescription", "#meta-description");

    // Header navigation
    pub static ref HOME_LINK: Target = target!("homeLink", "#home-link");
    pub static ref SECTIONS_TITLE: Target = target!("sectionsTitle", "#sections-title");
    pub static ref MISSION_LINK: Target = target!("missionLink", "#mission-link");
    pub static ref TEAM_LINK: Target = target!("teamLink", "#team-link");
    pub static ref CONTACT_LINK: Target = target!("contactLink", "#contact-link");
    pub static ref LANGUAGE_TITLE: Target = target!("languageTitle", "#language-title");
    pub static ref LANGUAGE_OPTION_EN: Target = target!("languageOptionEnglish", "#lang-en");
    pub static ref LANGUAGE_OPTION_FR: Target = target!("languageOptionFrench", "#lang-fr");

    // Banner
    pub static ref TAGLINE: Target = target!("tagline", "#banner p");
    pub static ref BANNER_BUTTON_PRIMARY: Target = target!("bannerButton1", "#banner .button.primary");
    pub static ref BANNER_BUTTON_SECONDARY: Target =
        target!("bannerButton2", "#banner .button:not(.primary)");

    // Mission
    pub static ref MISSION_HEADING: Target = target!("missionHeading", "#mission h2");
    pub static ref MISSION_TEXT: Target = target!("missionText", "#mission p");

    // Team sections, matched by index
    pub static ref TEAM_SECTIONS: Target = target!("teamMembers", "#team .features-row section");
    pub static ref TEAM_NAME: Target = target!("team member name", "h3");
    pub static ref TEAM_ROLE: Target = target!("team member role", "h5");
    pub static ref TEAM_LOCATION: Target = target!("team member location", "h6");
    pub static ref TEAM_DESCRIPTION: Target = target!("team member description", "p");

    // Client sections, matched by index
    pub static ref CLIENT_HEADING: Target = target!("clientHeading", "#clients h2");
    pub static ref CLIENT_SECTIONS: Target =
        target!("clientProjects", "#clients .features-row section");
    pub static ref CLIENT_TITLE: Target = target!("client project title", "h3");
    pub static ref CLIENT_DESCRIPTION: Target = target!("client project description", "p");
    pub static ref CLIENT_CTA: Target = target!("client project cta", ".cta");

    // Call to action
    pub static ref CTA_HEADING: Target = target!("ctaHeading", "#cta h2");
    pub static ref CTA_TEXT: Target = target!("ctaText", "#cta p");
    pub static ref CTA_EMAIL_BUTTON: Target = target!("ctaEmailButton", "#cta-email-button");
    pub static ref CTA_CALL_BUTTON: Target = target!("ctaCallButton", "#cta-call-button");

    // Footer
    pub static ref FOOTER_TEXT: Target = target!("footerText", "#footer p");
    pub static ref COPYRIGHT: Target = target!("copyright", "#footer .copyright li:first-child");

    /// Any element carrying an id, used to resolve click targets.
    pub static ref ELEMENTS_WITH_ID: Selector =
        Selector::parse("[id]").expect("Invalid CSS selector: [id]");
}

/// The navigation links whose text is only applied after the sections
/// heading has been clicked.
pub fn deferred_nav_links() -> [&'static Target; 3] {
    [&MISSION_LINK, &TEAM_LINK, &CONTACT_LINK]
}
