//! Translation document wire types
//!
//! A [`TranslationDocument`] is the flat JSON record served per language as
//! `assets/data/lang-<code>.json`. Every field is optional: an absent field
//! leaves its page target untouched, and unknown fields are ignored. This
//! is the entire wire contract; there is no versioning and no schema
//! validation.

use serde::{Deserialize, Serialize};

/// One language's page copy.
///
/// Scalar fields map to single fixed targets; `team_members` and
/// `client_projects` map positionally onto repeated page sections.
/// `copyright` is markup, not plain text: it may embed sub-elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationDocument {
    pub title: Option<String>,
    pub meta_description: Option<String>,

    // Header navigation
    pub home_link: Option<String>,
    pub sections_title: Option<String>,
    pub mission_link: Option<String>,
    pub team_link: Option<String>,
    pub contact_link: Option<String>,
    pub language_title: Option<String>,
    pub language_option_english: Option<String>,
    pub language_option_french: Option<String>,

    // Banner
    pub tagline: Option<String>,
    pub banner_button1: Option<String>,
    pub banner_button2: Option<String>,

    // Mission
    pub mission_heading: Option<String>,
    pub mission_text: Option<String>,

    // Team
    pub team_members: Option<Vec<TeamMember>>,

    // Clients
    pub client_heading: Option<String>,
    pub client_projects: Option<Vec<ClientProject>>,

    // Call to action
    pub cta_heading: Option<String>,
    pub cta_text: Option<String>,
    pub cta_email_button: Option<String>,
    pub cta_call_button: Option<String>,

    // Footer
    pub footer_text: Option<String>,
    /// Written as markup into the first copyright list item.
    pub copyright: Option<String>,
}

/// Team section entry, matched to page sections by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Client project entry, matched to page sections by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cta: Option<String>,
}
