//! Common test utilities

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use plume::fetch::HttpTranslationSource;
use plume::language::FixedPreference;
use plume::localizer::ContentLocalizer;
use plume::storage::{InMemoryStore, SelectionStore};

/// The fixed marketing page every target is addressed against.
pub const FIXTURE_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <title id="title">Untranslated Title</title>
  <meta id="meta-description" name="description" content="Untranslated description">
</head>
<body>
  <header>
    <nav>
      <a href="/" id="home-link">Home</a>
      <h2 id="sections-title">Sections <span id="sections-caret">v</span></h2>
      <ul>
        <li><a href="#mission" id="mission-link">Mission</a></li>
        <li><a href="#team" id="team-link">Team</a></li>
        <li><a href="#cta" id="contact-link">Contact</a></li>
      </ul>
      <h2 id="language-title">Language</h2>
      <ul>
        <li><a href="#" id="lang-en" data-lang="en">English</a></li>
        <li><a href="#" id="lang-fr" data-lang="fr"><span id="lang-fr-flag">FR</span> French</a></li>
      </ul>
    </nav>
  </header>
  <section id="banner">
    <p>Untranslated tagline</p>
    <a href="#mission" class="button primary">Learn more</a>
    <a href="#cta" class="button">Contact</a>
  </section>
  <section id="mission">
    <h2>Our mission</h2>
    <p>Untranslated mission text</p>
  </section>
  <section id="team">
    <h2>The team</h2>
    <div class="features-row">
      <section><h3>Ann Smith</h3><h5>Developer</h5><h6>Lyon</h6><p>Writes code.</p></section>
      <section><h3>Ben Jones</h3><h5>Designer</h5><h6>Nice</h6><p>Draws things.</p></section>
    </div>
  </section>
  <section id="clients">
    <h2>Client work</h2>
    <div class="features-row">
      <section><h3>Atlas</h3><p>Maps for everyone.</p><a class="cta" href="#">Read more</a></section>
    </div>
  </section>
  <section id="cta">
    <h2>Get in touch</h2>
    <p>Untranslated call to action</p>
    <input type="button" id="cta-email-button" value="E-mail us">
    <input type="button" id="cta-call-button" value="Call us">
  </section>
  <footer id="footer">
    <p>Untranslated footer</p>
    <ul class="copyright"><li>&copy; Untranslated</li><li>Design: Plume</li></ul>
  </footer>
</body>
</html>
"##;

/// Complete English document covering every target on the fixture page.
pub fn english_document() -> Value {
    json!({
        "title": "Acme — Home",
        "metaDescription": "Acme makes things",
        "homeLink": "Home",
        "sectionsTitle": "Sections",
        "missionLink": "Our mission",
        "teamLink": "Our team",
        "contactLink": "Contact us",
        "languageTitle": "Language",
        "languageOptionEnglish": "English",
        "languageOptionFrench": "French",
        "tagline": "We make things",
        "bannerButton1": "Learn more",
        "bannerButton2": "Get in touch",
        "missionHeading": "Our mission",
        "missionText": "Make the best things.",
        "teamMembers": [
            {"name": "Ann Smith", "role": "Lead Developer", "location": "Lyon", "description": "Builds the product."},
            {"name": "Ben Jones", "role": "Head of Design", "location": "Nice", "description": "Shapes the product."}
        ],
        "clientHeading": "Client work",
        "clientProjects": [
            {"title": "Atlas", "description": "Maps for everyone.", "cta": "Read the case study"}
        ],
        "ctaHeading": "Get in touch",
        "ctaText": "We answer within a day.",
        "ctaEmailButton": "E-mail us",
        "ctaCallButton": "Call us",
        "footerText": "Made in Lyon",
        "copyright": "&copy; Acme <a href=\"/legal\">Legal</a>",
        "futureField": "ignored by older pages"
    })
}

/// French counterpart of [`english_document`].
pub fn french_document() -> Value {
    json!({
        "title": "Acme — Accueil",
        "metaDescription": "Acme fabrique des choses",
        "homeLink": "Accueil",
        "sectionsTitle": "Rubriques",
        "missionLink": "Notre mission",
        "teamLink": "Notre équipe",
        "contactLink": "Nous contacter",
        "languageTitle": "Langue",
        "languageOptionEnglish": "Anglais",
        "languageOptionFrench": "Français",
        "tagline": "Nous fabriquons des choses",
        "bannerButton1": "En savoir plus",
        "bannerButton2": "Nous écrire",
        "missionHeading": "Notre mission",
        "missionText": "Fabriquer les meilleures choses.",
        "teamMembers": [
            {"name": "Ann Smith", "role": "Développeuse principale", "location": "Lyon", "description": "Construit le produit."},
            {"name": "Ben Jones", "role": "Directeur du design", "location": "Nice", "description": "Dessine le produit."}
        ],
        "clientHeading": "Réalisations",
        "clientProjects": [
            {"title": "Atlas", "description": "Des cartes pour tous.", "cta": "Lire l'étude de cas"}
        ],
        "ctaHeading": "Contactez-nous",
        "ctaText": "Nous répondons sous un jour.",
        "ctaEmailButton": "Écrivez-nous",
        "ctaCallButton": "Appelez-nous",
        "footerText": "Fabriqué à Lyon",
        "copyright": "&copy; Acme <a href=\"/mentions\">Mentions légales</a>"
    })
}

/// Serve `body` as the translation document for `code`.
pub async fn mount_language(server: &MockServer, code: &str, body: &Value) {
    Mock::given(method("GET"))
        .and(path(format!("/assets/data/lang-{code}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve `status` for the translation document for `code`.
pub async fn mount_failure(server: &MockServer, code: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/assets/data/lang-{code}.json")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Localizer wired to a mock server, a shared in-memory store, and no
/// host preference.
pub fn localizer_for(server_uri: &str, store: Arc<InMemoryStore>) -> ContentLocalizer {
    ContentLocalizer::new(
        Arc::new(HttpTranslationSource::new(server_uri).expect("mock server URI")),
        store as Arc<dyn SelectionStore>,
        Arc::new(FixedPreference(None)),
    )
}
