//! Session-level tests: load, clicks, persistence, deferred links
//!
//! Exercises the event path against a real parsed page, including the
//! nested-click tolerance of the language controls and the
//! heading-gated navigation links.

mod common;

use std::sync::Arc;

use wiremock::MockServer;

use plume::dom::HtmlPage;
use plume::events::{EventOutcome, PageEvent, Session};
use plume::localizer::SELECTED_LANGUAGE_KEY;
use plume::storage::{InMemoryStore, SelectionStore};

use common::{english_document, french_document, localizer_for, FIXTURE_PAGE};

async fn server_with_both_languages() -> MockServer {
    let server = MockServer::start().await;
    common::mount_language(&server, "en", &english_document()).await;
    common::mount_language(&server, "fr", &french_document()).await;
    server
}

fn click(element: &str) -> PageEvent {
    PageEvent::Click {
        element: element.to_string(),
    }
}

#[tokio::test]
async fn test_switch_persists_and_survives_reload() {
    let server = server_with_both_languages().await;
    let store = Arc::new(InMemoryStore::new());

    let localizer = localizer_for(&server.uri(), Arc::clone(&store));
    let mut session = Session::new(localizer, HtmlPage::parse(FIXTURE_PAGE));

    session.dispatch(PageEvent::Load).await;
    assert!(session.dom().render().contains("We make things"));

    let outcome = session.dispatch(click("lang-fr")).await;
    assert_eq!(outcome, EventOutcome::Consumed);
    assert!(session.dom().render().contains("Nous fabriquons des choses"));
    assert_eq!(
        store.get(SELECTED_LANGUAGE_KEY).unwrap().as_deref(),
        Some("fr")
    );

    // simulated reload: fresh page, same store
    let localizer = localizer_for(&server.uri(), Arc::clone(&store));
    let mut reloaded = Session::new(localizer, HtmlPage::parse(FIXTURE_PAGE));
    reloaded.dispatch(PageEvent::Load).await;
    assert!(reloaded.dom().render().contains("Nous fabriquons des choses"));
}

#[tokio::test]
async fn test_click_on_nested_element_switches_language() {
    let server = server_with_both_languages().await;
    let store = Arc::new(InMemoryStore::new());

    let localizer = localizer_for(&server.uri(), Arc::clone(&store));
    let mut session = Session::new(localizer, HtmlPage::parse(FIXTURE_PAGE));

    // the span inside the control, not the control itself
    let outcome = session.dispatch(click("lang-fr-flag")).await;

    assert_eq!(outcome, EventOutcome::Consumed);
    assert!(session.dom().render().contains("Nous fabriquons des choses"));
    assert_eq!(
        store.get(SELECTED_LANGUAGE_KEY).unwrap().as_deref(),
        Some("fr")
    );
}

#[tokio::test]
async fn test_reclicking_active_language_is_harmless() {
    let server = server_with_both_languages().await;
    let store = Arc::new(InMemoryStore::new());

    let localizer = localizer_for(&server.uri(), Arc::clone(&store));
    let mut session = Session::new(localizer, HtmlPage::parse(FIXTURE_PAGE));

    session.dispatch(click("lang-fr")).await;
    let first = session.dom().render();
    session.dispatch(click("lang-fr")).await;

    assert_eq!(session.dom().render(), first);
}

#[tokio::test]
async fn test_deferred_links_wait_for_heading_click() {
    let server = server_with_both_languages().await;
    let store = Arc::new(InMemoryStore::new());

    let localizer = localizer_for(&server.uri(), Arc::clone(&store));
    let mut session = Session::new(localizer, HtmlPage::parse(FIXTURE_PAGE));

    session.dispatch(PageEvent::Load).await;

    // before the heading click the links keep their pre-localization text
    let html = session.dom().render();
    assert!(html.contains(">Mission</a>"));
    assert!(html.contains(">Team</a>"));
    assert!(html.contains(">Contact</a>"));

    let outcome = session.dispatch(click("sections-title")).await;
    assert_eq!(outcome, EventOutcome::Consumed);

    let html = session.dom().render();
    assert!(html.contains(">Our mission</a>"));
    assert!(html.contains(">Our team</a>"));
    assert!(html.contains(">Contact us</a>"));
}

#[tokio::test]
async fn test_heading_click_on_descendant_counts() {
    let server = server_with_both_languages().await;
    let store = Arc::new(InMemoryStore::new());

    let localizer = localizer_for(&server.uri(), Arc::clone(&store));
    let mut session = Session::new(localizer, HtmlPage::parse(FIXTURE_PAGE));

    let outcome = session.dispatch(click("sections-caret")).await;

    assert_eq!(outcome, EventOutcome::Consumed);
    assert!(session.dom().render().contains(">Our mission</a>"));
}

#[tokio::test]
async fn test_deferred_links_follow_persisted_language() {
    let server = server_with_both_languages().await;
    let store = Arc::new(InMemoryStore::new().with_entry(SELECTED_LANGUAGE_KEY, "fr"));

    let localizer = localizer_for(&server.uri(), Arc::clone(&store));
    let mut session = Session::new(localizer, HtmlPage::parse(FIXTURE_PAGE));

    session.dispatch(PageEvent::Load).await;
    session.dispatch(click("sections-title")).await;

    let html = session.dom().render();
    assert!(html.contains(">Notre mission</a>"));
    assert!(html.contains(">Notre équipe</a>"));
}

#[tokio::test]
async fn test_unrelated_click_is_ignored() {
    let server = server_with_both_languages().await;
    let store = Arc::new(InMemoryStore::new());

    let localizer = localizer_for(&server.uri(), Arc::clone(&store));
    let mut session = Session::new(localizer, HtmlPage::parse(FIXTURE_PAGE));
    let before = session.dom().render();

    let outcome = session.dispatch(click("home-link")).await;

    assert_eq!(outcome, EventOutcome::Ignored);
    assert_eq!(session.dom().render(), before);
    assert!(store.get(SELECTED_LANGUAGE_KEY).unwrap().is_none());
}
