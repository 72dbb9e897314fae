//! Page events and the session loop
//!
//! Execution is entirely a reaction to two event sources: the page load
//! and clicks. A [`Session`] binds a localizer to one page and consumes
//! events strictly in order, awaiting each localization pass to completion
//! before dequeuing the next. That serialization is what rules out
//! overlapping in-flight fetches: a rapid double click performs two full
//! passes in click order, and the later click wins deterministically.

use tokio::sync::mpsc;

use crate::dom::{targets, DomPort};
use crate::language::LanguageCode;
use crate::localizer::ContentLocalizer;

/// An event delivered by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The page finished loading; run the initial localization pass.
    Load,

    /// The element with this id was clicked.
    Click { element: String },
}

/// Whether a dispatched event was handled. `Consumed` tells the host to
/// suppress the control's default behavior (the `preventDefault` analog);
/// `Ignored` leaves the click to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Consumed,
    Ignored,
}

/// One page's event-handling session.
pub struct Session<D: DomPort> {
    localizer: ContentLocalizer,
    dom: D,
}

impl<D: DomPort> Session<D> {
    pub fn new(localizer: ContentLocalizer, dom: D) -> Self {
        Self { localizer, dom }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn into_dom(self) -> D {
        self.dom
    }

    /// Handle one event to completion.
    pub async fn dispatch(&mut self, event: PageEvent) -> EventOutcome {
        match event {
            PageEvent::Load => {
                let code = self.localizer.resolve_initial();
                tracing::info!(language = %code, "initial localization pass");
                self.localizer.apply_language(&mut self.dom, &code).await;
                EventOutcome::Consumed
            }
            PageEvent::Click { element } => self.handle_click(&element).await,
        }
    }

    /// Consume events from `rx` until the channel closes, then hand the
    /// page back.
    pub async fn run(mut self, mut rx: mpsc::UnboundedReceiver<PageEvent>) -> D {
        while let Some(event) = rx.recv().await {
            self.dispatch(event).await;
        }
        self.dom
    }

    async fn handle_click(&mut self, element: &str) -> EventOutcome {
        // Nested clicks (an icon inside the control) resolve to the
        // nearest ancestor carrying the language attribute.
        if let Some(raw) = self.dom.language_control(element) {
            match LanguageCode::parse(&raw) {
                Some(code) => {
                    tracing::info!(element, language = %code, "language control clicked");
                    self.localizer.switch_language(&mut self.dom, &code).await;
                }
                None => {
                    tracing::warn!(element, value = %raw, "language control carries unparseable code");
                }
            }
            return EventOutcome::Consumed;
        }

        if self.dom.is_within(element, &targets::SECTIONS_TITLE) {
            tracing::info!(element, "sections heading clicked");
            self.localizer.reveal_section_links(&mut self.dom).await;
            return EventOutcome::Consumed;
        }

        tracing::trace!(element, "click outside localizer controls ignored");
        EventOutcome::Ignored
    }
}
