//! Page write access behind a port abstraction
//!
//! The localizer never touches a live browser document; it talks to a
//! [`DomPort`] that can resolve fixed targets and write text, markup, and
//! attributes into them. Two implementations ship:
//!
//! - [`HtmlPage`] - a parsed HTML document, for localizing static pages
//! - [`MemoryPage`] - an in-memory fake for tests and headless hosts
//!
//! All writes are write-only and idempotent; reads exist only to resolve
//! click targets and count repeated sections.

pub mod html;
pub mod memory;
pub mod targets;

pub use html::HtmlPage;
pub use memory::MemoryPage;
pub use targets::Target;

use thiserror::Error;

/// Errors raised by page write operations
#[derive(Error, Debug)]
pub enum DomError {
    /// No element matched the target's selector
    #[error("target not found in page: {target}")]
    TargetNotFound { target: String },

    /// Positional section index beyond the sections present in the page
    #[error("section index {index} out of range for {target}")]
    SectionOutOfRange { target: String, index: usize },
}

/// Write access to the fixed locations of the host page.
///
/// Locators come from [`targets`]; implementations decide how a locator
/// maps onto their document representation. A missing target is reported
/// per call and never aborts the caller's remaining writes.
pub trait DomPort {
    /// Replace the target's text content.
    fn set_text(&mut self, target: &Target, text: &str) -> Result<(), DomError>;

    /// Replace the target's content with parsed markup.
    fn set_markup(&mut self, target: &Target, markup: &str) -> Result<(), DomError>;

    /// Set an attribute on the target element.
    fn set_attr(&mut self, target: &Target, attr: &str, value: &str) -> Result<(), DomError>;

    /// Number of repeated sections matching `sections`.
    fn section_count(&self, sections: &Target) -> usize;

    /// Replace the text of `field` inside the `index`-th section.
    fn set_section_text(
        &mut self,
        sections: &Target,
        index: usize,
        field: &Target,
        text: &str,
    ) -> Result<(), DomError>;

    /// Language code carried by the clicked element or its nearest
    /// ancestor with the identifying attribute. Clicks landing on nested
    /// elements (an icon inside the control) must still resolve.
    fn language_control(&self, element_id: &str) -> Option<String>;

    /// Whether the clicked element is the target or one of its
    /// descendants.
    fn is_within(&self, element_id: &str, target: &Target) -> bool;
}
