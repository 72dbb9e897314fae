//! In-memory page fake
//!
//! A [`MemoryPage`] records writes keyed by the target's selector string
//! instead of touching real markup. Tests use it to assert exactly what a
//! localization pass wrote (and to diff whole-page state before and after
//! a failing pass); headless hosts can use it to collect translated copy
//! without a document.

use std::collections::{HashMap, HashSet};

use crate::dom::targets::Target;
use crate::dom::{DomError, DomPort};

/// Recorded state of one repeated section: field selector → text.
pub type SectionState = HashMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPage {
    texts: HashMap<String, String>,
    markup: HashMap<String, String>,
    attrs: HashMap<(String, String), String>,
    sections: HashMap<String, Vec<SectionState>>,
    absent: HashSet<String>,
    controls: HashMap<String, String>,
    containers: HashMap<String, String>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a repeated-section group with `count` empty sections.
    pub fn with_sections(mut self, sections: &Target, count: usize) -> Self {
        self.sections
            .insert(sections.css.to_string(), vec![SectionState::new(); count]);
        self
    }

    /// Mark a target as absent from the page; writes to it fail with
    /// [`DomError::TargetNotFound`].
    pub fn without_target(mut self, target: &Target) -> Self {
        self.absent.insert(target.css.to_string());
        self
    }

    /// Register a language-selector control. The fake resolves clicks on
    /// `element_id` directly; nearest-ancestor resolution is the HTML
    /// adapter's concern.
    pub fn with_control(mut self, element_id: &str, code: &str) -> Self {
        self.controls.insert(element_id.to_string(), code.to_string());
        self
    }

    /// Register `element_id` as living inside the element matched by
    /// `container`.
    pub fn with_containment(mut self, element_id: &str, container: &Target) -> Self {
        self.containers
            .insert(element_id.to_string(), container.css.to_string());
        self
    }

    pub fn text_of(&self, target: &Target) -> Option<&str> {
        self.texts.get(target.css).map(String::as_str)
    }

    pub fn markup_of(&self, target: &Target) -> Option<&str> {
        self.markup.get(target.css).map(String::as_str)
    }

    pub fn attr_of(&self, target: &Target, attr: &str) -> Option<&str> {
        self.attrs
            .get(&(target.css.to_string(), attr.to_string()))
            .map(String::as_str)
    }

    pub fn section_text(&self, sections: &Target, index: usize, field: &Target) -> Option<&str> {
        self.sections
            .get(sections.css)?
            .get(index)?
            .get(field.css)
            .map(String::as_str)
    }

    fn ensure_present(&self, target: &Target) -> Result<(), DomError> {
        if self.absent.contains(target.css) {
            return Err(DomError::TargetNotFound {
                target: target.name.to_string(),
            });
        }
        Ok(())
    }
}

impl DomPort for MemoryPage {
    fn set_text(&mut self, target: &Target, text: &str) -> Result<(), DomError> {
        self.ensure_present(target)?;
        self.texts.insert(target.css.to_string(), text.to_string());
        Ok(())
    }

    fn set_markup(&mut self, target: &Target, markup: &str) -> Result<(), DomError> {
        self.ensure_present(target)?;
        self.markup.insert(target.css.to_string(), markup.to_string());
        Ok(())
    }

    fn set_attr(&mut self, target: &Target, attr: &str, value: &str) -> Result<(), DomError> {
        self.ensure_present(target)?;
        self.attrs.insert(
            (target.css.to_string(), attr.to_string()),
            value.to_string(),
        );
        Ok(())
    }

    fn section_count(&self, sections: &Target) -> usize {
        self.sections.get(sections.css).map_or(0, Vec::len)
    }

    fn set_section_text(
        &mut self,
        sections: &Target,
        index: usize,
        field: &Target,
        text: &str,
    ) -> Result<(), DomError> {
        let group = self
            .sections
            .get_mut(sections.css)
            .ok_or_else(|| DomError::TargetNotFound {
                target: sections.name.to_string(),
            })?;
        let section = group.get_mut(index).ok_or_else(|| DomError::SectionOutOfRange {
            target: sections.name.to_string(),
            index,
        })?;
        section.insert(field.css.to_string(), text.to_string());
        Ok(())
    }

    fn language_control(&self, element_id: &str) -> Option<String> {
        self.controls.get(element_id).cloned()
    }

    fn is_within(&self, element_id: &str, target: &Target) -> bool {
        if target.css.strip_prefix('#') == Some(element_id) {
            return true;
        }
        self.containers.get(element_id).map(String::as_str) == Some(target.css)
    }
}
