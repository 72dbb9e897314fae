//! HTML document adapter
//!
//! Wraps a scraper-parsed document and implements [`DomPort`] by mutating
//! the underlying ego-tree directly: text writes detach the matched
//! element's children and append a fresh text node, markup writes graft a
//! parsed fragment, attribute writes upsert into the element's attribute
//! map. Serialization escapes text nodes, so translated copy cannot inject
//! markup through a text field.

use ego_tree::{NodeId, NodeRef, Tree};
use html5ever::tendril::StrTendril;
use html5ever::{namespace_url, ns, LocalName, QualName};
use scraper::node::{Element, Text};
use scraper::{ElementRef, Html, Node};

use crate::dom::targets::{self, Target};
use crate::dom::{DomError, DomPort};

/// A parsed HTML page open for localization writes.
pub struct HtmlPage {
    doc: Html,
}

impl HtmlPage {
    /// Parse a full HTML document.
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// Serialize the page back to HTML, re-attaching the doctype the
    /// serializer drops.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for child in self.doc.tree.root().children() {
            if let Node::Doctype(doctype) = child.value() {
                out.push_str("<!DOCTYPE ");
                out.push_str(&doctype.name());
                out.push_str(">\n");
                break;
            }
        }
        out.push_str(&self.doc.root_element().html());
        out
    }

    fn target_id(&self, target: &Target) -> Result<NodeId, DomError> {
        self.doc
            .select(&target.selector)
            .next()
            .map(|element| element.id())
            .ok_or_else(|| DomError::TargetNotFound {
                target: target.name.to_string(),
            })
    }

    fn node_by_element_id(&self, element_id: &str) -> Option<NodeRef<'_, Node>> {
        self.doc
            .select(&targets::ELEMENTS_WITH_ID)
            .find(|element| element.value().attr("id") == Some(element_id))
            .map(|element| *element)
    }

    /// Detach every child of `id`, emptying the element.
    fn clear_children(&mut self, id: NodeId) {
        loop {
            let first = self
                .doc
                .tree
                .get_mut(id)
                .and_then(|mut node| node.first_child().map(|child| child.id()));
            match first {
                Some(child_id) => {
                    if let Some(mut child) = self.doc.tree.get_mut(child_id) {
                        child.detach();
                    }
                }
                None => break,
            }
        }
    }

    fn write_text_node(&mut self, id: NodeId, text: &str) {
        self.clear_children(id);
        if let Some(mut node) = self.doc.tree.get_mut(id) {
            node.append(Node::Text(Text {
                text: StrTendril::from(text),
            }));
        }
    }
}

impl DomPort for HtmlPage {
    fn set_text(&mut self, target: &Target, text: &str) -> Result<(), DomError> {
        let id = self.target_id(target)?;
        self.write_text_node(id, text);
        Ok(())
    }

    fn set_markup(&mut self, target: &Target, markup: &str) -> Result<(), DomError> {
        let id = self.target_id(target)?;
        self.clear_children(id);

        // html5ever recovers from malformed input, so fragment parsing
        // cannot fail; the fragment's contents hang off its <html> wrapper.
        let fragment = Html::parse_fragment(markup);
        graft_children(&mut self.doc.tree, id, *fragment.root_element());
        Ok(())
    }

    fn set_attr(&mut self, target: &Target, attr: &str, value: &str) -> Result<(), DomError> {
        let id = self.target_id(target)?;
        if let Some(mut node) = self.doc.tree.get_mut(id) {
            if let Node::Element(element) = node.value() {
                upsert_attr(element, attr, value);
            }
        }
        Ok(())
    }

    fn section_count(&self, sections: &Target) -> usize {
        self.doc.select(&sections.selector).count()
    }

    fn set_section_text(
        &mut self,
        sections: &Target,
        index: usize,
        field: &Target,
        text: &str,
    ) -> Result<(), DomError> {
        let field_id = {
            let section = self.doc.select(&sections.selector).nth(index).ok_or_else(|| {
                DomError::SectionOutOfRange {
                    target: sections.name.to_string(),
                    index,
                }
            })?;
            section.select(&field.selector).next().map(|element| element.id())
        };

        let field_id = field_id.ok_or_else(|| DomError::TargetNotFound {
            target: format!("{}[{}] {}", sections.name, index, field.name),
        })?;

        self.write_text_node(field_id, text);
        Ok(())
    }

    fn language_control(&self, element_id: &str) -> Option<String> {
        let mut current = self.node_by_element_id(element_id);
        while let Some(node) = current {
            if let Some(element) = ElementRef::wrap(node) {
                if let Some(code) = element.value().attr(targets::LANGUAGE_CONTROL_ATTR) {
                    return Some(code.to_string());
                }
            }
            current = node.parent();
        }
        None
    }

    fn is_within(&self, element_id: &str, target: &Target) -> bool {
        let start = match self.node_by_element_id(element_id) {
            Some(node) => node,
            None => return false,
        };
        let matched: Vec<NodeId> = self
            .doc
            .select(&target.selector)
            .map(|element| element.id())
            .collect();

        let mut current = Some(start);
        while let Some(node) = current {
            if matched.contains(&node.id()) {
                return true;
            }
            current = node.parent();
        }
        false
    }
}

/// Deep-copy `src`'s children (from another tree) under `dest`.
fn graft_children(tree: &mut Tree<Node>, dest: NodeId, src: NodeRef<'_, Node>) {
    for child in src.children() {
        let new_id = match tree.get_mut(dest) {
            Some(mut parent) => parent.append(child.value().clone()).id(),
            None => return,
        };
        graft_children(tree, new_id, child);
    }
}

/// Update an existing attribute in place, or insert it with an empty
/// namespace the way the parser would have.
fn upsert_attr(element: &mut Element, name: &str, value: &str) {
    if let Some((_, existing)) = element
        .attrs
        .iter_mut()
        .find(|(qual_name, _)| &*qual_name.local == name)
    {
        *existing = StrTendril::from(value);
        return;
    }
    element.attrs.insert(
        QualName::new(None, ns!(), LocalName::from(name)),
        StrTendril::from(value),
    );
}
