//! A namespace-aware element tree for XMP packets.
//!
//! quick-xml's `NsReader` resolves element and attribute prefixes against the
//! `xmlns` declarations in scope. The builder here assembles its event stream
//! into a tree that can be searched by namespace URI and local name.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::error::XmpError;

/// Namespace URI bound to the `xmlns` prefix itself.
pub const NS_XMLNS: &str = "http://www.w3.org/2000/xmlns/";

// =============================================================================
// Tree
// =============================================================================

/// A parsed XMP packet.
#[derive(Debug, Clone, PartialEq)]
pub struct XmpDocument {
    root: XmpElement,
}

/// An element with its namespace resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct XmpElement {
    namespace: Option<String>,
    prefix: Option<String>,
    local_name: String,
    attributes: Vec<XmpAttribute>,
    children: Vec<XmpNode>,
}

/// An attribute with its namespace resolved.
///
/// Namespace declarations are kept as attributes in the [`NS_XMLNS`]
/// namespace: `xmlns:GPano="…"` has prefix `xmlns` and local name `GPano`.
#[derive(Debug, Clone, PartialEq)]
pub struct XmpAttribute {
    pub namespace: Option<String>,
    pub prefix: Option<String>,
    pub local_name: String,
    pub value: String,
}

/// A child node.
#[derive(Debug, Clone, PartialEq)]
pub enum XmpNode {
    Element(XmpElement),
    Text(String),
    CData(String),
}

impl XmpDocument {
    /// Parse an XMP packet.
    ///
    /// # Errors
    /// Returns [`XmpError::Xml`] for malformed XML, mismatched or unclosed
    /// elements, undeclared prefixes, content outside the root element, and
    /// documents with no root or several roots.
    pub fn parse(xml: &str) -> Result<Self, XmpError> {
        TreeBuilder::default().build(xml)
    }

    pub fn root(&self) -> &XmpElement {
        &self.root
    }

    /// The first element with this namespace and local name, in document
    /// order, including the root itself.
    pub fn find_element(&self, namespace: &str, local_name: &str) -> Option<&XmpElement> {
        if self.root.is(namespace, local_name) {
            return Some(&self.root);
        }
        self.root.find_descendant(namespace, local_name)
    }
}

impl XmpElement {
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn attributes(&self) -> &[XmpAttribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[XmpNode] {
        &self.children
    }

    /// Whether this element has the given namespace and local name.
    pub fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.local_name == local_name
    }

    /// Value of the attribute with this namespace and local name.
    pub fn attribute(&self, namespace: &str, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.namespace.as_deref() == Some(namespace) && attr.local_name == local_name)
            .map(|attr| attr.value.as_str())
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmpElement> {
        self.children.iter().filter_map(|node| match node {
            XmpNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// The first descendant (not this element) with this namespace and local
    /// name, in document order.
    pub fn find_descendant(&self, namespace: &str, local_name: &str) -> Option<&XmpElement> {
        self.descendants()
            .find(|element| element.is(namespace, local_name))
    }

    /// All descendants in document order, excluding this element.
    pub fn descendants(&self) -> Descendants<'_> {
        let mut stack: Vec<&XmpElement> = self.child_elements().collect();
        stack.reverse();
        Descendants { stack }
    }

    /// The first text or CDATA child.
    pub fn first_text(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            XmpNode::Text(text) | XmpNode::CData(text) => Some(text.as_str()),
            XmpNode::Element(_) => None,
        })
    }
}

/// Pre-order iterator over an element's descendants.
pub struct Descendants<'a> {
    stack: Vec<&'a XmpElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmpElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        let start = self.stack.len();
        self.stack.extend(element.child_elements());
        self.stack[start..].reverse();
        Some(element)
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Element under construction.
struct OpenElement {
    element: XmpElement,
    raw_name: String,
}

#[derive(Default)]
struct TreeBuilder {
    open: Vec<OpenElement>,
    root: Option<XmpElement>,
}

impl TreeBuilder {
    fn build(mut self, xml: &str) -> Result<XmpDocument, XmpError> {
        let mut reader = NsReader::from_str(xml);

        loop {
            let (resolved, event) = reader.read_resolved_event()?;
            let namespace = namespace_uri(resolved)?;
            match event {
                Event::Start(start) => {
                    let open = open_element(&reader, &start, namespace)?;
                    self.open.push(open);
                }
                Event::Empty(start) => {
                    let open = open_element(&reader, &start, namespace)?;
                    self.attach(open.element)?;
                }
                Event::End(end) => {
                    let open = self.open.pop().ok_or_else(|| {
                        XmpError::Xml(format!(
                            "unexpected closing tag </{}>",
                            lossy(end.name().as_ref())
                        ))
                    })?;
                    self.attach(open.element)?;
                }
                Event::Text(text) => {
                    let text = text.unescape()?.into_owned();
                    self.add_text(XmpNode::Text(text))?;
                }
                Event::CData(cdata) => {
                    self.add_text(XmpNode::CData(lossy(&cdata)))?;
                }
                Event::Eof => break,
                // Declarations, processing instructions (xpacket), comments
                _ => {}
            }
        }

        if let Some(open) = self.open.last() {
            return Err(XmpError::Xml(format!("unclosed element <{}>", open.raw_name)));
        }
        self.root
            .map(|root| XmpDocument { root })
            .ok_or_else(|| XmpError::Xml("no root element".to_string()))
    }

    /// Attach a finished element to its parent, or make it the root.
    fn attach(&mut self, element: XmpElement) -> Result<(), XmpError> {
        match self.open.last_mut() {
            Some(parent) => {
                parent.element.children.push(XmpNode::Element(element));
                Ok(())
            }
            None if self.root.is_none() => {
                self.root = Some(element);
                Ok(())
            }
            None => Err(XmpError::Xml(format!(
                "multiple root elements, second is <{}>",
                element.local_name
            ))),
        }
    }

    fn add_text(&mut self, node: XmpNode) -> Result<(), XmpError> {
        match self.open.last_mut() {
            Some(parent) => {
                parent.element.children.push(node);
                Ok(())
            }
            None => match node {
                XmpNode::Text(text) if text.trim().is_empty() => Ok(()),
                _ => Err(XmpError::Xml("content outside the root element".to_string())),
            },
        }
    }
}

/// Build an element from a start tag whose own namespace is already
/// resolved. Attribute prefixes are resolved against the reader's scopes,
/// which include the declarations of this tag.
fn open_element(
    reader: &NsReader<&[u8]>,
    start: &BytesStart<'_>,
    namespace: Option<String>,
) -> Result<OpenElement, XmpError> {
    let name = start.name();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let namespace = if attr.key.as_namespace_binding().is_some() {
            Some(NS_XMLNS.to_string())
        } else {
            let (resolved, _) = reader.resolve_attribute(attr.key);
            namespace_uri(resolved)?
        };
        attributes.push(XmpAttribute {
            namespace,
            prefix: attr.key.prefix().map(|prefix| lossy(prefix.as_ref())),
            local_name: lossy(attr.key.local_name().as_ref()),
            value: attr.unescape_value()?.into_owned(),
        });
    }

    Ok(OpenElement {
        element: XmpElement {
            namespace,
            prefix: name.prefix().map(|prefix| lossy(prefix.as_ref())),
            local_name: lossy(name.local_name().as_ref()),
            attributes,
            children: Vec::new(),
        },
        raw_name: lossy(name.as_ref()),
    })
}

/// The namespace URI of a resolved name; a prefix without declaration is an
/// error.
fn namespace_uri(resolved: ResolveResult<'_>) -> Result<Option<String>, XmpError> {
    match resolved {
        ResolveResult::Bound(namespace) => Ok(Some(lossy(namespace.as_ref()))),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(XmpError::Xml(format!(
            "undeclared namespace prefix '{}'",
            lossy(&prefix)
        ))),
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
