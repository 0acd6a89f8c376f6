//! Parsed page with deferred attribute rewrites.

use std::collections::HashMap;

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Html, Selector, node::Node};

/// A parsed HTML page plus a set of pending attribute overrides.
///
/// `scraper`'s element tree is read-only, so rewrites are recorded by node
/// id and applied when the document is serialized. Reads go through
/// [`attr`](Self::attr), which consults the overrides first, so a later
/// pipeline stage observes the writes of an earlier one. Lifetime: one
/// request; only the coordinating task touches it.
pub struct Document {
    html: Html,
    overrides: HashMap<NodeId, HashMap<String, String>>,
}

/// The link-bearing attribute for an allowlisted tag: `src` on scripts and
/// images, `href` on everything else (anchors, stylesheet links, forms).
pub(crate) fn link_attr(tag: &str) -> &'static str {
    match tag {
        "script" | "img" => "src",
        _ => "href",
    }
}

impl Document {
    /// Parse a full HTML document.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
            overrides: HashMap::new(),
        }
    }

    /// Iterate elements matching `selector` in document order.
    pub fn select<'a>(&'a self, selector: &'a Selector) -> scraper::html::Select<'a, 'a> {
        self.html.select(selector)
    }

    /// The effective value of an attribute: a pending override if one was
    /// recorded, otherwise the value parsed from the source markup.
    pub fn attr<'a>(&'a self, element: ElementRef<'a>, name: &str) -> Option<&'a str> {
        if let Some(value) = self
            .overrides
            .get(&element.id())
            .and_then(|attrs| attrs.get(name))
        {
            return Some(value);
        }
        element.value().attr(name)
    }

    /// Record an attribute rewrite, applied at serialization time.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: String) {
        self.overrides
            .entry(id)
            .or_default()
            .insert(name.to_string(), value);
    }

    /// Serialize the tree back to markup with all recorded rewrites applied.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        serialize_node(self.html.tree.root(), &self.overrides, &mut out);
        out
    }
}

/// HTML5 void elements that must not have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn serialize_node(
    node: NodeRef<Node>,
    overrides: &HashMap<NodeId, HashMap<String, String>>,
    out: &mut String,
) {
    match node.value() {
        Node::Document | Node::Fragment => {
            for child in node.children() {
                serialize_node(child, overrides, out);
            }
        }
        Node::Doctype(doctype) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype.name());
            out.push('>');
        }
        Node::Element(el) => {
            let tag = el.name();
            let rewritten = overrides.get(&node.id());

            out.push('<');
            out.push_str(tag);
            for (k, v) in el.attrs() {
                let value = rewritten
                    .and_then(|attrs| attrs.get(k))
                    .map_or(v, String::as_str);
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                out.push_str(value);
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag) {
                return;
            }

            for child in node.children() {
                serialize_node(child, overrides, out);
            }

            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        Node::Text(text) => {
            out.push_str(text.as_ref());
        }
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment.as_ref());
            out.push_str("-->");
        }
        _ => {}
    }
}
