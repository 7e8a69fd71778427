//! A light markup tree built with html5ever.
//!
//! Only what the class audit needs is kept: element names, attributes and
//! the parent/child structure. Comments and processing instructions become
//! opaque nodes so tree surgery by the parser still has something to move.

use html5ever::interface::{ElemName, ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{Attribute, LocalName, Namespace, QualName};
use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub mod markup_tree {
    use super::*;

    pub type Handle = Rc<RefCell<Node>>;

    #[derive(Debug)]
    pub enum NodeData {
        Document,
        Element {
            name: QualName,
            attributes: Vec<(String, String)>,
        },
        Text(String),
        Opaque,
    }

    #[derive(Debug)]
    pub struct Node {
        pub data: NodeData,
        pub parent: Option<Weak<RefCell<Node>>>,
        pub children: Vec<Handle>,
    }

    impl Node {
        pub fn new_handle(data: NodeData) -> Handle {
            Rc::new(RefCell::new(Node {
                data,
                parent: None,
                children: Vec::new(),
            }))
        }

        /// Value of attribute `name` on an element node.
        pub fn attribute(&self, name: &str) -> Option<&str> {
            match &self.data {
                NodeData::Element { attributes, .. } => attributes
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value.as_str()),
                _ => None,
            }
        }
    }

    #[derive(Debug)]
    pub struct Document {
        pub root: Handle,
        pub quirks_mode: QuirksMode,
        pub parse_errors: usize,
    }
}

use markup_tree::{Document, Handle, Node, NodeData};

/// Parses a whole HTML document.
pub fn parse_markup(html_content: &str) -> Document {
    let sink = MarkupTreeSink::new();
    html5ever::parse_document(sink, Default::default()).one(html_content.to_string())
}

/// TreeSink building a [`markup_tree::Document`].
pub struct MarkupTreeSink {
    document: Handle,
    quirks_mode: Cell<QuirksMode>,
    parse_errors: Cell<usize>,
}

impl MarkupTreeSink {
    pub fn new() -> Self {
        MarkupTreeSink {
            document: Node::new_handle(NodeData::Document),
            quirks_mode: Cell::new(QuirksMode::NoQuirks),
            parse_errors: Cell::new(0),
        }
    }

    fn detach(target: &Handle) {
        let parent = target.borrow_mut().parent.take();
        if let Some(parent) = parent.and_then(|weak| weak.upgrade()) {
            parent
                .borrow_mut()
                .children
                .retain(|child| !Rc::ptr_eq(child, target));
        }
    }

    fn adopt(parent: &Handle, child: &Handle) {
        Self::detach(child);
        child.borrow_mut().parent = Some(Rc::downgrade(parent));
    }

    fn into_node(child: NodeOrText<Handle>) -> Handle {
        match child {
            NodeOrText::AppendNode(node) => node,
            NodeOrText::AppendText(text) => Node::new_handle(NodeData::Text(text.to_string())),
        }
    }
}

impl Default for MarkupTreeSink {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct MarkupElemName {
    ns: Namespace,
    local: LocalName,
}

impl ElemName for MarkupElemName {
    fn ns(&self) -> &Namespace {
        &self.ns
    }

    fn local_name(&self) -> &LocalName {
        &self.local
    }
}

impl TreeSink for MarkupTreeSink {
    type Handle = Handle;
    type Output = Document;
    type ElemName<'a>
        = MarkupElemName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        Document {
            root: self.document,
            quirks_mode: self.quirks_mode.get(),
            parse_errors: self.parse_errors.get(),
        }
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        log::trace!("markup parse error: {}", msg);
        self.parse_errors.set(self.parse_errors.get() + 1);
    }

    fn get_document(&self) -> Self::Handle {
        self.document.clone()
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        match &target.borrow().data {
            NodeData::Element { name, .. } => MarkupElemName {
                ns: name.ns.clone(),
                local: name.local.clone(),
            },
            // The parser only asks elements for their name.
            _ => MarkupElemName {
                ns: Namespace::from(""),
                local: LocalName::from(""),
            },
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let attributes = attrs
            .into_iter()
            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
            .collect();
        Node::new_handle(NodeData::Element { name, attributes })
    }

    fn create_comment(&self, _text: StrTendril) -> Self::Handle {
        Node::new_handle(NodeData::Opaque)
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Self::Handle {
        Node::new_handle(NodeData::Opaque)
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        // Adjacent text merges into the previous text node.
        if let NodeOrText::AppendText(text) = &child {
            let parent_ref = parent.borrow();
            if let Some(last) = parent_ref.children.last() {
                if let NodeData::Text(existing) = &mut last.borrow_mut().data {
                    existing.push_str(text);
                    return;
                }
            }
        }

        let node = Self::into_node(child);
        Self::adopt(parent, &node);
        parent.borrow_mut().children.push(node);
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let has_parent = element.borrow().parent.is_some();
        if has_parent {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        target.clone()
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        Rc::ptr_eq(x, y)
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        self.quirks_mode.set(mode);
    }

    fn append_before_sibling(&self, sibling: &Self::Handle, child: NodeOrText<Self::Handle>) {
        let Some(parent) = sibling
            .borrow()
            .parent
            .as_ref()
            .and_then(|weak| weak.upgrade())
        else {
            return;
        };

        let node = Self::into_node(child);
        Self::adopt(&parent, &node);
        let mut parent_mut = parent.borrow_mut();
        let index = parent_mut
            .children
            .iter()
            .position(|c| Rc::ptr_eq(c, sibling))
            .unwrap_or(parent_mut.children.len());
        parent_mut.children.insert(index, node);
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Attribute>) {
        if let NodeData::Element { attributes, .. } = &mut target.borrow_mut().data {
            for attr in attrs {
                let key = attr.name.local.to_string();
                if !attributes.iter().any(|(k, _)| k == &key) {
                    attributes.push((key, attr.value.to_string()));
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        Self::detach(target);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let children = std::mem::take(&mut node.borrow_mut().children);
        for child in &children {
            child.borrow_mut().parent = Some(Rc::downgrade(new_parent));
        }
        new_parent.borrow_mut().children.extend(children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element_names(handle: &Handle, out: &mut Vec<String>) {
        let node = handle.borrow();
        if let NodeData::Element { name, .. } = &node.data {
            out.push(name.local.to_string());
        }
        for child in &node.children {
            element_names(child, out);
        }
    }

    #[test]
    fn test_builds_implied_structure() {
        let document = parse_markup("<div class=\"a\"><p>Hi</p></div>");
        let mut names = Vec::new();
        element_names(&document.root, &mut names);
        assert_eq!(names, vec!["html", "head", "body", "div", "p"]);
    }

    #[test]
    fn test_attributes_are_kept() {
        let document = parse_markup("<!DOCTYPE html><body><span CLASS=\"x y\" id=\"s\"></span></body>");
        let root = document.root.borrow();
        let html = root.children[0].borrow();
        let body = html.children[1].borrow();
        let span = body.children[0].borrow();
        assert_eq!(span.attribute("class"), Some("x y"));
        assert_eq!(span.attribute("id"), Some("s"));
    }

    #[test]
    fn test_text_is_merged() {
        let document = parse_markup("<p>a &amp; b</p>");
        let root = document.root.borrow();
        let html = root.children[0].borrow();
        let body = html.children[1].borrow();
        let p = body.children[0].borrow();
        assert_eq!(p.children.len(), 1);
        let child = p.children[0].borrow();
        match &child.data {
            NodeData::Text(text) => assert_eq!(text, "a & b"),
            other => panic!("expected text, got {:?}", other),
        };
    }
}
