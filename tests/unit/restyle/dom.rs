/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A tiny in-memory DOM to style.

use std::fmt;
use std::ptr;

use restyle::dom::{ElementState, HTML_NAMESPACE, OpaqueElement, TElement};
use restyle::properties::declaration_block::PropertyDeclarationBlock;
use servo_arc::Arc;

struct Node {
    local_name: String,
    parent: Option<usize>,
    children: Vec<usize>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    state: ElementState,
    is_link: bool,
    has_text: bool,
    style_attribute: Option<Arc<PropertyDeclarationBlock>>,
    presentational_hints: Option<Arc<PropertyDeclarationBlock>>,
    is_shadow_host: bool,
}

/// A document built up front and only read while styling.
pub struct TestDocument {
    nodes: Vec<Node>,
}

impl TestDocument {
    /// A document whose root element is `<local_name>`.
    pub fn new(local_name: &str) -> Self {
        let mut document = TestDocument { nodes: vec![] };
        document.push_node(local_name, None);
        document
    }

    fn push_node(&mut self, local_name: &str, parent: Option<usize>) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node {
            local_name: local_name.to_owned(),
            parent,
            children: vec![],
            id: None,
            classes: vec![],
            attributes: vec![],
            state: ElementState::empty(),
            is_link: false,
            has_text: false,
            style_attribute: None,
            presentational_hints: None,
            is_shadow_host: false,
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(index);
        }
        index
    }

    pub const ROOT: usize = 0;

    /// Appends a `<local_name>` child to `parent`.
    pub fn append(&mut self, parent: usize, local_name: &str) -> usize {
        self.push_node(local_name, Some(parent))
    }

    pub fn set_id(&mut self, node: usize, id: &str) {
        self.nodes[node].id = Some(id.to_owned());
    }

    pub fn add_class(&mut self, node: usize, class: &str) {
        self.nodes[node].classes.push(class.to_owned());
    }

    pub fn set_attribute(&mut self, node: usize, name: &str, value: &str) {
        self.nodes[node].attributes.push((name.to_owned(), value.to_owned()));
    }

    /// Makes `node` a link, visited or not.
    pub fn make_link(&mut self, node: usize, visited: bool) {
        self.nodes[node].is_link = true;
        if visited {
            self.nodes[node].state.insert(ElementState::VISITED);
        }
    }

    pub fn set_state(&mut self, node: usize, state: ElementState) {
        self.nodes[node].state = state;
    }

    pub fn set_has_text(&mut self, node: usize) {
        self.nodes[node].has_text = true;
    }

    pub fn set_style_attribute(&mut self, node: usize, block: PropertyDeclarationBlock) {
        self.nodes[node].style_attribute = Some(Arc::new(block));
    }

    pub fn set_presentational_hints(&mut self, node: usize, block: PropertyDeclarationBlock) {
        self.nodes[node].presentational_hints = Some(Arc::new(block));
    }

    pub fn make_shadow_host(&mut self, node: usize) {
        self.nodes[node].is_shadow_host = true;
    }

    pub fn element(&self, node: usize) -> TestElement<'_> {
        TestElement {
            document: self,
            index: node,
        }
    }

    pub fn root(&self) -> TestElement<'_> {
        self.element(Self::ROOT)
    }
}

/// A handle to an element of a [`TestDocument`].
#[derive(Clone, Copy)]
pub struct TestElement<'a> {
    document: &'a TestDocument,
    index: usize,
}

impl<'a> TestElement<'a> {
    fn node(&self) -> &'a Node {
        &self.document.nodes[self.index]
    }

    fn sibling(&self, offset: isize) -> Option<Self> {
        let parent = self.node().parent?;
        let siblings = &self.document.nodes[parent].children;
        let position = siblings.iter().position(|&index| index == self.index)?;
        let sibling = position.checked_add_signed(offset)?;
        siblings.get(sibling).map(|&index| self.document.element(index))
    }
}

impl PartialEq for TestElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.document, other.document) && self.index == other.index
    }
}

impl Eq for TestElement<'_> {}

impl fmt::Debug for TestElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{} #{}>", self.node().local_name, self.index)
    }
}

impl<'a> TElement for TestElement<'a> {
    fn opaque(&self) -> OpaqueElement {
        OpaqueElement::new(self.node())
    }

    fn parent_element(&self) -> Option<Self> {
        self.node().parent.map(|index| self.document.element(index))
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        self.sibling(-1)
    }

    fn next_sibling_element(&self) -> Option<Self> {
        self.sibling(1)
    }

    fn first_element_child(&self) -> Option<Self> {
        self.node().children.first().map(|&index| self.document.element(index))
    }

    fn is_empty(&self) -> bool {
        self.node().children.is_empty() && !self.node().has_text
    }

    fn local_name(&self) -> &str {
        &self.node().local_name
    }

    fn namespace(&self) -> &str {
        HTML_NAMESPACE
    }

    fn id(&self) -> Option<&str> {
        self.node().id.as_deref()
    }

    fn each_class<F>(&self, mut callback: F)
    where
        F: FnMut(&str),
    {
        for class in &self.node().classes {
            callback(class);
        }
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.node()
            .attributes
            .iter()
            .find(|(attribute, _)| attribute == name)
            .map(|(_, value)| value.as_str())
    }

    fn state(&self) -> ElementState {
        self.node().state
    }

    fn is_link(&self) -> bool {
        self.node().is_link
    }

    fn style_attribute(&self) -> Option<Arc<PropertyDeclarationBlock>> {
        self.node().style_attribute.clone()
    }

    fn presentational_hints(&self) -> Option<Arc<PropertyDeclarationBlock>> {
        self.node().presentational_hints.clone()
    }

    fn is_shadow_host(&self) -> bool {
        self.node().is_shadow_host
    }
}
