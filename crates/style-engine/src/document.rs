//! Namespace-free view of a parsed content tree
//!
//! The raw XML tree keeps qualified names (`text:p`, `office:body`). Rules
//! only care about local names, so the tree is normalized once into an
//! index-addressed arena: every element becomes a [`DocumentNode`] holding its
//! local tag, its parent index and its children indices, in document order.
//! Attributes and text stay on the underlying `roxmltree` node.

use roxmltree::Node;

/// Index of a node inside a [`DocumentTree`]
pub type NodeId = usize;

/// Tags that mark annotated (commented or draft) content
const ANNOTATION_TAGS: &[&str] = &["annotation", "annotation-end"];

/// One element of the normalized tree
#[derive(Debug, Clone)]
pub struct DocumentNode<'a, 'input> {
    /// Local name, namespace prefix removed
    pub tag: String,
    /// Underlying element, used for attribute and text lookup
    pub raw: Node<'a, 'input>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Immutable arena of [`DocumentNode`]s. The document root is always `0`.
#[derive(Debug)]
pub struct DocumentTree<'a, 'input> {
    nodes: Vec<DocumentNode<'a, 'input>>,
}

impl<'a, 'input> DocumentTree<'a, 'input> {
    /// Normalize every element under the document root
    pub fn from_document(document: &'a roxmltree::Document<'input>) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.push(document.root_element(), None);
        tree
    }

    fn push(&mut self, raw: Node<'a, 'input>, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(DocumentNode {
            tag: raw.tag_name().name().to_string(),
            raw,
            parent,
            children: Vec::new(),
        });

        for child in raw.children().filter(Node::is_element) {
            let child_id = self.push(child, Some(id));
            self.nodes[id].children.push(child_id);
        }

        id
    }

    pub fn root(&self) -> NodeId {
        0
    }

    /// Number of elements, root included; never zero
    pub fn element_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &DocumentNode<'a, 'input> {
        &self.nodes[id]
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id].tag
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Parent, grandparent and so on up to the root
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        std::iter::successors(self.parent(id), |&current| self.parent(current)).collect()
    }

    /// First immediate child with the given tag
    pub fn child_by_tag(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.tag(child) == tag)
    }

    /// First descendant (excluding `id` itself) with the given tag, in
    /// document order
    pub fn find_descendant(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            if self.tag(current) == tag {
                return Some(current);
            }
            stack.extend(self.children(current).iter().rev().copied());
        }
        None
    }

    /// Whether the subtree holds an annotation start or end marker
    pub fn has_annotation(&self, id: NodeId) -> bool {
        ANNOTATION_TAGS
            .iter()
            .any(|tag| self.find_descendant(id, tag).is_some())
    }

    /// Attribute value looked up by local name, ignoring its namespace
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&'a str> {
        self.nodes[id]
            .raw
            .attributes()
            .find(|attr| attr.name() == name)
            .map(|attr| attr.value())
    }

    /// All descendant text concatenated in document order, no separators
    pub fn inner_text(&self, id: NodeId) -> String {
        self.nodes[id]
            .raw
            .descendants()
            .filter(Node::is_text)
            .filter_map(|node| node.text())
            .collect()
    }
}
