//! Leaf rule evaluators
//!
//! Each checker inspects one node of the normalized tree against the frozen
//! [`StyleRegistry`] and returns at most one [`Violation`](shared_types::Violation).

pub mod header;
pub mod image;
pub mod list;
pub mod paragraph;

use shared_types::ErrorKind;

use crate::document::{DocumentTree, NodeId};
use crate::registry::StyleRegistry;

pub use header::check_header;
pub use image::check_image;
pub use list::check_list;
pub use paragraph::check_paragraph;

/// Violations of the style a node references. A node without a
/// `style-name` attribute has nothing to resolve.
pub(crate) fn referenced_style_violations(
    tree: &DocumentTree<'_, '_>,
    registry: &StyleRegistry,
    id: NodeId,
) -> Vec<ErrorKind> {
    tree.attribute(id, "style-name")
        .map(|name| registry.style_violations(name))
        .unwrap_or_default()
}
