//! Body paragraph formatting

use shared_types::Violation;

use super::referenced_style_violations;
use crate::document::{DocumentTree, NodeId};
use crate::registry::StyleRegistry;

/// Report the style violations of a non-empty, non-annotated paragraph
pub fn check_paragraph(
    tree: &DocumentTree<'_, '_>,
    registry: &StyleRegistry,
    paragraph: NodeId,
) -> Option<Violation> {
    let text = tree.inner_text(paragraph);
    if text.is_empty() || tree.has_annotation(paragraph) {
        return None;
    }

    let kinds = referenced_style_violations(tree, registry, paragraph);
    if kinds.is_empty() {
        None
    } else {
        Some(Violation::new(text, kinds))
    }
}
