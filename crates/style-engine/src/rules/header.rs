//! Heading punctuation and spacing

use shared_types::{ErrorKind, Violation};

use super::referenced_style_violations;
use crate::document::{DocumentTree, NodeId};
use crate::registry::StyleRegistry;

/// Check a heading given its immediate next sibling, if any.
///
/// `HeaderNewline` fires when the heading is the last node of its parent or
/// when the numeral prefix is directly followed by a dot (`1.Введение`,
/// `2. Обзор`). `HeaderDot` fires when the last character is a dot;
/// trailing whitespace counts as that last character.
pub fn check_header(
    tree: &DocumentTree<'_, '_>,
    registry: &StyleRegistry,
    heading: NodeId,
    next: Option<NodeId>,
) -> Option<Violation> {
    if tree.has_annotation(heading) {
        return None;
    }

    let text = tree.inner_text(heading);
    if text.is_empty() {
        return None;
    }

    let mut kinds = Vec::new();

    let after_numeral = text.chars().find(|c| !c.is_numeric());
    if next.is_none() || after_numeral == Some('.') {
        kinds.push(ErrorKind::HeaderNewline);
    }

    if text.ends_with('.') {
        kinds.push(ErrorKind::HeaderDot);
    }

    kinds.extend(referenced_style_violations(tree, registry, heading));

    if kinds.is_empty() {
        None
    } else {
        Some(Violation::new(text, kinds))
    }
}
