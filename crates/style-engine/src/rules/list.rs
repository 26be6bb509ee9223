//! List item casing and terminal punctuation
//!
//! Character (bulleted) lists read as one sentence: the first item starts
//! with a capital and ends with a comma, later items start lower-case and
//! end with a dot. Every item of a numbered list is its own sentence.

use shared_types::{BulletKind, ErrorKind, Violation};

use crate::document::{DocumentTree, NodeId};
use crate::error::EngineError;
use crate::registry::StyleRegistry;

/// Check the immediate items of a list.
///
/// Fails when the list's style cannot be resolved: without a bullet kind
/// there is no rule to apply.
pub fn check_list(
    tree: &DocumentTree<'_, '_>,
    registry: &StyleRegistry,
    list: NodeId,
) -> Result<Option<Violation>, EngineError> {
    let style_name = tree.attribute(list, "style-name").unwrap_or_default();
    let bullet = registry.bullet_kind(style_name)?;

    let items: Vec<String> = tree
        .children(list)
        .iter()
        .copied()
        .filter(|&child| tree.tag(child) == "list-item")
        .map(|item| tree.inner_text(item))
        .collect();

    let kinds: Vec<ErrorKind> = [casing_violation(bullet, &items), punctuation_violation(bullet, &items)]
        .into_iter()
        .flatten()
        .collect();

    if kinds.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Violation::new(items.join("\n"), kinds)))
    }
}

fn starts_upper(item: &str) -> bool {
    item.chars().next().is_some_and(char::is_uppercase)
}

fn starts_lower(item: &str) -> bool {
    item.chars().next().is_some_and(char::is_lowercase)
}

fn casing_violation(bullet: BulletKind, items: &[String]) -> Option<ErrorKind> {
    let broken = match bullet {
        BulletKind::Character => items.iter().enumerate().any(|(index, item)| {
            if index == 0 {
                !starts_upper(item)
            } else {
                !starts_lower(item)
            }
        }),
        BulletKind::Numbered => items.iter().any(|item| !starts_upper(item)),
    };
    broken.then_some(ErrorKind::ListFirstChar(bullet))
}

fn punctuation_violation(bullet: BulletKind, items: &[String]) -> Option<ErrorKind> {
    let broken = match bullet {
        BulletKind::Character => items.iter().enumerate().any(|(index, item)| {
            let mark = if index == 0 { ',' } else { '.' };
            !item.ends_with(mark)
        }),
        BulletKind::Numbered => items.iter().any(|item| !item.ends_with('.')),
    };
    broken.then_some(ErrorKind::ListLastChar(bullet))
}
