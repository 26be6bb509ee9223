//! Image spacing and caption conventions
//!
//! An image paragraph must be surrounded by blank paragraphs and followed,
//! within two siblings, by a caption such as `Рисунок 2.1 - Схема стенда`.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ErrorKind, Violation, UNCAPTIONED_IMAGE};

use crate::document::{DocumentTree, NodeId};

/// First token of every caption
pub const FIGURE_KEYWORD: &str = "Рисунок";

/// Separator between the figure number and its title
pub const CAPTION_SEPARATOR: &str = "-";

/// How many following siblings may hold the caption
pub const CAPTION_LOOKAHEAD: usize = 2;

lazy_static! {
    /// Section-based figure number: `3`, `1.2`, `2.4.1`
    static ref FIGURE_NUMBER_PATTERN: Regex = Regex::new(r"^\d+(\.\d+)*$").unwrap();
}

/// Check an image paragraph found at `index` among its parent's children.
pub fn check_image(tree: &DocumentTree<'_, '_>, paragraph: NodeId, index: usize) -> Option<Violation> {
    if tree.has_annotation(paragraph) {
        return None;
    }
    tree.find_descendant(paragraph, "image")?;
    if !is_owned_by_body_text(tree, paragraph) {
        return None;
    }

    let parent = tree.parent(paragraph)?;
    let siblings = tree.children(parent);
    let is_blank = |sibling: Option<&NodeId>| sibling.is_some_and(|&s| tree.inner_text(s).is_empty());

    let mut kinds = Vec::new();

    let above = index.checked_sub(1).and_then(|i| siblings.get(i));
    if !is_blank(above) {
        kinds.push(ErrorKind::ImageSpacingAbove);
    }
    if !is_blank(siblings.get(index + 1)) {
        kinds.push(ErrorKind::ImageSpacingBelow);
    }

    let caption = siblings
        .iter()
        .skip(index + 1)
        .take(CAPTION_LOOKAHEAD)
        .copied()
        .find(|&s| tree.tag(s) == "p" && !tree.inner_text(s).is_empty());

    let caption_text = match caption {
        Some(caption) if tree.has_annotation(caption) => return None,
        Some(caption) => Some(tree.inner_text(caption)),
        None => None,
    };

    if !caption_text.as_deref().is_some_and(is_valid_caption) {
        kinds.push(ErrorKind::ImageCaption);
    }

    if kinds.is_empty() {
        None
    } else {
        let text = caption_text.unwrap_or_else(|| UNCAPTIONED_IMAGE.to_string());
        Some(Violation::new(text, kinds))
    }
}

/// Only paragraphs sitting directly in the body text are checked; images in
/// frames, sections or table cells are left to their enclosing paragraph.
fn is_owned_by_body_text(tree: &DocumentTree<'_, '_>, paragraph: NodeId) -> bool {
    let chain: Vec<&str> = tree
        .ancestors(paragraph)
        .into_iter()
        .take(2)
        .map(|ancestor| tree.tag(ancestor))
        .collect();
    chain == ["text", "body"]
}

/// `Рисунок <number> - <title…>`
pub fn is_valid_caption(caption: &str) -> bool {
    let tokens: Vec<&str> = caption.split_whitespace().collect();
    matches!(
        tokens.as_slice(),
        [keyword, number, separator, ..]
            if *keyword == FIGURE_KEYWORD
                && FIGURE_NUMBER_PATTERN.is_match(number)
                && *separator == CAPTION_SEPARATOR
    )
}
