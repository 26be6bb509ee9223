//! Style registry
//!
//! Built in a single pass over the immediate children of
//! `office:automatic-styles`, before the body is walked. Paragraph and
//! heading styles are resolved against [`StyleInfo::default`], compared with
//! the house standard and memoized as a list of [`ErrorKind`]s. List styles
//! are reduced to their [`BulletKind`]. Footer detection updates the run's
//! [`CheckerState`] as a side effect.

use std::collections::HashMap;

use roxmltree::Node;
use shared_types::{BulletKind, CheckerState, ErrorKind, StyleInfo};
use tracing::{debug, warn};

use crate::document::{DocumentTree, NodeId};
use crate::error::EngineError;

/// Parent style name LibreOffice gives to footer paragraphs
const FOOTER_PARENT_STYLE: &str = "Footer";

/// Alignment expected for the page number in the footer
const FOOTER_ALIGNMENT: &str = "center";

/// Lookup tables frozen once the automatic styles are read
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, Vec<ErrorKind>>,
    list_styles: HashMap<String, BulletKind>,
}

/// A `style:style` element after overlaying its properties on the defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub name: String,
    pub info: StyleInfo,
    pub parent_style_name: Option<String>,
    pub has_master_page: bool,
}

impl ResolvedStyle {
    pub fn is_footer(&self) -> bool {
        self.parent_style_name.as_deref() == Some(FOOTER_PARENT_STYLE)
            && self.info.text_align == FOOTER_ALIGNMENT
    }
}

impl StyleRegistry {
    /// Read every style declared directly under `automatic_styles`.
    /// A later declaration replaces an earlier one with the same name.
    pub fn build(
        tree: &DocumentTree<'_, '_>,
        automatic_styles: NodeId,
        state: &mut CheckerState,
    ) -> Self {
        let mut registry = Self::default();

        for &child in tree.children(automatic_styles) {
            match tree.tag(child) {
                "style" => {
                    let resolved = resolve_style(tree, child);

                    if resolved.is_footer() {
                        debug!("Footer style found: {}", resolved.name);
                        state.mark_footer_present();
                    }
                    if resolved.has_master_page {
                        debug!("Style {} starts a master page", resolved.name);
                        state.mark_footer_suppressed();
                    }

                    let violations = resolved.info.violations();
                    debug!(
                        "Registered style {} with {} violation(s)",
                        resolved.name,
                        violations.len()
                    );
                    registry.styles.insert(resolved.name, violations);
                }
                "list-style" => {
                    let name = tree.attribute(child, "name").unwrap_or_default();
                    let kind = bullet_kind(tree, child);
                    debug!("Registered list style {} as {:?}", name, kind);
                    registry.list_styles.insert(name.to_string(), kind);
                }
                _ => {}
            }
        }

        registry
    }

    /// Style violations for a paragraph or heading style reference.
    ///
    /// Unknown names are not fatal: they yield `[InvalidStyle]`.
    pub fn style_violations(&self, name: &str) -> Vec<ErrorKind> {
        match self.styles.get(name) {
            Some(violations) => violations.clone(),
            None => {
                warn!("Reference to unknown style: {}", name);
                vec![ErrorKind::InvalidStyle]
            }
        }
    }

    /// Bullet kind of a list style. Unknown names end the run.
    pub fn bullet_kind(&self, name: &str) -> Result<BulletKind, EngineError> {
        self.list_styles
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnresolvedListStyle(name.to_string()))
    }

    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    pub fn list_style_count(&self) -> usize {
        self.list_styles.len()
    }
}

/// Copy the defaults, then overlay whatever the declaration sets
pub fn resolve_style(tree: &DocumentTree<'_, '_>, style: NodeId) -> ResolvedStyle {
    let mut info = StyleInfo::default();

    for &child in tree.children(style) {
        let raw = tree.node(child).raw;
        match tree.tag(child) {
            "text-properties" => overlay_text_properties(&mut info, raw),
            "paragraph-properties" => overlay_paragraph_properties(&mut info, raw),
            _ => {}
        }
    }

    ResolvedStyle {
        name: tree.attribute(style, "name").unwrap_or_default().to_string(),
        info,
        parent_style_name: tree.attribute(style, "parent-style-name").map(str::to_string),
        has_master_page: tree.attribute(style, "master-page-name").is_some(),
    }
}

fn overlay_text_properties(info: &mut StyleInfo, properties: Node<'_, '_>) {
    for attr in properties.attributes() {
        let value = attr.value().to_string();
        match attr.name() {
            "font-name" => info.font_name = value,
            "font-size" => info.font_size = value,
            "color" => info.color = value,
            _ => {}
        }
    }
}

fn overlay_paragraph_properties(info: &mut StyleInfo, properties: Node<'_, '_>) {
    for attr in properties.attributes() {
        let value = attr.value().to_string();
        match attr.name() {
            "margin-right" => info.margin_right = value,
            "margin-left" => info.margin_left = value,
            "text-indent" => info.text_indent = value,
            "text-align" => info.text_align = value,
            "padding-top" => info.padding_top = value,
            "padding-bottom" => info.padding_bottom = value,
            _ => {}
        }
    }
}

/// Character lists start with a bullet level style; everything else counts
/// as numbered.
fn bullet_kind(tree: &DocumentTree<'_, '_>, list_style: NodeId) -> BulletKind {
    let first_level = tree
        .children(list_style)
        .iter()
        .copied()
        .find(|&child| tree.tag(child).starts_with("list-level-style"));

    match first_level.map(|level| tree.tag(level)) {
        Some("list-level-style-bullet") => BulletKind::Character,
        _ => BulletKind::Numbered,
    }
}
