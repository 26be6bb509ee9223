//! Document walker and error aggregation
//!
//! The walker visits the body text in document order and hands each node to
//! one of the leaf checkers. Tables are skipped, a table of contents only
//! raises the run's `toc_present` flag, and any other container is entered
//! transparently.

use shared_types::{CheckerState, Violation};
use tracing::{debug, trace};

use crate::document::{DocumentTree, NodeId};
use crate::error::EngineError;
use crate::registry::StyleRegistry;
use crate::rules::{check_header, check_image, check_list, check_paragraph};

/// Collects violations in traversal order
#[derive(Debug, Default)]
pub struct ErrorAggregator {
    violations: Vec<Violation>,
}

impl ErrorAggregator {
    pub fn push(&mut self, violation: Option<Violation>) {
        self.violations.extend(violation);
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Append the document-level violation, if any global check failed, and
    /// hand back the ordered list.
    pub fn finish(mut self, state: &CheckerState) -> Vec<Violation> {
        let global = state.global_violations();
        if !global.is_empty() {
            self.violations.push(Violation::document(global));
        }
        self.violations
    }
}

pub struct DocumentWalker<'r, 'a, 'input> {
    tree: &'r DocumentTree<'a, 'input>,
    registry: &'r StyleRegistry,
    state: &'r mut CheckerState,
    aggregator: ErrorAggregator,
}

impl<'r, 'a, 'input> DocumentWalker<'r, 'a, 'input> {
    pub fn new(
        tree: &'r DocumentTree<'a, 'input>,
        registry: &'r StyleRegistry,
        state: &'r mut CheckerState,
    ) -> Self {
        Self {
            tree,
            registry,
            state,
            aggregator: ErrorAggregator::default(),
        }
    }

    /// Walk every child of `parent`, recursing through plain containers
    pub fn walk(&mut self, parent: NodeId) -> Result<(), EngineError> {
        let tree = self.tree;
        let children = tree.children(parent);

        for (index, &child) in children.iter().enumerate() {
            trace!("Visiting <{}> #{}", tree.tag(child), child);

            match tree.tag(child) {
                "table" => {}
                "p" => {
                    self.aggregator
                        .push(check_paragraph(tree, self.registry, child));
                    self.aggregator.push(check_image(tree, child, index));
                }
                "h" => {
                    let next = children.get(index + 1).copied();
                    self.aggregator
                        .push(check_header(tree, self.registry, child, next));
                }
                "table-of-content" => {
                    debug!("Table of contents found");
                    self.state.mark_toc_present();
                }
                "list" => {
                    let violation = check_list(tree, self.registry, child)?;
                    self.aggregator.push(violation);
                }
                _ => self.walk(child)?,
            }
        }

        Ok(())
    }

    /// Finish the run: per-node violations first, the document-level one last
    pub fn finish(self) -> Vec<Violation> {
        self.aggregator.finish(self.state)
    }
}
