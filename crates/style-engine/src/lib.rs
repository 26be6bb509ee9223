//! House-style checker for OpenDocument text files
//!
//! A run reads `content.xml` from the document container, normalizes it into
//! a namespace-free tree, builds the [`StyleRegistry`] from the automatic
//! styles, walks the body text and returns an ordered list of
//! [`Violation`]s. Global checks (footer, table of contents) end up in one
//! document-level violation appended last.
//!
//! # Example
//! ```no_run
//! use style_engine::{EngineError, StyleChecker};
//!
//! fn check(path: &str) -> Result<(), EngineError> {
//!     let violations = StyleChecker::new().run(path)?;
//!     for violation in &violations {
//!         println!("{violation}\n");
//!     }
//!     Ok(())
//! }
//! ```

pub mod container;
pub mod document;
pub mod error;
pub mod registry;
pub mod rules;
pub mod walker;

#[cfg(test)]
mod test_support;

use std::path::Path;

use shared_types::{CheckerState, Report, Violation};
use tracing::{debug, info};

pub use container::{Container, CONTENT_ENTRY};
pub use document::{DocumentNode, DocumentTree, NodeId};
pub use error::EngineError;
pub use registry::StyleRegistry;
pub use walker::{DocumentWalker, ErrorAggregator};

/// Entry point of the engine. Holds no state between runs.
pub struct StyleChecker;

impl StyleChecker {
    pub fn new() -> Self {
        Self
    }

    /// Check the document container at `path`
    pub fn run(&self, path: impl AsRef<Path>) -> Result<Vec<Violation>, EngineError> {
        let path = path.as_ref();
        info!("Checking {}", path.display());

        let container = Container::open(path)?;
        let content = container.read_entry(CONTENT_ENTRY)?;
        let violations = self.check_content(&content)?;

        info!(
            "Finished {}: {} violation(s)",
            path.display(),
            violations.len()
        );
        Ok(violations)
    }

    /// Check the document and wrap the result in a [`Report`]
    pub fn report(&self, path: impl AsRef<Path>) -> Result<Report, EngineError> {
        let path = path.as_ref();
        let violations = self.run(path)?;
        Ok(Report::new(path.display().to_string(), violations))
    }

    /// Check an already extracted `content.xml`
    pub fn check_content(&self, xml: &str) -> Result<Vec<Violation>, EngineError> {
        let document = roxmltree::Document::parse(xml)?;
        let tree = DocumentTree::from_document(&document);
        debug!("Normalized {} elements", tree.element_count());

        let mut state = CheckerState::default();
        let registry = match tree.child_by_tag(tree.root(), "automatic-styles") {
            Some(automatic_styles) => StyleRegistry::build(&tree, automatic_styles, &mut state),
            None => StyleRegistry::default(),
        };
        debug!(
            "Registry holds {} style(s) and {} list style(s)",
            registry.style_count(),
            registry.list_style_count()
        );

        let body = tree
            .child_by_tag(tree.root(), "body")
            .ok_or(EngineError::MissingSection("body"))?;
        let text = tree
            .child_by_tag(body, "text")
            .ok_or(EngineError::MissingSection("text"))?;

        let mut walker = DocumentWalker::new(&tree, &registry, &mut state);
        walker.walk(text)?;
        Ok(walker.finish())
    }
}

impl Default for StyleChecker {
    fn default() -> Self {
        Self::new()
    }
}
