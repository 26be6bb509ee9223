//! Errors that end a style check

use thiserror::Error;

/// A run either produces the full ordered violation list or one of these.
/// Rule violations are never reported through this type.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Archive entry not found: {0}")]
    MissingEntry(String),

    #[error("Malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Document section not found: {0}")]
    MissingSection(&'static str),

    #[error("Unresolved list style: '{0}'")]
    UnresolvedListStyle(String),
}
