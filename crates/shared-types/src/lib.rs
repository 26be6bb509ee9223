//! Data model shared by the style engine and the command-line shell

pub mod kind;
pub mod style;
pub mod types;

pub use kind::{BulletKind, ErrorKind};
pub use style::StyleInfo;
pub use types::{
    CheckerState, Report, ReportStatus, Violation, ALL_CORRECT, DOCUMENT_MARKER,
    MAX_UNDERLINE_WIDTH, REMEDIATION_HEADER, REPORT_HEADER, UNCAPTIONED_IMAGE,
};
