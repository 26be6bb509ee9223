//! Paragraph formatting as declared by an automatic style

use serde::{Deserialize, Serialize};

use crate::ErrorKind;

/// Formatting attributes of one style, kept in the document's own string
/// encodings (`"14pt"`, `"-1.85cm"`, `"#000000"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleInfo {
    pub font_name: String,
    pub font_size: String,
    pub margin_right: String,
    pub margin_left: String,
    pub text_indent: String,
    pub text_align: String,
    pub padding_top: String,
    pub padding_bottom: String,
    pub color: String,
}

impl StyleInfo {
    /// The house standard every paragraph style is compared against
    pub fn correct() -> Self {
        Self {
            font_name: "Times New Roman".to_string(),
            font_size: "14pt".to_string(),
            margin_right: "-1.85cm".to_string(),
            margin_left: "-1.75cm".to_string(),
            text_indent: "1.25cm".to_string(),
            text_align: "justify".to_string(),
            padding_top: "0cm".to_string(),
            padding_bottom: "0cm".to_string(),
            color: "#000000".to_string(),
        }
    }

    /// Compare field by field against `reference`.
    ///
    /// Each differing field yields exactly one kind, always in declaration
    /// order, so equal styles always report equal lists.
    pub fn violations_against(&self, reference: &StyleInfo) -> Vec<ErrorKind> {
        let checks = [
            (&self.font_name, &reference.font_name, ErrorKind::Font),
            (&self.font_size, &reference.font_size, ErrorKind::Size),
            (&self.margin_right, &reference.margin_right, ErrorKind::MarginRight),
            (&self.margin_left, &reference.margin_left, ErrorKind::MarginLeft),
            (&self.text_indent, &reference.text_indent, ErrorKind::TextIndent),
            (&self.text_align, &reference.text_align, ErrorKind::Alignment),
            (&self.padding_top, &reference.padding_top, ErrorKind::PaddingTop),
            (&self.padding_bottom, &reference.padding_bottom, ErrorKind::PaddingBottom),
            (&self.color, &reference.color, ErrorKind::Color),
        ];

        checks
            .into_iter()
            .filter(|(actual, expected, _)| actual != expected)
            .map(|(_, _, kind)| kind)
            .collect()
    }

    /// Shorthand for [`violations_against`](Self::violations_against) the house standard
    pub fn violations(&self) -> Vec<ErrorKind> {
        self.violations_against(&Self::correct())
    }
}

/// Values assumed for every attribute a style declaration leaves out
impl Default for StyleInfo {
    fn default() -> Self {
        Self {
            font_name: "Liberation Serif".to_string(),
            font_size: "12pt".to_string(),
            margin_right: "0cm".to_string(),
            margin_left: "0cm".to_string(),
            text_indent: "0cm".to_string(),
            text_align: String::new(),
            padding_top: "0cm".to_string(),
            padding_bottom: "0cm".to_string(),
            color: "#000000".to_string(),
        }
    }
}
