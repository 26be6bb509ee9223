use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ErrorKind;

/// Longest underline drawn below an offending text
pub const MAX_UNDERLINE_WIDTH: usize = 80;

/// Text of the synthetic violation carrying document-wide checks
pub const DOCUMENT_MARKER: &str = "[Документ]";

/// Text of an image violation when no caption paragraph was found
pub const UNCAPTIONED_IMAGE: &str = "[Рисунок без подписи]";

/// Introduces the remediation list of every rendered violation
pub const REMEDIATION_HEADER: &str = "Исправить оформление на:";

/// Heading of a rendered report, followed by the input file name
pub const REPORT_HEADER: &str = "Проверка оформления:";

/// Shown instead of a violation list when nothing was found
pub const ALL_CORRECT: &str = "Документ оформлен правильно.";

/// One offending text span and every rule it breaks, in detection order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub text: String,
    pub kinds: Vec<ErrorKind>,
}

impl Violation {
    pub fn new(text: impl Into<String>, kinds: Vec<ErrorKind>) -> Self {
        Self {
            text: text.into(),
            kinds,
        }
    }

    /// Document-level violation for the global checks
    pub fn document(kinds: Vec<ErrorKind>) -> Self {
        Self::new(DOCUMENT_MARKER, kinds)
    }

    pub fn underline(&self) -> String {
        "-".repeat(self.text.chars().count().min(MAX_UNDERLINE_WIDTH))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;
        writeln!(f, "{}", self.underline())?;
        write!(f, "{}", REMEDIATION_HEADER)?;
        for kind in &self.kinds {
            write!(f, "\n  • {}", kind.remediation())?;
        }
        Ok(())
    }
}

/// Run-scoped document-wide flags. They only ever go from `false` to `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckerState {
    pub footer_present: bool,
    pub footer_suppressed_on_first_page: bool,
    pub toc_present: bool,
}

impl CheckerState {
    pub fn mark_footer_present(&mut self) {
        self.footer_present = true;
    }

    pub fn mark_footer_suppressed(&mut self) {
        self.footer_suppressed_on_first_page = true;
    }

    pub fn mark_toc_present(&mut self) {
        self.toc_present = true;
    }

    /// Kinds raised by the document-wide checks, in fixed order
    pub fn global_violations(&self) -> Vec<ErrorKind> {
        let mut kinds = Vec::new();
        if !self.footer_present {
            kinds.push(ErrorKind::FooterAbsent);
        }
        if !self.footer_present && !self.footer_suppressed_on_first_page {
            kinds.push(ErrorKind::FooterOnTitlePage);
        }
        if !self.toc_present {
            kinds.push(ErrorKind::MissingToc);
        }
        kinds
    }
}

/// Overall outcome of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Correct,
    HasViolations,
}

/// Ordered result of checking one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub input_file: String,
    pub status: ReportStatus,
    pub violations: Vec<Violation>,
    pub checked_at: u64,
}

impl Report {
    pub fn new(input_file: impl Into<String>, violations: Vec<Violation>) -> Self {
        let status = if violations.is_empty() {
            ReportStatus::Correct
        } else {
            ReportStatus::HasViolations
        };
        Self {
            input_file: input_file.into(),
            status,
            violations,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    pub fn is_correct(&self) -> bool {
        self.status == ReportStatus::Correct
    }

    /// Human-readable rendering of the whole report
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", REPORT_HEADER, self.input_file));
        output.push_str(&"=".repeat(60));
        output.push_str("\n\n");

        if self.violations.is_empty() {
            output.push_str(ALL_CORRECT);
            output.push('\n');
            return output;
        }

        let rendered: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        output.push_str(&rendered.join("\n\n"));
        output.push('\n');
        output
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_violation_rendering() {
        let violation = Violation::new("Введение.", vec![ErrorKind::HeaderDot, ErrorKind::Font]);
        assert_eq!(
            violation.to_string(),
            "Введение.\n---------\nИсправить оформление на:\n  • в конце заголовка точка не ставится\n  • шрифт Times New Roman"
        );
    }

    #[test]
    fn test_underline_is_capped() {
        let violation = Violation::new("x".repeat(500), vec![ErrorKind::Size]);
        assert_eq!(violation.underline().len(), MAX_UNDERLINE_WIDTH);
    }

    #[test]
    fn test_underline_counts_characters_not_bytes() {
        let violation = Violation::new("Рисунок", vec![ErrorKind::ImageCaption]);
        assert_eq!(violation.underline(), "-------");
    }

    #[test]
    fn test_global_violations_all_flags_unset() {
        assert_eq!(
            CheckerState::default().global_violations(),
            vec![
                ErrorKind::FooterAbsent,
                ErrorKind::FooterOnTitlePage,
                ErrorKind::MissingToc
            ]
        );
    }

    #[test]
    fn test_global_violations_suppressed_first_page_only() {
        let mut state = CheckerState::default();
        state.mark_footer_suppressed();
        state.mark_toc_present();
        assert_eq!(state.global_violations(), vec![ErrorKind::FooterAbsent]);
    }

    #[test]
    fn test_global_violations_all_set() {
        let mut state = CheckerState::default();
        state.mark_footer_present();
        state.mark_footer_suppressed();
        state.mark_toc_present();
        assert!(state.global_violations().is_empty());
    }

    #[test]
    fn test_empty_report_renders_all_correct() {
        let report = Report::new("thesis.odt", vec![]);
        assert!(report.is_correct());
        assert!(report.to_text().ends_with("Документ оформлен правильно.\n"));
    }

    #[test]
    fn test_report_heading_is_russian() {
        let report = Report::new("thesis.odt", vec![Violation::document(vec![ErrorKind::MissingToc])]);
        let text = report.to_text();
        assert_eq!(text.lines().next(), Some("Проверка оформления: thesis.odt"));
        assert!(!text.contains("Report"));
    }

    #[test]
    fn test_report_json_status() {
        let report = Report::new("thesis.odt", vec![Violation::document(vec![ErrorKind::MissingToc])]);
        let json = report.to_json().unwrap();
        assert!(json.contains(r#""status": "has_violations""#));
        assert!(json.contains(r#""missing_toc""#));
    }
}
