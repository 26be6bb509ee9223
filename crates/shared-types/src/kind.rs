//! Closed taxonomy of house-style violations
//!
//! Every [`ErrorKind`] maps to exactly one fixed remediation string through
//! [`ErrorKind::remediation`]. The match has no wildcard arm, so a new
//! variant needs a message before it compiles.

use serde::{Deserialize, Serialize};

/// Whether a list is unordered or ordered, taken from its first level style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletKind {
    /// Marker character (`text:list-level-style-bullet`)
    Character,
    /// Numbering (`text:list-level-style-number` and anything else)
    Numbered,
}

/// A single broken formatting rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Font,
    Size,
    MarginRight,
    MarginLeft,
    TextIndent,
    Alignment,
    PaddingTop,
    PaddingBottom,
    Color,
    HeaderDot,
    HeaderNewline,
    /// Style reference not found among the automatic styles
    InvalidStyle,
    ImageSpacingAbove,
    ImageSpacingBelow,
    ImageCaption,
    ListFirstChar(BulletKind),
    ListLastChar(BulletKind),
    FooterAbsent,
    FooterOnTitlePage,
    MissingToc,
}

impl ErrorKind {
    /// Fixed remediation text shown to the author
    pub fn remediation(self) -> &'static str {
        match self {
            ErrorKind::Font => "шрифт Times New Roman",
            ErrorKind::Size => "размер шрифта 14pt",
            ErrorKind::MarginRight => "отступ справа 15мм",
            ErrorKind::MarginLeft => "отступ слева 25мм",
            ErrorKind::TextIndent => "абзацный отступ 1,25см",
            ErrorKind::Alignment => "выравнивание по ширине",
            ErrorKind::PaddingTop => "интервал перед абзацем 0см",
            ErrorKind::PaddingBottom => "интервал после абзаца 0см",
            ErrorKind::Color => "цвет шрифта черный",
            ErrorKind::HeaderDot => "в конце заголовка точка не ставится",
            ErrorKind::HeaderNewline => "после заголовка должна быть пропущена строка",
            ErrorKind::InvalidStyle => "стиль абзаца не найден, задайте оформление явно",
            ErrorKind::ImageSpacingAbove => "перед рисунком должна быть пустая строка",
            ErrorKind::ImageSpacingBelow => "после рисунка должна быть пустая строка",
            ErrorKind::ImageCaption => {
                "под рисунком должна быть подпись вида «Рисунок 1.1 - Название»"
            }
            ErrorKind::ListFirstChar(BulletKind::Character) => {
                "первый элемент маркированного списка начинается с заглавной буквы, остальные со строчной"
            }
            ErrorKind::ListFirstChar(BulletKind::Numbered) => {
                "каждый элемент нумерованного списка начинается с заглавной буквы"
            }
            ErrorKind::ListLastChar(BulletKind::Character) => {
                "первый элемент маркированного списка оканчивается запятой, остальные точкой"
            }
            ErrorKind::ListLastChar(BulletKind::Numbered) => {
                "каждый элемент нумерованного списка оканчивается точкой"
            }
            ErrorKind::FooterAbsent => "номер страницы в нижнем колонтитуле по центру",
            ErrorKind::FooterOnTitlePage => "на титульном листе номер страницы не ставится",
            ErrorKind::MissingToc => "автоматическое оглавление в начале документа",
        }
    }
}
