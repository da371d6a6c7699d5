//! Text normalisation for search and name ordering.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// How search terms are compared against entity text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMatch {
    /// Unicode lower-case on both sides; `č` and `c` stay distinct.
    #[default]
    CaseInsensitive,
    /// Lower-case and strip diacritics, so `kovac` finds `Kovačević`.
    FoldDiacritics,
}

impl TextMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextMatch::CaseInsensitive => "case_insensitive",
            TextMatch::FoldDiacritics => "fold_diacritics",
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        match self {
            TextMatch::CaseInsensitive => text.to_lowercase(),
            TextMatch::FoldDiacritics => fold_diacritics(text),
        }
    }

    /// Substring match of `term` in `text`. An empty term matches everything.
    pub fn matches(&self, text: &str, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.normalize(text).contains(&self.normalize(term))
    }
}

impl FromStr for TextMatch {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "case_insensitive" => Ok(TextMatch::CaseInsensitive),
            "fold_diacritics" => Ok(TextMatch::FoldDiacritics),
            other => Err(DomainError::invalid(format!("unknown text match policy '{}'", other))),
        }
    }
}

/// Lower-case `text` and remove diacritics.
///
/// Letters with a combining-mark decomposition lose the mark. Letters that
/// are distinct code points with no decomposition (`đ`, `ł`, `ø`) are mapped
/// explicitly.
pub fn fold_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' | 'Đ' => 'd',
            'ł' | 'Ł' => 'l',
            'ø' | 'Ø' => 'o',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Compare names the way a reader scanning an alphabetical list expects.
///
/// Base letters decide first (`Čolić` sorts with the `C`s), then accents,
/// then case.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_diacritics(a)
        .cmp(&fold_diacritics(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}
