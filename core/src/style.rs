use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{catalog::{CATALOG, StyleEntry}, segment::Word};

/// Target case convention.
///
/// Discriminants are the positions in [`CATALOG`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ConversionStyle {
    #[default]
    #[serde(rename = "camelCase")]
    Camel = 0,
    #[serde(rename = "snake_case")]
    Snake = 1,
    #[serde(rename = "CONSTANT_CASE")]
    Constant = 2,
    #[serde(rename = "PascalCase")]
    Pascal = 3,
    #[serde(rename = "UPPERCASE")]
    Upper = 4,
    #[serde(rename = "lowercase")]
    Lower = 5,
    #[serde(rename = "kebab-case")]
    Kebab = 6,
    #[serde(rename = "Title Case")]
    Title = 7,
    #[serde(rename = "COBOL-CASE")]
    Cobol = 8,
    #[serde(rename = "Train-Case")]
    Train = 9,
}

/// How a single word is cased inside a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordCase {
    Lower,
    Upper,
    Capitalized,
}

impl ConversionStyle {
    pub const ALL: [ConversionStyle; 10] = [
        Self::Camel,
        Self::Snake,
        Self::Constant,
        Self::Pascal,
        Self::Upper,
        Self::Lower,
        Self::Kebab,
        Self::Title,
        Self::Cobol,
        Self::Train,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn entry(self) -> &'static StyleEntry {
        &CATALOG[self.index()]
    }

    /// Display name, e.g. `kebab-case`.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Sample output, e.g. `my-kebab-case`.
    pub fn example(self) -> &'static str {
        self.entry().example
    }

    pub const fn separator(self) -> &'static str {
        match self {
            Self::Camel | Self::Pascal => "",
            Self::Snake | Self::Constant => "_",
            Self::Kebab | Self::Cobol | Self::Train => "-",
            Self::Title | Self::Upper | Self::Lower => " ",
        }
    }

    const fn word_case(self, index: usize) -> WordCase {
        match self {
            Self::Camel if index == 0 => WordCase::Lower,
            Self::Camel | Self::Pascal | Self::Train | Self::Title => WordCase::Capitalized,
            Self::Snake | Self::Kebab | Self::Lower => WordCase::Lower,
            Self::Constant | Self::Cobol | Self::Upper => WordCase::Upper,
        }
    }

    /// Join `words` the way this style spells identifiers.
    /// An empty slice renders to an empty string.
    pub fn render(self, words: &[Word]) -> String {
        let separator = self.separator();
        let capacity = words.iter().map(|w| w.as_str().len()).sum::<usize>()
            + separator.len() * words.len().saturating_sub(1);

        let mut rendered = String::with_capacity(capacity);
        for (idx, word) in words.iter().enumerate() {
            if idx > 0 {
                rendered.push_str(separator);
            }
            match self.word_case(idx) {
                WordCase::Lower => rendered.push_str(&word.as_str().to_lowercase()),
                WordCase::Upper => rendered.push_str(&word.as_str().to_uppercase()),
                WordCase::Capitalized => capitalize_into(word.as_str(), &mut rendered),
            }
        }
        rendered
    }
}

fn capitalize_into(word: &str, out: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        for c in chars {
            out.extend(c.to_lowercase());
        }
    }
}

impl Display for ConversionStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case style {input:?}, expected one of: {}", expected())]
pub struct ParseStyleError {
    input: String,
}

impl ParseStyleError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

fn expected() -> String {
    CATALOG
        .iter()
        .map(|entry| entry.name)
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for ConversionStyle {
    type Err = ParseStyleError;

    /// Accepts the catalog name in any letter case and with any of ` `, `_`, `-`
    /// (`snake_case`, `Snake Case`, `SNAKE-CASE`), the bare family name
    /// (`snake`, `screaming`, ...) or the catalog index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| ParseStyleError { input: s.into() });
        }

        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let style = match key.as_str() {
            "camel" | "camelcase" | "lowercamel" | "lowercamelcase" => Self::Camel,
            "snake" | "snakecase" => Self::Snake,
            "constant" | "constantcase" | "screaming" | "screamingsnake"
            | "screamingsnakecase" | "uppersnake" | "uppersnakecase" => Self::Constant,
            "pascal" | "pascalcase" | "uppercamel" | "uppercamelcase" => Self::Pascal,
            "upper" | "uppercase" => Self::Upper,
            "lower" | "lowercase" => Self::Lower,
            "kebab" | "kebabcase" => Self::Kebab,
            "title" | "titlecase" => Self::Title,
            "cobol" | "cobolcase" => Self::Cobol,
            "train" | "traincase" => Self::Train,
            _ => return Err(ParseStyleError { input: s.into() }),
        };

        Ok(style)
    }
}
