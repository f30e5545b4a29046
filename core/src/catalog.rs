//! The fixed list of styles a front end offers, in display order.
//!
//! Index 0 is the default selection.

use serde::Serialize;

use crate::style::ConversionStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleEntry {
    pub name: &'static str,
    #[serde(skip)]
    pub style: ConversionStyle,
    pub example: &'static str,
}

impl StyleEntry {
    const fn new(name: &'static str, style: ConversionStyle, example: &'static str) -> Self {
        Self {
            name,
            style,
            example,
        }
    }
}

pub static CATALOG: [StyleEntry; 10] = [
    StyleEntry::new("camelCase", ConversionStyle::Camel, "myVariableName"),
    StyleEntry::new("snake_case", ConversionStyle::Snake, "my_variable_name"),
    StyleEntry::new("CONSTANT_CASE", ConversionStyle::Constant, "MY_CONSTANT_NAME"),
    StyleEntry::new("PascalCase", ConversionStyle::Pascal, "MyClassName"),
    StyleEntry::new("UPPERCASE", ConversionStyle::Upper, "MY UPPERCASE TEXT"),
    StyleEntry::new("lowercase", ConversionStyle::Lower, "my lowercase text"),
    StyleEntry::new("kebab-case", ConversionStyle::Kebab, "my-kebab-case"),
    StyleEntry::new("Title Case", ConversionStyle::Title, "My Title Case"),
    StyleEntry::new("COBOL-CASE", ConversionStyle::Cobol, "MY-COBOL-CASE"),
    StyleEntry::new("Train-Case", ConversionStyle::Train, "My-Train-Case"),
];
