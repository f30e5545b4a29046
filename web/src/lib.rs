use caseconv::{CATALOG, ConversionStyle};
use wasm_bindgen::prelude::*;

/// Seed text shown before the user types anything.
const DEFAULT_INPUT: &str = "hello_world_test";

#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Camel,
    Snake,
    Constant,
    Pascal,
    Upper,
    Lower,
    Kebab,
    Title,
    Cobol,
    Train,
}

impl From<Style> for ConversionStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Camel => ConversionStyle::Camel,
            Style::Snake => ConversionStyle::Snake,
            Style::Constant => ConversionStyle::Constant,
            Style::Pascal => ConversionStyle::Pascal,
            Style::Upper => ConversionStyle::Upper,
            Style::Lower => ConversionStyle::Lower,
            Style::Kebab => ConversionStyle::Kebab,
            Style::Title => ConversionStyle::Title,
            Style::Cobol => ConversionStyle::Cobol,
            Style::Train => ConversionStyle::Train,
        }
    }
}

#[wasm_bindgen]
pub fn convert(text: &str, style: Style, remove_illegal_chars: bool) -> String {
    caseconv::convert(text, style.into(), remove_illegal_chars)
}

/// `name` is anything the catalog parser accepts: `snake_case`, `snake`, `1`.
#[wasm_bindgen]
pub fn convert_by_name(
    text: &str,
    name: &str,
    remove_illegal_chars: bool,
) -> Result<String, JsValue> {
    let style = name.parse::<ConversionStyle>().map_err(|e| e.to_string())?;
    Ok(caseconv::convert(text, style, remove_illegal_chars))
}

/// The style catalog as a json array of `{ "name", "example" }`.
#[wasm_bindgen]
pub fn catalog() -> Result<String, JsValue> {
    let json = serde_json::to_string(&CATALOG).map_err(|e| e.to_string())?;
    Ok(json)
}

#[wasm_bindgen]
pub fn default_input() -> String {
    DEFAULT_INPUT.into()
}
