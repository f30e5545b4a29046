//! # Word Segmentation
//!
//! Breaks a single line of text into the lowercase [`Word`]s that every
//! [`ConversionStyle`](crate::style::ConversionStyle) is rendered from.
//!
//! Boundaries are:
//! - runs of whitespace, `_` and `-` (collapsed, leading and trailing ones dropped)
//! - camel humps, i.e. an ASCII lowercase letter or digit directly followed by an
//!   ASCII uppercase letter (`helloWorld` → `hello` `world`, `utf8Decoder` →
//!   `utf8` `decoder`)
//!
//! Everything else is kept and lowercased. When illegal characters are removed,
//! only `[a-z0-9]` survives and words left empty are dropped entirely.
//!
//! ```rust
//! use caseconv::segment::segment;
//!
//! let line = segment("parseHTTP_response-code", true);
//! let words: Vec<&str> = line.words().iter().map(|w| w.as_str()).collect();
//! assert_eq!(words, ["parse", "http", "response", "code"]);
//! ```

use std::fmt::Display;

use crate::style::ConversionStyle;

/// A single lowercase token. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The words of one input line, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    words: Vec<Word>,
}

impl Line {
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn render(&self, style: ConversionStyle) -> String {
        style.render(&self.words)
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.words.iter();
        if let Some(word) = iter.next() {
            write!(f, "{}", word)?;
            for word in iter {
                write!(f, " {}", word)?;
            }
        }
        Ok(())
    }
}

/// Split `line` into words. `\n` is treated like any other whitespace; callers
/// that care about lines split them first.
pub fn segment(line: &str, remove_illegal_chars: bool) -> Line {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_ends_hump = false;

    for c in line.chars() {
        if is_boundary(c) {
            flush(&mut current, &mut words);
            prev_ends_hump = false;
            continue;
        }

        // camel hump. decided on the raw character, before any stripping
        if prev_ends_hump && c.is_ascii_uppercase() {
            flush(&mut current, &mut words);
        }
        prev_ends_hump = c.is_ascii_lowercase() || c.is_ascii_digit();

        for lower in c.to_lowercase() {
            if !remove_illegal_chars || is_legal(lower) {
                current.push(lower);
            }
        }
    }
    flush(&mut current, &mut words);

    Line { words }
}

fn is_boundary(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

fn is_legal(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

fn flush(current: &mut String, words: &mut Vec<Word>) {
    if !current.is_empty() {
        words.push(Word(std::mem::take(current)));
    }
}
