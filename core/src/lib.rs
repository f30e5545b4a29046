//! # caseconv
//!
//! Converts text between identifier and word case conventions: camelCase,
//! snake_case, CONSTANT_CASE, PascalCase, UPPERCASE, lowercase, kebab-case,
//! Title Case, COBOL-CASE and Train-Case.
//!
//! Each line is [segmented](segment::segment) into lowercase words, which the
//! chosen [`ConversionStyle`] then joins back together. Conversion never fails.
//!
//! ```rust
//! use caseconv::{convert, ConversionStyle};
//!
//! assert_eq!(convert("hello_world_test", ConversionStyle::Camel, true), "helloWorldTest");
//! assert_eq!(convert("fooBar\nbaz_qux", ConversionStyle::Snake, true), "foo_bar\nbaz_qux");
//! ```

pub mod catalog;
pub mod segment;
pub mod style;

mod convert;

pub use catalog::{CATALOG, StyleEntry};
pub use convert::{ConversionRequest, convert};
pub use style::{ConversionStyle, ParseStyleError};
