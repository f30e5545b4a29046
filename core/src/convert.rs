use crate::{segment::segment, style::ConversionStyle};

/// Convert every `\n`-separated line of `text` to `style`.
///
/// Lines are converted independently and the output always has exactly as many
/// lines as the input. A line with no words left after segmentation comes out
/// empty. `\r` counts as whitespace, so CRLF input comes back with LF endings.
pub fn convert(text: &str, style: ConversionStyle, remove_illegal_chars: bool) -> String {
    let mut converted = String::with_capacity(text.len());
    let mut lines = 0usize;

    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            converted.push('\n');
        }
        let rendered = segment(line, remove_illegal_chars).render(style);
        tracing::trace!(line = idx, input = line, output = %rendered);
        converted.push_str(&rendered);
        lines += 1;
    }

    tracing::debug!(%style, lines, remove_illegal_chars, "converted text");
    converted
}

/// One conversion: the text plus the options it is converted with.
///
/// ```rust
/// use caseconv::{ConversionRequest, ConversionStyle};
///
/// let out = ConversionRequest::new("hello world!")
///     .style(ConversionStyle::Kebab)
///     .keep_illegal_chars()
///     .convert();
/// assert_eq!(out, "hello-world!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest<'text> {
    pub text: &'text str,
    pub style: ConversionStyle,
    pub remove_illegal_chars: bool,
}

impl<'text> ConversionRequest<'text> {
    /// Default style, illegal characters removed.
    pub fn new(text: &'text str) -> Self {
        Self {
            text,
            style: ConversionStyle::default(),
            remove_illegal_chars: true,
        }
    }

    pub fn style(self, style: ConversionStyle) -> Self {
        Self { style, ..self }
    }

    pub fn keep_illegal_chars(self) -> Self {
        Self {
            remove_illegal_chars: false,
            ..self
        }
    }

    pub fn convert(&self) -> String {
        convert(self.text, self.style, self.remove_illegal_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lines_are_independent() {
        assert_eq!(
            "foo_bar\n\nbaz_qux\n",
            convert("fooBar\n!!!\nbaz-qux\n", ConversionStyle::Snake, true)
        );
    }

    #[test]
    fn crlf_becomes_lf() {
        assert_eq!(
            "FooBar\nBazQux",
            convert("foo_bar\r\nbaz_qux", ConversionStyle::Pascal, true)
        );
    }

    #[test]
    fn only_newlines() {
        assert_eq!("\n\n", convert("\n\n", ConversionStyle::Title, true));
    }

    #[test]
    fn request_defaults() {
        let request = ConversionRequest::new("hello_world_test");
        assert_eq!(ConversionStyle::Camel, request.style);
        assert!(request.remove_illegal_chars);
        assert_eq!("helloWorldTest", request.convert());
    }
}
