use caseconv::{CATALOG, ConversionRequest, ConversionStyle, convert};
use pretty_assertions::assert_eq;

#[test]
fn snake_to_camel() {
    assert_eq!(
        "helloWorldTest",
        convert("hello_world_test", ConversionStyle::Camel, true)
    );
}

#[test]
fn camel_to_snake() {
    assert_eq!(
        "hello_world_test",
        convert("helloWorldTest", ConversionStyle::Snake, true)
    );
}

#[test]
fn words_to_pascal() {
    assert_eq!("HelloWorld", convert("hello world", ConversionStyle::Pascal, true));
}

#[test]
fn kebab_to_constant() {
    assert_eq!(
        "MY_KEBAB_CASE",
        convert("my-kebab-case", ConversionStyle::Constant, true)
    );
}

#[test]
fn multi_line() {
    assert_eq!(
        "foo_bar\nbaz_qux",
        convert("fooBar\nbaz_qux", ConversionStyle::Snake, true)
    );
}

#[test]
fn empty_input() {
    for style in ConversionStyle::ALL {
        assert_eq!("", convert("", style, true), "style={}", style);
        assert_eq!("", convert("", style, false), "style={}", style);
    }
}

#[test]
fn only_illegal_chars() {
    for style in ConversionStyle::ALL {
        assert_eq!("", convert("!!!", style, true), "style={}", style);
        assert_eq!("!!!", convert("!!!", style, false), "style={}", style);
    }
}

#[test]
fn whitespace_and_delimiters_only() {
    for style in ConversionStyle::ALL {
        assert_eq!("", convert("  _-_  \t", style, true), "style={}", style);
    }
}

#[test]
fn every_style_from_one_input() {
    let input = "  The quick_brownFox--jumps!  ";
    let expected = [
        "theQuickBrownFoxJumps",
        "the_quick_brown_fox_jumps",
        "THE_QUICK_BROWN_FOX_JUMPS",
        "TheQuickBrownFoxJumps",
        "THE QUICK BROWN FOX JUMPS",
        "the quick brown fox jumps",
        "the-quick-brown-fox-jumps",
        "The Quick Brown Fox Jumps",
        "THE-QUICK-BROWN-FOX-JUMPS",
        "The-Quick-Brown-Fox-Jumps",
    ];

    for (entry, expected) in CATALOG.iter().zip(expected) {
        assert_eq!(
            expected,
            convert(input, entry.style, true),
            "style={}",
            entry.name
        );
    }
}

#[test]
fn keeping_illegal_chars() {
    assert_eq!(
        "user.name@example",
        convert("User.Name@Example", ConversionStyle::Lower, false)
    );
    assert_eq!(
        "usernameexample",
        convert("User.Name@Example", ConversionStyle::Lower, true)
    );
    assert_eq!(
        "$price_total",
        convert("$price total", ConversionStyle::Snake, false)
    );
}

#[test]
fn digits_stay_attached() {
    assert_eq!(
        "utf8_decoder_v2",
        convert("utf8 Decoder-v2", ConversionStyle::Snake, true)
    );
    assert_eq!("Utf8DecoderV2", convert("utf8_decoder_v2", ConversionStyle::Pascal, true));
}

#[test]
fn camel_is_idempotent() {
    let inputs = [
        "hello_world_test",
        "The quick brown fox",
        "MY_CONSTANT_NAME",
        "some-kebab-case\nTitle Case Line",
        "already camelCase",
    ];

    for input in inputs {
        let once = convert(input, ConversionStyle::Camel, true);
        let twice = convert(&once, ConversionStyle::Camel, true);
        assert_eq!(once, twice, "input={:?}", input);
    }
}

#[test]
fn digit_words_are_idempotent() {
    let cases = [
        (ConversionStyle::Camel, "utf8 decoder", "utf8Decoder"),
        (ConversionStyle::Camel, "foo1 bar", "foo1Bar"),
        (ConversionStyle::Camel, "version 2 beta", "version2Beta"),
        (ConversionStyle::Pascal, "Utf8DecoderV2", "Utf8DecoderV2"),
    ];

    for (style, input, expected) in cases {
        let once = convert(input, style, true);
        assert_eq!(expected, once, "input={:?}", input);
        assert_eq!(once, convert(&once, style, true), "input={:?}", input);
    }
}

#[test]
fn request_matches_free_function() {
    let text = "Some *odd* input\nsecond_line";
    for style in ConversionStyle::ALL {
        assert_eq!(
            convert(text, style, false),
            ConversionRequest::new(text)
                .style(style)
                .keep_illegal_chars()
                .convert()
        );
    }
}
