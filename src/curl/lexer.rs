use winnow::ascii::multispace0;
use winnow::combinator::{alt, preceded, repeat, terminated};
use winnow::token::{rest, take_till, take_until};
use winnow::{ModalResult, Parser};

/// Parse a double-quoted span, quotes stripped. Quotes do not nest and an
/// unterminated span runs to the end of the input.
fn double_quoted<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    preceded('"', alt((terminated(take_until(0.., '"'), '"'), rest))).parse_next(s)
}

/// Parse a single-quoted span, quotes stripped.
fn single_quoted<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    preceded('\'', alt((terminated(take_until(0.., '\''), '\''), rest))).parse_next(s)
}

fn bare<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    take_till(1.., |c: char| c.is_whitespace() || c == '"' || c == '\'').parse_next(s)
}

/// One word: adjacent quoted and bare segments glued together, so
/// `a"b c"d` lexes as the single word `ab cd`.
fn word(s: &mut &str) -> ModalResult<String> {
    repeat(1.., alt((double_quoted, single_quoted, bare)))
        .fold(String::new, |mut word, segment| {
            word.push_str(segment);
            word
        })
        .parse_next(s)
}

/// The gap between words: whitespace, plus any `\` line continuations.
fn gap(s: &mut &str) -> ModalResult<()> {
    preceded(
        multispace0,
        repeat(0.., ('\\', multispace0)).fold(|| (), |_, _| ()),
    )
    .parse_next(s)
}

fn words(s: &mut &str) -> ModalResult<Vec<String>> {
    preceded(gap, repeat(0.., terminated(word, gap))).parse_next(s)
}

/// Split a command line into words, honoring quoted spans.
///
/// Whitespace inside quotes does not separate words; the quote characters
/// themselves are stripped. Total over any input: a bare segment accepts
/// every glyph outside whitespace and quotes, and an unterminated quote
/// swallows the remainder, so the word grammar never rejects.
pub fn split_words(input: &str) -> Vec<String> {
    let mut input = input;
    words(&mut input).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(r#" "rakudo star" "#, "rakudo star")]
    #[case(r#""rakulang 'rocks'" tail"#, "rakulang 'rocks'")]
    #[case(r#""no closing quote"#, "no closing quote")]
    fn test_double_quoted(#[case] input: String, #[case] expected: String) {
        let mut input = input.trim_start();
        let data = double_quoted(&mut input).unwrap();
        assert_eq!(data, expected)
    }

    #[rstest]
    #[case(r#" 'rakudo star' "#, "rakudo star")]
    #[case(r#"'rakulang "rocks"'"#, r#"rakulang "rocks""#)]
    fn test_single_quoted(#[case] input: String, #[case] expected: String) {
        let mut input = input.trim_start();
        let data = single_quoted(&mut input).unwrap();
        assert_eq!(data, expected)
    }

    #[rstest]
    #[case("-X GET https://www.example.com/", vec!["-X", "GET", "https://www.example.com/"])]
    #[case(r#"-H "X-Test: a b" http://x.test/"#, vec!["-H", "X-Test: a b", "http://x.test/"])]
    #[case(r#"-d '{"answer": 42}'"#, vec!["-d", r#"{"answer": 42}"#])]
    #[case("  spaced \t  out  ", vec!["spaced", "out"])]
    #[case(r#"a"b c"d"#, vec!["ab cd"])]
    #[case(r#""unterminated till the end"#, vec!["unterminated till the end"])]
    #[case("", vec![])]
    #[case(" \t ", vec![])]
    fn test_split_words(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_words(input), expected)
    }

    #[test]
    fn test_split_words_line_continuations() {
        let input = "'http://example.com/' \\\n  -H 'Accept: */*' \\\r\n  --insecure";
        let expected = vec!["http://example.com/", "-H", "Accept: */*", "--insecure"];
        assert_eq!(split_words(input), expected)
    }
}
