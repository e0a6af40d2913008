//! HTML escaping for values interpolated into markup.

use std::fmt::Write;

use maud::Escaper;

/// Escape `&`, `<`, `>`, `"` and `'`.
///
/// maud handles the first four; `'` is turned into a numeric reference as
/// well so the output is safe inside single-quoted attributes too.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, part) in input.split('\'').enumerate() {
        if i > 0 {
            out.push_str("&#39;");
        }
        // Writing into a String cannot fail.
        let _ = Escaper::new(&mut out).write_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_metacharacters() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_clean_input_unchanged() {
        let url = "http://www.mozilla.org/en-US/firefox/?utm=1";
        assert_eq!(escape_html(url), url);
        assert_eq!(escape_html(&escape_html(url)), url);
    }

    #[test]
    fn test_non_ascii_preserved() {
        assert_eq!(escape_html("http://ü.example/é"), "http://ü.example/é");
    }

    #[test]
    fn test_quotes_at_edges() {
        assert_eq!(escape_html("'"), "&#39;");
        assert_eq!(escape_html("''a''"), "&#39;&#39;a&#39;&#39;");
        assert_eq!(escape_html(""), "");
    }

    proptest::proptest! {
        #[test]
        fn proptest_clean_input_passes_through(input in "[^&<>\"']*") {
            proptest::prop_assert_eq!(escape_html(&input), input);
        }

        #[test]
        fn proptest_output_has_no_metacharacters(input in ".*") {
            let escaped = escape_html(&input);
            proptest::prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
        }
    }
}
