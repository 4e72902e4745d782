//! Shared utility functions for output formatting

use super::cell::LinkSpan;

/// Double every `"` so the value can sit inside a quoted formula string.
pub fn escape_quotes(value: &str) -> String {
    value.replace('"', "\"\"")
}

/// Build a `=HYPERLINK("url", "label")` formula.
pub fn hyperlink_formula(url: &str, label: &str) -> String {
    format!(
        "=HYPERLINK(\"{}\", \"{}\")",
        escape_quotes(url),
        escape_quotes(label)
    )
}

/// Length in characters, the unit link spans are measured in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split rich text into consecutive segments, each with the link covering it.
///
/// Spans are character ranges. Overlapping or out-of-range spans are clamped
/// to the text.
pub fn split_by_links<'a>(text: &str, links: &'a [LinkSpan]) -> Vec<(String, Option<&'a str>)> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut pos = 0;

    for link in links {
        let start = link.start.clamp(pos, chars.len());
        let end = link.end.clamp(start, chars.len());
        if start > pos {
            segments.push((chars[pos..start].iter().collect(), None));
        }
        if end > start {
            segments.push((chars[start..end].iter().collect(), Some(link.url.as_str())));
        }
        pos = end;
    }
    if pos < chars.len() {
        segments.push((chars[pos..].iter().collect(), None));
    }
    segments
}

/// Pad `text` to `width` characters, centred.
pub fn center(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"say "hi""#), r#"say ""hi"""#);
        assert_eq!(escape_quotes("plain"), "plain");
    }

    #[test]
    fn test_hyperlink_formula_escapes_label() {
        assert_eq!(
            hyperlink_formula("https://x/1", r#"My "best" doc"#),
            r#"=HYPERLINK("https://x/1", "My ""best"" doc")"#
        );
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("Ünïcödé"), 7);
        assert_eq!(char_len(" > "), 3);
    }

    #[test]
    fn test_split_by_links() {
        let links = vec![
            LinkSpan {
                start: 0,
                end: 1,
                url: "ua".to_string(),
            },
            LinkSpan {
                start: 4,
                end: 5,
                url: "ub".to_string(),
            },
        ];
        let segments = split_by_links("A > B", &links);
        assert_eq!(
            segments,
            vec![
                ("A".to_string(), Some("ua")),
                (" > ".to_string(), None),
                ("B".to_string(), Some("ub")),
            ]
        );
    }

    #[test]
    fn test_split_by_links_clamps_out_of_range() {
        let links = vec![LinkSpan {
            start: 2,
            end: 99,
            url: "u".to_string(),
        }];
        let segments = split_by_links("abc", &links);
        assert_eq!(
            segments,
            vec![("ab".to_string(), None), ("c".to_string(), Some("u"))]
        );
    }

    #[test]
    fn test_center() {
        assert_eq!(center("No.", 7), "  No.  ");
        assert_eq!(center("Type", 7), " Type  ");
        assert_eq!(center("Long text", 3), "Long text");
    }
}
