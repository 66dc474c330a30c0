use std::borrow::Cow;

/// Decode file bytes as UTF-8, replacing invalid sequences with U+FFFD.
///
/// A leading byte-order mark is dropped so it does not glue onto the first
/// word of the file.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}

/// Split content into owned lines without their terminators.
///
/// Breaks on `\n`, `\r\n` and a lone `\r`. A trailing terminator does not
/// produce an extra empty line, so line `n` here is line `n` in an editor.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while let Some(pos) = rest.find(['\n', '\r']) {
        lines.push(rest[..pos].to_owned());
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }

    if !rest.is_empty() {
        lines.push(rest.to_owned());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8_borrows() {
        let decoded = decode_lossy(b"hello");
        assert!(matches!(decoded, Cow::Borrowed("hello")));
    }

    #[test]
    fn test_decode_invalid_bytes_substitutes() {
        let decoded = decode_lossy(b"ab\xFFcd");
        assert_eq!(decoded, "ab\u{FFFD}cd");
    }

    #[test]
    fn test_decode_strips_bom() {
        assert_eq!(decode_lossy(b"\xEF\xBB\xBFtitle"), "title");
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb\r\nc\n"), vec!["a", "b", "c"]);
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n\nx"), vec!["", "", "x"]);
    }

    #[test]
    fn test_split_lines_lone_carriage_return() {
        assert_eq!(split_lines("foo\rbar\nbaz\n"), vec!["foo", "bar", "baz"]);
        assert_eq!(split_lines("a\r"), vec!["a"]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\n\r\nb"), vec!["a", "", "b"]);
    }
}
