use crate::compat::{Cow, String};
use crate::error::{ParseError, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, utf8_percent_encode};

// Encode set follows the WHATWG URL spec
// Based on https://url.spec.whatwg.org/#application-x-www-form-urlencoded-percent-encode-set

/// application/x-www-form-urlencoded percent-encode set
/// Everything except ASCII alphanumerics and `*`, `-`, `.`, `_`
pub const FORM_URLENCODED_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// How a space is written when serializing.
/// Parsing accepts both forms regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpaceEncoding {
    /// `a b` -> `a+b`
    #[default]
    Plus,
    /// `a b` -> `a%20b`
    Percent,
}

/// Write a form-urlencoded key or value directly to buffer
pub fn form_encode_into(buffer: &mut String, input: &str, space: SpaceEncoding) {
    // Reserve space to reduce reallocations
    buffer.reserve(input.len());

    // An escaped byte is always yielded as its own chunk, so "%20" can only come from a space
    for chunk in utf8_percent_encode(input, FORM_URLENCODED_SET) {
        if space == SpaceEncoding::Plus && chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a form-urlencoded component.
/// `+` becomes a space, malformed escapes are kept as-is, invalid UTF-8 is replaced.
pub fn form_decode(input: &str) -> String {
    let bytes = plus_to_space(input.as_bytes());
    percent_decode(&bytes).decode_utf8_lossy().into_owned()
}

/// Decode a form-urlencoded component, rejecting malformed escapes and invalid UTF-8.
/// `offset` is the position of `input` inside the full query, used for error reporting.
pub fn form_decode_strict(input: &str, offset: usize) -> Result<String> {
    let bytes = input.as_bytes();
    for pos in memchr::memchr_iter(b'%', bytes) {
        let well_formed = bytes
            .get(pos + 1..pos + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(ParseError::InvalidPercentEncoding {
                position: offset + pos,
            });
        }
    }

    let bytes = plus_to_space(bytes);
    percent_decode(&bytes)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| ParseError::InvalidUtf8)
}

/// Replace `+` with space, borrowing when there is nothing to replace
fn plus_to_space(bytes: &[u8]) -> Cow<'_, [u8]> {
    let Some(first) = memchr::memchr(b'+', bytes) else {
        return Cow::Borrowed(bytes);
    };

    let mut owned = bytes.to_vec();
    for byte in &mut owned[first..] {
        if *byte == b'+' {
            *byte = b' ';
        }
    }
    Cow::Owned(owned)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn encode(input: &str, space: SpaceEncoding) -> String {
        let mut buffer = String::new();
        form_encode_into(&mut buffer, input, space);
        buffer
    }

    #[test]
    fn test_encode_reserved() {
        assert_eq!(encode("a&b", SpaceEncoding::Plus), "a%26b");
        assert_eq!(encode("a+b", SpaceEncoding::Plus), "a%2Bb");
        assert_eq!(encode("a=b", SpaceEncoding::Plus), "a%3Db");
        assert_eq!(encode("100%", SpaceEncoding::Plus), "100%25");
        assert_eq!(encode("*-._", SpaceEncoding::Plus), "*-._");
        assert_eq!(encode("~", SpaceEncoding::Plus), "%7E");
    }

    #[test]
    fn test_encode_space() {
        assert_eq!(encode("a b", SpaceEncoding::Plus), "a+b");
        assert_eq!(encode("a b", SpaceEncoding::Percent), "a%20b");
        // A literal "%20" is not a space
        assert_eq!(encode("%20", SpaceEncoding::Plus), "%2520");
    }

    #[test]
    fn test_encode_non_ascii() {
        assert_eq!(encode("é", SpaceEncoding::Plus), "%C3%A9");
    }

    #[test]
    fn test_decode() {
        assert_eq!(form_decode("hello+world"), "hello world");
        assert_eq!(form_decode("hello%20world"), "hello world");
        assert_eq!(form_decode("%2B"), "+");
        assert_eq!(form_decode("%C3%A9"), "é");
        assert_eq!(form_decode("100%"), "100%");
        assert_eq!(form_decode("%zz"), "%zz");
        assert_eq!(form_decode("%FF"), "\u{FFFD}");
    }

    #[test]
    fn test_decode_strict() {
        assert_eq!(form_decode_strict("a+b%26", 0).unwrap(), "a b&");
        assert_eq!(
            form_decode_strict("ab%2", 4),
            Err(ParseError::InvalidPercentEncoding { position: 6 })
        );
        assert_eq!(
            form_decode_strict("%g1", 0),
            Err(ParseError::InvalidPercentEncoding { position: 0 })
        );
        assert_eq!(form_decode_strict("%FF", 0), Err(ParseError::InvalidUtf8));
    }
}
