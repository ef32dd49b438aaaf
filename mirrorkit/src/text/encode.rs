//! URI and string-literal encodings shared by the text transforms and the SVG
//! exporter.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// encodeURI leaves alphanumerics, the unreserved marks - _ . ! ~ * ' ( ) and
// the reserved set ; / ? : @ & = + $ , # untouched.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-').remove(b'_').remove(b'.').remove(b'!').remove(b'~')
    .remove(b'*').remove(b'\'').remove(b'(').remove(b')')
    .remove(b';').remove(b'/').remove(b'?').remove(b':').remove(b'@')
    .remove(b'&').remove(b'=').remove(b'+').remove(b'$').remove(b',').remove(b'#');

/// ECMAScript `encodeURI`: percent-encodes the UTF-8 bytes of every other
/// character with uppercase hex.
pub fn encode_uri(s: &str) -> String {
    utf8_percent_encode(s, URI_ENCODE_SET).to_string()
}

/// Value safe to place after `name=` in a query string: `encodeURI` plus
/// `#`, `&`, `'`, `+` escaped and spaces written as `+`.
pub fn to_query_value(s: &str) -> String {
    let encoded = encode_uri(s);
    let mut out = String::with_capacity(encoded.len());
    let mut rest = encoded.as_str();
    while let Some(c) = rest.chars().next() {
        if rest.starts_with("%20") {
            out.push('+');
            rest = &rest[3..];
            continue;
        }
        match c {
            '#' => out.push_str("%23"),
            '&' => out.push_str("%26"),
            '\'' => out.push_str("%27"),
            '+' => out.push_str("%2B"),
            _ => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// JSON string body without the surrounding quotes, leaving `"` unescaped.
pub fn slash_escaped(s: &str) -> String {
    let json = serde_json::Value::String(s.to_string()).to_string();
    json[1..json.len() - 1].replace("\\\"", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_uri_matches_browser() {
        assert_eq!(encode_uri("a b"), "a%20b");
        assert_eq!(encode_uri("https://x.y/?q=1&r=#f"), "https://x.y/?q=1&r=#f");
        assert_eq!(encode_uri("100%"), "100%25");
        assert_eq!(encode_uri("✿"), "%E2%9C%BF");
        assert_eq!(encode_uri("[a]{b}|\"<>\\^`"), "%5Ba%5D%7Bb%7D%7C%22%3C%3E%5C%5E%60");
    }

    #[test]
    fn query_value() {
        assert_eq!(to_query_value("a b#c&d'e+f"), "a+b%23c%26d%27e%2Bf");
        assert_eq!(to_query_value("x=1;y"), "x=1;y");
    }

    #[test]
    fn slash_escape_keeps_quotes() {
        assert_eq!(slash_escaped("&\"><'%X\tZ\n$~()*@"), "&\"><'%X\\tZ\\n$~()*@");
        assert_eq!(slash_escaped("back\\slash"), "back\\\\slash");
    }
}
