use crate::compat::{String, ToString, Vec};
use crate::percent_encode::percent_decode;

/// Driver options carried in the query string of a database URL.
///
/// Keys are unique: when a key is repeated, the last value wins and keeps the
/// position of the first occurrence. Keys and values are stored decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut params = Self::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            match pair.split_once('=') {
                Some((key, value)) => {
                    params.set(&decode_component(key), &decode_component(value));
                }
                None => params.set(&decode_component(pair), ""),
            }
        }
        params
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get the value for a key, comparing keys ASCII case-insensitively.
    pub fn get_ignore_ascii_case(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Set a key to a value, replacing any existing value in place.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.params.push((key.to_string(), value.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    /// Append the encoded query string (without leading `?`) to a buffer.
    pub fn serialize_into(&self, buffer: &mut String) {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            encode_component_into(buffer, key);
            buffer.push('=');
            encode_component_into(buffer, value);
        }
    }
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buffer = String::new();
        self.serialize_into(&mut buffer);
        f.write_str(&buffer)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

/// Encode a component for use in query strings.
fn encode_component_into(buffer: &mut String, s: &str) {
    use core::fmt::Write;

    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                buffer.push(byte as char);
            }
            b' ' => buffer.push('+'),
            _ => {
                let _ = write!(buffer, "%{byte:02X}");
            }
        }
    }
}

/// Decode a component from a query string (`+` is a space).
fn decode_component(s: &str) -> String {
    if s.contains('+') {
        percent_decode(&s.replace('+', " "))
    } else {
        percent_decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::vec;

    #[test]
    fn test_parse_empty() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }

    #[test]
    fn test_parse_multiple() {
        let params = QueryParams::parse("sslmode=disable&connect_timeout=10");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("sslmode"), Some("disable"));
        assert_eq!(params.get("connect_timeout"), Some("10"));
    }

    #[test]
    fn test_parse_no_value() {
        let params = QueryParams::parse("readonly&mode=ro");
        assert_eq!(params.get("readonly"), Some(""));
        assert_eq!(params.get("mode"), Some("ro"));
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let params = QueryParams::parse("a=1&b=2&a=3");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("3"));
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_decoding() {
        let params = QueryParams::parse("Extended+Properties=a%3Db%3Bc&x=%C3%A9");
        assert_eq!(params.get("Extended Properties"), Some("a=b;c"));
        assert_eq!(params.get("x"), Some("é"));
    }

    #[test]
    fn test_equals_in_value() {
        let params = QueryParams::parse("opt=a=b");
        assert_eq!(params.get("opt"), Some("a=b"));
    }

    #[test]
    fn test_ignores_empty_pairs() {
        let params = QueryParams::parse("&&&key=value&&&");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("key"), Some("value"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = QueryParams::parse("a=1&b=2");
        params.set("a", "9");
        params.set("c", "3");
        assert_eq!(params.to_string(), "a=9&b=2&c=3");
    }

    #[test]
    fn test_get_ignore_ascii_case() {
        let params = QueryParams::parse("Database=x");
        assert_eq!(params.get("database"), None);
        assert_eq!(params.get_ignore_ascii_case("database"), Some("x"));
    }

    #[test]
    fn test_serialize_encoding() {
        let params: QueryParams = [("loc", "Asia/Tokyo"), ("name", "a b&c")]
            .into_iter()
            .collect();
        assert_eq!(params.to_string(), "loc=Asia%2FTokyo&name=a+b%26c");

        let reparsed = QueryParams::parse(&params.to_string());
        assert_eq!(reparsed, params);
    }
}
