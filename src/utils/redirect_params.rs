//! Extra redirect parameters carried in the `params` query argument.
//!
//! Clients pass a base64-encoded JSON object; its entries are flattened into a
//! query string and appended to the resolved proxy URL.
//!
//! ```text
//! params=eyJhIjoiMSIsImIiOiIyIn0=   ->   {"a":"1","b":"2"}   ->   a=1&b=2
//! ```

use base64::{
    Engine, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde_json::{Map, Value};
use url::form_urlencoded;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Errors that can occur while decoding the `params` blob.
#[derive(Debug, thiserror::Error)]
pub enum RedirectParamsError {
    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded params are not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Decodes a base64 JSON object.
///
/// Both the standard and the URL-safe alphabet are accepted, padding is optional.
/// Spaces are read as `+`, since an unescaped `+` in a query string arrives
/// form-decoded as a space.
///
/// # Errors
///
/// See [`RedirectParamsError`].
pub fn decode_params(encoded: &str) -> Result<Map<String, Value>, RedirectParamsError> {
    let normalized = encoded.trim().replace(' ', "+");

    let bytes = match STANDARD_LENIENT.decode(&normalized) {
        Ok(bytes) => bytes,
        Err(_) => URL_SAFE_LENIENT.decode(&normalized)?,
    };

    let text = String::from_utf8(bytes)?;

    match serde_json::from_str::<Value>(&text)? {
        Value::Object(map) => Ok(map),
        other => Err(RedirectParamsError::NotAnObject(json_kind(&other))),
    }
}

/// Flattens a JSON object into an `application/x-www-form-urlencoded` string.
///
/// Keys keep the order of the decoded object. Scalars are written by value,
/// arrays repeat the key once per element, and `null` or nested objects yield
/// an empty value. Empty arrays are skipped.
pub fn flatten_params(params: &Map<String, Value>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, value) in params {
        match value {
            Value::Array(items) => {
                for item in items {
                    serializer.append_pair(key, &scalar_text(item));
                }
            }
            other => {
                serializer.append_pair(key, &scalar_text(other));
            }
        }
    }

    serializer.finish()
}

/// Appends a query string to `url`, before any fragment.
///
/// Uses `?` unless the URL already has a query, in which case `&` is used.
/// An empty `query` leaves the URL untouched.
pub fn append_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        return url.to_string();
    }

    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let separator = match base.find('?') {
        None => "?",
        Some(_) if base.ends_with('?') || base.ends_with('&') => "",
        Some(_) => "&",
    };

    let mut out = format!("{base}{separator}{query}");
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
    use serde_json::json;

    fn encode(value: &str) -> String {
        STANDARD.encode(value)
    }

    #[test]
    fn test_decode_simple_object() {
        let map = decode_params(&encode(r#"{"a":"1","b":"2"}"#)).unwrap();
        assert_eq!(map.get("a"), Some(&json!("1")));
        assert_eq!(map.get("b"), Some(&json!("2")));
    }

    #[test]
    fn test_decode_url_safe_without_padding() {
        let encoded = URL_SAFE_NO_PAD.encode(r#"{"q":"???"}"#);
        assert!(encoded.contains('_'));
        let map = decode_params(&encoded).unwrap();
        assert_eq!(map.get("q"), Some(&json!("???")));
    }

    #[test]
    fn test_decode_space_as_plus() {
        // "{"k":">>>"}" encodes with a '+' in standard base64
        let encoded = encode(r#"{"k":">>>"}"#);
        assert!(encoded.contains('+'));
        let mangled = encoded.replace('+', " ");
        let map = decode_params(&mangled).unwrap();
        assert_eq!(map.get("k"), Some(&json!(">>>")));
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        assert!(matches!(
            decode_params("!!!not base64!!!"),
            Err(RedirectParamsError::Base64(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        assert!(matches!(
            decode_params(&encode("hello world")),
            Err(RedirectParamsError::Json(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_object() {
        assert!(matches!(
            decode_params(&encode("[1,2,3]")),
            Err(RedirectParamsError::NotAnObject("array"))
        ));
        assert!(matches!(
            decode_params(&encode("42")),
            Err(RedirectParamsError::NotAnObject("number"))
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let encoded = STANDARD.encode([0xff, 0xfe, 0xfd]);
        assert!(matches!(
            decode_params(&encoded),
            Err(RedirectParamsError::Utf8(_))
        ));
    }

    #[test]
    fn test_flatten_keeps_key_order() {
        let map = decode_params(&encode(r#"{"b":"2","a":"1"}"#)).unwrap();
        assert_eq!(flatten_params(&map), "b=2&a=1");
    }

    #[test]
    fn test_flatten_scalars_and_arrays() {
        let map = decode_params(&encode(
            r#"{"n":3,"ok":true,"tags":["x","y"],"none":null,"nested":{"k":1},"empty":[]}"#,
        ))
        .unwrap();

        assert_eq!(
            flatten_params(&map),
            "n=3&ok=true&tags=x&tags=y&none=&nested="
        );
    }

    #[test]
    fn test_flatten_escapes_values() {
        let map = decode_params(&encode(r#"{"redirect to":"/a b&c"}"#)).unwrap();
        assert_eq!(flatten_params(&map), "redirect+to=%2Fa+b%26c");
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let encoded = encode(r#"{"a":"1","b":"2","c":[1,2]}"#);
        let first = flatten_params(&decode_params(&encoded).unwrap());
        let second = flatten_params(&decode_params(&encoded).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_append_query_plain_url() {
        assert_eq!(
            append_query("https://demo.example.com", "a=1&b=2"),
            "https://demo.example.com?a=1&b=2"
        );
    }

    #[test]
    fn test_append_query_existing_query() {
        assert_eq!(
            append_query("https://demo.example.com/?x=0", "a=1"),
            "https://demo.example.com/?x=0&a=1"
        );
        assert_eq!(
            append_query("https://demo.example.com/?", "a=1"),
            "https://demo.example.com/?a=1"
        );
    }

    #[test]
    fn test_append_query_keeps_fragment_last() {
        assert_eq!(
            append_query("https://demo.example.com/app#/home", "a=1"),
            "https://demo.example.com/app?a=1#/home"
        );
    }

    #[test]
    fn test_append_empty_query() {
        assert_eq!(
            append_query("https://demo.example.com", ""),
            "https://demo.example.com"
        );
    }
}
