//! Safe JSON (de)serialization shims.
//!
//! A "safe" JSON value is one filtered down to the subset of data that is
//! actually representable in JSON: values whose serialization fails (a
//! failing `Serialize` impl, a map with non-string keys) are discarded
//! rather than poisoning the whole document, and rendering falls back to
//! `"{}"` / `"[]"` instead of erroring.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Serialized form of an empty JSON object.
pub const EMPTY_JSON_OBJECT: &str = "{}";

/// Serialized form of an empty JSON array.
pub const EMPTY_JSON_ARRAY: &str = "[]";

/// Error type for the dictionary-shaped serde shims.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The underlying JSON conversion failed.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    /// The value serialized to something other than a JSON object.
    #[error("value does not serialize to a JSON object")]
    NotAnObject,
}

/// Renders a JSON value to a string.
///
/// Rendering a JSON tree cannot ordinarily fail; should it, the fallback is
/// the empty form matching the value's shape (`"{}"` for objects, `"[]"`
/// for arrays, `"null"` otherwise).
pub fn json_string(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| match value {
        Value::Object(_) => EMPTY_JSON_OBJECT.to_owned(),
        Value::Array(_) => EMPTY_JSON_ARRAY.to_owned(),
        _ => Value::Null.to_string(),
    })
}

/// Converts a value to JSON, returning `None` when it is not representable.
pub fn safe_json_value<T: Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok()
}

/// Converts a slice element-by-element, discarding elements that are not
/// representable in JSON.
pub fn safe_json_array<T: Serialize>(items: &[T]) -> Vec<Value> {
    items.iter().filter_map(safe_json_value).collect()
}

/// Converts a string-keyed map value-by-value, discarding entries whose
/// values are not representable in JSON.
pub fn safe_json_object<T: Serialize>(map: &HashMap<String, T>) -> Map<String, Value> {
    map.iter()
        .filter_map(|(key, value)| Some((key.clone(), safe_json_value(value)?)))
        .collect()
}

/// Renders a slice as a safe JSON array string; an empty slice renders as
/// `"[]"`.
pub fn safe_json_array_string<T: Serialize>(items: &[T]) -> String {
    json_string(&Value::Array(safe_json_array(items)))
}

/// Renders a map as a safe JSON object string; an empty map renders as
/// `"{}"`.
pub fn safe_json_object_string<T: Serialize>(map: &HashMap<String, T>) -> String {
    json_string(&Value::Object(safe_json_object(map)))
}

/// Serializes a value into a JSON object map.
///
/// Errors from the underlying conversion are re-thrown verbatim; a value
/// that serializes to a non-object shape is rejected.
pub fn to_json_map<T: Serialize>(value: &T) -> Result<Map<String, Value>, JsonError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(JsonError::NotAnObject),
    }
}

/// Deserializes a value from a JSON object map, re-throwing decode errors
/// verbatim.
pub fn from_json_map<T: DeserializeOwned>(map: Map<String, Value>) -> Result<T, JsonError> {
    Ok(serde_json::from_value(Value::Object(map))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde::{Deserialize, Serializer};

    /// Stand-in for a value JSON cannot represent, e.g. a raw bitmap handle.
    struct RawBitmap;

    impl Serialize for RawBitmap {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("raw bitmap data is not JSON"))
        }
    }

    #[derive(Serialize)]
    #[serde(untagged)]
    enum Item {
        Number(i32),
        Text(String),
        Opaque(RawBitmap),
    }

    mod safe_array_tests {
        use super::*;

        #[test]
        fn test_unserializable_elements_are_filtered() {
            let items = vec![
                Item::Number(1),
                Item::Opaque(RawBitmap),
                Item::Text("two".to_owned()),
            ];

            let rendered = safe_json_array_string(&items);
            assert_eq!(rendered, r#"[1,"two"]"#);
        }

        #[test]
        fn test_empty_array_renders_empty_brackets() {
            let empty: Vec<i32> = Vec::new();
            assert_eq!(safe_json_array_string(&empty), "[]");
        }

        #[test]
        fn test_all_elements_unserializable() {
            let items = vec![RawBitmap, RawBitmap];
            assert_eq!(safe_json_array_string(&items), "[]");
        }

        #[test]
        fn test_non_string_keyed_map_element_is_filtered() {
            let mut weird: HashMap<(i32, i32), i32> = HashMap::new();
            weird.insert((1, 2), 3);

            assert!(safe_json_value(&weird).is_none());
        }
    }

    mod safe_object_tests {
        use super::*;

        #[test]
        fn test_unserializable_values_are_filtered() {
            let mut map: HashMap<String, Item> = HashMap::new();
            map.insert("count".to_owned(), Item::Number(7));
            map.insert("image".to_owned(), Item::Opaque(RawBitmap));

            let object = safe_json_object(&map);
            assert_eq!(object.len(), 1);
            assert_eq!(object.get("count"), Some(&Value::from(7)));
        }

        #[test]
        fn test_empty_object_renders_empty_braces() {
            let empty: HashMap<String, i32> = HashMap::new();
            assert_eq!(safe_json_object_string(&empty), "{}");
        }
    }

    mod map_shim_tests {
        use super::*;

        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Payment {
            amount: f64,
            currency: String,
        }

        #[test]
        fn test_to_json_map_round_trip() {
            let payment = Payment {
                amount: 12.5,
                currency: "KWD".to_owned(),
            };

            let map = to_json_map(&payment).unwrap();
            assert_eq!(map.get("currency"), Some(&Value::from("KWD")));

            let back: Payment = from_json_map(map).unwrap();
            assert_eq!(back, payment);
        }

        #[test]
        fn test_to_json_map_rejects_non_objects() {
            assert!(matches!(to_json_map(&42), Err(JsonError::NotAnObject)));
        }

        #[test]
        fn test_from_json_map_rethrows_decode_errors() {
            let mut map = Map::new();
            map.insert("amount".to_owned(), Value::from("not a number"));
            map.insert("currency".to_owned(), Value::from("KWD"));

            let result: Result<Payment, _> = from_json_map(map);
            assert!(matches!(result, Err(JsonError::Serde(_))));
        }
    }

    mod json_string_tests {
        use super::*;

        #[test]
        fn test_json_string_renders_values() {
            assert_eq!(json_string(&Value::from(1)), "1");
            assert_eq!(json_string(&Value::Array(vec![])), "[]");
            assert_eq!(json_string(&Value::Object(Map::new())), "{}");
        }
    }
}
