//! Generic API response container.

use crate::error::{BrawlhallaError, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// A response whose fields are exactly what the API returned.
///
/// Single-object responses expose their fields 1:1 through [`Response::get`].
/// For endpoints returning a JSON array, each element is available through
/// [`Response::responses`] as its own `Response`.
///
/// ```rust
/// use brawlhalla::Response;
/// use serde_json::json;
///
/// let r = Response::from_value(json!({"brawlhalla_id": 2, "name": "bmg | dan"})).unwrap();
/// assert_eq!(r.get("brawlhalla_id"), Some(&json!(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Object(Map<String, Value>),
    List(Vec<Response>),
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Response {
    /// Build from a decoded body. Only objects and arrays (of objects or
    /// arrays) are accepted.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Response::Object(map)),
            Value::Array(items) => items
                .into_iter()
                .map(Response::from_value)
                .collect::<Result<Vec<_>>>()
                .map(Response::List),
            other => Err(BrawlhallaError::UnsupportedResponse {
                kind: kind_of(&other).to_string(),
            }),
        }
    }

    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Self::from_value(serde_json::from_slice(body)?)
    }

    /// Field of a single-object response.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            Response::Object(map) => map.get(field),
            Response::List(_) => None,
        }
    }

    /// String field of a single-object response.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Integer field of a single-object response.
    pub fn get_u64(&self, field: &str) -> Option<u64> {
        self.get(field).and_then(Value::as_u64)
    }

    /// Elements of an array response.
    pub fn responses(&self) -> Option<&[Response]> {
        match self {
            Response::List(items) => Some(items),
            Response::Object(_) => None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        let map = match self {
            Response::Object(map) => Some(map),
            Response::List(_) => None,
        };
        map.into_iter().flat_map(|m| m.keys().map(String::as_str))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Response::List(_))
    }

    /// True for an array response with no elements.
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Response::List(items) if items.is_empty())
    }

    pub fn to_value(&self) -> Value {
        match self {
            Response::Object(map) => Value::Object(map.clone()),
            Response::List(items) => Value::Array(items.iter().map(Response::to_value).collect()),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Response::Object(map) => Value::Object(map),
            Response::List(items) => {
                Value::Array(items.into_iter().map(Response::into_value).collect())
            }
        }
    }

    /// Decode into a typed record.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.into_value())?)
    }
}

impl TryFrom<Value> for Response {
    type Error = BrawlhallaError;

    fn try_from(value: Value) -> Result<Self> {
        Response::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_object_fields_are_one_to_one() {
        let r = Response::from_value(json!({"brawlhalla_id": 2, "name": "bmg | dan"})).unwrap();

        assert!(!r.is_list());
        assert_eq!(r.get_u64("brawlhalla_id"), Some(2));
        assert_eq!(r.get_str("name"), Some("bmg | dan"));
        assert_eq!(r.get("missing"), None);
        assert!(r.responses().is_none());

        let mut fields: Vec<_> = r.fields().collect();
        fields.sort();
        assert_eq!(fields, vec!["brawlhalla_id", "name"]);
    }

    #[test]
    fn test_array_becomes_nested_responses() {
        let r = Response::from_value(json!([
            {"rank": "1", "name": "a"},
            {"rank": "2", "name": "b"}
        ]))
        .unwrap();

        let items = r.responses().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].get_str("name"), Some("b"));
        assert_eq!(r.get("name"), None);
        assert_eq!(r.fields().count(), 0);
    }

    #[test]
    fn test_empty_array_is_empty_list() {
        let r = Response::from_value(json!([])).unwrap();
        assert_eq!(r.responses().unwrap().len(), 0);
        assert!(r.is_empty_list());

        assert!(!Response::from_value(json!([{}])).unwrap().is_empty_list());
        assert!(!Response::from_value(json!({})).unwrap().is_empty_list());
    }

    #[test]
    fn test_scalars_are_unsupported() {
        for (value, kind) in [
            (json!("text"), "string"),
            (json!(3), "number"),
            (json!(true), "bool"),
            (json!(null), "null"),
        ] {
            match Response::from_value(value) {
                Err(BrawlhallaError::UnsupportedResponse { kind: got }) => assert_eq!(got, kind),
                other => panic!("expected UnsupportedResponse, got {:?}", other),
            }
        }

        // A scalar nested inside an array is rejected too.
        assert!(Response::from_value(json!([{"a": 1}, 2])).is_err());
    }

    #[test]
    fn test_deserialize_into_typed_record() {
        #[derive(Deserialize)]
        struct Search {
            brawlhalla_id: u64,
            name: String,
        }

        let r = Response::from_slice(br#"{"brawlhalla_id": 2, "name": "bmg | dan"}"#).unwrap();
        let search: Search = r.deserialize().unwrap();
        assert_eq!(search.brawlhalla_id, 2);
        assert_eq!(search.name, "bmg | dan");
    }

    #[test]
    fn test_value_round_trip_and_serialize() {
        let body = json!([{"a": [1, 2]}, [{"b": null}]]);
        let r = Response::try_from(body.clone()).unwrap();
        assert_eq!(r.to_value(), body);
        assert_eq!(serde_json::to_value(&r).unwrap(), body);
    }
}
