use std::ops::Index;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use showcase_core::{Error, Result};

static NULL: Value = Value::Null;

/// Parsed body of a successful Showcase API call.
///
/// The API answers with either a JSON object or a JSON array. Fields can be
/// reached by key, by index, by chained indexing, or by dotted path:
///
/// ```
/// use showcase_doyoubuzz::Response;
///
/// let res = Response::from_slice(br#"{"users": {"items": [{"username": "lvrmterjwea"}]}}"#)?;
///
/// assert_eq!(res["users"]["items"][0]["username"], "lvrmterjwea");
/// assert_eq!(res.path("users.items.0.username").and_then(|v| v.as_str()), Some("lvrmterjwea"));
/// assert!(res.get("users").is_some());
/// # Ok::<(), showcase_core::Error>(())
/// ```
///
/// Missing keys indexed with `[]` yield `Value::Null` rather than panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct Response(Value);

impl Response {
    /// Parse a response body.
    ///
    /// Scalars and `null` at the top level are rejected.
    pub fn from_slice(bs: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bs)?;
        Self::try_from(value)
    }

    /// Get a field of an object response.
    ///
    /// Always `None` for array responses.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object()?.get(key)
    }

    /// Get an element of an array response.
    ///
    /// Always `None` for object responses.
    pub fn at(&self, idx: usize) -> Option<&Value> {
        self.0.as_array()?.get(idx)
    }

    /// Resolve a dotted path such as `users.items.0.username`.
    ///
    /// Numeric segments index into arrays, other segments look up object keys.
    pub fn path(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.0, |current, seg| match current {
            Value::Object(m) => m.get(seg),
            Value::Array(v) => v.get(seg.parse::<usize>().ok()?),
            _ => None,
        })
    }

    /// Object keys in document order; empty for arrays.
    pub fn keys(&self) -> Vec<&str> {
        match &self.0 {
            Value::Object(m) => m.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Number of fields or elements.
    pub fn len(&self) -> usize {
        match &self.0 {
            Value::Object(m) => m.len(),
            Value::Array(v) => v.len(),
            _ => 0,
        }
    }

    /// Whether the response has no fields or elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the response is an object.
    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    /// Whether the response is an array.
    pub fn is_array(&self) -> bool {
        self.0.is_array()
    }

    /// The object, if the response is one.
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// The elements, if the response is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        self.0.as_array().map(Vec::as_slice)
    }

    /// First element of an array response.
    pub fn first(&self) -> Option<&Value> {
        self.at(0)
    }

    /// Iterate over array elements; yields nothing for objects.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.as_array().unwrap_or_default().iter()
    }

    /// Deserialize the response into a typed value.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(<T as serde::Deserialize>::deserialize(&self.0)?)
    }

    /// Borrow the response as a plain JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Convert into a plain JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl TryFrom<Value> for Response {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(_) | Value::Array(_) => Ok(Response(value)),
            v => Err(Error::unexpected(format!(
                "response must be a json object or array, got: {v}"
            ))),
        }
    }
}

impl From<Response> for Value {
    fn from(res: Response) -> Self {
        res.into_value()
    }
}

impl Index<&str> for Response {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for Response {
    type Output = Value;

    fn index(&self, idx: usize) -> &Value {
        self.at(idx).unwrap_or(&NULL)
    }
}

impl<'a> IntoIterator for &'a Response {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
