/// Ordered request parameters.
///
/// Values are stored in their string form: numbers and other scalars are
/// converted with [`ToString`] when pushed.
///
/// ```
/// use showcase_doyoubuzz::Params;
///
/// let params = Params::new().with("foo", "bar").with("page", 2);
/// assert_eq!(params.get("page"), Some("2"));
///
/// let same: Params = [("foo", "bar"), ("page", "2")].into();
/// assert_eq!(params, same);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Create empty params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, keeping insertion order.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.push((key.into(), value.to_string()));
    }

    /// Append a parameter and return self.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Get the first value with given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn to_form_urlencoded(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: ToString> From<Vec<(K, V)>> for Params {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.push(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_params_keep_insertion_order() {
        let params = Params::new()
            .with("zab", "baz")
            .with("foo", "bar")
            .with("external_id", 12345);

        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![("zab", "baz"), ("foo", "bar"), ("external_id", "12345")]
        );
        assert_eq!(params.len(), 3);
        assert!(params.contains_key("foo"));
        assert!(!params.contains_key("bar"));
    }

    #[test]
    fn test_params_to_form_urlencoded() {
        let params: Params = [("email", "email@host.tld"), ("name", "John Doe")].into();

        assert_eq!(params.to_form_urlencoded(), "email=email%40host.tld&name=John+Doe");
        assert_eq!(Params::new().to_form_urlencoded(), "");
    }
}
