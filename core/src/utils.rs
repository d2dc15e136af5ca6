//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a secret for debug output.
///
/// - Empty values print as `EMPTY`.
/// - Values shorter than 12 characters are entirely hidden.
/// - Longer values keep their first and last three characters, so two
///   different keys can still be told apart in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 || !self.0.is_char_boundary(3) || !self.0.is_char_boundary(length - 3)
        {
            f.write_str("***")
        } else {
            f.write_str(&self.0[..3])?;
            f.write_str("***")?;
            f.write_str(&self.0[length - 3..])
        }
    }
}

/// Join an endpoint and a request path with exactly one `/` between them.
///
/// ```
/// use showcase_core::utils::join_path;
///
/// assert_eq!(
///     join_path("http://showcase.doyoubuzz.com/api/v1/", "/users"),
///     "http://showcase.doyoubuzz.com/api/v1/users"
/// );
/// ```
pub fn join_path(endpoint: &str, path: &str) -> String {
    let endpoint = endpoint.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    let mut s = String::with_capacity(endpoint.len() + path.len() + 1);
    s.push_str(endpoint);
    s.push('/');
    s.push_str(path);
    s
}
