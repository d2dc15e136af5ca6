//! Showcase API request signer
use log::debug;
use showcase_core::hash::hex_md5_signature;
use showcase_core::time::format_timestamp;
use showcase_core::{Context, Error, Result, SignRequest, SigningRequest};

use super::constants::*;
use super::credential::Credential;

/// RequestSigner that implements the Showcase query string authentication.
///
/// The signer appends `apikey` and `timestamp` to the query, then `hash`
/// computed over every query value ordered by parameter name:
///
/// ```text
/// hash = hex(md5(value_1 + ... + value_n + api_secret))
/// ```
///
/// Only the query is signed. Requests carrying their parameters in the body
/// (POST, PUT) are therefore signed over `apikey` and `timestamp` alone.
///
/// A query that already holds `apikey`, `timestamp` or `hash` is rejected.
#[derive(Debug, Default)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let k = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        let now = ctx.now();

        let mut req = SigningRequest::build(parts)?;
        if let Some(key) = [APIKEY, TIMESTAMP, HASH]
            .into_iter()
            .find(|key| req.query_get(key).is_some())
        {
            return Err(Error::request_invalid(format!(
                "query must not contain reserved parameter: {key}"
            )));
        }

        req.query_push(APIKEY, &k.api_key);
        req.query_push(TIMESTAMP, format_timestamp(now));

        let values = req.query_values_sorted();
        debug!(
            "signing {} {} over {} query values",
            req.method,
            req.path,
            values.len()
        );
        let hash = hex_md5_signature(&k.api_secret, values);
        req.query_push(HASH, hash);

        req.apply(parts)
    }
}
