use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderValue, Method, StatusCode};
use log::{debug, warn};
use serde_json::{Map, Value};
use showcase_core::utils::join_path;
use showcase_core::{Context, Error, Result, Signer};

use crate::sso;
use crate::{Config, Credential, Params, RequestSigner, Response};

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Client for the DoYouBuzz Showcase API.
///
/// Every call is signed with the api key and secret given at construction.
///
/// ```no_run
/// use showcase_core::Context;
/// use showcase_doyoubuzz::{Params, Showcase};
/// use showcase_http_send_reqwest::ReqwestHttpSend;
///
/// # async fn example() -> showcase_core::Result<()> {
/// let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
/// let showcase = Showcase::builder()
///     .api_key("an_api_key")
///     .api_secret("an_api_secret")
///     .context(ctx)
///     .build()?;
///
/// let res = showcase.get("/users", Params::new()).await?;
/// println!("first user: {}", res["users"]["items"][0]["username"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Showcase {
    config: Config,
    signer: Signer<Credential>,
}

impl Showcase {
    /// Create a client with the default context and endpoint.
    ///
    /// Fails with a credential error if `api_key` or `api_secret` is empty.
    /// The default context has no HTTP client; use [`Showcase::builder`] to
    /// configure one.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::builder()
            .api_key(api_key)
            .api_secret(api_secret)
            .build()
    }

    /// Create a builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        self.config.endpoint()
    }

    /// Context used to sign and send requests.
    pub fn context(&self) -> &Context {
        self.signer.context()
    }

    /// Send a signed GET request, `params` go in the query string.
    pub async fn get(&self, path: &str, params: impl Into<Params>) -> Result<Response> {
        self.request(Method::GET, path, params.into()).await
    }

    /// Send a signed POST request, `params` go in the body.
    pub async fn post(&self, path: &str, params: impl Into<Params>) -> Result<Response> {
        self.request(Method::POST, path, params.into()).await
    }

    /// Send a signed PUT request, `params` go in the body.
    pub async fn put(&self, path: &str, params: impl Into<Params>) -> Result<Response> {
        self.request(Method::PUT, path, params.into()).await
    }

    /// Send a signed DELETE request, `params` go in the query string.
    pub async fn delete(&self, path: &str, params: impl Into<Params>) -> Result<Response> {
        self.request(Method::DELETE, path, params.into()).await
    }

    /// Send a signed request with any method.
    ///
    /// POST, PUT and PATCH carry `params` as a form-urlencoded body that is
    /// not covered by the hash. Other methods carry them in the query string.
    pub async fn request(&self, method: Method, path: &str, params: Params) -> Result<Response> {
        let req = self.build_request(method, path, &params).await?;

        let method = req.method().clone();
        let path = req.uri().path().to_string();
        debug!("sending {method} {path}");

        let resp = self.context().http_send(req).await?;
        parse_response(resp).map_err(|err| {
            if let Some(status) = err.status() {
                warn!("{method} {path} failed with status {status}");
            }
            err
        })
    }

    /// Build the signed request without sending it.
    ///
    /// `path` must not carry a query string or fragment; parameters belong
    /// in `params`.
    pub async fn build_request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<http::Request<Bytes>> {
        if path.contains(['?', '#']) {
            return Err(Error::request_invalid(format!(
                "path must not contain a query string or fragment, got: {path}"
            )));
        }

        let url = join_path(self.endpoint(), path);
        let has_body = carries_body(&method);

        let mut req = http::Request::builder()
            .method(method)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        let body = if has_body {
            req = req.header(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
            req = req.uri(url);
            Bytes::from(params.to_form_urlencoded())
        } else if params.is_empty() {
            req = req.uri(url);
            Bytes::new()
        } else {
            req = req.uri(format!("{url}?{}", params.to_form_urlencoded()));
            Bytes::new()
        };

        let (mut parts, body) = req.body(body)?.into_parts();
        self.signer.sign(&mut parts).await?;

        Ok(http::Request::from_parts(parts, body))
    }

    /// Build a signed SSO redirect URL on the configured Showcase site.
    ///
    /// See [`sso_redirect_url`](crate::sso_redirect_url) for the validation and signing rules.
    pub fn sso_redirect_url(
        &self,
        company_name: &str,
        timestamp: i64,
        sso_secret: &str,
        attributes: &Params,
    ) -> Result<String> {
        sso::build_redirect_url(
            self.config.sso_base_url(),
            self.config.sso_locale(),
            company_name,
            timestamp,
            sso_secret,
            attributes,
        )
    }
}

fn carries_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// Turn a raw response into [`Response`] or an API error.
///
/// Non-2xx statuses are never retried. The error message is the canonical
/// reason phrase of the status, or the body if the status has none.
///
/// An empty 2xx body, such as `204 No Content`, parses as an empty object.
pub fn parse_response(resp: http::Response<Bytes>) -> Result<Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(api_error(status, resp.body()));
    }

    let body = resp.body();
    if body.iter().all(u8::is_ascii_whitespace) {
        return Response::try_from(Value::Object(Map::new()));
    }
    Response::from_slice(body)
}

fn api_error(status: StatusCode, body: &[u8]) -> Error {
    let message = match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => String::from_utf8_lossy(body).trim().to_string(),
    };

    Error::api(status, message)
}

/// Builder for [`Showcase`].
#[derive(Debug, Default)]
pub struct Builder {
    config: Config,
    ctx: Option<Context>,
    load_env: bool,
}

impl Builder {
    /// Set the api key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Set the api secret.
    pub fn api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.config.api_secret = Some(api_secret.into());
        self
    }

    /// Set the REST endpoint, `http://showcase.doyoubuzz.com/api/v1` by default.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    /// Replace the whole config.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the context providing HTTP, environment and clock.
    pub fn context(mut self, ctx: Context) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// Fill unset config fields from the context environment on build.
    pub fn from_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    /// Build the client.
    ///
    /// Fails before any network activity if the api key or secret is missing.
    pub fn build(self) -> Result<Showcase> {
        let ctx = self.ctx.unwrap_or_default();
        let config = if self.load_env {
            self.config.from_env(&ctx)
        } else {
            self.config
        };

        let endpoint = config.endpoint();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(Error::config_invalid(format!(
                "endpoint must be an http(s) url, got: {endpoint}"
            )));
        }

        let credential = config.credential()?;
        debug!("building showcase client for {endpoint} with {credential:?}");

        let signer = Signer::new(ctx, credential, RequestSigner::new())?;
        Ok(Showcase { config, signer })
    }
}
