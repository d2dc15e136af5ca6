use std::env;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use showcase_core::{Context, FixedClock, HttpSend, Result};
use showcase_doyoubuzz::Showcase;

mod client;

/// Mock transport that records every request and replays a canned response.
#[derive(Debug, Clone)]
pub struct MockHttpSend {
    status: StatusCode,
    body: Bytes,
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl MockHttpSend {
    pub fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body: Bytes::from_static(body.as_bytes()),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<(http::Method, String, Bytes)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| (r.method().clone(), r.uri().to_string(), r.body().clone()))
            .collect()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(req);

        Ok(http::Response::builder()
            .status(self.status)
            .header("content-type", "application/json")
            .body(self.body.clone())?)
    }
}

pub const TIMESTAMP: i64 = 1370534334;

/// Build a client pinned at [`TIMESTAMP`] that talks to `http`.
pub fn init_showcase(http: MockHttpSend) -> Showcase {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new()
        .with_http_send(http)
        .with_clock(FixedClock::from_timestamp(TIMESTAMP).unwrap());

    Showcase::builder()
        .api_key("an_api_key")
        .api_secret("an_api_secret")
        .context(ctx)
        .build()
        .expect("client must build")
}

/// Client against the real service, only when `SHOWCASE_TEST=on`.
pub fn init_live_showcase() -> Option<Showcase> {
    let _ = env_logger::builder().is_test(true).try_init();

    if env::var("SHOWCASE_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new()
        .with_env(showcase_core::OsEnv)
        .with_http_send(showcase_http_send_reqwest::ReqwestHttpSend::default());

    Some(
        Showcase::builder()
            .context(ctx)
            .from_env()
            .build()
            .expect("SHOWCASE_API_KEY and SHOWCASE_API_SECRET must be set"),
    )
}
