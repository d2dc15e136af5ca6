use bytes::Bytes;
use reqwest::Client;
use showcase_core::{Context, Result};
use showcase_http_send_reqwest::ReqwestHttpSend;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Timeouts are the transport's concern: configure them on the client.
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("showcase-example/0.1")
        .build()
        .map_err(|e| showcase_core::Error::config_invalid("invalid client").with_source(e))?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let url = "http://showcase.doyoubuzz.com/api/v1/tags";
    println!("GET {url}");

    let req = http::Request::get(url).body(Bytes::new())?;
    match ctx.http_send_as_string(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("{}", resp.body());
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
