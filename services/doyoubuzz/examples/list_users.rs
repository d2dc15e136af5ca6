//! List users with credentials taken from `SHOWCASE_API_KEY` and
//! `SHOWCASE_API_SECRET`.

use log::info;
use showcase_core::{Context, ErrorKind, OsEnv, Result};
use showcase_doyoubuzz::{Params, Showcase};
use showcase_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default());
    let showcase = Showcase::builder().context(ctx).from_env().build()?;

    match showcase.get("/users", Params::new().with("page", 1)).await {
        Ok(res) => {
            info!("total users: {}", res["total"]);
            for user in res["users"]["items"].as_array().into_iter().flatten() {
                println!("{} <{}>", user["username"], user["email"]);
            }
        }
        Err(err) if err.kind() == ErrorKind::Api => {
            eprintln!("api refused the call: {:?} {}", err.status(), err);
        }
        Err(err) => return Err(err),
    }

    Ok(())
}
