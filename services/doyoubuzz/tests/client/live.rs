use log::warn;
use showcase_core::{ErrorKind, Result};
use showcase_doyoubuzz::{Params, Showcase};

use super::super::init_live_showcase;

#[tokio::test]
async fn test_live_get_tags() -> Result<()> {
    let Some(showcase) = init_live_showcase() else {
        warn!("SHOWCASE_TEST is not set, skipped");
        return Ok(());
    };

    let res = showcase.get("/tags", Params::new()).await?;
    assert!(res.is_array() || res.is_object());
    Ok(())
}

#[tokio::test]
async fn test_live_rejects_wrong_secret() -> Result<()> {
    let Some(showcase) = init_live_showcase() else {
        warn!("SHOWCASE_TEST is not set, skipped");
        return Ok(());
    };

    let wrong = Showcase::builder()
        .api_key("an_api_key")
        .api_secret("not_the_secret")
        .endpoint(showcase.endpoint())
        .context(showcase.context().clone())
        .build()?;

    let err = wrong.get("/users", Params::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(err.status().is_some_and(|s| s.is_client_error()));
    Ok(())
}
