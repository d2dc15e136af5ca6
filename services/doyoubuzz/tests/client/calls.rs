use bytes::Bytes;
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::Value;
use showcase_core::{ErrorKind, Result};
use showcase_doyoubuzz::Params;

use super::super::{init_showcase, MockHttpSend};

const USERS: &str = r#"{
    "users": {
        "items": [
            {"username": "lvrmterjwea", "email": "lvrmterjwea@host.tld", "firstname": "Ada", "lastname": "Lovelace", "id": 1}
        ]
    },
    "total": 1,
    "next": null
}"#;

const TAGS: &str = r#"[{"id": 1, "name": "rust"}, {"id": 2, "name": "ruby"}]"#;

#[tokio::test]
async fn test_get_sends_signed_query() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let showcase = init_showcase(http.clone());

    showcase.get("/path", [("foo", "bar"), ("zab", "baz")]).await?;

    assert_eq!(
        http.requests(),
        vec![(
            Method::GET,
            "http://showcase.doyoubuzz.com/api/v1/path?foo=bar&zab=baz&apikey=an_api_key&timestamp=1370534334&hash=757b04a866f1d02f077471589341ff7a".to_string(),
            Bytes::new(),
        )]
    );
    Ok(())
}

#[tokio::test]
async fn test_put_sends_params_in_body() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let showcase = init_showcase(http.clone());

    showcase.put("/path", [("foo", "bar"), ("zab", "baz")]).await?;

    assert_eq!(
        http.requests(),
        vec![(
            Method::PUT,
            "http://showcase.doyoubuzz.com/api/v1/path?apikey=an_api_key&timestamp=1370534334&hash=11a68a1bb9e23c681438efb714c9ad4d".to_string(),
            Bytes::from_static(b"foo=bar&zab=baz"),
        )]
    );
    Ok(())
}

#[tokio::test]
async fn test_all_verbs() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let showcase = init_showcase(http.clone());

    showcase.get("/users", Params::new()).await?;
    showcase.post("/users", Params::new().with("email", "a@b.c")).await?;
    showcase.put("/users/1", Params::new().with("firstname", "Ada")).await?;
    showcase.delete("/users/1", Params::new()).await?;

    let methods: Vec<Method> = http.requests().into_iter().map(|(m, _, _)| m).collect();
    assert_eq!(
        methods,
        vec![Method::GET, Method::POST, Method::PUT, Method::DELETE]
    );

    for (_, uri, _) in http.requests() {
        assert!(uri.contains("apikey=an_api_key&timestamp=1370534334&hash="), "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn test_empty_params_are_still_signed() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let showcase = init_showcase(http.clone());

    showcase.get("/users", Params::new()).await?;

    let (_, uri, _) = http.requests().remove(0);
    assert_eq!(
        uri,
        "http://showcase.doyoubuzz.com/api/v1/users?apikey=an_api_key&timestamp=1370534334&hash=11a68a1bb9e23c681438efb714c9ad4d"
    );
    Ok(())
}

#[tokio::test]
async fn test_get_params_change_hash() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let showcase = init_showcase(http.clone());

    showcase.get("/path", [("foo", "bar")]).await?;
    showcase.get("/path", [("foo", "baz")]).await?;

    let hashes: Vec<String> = http
        .requests()
        .into_iter()
        .filter_map(|(_, uri, _)| uri.split("&hash=").nth(1).map(str::to_string))
        .collect();
    assert_eq!(hashes.len(), 2);
    assert_ne!(hashes[0], hashes[1]);
    Ok(())
}

#[tokio::test]
async fn test_reserved_params_are_rejected() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let showcase = init_showcase(http.clone());

    let err = showcase
        .get("/path", [("apikey", "evil"), ("timestamp", "1")])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(http.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_query_in_path_is_rejected() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let showcase = init_showcase(http.clone());

    let err = showcase
        .get("/users?page=2", [("foo", "bar")])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(http.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_no_content_is_empty_object() -> Result<()> {
    let showcase = init_showcase(MockHttpSend::new(StatusCode::NO_CONTENT, ""));

    let res = showcase.delete("/users/1", Params::new()).await?;

    assert!(res.is_object());
    assert!(res.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_numeric_params_are_stringified() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{}");
    let showcase = init_showcase(http.clone());

    showcase
        .get("/users", Params::new().with("page", 2).with("ratio", 0.5))
        .await?;

    let (_, uri, _) = http.requests().remove(0);
    assert!(uri.contains("?page=2&ratio=0.5&apikey="), "{uri}");
    Ok(())
}

#[tokio::test]
async fn test_returns_explorable_object() -> Result<()> {
    let showcase = init_showcase(MockHttpSend::new(StatusCode::OK, USERS));

    let res = showcase.get("/users", Params::new()).await?;

    assert_eq!(res.keys(), vec!["users", "total", "next"]);
    let first = &res["users"]["items"][0];
    assert_eq!(
        first.as_object().map(|m| m.keys().cloned().collect::<Vec<_>>()),
        Some(
            ["username", "email", "firstname", "lastname", "id"]
                .map(String::from)
                .to_vec()
        )
    );
    assert_eq!(first["username"], "lvrmterjwea");
    assert_eq!(
        res.path("users.items.0.username").and_then(Value::as_str),
        Some("lvrmterjwea")
    );
    Ok(())
}

#[tokio::test]
async fn test_returns_array() -> Result<()> {
    let showcase = init_showcase(MockHttpSend::new(StatusCode::OK, TAGS));

    let res = showcase.get("/tags", Params::new()).await?;

    assert!(res.is_array());
    assert!(res.first().is_some_and(Value::is_object));
    assert_eq!(res[0]["name"], "rust");
    assert_eq!(res.iter().count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_failed_call_raises_api_error() -> Result<()> {
    let showcase = init_showcase(MockHttpSend::new(
        StatusCode::FORBIDDEN,
        r#"{"error": "invalid hash"}"#,
    ));

    let err = showcase.get("/users", Params::new()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    assert_eq!(err.to_string(), "Forbidden");
    Ok(())
}

#[tokio::test]
async fn test_scalar_body_is_unexpected() -> Result<()> {
    let showcase = init_showcase(MockHttpSend::new(StatusCode::OK, "42"));

    let err = showcase.get("/users", Params::new()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(err.status(), None);
    Ok(())
}

#[tokio::test]
async fn test_missing_transport_is_unexpected() -> Result<()> {
    let showcase = showcase_doyoubuzz::Showcase::new("an_api_key", "an_api_secret")?;

    let err = showcase.get("/users", Params::new()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    Ok(())
}
