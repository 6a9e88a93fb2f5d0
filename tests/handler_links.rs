mod common;

#[tokio::test]
async fn test_links_empty_for_new_account() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let response = server.get("/links").authorization_bearer(&token).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>().as_array().unwrap().len(),
        0
    );
}

#[tokio::test]
async fn test_links_most_recent_first() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    common::shorten(&server, &token, "https://example.com/first").await;
    common::shorten(&server, &token, "https://example.com/second").await;
    common::shorten(&server, &token, "https://example.com/third").await;

    let response = server.get("/links").authorization_bearer(&token).await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let urls: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["original_url"].as_str().unwrap())
        .collect();

    assert_eq!(
        urls,
        vec![
            "https://example.com/third",
            "https://example.com/second",
            "https://example.com/first"
        ]
    );
}

#[tokio::test]
async fn test_links_scoped_to_owner() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let alice = common::register_and_login(&server, "alice@example.com", "pw123456").await;
    let bob = common::register_and_login(&server, "bob@example.com", "pw123456").await;

    common::shorten(&server, &alice, "https://example.com/alice").await;
    common::shorten(&server, &bob, "https://example.com/bob").await;

    let response = server.get("/links").authorization_bearer(&alice).await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let links = body.as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["original_url"], "https://example.com/alice");
}

#[tokio::test]
async fn test_links_include_short_url() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let created = common::shorten(&server, &token, "https://example.com").await;
    let short_id = created["short_id"].as_str().unwrap();

    let response = server.get("/links").authorization_bearer(&token).await;
    let body = response.json::<serde_json::Value>();

    assert_eq!(
        body[0]["short_url"],
        format!("{}/r/{}", common::TEST_BASE_URL, short_id)
    );
}
