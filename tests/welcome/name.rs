//! tests/welcome/name.rs
//! Checks the personalized greeting at GET /{name}.

// Include the helper module defined in tests/mod.rs.
#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn name_is_echoed_into_greeting() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/Ada", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = resp.text().await.unwrap();
    assert_eq!(body, "Hello, Ada!");
}

#[tokio::test]
async fn percent_encoded_name_is_decoded_before_substitution() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    // "Ada%20Lovelace" is one path segment; axum decodes it before the
    // handler sees it.
    let resp: reqwest::Response = client
        .get(format!("{}/Ada%20Lovelace", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "Hello, Ada Lovelace!");

    // Non-ASCII survives the round trip too.
    let resp: reqwest::Response = client
        .get(format!("{}/J%C3%BCrgen", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "Hello, Jürgen!");
}

#[tokio::test]
async fn unusual_names_are_not_validated() {
    let base_url: String = common::spawn_app();

    // Anything the router accepts as a single segment is greeted verbatim.
    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/123-_.~", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "Hello, 123-_.~!");
}
