use crate::common;
use httpmock::Method::GET;
use jquants_rs::{JqError, listed};

#[tokio::test]
async fn rejected_token_triggers_one_reauth_then_replay_succeeds() {
    let server = common::setup_server();
    let client = common::client(&server);

    // Warm the session with a stale token.
    let mut stale_auth = common::mock_auth_refresh(&server, "rt-1", "stale");
    let warmup = common::mock_endpoint(
        &server,
        "/listed/info",
        "0000",
        &common::listed_body("0000", "Warmup"),
    );
    listed::info(&client, "0000").await.unwrap();
    stale_auth.assert_hits(1);
    warmup.assert_hits(1);
    stale_auth.delete();

    // From here on the token endpoint hands out a fresh token.
    let fresh_auth = common::mock_auth_refresh(&server, "rt-1", "fresh");

    // The data endpoint rejects the stale token and accepts the fresh one.
    let rejected = server.mock(|when, then| {
        when.method(GET)
            .path("/listed/info")
            .query_param("code", "1301")
            .header("authorization", "Bearer stale");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"message":"The incoming token is invalid or expired."}"#);
    });
    let accepted = server.mock(|when, then| {
        when.method(GET)
            .path("/listed/info")
            .query_param("code", "1301")
            .header("authorization", "Bearer fresh");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::listed_body("1301", "Kyokuyo"));
    });

    let info = listed::info(&client, "1301").await.unwrap().unwrap();
    assert_eq!(info.company_name, "Kyokuyo");

    rejected.assert_hits(1);
    fresh_auth.assert_hits(1);
    accepted.assert_hits(1);
}

#[tokio::test]
async fn second_consecutive_rejection_is_fatal() {
    let server = common::setup_server();
    let auth = common::mock_auth_refresh(&server, "rt-1", "id-token-1");
    let rejected = server.mock(|when, then| {
        when.method(GET)
            .path("/listed/info")
            .query_param("code", "1301");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"message":"The incoming token is invalid or expired."}"#);
    });

    let client = common::client(&server);

    let err = listed::info(&client, "1301").await.unwrap_err();
    assert!(matches!(err, JqError::Auth(_)), "got {err:?}");

    // Initial exchange plus exactly one re-authentication.
    auth.assert_hits(2);
    rejected.assert_hits(2);
}
