use crate::common;
use httpmock::Method::POST;
use jquants_rs::{JqError, listed};

#[tokio::test]
async fn refresh_token_is_exchanged_once_and_reused() {
    let server = common::setup_server();
    let auth = common::mock_auth_refresh(&server, "rt-1", "id-token-1");
    let listed_mock = common::mock_endpoint(
        &server,
        "/listed/info",
        "1301",
        &common::listed_body("1301", "Kyokuyo"),
    );

    let client = common::client(&server);

    let first = listed::info(&client, "1301").await.unwrap();
    let second = listed::info(&client, "1301").await.unwrap();

    assert_eq!(first.unwrap().company_name, "Kyokuyo");
    assert_eq!(second.unwrap().company_name, "Kyokuyo");

    // One token exchange serves both fetches.
    auth.assert_hits(1);
    listed_mock.assert_hits(2);
}

#[tokio::test]
async fn email_password_goes_through_the_two_step_exchange() {
    let server = common::setup_server();
    let auth_user = common::mock_auth_user(&server, "rt-intermediate");
    let auth_refresh = common::mock_auth_refresh(&server, "rt-intermediate", "id-token-2");
    let listed_mock = common::mock_endpoint(
        &server,
        "/listed/info",
        "7203",
        &common::listed_body("7203", "Toyota"),
    );

    let client = common::client_builder(&server)
        .email_password("user@example.com", "hunter2")
        .build()
        .unwrap();

    let info = listed::info(&client, "7203").await.unwrap().unwrap();
    assert_eq!(info.company_name, "Toyota");

    auth_user.assert_hits(1);
    auth_refresh.assert_hits(1);
    listed_mock.assert_hits(1);
}

#[tokio::test]
async fn expired_token_triggers_reauthentication_before_the_next_fetch() {
    let server = common::setup_server();
    let auth = common::mock_auth_refresh(&server, "rt-1", "id-token-1");
    let listed_mock = common::mock_endpoint(
        &server,
        "/listed/info",
        "1301",
        &common::listed_body("1301", "Kyokuyo"),
    );

    // A TTL inside the safety margin makes every cached token count as expired.
    let client = common::client_builder(&server)
        .refresh_token("rt-1")
        .token_ttl(std::time::Duration::from_millis(1))
        .build()
        .unwrap();

    listed::info(&client, "1301").await.unwrap();
    listed::info(&client, "1301").await.unwrap();

    auth.assert_hits(2);
    listed_mock.assert_hits(2);
}

#[tokio::test]
async fn rate_limited_token_endpoint_is_retried_then_reported_as_rate_limited() {
    let server = common::setup_server();
    let auth = server.mock(|when, then| {
        when.method(POST).path("/token/auth_refresh");
        then.status(429)
            .header("content-type", "application/json")
            .body(r#"{"message":"The rate limit has been exceeded."}"#);
    });

    // fast_retry: max_retries = 2, so 3 attempts total.
    let client = common::client(&server);
    let err = listed::info(&client, "1301").await.unwrap_err();

    auth.assert_hits(3);
    match err {
        JqError::RateLimited { attempts } => assert_eq!(attempts, 3),
        other => panic!("expected RateLimited, got {other:?}"),
    }
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn server_error_on_the_token_endpoint_is_not_a_credential_rejection() {
    let server = common::setup_server();
    let auth = server.mock(|when, then| {
        when.method(POST).path("/token/auth_refresh");
        then.status(503).body("Service Unavailable");
    });

    let client = common::client(&server);
    let err = listed::info(&client, "1301").await.unwrap_err();

    auth.assert_hits(3);
    match err {
        JqError::Transient {
            status, attempts, ..
        } => {
            assert_eq!(status, 503);
            assert_eq!(attempts, 3);
        }
        other => panic!("expected Transient, got {other:?}"),
    }
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn missing_credentials_fail_without_any_request() {
    let server = common::setup_server();
    let client = common::client_builder(&server).build().unwrap();

    let err = listed::info(&client, "1301").await.unwrap_err();
    assert!(matches!(err, JqError::Auth(_)), "got {err:?}");
}

#[tokio::test]
async fn rejected_refresh_token_is_fatal_and_not_retried() {
    let server = common::setup_server();
    let auth = server.mock(|when, then| {
        when.method(POST).path("/token/auth_refresh");
        then.status(400)
            .header("content-type", "application/json")
            .body(r#"{"message":"refreshtoken is invalid or expired"}"#);
    });

    let client = common::client(&server);

    let err = listed::info(&client, "1301").await.unwrap_err();
    assert!(matches!(err, JqError::Auth(_)), "got {err:?}");
    assert!(err.is_fatal());
    auth.assert_hits(1);
}
