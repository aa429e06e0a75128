use crate::common;
use chrono::NaiveDate;
use httpmock::Method::GET;
use jquants_rs::prices;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[tokio::test]
async fn parses_daily_quotes_and_requests_the_compact_date_range() {
    let server = common::setup_server();
    let _auth = common::mock_auth_refresh(&server, "rt-1", "id-token-1");
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/prices/daily_quotes")
            .query_param("code", "1301")
            .query_param("from", "20241201")
            .query_param("to", "20241231");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::quotes_body(
                "1301",
                &[("2024-12-26", 2480.0), ("2024-12-27", 2500.0)],
            ));
    });

    let client = common::client(&server);
    let quotes = prices::daily_quotes(&client, "1301", d(2024, 12, 1), d(2024, 12, 31))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[1].date, d(2024, 12, 27));
    assert_eq!(quotes[1].close, Some(2500.0));
    assert_eq!(quotes[1].code, "1301");
}

#[tokio::test]
async fn null_close_survives_as_none() {
    let server = common::setup_server();
    let _auth = common::mock_auth_refresh(&server, "rt-1", "id-token-1");
    let _mock = common::mock_endpoint(
        &server,
        "/prices/daily_quotes",
        "1301",
        r#"{"daily_quotes":[{"Date":"2024-12-27","Code":"1301","Close":null,"Volume":null}]}"#,
    );

    let client = common::client(&server);
    let quotes = prices::daily_quotes(&client, "1301", d(2024, 12, 1), d(2024, 12, 31))
        .await
        .unwrap();

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].close, None);
}

#[tokio::test]
async fn not_found_yields_an_empty_vec() {
    let server = common::setup_server();
    let _auth = common::mock_auth_refresh(&server, "rt-1", "id-token-1");
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/prices/daily_quotes")
            .query_param("code", "9999");
        then.status(404)
            .header("content-type", "application/json")
            .body(r#"{"message":"Data not found."}"#);
    });

    let client = common::client(&server);
    let quotes = prices::daily_quotes(&client, "9999", d(2024, 12, 1), d(2024, 12, 31))
        .await
        .unwrap();

    mock.assert();
    assert!(quotes.is_empty());
}
