use crate::common;
use chrono::NaiveDate;
use jquants_rs::statements;

#[tokio::test]
async fn parses_numeric_strings_and_blank_fields() {
    let server = common::setup_server();
    let _auth = common::mock_auth_refresh(&server, "rt-1", "id-token-1");
    let _mock = common::mock_endpoint(
        &server,
        "/fins/statements",
        "1301",
        r#"{"statements":[
            {"LocalCode":"13010","DisclosedDate":"2024-11-08","CurrentPeriodEndDate":"2024-09-30",
             "TypeOfDocument":"2QFinancialStatements_Consolidated_JP",
             "EarningsPerShare":"125.5","ForecastEarningsPerShare":"","BookValuePerShare":"-"},
            {"LocalCode":"13010","DisclosedDate":"2024-05-10","CurrentPeriodEndDate":"2024-03-31",
             "TypeOfDocument":"FYFinancialStatements_Consolidated_JP",
             "EarningsPerShare":"240","ForecastEarningsPerShare":"250","BookValuePerShare":"2000"}
        ]}"#,
    );

    let client = common::client(&server);
    let stmts = statements::statements(&client, "1301").await.unwrap();

    assert_eq!(stmts.len(), 2);

    let interim = &stmts[0];
    assert_eq!(
        interim.disclosed_date,
        NaiveDate::from_ymd_opt(2024, 11, 8)
    );
    assert_eq!(interim.eps, Some(125.5));
    assert_eq!(interim.eps_forecast, None);
    assert_eq!(interim.book_value_per_share, None);

    let full_year = &stmts[1];
    assert_eq!(full_year.eps, Some(240.0));
    assert_eq!(full_year.eps_forecast, Some(250.0));
    assert_eq!(full_year.book_value_per_share, Some(2000.0));
    assert_eq!(
        full_year.period_end,
        NaiveDate::from_ymd_opt(2024, 3, 31)
    );
}

#[tokio::test]
async fn no_disclosures_yield_an_empty_vec() {
    let server = common::setup_server();
    let _auth = common::mock_auth_refresh(&server, "rt-1", "id-token-1");
    let _mock = common::mock_endpoint(&server, "/fins/statements", "9997", r#"{"statements":[]}"#);

    let client = common::client(&server);
    let stmts = statements::statements(&client, "9997").await.unwrap();
    assert!(stmts.is_empty());
}
