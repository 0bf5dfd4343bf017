//! End-to-end tests for `run_extraction`.
//!
//! Input lists live in temp files, ad pages are served by wiremock, and both
//! JSON outputs are read back from a temp directory.

mod helpers;

use ads_insight::{run_extraction, Config, InsightsSource, RunError};
use helpers::{og_page, test_settings, write_urls_to_file};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn read_json(path: &std::path::Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(path).expect("output file should exist");
    serde_json::from_str(&contents).expect("output should be valid JSON")
}

#[tokio::test]
async fn test_ads_run_writes_records_and_insights() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/advertiser/AR1/creative/CR1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(og_page(
            "First ad",
            "First description",
            "https://cdn.example.com/1.png",
        )))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/advertiser/AR1/creative/CR2/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/advertiser/AR2/creative/CR3/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let base = mock_server.uri();
    let ads = write_urls_to_file(&[
        format!("{base}/advertiser/AR1/creative/CR1/"),
        String::new(),
        format!("  {base}/advertiser/AR1/creative/CR2/  "),
        format!("{base}/advertiser/AR2/creative/CR3/"),
    ]);
    let searches = write_urls_to_file(&["https://example.com/search?q=ignored".to_string()]);
    let out_dir = TempDir::new().unwrap();
    let settings = test_settings(&out_dir.path().join("nested"));

    let config = Config {
        ads_file: ads.path().to_path_buf(),
        start_urls_file: searches.path().to_path_buf(),
        settings: settings.clone(),
        ..Default::default()
    };
    let report = run_extraction(config).await.unwrap();

    assert_eq!(report.ads_processed, 3);
    assert_eq!(report.ads_path.as_deref(), Some(settings.output.ads_json.as_path()));
    assert_eq!(
        report.insights_path.as_deref(),
        Some(settings.output.insights_json.as_path())
    );

    let records = read_json(&settings.output.ads_json);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["ad_id"], "CR1");
    assert_eq!(records[0]["ad_type"], "image");
    assert_eq!(records[0]["headline"], "First ad");
    assert_eq!(records[0]["ad_spend_currency"], "USD");
    assert_eq!(records[1]["ad_id"], "CR2");
    assert!(records[1]["headline"].is_null());
    assert_eq!(records[1]["ad_type"], "unknown");
    assert_eq!(records[2]["ad_advertiser_id"], "AR2");
    assert!(records[2]["ad_image_link"].is_null());

    let insights = read_json(&settings.output.insights_json);
    assert_eq!(insights["insights_total_ads"], 3);
    assert_eq!(insights["insights_total_ads_spend"], 0);
    assert_eq!(insights["source"], "ads");
    let advertisers = insights["insights_advertisers"].as_array().unwrap();
    assert_eq!(advertisers.len(), 2);
    assert_eq!(advertisers[0]["advertiser_id"], "AR1");
    assert_eq!(advertisers[0]["ads_count"], 2);
    assert_eq!(advertisers[1]["advertiser_id"], "AR2");
    assert_eq!(advertisers[1]["ads_count"], 1);
    assert!(insights["insights_regions"].as_array().unwrap().is_empty());
    assert!(insights["search_terms"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_only_run_derives_terms() {
    let searches = write_urls_to_file(&[
        "https://www.google.com/search?q=shoes".to_string(),
        "https://example.com/search?query=shoes".to_string(),
        "https://example.com/topics/boots".to_string(),
    ]);
    let out_dir = TempDir::new().unwrap();
    let settings = test_settings(out_dir.path());

    let config = Config {
        ads_file: out_dir.path().join("missing_ads.txt"),
        start_urls_file: searches.path().to_path_buf(),
        settings: settings.clone(),
        ..Default::default()
    };
    let report = run_extraction(config).await.unwrap();

    assert_eq!(report.ads_processed, 0);
    assert_eq!(report.search_urls, 3);
    assert!(report.ads_path.is_none());
    assert!(!settings.output.ads_json.exists());

    let insights = report.insights.unwrap();
    assert_eq!(insights.source, InsightsSource::Search);
    assert_eq!(insights.search_terms, vec!["shoes", "boots"]);

    let written = read_json(&settings.output.insights_json);
    assert_eq!(written["source"], "search");
    assert_eq!(written["insights_total_ads"], 0);
    assert_eq!(written["search_terms"][0], "shoes");
}

#[tokio::test]
async fn test_no_input_is_an_error_and_writes_nothing() {
    let out_dir = TempDir::new().unwrap();
    let settings = test_settings(out_dir.path());
    let empty = write_urls_to_file(&["   ".to_string(), String::new()]);

    let config = Config {
        ads_file: empty.path().to_path_buf(),
        start_urls_file: out_dir.path().join("missing_start_urls.txt"),
        settings: settings.clone(),
        ..Default::default()
    };
    let err = run_extraction(config).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<RunError>(),
        Some(RunError::NoInput { .. })
    ));
    assert!(!settings.output.ads_json.exists());
    assert!(!settings.output.insights_json.exists());
}

#[tokio::test]
async fn test_insights_can_be_disabled() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(og_page("A", "B", "C")))
        .mount(&mock_server)
        .await;

    let ads = write_urls_to_file(&[format!(
        "{}/advertiser/AR5/creative/CR5/",
        mock_server.uri()
    )]);
    let out_dir = TempDir::new().unwrap();
    let settings = test_settings(out_dir.path());

    let config = Config {
        ads_file: ads.path().to_path_buf(),
        start_urls_file: out_dir.path().join("missing.txt"),
        write_insights: false,
        settings: settings.clone(),
        ..Default::default()
    };
    let report = run_extraction(config).await.unwrap();

    assert_eq!(report.ads_processed, 1);
    assert!(report.insights.is_none());
    assert!(report.insights_path.is_none());
    assert!(settings.output.ads_json.exists());
    assert!(!settings.output.insights_json.exists());
}
