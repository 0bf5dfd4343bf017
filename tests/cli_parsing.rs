//! Tests for CLI parsing combined with settings file loading.

use std::io::Write;
use std::path::PathBuf;

use ads_insight::{load_settings, LogFormat, Opt};
use clap::Parser;
use tempfile::NamedTempFile;

#[test]
fn test_cli_and_settings_file_build_config() {
    let mut settings_file = NamedTempFile::new().unwrap();
    write!(
        settings_file,
        r#"{{
            "user_agent": "custom-agent/2.0",
            "max_retries": 5,
            "output": {{"insights_json": "out/insights.json"}}
        }}"#
    )
    .unwrap();
    settings_file.flush().unwrap();

    let opt = Opt::try_parse_from([
        "ads_insight",
        "--ads-file",
        "ads.txt",
        "--config",
        settings_file.path().to_str().unwrap(),
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert_eq!(log::LevelFilter::from(opt.log_level.clone()), log::LevelFilter::Debug);
    assert!(matches!(opt.log_format, LogFormat::Json));

    let settings = load_settings(&opt.config).unwrap();
    let config = opt.into_config(settings);

    assert_eq!(config.ads_file, PathBuf::from("ads.txt"));
    assert_eq!(config.start_urls_file, PathBuf::from("data/input/start_urls.txt"));
    assert!(config.write_insights);
    assert_eq!(config.settings.user_agent, "custom-agent/2.0");
    assert_eq!(config.settings.max_retries, 5);
    assert_eq!(config.settings.request_timeout_sec, 15.0);
    assert_eq!(
        config.settings.output.insights_json,
        PathBuf::from("out/insights.json")
    );
    assert_eq!(
        config.settings.output.ads_json,
        PathBuf::from("data/output/ads_output.json")
    );
}

#[test]
fn test_malformed_settings_file_is_an_error() {
    let mut settings_file = NamedTempFile::new().unwrap();
    write!(settings_file, "{{ not json").unwrap();
    settings_file.flush().unwrap();

    let opt = Opt::try_parse_from([
        "ads_insight",
        "--config",
        settings_file.path().to_str().unwrap(),
    ])
    .unwrap();

    assert!(load_settings(&opt.config).is_err());
}

#[test]
fn test_unknown_flag_is_rejected() {
    let result = Opt::try_parse_from(["ads_insight", "--db-path", "x.db"]);
    assert!(result.is_err());
}
