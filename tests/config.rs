use timecard::config::Config;
use timecard::utils::format_date_for_display;

#[test]
fn defaults_fill_in_for_an_empty_config_file() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.database_path, "");
    assert_eq!(config.date_format, "%b %-d, %Y");
}

#[test]
fn partial_config_keeps_given_values_and_defaults_the_rest() {
    let config: Config = toml::from_str(r#"database_path = "/tmp/timecard-test.db""#).unwrap();

    assert_eq!(config.database_path, "/tmp/timecard-test.db");
    assert_eq!(config.date_format, "%b %-d, %Y");
}

#[test]
fn default_date_format_renders_like_the_entry_table() {
    let config = Config::default();

    assert_eq!(
        format_date_for_display("2024-01-05", &config.date_format),
        "Jan 5, 2024"
    );
}

#[test]
fn unparseable_dates_render_as_stored() {
    let config = Config::default();

    assert_eq!(
        format_date_for_display("not-a-date", &config.date_format),
        "not-a-date"
    );
}

#[test]
fn config_round_trips_through_toml() {
    let config = Config {
        database_path: "/data/timecard.db".to_string(),
        date_format: "%Y-%m-%d".to_string(),
    };

    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();

    assert_eq!(parsed.database_path, config.database_path);
    assert_eq!(parsed.date_format, config.date_format);
}
