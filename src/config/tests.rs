//! Configuration tests
//!
//! The template written by `Config::to_toml()` must parse back into the same
//! values, otherwise `config --reset` would hand users a broken file.

use super::*;
use crate::widget::CopyPolicy;

fn no_env(_: &str) -> Option<String> {
    None
}

fn roundtrip(config: &Config) -> Config {
    let toml_str = config.to_toml();
    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
    Config::resolve(parsed.unwrap(), no_env)
}

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let back = roundtrip(&config);

    assert_eq!(back.theme, config.theme);
    assert_eq!(back.profile.email, config.profile.email);
    assert_eq!(back.profile.status, config.profile.status);
    assert_eq!(back.profile.links, config.profile.links);
    assert_eq!(back.projects, config.projects);
    assert_eq!(back.contact.copy_policy, CopyPolicy::Optimistic);
    assert_eq!(back.contact.clipboard, ClipboardBackend::System);
    assert_eq!(back.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_config_roundtrip_escapes_strings() {
    let mut config = Config::default();
    config.profile.tagline = r#"Says "hi" \o/"#.to_string();
    config.projects[0].url = Some("https://example.com/ledger".to_string());
    config.contact.copy_policy = CopyPolicy::Confirmed;
    config.contact.clipboard = ClipboardBackend::Memory;

    let back = roundtrip(&config);
    assert_eq!(back.profile.tagline, config.profile.tagline);
    assert_eq!(back.projects[0].url, config.projects[0].url);
    assert_eq!(back.contact.copy_policy, CopyPolicy::Confirmed);
    assert_eq!(back.contact.clipboard, ClipboardBackend::Memory);
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::resolve(Config::parse_file_config("").unwrap(), no_env);
    let defaults = Config::default();

    assert_eq!(config.theme, defaults.theme);
    assert_eq!(config.profile.email, defaults.profile.email);
    assert_eq!(config.projects.len(), 3);
    assert!(config.enable_tui);
}

#[test]
fn test_partial_sections_keep_defaults() {
    let file = Config::parse_file_config(
        r#"
[profile]
name = "Grace"

[contact]
copy_policy = "confirmed"
"#,
    )
    .unwrap();
    let config = Config::resolve(file, no_env);

    assert_eq!(config.profile.name, "Grace");
    assert_eq!(config.profile.email, Profile::default().email);
    assert_eq!(config.contact.copy_policy, CopyPolicy::Confirmed);
    assert_eq!(config.contact.heading, ContactConfig::default().heading);
}

#[test]
fn test_projects_replace_samples() {
    let file = Config::parse_file_config(
        r#"
[[projects]]
title = "Only one"
description = "Just this"
"#,
    )
    .unwrap();
    let config = Config::resolve(file, no_env);

    assert_eq!(config.projects.len(), 1);
    assert_eq!(config.projects[0].title, "Only one");
    assert!(config.projects[0].tags.is_empty());
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
theme = "paper"

[profile]
email = "file@example.com"
"#,
    )
    .unwrap();
    let config = Config::resolve(file, |key| match key {
        "FOLIO_THEME" => Some("midnight".to_string()),
        "FOLIO_EMAIL" => Some("env@example.com".to_string()),
        "FOLIO_NO_TUI" => Some("1".to_string()),
        _ => None,
    });

    assert_eq!(config.theme, "midnight");
    assert_eq!(config.profile.email, "env@example.com");
    assert!(!config.enable_tui);
}

#[test]
fn test_blank_email_falls_back() {
    let file = Config::parse_file_config("[profile]\nemail = \"  \"\n").unwrap();
    let config = Config::resolve(file, |key| {
        (key == "FOLIO_EMAIL").then(String::new)
    });
    assert_eq!(config.profile.email, Profile::default().email);
}

#[test]
fn test_malformed_file_is_error() {
    assert!(Config::parse_file_config("theme = ").is_err());
    assert!(Config::parse_file_config("[[projects]]\ntitle = \"no description\"\n").is_err());
}

#[test]
fn test_missing_file_is_default() {
    let path = std::env::temp_dir().join("folio-config-that-does-not-exist.toml");
    let file = Config::read_file_config(&path).unwrap();
    assert!(file.theme.is_none());
    assert!(file.profile.is_none());
}

#[test]
fn test_unknown_enum_strings_fall_back() {
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
    assert_eq!(ClipboardBackend::from_str("x11"), ClipboardBackend::System);
    assert_eq!(ClipboardBackend::from_str("Memory"), ClipboardBackend::Memory);
}
