use std::{collections::HashMap, path::PathBuf};

use super::{resolve_settings, Settings};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_listen_on_port_3000_in_development() {
    let settings = resolve_settings(None, env_from(&[]));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.bind_addr(), "0.0.0.0:3000");
    assert!(settings.request_logging());
}

#[test]
fn port_comes_from_environment() {
    let settings = resolve_settings(None, env_from(&[("PORT", "8080")]));
    assert_eq!(settings.port, 8080);
}

#[test]
fn invalid_port_keeps_previous_value() {
    let settings = resolve_settings(Some(r#"port = "4000""#), env_from(&[("PORT", "http")]));
    assert_eq!(settings.port, 4000);
}

#[test]
fn environment_overrides_settings_file() {
    let file = r#"
        host = "127.0.0.1"
        static_dir = "public"
        catalog_path = "blocks.json"
        environment = "staging"
    "#;
    let settings = resolve_settings(
        Some(file),
        env_from(&[("STATIC_DIR", "assets"), ("APP_ENV", "production")]),
    );

    assert_eq!(settings.host, "127.0.0.1");
    assert_eq!(settings.static_dir, PathBuf::from("assets"));
    assert_eq!(settings.catalog_path, Some(PathBuf::from("blocks.json")));
    assert_eq!(settings.environment, "production");
    assert!(!settings.request_logging());
}

#[test]
fn node_env_is_honoured_when_app_env_is_absent() {
    let settings = resolve_settings(None, env_from(&[("NODE_ENV", "production")]));
    assert!(!settings.request_logging());

    let settings = resolve_settings(
        None,
        env_from(&[("NODE_ENV", "production"), ("APP_ENV", "development")]),
    );
    assert!(settings.request_logging());
}

#[test]
fn unparsable_settings_file_falls_back_to_defaults() {
    let settings = resolve_settings(Some("port = [1, 2"), env_from(&[]));
    assert_eq!(settings, Settings::default());
}
