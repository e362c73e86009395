use std::{collections::HashMap, fs, path::PathBuf};

use tracing::warn;

const SETTINGS_FILE: &str = "server.toml";
const DEVELOPMENT: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub index_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub environment: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            static_dir: PathBuf::from("static"),
            index_path: PathBuf::from("index.html"),
            catalog_path: None,
            environment: DEVELOPMENT.into(),
        }
    }
}

impl Settings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Per-request logging is only wanted while developing.
    pub fn request_logging(&self) -> bool {
        self.environment == DEVELOPMENT
    }
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    resolve_settings(file.as_deref(), |key| std::env::var(key).ok())
}

/// Layers `server.toml` contents and then environment variables over the defaults.
pub fn resolve_settings(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("host") {
                    settings.host = v.clone();
                }
                if let Some(v) = file_cfg.get("port") {
                    apply_port(&mut settings, v);
                }
                if let Some(v) = file_cfg.get("static_dir") {
                    settings.static_dir = PathBuf::from(v);
                }
                if let Some(v) = file_cfg.get("index_path") {
                    settings.index_path = PathBuf::from(v);
                }
                if let Some(v) = file_cfg.get("catalog_path") {
                    settings.catalog_path = Some(PathBuf::from(v));
                }
                if let Some(v) = file_cfg.get("environment") {
                    settings.environment = v.clone();
                }
            }
            Err(error) => warn!(%error, file = SETTINGS_FILE, "ignoring unreadable settings file"),
        }
    }

    if let Some(v) = env("HOST") {
        settings.host = v;
    }
    if let Some(v) = env("PORT") {
        apply_port(&mut settings, &v);
    }
    if let Some(v) = env("STATIC_DIR") {
        settings.static_dir = PathBuf::from(v);
    }
    if let Some(v) = env("INDEX_PATH") {
        settings.index_path = PathBuf::from(v);
    }
    if let Some(v) = env("CATALOG_PATH") {
        settings.catalog_path = Some(PathBuf::from(v));
    }

    if let Some(v) = env("APP_ENV").or_else(|| env("NODE_ENV")) {
        settings.environment = v;
    }

    settings
}

fn apply_port(settings: &mut Settings, raw: &str) {
    match raw.trim().parse::<u16>() {
        Ok(port) => settings.port = port,
        Err(_) => warn!(value = raw, port = settings.port, "ignoring invalid port"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
