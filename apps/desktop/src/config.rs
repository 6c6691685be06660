use std::{collections::HashMap, fs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8090".into(),
            request_timeout_secs: 10,
        }
    }
}

/// Defaults, overridden by `booth.toml` in the working directory, overridden
/// by `APP__`-prefixed environment variables. CLI flags layer on top in
/// `main`.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("booth.toml") {
        apply_file_config(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("APP__SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = parsed;
        }
    }

    settings
}

fn apply_file_config(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("server_url") {
            settings.server_url = v.clone();
        }
        if let Some(v) = file_cfg.get("request_timeout_secs") {
            if let Ok(parsed) = v.parse::<u64>() {
                settings.request_timeout_secs = parsed;
            }
        }
    }
}
