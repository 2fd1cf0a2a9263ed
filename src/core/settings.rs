use std::{
    path::PathBuf,
    time::Duration,
};

use serde::{
    Deserialize,
    Serialize,
};

pub const SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_API_BASE: &str = "https://cdn.jsdelivr.net/gh/fawazahmed0/hadith-api@1";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub api_base: String,
    /// Edition prefix of the translation, e.g. `eng` in `eng-bukhari`.
    pub primary_edition: String,
    pub secondary_edition: String,
    pub max_attempts: usize,
    /// Zero disables the timeout and lets a stalled request wait forever.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Font file used for the Arabic text. egui's bundled fonts have no Arabic glyphs.
    pub arabic_font_path: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            primary_edition: "eng".to_string(),
            secondary_edition: "ara".to_string(),
            max_attempts: 3,
            request_timeout_secs: 30,
            user_agent: format!("hadith-viewer/{} (+reqwest)", env!("CARGO_PKG_VERSION")),
            arabic_font_path: None,
        }
    }
}

impl AppSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    pub fn attempts(&self) -> usize {
        self.max_attempts.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "max_attempts": 5, "request_timeout_secs": 0 }"#).unwrap();

        assert_eq!(settings.max_attempts, 5);
        assert_eq!(settings.request_timeout(), None);
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.primary_edition, "eng");
        assert_eq!(settings.secondary_edition, "ara");
    }

    #[test]
    fn test_attempts_never_zero() {
        let settings = AppSettings { max_attempts: 0, ..AppSettings::default() };
        assert_eq!(settings.attempts(), 1);
        assert_eq!(AppSettings::default().attempts(), 3);
        assert_eq!(AppSettings::default().request_timeout(), Some(Duration::from_secs(30)));
    }
}
