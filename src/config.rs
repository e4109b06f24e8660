//! Frontend Configuration
//!
//! Baked in at build time from `GORUM_API_BASE` and `GORUM_TITLE`.

use crate::api::HttpApi;

const DEFAULT_TITLE: &str = "Gorum";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin of the Gorum server; empty means same origin
    pub api_base: String,
    /// Site title appended to every page title
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("GORUM_API_BASE"), option_env!("GORUM_TITLE"))
    }

    fn from_values(api_base: Option<&str>, title: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            title: title.filter(|t| !t.is_empty()).map(str::to_string).unwrap_or(defaults.title),
        }
    }

    pub fn api(&self) -> HttpApi {
        HttpApi::new(&self.api_base)
    }

    /// `"<name> - <site title>"`
    pub fn page_title(&self, name: &str) -> String {
        format!("{} - {}", name, self.title)
    }

    pub fn captcha_image_url(&self, challenge: &str) -> String {
        format!("{}/captcha/{}.png", self.api_base, challenge)
    }

    pub fn avatar_upload_url(&self) -> String {
        format!("{}/uploadavatar", self.api_base)
    }

    /// Resolve an avatar reference from the API; empty means the default avatar
    pub fn avatar_url(&self, reference: &str) -> String {
        if reference.is_empty() {
            format!("{}/data/avatar/default", self.api_base)
        } else if reference.starts_with("http://") || reference.starts_with("https://") {
            reference.to_string()
        } else {
            format!("{}/{}", self.api_base, reference.trim_start_matches('/'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, Some(""));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_title("General"), "General - Gorum");
    }

    #[test]
    fn test_urls() {
        let config = AppConfig::from_values(Some("https://forum.example/"), Some("Forum"));
        assert_eq!(config.captcha_image_url("abc"), "https://forum.example/captcha/abc.png");
        assert_eq!(config.avatar_upload_url(), "https://forum.example/uploadavatar");
        assert_eq!(config.avatar_url("/data/avatar/3"), "https://forum.example/data/avatar/3");
        assert_eq!(config.avatar_url(""), "https://forum.example/data/avatar/default");
        assert_eq!(config.avatar_url("https://cdn.example/a.png"), "https://cdn.example/a.png");
        assert_eq!(config.api().url(crate::api::Endpoint::Board), "https://forum.example/api/board");
    }
}
