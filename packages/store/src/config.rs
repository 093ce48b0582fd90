//! # Client configuration (`estate.toml`)
//!
//! Deployment settings for the browser client. The web binary embeds the file at
//! build time; every field has a default, so a missing or partial file is
//! equivalent to the default configuration.
//!
//! ```toml
//! [api]
//! origin = "https://real-estate-server-ezx7.onrender.com"
//!
//! [notices]
//! success_secs = 3   # how long "User is updated successfully" stays up
//! error_secs = 5     # how long a profile update error stays up
//!
//! [upload]
//! bucket = "my-project.appspot.com"
//! max_bytes = 2097152
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Origin every REST path is rooted at. |
//! | [`NoticeConfig`] | Lifetimes of the profile screen's transient banners. |
//! | [`UploadConfig`] | Object-storage bucket and the avatar size limit. |

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ORIGIN: &str = "https://real-estate-server-ezx7.onrender.com";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notices: NoticeConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeConfig {
    #[serde(default = "default_success_secs")]
    pub success_secs: u64,
    #[serde(default = "default_error_secs")]
    pub error_secs: u64,
}

fn default_success_secs() -> u64 {
    3
}

fn default_error_secs() -> u64 {
    5
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            success_secs: default_success_secs(),
            error_secs: default_error_secs(),
        }
    }
}

impl NoticeConfig {
    pub fn success_ttl(&self) -> Duration {
        Duration::from_secs(self.success_secs)
    }

    pub fn error_ttl(&self) -> Duration {
        Duration::from_secs(self.error_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Storage bucket name. Uploads fail with a configuration error while empty.
    #[serde(default)]
    pub bucket: String,
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

fn default_max_bytes() -> u64 {
    2 * 1024 * 1024
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            max_bytes: default_max_bytes(),
        }
    }
}

impl ClientConfig {
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.api.origin = origin.into();
        self
    }

    pub fn filename() -> &'static str {
        "estate.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.origin, DEFAULT_ORIGIN);
        assert_eq!(config.notices.success_ttl(), Duration::from_secs(3));
        assert_eq!(config.notices.error_ttl(), Duration::from_secs(5));
        assert_eq!(config.upload.max_bytes, 2_097_152);
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            origin = "http://localhost:3000"

            [upload]
            bucket = "estate.appspot.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.origin, "http://localhost:3000");
        assert_eq!(config.upload.bucket, "estate.appspot.com");
        assert_eq!(config.upload.max_bytes, 2_097_152);
        assert_eq!(config.notices.success_secs, 3);
    }

    #[test]
    fn test_toml_survives_a_save() {
        let config = ClientConfig::default().with_origin("http://127.0.0.1:8080");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_type_is_an_error() {
        assert!(ClientConfig::from_toml("[notices]\nsuccess_secs = \"three\"").is_err());
    }
}
