//! TOML configuration shared by the binaries.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

use crate::directory::HospitalDirectory;
use crate::models::HospitalRecord;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8000";
pub const DEFAULT_SMS_BASE_URL: &str = "https://api.twilio.com";
pub const DEFAULT_AUTH_TOKEN_ENV: &str = "TWILIO_AUTH_TOKEN";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub sms: Option<SmsConfig>,
    /// Replaces the built-in directory when present
    pub hospitals: Option<Vec<HospitalRecord>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmsConfig {
    #[serde(default = "default_sms_base_url")]
    pub base_url: Url,
    pub account_sid: String,
    /// Sender number, E.164
    pub from: String,
    /// Environment variable holding the auth token
    #[serde(default = "default_auth_token_env")]
    pub auth_token_env: String,
}

impl SmsConfig {
    /// Read the auth token from the configured environment variable
    pub fn auth_token(&self) -> Result<String> {
        std::env::var(&self.auth_token_env).with_context(|| {
            format!(
                "SMS auth token not set (expected in ${})",
                self.auth_token_env
            )
        })
    }
}

fn default_listen() -> String {
    DEFAULT_LISTEN.to_string()
}

fn default_sms_base_url() -> Url {
    Url::parse(DEFAULT_SMS_BASE_URL).expect("valid default SMS URL")
}

fn default_auth_token_env() -> String {
    DEFAULT_AUTH_TOKEN_ENV.to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Build the hospital directory this config describes
    pub fn directory(&self) -> Result<HospitalDirectory> {
        match &self.hospitals {
            Some(hospitals) => HospitalDirectory::new(hospitals.clone())
                .context("Invalid hospital list in config"),
            None => Ok(HospitalDirectory::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.server.listen, DEFAULT_LISTEN);
        assert!(config.sms.is_none());
        assert_eq!(config.directory().unwrap().len(), 15);
    }

    #[test]
    fn test_sms_defaults() {
        let config = Config::from_toml(
            r#"
            [sms]
            account_sid = "AC123"
            from = "+12062224885"
            "#,
        )
        .unwrap();
        let sms = config.sms.unwrap();
        assert_eq!(sms.base_url.as_str(), "https://api.twilio.com/");
        assert_eq!(sms.auth_token_env, DEFAULT_AUTH_TOKEN_ENV);
    }

    #[test]
    fn test_custom_hospitals() {
        let config = Config::from_toml(
            r#"
            [server]
            listen = "127.0.0.1:9000"

            [[hospitals]]
            name = "Clinic"
            address = "1 Main St"
            phone = "+15550000000"
            latitude = 40.0
            longitude = -74.0
            "#,
        )
        .unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:9000");
        let directory = config.directory().unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.hospitals()[0].name, "Clinic");
    }

    #[test]
    fn test_invalid_hospital_rejected() {
        let config = Config::from_toml(
            r#"
            [[hospitals]]
            name = "Clinic"
            address = ""
            phone = "+15550000000"
            latitude = 140.0
            longitude = -74.0
            "#,
        )
        .unwrap();
        assert!(config.directory().is_err());
    }

    #[test]
    fn test_missing_auth_token() {
        let sms = SmsConfig {
            base_url: default_sms_base_url(),
            account_sid: "AC123".to_string(),
            from: "+12062224885".to_string(),
            auth_token_env: "HOSPITAL_SOS_TEST_UNSET_TOKEN".to_string(),
        };
        assert!(sms.auth_token().is_err());
    }
}
