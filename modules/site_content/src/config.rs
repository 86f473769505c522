//! Configuration for the site content module
//!
//! Backend credentials come from `SUPABASE_URL`, `SUPABASE_ANON_KEY` and the
//! optional `SUPABASE_SERVICE_ROLE_KEY`. Tunables can be set with
//! `SITE_CONTENT_*` variables or an optional YAML file; environment values
//! win over the file.

use crate::contract::{ContentError, DEFAULT_COUNTRY, FALLBACK_COMPANY_NAME};
use figment::error::Kind;
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::Deserialize;
use std::path::Path;

/// Site content configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Backend base URL
    pub url: String,

    /// Public (anonymous) access key
    pub anon_key: String,

    /// Elevated key for administrative reads
    #[serde(default)]
    pub service_role_key: Option<String>,

    /// Path of the REST API below `url`
    #[serde(default = "default_rest_path")]
    pub rest_path: String,

    /// Default size of the featured properties list
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,

    /// Display name used while no company record is cached
    #[serde(default = "default_company_name")]
    pub fallback_company_name: String,

    /// Country used when the company address has none
    #[serde(default = "default_country")]
    pub default_country: String,
}

fn default_rest_path() -> String {
    "/rest/v1".to_string()
}

fn default_featured_limit() -> usize {
    6
}

fn default_company_name() -> String {
    FALLBACK_COMPANY_NAME.to_string()
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

impl Config {
    /// Minimal configuration with defaults for every tunable
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            service_role_key: None,
            rest_path: default_rest_path(),
            featured_limit: default_featured_limit(),
            fallback_company_name: default_company_name(),
            default_country: default_country(),
        }
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, ContentError> {
        Self::load(None)
    }

    /// Load from an optional YAML file overlaid with the environment
    pub fn load(file: Option<&Path>) -> Result<Self, ContentError> {
        let mut figment = Figment::new();
        if let Some(path) = file {
            figment = figment.merge(Yaml::file(path));
        }
        let figment = figment
            .merge(Env::prefixed("SITE_CONTENT_"))
            .merge(Env::prefixed("SUPABASE_").only(&["url", "anon_key", "service_role_key"]));
        Self::from_figment(figment)
    }

    /// Extract and validate from any figment
    pub fn from_figment(figment: Figment) -> Result<Self, ContentError> {
        let config: Self = figment.extract().map_err(|e| match &e.kind {
            Kind::MissingField(field) => ContentError::MissingConfig {
                name: field.to_string(),
            },
            _ => ContentError::InvalidConfig {
                message: e.to_string(),
            },
        })?;
        config.validate()
    }

    /// Required values must be non-empty; an empty service key counts as absent
    pub fn validate(mut self) -> Result<Self, ContentError> {
        if self.url.trim().is_empty() {
            return Err(ContentError::MissingConfig {
                name: "url".to_string(),
            });
        }
        if self.anon_key.trim().is_empty() {
            return Err(ContentError::MissingConfig {
                name: "anon_key".to_string(),
            });
        }
        if self.featured_limit == 0 {
            return Err(ContentError::InvalidConfig {
                message: "featured_limit must be greater than zero".to_string(),
            });
        }
        self.service_role_key = self.service_role_key.filter(|k| !k.trim().is_empty());
        Ok(self)
    }
}
