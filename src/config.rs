//! Startup configuration for the policy table.
//!
//! The document maps each resource path to its policy:
//!
//! ```json
//! {
//!     "/resource": {
//!         "origins": ["http://a.com"],
//!         "methods": ["GET", "POST"],
//!         "headers": ["x-test"],
//!         "credentials": true
//!     }
//! }
//! ```
//!
//! `origins` is required and may contain `"*"`. `methods` and `headers`
//! default to empty lists and `credentials` defaults to `false`. Unknown
//! fields are rejected so that typos fail at startup instead of silently
//! weakening a policy.

use crate::policy::{ResourcePolicy, ValidationError};
use crate::table::{PolicyTable, WildcardCredentials};
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// One resource entry as it appears in configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResourcePolicyConfig {
    pub origins: Vec<String>,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub credentials: bool,
}

/// Path to policy mapping, in document order.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PolicyConfig {
    pub resources: IndexMap<String, ResourcePolicyConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse CORS configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid CORS configuration: {0}")]
    Validation(#[from] ValidationError),
}

impl From<ResourcePolicyConfig> for ResourcePolicy {
    fn from(config: ResourcePolicyConfig) -> Self {
        ResourcePolicy::builder()
            .origins(config.origins)
            .methods(config.methods)
            .headers(config.headers)
            .credentials(config.credentials)
            .build()
    }
}

impl PolicyConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_json_slice(input: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(input)?)
    }

    pub fn into_table(self) -> Result<PolicyTable, ValidationError> {
        self.into_table_with(WildcardCredentials::default())
    }

    pub fn into_table_with(
        self,
        wildcard_credentials: WildcardCredentials,
    ) -> Result<PolicyTable, ValidationError> {
        self.resources
            .into_iter()
            .fold(
                PolicyTable::builder().wildcard_credentials(wildcard_credentials),
                |builder, (path, resource)| builder.resource(path, resource.into()),
            )
            .build()
    }
}

impl PolicyTable {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(PolicyConfig::from_json_str(input)?.into_table()?)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
