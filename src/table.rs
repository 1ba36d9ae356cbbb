use crate::policy::{ResourcePolicy, ValidationError};
use std::collections::HashMap;
use tracing::{debug, warn};

/// How the table treats a resource that allows any origin with credentials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WildcardCredentials {
    /// Refuse to build the table.
    #[default]
    Reject,
    /// Accept the resource and echo the literal request origin instead of `*`.
    EchoOrigin,
}

/// Immutable mapping from exact resource path to its policy.
#[derive(Clone, Debug, Default)]
pub struct PolicyTable {
    resources: HashMap<String, ResourcePolicy>,
}

impl PolicyTable {
    pub fn builder() -> PolicyTableBuilder {
        PolicyTableBuilder::default()
    }

    /// Looks up the policy for a URL path. Matching is exact string equality.
    pub fn get(&self, path: &str) -> Option<&ResourcePolicy> {
        self.resources.get(path)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }
}

#[derive(Default)]
pub struct PolicyTableBuilder {
    resources: Vec<(String, ResourcePolicy)>,
    wildcard_credentials: WildcardCredentials,
}

impl PolicyTableBuilder {
    /// Registers a resource. A later registration for the same path replaces
    /// the earlier one.
    pub fn resource<P: Into<String>>(mut self, path: P, policy: ResourcePolicy) -> Self {
        self.resources.push((path.into(), policy));
        self
    }

    pub fn wildcard_credentials(mut self, mode: WildcardCredentials) -> Self {
        self.wildcard_credentials = mode;
        self
    }

    pub fn build(self) -> Result<PolicyTable, ValidationError> {
        let mut resources = HashMap::with_capacity(self.resources.len());

        for (path, policy) in self.resources {
            validate_path(&path)?;
            policy.validate(&path)?;

            if policy.origins.is_any() && policy.credentials {
                match self.wildcard_credentials {
                    WildcardCredentials::Reject => {
                        return Err(ValidationError::WildcardWithCredentials { path });
                    }
                    WildcardCredentials::EchoOrigin => {
                        warn!(
                            path = %path,
                            "resource allows any origin with credentials; echoing request origins instead of '*'"
                        );
                    }
                }
            }

            resources.insert(path, policy);
        }

        debug!(resources = resources.len(), "built CORS policy table");
        Ok(PolicyTable { resources })
    }
}

fn validate_path(path: &str) -> Result<(), ValidationError> {
    if !path.starts_with('/') || path.contains(['?', '#']) {
        return Err(ValidationError::InvalidPath { path: path.into() });
    }
    Ok(())
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
