use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::allowed_origins::AllowedOrigins;
use crate::util::is_http_token;
use thiserror::Error;

/// CORS policy bound to a single resource path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourcePolicy {
    pub origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub headers: AllowedHeaders,
    pub credentials: bool,
}

/// Configuration problems detected while building a policy table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("resource path {path:?} must start with '/' and must not contain a query or fragment")]
    InvalidPath { path: String },
    #[error("resource {path:?} lists an empty origin")]
    EmptyOrigin { path: String },
    #[error(
        "resource {path:?} allows any origin while credentials are enabled; this combination is forbidden by the CORS specification"
    )]
    WildcardWithCredentials { path: String },
    #[error("resource {path:?} lists {method:?}, which is not a valid HTTP method token")]
    InvalidMethod { path: String, method: String },
    #[error("resource {path:?} lists {header:?}, which is not a valid HTTP header name")]
    InvalidHeaderName { path: String, header: String },
}

impl ResourcePolicy {
    pub fn builder() -> ResourcePolicyBuilder {
        ResourcePolicyBuilder::default()
    }

    /// Checks the per-field rules. The wildcard/credentials conflict is left
    /// to the table, which knows how it was asked to treat it.
    pub(crate) fn validate(&self, path: &str) -> Result<(), ValidationError> {
        if self
            .origins
            .values()
            .iter()
            .any(|origin| origin.is_empty())
        {
            return Err(ValidationError::EmptyOrigin { path: path.into() });
        }

        if let Some(method) = self.methods.iter().find(|method| !is_http_token(method)) {
            return Err(ValidationError::InvalidMethod {
                path: path.into(),
                method: method.into(),
            });
        }

        if let Some(header) = self.headers.iter().find(|header| !is_http_token(header)) {
            return Err(ValidationError::InvalidHeaderName {
                path: path.into(),
                header: header.into(),
            });
        }

        Ok(())
    }
}

#[derive(Default)]
pub struct ResourcePolicyBuilder {
    policy: ResourcePolicy,
}

impl ResourcePolicyBuilder {
    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.origins = AllowedOrigins::list(origins);
        self
    }

    pub fn any_origin(mut self) -> Self {
        self.policy.origins = AllowedOrigins::any();
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.methods = AllowedMethods::list(methods);
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.headers = AllowedHeaders::list(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.policy.credentials = enabled;
        self
    }

    pub fn build(self) -> ResourcePolicy {
        self.policy
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
