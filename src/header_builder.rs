use crate::allowed_origins::OriginDecision;
use crate::constants::{PREFLIGHT_MAX_AGE_SECONDS, WILDCARD, header};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::policy::ResourcePolicy;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a ResourcePolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a ResourcePolicy) -> Self {
        Self { policy }
    }

    /// Returns `None` when the origin is not allowed.
    pub(crate) fn build_origin_headers(&self, origin: &str) -> Option<HeaderCollection> {
        let value = match self.policy.origins.resolve(origin, self.policy.credentials) {
            OriginDecision::Any => WILDCARD.to_string(),
            OriginDecision::Echo(value) => value,
            OriginDecision::Disallow => return None,
        };

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        Some(headers)
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.policy.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_MAX_AGE,
            PREFLIGHT_MAX_AGE_SECONDS.to_string(),
        );
        headers
    }

    pub(crate) fn build_methods_header(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let requested = request
            .access_control_request_method
            .and_then(|method| self.policy.methods.echo(method));

        match requested {
            Some(method) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, method.to_string());
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let Some(requested) = request.access_control_request_headers else {
            return HeaderCollection::new();
        };

        let allowed = self.policy.headers.filter(requested);
        if allowed.is_empty() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, allowed.join(", "));
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
