use crate::config::ConfigError;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::policy::ResourcePolicy;
use crate::result::{CorsDecision, CorsResult};
use crate::table::PolicyTable;
use tracing::trace;

/// Per-resource CORS policy engine.
///
/// The table is fixed at construction, so one resolver can be shared across
/// threads and evaluated concurrently without locking.
#[derive(Clone, Debug)]
pub struct CorsResolver {
    table: PolicyTable,
}

impl CorsResolver {
    pub fn new(table: PolicyTable) -> Self {
        Self { table }
    }

    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        PolicyTable::from_json_str(input).map(Self::new)
    }

    pub fn table(&self) -> &PolicyTable {
        &self.table
    }

    /// Computes the `Access-Control-*` headers for one request.
    pub fn resolve(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request.origin else {
            return CorsDecision::NotApplicable;
        };

        let Some(policy) = self.table.get(request.path) else {
            trace!(path = request.path, "no CORS policy for path");
            return CorsDecision::NotApplicable;
        };

        if request.is_preflight() {
            match Self::process_preflight(policy, origin, request) {
                Some(result) => CorsDecision::Preflight(result),
                None => Self::rejected(origin, request),
            }
        } else {
            match Self::process_simple(policy, origin) {
                Some(result) => CorsDecision::Simple(result),
                None => Self::rejected(origin, request),
            }
        }
    }

    fn process_preflight(
        policy: &ResourcePolicy,
        origin: &str,
        request: &RequestContext<'_>,
    ) -> Option<CorsResult> {
        let builder = HeaderBuilder::new(policy);
        let mut headers = HeaderCollection::with_estimate(5);

        headers.extend(builder.build_origin_headers(origin)?);
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_max_age_header());
        headers.extend(builder.build_methods_header(request));
        headers.extend(builder.build_allowed_headers(request));

        Some(CorsResult {
            headers: headers.into_headers(),
        })
    }

    fn process_simple(policy: &ResourcePolicy, origin: &str) -> Option<CorsResult> {
        let builder = HeaderBuilder::new(policy);
        let mut headers = HeaderCollection::with_estimate(2);

        headers.extend(builder.build_origin_headers(origin)?);
        headers.extend(builder.build_credentials_header());

        Some(CorsResult {
            headers: headers.into_headers(),
        })
    }

    fn rejected(origin: &str, request: &RequestContext<'_>) -> CorsDecision {
        trace!(origin, path = request.path, "origin not allowed by CORS policy");
        CorsDecision::Rejected
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;
