use resource_cors::constants::method;
use resource_cors::{
    CorsDecision, CorsResolver, PolicyTable, RequestContext, ResourcePolicy,
    ResourcePolicyBuilder, WildcardCredentials,
};

pub const RESOURCE: &str = "/resource";

#[derive(Default)]
pub struct ResolverBuilder {
    resources: Vec<(String, ResourcePolicy)>,
    wildcard_credentials: WildcardCredentials,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resource(mut self, path: &str, policy: ResourcePolicyBuilder) -> Self {
        self.resources.push((path.to_string(), policy.build()));
        self
    }

    pub fn wildcard_credentials(mut self, mode: WildcardCredentials) -> Self {
        self.wildcard_credentials = mode;
        self
    }

    pub fn build(self) -> CorsResolver {
        let table = self
            .resources
            .into_iter()
            .fold(
                PolicyTable::builder().wildcard_credentials(self.wildcard_credentials),
                |builder, (path, policy)| builder.resource(path, policy),
            )
            .build()
            .expect("valid CORS configuration");
        CorsResolver::new(table)
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            path: RESOURCE.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, resolver: &CorsResolver) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            path: &self.path,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        resolver.resolve(&ctx)
    }
}

pub struct PreflightRequestBuilder {
    path: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self {
            path: RESOURCE.into(),
            origin: None,
            request_method: None,
            request_headers: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, resolver: &CorsResolver) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            path: &self.path,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        resolver.resolve(&ctx)
    }
}

pub fn resolver() -> ResolverBuilder {
    ResolverBuilder::new()
}

pub fn policy() -> ResourcePolicyBuilder {
    ResourcePolicy::builder()
}

/// Policy used throughout the request tests: one origin, `GET`, `x-test`,
/// credentials on.
pub fn reference_resolver() -> CorsResolver {
    resolver()
        .resource(
            RESOURCE,
            policy()
                .origins(["http://a.com"])
                .methods([method::GET])
                .headers(["x-test"])
                .credentials(true),
        )
        .build()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
