pub mod constants;
mod allowed_headers;
mod allowed_methods;
mod allowed_origins;
mod config;
mod context;
mod header_builder;
mod headers;
mod intercept;
mod layer;
mod policy;
mod resolver;
mod result;
mod table;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use allowed_origins::{AllowedOrigins, OriginDecision};
pub use config::{ConfigError, PolicyConfig, ResourcePolicyConfig};
pub use context::RequestContext;
pub use headers::Headers;
pub use intercept::{HeaderSink, PendingCors};
pub use layer::{CorsLayer, CorsService, ResponseFuture};
pub use policy::{ResourcePolicy, ResourcePolicyBuilder, ValidationError};
pub use resolver::CorsResolver;
pub use result::{CorsDecision, CorsResult};
pub use table::{PolicyTable, PolicyTableBuilder, WildcardCredentials};
pub use util::{equals_ignore_case, normalize_lower};
