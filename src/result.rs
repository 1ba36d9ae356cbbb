use crate::headers::Headers;

/// Headers to merge into the response for an accepted cross-origin request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub headers: Headers,
}

/// Overall decision returned by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// `OPTIONS` request from an allowed origin.
    Preflight(CorsResult),
    /// Any other request from an allowed origin.
    Simple(CorsResult),
    /// The resource has a policy but the origin is not on it.
    Rejected,
    /// No `Origin` header, or no policy for the path.
    NotApplicable,
}

impl CorsDecision {
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Self::Preflight(result) | Self::Simple(result) => Some(&result.headers),
            Self::Rejected | Self::NotApplicable => None,
        }
    }

    pub fn into_headers(self) -> Headers {
        match self {
            Self::Preflight(result) | Self::Simple(result) => result.headers,
            Self::Rejected | Self::NotApplicable => Headers::new(),
        }
    }
}
