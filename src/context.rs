use crate::constants::method;

/// CORS-relevant view of one incoming request.
///
/// `path` is the URL path component only, without the query string.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl RequestContext<'_> {
    pub fn is_preflight(&self) -> bool {
        self.method.trim().eq_ignore_ascii_case(method::OPTIONS)
    }
}
