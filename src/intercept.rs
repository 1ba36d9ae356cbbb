use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::Headers;
use crate::resolver::CorsResolver;
use crate::result::CorsDecision;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Request, Response, Uri};
use tracing::warn;

/// Destination for computed CORS headers at response-write time.
///
/// Implementations set (or replace) the named header and leave every other
/// header untouched.
pub trait HeaderSink {
    fn set_header(&mut self, name: &str, value: &str);
}

impl HeaderSink for Headers {
    fn set_header(&mut self, name: &str, value: &str) {
        match self.keys().position(|existing| existing.eq_ignore_ascii_case(name)) {
            Some(index) => {
                if let Some((_, existing)) = self.get_index_mut(index) {
                    *existing = value.to_string();
                }
            }
            None => {
                self.insert(name.to_string(), value.to_string());
            }
        }
    }
}

impl HeaderSink for HeaderMap {
    fn set_header(&mut self, name: &str, value: &str) {
        match (HeaderName::try_from(name), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                self.insert(name, value);
            }
            _ => warn!(header = name, "skipping CORS header with an unrepresentable value"),
        }
    }
}

impl<B> HeaderSink for Response<B> {
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers_mut().set_header(name, value);
    }
}

/// CORS headers computed for a request, waiting for the response.
///
/// [`PendingCors::apply`] consumes the value, so the headers reach a response
/// at most once.
#[must_use = "pending CORS headers do nothing until applied to a response"]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingCors {
    headers: Headers,
}

impl PendingCors {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn apply<S: HeaderSink + ?Sized>(self, sink: &mut S) {
        for (name, value) in &self.headers {
            sink.set_header(name, value);
        }
    }
}

impl From<CorsDecision> for PendingCors {
    fn from(decision: CorsDecision) -> Self {
        Self {
            headers: decision.into_headers(),
        }
    }
}

impl CorsResolver {
    /// Resolves `request` now and returns the headers to merge later.
    pub fn prepare(&self, request: &RequestContext<'_>) -> PendingCors {
        self.resolve(request).into()
    }

    /// Runs `next` and merges the computed CORS headers into what it returns.
    ///
    /// The continuation always runs, whatever the decision; only the headers
    /// differ.
    pub fn intercept<R, F>(&self, request: &RequestContext<'_>, next: F) -> R
    where
        F: FnOnce() -> R,
        R: HeaderSink,
    {
        let pending = self.prepare(request);
        let mut response = next();
        pending.apply(&mut response);
        response
    }
}

impl<'a> RequestContext<'a> {
    /// Reads the CORS-relevant fields of an `http` request.
    ///
    /// Header values that are not visible ASCII are treated as absent.
    pub fn from_http(method: &'a Method, uri: &'a Uri, headers: &'a HeaderMap) -> Self {
        Self {
            method: method.as_str(),
            path: uri.path(),
            origin: header_str(headers, header::ORIGIN),
            access_control_request_method: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    pub fn from_request<B>(request: &'a Request<B>) -> Self {
        Self::from_http(request.method(), request.uri(), request.headers())
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
#[path = "intercept_test.rs"]
mod intercept_test;
