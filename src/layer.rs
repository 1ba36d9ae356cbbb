//! `tower` middleware that attaches resolved CORS headers to responses.
//!
//! The layer never answers a request itself: preflights reach the inner
//! service like any other request, and the computed headers are merged into
//! whatever response comes back.

use crate::context::RequestContext;
use crate::intercept::PendingCors;
use crate::resolver::CorsResolver;
use crate::table::PolicyTable;
use http::{Request, Response};
use pin_project_lite::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, ready};
use tower_layer::Layer;
use tower_service::Service;

#[derive(Clone, Debug)]
pub struct CorsLayer {
    resolver: Arc<CorsResolver>,
}

impl CorsLayer {
    pub fn new(resolver: Arc<CorsResolver>) -> Self {
        Self { resolver }
    }

    pub fn from_table(table: PolicyTable) -> Self {
        Self::new(Arc::new(CorsResolver::new(table)))
    }
}

impl<S> Layer<S> for CorsLayer {
    type Service = CorsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorsService {
            inner,
            resolver: Arc::clone(&self.resolver),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CorsService<S> {
    inner: S,
    resolver: Arc<CorsResolver>,
}

impl<S> CorsService<S> {
    pub fn new(inner: S, resolver: Arc<CorsResolver>) -> Self {
        Self { inner, resolver }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CorsService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = ResponseFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let pending = self.resolver.prepare(&RequestContext::from_request(&request));

        ResponseFuture {
            future: self.inner.call(request),
            pending: Some(pending),
        }
    }
}

pin_project! {
    /// Response future for [`CorsService`].
    pub struct ResponseFuture<F> {
        #[pin]
        future: F,
        pending: Option<PendingCors>,
    }
}

impl<F, B, E> Future for ResponseFuture<F>
where
    F: Future<Output = Result<Response<B>, E>>,
{
    type Output = Result<Response<B>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let mut response = ready!(this.future.poll(cx))?;

        if let Some(pending) = this.pending.take() {
            pending.apply(&mut response);
        }

        Poll::Ready(Ok(response))
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;
