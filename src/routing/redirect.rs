//! Redirect-or-fallback dispatch.
//!
//! # Responsibilities
//! - Look up each request target in a [`PathMapping`]
//! - Answer hits with a temporary redirect
//! - Hand misses, untouched, to the wrapped fallback service
//!
//! # Design Decisions
//! - Decorator over any tower `Service`, so chains nest:
//!   `RedirectService<RedirectService<Router>>`
//! - Mapping shared via `Arc`; cloning a service never copies the table
//! - Error type is the fallback's; a hit can never fail

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{http::Request, response::Response};
use tower::{Layer, Service};

use crate::routing::location::temporary_redirect;
use crate::routing::matcher::request_target;
use crate::routing::router::PathMapping;

/// Service that redirects mapped targets and delegates everything else.
#[derive(Debug, Clone)]
pub struct RedirectService<S> {
    mapping: Arc<PathMapping>,
    fallback: S,
}

impl<S> RedirectService<S> {
    pub fn new(mapping: impl Into<Arc<PathMapping>>, fallback: S) -> Self {
        Self {
            mapping: mapping.into(),
            fallback,
        }
    }

    /// The table this service answers from.
    pub fn mapping(&self) -> &PathMapping {
        &self.mapping
    }

    /// The next service in the chain.
    pub fn fallback(&self) -> &S {
        &self.fallback
    }
}

impl<S, B> Service<Request<B>> for RedirectService<S>
where
    S: Service<Request<B>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.fallback.poll_ready(cx)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let target = request_target(&request);

        if let Some(url) = self.mapping.lookup(&target) {
            let response = temporary_redirect(request.method(), request.uri().path(), url);
            tracing::debug!(
                request_target = %target,
                location = ?response.headers().get(axum::http::header::LOCATION),
                "Redirecting"
            );
            return Box::pin(std::future::ready(Ok(response)));
        }

        tracing::trace!(request_target = %target, "No redirect mapped, delegating to fallback");

        // The instance that was polled ready serves this request.
        let clone = self.fallback.clone();
        let mut fallback = std::mem::replace(&mut self.fallback, clone);
        Box::pin(fallback.call(request))
    }
}

/// [`Layer`] that wraps a service in a [`RedirectService`].
#[derive(Debug, Clone)]
pub struct RedirectLayer {
    mapping: Arc<PathMapping>,
}

impl RedirectLayer {
    pub fn new(mapping: impl Into<Arc<PathMapping>>) -> Self {
        Self {
            mapping: mapping.into(),
        }
    }
}

impl<S> Layer<S> for RedirectLayer {
    type Service = RedirectService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RedirectService {
            mapping: Arc::clone(&self.mapping),
            fallback: inner,
        }
    }
}
