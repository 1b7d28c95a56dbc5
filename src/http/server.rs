//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Assemble the redirect chain: file table → built-in table → default router
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Stop accepting on shutdown and drain in-flight requests

use std::time::Duration;

use axum::{body::Body, http::Request, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::mapping::Record;
use crate::routing::{PathMapping, RedirectLayer};

/// Body served by the end of the chain.
pub const DEFAULT_BODY: &str = "Hello, world!\n";

/// Terminal handler of every chain: answers any path with a greeting.
pub fn default_router() -> Router {
    Router::new().fallback(hello)
}

async fn hello() -> &'static str {
    DEFAULT_BODY
}

/// HTTP server for the redirect service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server answering from `records` first, then from the
    /// configured built-in redirects, then from [`default_router`].
    pub fn new(config: ServerConfig, records: Vec<Record>) -> Self {
        Self {
            router: Self::build_router(&config, records),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, records: Vec<Record>) -> Router {
        let file_table = PathMapping::from_records(records);
        let builtin_table = PathMapping::from_records(config.redirects.iter().cloned());

        let chain = ServiceBuilder::new()
            .layer(RedirectLayer::new(file_table))
            .layer(RedirectLayer::new(builtin_table))
            .service(default_router());

        tracing::info!(
            file_redirects = chain.mapping().len(),
            builtin_redirects = chain.fallback().mapping().len(),
            "Redirect chain assembled"
        );

        Router::new()
            .fallback_service(chain)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = request_id(request).unwrap_or("unknown"),
                )
            }))
            .layer(set_request_id_layer())
    }

    /// The fully layered router, e.g. for driving it without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
