#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod boundary;
mod error;
pub mod extract;
mod fallback;
mod health;
mod panic;

use std::net::SocketAddr;

use axum::Router;
use faultline_config::Config;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use boundary::error_boundary;
pub use error::ApiError;
pub use extract::{AcceptsJson, Json, Path, Query, required_header};
pub use fallback::{method_not_allowed, no_route};

/// Install the error boundary around an application router
///
/// Adds the no-route and method-not-allowed fallbacks, catches handler
/// panics, and renders every fault as a JSON error body. Call this
/// after all routes are registered; routes added afterwards do not get the
/// method-not-allowed fallback.
pub fn with_error_boundary<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .fallback(fallback::no_route)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(CatchPanicLayer::custom(panic::panic_response))
        .layer(axum::middleware::from_fn(boundary::error_boundary))
}

/// Assembled server with application routes and error handling
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server around the application's routes
    ///
    /// The routes must not set their own fallback.
    pub fn new(config: &Config, routes: Router) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = routes;

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        app = with_error_boundary(app);

        // Tracing (outermost, sees the rendered error status)
        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
