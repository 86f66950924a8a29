//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the feed handler on every path and method
//! - Wire up middleware (request ID, tracing, panic recovery)
//! - Bind server to listener and serve until shutdown

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::http::response::{panic_response, Xml};
use crate::listings::{render_feed, Query};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

/// HTTP server for the listings feed.
pub struct HttpServer {
    router: Router,
    config: Arc<ServerConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
        };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(feed_handler))
            .route("/", any(feed_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(CatchPanicLayer::custom(panic_response)),
            )
    }

    /// The router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            input = %self.config.input_path.display(),
            output = %self.config.output_path.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Feed handler. Serves the filtered listings for any path and method.
async fn feed_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
) -> Response {
    let request_id = request_id(&headers);
    let query = Query::parse(raw_query.as_deref().unwrap_or_default());

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %uri.path(),
        "Serving feed"
    );

    match render_feed(&state.config, &query).await {
        Ok(xml) => Xml(xml).into_response(),
        Err(e) => {
            tracing::warn!(request_id = %request_id, "Request failed");
            e.into_response()
        }
    }
}
