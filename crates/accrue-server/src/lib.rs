//! # Accrue Server
//!
//! REST server for the Accrue loan and interest calculators.
//!
//! ## Features
//!
//! - EMI, simple interest and compound interest endpoints
//! - A single tagged endpoint accepting any calculation kind
//! - Health and metrics endpoints
//! - Configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use accrue_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default());
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;

/// The Accrue server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            state: Arc::new(AppState::new()),
        }
    }

    /// The server's shared state.
    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let router = routes::create_router_with_state(self.state.clone())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                self.config.request_timeout(),
            ))
            .layer(TraceLayer::new_for_http());

        if self.config.cors_permissive {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router.layer(cors)
        } else {
            router
        }
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        info!("Starting Accrue server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
