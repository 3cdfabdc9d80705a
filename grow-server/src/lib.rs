//! Grow Server - HTTP route layer for Grow Core
//!
//! Serves the site's content records as JSON, with the same canonical-URL
//! redirects the site's pages use, plus the sitemap and robots.txt.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     GrowServer                        │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │   grow-core: SiteRegistry + SlugResolver        │  │
//! │  │        (built once, read-only afterwards)       │  │
//! │  └────────────────────────────────────────────────┘  │
//! │                         │                             │
//! │     ┌───────────────────┼───────────────────┐         │
//! │     ▼                   ▼                   ▼         │
//! │ /v1/states/...   /v1/partners/...    /sitemap.xml     │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups never mutate the registries, so the shared state needs no lock.

pub mod routes;
mod config;

pub use config::{ServerConfig, ServerConfigBuilder};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use grow_core::{SiteConfig, SiteRegistry, SiteRouter, SlugResolver};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Debug)]
pub struct AppState {
    /// Registries for every collection
    pub site: SiteRegistry,

    /// Resolver configured with the site's route suffix
    pub resolver: SlugResolver,

    /// Site configuration (base URL for sitemap and robots)
    pub config: SiteConfig,
}

impl AppState {
    /// Build registries from the configured content
    pub fn new(config: SiteConfig) -> grow_core::Result<Self> {
        let site = config.build_site()?;
        Ok(Self::with_site(site, config))
    }

    /// Use an already-built site registry
    pub fn with_site(site: SiteRegistry, config: SiteConfig) -> Self {
        Self {
            resolver: config.resolver(),
            site,
            config,
        }
    }

    /// Route decisions over this state
    pub fn router(&self) -> SiteRouter<'_> {
        SiteRouter::new(&self.site, &self.resolver)
    }
}

/// Grow HTTP Server
///
/// # Example
///
/// ```rust,ignore
/// use grow_core::SiteConfig;
/// use grow_server::{AppState, GrowServer, ServerConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let state = AppState::new(SiteConfig::from_env().unwrap()).unwrap();
///     let config = ServerConfig::builder().port(8430).build();
///
///     GrowServer::new(state, config).run().await.unwrap();
/// }
/// ```
pub struct GrowServer {
    state: Arc<AppState>,
    config: ServerConfig,
}

impl GrowServer {
    pub fn new(state: AppState, config: ServerConfig) -> Self {
        Self {
            state: Arc::new(state),
            config,
        }
    }

    /// Build the Axum router with all routes and layers
    pub fn router(&self) -> Router {
        let router = routes::create_router(Arc::clone(&self.state)).layer(TraceLayer::new_for_http());
        if self.config.cors_enabled {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Get the socket address for the server
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.config.port))
    }

    /// Run the server
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();
        let addr = self.addr();

        tracing::info!("Grow Server listening on http://{}", addr);
        tracing::info!("Endpoints:");
        tracing::info!("  GET  /health");
        tracing::info!("  GET  /v1/states[/:segment[/lanes/:segment]]");
        tracing::info!("  GET  /v1/partners[/:slug]");
        tracing::info!("  GET  /v1/careers[/:slug]");
        tracing::info!("  GET  /v1/truck-types[/:slug]");
        tracing::info!("  GET  /v1/areas-we-serve/*path");
        tracing::info!("  POST /v1/content/validate/:template");
        tracing::info!("  GET  /sitemap.xml, /robots.txt");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
