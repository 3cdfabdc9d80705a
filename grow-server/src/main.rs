//! Grow Server Binary
//!
//! HTTP server exposing the site's content registry.
//!
//! ## Usage
//!
//! ```bash
//! # Start with defaults (port 8430, embedded content)
//! grow-server
//!
//! # Custom port
//! GROW_PORT=3000 grow-server
//!
//! # Content from a directory, refusing duplicate slugs
//! GROW_CONTENT_DIR=./content GROW_STRICT_SLUGS=true grow-server
//!
//! # Config file (environment still overrides)
//! GROW_CONFIG=site.json grow-server
//! ```

use std::path::PathBuf;

use grow_core::SiteConfig;
use grow_server::{AppState, GrowServer, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grow_server=info,grow_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::var("GROW_CONFIG").ok().map(PathBuf::from);
    let site_config = SiteConfig::load(config_path.as_deref())?;

    match &site_config.content_dir {
        Some(dir) => tracing::info!("Loading content from {}", dir.display()),
        None => tracing::info!("Using embedded content"),
    }

    let state = AppState::new(site_config)?;
    tracing::info!("Loaded {} entities", state.site.entity_count());

    for shadowed in state.site.shadowed_keys() {
        tracing::warn!(
            collection = %shadowed.collection,
            key = %shadowed.key,
            "key authored more than once; the later record is served"
        );
    }

    let config = ServerConfig::from_env()?;

    tracing::info!("Starting Grow Server v{}", env!("CARGO_PKG_VERSION"));

    let server = GrowServer::new(state, config);
    server.run().await?;

    Ok(())
}
