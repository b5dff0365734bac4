mod assets;
mod config;
mod handlers;
mod resolver;
mod views;

use crate::config::Config;
use crate::handlers::AppState;
use crate::resolver::SystemResolver;
use anyhow::{Context, Result};
use fieldcheck_validation::{DomainResolver, NoopResolver};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fieldcheck_server=info,tower_http=info")),
        )
        .init();

    info!("fieldcheck starting...");

    let config = Config::load_default().unwrap_or_else(|e| {
        warn!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });

    let resolver: Arc<dyn DomainResolver> = if config.validation.enable_dns_lookup {
        match SystemResolver::from_system_conf(config.dns.timeout()) {
            Ok(resolver) => {
                info!(timeout_ms = config.dns.timeout_ms, "Email domain lookup: enabled");
                Arc::new(resolver)
            }
            Err(e) => {
                warn!("Email domain lookup unavailable: {:#}", e);
                Arc::new(NoopResolver)
            }
        }
    } else {
        Arc::new(NoopResolver)
    };

    info!(
        checksum = config.validation.checksum_enabled,
        grouping = config.validation.grouping_enabled,
        prefix = ?config.validation.required_prefix,
        mobile_prefixes = %config.validation.prefix_list(),
        "Validation rules loaded"
    );

    let addr = config.addr();
    let pkg_dir = config.assets.pkg_dir.clone();
    if !std::path::Path::new(&pkg_dir).exists() {
        warn!(
            "WASM bundle not found at {} (run wasm-pack build crates/fieldcheck-wasm --target web); live validation disabled",
            pkg_dir
        );
    }

    let app = handlers::router(AppState::new(config, resolver))
        .nest_service(assets::PKG_PATH, assets::pkg_service(&pkg_dir))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
