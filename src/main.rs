mod models;
mod handlers;
mod routes;
mod docs;
mod config;
mod store;

use config::Config;
use routes::create_app;
use store::ItemStore;
use tracing::{info, error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use std::panic;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {

    // Set panic hook for better error messages
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        eprintln!("PANIC: {info}");
        default_hook(info);
    }));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default to info level, but allow debug for our app
            "item_store=debug,tower_http=debug,axum::rejection=trace,info".into()
        }))
        .init();

    info!("Starting server...");

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });
    info!("Service '{}' running in {} mode", config.service_name, config.environment);
    if config.is_development() && config.cors_origins.is_none() {
        warn!("CORS accepts requests from any origin");
    }

    // The store lives for the whole process and is handed to the router
    let store = ItemStore::shared();
    let app_routes = create_app(&config, store);

    let listener = match bind_listener(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", config.server_address(), e);
            std::process::exit(1);
        }
    };
    let address = listener
        .local_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| config.server_address());

    info!("🚀 Server running on http://{}", address);
    info!("📚 Swagger UI available at http://{}/swagger", address);

    if let Err(e) = axum::serve(listener, app_routes)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Bind the configured address, falling back to the secondary port when busy
async fn bind_listener(config: &Config) -> std::io::Result<TcpListener> {
    match TcpListener::bind(config.server_address()).await {
        Ok(listener) => Ok(listener),
        Err(e) => match config.fallback_address() {
            Some(fallback) => {
                warn!("Cannot bind {} ({}), trying {}", config.server_address(), e, fallback);
                TcpListener::bind(fallback).await
            }
            None => Err(e),
        },
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config(port: u16, fallback_port: Option<u16>) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port,
            fallback_port,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn busy_port_falls_back_to_secondary() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let busy_port = taken.local_addr().unwrap().port();

        let listener = bind_listener(&local_config(busy_port, Some(0))).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), busy_port);
    }

    #[tokio::test]
    async fn busy_port_without_fallback_fails() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let busy_port = taken.local_addr().unwrap().port();

        assert!(bind_listener(&local_config(busy_port, None)).await.is_err());
    }
}
