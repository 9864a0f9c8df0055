//! CloudVigia - Dashboard service for citizen-reported urban issues
//!
//! Serves the dashboard's JSON API (report submission, filters, export,
//! map and chart data) and, optionally, the static dashboard itself.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::Layered,
    prelude::*,
    EnvFilter, Layer, Registry,
};

use cloudvigia::{
    api,
    config::{LogFormat, LogTarget, LoggingConfig},
    middleware,
    services::{self, SystemClock},
    AppConfig, AppState,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("CloudVigia {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Some(pos) = args.iter().position(|arg| arg == "--init-config") {
        let path = args
            .get(pos + 1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("config.yaml"));
        AppConfig::create_default_config(&path)
            .with_context(|| format!("Failed to write default configuration to {:?}", path))?;
        println!("Default configuration written to {:?}", path);
        return Ok(());
    }

    // Load configuration first (before logging, so we know log format)
    let config = AppConfig::load().context("Failed to load configuration")?;

    // The guard must outlive the server so file logs are flushed
    let _log_guard = init_logging(&config.logging);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers.max(1))
        .enable_all()
        .build()
        .context("Failed to build the tokio runtime")?;

    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    info!("CloudVigia starting up");
    info!(
        workers = config.server.workers,
        latency_ms = config.submission.latency_ms,
        "Configuration loaded successfully"
    );

    let state = AppState::new(config.clone(), Arc::new(SystemClock));

    let simulation = if config.simulation.enabled {
        info!(
            interval_secs = config.simulation.interval_secs,
            "Starting ambient simulation"
        );
        Some(services::start_ambient_simulation(
            state.store.clone(),
            config.simulation.clone(),
        ))
    } else {
        info!("Ambient simulation is disabled");
        None
    };

    let app = create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address configuration")?;

    info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("HTTP server is ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    if let Some(simulation) = simulation {
        simulation.stop().await;
    }
    info!("CloudVigia stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

type BaseSubscriber = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<BaseSubscriber> + Send + Sync + 'static>;

/// Initialize logging for the configured target and format
///
/// Returns the file writer guard when logging to a file.
fn init_logging(log_config: &LoggingConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_config.level));

    let mut layers: Vec<BoxedLayer> = Vec::new();

    if matches!(log_config.target, LogTarget::Console | LogTarget::Both) {
        layers.push(format_layer(&log_config.format, std::io::stdout));
    }

    let guard = if matches!(log_config.target, LogTarget::File | LogTarget::Both) {
        let (writer, guard) = create_file_writer(log_config);
        layers.push(format_layer(&log_config.format, writer));
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .init();

    guard
}

/// Formatting layer for one output
fn format_layer<W>(format: &LogFormat, writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => fmt::layer().json().with_target(true).with_writer(writer).boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(writer)
            .boxed(),
    }
}

/// Create a file writer with optional daily rotation
fn create_file_writer(
    log_config: &LoggingConfig,
) -> (
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
) {
    if let Err(e) = std::fs::create_dir_all(&log_config.log_dir) {
        eprintln!(
            "Warning: Failed to create log directory {:?}: {}",
            log_config.log_dir, e
        );
    }

    let file_appender = if log_config.daily_rotation {
        tracing_appender::rolling::daily(&log_config.log_dir, &log_config.log_prefix)
    } else {
        tracing_appender::rolling::never(&log_config.log_dir, &log_config.log_prefix)
    };

    tracing_appender::non_blocking(file_appender)
}

/// Create the application router with all routes and middleware
fn create_router(state: AppState, config: &AppConfig) -> Router {
    // Only needed when the dashboard is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let api_router = Router::new()
        .nest("/api/v1", api::routes())
        .layer(axum::middleware::from_fn(
            middleware::api_cache_control_middleware,
        ))
        .with_state(state);

    let router = match (&config.server.static_dir, config.server.serve_frontend) {
        (_, false) => {
            info!("Dashboard serving disabled by configuration");
            api_router
        }
        (None, true) => {
            info!("No static directory configured, dashboard not served");
            api_router
        }
        (Some(static_dir), true) if !static_dir.exists() => {
            warn!("Static directory {:?} does not exist, dashboard not served", static_dir);
            api_router
        }
        (Some(static_dir), true) => {
            info!("Serving dashboard from {:?}", static_dir);
            let index_file = static_dir.join("index.html");
            if index_file.exists() {
                api_router.fallback_service(
                    ServeDir::new(static_dir).not_found_service(ServeFile::new(index_file)),
                )
            } else {
                warn!("index.html not found in {:?}", static_dir);
                api_router.fallback_service(ServeDir::new(static_dir))
            }
        }
    };

    router
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(trace_layer)
        .layer(cors)
}

/// Print help message
fn print_help() {
    println!(
        r#"CloudVigia {}

USAGE:
    cloudvigia [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    --init-config [PATH]    Write a configuration file with default values
                            (default: config.yaml) and exit

ENVIRONMENT:
    CLOUDVIGIA_CONFIG                     Path to configuration file
    CLOUDVIGIA_HOST, CLOUDVIGIA_PORT      Listen address
    CLOUDVIGIA_LOG_FORMAT                 pretty, json or compact
    CLOUDVIGIA_SUBMISSION_LATENCY_MS      Simulated processing delay
    CLOUDVIGIA_DEFAULT_CITY               City recorded on new reports
    CLOUDVIGIA_SIMULATION_ENABLED         Toggle the ambient counter simulation
    CLOUDVIGIA_SIMULATION_INTERVAL_SECS   Simulation tick interval
    RUST_LOG                              Log filter

CONFIGURATION:
    The application looks for configuration files in the following order:
    1. Path specified by CLOUDVIGIA_CONFIG environment variable
    2. ./config.yaml
    3. ./config/config.yaml
    4. /etc/cloudvigia/config.yaml
    5. <user config dir>/cloudvigia/config.yaml"#,
        env!("CARGO_PKG_VERSION")
    );
}
