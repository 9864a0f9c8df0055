//! Configuration management
//!
//! This module provides YAML-based configuration management with support for:
//! - Environment variable overrides
//! - Multiple configuration file locations
//! - Default values for all settings
//! - Submission latency and ambient simulation tuning

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Path to the static dashboard (index.html, script, styles)
    #[serde(default = "default_static_dir")]
    pub static_dir: Option<PathBuf>,
    /// Whether to serve the static dashboard alongside the API
    #[serde(default = "default_serve_frontend")]
    pub serve_frontend: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5051
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_static_dir() -> Option<PathBuf> {
    let path = PathBuf::from("public");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

fn default_serve_frontend() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            static_dir: default_static_dir(),
            serve_frontend: default_serve_frontend(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// Log output target (console or file)
    #[serde(default = "default_log_target")]
    pub target: LogTarget,
    /// Directory for log files (used when target is "file" or "both")
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Log file name prefix
    #[serde(default = "default_log_prefix")]
    pub log_prefix: String,
    /// Enable daily log rotation
    #[serde(default = "default_log_rotation")]
    pub daily_rotation: bool,
}

/// Log output target
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    /// Log to console (stdout/stderr) - default for development
    #[default]
    Console,
    /// Log to file with optional rotation
    File,
    /// Log to both console and file
    Both,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

fn default_log_target() -> LogTarget {
    LogTarget::Console
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_prefix() -> String {
    "cloudvigia".to_string()
}

fn default_log_rotation() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            target: default_log_target(),
            log_dir: default_log_dir(),
            log_prefix: default_log_prefix(),
            daily_rotation: default_log_rotation(),
        }
    }
}

/// Report submission settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmissionConfig {
    /// Simulated processing delay before a report is committed
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// City recorded on new reports
    #[serde(default = "default_city")]
    pub default_city: String,
    /// Minimum description length, in characters
    #[serde(default = "default_min_description_len")]
    pub min_description_len: usize,
}

fn default_latency_ms() -> u64 {
    1500
}

fn default_city() -> String {
    "São Paulo".to_string()
}

fn default_min_description_len() -> usize {
    20
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            default_city: default_city(),
            min_description_len: default_min_description_len(),
        }
    }
}

/// Ambient traffic simulation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    #[serde(default = "default_simulation_enabled")]
    pub enabled: bool,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Chance per tick that new reports arrive
    #[serde(default = "default_new_report_probability")]
    pub new_report_probability: f64,
    /// Chance per tick that active reports get resolved
    #[serde(default = "default_resolution_probability")]
    pub resolution_probability: f64,
}

fn default_simulation_enabled() -> bool {
    true
}

fn default_interval_secs() -> u64 {
    10
}

fn default_new_report_probability() -> f64 {
    0.3
}

fn default_resolution_probability() -> f64 {
    0.2
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            enabled: default_simulation_enabled(),
            interval_secs: default_interval_secs(),
            new_report_probability: default_new_report_probability(),
            resolution_probability: default_resolution_probability(),
        }
    }
}

/// Dashboard export settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_max_reports")]
    pub max_reports: usize,
}

fn default_max_reports() -> usize {
    50
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            max_reports: default_max_reports(),
        }
    }
}

/// Session store settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Load the dashboard seed data at startup
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,
}

fn default_seed_fixtures() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_fixtures: default_seed_fixtures(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            submission: SubmissionConfig::default(),
            simulation: SimulationConfig::default(),
            export: ExportConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file (YAML)
    /// 3. Environment variables (prefixed with CLOUDVIGIA_)
    pub fn load() -> Result<Self> {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        let config_path = std::env::var("CLOUDVIGIA_CONFIG")
            .map(PathBuf::from)
            .ok()
            .or_else(Self::find_config_file);

        let mut config = match config_path {
            Some(ref path) if path.exists() => {
                eprintln!("[CONFIG] Loading configuration from: {:?}", path);
                Self::from_file(path)?
            }
            Some(ref path) => {
                eprintln!("[CONFIG] Config file not found: {:?}, using defaults", path);
                AppConfig::default()
            }
            None => {
                eprintln!("[CONFIG] No config file found, using defaults");
                AppConfig::default()
            }
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parse a YAML configuration file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        serde_norway::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Find the configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let paths = [
            PathBuf::from("config.yaml"),
            PathBuf::from("config/config.yaml"),
            PathBuf::from("/etc/cloudvigia/config.yaml"),
            dirs::config_dir()
                .map(|p| p.join("cloudvigia/config.yaml"))
                .unwrap_or_default(),
        ];

        paths.into_iter().find(|p| p.exists())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // Server overrides
        if let Ok(host) = std::env::var("CLOUDVIGIA_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("CLOUDVIGIA_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(serve) = std::env::var("CLOUDVIGIA_SERVE_FRONTEND") {
            self.server.serve_frontend = parse_bool(&serve);
        }

        // Logging overrides
        if let Ok(level) = std::env::var("RUST_LOG") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CLOUDVIGIA_LOG_FORMAT") {
            self.logging.format = parse_log_format(&format);
        }

        // Submission overrides
        if let Ok(latency) = std::env::var("CLOUDVIGIA_SUBMISSION_LATENCY_MS") {
            if let Ok(ms) = latency.parse() {
                self.submission.latency_ms = ms;
            }
        }
        if let Ok(city) = std::env::var("CLOUDVIGIA_DEFAULT_CITY") {
            self.submission.default_city = city;
        }

        // Simulation overrides
        if let Ok(enabled) = std::env::var("CLOUDVIGIA_SIMULATION_ENABLED") {
            self.simulation.enabled = parse_bool(&enabled);
        }
        if let Ok(interval) = std::env::var("CLOUDVIGIA_SIMULATION_INTERVAL_SECS") {
            if let Ok(secs) = interval.parse() {
                self.simulation.interval_secs = secs;
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        if self.simulation.interval_secs == 0 {
            anyhow::bail!("Simulation interval must be at least 1 second");
        }

        for (name, p) in [
            ("new_report_probability", self.simulation.new_report_probability),
            ("resolution_probability", self.simulation.resolution_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                anyhow::bail!("simulation.{} must be between 0 and 1, got {}", name, p);
            }
        }

        if self.submission.default_city.trim().is_empty() {
            anyhow::bail!("submission.default_city cannot be empty");
        }

        if self.export.max_reports == 0 {
            anyhow::bail!("export.max_reports must be at least 1");
        }

        if let Some(ref static_dir) = self.server.static_dir {
            if !static_dir.exists() {
                tracing::warn!(
                    "Static directory does not exist: {:?}. Dashboard will not be served.",
                    static_dir
                );
            }
        }

        Ok(())
    }

    /// Create a default configuration file
    pub fn create_default_config(path: &PathBuf) -> Result<()> {
        let config = AppConfig::default();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_norway::to_string(&config)?;
        std::fs::write(path, yaml)?;

        Ok(())
    }
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

fn parse_log_format(value: &str) -> LogFormat {
    match value.to_lowercase().as_str() {
        "json" => LogFormat::Json,
        "compact" => LogFormat::Compact,
        _ => LogFormat::Pretty,
    }
}
