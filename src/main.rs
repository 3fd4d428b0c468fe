//! SMART Drive Monitor
//!
//! Loads captured SMART tables for the configured drives, classifies each
//! drive, and refreshes its sensors until interrupted or a tick budget is
//! spent. Prints the latest readings (and optionally the SMART reports) on
//! exit.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use smart_drive_monitor::{
    DeviceConfig, Error, InMemorySensorRegistry, Monitor, MonitorConfig, ProfileRegistry, Result,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// SMART Drive Monitor - decode SMART attributes into drive sensors
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(long, env = "SMART_CONFIG")]
    config: Option<PathBuf>,

    /// Additional drive capture (JSON); may be repeated
    #[arg(long = "capture", env = "SMART_CAPTURES", value_delimiter = ',')]
    captures: Vec<PathBuf>,

    /// Sensor refresh period in seconds
    #[arg(long, env = "POLL_INTERVAL")]
    interval_secs: Option<u64>,

    /// Stop after this many ticks (default: run until Ctrl-C)
    #[arg(long, env = "MAX_TICKS")]
    ticks: Option<u64>,

    /// Print the SMART report of every drive on exit
    #[arg(long, env = "SMART_REPORT")]
    report: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args)?;

    info!("Starting SMART Drive Monitor");
    info!("  Version: {}", smart_drive_monitor::VERSION);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e);
        }
    };
    info!("  Drives configured: {}", config.devices.len());
    info!("  Poll interval: {}s", config.poll_interval_secs);

    let registry = Arc::new(InMemorySensorRegistry::new());
    let profiles = ProfileRegistry::builtin();
    info!("Profile registry initialized ({} device families)", profiles.len());

    let mut monitor = match Monitor::open_all(&config, &profiles, registry.clone()) {
        Ok(monitor) => monitor,
        Err(e) => {
            error!("Failed to open drives: {}", e);
            return Err(e);
        }
    };

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };
    let ticks = monitor.run(args.ticks, shutdown).await;
    info!("Ran {} ticks", ticks);

    print_readings(&registry)?;
    if config.report_on_exit {
        for report in monitor.reports() {
            println!("{}", report);
        }
    }

    monitor.shutdown();
    info!("Monitor shutdown complete");
    Ok(())
}

// =============================================================================
// Configuration
// =============================================================================

fn load_config(args: &Args) -> Result<MonitorConfig> {
    let mut config = match &args.config {
        Some(path) => MonitorConfig::from_file(path)?,
        None => MonitorConfig::default(),
    };

    config
        .devices
        .extend(args.captures.iter().cloned().map(DeviceConfig::from_capture));
    if let Some(secs) = args.interval_secs {
        config.poll_interval_secs = secs;
    }
    if args.report {
        config.report_on_exit = true;
    }

    config.validate()?;
    if config.devices.is_empty() {
        return Err(Error::Configuration(
            "no drives configured; pass --config or --capture".to_string(),
        ));
    }
    Ok(config)
}

// =============================================================================
// Output
// =============================================================================

fn print_readings(registry: &InMemorySensorRegistry) -> Result<()> {
    let readings = serde_json::to_string_pretty(&registry.snapshot())?;
    println!("{}", readings);
    Ok(())
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) -> Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let result = if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| Error::Internal(format!("Failed to initialize logging: {}", e)))
}
