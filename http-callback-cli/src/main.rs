//! HTTP Callback CLI Application
//!
//! Demonstrates the http-callback library: builds one GET request whose
//! handler prints the delivered values. Nothing completes the request unless
//! a delivery is requested on the command line or in the config file.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;

use config::{AppConfig, DeliveryConfig};

/// HTTP Callback - adapt a completion handler into a request callback
#[derive(Parser, Debug)]
#[command(name = "http-callback-cli")]
#[command(about = "Build a stub HTTP GET request with an adapted callback", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Simulate a completion carrying this result
    #[arg(long, value_name = "RESULT")]
    deliver: Option<String>,

    /// Mark the simulated completion as failed
    #[arg(long, requires = "deliver")]
    failed: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("HTTP Callback CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using callback library v{}", http_callback::VERSION);

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let request = http_callback::new_request(|success: bool, result: String| -> http_callback::Result<()> {
        println!("{}", completion_line(success, &result));
        Ok(())
    });

    match resolve_delivery(&args, &config) {
        Some(delivery) => {
            log::debug!("Delivering simulated completion");
            request.complete(delivery.success, delivery.result)?;
        }
        None => {
            log::debug!("No delivery requested; request left in {:?} state", request.state());
        }
    }

    Ok(())
}

/// Text printed for a delivered completion: the flag and result, space-separated
fn completion_line(success: bool, result: &str) -> String {
    format!("{} {}", success, result)
}

/// Command line delivery wins over the config file
fn resolve_delivery(args: &Args, config: &AppConfig) -> Option<DeliveryConfig> {
    match &args.deliver {
        Some(result) => Some(DeliveryConfig {
            success: !args.failed,
            result: result.clone(),
        }),
        None => config.delivery.clone(),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
