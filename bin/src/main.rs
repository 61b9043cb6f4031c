//! closeline CLI - resample historical close prices and their percentage change.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use closeline_lib::ClientConfig;
use display::Format;

#[derive(Parser)]
#[command(name = "closeline")]
#[command(about = "Historical close prices resampled to a chosen interval", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress the fetch spinner)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    /// Hidden: alternative chart endpoint (testing against a local server)
    #[arg(long, hide = true, global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, resample and print one ticker
    Analyze {
        /// Ticker symbol (e.g., SPY, AAPL, ^GSPC)
        ticker: String,

        /// Interval: Hourly, Daily, Weekly, Quarterly or Yearly
        #[arg(short, long, default_value = "Daily")]
        interval: String,

        /// Start date (YYYY-MM-DD). Defaults to three years before the end date.
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD), exclusive. Defaults to today.
        #[arg(short, long)]
        end: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the supported intervals
    Intervals,

    /// Prompt for each request until you stop (default)
    Interactive,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig {
            timeout: Duration::from_secs(self.timeout),
            ..Default::default()
        };
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        config
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.client_config();

    match cli.command {
        Some(Commands::Analyze {
            ticker,
            interval,
            start,
            end,
            format,
            output,
        }) => {
            let result = commands::analyze::analyze(
                config,
                &ticker,
                &interval,
                start.as_deref(),
                end.as_deref(),
                format,
                output,
                cli.quiet,
            )
            .await;
            if let Err(err) = result {
                commands::report_failure(&err, &interval);
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Intervals) => {
            commands::intervals::list_intervals();
            Ok(())
        }
        Some(Commands::Interactive) | None => {
            commands::interactive::interactive(config, cli.quiet).await
        }
    }
}
