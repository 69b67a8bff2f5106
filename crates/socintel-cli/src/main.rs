mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use socintel_core::{AppConfig, ConfigError, Platform};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "socintel-cli")]
#[command(about = "Social intelligence analytics command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Aggregate a batch of posts into summary statistics (JSON)
    Insights {
        /// Posts file (JSON or YAML); defaults to `SOCINTEL_POSTS_PATH`
        #[arg(long)]
        input: Option<PathBuf>,

        /// Only include posts from this platform
        #[arg(long)]
        platform: Option<Platform>,

        /// Only include posts from the last N days
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        days: Option<u32>,
    },
    /// Render a markdown insights report
    Report {
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long)]
        platform: Option<Platform>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        days: Option<u32>,

        /// Period label used in the report heading
        #[arg(long, default_value = "daily")]
        period: String,
    },
    /// Analyze a single piece of text (JSON)
    Analyze {
        /// Text to analyze
        text: String,
    },
    /// Per-day sentiment breakdown (JSON)
    Daily {
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long)]
        platform: Option<Platform>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        days: Option<u32>,
    },
    /// Most frequent topics with their sentiment mix (JSON)
    Topics {
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        days: Option<u32>,

        /// Maximum number of topics to list
        #[arg(long, default_value_t = socintel_analytics::DEFAULT_TOPIC_LIMIT)]
        limit: usize,
    },
}

/// Pair the parsed command with its configuration. Configuration is only
/// loaded when there is a command to run.
fn prepare<F>(cli: Cli, load_config: F) -> anyhow::Result<Option<(AppConfig, Commands)>>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    let Some(command) = cli.command else {
        return Ok(None);
    };
    Ok(Some((load_config()?, command)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some((config, command)) = prepare(cli, socintel_core::load_app_config)? else {
        println!("socintel-cli ready; run with --help to list commands");
        return Ok(());
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "loaded configuration");

    // The model tier uses a blocking HTTP client, which must be created,
    // used, and dropped off the async runtime.
    let task = tokio::task::spawn_blocking(move || commands::run(&config, command));
    let output = task.await??;
    println!("{output}");

    Ok(())
}
