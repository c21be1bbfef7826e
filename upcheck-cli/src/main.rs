mod display;

use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use upcheck_core::{get_formatter, OutputFormat, StatusChecker};

#[derive(Parser)]
#[command(name = "upcheck")]
#[command(about = "Check whether a website is up or down")]
#[command(version)]
struct Cli {
    /// Website to check; the scheme is optional (e.g. example.com)
    url: String,

    /// Output format (human or json)
    #[arg(short, long, default_value = "human")]
    format: String,

    /// Timeout for the whole check, in seconds
    #[arg(short, long, default_value_t = 5)]
    timeout: u64,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Empty input is a usage error; the checker is never invoked for it.
    let input = cli.url.trim();
    if input.is_empty() {
        eprintln!("{} Please enter a website URL", "Error:".red());
        std::process::exit(2);
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    let output_format: OutputFormat = cli.format.parse().map_err(anyhow::Error::msg)?;
    let formatter = get_formatter(output_format);

    let checker = StatusChecker::new().with_timeout(Duration::from_secs(cli.timeout));

    // Only the human format gets a spinner; JSON output stays clean for pipes.
    let spinner =
        (output_format == OutputFormat::Human).then(|| display::Spinner::for_target(input));
    let result = checker.check(input).await;
    if let Some(spinner) = spinner {
        spinner.finish();
    }

    println!("{}", formatter.format_check(input, &result));

    if !result.reachable {
        std::process::exit(1);
    }

    Ok(())
}
