//! Command-line front end: list documented components or print one
//! component's documentation fragment.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rs_docnav::{render, validate_component_name, DocumentationPipeline, Error, Options};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "docnav", version, about = "Component documentation lookup")]
struct Cli {
    /// Page whose navigation menu lists the components [env: DOCNAV_BASE_URL]
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in seconds, 0 disables [env: DOCNAV_TIMEOUT_SECS]
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every component in the navigation
    List,
    /// Print the documentation fragment of one component
    Doc {
        /// Component name, matched case-insensitively as a substring
        name: String,
    },
}

/// Environment first, then command-line flags.
fn options(cli: &Cli) -> Result<Options, Error> {
    let mut options = Options::from_env()?.with_overrides(cli.base_url.as_deref(), None)?;
    if let Some(secs) = cli.timeout {
        options.timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }
    Ok(options)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Config(format!("JSON output: {e}")))
}

async fn run(cli: Cli) -> Result<String, Error> {
    let options = options(&cli)?;
    let pipeline = DocumentationPipeline::from_options(&options)?;

    match cli.command {
        Command::List => {
            let entries = pipeline.list_navigation(&options.base_url).await?;
            if cli.json {
                to_json(&entries)
            } else {
                Ok(render::navigation_listing(&entries, &options.base_url))
            }
        }
        Command::Doc { name } => {
            let name = validate_component_name(&name)?;
            let result = pipeline.get_documentation(&options.base_url, name).await?;
            if cli.json {
                to_json(&result)
            } else {
                Ok(render::documentation(&result).to_string())
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", render::error_text(&err));
            ExitCode::FAILURE
        }
    }
}
