//! mustakhrij CLI - Arabic legal-document text extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use mustakhrij::{ExtractionResult, Extractor};

#[derive(Parser)]
#[command(name = "mustakhrij")]
#[command(version)]
#[command(about = "Extract Arabic legal-document text from PDFs, text files, and web pages", long_about = None)]
struct Cli {
    /// Input source: file path or HTTP/HTTPS URL
    #[arg(value_name = "SOURCE")]
    source: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract canonical logical-order text
    Text {
        /// Input source: file path or HTTP/HTTPS URL
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Reshape the output for display surfaces without bidi support
        #[arg(long)]
        display: bool,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Extract text and emit the full result as JSON
    Json {
        /// Input source: file path or HTTP/HTTPS URL
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct FetchArgs {
    /// User-Agent header for web sources
    #[arg(long, env = "MUSTAKHRIJ_USER_AGENT")]
    user_agent: Option<String>,

    /// Request deadline in seconds for web sources
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

impl FetchArgs {
    fn extractor(&self) -> Extractor {
        let mut extractor = Extractor::new();
        if let Some(ref agent) = self.user_agent {
            extractor = extractor.with_user_agent(agent.clone());
        }
        if let Some(secs) = self.timeout {
            extractor = extractor.with_timeout(Duration::from_secs(secs));
        }
        extractor
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Text {
            source,
            output,
            display,
            fetch,
        }) => cmd_text(&source, output.as_deref(), display, &fetch),
        Some(Commands::Json {
            source,
            output,
            compact,
            fetch,
        }) => cmd_json(&source, output.as_deref(), compact, &fetch),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(source) = cli.source {
                let fetch = FetchArgs {
                    user_agent: None,
                    timeout: None,
                };
                cmd_text(&source, None, false, &fetch)
            } else {
                println!("{}", "Usage: mustakhrij <SOURCE>".yellow());
                println!("       mustakhrij --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn warn_if_degraded(result: &ExtractionResult) {
    if let Some(ref failure) = result.failure {
        eprintln!(
            "{}: extraction degraded ({:?}): {}",
            "Warning".yellow().bold(),
            failure.kind,
            failure.message
        );
    }
}

fn cmd_text(
    source: &str,
    output: Option<&Path>,
    display: bool,
    fetch: &FetchArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = fetch.extractor();
    let result = if display {
        extractor.extract_for_display(source)
    } else {
        extractor.extract(source)
    };

    warn_if_degraded(&result);

    if let Some(path) = output {
        fs::write(path, &result.text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", result.text);
    }

    Ok(())
}

fn cmd_json(
    source: &str,
    output: Option<&Path>,
    compact: bool,
    fetch: &FetchArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = fetch.extractor().extract(source);

    warn_if_degraded(&result);

    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "mustakhrij".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Arabic legal-document text extraction tool");
    println!();
    println!("License: MIT");
}
