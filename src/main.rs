use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use smolder::config::Config;
use smolder::pipeline::verdict::Analyzer;

/// Smolder: toxic comment detection.
///
/// Scores text against a weighted offensive-language lexicon, censors the
/// matched terms, and summarizes long inputs.
#[derive(Parser)]
#[command(name = "smolder", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a piece of text
    Check {
        /// Text to analyze (reads stdin when neither TEXT nor --file is given)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// List lexicon categories, weights and rule counts
    Lexicon,

    /// Serve the JSON API and the check page
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides SMOLDER_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("smolder=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check { text, file, json } => {
            let text = read_input(text, file)?;
            let analyzer = Analyzer::new(config.analyzer_settings())?;
            let assessment = analyzer.assess(&text)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment.verdict)?);
            } else {
                smolder::output::terminal::display_assessment(&assessment);
            }
        }

        Commands::Lexicon => {
            let lexicon = smolder::toxicity::lexicon::Lexicon::builtin()?;
            smolder::output::terminal::display_lexicon(&lexicon);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let mut config = config;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }

            let analyzer = Analyzer::new(config.analyzer_settings())?;
            info!(
                summary_min_words = config.summary_min_words,
                summary_sentences = config.summary_sentences,
                "Starting web server"
            );
            smolder::web::run_server(&config, analyzer).await?;
        }
    }

    Ok(())
}

/// Resolve the text to analyze: argument, then file, then stdin.
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        info!(path = %path.display(), "Reading text from file");
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}
