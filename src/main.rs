use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ideaforge::cli::commands;

#[derive(Parser)]
#[command(name = "ideaforge")]
#[command(version, about = "Multi-agent AI analysis for startup ideas")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full agent pipeline on an idea
    Analyze {
        #[arg(help = "Path to the idea JSON file")]
        idea: PathBuf,
        #[arg(long, short, help = "Path to a founder profile JSON file")]
        profile: Option<PathBuf>,
        #[arg(long, help = "LLM provider (groq, openai, gemini)")]
        provider: Option<String>,
        #[arg(long, help = "Model to use")]
        model: Option<String>,
        #[arg(long, help = "Per-agent timeout in seconds (0 disables)")]
        timeout: Option<u64>,
        #[arg(long, help = "Emit machine-readable JSON instead of text")]
        json: bool,
    },

    /// Score an idea against a founder profile (no LLM calls)
    Fit {
        #[arg(help = "Path to the idea JSON file")]
        idea: PathBuf,
        #[arg(help = "Path to the founder profile JSON file")]
        profile: PathBuf,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize global configuration
    Init {
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> ideaforge::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Analyze {
            idea,
            profile,
            provider,
            model,
            timeout,
            json,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::analyze::run(commands::analyze::AnalyzeOptions {
                idea,
                profile,
                provider,
                model,
                timeout_secs: timeout,
                json,
            }))?;
        }
        Commands::Fit {
            idea,
            profile,
            format,
        } => {
            commands::fit::run(&idea, &profile, format == "json")?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                commands::config::path()?;
            }
            ConfigAction::Init { force } => {
                commands::config::init_global(force)?;
            }
        },
    }

    Ok(())
}
