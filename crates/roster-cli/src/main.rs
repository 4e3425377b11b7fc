mod cmd;
mod output;

use clap::{Parser, Subcommand};
use roster_core::config::CONFIG_ENV;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "roster",
    about = "Activity roster service — list activities, sign students up, withdraw them",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ./roster.yaml if present, else built-in activities)
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on, 0 = OS-assigned (overrides the config file)
        #[arg(long)]
        port: Option<u16>,

        /// Open the landing page in a browser once listening
        #[arg(long)]
        open: bool,
    },

    /// Print the configured activities
    Activities,

    /// Validate the config file
    Check,

    /// Write the built-in activities to a config file
    Seed {
        /// Destination path
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Serve { host, port, open } => cmd::serve::run(config, host, port, open),
        Commands::Activities => cmd::activities::run(config, cli.json),
        Commands::Check => cmd::check::run(config, cli.json),
        Commands::Seed { path, force } => cmd::seed::run(&path, force),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
