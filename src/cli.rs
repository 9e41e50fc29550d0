use std::path::PathBuf;

use eyre::Result;
use clap::{Parser, Subcommand};

use crate::cmd;

#[derive(Parser)]
#[command(
    author = "Folleto contributors",
    version,
    disable_version_flag = true,
    about = "Declarative site configuration toolkit for documentation sites"
)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::builder::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Initialize a new Folleto site
    Init {
        /// Site name
        name: Option<String>,

        /// Site title (prompted for when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Site description (prompted for when omitted)
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Create a new content document
    New {
        /// Document path relative to the content directory (e.g. guide/setup)
        path: String,
    },
    /// Check the site configuration against the content tree
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Show a summary of the site configuration
    Show,
    /// Emit the resolved site configuration for the renderer
    Emit {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn start() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init {
            name,
            title,
            description,
        } => cmd::init(name.clone(), title.clone(), description.clone()).await,
        Commands::New { path } => cmd::new(path.clone()).await,
        Commands::Check { strict } => cmd::check(*strict).await,
        Commands::Show => cmd::show().await,
        Commands::Emit { output } => cmd::emit(output.clone()).await,
    }
}
