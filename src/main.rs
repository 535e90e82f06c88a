//! CLI entry point for postforge

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postforge")]
#[command(version)]
#[command(about = "A markdown blog content pipeline with author cross-referencing", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    List {
        /// Type of content to list (post, author)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Resolve a post by identifier and print its rendered form
    Show {
        /// Identifier of the post
        id: String,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Author identifier for the new post
        #[arg(short, long)]
        author: Option<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postforge=debug,info"
    } else {
        "postforge=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let site = postforge::Site::new(&base_dir)?;
            postforge::commands::list::run(&site, &r#type)?;
        }

        Commands::Show { id } => {
            let site = postforge::Site::new(&base_dir)?;
            postforge::commands::show::run(&site, &id)?;
        }

        Commands::New { title, author } => {
            let site = postforge::Site::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            postforge::commands::new::run(&site, &title, author.as_deref())?;
        }

        Commands::Version => {
            println!("postforge version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
