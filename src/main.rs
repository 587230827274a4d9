//! CLI entry point for diarios

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diarios::commands;
use diarios::commands::date::DateOptions;
use diarios::i18n::Locale;

#[derive(Parser)]
#[command(name = "diarios")]
#[command(author = "Tomás Coêlho")]
#[command(version)]
#[command(about = "Site configuration and post date display for Diários de um programador", long_about = None)]
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
    /// Write a config.yml with the default site configuration
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Render the publication date of a post
    #[command(alias = "d")]
    Date {
        /// Post date, e.g. 2021-03-03T00:00:00Z
        date: String,

        /// Locale to format with (pt-br, en)
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Moment-style date pattern
        #[arg(short, long)]
        format: Option<String>,

        /// Print only the text, without markup
        #[arg(long)]
        plain: bool,
    },

    /// Render the sidebar (author card, menu, contacts)
    Sidebar,

    /// List the listing page paths for a number of posts
    Pages {
        /// Total number of posts
        total: usize,
    },

    /// List site information
    List {
        /// Section to list (site, menu, author, contacts)
        #[arg(default_value = "site")]
        section: String,
    },

    /// Print the effective configuration
    Config {
        /// Output JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "diarios=debug,info"
    } else {
        "diarios=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site config in {:?}", target_dir);
            commands::init::init_site(&target_dir)?;
            println!("Wrote config.yml in {:?}", target_dir);
        }

        Commands::Date {
            date,
            locale,
            format,
            plain,
        } => {
            let site = diarios::Site::new(&base_dir)?;
            let options = DateOptions {
                locale,
                format,
                plain,
            };
            commands::date::run(&site, &date, &options)?;
        }

        Commands::Sidebar => {
            let site = diarios::Site::new(&base_dir)?;
            println!("{}", site.sidebar()?);
        }

        Commands::Pages { total } => {
            let site = diarios::Site::new(&base_dir)?;
            for path in site.page_paths(total) {
                println!("{}", path);
            }
        }

        Commands::List { section } => {
            let site = diarios::Site::new(&base_dir)?;
            commands::list::run(&site, &section)?;
        }

        Commands::Config { json } => {
            let site = diarios::Site::new(&base_dir)?;
            commands::config::run(&site, json)?;
        }

        Commands::Version => {
            println!("diarios version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
