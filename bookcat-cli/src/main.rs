//! Bookcat CLI - Command-line front end for the book catalog

mod commands;

use anyhow::Result;
use bookcat_core::PriceFilter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookcat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the catalog
    #[arg(
        long,
        global = true,
        env = "BOOKCAT_STORAGE_PATH",
        default_value = "./bookcat_data"
    )]
    storage: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the books in the catalog
    List {
        /// Price filter (all, lt10, btw10_20, gt20)
        #[arg(short, long, default_value = "all")]
        filter: PriceFilter,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new book
    Add {
        /// Book title
        #[arg(short, long)]
        title: String,

        /// Book author
        #[arg(short, long)]
        author: String,

        /// Cover image URL
        #[arg(short, long, default_value = "")]
        url: String,
    },

    /// Edit the selected book
    Edit {
        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New author
        #[arg(short, long)]
        author: Option<String>,

        /// New cover image URL
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Toggle selection of a book by its index
    Select {
        /// Catalog index as shown by `list`
        index: usize,
    },

    /// Delete the selected book
    Delete,

    /// Discard all changes and restore the bundled books
    Reset,

    /// Start an interactive session
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookcat_cli=debug,bookcat_core=debug"
    } else {
        "bookcat_cli=info,bookcat_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut controller = commands::open(&cli.storage);

    match cli.command {
        Commands::List { filter, json } => commands::list(&mut controller, filter, json),

        Commands::Add { title, author, url } => commands::add(&mut controller, title, author, url),

        Commands::Edit { title, author, url } => {
            commands::edit(&mut controller, title, author, url)
        }

        Commands::Select { index } => commands::select(&mut controller, index),

        Commands::Delete => commands::delete(&mut controller),

        Commands::Reset => commands::reset(&mut controller),

        Commands::Shell => commands::shell(&mut controller),
    }
}
