//! Gradebook Binary
//!
//! Runs the interactive student menu, or prints a report and exits.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gradebook::menu;
use gradebook::{Config, Gradebook};
use tracing_subscriber::{fmt, EnvFilter};

/// Gradebook
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "In-memory student record manager with JSON persistence")]
#[command(version)]
struct Args {
    /// JSON data file
    #[arg(short, long, default_value = "data/students.json")]
    data_file: PathBuf,

    /// Longest student name kept, in characters
    #[arg(short = 'n', long, default_value = "49")]
    name_max_len: usize,

    /// Only save on exit, not after every change
    #[arg(long)]
    no_autosave: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Print the summary table
    List,

    /// Print every grade of every student
    Matrix,

    /// Print the highest and lowest averages
    Stats,
}

fn main() {
    // Logs go to stderr so the menu owns stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Gradebook v{}", gradebook::VERSION);
    tracing::info!("Data file: {}", args.data_file.display());

    // Build config from args
    let config = Config::builder()
        .data_file(&args.data_file)
        .name_max_len(args.name_max_len)
        .autosave(!args.no_autosave)
        .build();

    // Unreadable or corrupt data stops here so it is never overwritten
    let mut book = match Gradebook::open(config) {
        Ok(book) => book,
        Err(e) => {
            tracing::error!("Failed to open gradebook: {}", e);
            eprintln!("Failed to open {}: {}", args.data_file.display(), e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let result = match args.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::run(&mut book, io::stdin().lock(), stdout.lock()),
        Commands::List => report(|out| menu::write_summary(out, book.store())),
        Commands::Matrix => report(|out| menu::write_matrix(out, book.store())),
        Commands::Stats => report(|out| menu::write_stats(out, book.store())),
    };

    if let Err(e) = result {
        tracing::error!("Gradebook error: {}", e);
        std::process::exit(1);
    }
}

/// Write one report to stdout
fn report<F>(render: F) -> gradebook::Result<()>
where
    F: FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>,
{
    let mut out = io::stdout().lock();
    render(&mut out)?;
    out.flush()?;
    Ok(())
}
