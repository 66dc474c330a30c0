use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lsearch::index::stats::{build_summary, print_stats_json, show_stats};
use lsearch::index::{IndexBuilder, IndexSnapshot, SharedIndex};
use lsearch::output;
use lsearch::utils::{AppConfig, default_scan_root};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lsearch")]
#[command(about = "Local in-memory full-text search over a directory of text files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory to scan in interactive mode (asked for when omitted)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Config file (defaults to <config dir>/lsearch/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Index only files ending with this suffix; repeat for several
    #[arg(long = "ext", global = true, value_name = "SUFFIX")]
    extensions: Vec<String>,

    /// Hide the progress bar and build summary
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and run a single query
    Search {
        /// Query words; a line must contain all of them
        #[arg(required = true)]
        query: Vec<String>,

        /// Directory to search in
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Lines shown per file
        #[arg(long)]
        cap: Option<usize>,

        /// Print matching lines as JSON
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Build the index and show statistics
    Stats {
        /// Directory to index
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if !cli.extensions.is_empty() {
        config.index.extensions = cli.extensions.clone();
    }

    match cli.command {
        Some(Commands::Search {
            query,
            path,
            cap,
            json,
            no_color,
        }) => {
            let snapshot = build(&path, &config, cli.quiet || json)?;
            let query = query.join(" ");
            let cap = cap.unwrap_or(config.snippet_cap);

            if json {
                let rows = snapshot.rows(&query, cap);
                output::print_json(&mut io::stdout().lock(), &rows)?;
            } else {
                let groups = snapshot.group(&query, cap);
                let mut out = output::stdout(config.color && !no_color);
                output::print_groups(&mut out, &groups, snapshot.store(), &query)?;
            }
        }
        Some(Commands::Stats { path, json }) => {
            let snapshot = build(&path, &config, cli.quiet || json)?;
            if json {
                print_stats_json(&mut io::stdout().lock(), &snapshot)?;
            } else {
                show_stats(&snapshot);
            }
        }
        None => run_interactive(cli.path, &config, cli.quiet)?,
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build an index, printing the summary to stderr unless quiet
fn build(root: &Path, config: &AppConfig, quiet: bool) -> Result<IndexSnapshot> {
    let snapshot = IndexBuilder::new(config.index.clone())
        .progress(!quiet)
        .build(root)
        .with_context(|| format!("Failed to index {}", root.display()))?;

    if !quiet {
        eprintln!("{}", build_summary(snapshot.stats()));
    }
    Ok(snapshot)
}

fn run_interactive(path: Option<PathBuf>, config: &AppConfig, quiet: bool) -> Result<()> {
    println!("Local Search Engine");
    println!("===================");

    let stdin = io::stdin();
    let root = match path {
        Some(path) => path,
        None => prompt_root(&mut stdin.lock())?,
    };

    println!("Scanning {}...", root.display());
    let shared = SharedIndex::new(build(&root, config, quiet)?);
    let mut out = output::stdout(config.color);

    loop {
        print!("\nSearch (or 'exit'): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let query = line.trim();
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            break;
        }

        if query == ":reload" {
            match shared.rebuild(&config.index) {
                Ok(stats) => println!("{}", build_summary(&stats)),
                Err(e) => eprintln!("Reload failed: {}", e),
            }
            continue;
        }

        let snapshot = shared.current();
        let groups = snapshot.group(query, config.snippet_cap);
        output::print_groups(&mut out, &groups, snapshot.store(), query)?;
    }

    Ok(())
}

/// Ask for the directory to scan; an empty answer takes the default
fn prompt_root(input: &mut impl BufRead) -> Result<PathBuf> {
    let default = default_scan_root();
    print!("Directory to scan [{}]: ", default.display());
    io::stdout().flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read directory")?;

    let answer = answer.trim();
    Ok(if answer.is_empty() {
        default
    } else {
        PathBuf::from(answer)
    })
}
