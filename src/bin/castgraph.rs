//! Castgraph CLI — query a character-interaction dataset.
//!
//! Usage:
//!   castgraph [--data-dir dir] status
//!   castgraph interactions [--chapter key | --start n --end n --book b]
//!   castgraph graph [--start n] [--end n] [--book b] [--min-conn n] [--stats] [--annotate]

use castgraph::{annotate_nodes, CastEngine, DataPaths, GraphStats};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "castgraph",
    version,
    about = "Character-relationship graphs from chapter interaction records"
)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DataArgs {
    /// Directory holding the snapshot files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Alias snapshot (overrides the data directory)
    #[arg(long, global = true)]
    aliases: Option<PathBuf>,
    /// Combined per-chapter snapshot
    #[arg(long, global = true)]
    combined: Option<PathBuf>,
    /// Chapter-to-book mapping
    #[arg(long, global = true)]
    chapter_to_book: Option<PathBuf>,
    /// Grouped characters snapshot
    #[arg(long, global = true)]
    groups: Option<PathBuf>,
}

#[derive(Args)]
struct Selection {
    /// First chapter number to include
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i64>,
    /// Last chapter number to include
    #[arg(long, allow_negative_numbers = true)]
    end: Option<i64>,
    /// Book label to restrict to ("all" for every book)
    #[arg(long)]
    book: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what was loaded
    Status,
    /// Print the alias entries
    Aliases,
    /// Print the grouped characters
    Groups,
    /// Print interaction records by chapter
    Interactions {
        /// Exact chapter key (takes precedence over the range filters)
        #[arg(long)]
        chapter: Option<String>,
        #[command(flatten)]
        selection: Selection,
    },
    /// Build the character graph for a chapter selection
    Graph {
        #[command(flatten)]
        selection: Selection,
        /// Minimum interaction count for a link to be kept
        #[arg(long, alias = "minConn", default_value_t = 1, allow_negative_numbers = true)]
        min_conn: i64,
        /// Include degree and density statistics
        #[arg(long)]
        stats: bool,
        /// Include per-node connections, group and community
        #[arg(long)]
        annotate: bool,
    },
}

/// Get the default data directory (~/.local/share/castgraph)
fn default_data_dir() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    data_dir.join("castgraph")
}

fn data_paths(args: DataArgs) -> DataPaths {
    let mut paths = DataPaths::in_dir(args.data_dir.unwrap_or_else(default_data_dir));
    if let Some(path) = args.aliases {
        paths = paths.with_aliases(path);
    }
    if let Some(path) = args.combined {
        paths = paths.with_combined(path);
    }
    if let Some(path) = args.chapter_to_book {
        paths = paths.with_chapter_to_book(path);
    }
    if let Some(path) = args.groups {
        paths = paths.with_grouped(path);
    }
    paths
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_groups(engine: &CastEngine) -> i32 {
    let groups = engine.character_groups();
    if groups.is_empty() {
        eprintln!("Error: character groups not loaded");
        return 1;
    }
    print_json(groups.raw())
}

fn cmd_interactions(engine: &CastEngine, chapter: Option<String>, selection: Selection) -> i32 {
    let keys = match chapter.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()) {
        Some(chapter) => vec![chapter],
        None => engine.select_chapter_keys(
            selection.start,
            selection.end,
            selection.book.as_deref(),
        ),
    };
    print_json(&engine.interactions_for_keys(&keys))
}

fn cmd_graph(
    engine: &CastEngine,
    selection: Selection,
    min_conn: i64,
    stats: bool,
    annotate: bool,
) -> i32 {
    let response = engine.graph_query(
        selection.start,
        selection.end,
        selection.book.as_deref(),
        min_conn,
    );
    let mut out = json!({ "graph": &response.graph, "meta": &response.meta });
    if stats {
        out["stats"] = json!(GraphStats::compute(&response.graph));
    }
    if annotate {
        out["nodes"] = json!(annotate_nodes(&response.graph, engine.character_groups()));
    }
    print_json(&out)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let engine = match CastEngine::load(&data_paths(cli.data)) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Status => print_json(&engine.summary()),
        Commands::Aliases => print_json(&json!({ "aliases_full": engine.alias_entries() })),
        Commands::Groups => cmd_groups(&engine),
        Commands::Interactions { chapter, selection } => {
            cmd_interactions(&engine, chapter, selection)
        }
        Commands::Graph {
            selection,
            min_conn,
            stats,
            annotate,
        } => cmd_graph(&engine, selection, min_conn, stats, annotate),
    };
    std::process::exit(code);
}
