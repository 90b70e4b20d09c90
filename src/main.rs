use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use blogsearch::prelude::*;

#[derive(Parser)]
#[command(name = "blogsearch", version, about = "Search, suggest and highlight over blog posts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank posts against a query and print the results as JSON
    Search(SearchArgs),
    /// Print autocomplete suggestions for a partial query
    Suggest(SuggestArgs),
    /// Print the match spans of a query within some text
    Highlight(HighlightArgs),
}

#[derive(Args)]
struct Source {
    /// JSON file holding an array of posts
    #[arg(long, short = 'p')]
    posts: PathBuf,
    /// TOML file with weights and limits (defaults plus env overrides otherwise)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct SearchArgs {
    #[command(flatten)]
    source: Source,
    /// The search query
    query: String,
    /// Keep results carrying at least one of these tags (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// Earliest publication date, YYYY-MM-DD
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,
    /// Latest publication date, YYYY-MM-DD
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,
    /// Minimum reading time in minutes
    #[arg(long, requires = "max_read")]
    min_read: Option<u32>,
    /// Maximum reading time in minutes
    #[arg(long, requires = "min_read")]
    max_read: Option<u32>,
    /// Return at most this many results
    #[arg(long, short = 'n')]
    limit: Option<usize>,
}

#[derive(Args)]
struct SuggestArgs {
    #[command(flatten)]
    source: Source,
    /// The partial query
    query: String,
    /// Override the configured suggestion limit
    #[arg(long, short = 'n')]
    limit: Option<usize>,
}

#[derive(Args)]
struct HighlightArgs {
    /// Text to scan
    text: String,
    /// Literal query to find
    query: String,
    /// Print the text with <mark> tags instead of JSON spans
    #[arg(long)]
    html: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Search(args) => run_search(args),
        Command::Suggest(args) => run_suggest(args),
        Command::Highlight(args) => run_highlight(args),
    }
}

fn run_search(args: SearchArgs) -> anyhow::Result<()> {
    let (engine, posts) = open(&args.source)?;

    let mut filters = SearchFilters::new();
    if !args.tags.is_empty() {
        filters = filters.tags(args.tags);
    }
    if let (Some(from), Some(to)) = (args.from, args.to) {
        filters = filters.date_range(from, to);
    }
    if let (Some(min), Some(max)) = (args.min_read, args.max_read) {
        filters = filters.read_time_range(min, max);
    }

    let request = SearchRequest {
        query: args.query,
        filters,
        limit: args.limit,
    };
    let results = engine.execute(&posts, &request);
    tracing::info!("{} results for {:?}", results.len(), request.query);
    print_json(&results)
}

fn run_suggest(args: SuggestArgs) -> anyhow::Result<()> {
    let (engine, posts) = open(&args.source)?;
    let suggestions = match args.limit {
        Some(limit) => suggest(&posts, &args.query, limit),
        None => engine.suggest(&posts, &args.query),
    };
    print_json(&suggestions)
}

fn run_highlight(args: HighlightArgs) -> anyhow::Result<()> {
    let highlighted = highlight(&args.text, &args.query);
    if args.html {
        println!("{}", highlighted.to_html());
        Ok(())
    } else {
        print_json(&highlighted)
    }
}

fn open(source: &Source) -> anyhow::Result<(BlogSearchEngine, Vec<Post>)> {
    let config = load_config(source.config.as_deref())?;
    let store = InMemoryPostStore::load(&source.posts)
        .with_context(|| format!("loading posts from {}", source.posts.display()))?;
    // Input order of the search is the listing order: newest first.
    Ok((BlogSearchEngine::from_config(&config), store.all()))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SearchConfig> {
    match path {
        Some(path) => {
            let mut config = SearchConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            config.apply_env(|key| std::env::var(key).ok());
            Ok(config)
        }
        None => Ok(SearchConfig::from_env()),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
