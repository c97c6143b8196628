//! Yatra Auto-link CLI - Rewrite article HTML with glossary links
//!
//! This CLI tool loads glossary terms from a JSON seed file and rewrites
//! the `<article>` region of an HTML page, linking term mentions to their
//! glossary definitions.
//!
//! Usage:
//!     yatra-autolink page.html
//!     yatra-autolink --seed seeds/sample-content.json page.html
//!     yatra-autolink --stats --output linked.html page.html
//!     cat page.html | yatra-autolink -

use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use yatra_core::cache::NoopTermCache;
use yatra_core::glossary::{GlossaryAutoLinker, TermRegistry, GLOSSARY_LINK_CLASS};
use yatra_core::store::InMemoryStore;

#[derive(Parser, Debug)]
#[command(name = "yatra-autolink")]
#[command(about = "Rewrite article HTML with glossary term links")]
#[command(version)]
struct Args {
    /// HTML file to rewrite ("-" reads from stdin)
    input: PathBuf,

    /// Path to seed JSON file (default: looks for sample-content.json)
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Write the rewritten HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print link statistics to stderr after rewriting
    #[arg(long)]
    stats: bool,

    /// Verbose output (show debug info)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    // Find and load the content seed
    let store = match load_store(&args.seed, args.verbose) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading seed: {}", e);
            std::process::exit(1);
        }
    };

    let term_count = match store.counts() {
        Ok(c) => c.terms,
        Err(e) => {
            eprintln!("Error reading store: {}", e);
            std::process::exit(1);
        }
    };

    let html = match read_input(&args.input) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        }
    };

    if args.verbose {
        eprintln!("Terms in seed: {}", term_count);
        eprintln!("Input: {} bytes", html.len());
        eprintln!();
    }

    // One-shot run, so skip caching entirely
    let registry = TermRegistry::new(Arc::new(store), Arc::new(NoopTermCache));
    let linker = GlossaryAutoLinker::new(registry);

    let linked = linker.auto_link(&html);

    if args.stats {
        output_stats(&html, &linked, term_count);
    }

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &linked) {
                eprintln!("Error writing {}: {}", path.display(), e);
                std::process::exit(1);
            }
            if args.verbose {
                eprintln!("Wrote {} bytes to {}", linked.len(), path.display());
            }
        }
        None => print!("{}", linked),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "yatra_core=debug" } else { "yatra_core=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_store(path: &Option<PathBuf>, verbose: bool) -> Result<InMemoryStore, String> {
    // If path provided, use it
    if let Some(p) = path {
        if verbose {
            eprintln!("Loading seed from: {}", p.display());
        }
        return InMemoryStore::from_seed_file(p).map_err(|e| e.to_string());
    }

    // Try default locations
    let default_paths = [
        PathBuf::from("seeds/sample-content.json"),
        PathBuf::from("../seeds/sample-content.json"),
        PathBuf::from("sample-content.json"),
    ];

    for p in &default_paths {
        if p.exists() {
            if verbose {
                eprintln!("Found seed at: {}", p.display());
            }
            return InMemoryStore::from_seed_file(p).map_err(|e| e.to_string());
        }
    }

    Err("No seed found. Specify with --seed or place sample-content.json in seeds/".to_string())
}

fn read_input(path: &PathBuf) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
}

fn output_stats(html: &str, linked: &str, term_count: usize) {
    #[derive(serde::Serialize)]
    struct Stats {
        terms_loaded: usize,
        links_inserted: usize,
        input_bytes: usize,
        output_bytes: usize,
    }

    let before = html.matches(GLOSSARY_LINK_CLASS).count();
    let after = linked.matches(GLOSSARY_LINK_CLASS).count();

    let stats = Stats {
        terms_loaded: term_count,
        links_inserted: after - before,
        input_bytes: html.len(),
        output_bytes: linked.len(),
    };

    match serde_json::to_string_pretty(&stats) {
        Ok(json) => eprintln!("{}", json),
        Err(e) => eprintln!("Error serializing stats: {}", e),
    }
}
