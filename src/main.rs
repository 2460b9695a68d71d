use anyhow::Result;
use clap::Parser;
use futures::future::join_all;
use sorthash::{Config, Hasher, SortableHash};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Print results ordered by hash value instead of input order,
    /// clustering near-duplicate images together
    #[arg(long)]
    sort: bool,

    /// Image files to hash
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::load_from_file(&args.config) {
        Ok(c) => c,
        Err(e) => {
            info!(
                "Failed to load config from {:?}: {}. Using defaults.",
                args.config, e
            );
            Config::default()
        }
    };

    let hasher = Arc::new(Hasher::new(config.hash)?);
    info!(
        "Hashing {} files ({}x{} grid, {} hex digits per hash)",
        args.files.len(),
        hasher.config().grid_size,
        hasher.config().grid_size,
        hasher.config().hex_len(),
    );

    // Each image is an independent pure computation over the shared
    // read-only hasher, so one blocking task per file is all the
    // coordination needed.
    let tasks = args.files.into_iter().map(|path| {
        let hasher = Arc::clone(&hasher);
        tokio::task::spawn_blocking(move || {
            let result = hasher.hash_path(&path);
            (path, result)
        })
    });

    let mut results: Vec<(PathBuf, SortableHash)> = Vec::new();
    let mut failures = 0usize;
    for joined in join_all(tasks).await {
        let (path, result) = joined?;
        match result {
            Ok(hash) => results.push((path, hash)),
            Err(e) => {
                error!("Skipping {:?}: {}", path, e);
                failures += 1;
            }
        }
    }

    if args.sort {
        results.sort_by(|a, b| a.1.cmp(&b.1));
    }
    for (path, hash) in &results {
        println!("{}  {}", hash, path.display());
    }

    if failures > 0 {
        error!("{} of {} files could not be hashed", failures, failures + results.len());
    }
    Ok(())
}
