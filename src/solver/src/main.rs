use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::io::{self, Read};
use tracing::info;

use scramble_search::config::SearchConfig;
use scramble_search::game::{Board, SearchEngine};
use scramble_search::output;

fn read_board(config: &SearchConfig) -> Result<String> {
    match &config.board_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read board from {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read board from stdin")?;
            Ok(input)
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = SearchConfig::from_env().context("invalid configuration")?;
    info!(
        "Searching words of {} to {} letters",
        config.limits.min(),
        config.limits.max()
    );

    let board = read_board(&config)?
        .parse::<Board>()
        .context("invalid board")?;
    info!("Board:\n{}", board);

    let engine = SearchEngine::from_wordlist(&config.wordlist_path, config.limits)?
        .with_prefix_pruning(config.prune_prefixes);

    let result = engine.find_words(&board);

    let stdout = io::stdout();
    output::write_results(
        &mut stdout.lock(),
        &result.words,
        config.output_format,
        config.show_scores,
    )?;

    Ok(())
}
