use anyhow::Result;
use dotenvy::dotenv;
use rand::SeedableRng;
use rand_seeder::Seeder;
use std::env;
use tracing::info;

use scramble_search::game::BoardGenerator;

fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Same seed, same board; defaults to one board per day
    let seed_string = env::var("BOARD_SEED")
        .unwrap_or_else(|_| chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string());
    info!("Generating board for seed '{}'", seed_string);

    let seed: [u8; 32] = Seeder::from(seed_string.as_str()).make_seed();
    let mut rng = rand::rngs::StdRng::from_seed(seed);

    let board = BoardGenerator::new().generate_board(&mut rng);
    print!("{}", board);

    Ok(())
}
