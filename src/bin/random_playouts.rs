//! Standalone seeded random self-play runner.
//!
//! Run with:
//! `cargo run --release --bin random_playouts`
//! `cargo run --release --bin random_playouts -- --games 50 --seed 7 --max-plies 200 --verbose`

use chess_rules::utils::random_playout::{play_random_games, PlayoutConfig};

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> Result<T, String> {
    match args.iter().position(|a| a == flag) {
        None => Ok(default),
        Some(i) => {
            let raw = args
                .get(i + 1)
                .ok_or_else(|| format!("{flag} expects a value"))?;
            raw.parse::<T>()
                .map_err(|_| format!("{flag}: invalid value {raw:?}"))
        }
    }
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let defaults = PlayoutConfig::default();

    let config = PlayoutConfig {
        games: parse_flag(&args, "--games", defaults.games)?,
        base_seed: parse_flag(&args, "--seed", defaults.base_seed)?,
        max_plies: parse_flag(&args, "--max-plies", defaults.max_plies)?,
        verbose: args.iter().any(|a| a == "--verbose" || a == "-v"),
    };

    let stats = play_random_games(&config).map_err(|e| e.to_string())?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
