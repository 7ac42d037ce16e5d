//! Seeded random self-play for exercising the rules engine.
//!
//! Each game starts from the initial position and plays uniformly random
//! legal moves through `ChessGame`, so every ply passes the same validation a
//! human move would. Games end on checkmate, stalemate or the ply cap.

use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::errors::ChessResult;
use crate::game_state::chess_game::ChessGame;
use crate::game_state::chess_types::{Color, GameState, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { winner: Color },
    Stalemate,
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub games: u16,
    pub base_seed: u64,
    pub max_plies: u16,
    pub verbose: bool,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            max_plies: 300,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PlayoutStats {
    pub games: u16,
    pub white_wins: u16,
    pub black_wins: u16,
    pub stalemates: u16,
    pub unfinished: u16,
    pub total_plies: u64,
    pub outcomes: Vec<PlayoutOutcome>,
}

impl PlayoutStats {
    fn record(&mut self, result: &PlayoutResult) {
        match result.outcome {
            PlayoutOutcome::Checkmate {
                winner: Color::White,
            } => self.white_wins += 1,
            PlayoutOutcome::Checkmate {
                winner: Color::Black,
            } => self.black_wins += 1,
            PlayoutOutcome::Stalemate => self.stalemates += 1,
            PlayoutOutcome::MaxPlies => self.unfinished += 1,
        }
        self.total_plies += result.final_state.ply_count() as u64;
        self.outcomes.push(result.outcome);
    }

    pub fn avg_plies(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / f64::from(self.games)
        }
    }

    pub fn report(&self) -> String {
        format!(
            "games={} white_wins={} black_wins={} stalemates={} unfinished={} avg_plies={:.1}",
            self.games,
            self.white_wins,
            self.black_wins,
            self.stalemates,
            self.unfinished,
            self.avg_plies()
        )
    }
}

/// Play one seeded random game of at most `max_plies` plies.
pub fn play_random_game(seed: u64, max_plies: u16) -> ChessResult<PlayoutResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = ChessGame::new();
    let mut played_moves = Vec::<String>::new();

    for _ in 0..max_plies {
        let moves = game.all_legal_moves();
        let Some(&(from, to)) = moves.choose(&mut rng) else {
            break;
        };
        let record = game.try_move(from, to)?;
        played_moves.push(record.notation.clone());
        if game.status().is_terminal() {
            break;
        }
    }

    let outcome = match game.status() {
        GameStatus::Checkmate => PlayoutOutcome::Checkmate {
            winner: game.current_player().opposite(),
        },
        GameStatus::Stalemate => PlayoutOutcome::Stalemate,
        _ => PlayoutOutcome::MaxPlies,
    };

    Ok(PlayoutResult {
        outcome,
        final_state: game.snapshot(),
        played_moves,
    })
}

/// Play `config.games` games with consecutive seeds and aggregate outcomes.
pub fn play_random_games(config: &PlayoutConfig) -> ChessResult<PlayoutStats> {
    let mut stats = PlayoutStats {
        games: config.games,
        ..PlayoutStats::default()
    };

    for i in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let result = play_random_game(seed, config.max_plies)?;
        if config.verbose {
            println!(
                "[playout] game {}/{} seed={} outcome={:?} plies={}",
                i + 1,
                config.games,
                seed,
                result.outcome,
                result.played_moves.len()
            );
        }
        stats.record(&result);
    }

    Ok(stats)
}
