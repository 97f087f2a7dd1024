//! holdem-rs: Texas Hold'em simulation core
//!
//! Goals:
//! - Deterministic seven-card evaluation with a total ordering over hands
//! - A turn-based betting state machine driven by human or automated seats
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate seven cards
//! ```
//! use holdem_rs::cards::parse_cards;
//! use holdem_rs::evaluator::{evaluate, HandCategory};
//!
//! let cards = parse_cards("Ac Ad Kc Kd Kh 2s 3s").unwrap();
//! let hand = evaluate(&cards).unwrap();
//! assert_eq!(hand.category(), HandCategory::FullHouse);
//! ```
//!
//! ## Quick start: a bot-only hand
//! ```
//! use holdem_rs::config::GameConfig;
//! use holdem_rs::game::Game;
//! use holdem_rs::strategy::BotKind;
//!
//! let cfg = GameConfig::default().with_seed(7).with_bot_kind(BotKind::AlwaysCall);
//! let mut game = Game::seated(cfg, 3, 3).unwrap();
//! let winners = game.play_hand().unwrap();
//! assert!(!winners.is_empty());
//! assert_eq!(game.chip_count(), 2400);
//! ```
//!
//! ## Simulator
//! ```sh
//! cargo run --bin holdem-sim -- --players 6 --hands 50
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod odds;
pub mod player;
pub mod strategy;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
