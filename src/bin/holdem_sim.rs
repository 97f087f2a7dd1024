use anyhow::Context;
use clap::Parser;
use holdem_rs::config::GameConfig;
use holdem_rs::game::Game;
use holdem_rs::strategy::BotKind;
use log::info;

/// Run a bot-only Texas Hold'em match and report the standings.
#[derive(Debug, Parser)]
struct Cli {
    /// Number of seats at the table.
    #[clap(long, short, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=22))]
    players: u8,
    /// Maximum number of hands to play.
    #[clap(long, short = 'n', default_value_t = 20)]
    hands: u32,
    /// Chips each seat starts with.
    #[clap(long, default_value_t = 800)]
    stack: u64,
    /// Betting strategy for every seat: call, random or estimator.
    #[clap(long, short, default_value_t = BotKind::default())]
    bot: BotKind,
    /// Seed for shuffles and bot randomness.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::default().with_stack(cli.stack).with_bot_kind(cli.bot);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let seats = cli.players as usize;
    let mut game = Game::seated(config, seats, seats).context("failed to seat the table")?;

    for _ in 0..cli.hands {
        let funded = game.players().iter().filter(|p| p.stack() > 0).count();
        if funded < 2 {
            break;
        }
        let winners = game
            .play_hand()
            .with_context(|| format!("hand {} failed", game.hands_played()))?;
        let names: Vec<&str> = winners
            .iter()
            .filter_map(|&i| game.player(i).map(|p| p.name()))
            .collect();
        info!("hand {} won by {}", game.hands_played(), names.join(", "));
    }

    println!("After {} hands:", game.hands_played());
    let mut standings: Vec<_> = game.players().iter().collect();
    standings.sort_by(|a, b| b.stack().cmp(&a.stack()));
    for p in standings {
        println!("  {:<8} {:>6} chips  {:>3} folds", p.name(), p.stack(), p.fold_count());
    }
    Ok(())
}
