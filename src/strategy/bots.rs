use crate::estimator::estimate;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::fmt;
use std::str::FromStr;

use super::{BetStrategy, Decision, StrategyError, TableView};

/// Which bet strategy automated players get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum BotKind {
    AlwaysCall,
    Random,
    #[default]
    Estimator,
}

impl BotKind {
    /// Build a fresh strategy; `seed` makes random choices reproducible.
    pub fn build(self, seed: Option<u64>) -> Box<dyn BetStrategy> {
        match self {
            BotKind::AlwaysCall => Box::new(AlwaysCall),
            BotKind::Random => Box::new(RandomBets::new(seed)),
            BotKind::Estimator => Box::new(EstimatorDriven::new(EstimatorProfile::default())),
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BotKind::AlwaysCall => "call",
            BotKind::Random => "random",
            BotKind::Estimator => "estimator",
        };
        f.write_str(s)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown bot kind '{0}' (expected call, random or estimator)")]
pub struct ParseBotKindError(String);

impl FromStr for BotKind {
    type Err = ParseBotKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "always-call" => Ok(BotKind::AlwaysCall),
            "random" => Ok(BotKind::Random),
            "estimator" | "odds" => Ok(BotKind::Estimator),
            other => Err(ParseBotKindError(other.to_string())),
        }
    }
}

#[derive(Debug)]
struct BotState {
    rng: StdRng,
}

impl BotState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self { rng }
    }
}

/// Calls whatever is owed, every time.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysCall;

impl BetStrategy for AlwaysCall {
    fn decide(&mut self, view: &TableView) -> Result<Decision, StrategyError> {
        view.known_cards()?;
        Ok(Decision::call(view.to_call()))
    }

    fn name(&self) -> &'static str {
        "always-call"
    }
}

/// Coin-flip play: occasional folds, otherwise a random passive or aggressive
/// move sized at one to three big blinds.
#[derive(Debug)]
pub struct RandomBets {
    state: BotState,
    fold_chance: f64,
}

impl RandomBets {
    pub const DEFAULT_FOLD_CHANCE: f64 = 0.08;

    pub fn new(seed: Option<u64>) -> Self {
        Self { state: BotState::new(seed), fold_chance: Self::DEFAULT_FOLD_CHANCE }
    }

    pub fn with_fold_chance(mut self, chance: f64) -> Self {
        self.fold_chance = chance.clamp(0.0, 1.0);
        self
    }
}

impl BetStrategy for RandomBets {
    fn decide(&mut self, view: &TableView) -> Result<Decision, StrategyError> {
        view.known_cards()?;
        let rng = &mut self.state.rng;
        if rng.random::<f64>() < self.fold_chance {
            return Ok(Decision::FOLD);
        }
        let amount = view.big_blind.max(1) * rng.random_range(1..=3u64);
        let aggressive = rng.random_bool(0.5);
        let decision = match (view.current_bet == 0, aggressive) {
            (true, true) => Decision::bet(amount),
            (true, false) => Decision::CHECK,
            (false, true) => Decision::raise(amount),
            (false, false) => Decision::call(view.to_call()),
        };
        Ok(decision)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Tuning for [`EstimatorDriven`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct EstimatorProfile {
    /// Largest tolerated gap between the opponents' and our average hand value.
    pub value_threshold: f64,
    /// Completions to classify per estimate; 0 enumerates everything.
    pub cutoff: u64,
}

impl EstimatorProfile {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.value_threshold = threshold;
        self
    }

    pub fn with_cutoff(mut self, cutoff: u64) -> Self {
        self.cutoff = cutoff;
        self
    }
}

impl Default for EstimatorProfile {
    fn default() -> Self {
        Self { value_threshold: 0.5, cutoff: 20_000 }
    }
}

/// Compares our expected hand value against what the board alone gives an
/// opponent, and weighs the result against pot odds.
#[derive(Debug, Clone)]
pub struct EstimatorDriven {
    profile: EstimatorProfile,
}

impl EstimatorDriven {
    pub fn new(profile: EstimatorProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &EstimatorProfile {
        &self.profile
    }
}

impl BetStrategy for EstimatorDriven {
    fn decide(&mut self, view: &TableView) -> Result<Decision, StrategyError> {
        let known = view.known_cards()?;
        let own = estimate(&known, self.profile.cutoff)?;
        let opponent = estimate(&view.community, self.profile.cutoff)?;
        let gap = opponent.average_value() - own.average_value();
        let threshold = self.profile.value_threshold;
        let odds = view.pot_odds();
        let min_raise = view.big_blind;

        if odds.auto_profit() {
            return Ok(view.aggress(min_raise));
        }

        if view.to_call() == 0 {
            if gap > threshold {
                return Ok(Decision::CHECK);
            }
            return Ok(view.aggress(min_raise));
        }

        let (_, likeliest) = own.most_likely();
        let clears_bar = likeliest >= odds.pot_equity();
        if gap <= threshold / 2.0 && clears_bar {
            Ok(Decision::raise(min_raise))
        } else if gap <= threshold * 1.5 && clears_bar {
            Ok(Decision::call(view.to_call()))
        } else {
            Ok(Decision::FOLD)
        }
    }

    fn name(&self) -> &'static str {
        "estimator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::strategy::BetAction;

    fn view(pocket: &str, board: &str) -> TableView {
        TableView {
            small_blind: 5,
            big_blind: 10,
            stack: 800,
            pocket: Some(pocket.parse().unwrap()),
            community: parse_cards(board).unwrap(),
            ..Default::default()
        }
    }

    #[test]
    fn always_call_matches_the_bet() {
        let mut v = view("As Kd", "");
        v.current_bet = 10;
        v.own_bet = 5;
        assert_eq!(AlwaysCall.decide(&v).unwrap(), Decision::call(5));
    }

    #[test]
    fn strategies_require_pocket_cards() {
        let v = TableView { big_blind: 10, ..Default::default() };
        assert_eq!(AlwaysCall.decide(&v), Err(StrategyError::MissingPocket));
        assert!(RandomBets::new(Some(1)).decide(&v).is_err());
        assert!(EstimatorDriven::new(EstimatorProfile::default()).decide(&v).is_err());
    }

    #[test]
    fn random_bets_are_seeded_and_sized() {
        let v = view("As Kd", "2c 7h 9s");
        let mut a = RandomBets::new(Some(7));
        let mut b = RandomBets::new(Some(7));
        for _ in 0..50 {
            let da = a.decide(&v).unwrap();
            assert_eq!(da, b.decide(&v).unwrap());
            match da.action {
                BetAction::Bet => assert!([10, 20, 30].contains(&da.amount)),
                BetAction::Fold | BetAction::Check => assert_eq!(da.amount, 0),
                other => panic!("no outstanding bet, got {other}"),
            }
        }
    }

    #[test]
    fn random_bets_fold_chance_extremes() {
        let v = view("As Kd", "");
        let mut always = RandomBets::new(Some(3)).with_fold_chance(1.0);
        assert_eq!(always.decide(&v).unwrap(), Decision::FOLD);
        let mut never = RandomBets::new(Some(3)).with_fold_chance(0.0);
        for _ in 0..20 {
            assert_ne!(never.decide(&v).unwrap().action, BetAction::Fold);
        }
    }

    #[test]
    fn estimator_bets_a_monster_when_checked_to() {
        let v = view("As Ad", "Ac Ah Kd 2c 3s");
        let mut s = EstimatorDriven::new(EstimatorProfile::default().with_cutoff(0));
        assert_eq!(s.decide(&v).unwrap(), Decision::bet(10));
    }

    #[test]
    fn estimator_raises_a_monster_facing_a_bet() {
        let mut v = view("As Ad", "Ac Ah Kd 2c 3s");
        v.current_bet = 20;
        v.pot = 40;
        let mut s = EstimatorDriven::new(EstimatorProfile::default().with_cutoff(0));
        assert_eq!(s.decide(&v).unwrap(), Decision::raise(10));
    }

    #[test]
    fn estimator_folds_air_against_a_strong_board() {
        // Board is already four to a straight flush for anyone holding 9h.
        let mut v = view("2c 3d", "Th Jh Qh Kh 7s");
        v.current_bet = 50;
        v.pot = 60;
        let mut s = EstimatorDriven::new(EstimatorProfile::default().with_cutoff(0));
        assert_eq!(s.decide(&v).unwrap(), Decision::FOLD);
    }

    #[test]
    fn estimator_takes_auto_profit_against_folders() {
        let mut v = view("2c 3d", "Th Jh Qh Kh 7s");
        v.current_bet = 10;
        v.pot = 100;
        v.max_opponent_folds = 9;
        v.hands_played = 10;
        let mut s = EstimatorDriven::new(EstimatorProfile::default().with_cutoff(0));
        assert_eq!(s.decide(&v).unwrap(), Decision::raise(10));
    }

    #[test]
    fn bot_kind_parses_and_builds() {
        assert_eq!("random".parse::<BotKind>().unwrap(), BotKind::Random);
        assert_eq!("CALL".parse::<BotKind>().unwrap(), BotKind::AlwaysCall);
        assert!("shark".parse::<BotKind>().is_err());
        assert_eq!(BotKind::Estimator.build(None).name(), "estimator");
        assert_eq!(BotKind::Random.to_string(), "random");
    }
}
