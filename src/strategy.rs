//! Strategies: pluggable betting and hand-building behaviour bound to a player.
//!
//! A [`BetStrategy`] turns a read-only [`TableView`] into a [`Decision`]; the
//! game applies it. A [`HandStrategy`] picks the five cards a player shows at
//! showdown. Both are held per player as boxed trait objects.

use crate::cards::Card;
use crate::error::ErrorKind;
use crate::estimator::EstimateError;
use crate::evaluator::{evaluate, evaluate_high_card, EvalError, EvaluatedHand};
use crate::hand::PocketCards;
use crate::odds::PotOdds;
use core::fmt;

mod bots;

pub use bots::{AlwaysCall, BotKind, EstimatorDriven, EstimatorProfile, RandomBets};

/// The five betting moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetAction {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl fmt::Display for BetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BetAction::Fold => "fold",
            BetAction::Check => "check",
            BetAction::Call => "call",
            BetAction::Bet => "bet",
            BetAction::Raise => "raise",
        };
        f.write_str(s)
    }
}

/// An action plus its chip amount.
///
/// `amount` is the chips to call for `Call`, the bet size for `Bet`, the
/// increment over the current bet for `Raise` and 0 for `Fold`/`Check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: BetAction,
    pub amount: u64,
}

impl Decision {
    pub const FOLD: Decision = Decision { action: BetAction::Fold, amount: 0 };
    pub const CHECK: Decision = Decision { action: BetAction::Check, amount: 0 };

    pub fn call(amount: u64) -> Self {
        Self { action: BetAction::Call, amount }
    }

    pub fn bet(amount: u64) -> Self {
        Self { action: BetAction::Bet, amount }
    }

    pub fn raise(amount: u64) -> Self {
        Self { action: BetAction::Raise, amount }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            BetAction::Fold | BetAction::Check => write!(f, "{}", self.action),
            _ => write!(f, "{} {}", self.action, self.amount),
        }
    }
}

/// Snapshot of everything a strategy may look at for one decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub small_blind: u64,
    pub big_blind: u64,
    /// Highest bet on the live street.
    pub current_bet: u64,
    /// Chips this player already has in on the live street.
    pub own_bet: u64,
    pub stack: u64,
    /// Completed streets plus the live street.
    pub pot: u64,
    pub pocket: Option<PocketCards>,
    pub community: Vec<Card>,
    pub max_opponent_folds: u32,
    pub hands_played: u32,
}

impl TableView {
    /// Chips needed to match the current bet.
    pub fn to_call(&self) -> u64 {
        self.current_bet.saturating_sub(self.own_bet)
    }

    pub fn pot_odds(&self) -> PotOdds {
        PotOdds {
            pot: self.pot,
            current_bet: self.to_call(),
            max_opponent_folds: self.max_opponent_folds,
            hands_played: self.hands_played,
        }
    }

    /// Pocket plus community, checked against the shared preconditions.
    pub fn known_cards(&self) -> Result<Vec<Card>, StrategyError> {
        let pocket = self.pocket.ok_or(StrategyError::MissingPocket)?;
        if self.community.len() > 5 {
            return Err(StrategyError::TooManyCommunityCards(self.community.len()));
        }
        let mut cards = Vec::with_capacity(7);
        cards.extend_from_slice(&pocket.as_array());
        cards.extend_from_slice(&self.community);
        Ok(cards)
    }

    /// Chips in for an aggressive move of `amount`: opens with a bet when the
    /// street is unopened, otherwise raises.
    pub(crate) fn aggress(&self, amount: u64) -> Decision {
        if self.current_bet == 0 {
            Decision::bet(amount)
        } else {
            Decision::raise(amount)
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StrategyError {
    #[error("cannot bet without pocket cards")]
    MissingPocket,
    #[error("too many community cards: {0}")]
    TooManyCommunityCards(usize),
    #[error("estimate failed: {0}")]
    Estimate(#[from] EstimateError),
}

impl StrategyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StrategyError::MissingPocket => ErrorKind::InvalidState,
            StrategyError::TooManyCommunityCards(_) | StrategyError::Estimate(_) => {
                ErrorKind::InvalidInput
            }
        }
    }
}

/// Chooses a betting move from a table snapshot.
pub trait BetStrategy: fmt::Debug {
    fn decide(&mut self, view: &TableView) -> Result<Decision, StrategyError>;

    fn name(&self) -> &'static str;
}

/// Chooses the five cards a player shows at showdown.
pub trait HandStrategy: fmt::Debug {
    /// `cards` is pocket plus a complete board: exactly seven distinct cards.
    fn evaluate(&self, cards: &[Card]) -> Result<EvaluatedHand, EvalError>;

    fn name(&self) -> &'static str;
}

/// Plays the strongest hand the seven cards allow.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestHand;

impl HandStrategy for BestHand {
    fn evaluate(&self, cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
        evaluate(cards)
    }

    fn name(&self) -> &'static str {
        "best"
    }
}

/// Always shows the five highest cards as a High Card hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorstHand;

impl HandStrategy for WorstHand {
    fn evaluate(&self, cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
        evaluate_high_card(cards)
    }

    fn name(&self) -> &'static str {
        "worst"
    }
}
