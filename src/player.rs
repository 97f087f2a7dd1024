use crate::cards::Card;
use crate::error::ErrorKind;
use crate::evaluator::{EvalError, EvaluatedHand};
use crate::hand::{combine, HandError, PocketCards};
use crate::strategy::{BestHand, BetStrategy, Decision, HandStrategy, StrategyError, TableView};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerError {
    #[error("player already holds pocket cards")]
    PocketAlreadyHeld,
    #[error("player holds no pocket cards")]
    NoPocket,
    #[error("already committed {committed}, above the call target {target}")]
    CallBelowCommitted { committed: u64, target: u64 },
    #[error("player is not automated")]
    NotAutomated,
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Hand(#[from] HandError),
}

impl PlayerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlayerError::PocketAlreadyHeld
            | PlayerError::NoPocket
            | PlayerError::CallBelowCommitted { .. }
            | PlayerError::NotAutomated => ErrorKind::InvalidState,
            PlayerError::Strategy(e) => e.kind(),
            PlayerError::Eval(e) => e.kind(),
            PlayerError::Hand(e) => e.kind(),
        }
    }
}

/// A seat's occupant: chips, cards and the strategies that act for it.
///
/// Every chip movement keeps `stack + current_bet` constant; requests larger
/// than the stack become all-ins.
///
/// ```
/// use holdem_rs::player::Player;
///
/// let mut p = Player::new("player 1", 15);
/// assert_eq!(p.bet(50), 15);
/// assert_eq!(p.stack(), 0);
/// assert_eq!(p.current_bet(), 15);
/// ```
#[derive(Debug)]
pub struct Player {
    name: String,
    stack: u64,
    pocket: Option<PocketCards>,
    current_bet: u64,
    hand_strategy: Box<dyn HandStrategy>,
    bet_strategy: Option<Box<dyn BetStrategy>>,
    fold_count: u32,
}

impl Player {
    /// A human-controlled player that shows its best hand.
    pub fn new(name: impl Into<String>, stack: u64) -> Self {
        Self {
            name: name.into(),
            stack,
            pocket: None,
            current_bet: 0,
            hand_strategy: Box::new(BestHand),
            bet_strategy: None,
            fold_count: 0,
        }
    }

    /// An automated player driven by `strategy`.
    pub fn automated(name: impl Into<String>, stack: u64, strategy: Box<dyn BetStrategy>) -> Self {
        Self { bet_strategy: Some(strategy), ..Self::new(name, stack) }
    }

    pub fn with_hand_strategy(mut self, strategy: Box<dyn HandStrategy>) -> Self {
        self.hand_strategy = strategy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stack(&self) -> u64 {
        self.stack
    }

    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    pub fn pocket(&self) -> Option<PocketCards> {
        self.pocket
    }

    pub fn is_automated(&self) -> bool {
        self.bet_strategy.is_some()
    }

    /// Lifetime number of folds.
    pub fn fold_count(&self) -> u32 {
        self.fold_count
    }

    /// Dealt in with nothing left behind.
    pub fn is_all_in(&self) -> bool {
        self.pocket.is_some() && self.stack == 0
    }

    /// Move up to `amount` chips from the stack into the current bet.
    /// Returns the chips actually moved.
    fn commit(&mut self, amount: u64) -> u64 {
        let moved = amount.min(self.stack);
        self.stack -= moved;
        self.current_bet += moved;
        moved
    }

    /// Put `amount` in, clamped to the stack.
    pub fn bet(&mut self, amount: u64) -> u64 {
        self.commit(amount)
    }

    /// Add `amount` on top of the current bet, clamped to the stack.
    pub fn raise(&mut self, amount: u64) -> u64 {
        self.commit(amount)
    }

    /// Bring the current bet up to `target`, clamped to the stack.
    pub fn call(&mut self, target: u64) -> Result<u64, PlayerError> {
        if self.current_bet > target {
            return Err(PlayerError::CallBelowCommitted { committed: self.current_bet, target });
        }
        Ok(self.commit(target - self.current_bet))
    }

    /// Take a blind; same clamping as a bet.
    pub fn post_blind(&mut self, amount: u64) -> u64 {
        self.commit(amount)
    }

    /// Give up the hand; returns the pocket cards for the discard pile.
    pub fn fold(&mut self) -> Option<PocketCards> {
        self.fold_count += 1;
        self.pocket.take()
    }

    pub fn receive_pocket(&mut self, pocket: PocketCards) -> Result<(), PlayerError> {
        if self.pocket.is_some() {
            return Err(PlayerError::PocketAlreadyHeld);
        }
        self.pocket = Some(pocket);
        Ok(())
    }

    /// Street over: hand the current bet to the pot.
    pub(crate) fn collect_bet(&mut self) -> u64 {
        std::mem::take(&mut self.current_bet)
    }

    /// Hand over: return the pocket cards without counting a fold.
    pub(crate) fn muck(&mut self) -> Option<PocketCards> {
        self.pocket.take()
    }

    pub(crate) fn award(&mut self, chips: u64) {
        self.stack += chips;
    }

    /// Pocket plus `community` through the bound hand strategy.
    pub fn best_hand(&self, community: &[Card]) -> Result<EvaluatedHand, PlayerError> {
        let pocket = self.pocket.ok_or(PlayerError::NoPocket)?;
        let cards = combine(&pocket, community)?;
        Ok(self.hand_strategy.evaluate(&cards)?)
    }

    /// Ask the bound bet strategy for a move.
    pub fn decide(&mut self, view: &TableView) -> Result<Decision, PlayerError> {
        let strategy = self.bet_strategy.as_mut().ok_or(PlayerError::NotAutomated)?;
        Ok(strategy.decide(view)?)
    }
}
