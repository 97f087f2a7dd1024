// Table engine boundary. Shells (console, GUI, bot harnesses) drive a hand
// through this trait without touching game internals. Implemented for `Game`.

use crate::cards::Card;
use crate::game::{ActionOutcome, Game, GameError, Seat, Street};
use crate::strategy::{BetAction, Decision};

pub trait TableEngine {
    // Hand lifecycle
    fn reset_hand(&mut self) -> Result<(), GameError>;
    fn advance_street(&mut self) -> Result<Street, GameError>;
    fn showdown(&mut self) -> Result<Vec<usize>, GameError>;

    // Actions
    fn player_act(
        &mut self,
        seat: usize,
        action: BetAction,
        amount: Option<u64>,
    ) -> Result<ActionOutcome, GameError>;
    fn decide_action(&mut self, seat: usize) -> Result<Decision, GameError>;
    fn act_automated(&mut self) -> Result<ActionOutcome, GameError>;

    // Queries
    fn player_name(&self, index: usize) -> Option<&str>;
    fn player_stack(&self, index: usize) -> Option<u64>;
    fn player_bet(&self, index: usize) -> Option<u64>;
    fn is_automated(&self, index: usize) -> bool;
    fn community(&self) -> &[Card];
    fn current_pot(&self) -> u64;
    fn total_pot(&self) -> u64;
    fn current_bet(&self) -> u64;
    fn to_call(&self, seat: usize) -> u64;
    fn street(&self) -> Street;
    fn cursor(&self) -> usize;
    fn blind_position(&self) -> usize;
    fn seats(&self) -> &[Seat];
    fn betting_complete(&self) -> bool;
}

impl TableEngine for Game {
    fn reset_hand(&mut self) -> Result<(), GameError> {
        Game::reset_hand(self)
    }
    fn advance_street(&mut self) -> Result<Street, GameError> {
        Game::advance_street(self)
    }
    fn showdown(&mut self) -> Result<Vec<usize>, GameError> {
        Game::showdown(self)
    }

    fn player_act(
        &mut self,
        seat: usize,
        action: BetAction,
        amount: Option<u64>,
    ) -> Result<ActionOutcome, GameError> {
        Game::player_act(self, seat, action, amount)
    }
    fn decide_action(&mut self, seat: usize) -> Result<Decision, GameError> {
        Game::decide_action(self, seat)
    }
    fn act_automated(&mut self) -> Result<ActionOutcome, GameError> {
        Game::act_automated(self)
    }

    fn player_name(&self, index: usize) -> Option<&str> {
        self.player(index).map(|p| p.name())
    }
    fn player_stack(&self, index: usize) -> Option<u64> {
        self.player(index).map(|p| p.stack())
    }
    fn player_bet(&self, index: usize) -> Option<u64> {
        self.player(index).map(|p| p.current_bet())
    }
    fn is_automated(&self, index: usize) -> bool {
        self.player(index).is_some_and(|p| p.is_automated())
    }
    fn community(&self) -> &[Card] {
        Game::community(self)
    }
    fn current_pot(&self) -> u64 {
        Game::current_pot(self)
    }
    fn total_pot(&self) -> u64 {
        Game::total_pot(self)
    }
    fn current_bet(&self) -> u64 {
        Game::current_bet(self)
    }
    fn to_call(&self, seat: usize) -> u64 {
        Game::to_call(self, seat)
    }
    fn street(&self) -> Street {
        Game::street(self)
    }
    fn cursor(&self) -> usize {
        Game::cursor(self)
    }
    fn blind_position(&self) -> usize {
        Game::blind_position(self)
    }
    fn seats(&self) -> &[Seat] {
        Game::seats(self)
    }
    fn betting_complete(&self) -> bool {
        self.is_betting_complete()
    }
}
