use crate::cards::{format_cards, Card};
use crate::config::{ConfigError, GameConfig};
use crate::deck::{Deck, DeckError};
use crate::error::ErrorKind;
use crate::evaluator::EvaluatedHand;
use crate::hand::{Board, PocketCards};
use crate::player::{Player, PlayerError};
use crate::strategy::{BetAction, Decision, TableView};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::fmt;

/// A position at the table. Seats keep their index for the whole match; a
/// seat is `Empty` while its player is folded or broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Empty,
    Occupied(usize),
}

impl Seat {
    pub fn player(self) -> Option<usize> {
        match self {
            Seat::Empty => None,
            Seat::Occupied(i) => Some(i),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    pub fn next(self) -> Street {
        match self {
            Street::PreFlop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River | Street::Showdown => Street::Showdown,
        }
    }

    /// Community cards dealt on entering this street.
    fn cards_dealt(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::PreFlop | Street::Showdown => 0,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::PreFlop => "pre-flop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::Showdown => "showdown",
        };
        f.write_str(s)
    }
}

/// What happened after a seat acted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Betting continues with this seat.
    NextToAct(usize),
    /// Everyone still able to act has acted and matched the bet.
    StreetComplete,
    /// Everyone else folded; the seat wins at showdown without a comparison.
    LastPlayerStanding(usize),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("bot count {bots} exceeds player count {players}")]
    TooManyBots { bots: usize, players: usize },
    #[error("player names must be unique and non-empty: '{0}'")]
    BadName(String),
    #[error("need at least two players with chips, found {0}")]
    NotEnoughPlayers(usize),
    #[error("a hand is already in progress")]
    HandInProgress,
    #[error("no hand in progress")]
    NoHandInProgress,
    #[error("no seat {0}")]
    NoSuchSeat(usize),
    #[error("seat {0} is empty")]
    SeatEmpty(usize),
    #[error("seat {seat} acted out of turn; seat {cursor} is to act")]
    NotYourTurn { seat: usize, cursor: usize },
    #[error("not allowed during {0}")]
    WrongStreet(Street),
    #[error("cannot check facing {to_call} to call")]
    CannotCheck { to_call: u64 },
    #[error("cannot bet into an existing bet of {current_bet}")]
    BetNotAllowed { current_bet: u64 },
    #[error("cannot raise without a bet")]
    RaiseNotAllowed,
    #[error("{0} needs an amount")]
    MissingAmount(BetAction),
    #[error("amount too small: min {min}, got {got}")]
    AmountTooSmall { min: u64, got: u64 },
    #[error("betting on this street is still open")]
    BettingOpen,
    #[error("betting on this street is closed")]
    BettingClosed,
    #[error("showdown needs five community cards, have {0}")]
    IncompleteBoard(usize),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Player(#[from] PlayerError),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::Config(e) => e.kind(),
            GameError::Deck(e) => e.kind(),
            GameError::Player(e) => e.kind(),
            GameError::TooManyBots { .. }
            | GameError::BadName(_)
            | GameError::NoSuchSeat(_)
            | GameError::MissingAmount(_)
            | GameError::AmountTooSmall { .. } => ErrorKind::InvalidInput,
            GameError::NotEnoughPlayers(_)
            | GameError::HandInProgress
            | GameError::NoHandInProgress
            | GameError::SeatEmpty(_)
            | GameError::NotYourTurn { .. }
            | GameError::WrongStreet(_)
            | GameError::CannotCheck { .. }
            | GameError::BetNotAllowed { .. }
            | GameError::RaiseNotAllowed
            | GameError::BettingOpen
            | GameError::BettingClosed
            | GameError::IncompleteBoard(_) => ErrorKind::InvalidState,
        }
    }
}

/// Table of `player_count` seats with default settings; the last `bot_count`
/// seats are automated.
///
/// ```
/// use holdem_rs::game::{new_game, Street};
///
/// let mut game = new_game(4, 4).unwrap();
/// game.reset_hand().unwrap();
/// assert_eq!(game.street(), Street::PreFlop);
/// assert_eq!(game.current_pot(), 15);
/// ```
pub fn new_game(player_count: usize, bot_count: usize) -> Result<Game, GameError> {
    Game::seated(GameConfig::default(), player_count, bot_count)
}

/// One match: a fixed roster playing successive hands.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    deck: Deck,
    board: Board,
    players: Vec<Player>,
    seats: Vec<Seat>,
    /// Per seat: acted since the last bet or raise on this street.
    acted: Vec<bool>,
    current_bet: u64,
    current_pot: u64,
    total_pot: u64,
    cursor: usize,
    /// Small blind seat of the current hand.
    blind_position: usize,
    big_blind_position: usize,
    street: Street,
    hand_live: bool,
    discards: Vec<Card>,
    hands_played: u32,
    winners: Vec<usize>,
    rng: ChaCha8Rng,
    /// Deck for the next hand instead of a fresh shuffle.
    stacked: Option<Deck>,
}

impl Game {
    /// A table for `roster`, one seat per player in order.
    pub fn new(config: GameConfig, roster: Vec<Player>) -> Result<Self, GameError> {
        config.validate(roster.len())?;
        let mut names = HashSet::new();
        for p in &roster {
            if p.name().trim().is_empty() || !names.insert(p.name()) {
                return Err(GameError::BadName(p.name().to_string()));
            }
        }

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let n = roster.len();
        Ok(Self {
            deck: Deck::standard(),
            board: Board::new(),
            seats: (0..n).map(Seat::Occupied).collect(),
            acted: vec![false; n],
            players: roster,
            current_bet: 0,
            current_pot: 0,
            total_pot: 0,
            cursor: 0,
            // Rotation moves to the next funded seat, so the first hand starts at seat 0.
            blind_position: n - 1,
            big_blind_position: 0,
            street: Street::Showdown,
            hand_live: false,
            discards: Vec::new(),
            hands_played: 0,
            winners: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            stacked: None,
            config,
        })
    }

    /// Humans named `player N` followed by bots named `bot N`.
    pub fn seated(config: GameConfig, player_count: usize, bot_count: usize) -> Result<Self, GameError> {
        if bot_count > player_count {
            return Err(GameError::TooManyBots { bots: bot_count, players: player_count });
        }
        let humans = player_count - bot_count;
        let stack = config.starting_stack;
        let mut roster: Vec<Player> =
            (1..=humans).map(|i| Player::new(format!("player {i}"), stack)).collect();
        for j in 1..=bot_count {
            let seed = config.seed.map(|s| s.wrapping_add(j as u64));
            let strategy = config.bot_kind.build(seed);
            roster.push(Player::automated(format!("bot {j}"), stack, strategy));
        }
        Self::new(config, roster)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn community(&self) -> &[Card] {
        self.board.as_slice()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Bets placed on the live street.
    pub fn current_pot(&self) -> u64 {
        self.current_pot
    }

    /// Chips from completed streets.
    pub fn total_pot(&self) -> u64 {
        self.total_pot
    }

    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    pub fn street(&self) -> Street {
        self.street
    }

    /// Seat whose turn it is.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn blind_position(&self) -> usize {
        self.blind_position
    }

    pub fn big_blind_position(&self) -> usize {
        self.big_blind_position
    }

    /// Burned and folded cards of the current hand.
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    /// Winners of the last showdown.
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }

    pub fn is_hand_live(&self) -> bool {
        self.hand_live
    }

    /// Chips on the table: stacks plus both pots.
    pub fn chip_count(&self) -> u64 {
        self.players.iter().map(|p| p.stack()).sum::<u64>() + self.current_pot + self.total_pot
    }

    pub fn to_call(&self, seat: usize) -> u64 {
        match self.seats.get(seat).copied().and_then(Seat::player) {
            Some(i) => self.current_bet.saturating_sub(self.players[i].current_bet()),
            None => 0,
        }
    }

    /// Seats still in the hand.
    pub fn occupied_seats(&self) -> Vec<usize> {
        self.seats.iter().enumerate().filter_map(|(s, seat)| seat.player().map(|_| s)).collect()
    }

    fn needs_action(&self, seat: usize) -> bool {
        match self.seats[seat] {
            Seat::Empty => false,
            Seat::Occupied(i) => {
                let p = &self.players[i];
                p.stack() > 0 && (!self.acted[seat] || p.current_bet() < self.current_bet)
            }
        }
    }

    /// First seat needing action, checking `start` itself first.
    fn first_to_act_from(&self, start: usize) -> Option<usize> {
        let n = self.seats.len();
        (0..n).map(|k| (start + k) % n).find(|&s| self.needs_action(s))
    }

    fn next_funded_after(&self, seat: usize) -> usize {
        let n = self.players.len();
        (1..=n).map(|k| (seat + k) % n).find(|&i| self.players[i].stack() > 0).unwrap_or(seat)
    }

    /// True once nobody still holding chips owes an action on this street.
    pub fn is_betting_complete(&self) -> bool {
        self.street == Street::Showdown || (0..self.seats.len()).all(|s| !self.needs_action(s))
    }

    /// Deal the next hand from `deck` as ordered: two cards per dealt-in seat
    /// in seat order, then burn and board cards street by street.
    pub fn stack_deck(&mut self, deck: Deck) {
        self.stacked = Some(deck);
    }

    /// Rotate the blinds, reshuffle, deal pocket cards and post the blinds.
    pub fn reset_hand(&mut self) -> Result<(), GameError> {
        if self.hand_live {
            return Err(GameError::HandInProgress);
        }
        let funded = self.players.iter().filter(|p| p.stack() > 0).count();
        if funded < 2 {
            return Err(GameError::NotEnoughPlayers(funded));
        }

        for p in &mut self.players {
            p.muck();
            p.collect_bet();
        }
        for (i, seat) in self.seats.iter_mut().enumerate() {
            *seat = if self.players[i].stack() > 0 { Seat::Occupied(i) } else { Seat::Empty };
        }
        self.acted.iter_mut().for_each(|a| *a = false);
        self.board = Board::new();
        self.discards.clear();
        self.winners.clear();
        self.current_bet = 0;
        self.current_pot = 0;
        self.total_pot = 0;

        self.deck = match self.stacked.take() {
            Some(deck) => deck,
            None => {
                let mut deck = Deck::standard();
                deck.shuffle_with(&mut self.rng);
                deck
            }
        };

        self.blind_position = self.next_funded_after(self.blind_position);
        self.big_blind_position = self.next_funded_after(self.blind_position);
        self.hands_played += 1;
        info!(
            "hand {} begins: small blind {} ({}), big blind {} ({})",
            self.hands_played,
            self.blind_position,
            self.players[self.blind_position].name(),
            self.big_blind_position,
            self.players[self.big_blind_position].name()
        );

        for i in 0..self.players.len() {
            if self.seats[i] == Seat::Empty {
                continue;
            }
            let pocket = PocketCards::from_slice(&self.deck.draw_n(2)?)
                .map_err(PlayerError::from)?;
            self.players[i].receive_pocket(pocket)?;
            debug!("dealt {} to {}", format_cards(&pocket.as_array()), self.players[i].name());
        }

        let sb = self.players[self.blind_position].post_blind(self.config.small_blind);
        let bb = self.players[self.big_blind_position].post_blind(self.config.big_blind);
        self.current_pot = sb + bb;
        self.current_bet = sb.max(bb);
        debug!("blinds posted: {sb} and {bb}");

        self.street = Street::PreFlop;
        self.hand_live = true;
        self.cursor = self
            .first_to_act_from(self.big_blind_position + 1)
            .unwrap_or(self.big_blind_position);
        Ok(())
    }

    /// Close the street: pot the bets, burn and deal. From the river this
    /// moves to showdown.
    pub fn advance_street(&mut self) -> Result<Street, GameError> {
        if !self.hand_live || self.street == Street::Showdown {
            return Err(GameError::WrongStreet(self.street));
        }
        if !self.is_betting_complete() {
            return Err(GameError::BettingOpen);
        }

        self.collect_street_bets();
        let next = self.street.next();
        let count = next.cards_dealt();
        if count > 0 {
            let burned = self.deck.burn()?;
            self.discards.push(burned);
            let dealt = self.deck.draw_n(count)?;
            debug!("{next}: {}", format_cards(&dealt));
            self.board.extend(dealt);
        }
        self.street = next;
        self.cursor = self.first_to_act_from(self.blind_position).unwrap_or(self.blind_position);
        Ok(next)
    }

    fn collect_street_bets(&mut self) {
        for p in &mut self.players {
            p.collect_bet();
        }
        self.total_pot += self.current_pot;
        self.current_pot = 0;
        self.current_bet = 0;
        self.acted.iter_mut().for_each(|a| *a = false);
    }

    fn ensure_turn(&self, seat: usize) -> Result<usize, GameError> {
        if !self.hand_live || self.street == Street::Showdown {
            return Err(GameError::WrongStreet(self.street));
        }
        let occupant = self.seats.get(seat).ok_or(GameError::NoSuchSeat(seat))?;
        if self.is_betting_complete() {
            return Err(GameError::BettingClosed);
        }
        if seat != self.cursor {
            return Err(GameError::NotYourTurn { seat, cursor: self.cursor });
        }
        occupant.player().ok_or(GameError::SeatEmpty(seat))
    }

    /// Apply `action` for `seat`, which must be the seat to act.
    ///
    /// `amount` is the bet size for `Bet` and the increment over the current
    /// bet for `Raise`; other actions ignore it. Amounts above the stack
    /// become all-ins.
    pub fn player_act(
        &mut self,
        seat: usize,
        action: BetAction,
        amount: Option<u64>,
    ) -> Result<ActionOutcome, GameError> {
        let idx = self.ensure_turn(seat)?;
        let to_call = self.to_call(seat);
        let big_blind = self.config.big_blind;
        let stack = self.players[idx].stack();
        let mut moved = 0;

        match action {
            BetAction::Fold => {
                if let Some(pocket) = self.players[idx].fold() {
                    self.discards.extend(pocket.as_array());
                }
                self.seats[seat] = Seat::Empty;
            }
            BetAction::Check => {
                if to_call > 0 {
                    return Err(GameError::CannotCheck { to_call });
                }
            }
            BetAction::Call => {
                moved = self.players[idx].call(self.current_bet)?;
            }
            BetAction::Bet => {
                if self.current_bet > 0 {
                    return Err(GameError::BetNotAllowed { current_bet: self.current_bet });
                }
                let amount = amount.ok_or(GameError::MissingAmount(action))?;
                if amount < big_blind && amount < stack {
                    return Err(GameError::AmountTooSmall { min: big_blind, got: amount });
                }
                moved = self.players[idx].bet(amount);
            }
            BetAction::Raise => {
                if self.current_bet == 0 {
                    return Err(GameError::RaiseNotAllowed);
                }
                let amount = amount.ok_or(GameError::MissingAmount(action))?;
                if amount < big_blind && to_call + amount < stack {
                    return Err(GameError::AmountTooSmall { min: big_blind, got: amount });
                }
                moved = self.players[idx].call(self.current_bet)?;
                moved += self.players[idx].raise(amount);
            }
        }

        self.current_pot += moved;
        self.acted[seat] = true;
        let committed = self.players[idx].current_bet();
        if committed > self.current_bet {
            self.current_bet = committed;
            for (s, flag) in self.acted.iter_mut().enumerate() {
                *flag = s == seat;
            }
        }
        debug!(
            "{} {} ({} in, bet {}, stack {})",
            self.players[idx].name(),
            action,
            moved,
            committed,
            self.players[idx].stack()
        );

        let occupied = self.occupied_seats();
        if occupied.len() == 1 {
            return Ok(ActionOutcome::LastPlayerStanding(occupied[0]));
        }
        match self.first_to_act_from(seat + 1) {
            Some(next) => {
                self.cursor = next;
                Ok(ActionOutcome::NextToAct(next))
            }
            None => Ok(ActionOutcome::StreetComplete),
        }
    }

    /// Read-only snapshot for the player at `seat`.
    pub fn table_view(&self, seat: usize) -> Result<TableView, GameError> {
        let idx = self
            .seats
            .get(seat)
            .ok_or(GameError::NoSuchSeat(seat))?
            .player()
            .ok_or(GameError::SeatEmpty(seat))?;
        let p = &self.players[idx];
        let max_opponent_folds = self
            .players
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != idx)
            .map(|(_, o)| o.fold_count())
            .max()
            .unwrap_or(0);
        Ok(TableView {
            small_blind: self.config.small_blind,
            big_blind: self.config.big_blind,
            current_bet: self.current_bet,
            own_bet: p.current_bet(),
            stack: p.stack(),
            pot: self.total_pot + self.current_pot,
            pocket: p.pocket(),
            community: self.board.as_slice().to_vec(),
            max_opponent_folds,
            hands_played: self.hands_played,
        })
    }

    /// Ask the automated player at `seat` what it would do.
    pub fn decide_action(&mut self, seat: usize) -> Result<Decision, GameError> {
        let view = self.table_view(seat)?;
        let idx = self.seats[seat].player().ok_or(GameError::SeatEmpty(seat))?;
        let decision = self.players[idx].decide(&view);
        decision.map_err(|e| {
            warn!("{} could not decide: {e}", self.players[idx].name());
            GameError::from(e)
        })
    }

    /// Decide and commit for the seat to act.
    pub fn act_automated(&mut self) -> Result<ActionOutcome, GameError> {
        let seat = self.cursor;
        let decision = self.decide_action(seat)?;
        self.player_act(seat, decision.action, Some(decision.amount)).map_err(|e| {
            warn!("seat {seat} made an invalid move ({decision}): {e}");
            e
        })
    }

    /// Settle the hand. With one seat left it takes the pot; otherwise every
    /// remaining hand is evaluated and the best one wins. Ties split the pot,
    /// odd chips going one at a time in seat order from left of the blind.
    pub fn showdown(&mut self) -> Result<Vec<usize>, GameError> {
        if !self.hand_live {
            return Err(GameError::NoHandInProgress);
        }
        let contenders = self.occupied_seats();
        let mut winners = if contenders.len() == 1 {
            contenders
        } else {
            if self.street != Street::Showdown {
                return Err(GameError::WrongStreet(self.street));
            }
            if self.board.len() < 5 {
                return Err(GameError::IncompleteBoard(self.board.len()));
            }
            let mut hands: Vec<(usize, EvaluatedHand)> = Vec::with_capacity(contenders.len());
            for &seat in &contenders {
                let idx = self.seats[seat].player().ok_or(GameError::SeatEmpty(seat))?;
                let hand = self.players[idx].best_hand(self.board.as_slice())?;
                info!("{} shows {hand}", self.players[idx].name());
                hands.push((seat, hand));
            }
            let best = hands.iter().map(|(_, h)| *h).max();
            hands.into_iter().filter(|(_, h)| Some(*h) == best).map(|(s, _)| s).collect()
        };

        self.collect_street_bets();
        let pot = std::mem::take(&mut self.total_pot);

        let n = self.seats.len();
        let start = (self.blind_position + 1) % n;
        winners.sort_by_key(|&s| (s + n - start) % n);
        let share = pot / winners.len() as u64;
        let mut remainder = pot % winners.len() as u64;
        for &seat in &winners {
            let mut chips = share;
            if remainder > 0 {
                chips += 1;
                remainder -= 1;
            }
            if let Some(idx) = self.seats[seat].player() {
                self.players[idx].award(chips);
                info!("{} wins {chips}", self.players[idx].name());
            }
        }

        self.street = Street::Showdown;
        self.hand_live = false;
        self.winners = winners.clone();
        Ok(winners)
    }

    /// Run a whole hand when every dealt-in seat is automated.
    pub fn play_hand(&mut self) -> Result<Vec<usize>, GameError> {
        self.reset_hand()?;
        while self.street != Street::Showdown && self.occupied_seats().len() > 1 {
            if self.is_betting_complete() {
                self.advance_street()?;
            } else {
                self.act_automated()?;
            }
        }
        self.showdown()
    }
}
