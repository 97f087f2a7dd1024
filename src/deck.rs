use crate::cards::Card;
use crate::error::ErrorKind;
use crate::hand::{ensure_distinct, HandError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: requested {requested} cards, {remaining} left")]
    Exhausted { requested: usize, remaining: usize },
}

impl DeckError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ResourceExhausted
    }
}

/// A standard 52-card deck dealt from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Unshuffled deck in suit-major order.
    ///
    /// ```
    /// use holdem_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self { cards: Card::all().collect() }
    }

    /// A deck that deals `cards` front to back, for replaying a known hand.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, HandError> {
        ensure_distinct(&cards)?;
        Ok(Self { cards: cards.into() })
    }

    /// A fresh deck shuffled with a seeded RNG.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_seeded(seed);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Uniform permutation of the remaining cards.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Take the front card.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Exhausted { requested: 1, remaining: 0 })
    }

    /// Take `n` cards from the front; fails without consuming anything if fewer remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::Exhausted { requested: n, remaining: self.cards.len() });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Discard the front card, returning it for the discard pile.
    pub fn burn(&mut self) -> Result<Card, DeckError> {
        self.draw()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let d = Deck::standard();
        let set: HashSet<Card> = d.cards.iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        assert_eq!(Deck::shuffled(42).cards, Deck::shuffled(42).cards);
        assert_ne!(Deck::shuffled(42).cards, Deck::standard().cards);
    }

    #[test]
    fn draws_come_from_the_front() {
        let mut d = Deck::standard();
        let front = d.cards[0];
        assert_eq!(d.draw().unwrap(), front);
        assert_eq!(d.len(), 51);
        let three = d.draw_n(3).unwrap();
        assert_eq!(three.len(), 3);
        assert_eq!(d.len(), 48);
        assert!(!d.contains(front));
    }

    #[test]
    fn underflow_fails_loudly() {
        let mut d = Deck::standard();
        d.draw_n(50).unwrap();
        let err = d.draw_n(3).unwrap_err();
        assert_eq!(err, DeckError::Exhausted { requested: 3, remaining: 2 });
        assert_eq!(d.len(), 2, "failed draw must not consume cards");
        d.draw_n(2).unwrap();
        assert!(d.draw().is_err());
        assert!(d.burn().is_err());
        assert_eq!(d.draw().unwrap_err().kind(), ErrorKind::ResourceExhausted);
    }

    #[test]
    fn preset_order_is_dealt_as_given() {
        let cards = crate::cards::parse_cards("As Kd 2c").unwrap();
        let mut d = Deck::from_cards(cards.clone()).unwrap();
        assert_eq!(d.draw_n(3).unwrap(), cards);
        assert!(d.is_empty());
        let dup = crate::cards::parse_cards("As As").unwrap();
        assert!(matches!(Deck::from_cards(dup), Err(HandError::DuplicateCard(_))));
    }
}
