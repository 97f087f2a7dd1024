use crate::cards::{parse_cards, Card};
use crate::error::ErrorKind;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("too many community cards: {0}")]
    TooManyBoardCards(usize),
    #[error("expected exactly two pocket cards, got {0}")]
    PocketCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

impl HandError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// A player's two private cards.
///
/// ```
/// use holdem_rs::cards::{Card, Rank, Suit};
/// use holdem_rs::hand::PocketCards;
///
/// let pocket = PocketCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(pocket.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PocketCards(Card, Card);

impl PocketCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateCard(a));
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::PocketCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl FromStr for PocketCards {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards revealed so far (0, 3, 4 or 5 during play).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(5) }
    }

    /// ```
    /// use holdem_rs::hand::Board;
    /// use holdem_rs::cards::parse_cards;
    ///
    /// let board = Board::try_new(parse_cards("2c 3c 4c").unwrap()).unwrap();
    /// assert_eq!(board.len(), 3);
    /// ```
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > 5 {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        ensure_distinct(&cards)?;
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }
}

impl FromStr for Board {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Fail on the first repeated card.
pub fn ensure_distinct(cards: &[Card]) -> Result<(), HandError> {
    let mut seen = 0u64;
    for c in cards {
        let bit = 1u64 << c.index();
        if seen & bit != 0 {
            return Err(HandError::DuplicateCard(*c));
        }
        seen |= bit;
    }
    Ok(())
}

/// Pocket plus community as one list, validated for overlap.
pub fn combine(pocket: &PocketCards, board: &[Card]) -> Result<Vec<Card>, HandError> {
    if board.len() > 5 {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    let mut all = Vec::with_capacity(2 + board.len());
    all.extend_from_slice(&pocket.as_array());
    all.extend_from_slice(board);
    ensure_distinct(&all)?;
    Ok(all)
}
