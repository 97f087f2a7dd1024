pub mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::error::ErrorKind;
use crate::hand::{combine, ensure_distinct, HandError, PocketCards};
use core::cmp::Ordering;
use std::fmt;

/// Compact, comparable hand strength. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

impl HandValue {
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and the ranks of five ordered cards.
    pub fn from_parts(category: HandCategory, cards: &[Card; 5]) -> Self {
        // [ category (8) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category.ordinal() as u64) << CAT_SHIFT;
        for (i, c) in cards.iter().enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (c.rank().value() as u64) << offset;
        }
        HandValue(v)
    }
}

/// Hand categories from weakest to strongest. The discriminant is the value
/// the probability estimator averages over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandCategory {
    NoHand = 0,
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfKind = 8,
    StraightFlush = 9,
}

impl HandCategory {
    pub const COUNT: usize = 10;

    pub const ALL: [HandCategory; Self::COUNT] = [
        HandCategory::NoHand,
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfKind,
        HandCategory::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::NoHand => "No Hand",
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The best five cards out of seven and their category.
///
/// Cards are ordered by significance: grouped cards first, kickers after, each
/// part descending. Comparison looks at the category and then at card ranks
/// position by position, so equal hands of different suits compare equal.
#[derive(Debug, Clone, Copy)]
pub struct EvaluatedHand {
    category: HandCategory,
    cards: [Card; 5],
    value: HandValue,
}

impl EvaluatedHand {
    pub(crate) fn new(category: HandCategory, cards: [Card; 5]) -> Self {
        Self { category, cards, value: HandValue::from_parts(category, &cards) }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub const fn value(&self) -> HandValue {
        self.value
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for EvaluatedHand {}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, crate::cards::format_cards(&self.cards))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected exactly 7 cards, got {0}")]
    WrongCardCount(usize),
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// Best five-card hand out of exactly seven distinct cards.
///
/// ```
/// use holdem_rs::cards::parse_cards;
/// use holdem_rs::evaluator::{evaluate, HandCategory};
///
/// let cards = parse_cards("9c 9d 9h 9s 2d 5h Kc").unwrap();
/// let hand = evaluate(&cards).unwrap();
/// assert_eq!(hand.category(), HandCategory::FourOfKind);
/// assert_eq!(hand.cards()[4].to_string(), "Kc");
/// ```
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let seven: &[Card; 7] = cards.try_into().map_err(|_| EvalError::WrongCardCount(cards.len()))?;
    ensure_distinct(seven)?;
    Ok(evaluate_seven(seven))
}

/// Evaluate seven cards already known to be distinct.
pub fn evaluate_seven(cards: &[Card; 7]) -> EvaluatedHand {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);
    DETECTORS
        .iter()
        .find_map(|d| d.detect(&analysis))
        .unwrap_or_else(|| {
            let top = &analysis.sorted;
            EvaluatedHand::new(HandCategory::NoHand, [top[0], top[1], top[2], top[3], top[4]])
        })
}

/// The five highest cards scored as High Card, whatever else the seven hold.
pub fn evaluate_high_card(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let seven: &[Card; 7] = cards.try_into().map_err(|_| EvalError::WrongCardCount(cards.len()))?;
    ensure_distinct(seven)?;
    let analysis = hand_analysis::HandAnalysis::new(seven);
    Ok(analysis.complete(HandCategory::HighCard, &[]))
}

/// Pocket cards plus a complete five-card board.
pub fn evaluate_holdem(pocket: &PocketCards, board: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let all = combine(pocket, board)?;
    evaluate(&all)
}

/// Compare two pockets on a shared five-card board.
pub fn compare_holdem(a: &PocketCards, b: &PocketCards, board: &[Card]) -> Result<Ordering, EvalError> {
    Ok(evaluate_holdem(a, board)?.cmp(&evaluate_holdem(b, board)?))
}
