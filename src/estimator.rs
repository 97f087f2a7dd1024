//! Hand-category probabilities by enumerating every completion of the known
//! cards to seven.

use crate::cards::Card;
use crate::error::ErrorKind;
use crate::evaluator::combinations::{choose, Combinations};
use crate::evaluator::{evaluate_seven, HandCategory};
use crate::hand::{ensure_distinct, HandError};

/// Distribution used when no card is known yet.
pub const BASELINE: [f64; HandCategory::COUNT] =
    [0.0, 0.174, 0.438, 0.235, 0.0483, 0.0462, 0.0303, 0.026, 0.00168, 0.000311];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EstimateError {
    #[error("at most 7 known cards, got {0}")]
    TooManyCards(usize),
    #[error("invalid known cards: {0}")]
    InvalidCards(#[from] HandError),
}

impl EstimateError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// Probability of finishing with each category, indexed by category ordinal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandProbabilities {
    probs: [f64; HandCategory::COUNT],
    samples: u64,
}

impl HandProbabilities {
    pub fn baseline() -> Self {
        Self { probs: BASELINE, samples: 0 }
    }

    fn from_counts(counts: &[u64; HandCategory::COUNT], total: u64) -> Self {
        let mut probs = [0.0; HandCategory::COUNT];
        if total > 0 {
            for (p, &c) in probs.iter_mut().zip(counts) {
                *p = c as f64 / total as f64;
            }
        }
        Self { probs, samples: total }
    }

    pub fn get(&self, category: HandCategory) -> f64 {
        self.probs[category.ordinal() as usize]
    }

    pub fn as_array(&self) -> &[f64; HandCategory::COUNT] {
        &self.probs
    }

    /// Number of seven-card completions classified; 0 for the baseline.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Expected category ordinal: sum of `ordinal * probability`.
    pub fn average_value(&self) -> f64 {
        self.probs.iter().enumerate().map(|(i, p)| i as f64 * p).sum()
    }

    /// Most likely category and its probability. Ties go to the stronger category.
    pub fn most_likely(&self) -> (HandCategory, f64) {
        HandCategory::ALL
            .iter()
            .rev()
            .map(|&c| (c, self.get(c)))
            .fold((HandCategory::NoHand, f64::MIN), |best, cur| if cur.1 > best.1 { cur } else { best })
    }
}

/// Enumerate completions of `known` to seven cards and tally the categories.
///
/// Completions are visited in lexicographic order over the unseen cards (deck
/// order). A non-zero `cutoff` stops the enumeration as soon as that many
/// completions have been classified. With no known cards the fixed
/// [`BASELINE`] is returned.
///
/// ```
/// use holdem_rs::cards::parse_cards;
/// use holdem_rs::estimator::estimate;
/// use holdem_rs::evaluator::HandCategory;
///
/// let known = parse_cards("As Ad Ah Ac Kd 2c").unwrap();
/// let probs = estimate(&known, 0).unwrap();
/// assert_eq!(probs.get(HandCategory::FourOfKind), 1.0);
/// ```
pub fn estimate(known: &[Card], cutoff: u64) -> Result<HandProbabilities, EstimateError> {
    if known.len() > 7 {
        return Err(EstimateError::TooManyCards(known.len()));
    }
    ensure_distinct(known)?;
    if known.is_empty() {
        return Ok(HandProbabilities::baseline());
    }

    let unseen: Vec<Card> = Card::all().filter(|c| !known.contains(c)).collect();
    let missing = 7 - known.len();

    let mut seven = [known[0]; 7];
    seven[..known.len()].copy_from_slice(known);

    let mut counts = [0u64; HandCategory::COUNT];
    let mut total = 0u64;
    let mut combos = Combinations::new(unseen.len(), missing);
    while let Some(indices) = combos.next_indices() {
        for (slot, &i) in seven[known.len()..].iter_mut().zip(indices) {
            *slot = unseen[i];
        }
        let hand = evaluate_seven(&seven);
        counts[hand.category().ordinal() as usize] += 1;
        total += 1;
        if cutoff > 0 && total >= cutoff {
            break;
        }
    }

    log::trace!(
        "estimated {} known cards over {} of {} completions",
        known.len(),
        total,
        choose(unseen.len(), missing)
    );
    Ok(HandProbabilities::from_counts(&counts, total))
}
