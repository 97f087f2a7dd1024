use super::rank_groups::RankGroups;
use super::straight_info::StraightRuns;
use super::suit_info::SuitGroups;
use super::{EvaluatedHand, HandCategory};
use crate::cards::Card;

/// Pre-computed view of a 7-card set shared by every category detector.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Input cards, descending.
    pub sorted: [Card; 7],
    pub rank_groups: RankGroups,
    pub suit_groups: SuitGroups,
    pub runs: StraightRuns,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 7]) -> Self {
        let mut sorted = *cards;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let rank_groups = RankGroups::from_sorted(&sorted);
        let suit_groups = SuitGroups::from_sorted(&sorted);
        let runs = StraightRuns::detect(&sorted);
        Self { sorted, rank_groups, suit_groups, runs }
    }

    /// Highest cards not in `used`, descending.
    pub fn kickers<'a>(&'a self, used: &'a [Card]) -> impl Iterator<Item = Card> + 'a {
        self.sorted.iter().copied().filter(move |c| !used.contains(c))
    }

    /// Fill a hand with `made` followed by the best kickers.
    pub fn complete(&self, category: HandCategory, made: &[Card]) -> EvaluatedHand {
        let mut cards = [self.sorted[0]; 5];
        let take = made.len().min(5);
        cards[..take].copy_from_slice(&made[..take]);
        for (slot, kicker) in cards[take..].iter_mut().zip(self.kickers(made)) {
            *slot = kicker;
        }
        EvaluatedHand::new(category, cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank};

    fn seven(s: &str) -> [Card; 7] {
        let v = parse_cards(s).unwrap();
        [v[0], v[1], v[2], v[3], v[4], v[5], v[6]]
    }

    #[test]
    fn sorted_is_descending() {
        let a = HandAnalysis::new(&seven("2c 7d 9h Js 4d 6c Qh"));
        assert_eq!(a.sorted[0].rank(), Rank::Queen);
        assert_eq!(a.sorted[6].rank(), Rank::Two);
    }

    #[test]
    fn complete_appends_highest_unused_cards() {
        let a = HandAnalysis::new(&seven("9c 9d 2h 5s Kc 3d 7h"));
        let pair: Vec<Card> = a.rank_groups.pairs()[0].to_vec();
        let hand = a.complete(HandCategory::Pair, &pair);
        let ranks: Vec<Rank> = hand.cards().iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Nine, Rank::Nine, Rank::King, Rank::Seven, Rank::Five]);
    }
}
