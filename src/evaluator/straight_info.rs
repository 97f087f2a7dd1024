use crate::cards::{Card, Rank};

/// Every run of five consecutive ranks present in a card set, lowest run first.
///
/// Runs only count upward from Two: an Ace never plays low, so `A 2 3 4 5` is
/// not a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StraightRuns {
    runs: Vec<[Card; 5]>,
}

impl StraightRuns {
    /// Scan `sorted_desc` (descending order) for runs. When a rank appears more
    /// than once, the first card seen for it (highest suit) represents the rank.
    pub fn detect(sorted_desc: &[Card]) -> Self {
        let mut by_rank: [Option<Card>; 15] = [None; 15];
        for &card in sorted_desc {
            let slot = &mut by_rank[card.rank().value() as usize];
            if slot.is_none() {
                *slot = Some(card);
            }
        }

        let mut runs = Vec::new();
        let top_high = Rank::Ace.value();
        let top_low = Rank::Six.value();
        for top in top_low..=top_high {
            let mut run = [sorted_desc[0]; 5];
            let complete = (0..5u8).all(|i| match by_rank[(top - i) as usize] {
                Some(card) => {
                    run[i as usize] = card;
                    true
                }
                None => false,
            });
            if complete {
                runs.push(run);
            }
        }
        Self { runs }
    }

    /// The first run found scanning upward from Two, which is the lowest one.
    pub fn lowest(&self) -> Option<[Card; 5]> {
        self.runs.first().copied()
    }

    #[cfg(test)]
    pub fn runs(&self) -> &[[Card; 5]] {
        &self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn runs(s: &str) -> StraightRuns {
        let mut cards = parse_cards(s).unwrap();
        cards.sort_by(|a, b| b.cmp(a));
        StraightRuns::detect(&cards)
    }

    #[test]
    fn seven_consecutive_ranks_give_three_runs() {
        let r = runs("4c 5d 6h 7s 8c 9d Th");
        assert_eq!(r.runs().len(), 3);
        let lowest = r.lowest().unwrap();
        assert_eq!((lowest[0].rank(), lowest[4].rank()), (Rank::Eight, Rank::Four));
        assert_eq!(r.runs()[2][0].rank(), Rank::Ten);
    }

    #[test]
    fn paired_card_does_not_break_a_run() {
        let r = runs("5c 6d 6h 7s 8c 9d 2h");
        let best = r.lowest().unwrap();
        assert_eq!(best[0].rank(), Rank::Nine);
        assert_eq!(best[4].rank(), Rank::Five);
    }

    #[test]
    fn ace_does_not_play_low() {
        assert!(runs("Ac 2d 3h 4s 5c Kd Qh").lowest().is_none());
    }

    #[test]
    fn broadway_is_detected() {
        let best = runs("Ac Kd Qh Js Tc 2d 3h").lowest().unwrap();
        assert_eq!(best[0].rank(), Rank::Ace);
    }

    #[test]
    fn gaps_mean_no_run() {
        assert!(runs("2c 3d 4h 6s 7c 9d Jh").runs().is_empty());
    }
}
