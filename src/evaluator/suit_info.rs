use crate::cards::Card;

/// Cards bucketed by suit, each bucket in descending rank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitGroups {
    groups: [Vec<Card>; 4],
}

impl SuitGroups {
    /// Build from cards already sorted in descending order.
    pub fn from_sorted(sorted_desc: &[Card]) -> Self {
        let mut groups: [Vec<Card>; 4] = Default::default();
        for &card in sorted_desc {
            groups[card.suit().index()].push(card);
        }
        Self { groups }
    }

    #[cfg(test)]
    pub fn suit(&self, suit: crate::cards::Suit) -> &[Card] {
        &self.groups[suit.index()]
    }

    /// Suit buckets with five or more cards. With seven cards there is at most one.
    pub fn flush_groups(&self) -> impl Iterator<Item = &[Card]> + '_ {
        self.groups.iter().filter(|g| g.len() >= 5).map(Vec::as_slice)
    }
}
