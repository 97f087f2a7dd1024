use crate::cards::{Card, Rank};

/// Cards bucketed by rank, highest rank first. Cards inside a bucket are in
/// descending suit order so selections are deterministic.
///
/// Example: `Ks Kd 9h 9c 9s 4d 2c` groups as
/// `[(K, [Ks Kd]), (9, [9s 9h 9c]), (4, [4d]), (2, [2c])]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, Vec<Card>)>,
}

impl RankGroups {
    /// Build from cards already sorted in descending order.
    pub fn from_sorted(sorted_desc: &[Card]) -> Self {
        let mut groups: Vec<(Rank, Vec<Card>)> = Vec::with_capacity(sorted_desc.len());
        for &card in sorted_desc {
            match groups.last_mut() {
                Some((rank, cards)) if *rank == card.rank() => cards.push(card),
                _ => groups.push((card.rank(), vec![card])),
            }
        }
        Self { groups }
    }

    /// Groups of exactly `size` cards, highest rank first.
    pub fn of_size(&self, size: usize) -> impl Iterator<Item = &[Card]> + '_ {
        self.groups.iter().filter(move |(_, cards)| cards.len() == size).map(|(_, c)| c.as_slice())
    }

    pub fn quad(&self) -> Option<&[Card]> {
        self.of_size(4).next()
    }

    /// Highest three-of-a-kind group.
    pub fn trips(&self) -> Option<&[Card]> {
        self.of_size(3).next()
    }

    /// All pair groups, highest first.
    pub fn pairs(&self) -> Vec<&[Card]> {
        self.of_size(2).collect()
    }

    /// Highest group of at least two cards whose rank differs from `exclude`.
    pub fn best_pair_source(&self, exclude: Rank) -> Option<&[Card]> {
        self.groups
            .iter()
            .find(|(rank, cards)| *rank != exclude && cards.len() >= 2)
            .map(|(_, c)| &c[..2])
    }

    /// Ranks present, descending.
    #[cfg(test)]
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().map(|(r, _)| *r)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.groups.len()
    }
}
