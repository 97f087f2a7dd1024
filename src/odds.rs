//! Pot-odds arithmetic over a table snapshot.

/// Chip amounts and fold statistics needed to judge a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PotOdds {
    /// Chips already in the middle (completed streets plus the live street).
    pub pot: u64,
    /// Bet being faced.
    pub current_bet: u64,
    /// Highest lifetime fold count among the opponents.
    pub max_opponent_folds: u32,
    pub hands_played: u32,
}

impl PotOdds {
    /// `pot / current_bet`, infinite when there is nothing to call.
    pub fn ratio(&self) -> f64 {
        if self.current_bet == 0 {
            return f64::INFINITY;
        }
        self.pot as f64 / self.current_bet as f64
    }

    /// Minimum winning chance needed to call: `1 / (ratio + 1)`.
    ///
    /// ```
    /// use holdem_rs::odds::PotOdds;
    ///
    /// let odds = PotOdds { pot: 30, current_bet: 10, ..Default::default() };
    /// assert_eq!(odds.pot_equity(), 0.25);
    /// assert_eq!(PotOdds::default().pot_equity(), 0.0);
    /// ```
    pub fn pot_equity(&self) -> f64 {
        1.0 / (self.ratio() + 1.0)
    }

    /// Fraction of the time a bluff of `current_bet` must succeed to break even.
    pub fn break_even(&self) -> f64 {
        let denom = self.pot + self.current_bet;
        if denom == 0 {
            return 0.0;
        }
        self.current_bet as f64 / denom as f64
    }

    /// Observed fold rate of the most fold-prone opponent; 0 before any hand.
    pub fn opponent_fold_rate(&self) -> f64 {
        if self.hands_played == 0 {
            return 0.0;
        }
        self.max_opponent_folds as f64 / self.hands_played as f64
    }

    /// True when opponents fold often enough that betting wins regardless of cards.
    pub fn auto_profit(&self) -> bool {
        self.opponent_fold_rate() > self.break_even()
    }
}
