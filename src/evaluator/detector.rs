use super::hand_analysis::HandAnalysis;
use super::straight_info::StraightRuns;
use super::{EvaluatedHand, HandCategory};

/// One hand category: recognise it in a 7-card analysis and build the best
/// five cards for it.
pub trait CategoryDetector: Sync {
    fn category(&self) -> HandCategory;
    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand>;
}

/// Five consecutive ranks inside one suit group.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> HandCategory {
        HandCategory::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        analysis
            .suit_groups
            .flush_groups()
            .filter_map(|group| StraightRuns::detect(group).lowest())
            .map(|run| EvaluatedHand::new(self.category(), run))
            .max()
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> HandCategory {
        HandCategory::FourOfKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let quad = analysis.rank_groups.quad()?;
        Some(analysis.complete(self.category(), quad))
    }
}

/// Highest triple plus two cards of the highest other group holding at least two.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> HandCategory {
        HandCategory::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let trips = analysis.rank_groups.trips()?;
        let pair = analysis.rank_groups.best_pair_source(trips[0].rank())?;
        let made = [trips[0], trips[1], trips[2], pair[0], pair[1]];
        Some(EvaluatedHand::new(self.category(), made))
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> HandCategory {
        HandCategory::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        analysis
            .suit_groups
            .flush_groups()
            .map(|g| EvaluatedHand::new(self.category(), [g[0], g[1], g[2], g[3], g[4]]))
            .max()
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> HandCategory {
        HandCategory::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let run = analysis.runs.lowest()?;
        Some(EvaluatedHand::new(self.category(), run))
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> HandCategory {
        HandCategory::ThreeOfKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let trips = analysis.rank_groups.trips()?;
        Some(analysis.complete(self.category(), trips))
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> HandCategory {
        HandCategory::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let pairs = analysis.rank_groups.pairs();
        if pairs.len() < 2 {
            return None;
        }
        let made = [pairs[0][0], pairs[0][1], pairs[1][0], pairs[1][1]];
        Some(analysis.complete(self.category(), &made))
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> HandCategory {
        HandCategory::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let pairs = analysis.rank_groups.pairs();
        let pair = pairs.first()?;
        Some(analysis.complete(self.category(), pair))
    }
}

/// Always matches: the five highest cards.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> HandCategory {
        HandCategory::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        Some(analysis.complete(self.category(), &[]))
    }
}

/// Detectors in priority order, strongest first.
pub static DETECTORS: &[&dyn CategoryDetector] = &[
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
