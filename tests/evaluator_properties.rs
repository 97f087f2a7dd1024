use holdem_rs::cards::{Card, Rank, Suit};
use holdem_rs::evaluator::{evaluate, evaluate_high_card, evaluate_seven, HandCategory};
use proptest::prelude::*;
use std::collections::HashSet;

fn deck() -> Vec<Card> {
    Card::all().collect()
}

fn seven_distinct() -> impl Strategy<Value = [Card; 7]> {
    Just(deck()).prop_shuffle().prop_map(|d| [d[0], d[1], d[2], d[3], d[4], d[5], d[6]])
}

fn straight_cards(top: u8, suits: [Suit; 5]) -> Vec<Card> {
    (0..5)
        .map(|i| Card::new(Rank::from_value(top - i as u8).unwrap(), suits[i]))
        .collect()
}

proptest! {
    #[test]
    fn best_five_come_from_the_seven(cards in seven_distinct()) {
        let hand = evaluate_seven(&cards);
        let picked: HashSet<Card> = hand.cards().iter().copied().collect();
        prop_assert_eq!(picked.len(), 5);
        prop_assert!(picked.iter().all(|c| cards.contains(c)));
        prop_assert_ne!(hand.category(), HandCategory::NoHand);
    }

    #[test]
    fn input_order_does_not_matter(cards in seven_distinct()) {
        let mut reversed = cards;
        reversed.reverse();
        prop_assert_eq!(evaluate_seven(&cards), evaluate_seven(&reversed));
        prop_assert_eq!(evaluate(&cards).unwrap(), evaluate_seven(&cards));
    }

    #[test]
    fn ordering_is_antisymmetric_and_transitive(a in seven_distinct(), b in seven_distinct(), c in seven_distinct()) {
        let (ea, eb, ec) = (evaluate_seven(&a), evaluate_seven(&b), evaluate_seven(&c));
        if ea >= eb && eb >= ea { prop_assert_eq!(ea, eb); }
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
    }

    #[test]
    fn category_dominates_kickers(a in seven_distinct(), b in seven_distinct()) {
        let (ea, eb) = (evaluate_seven(&a), evaluate_seven(&b));
        if ea.category() > eb.category() {
            prop_assert!(ea > eb);
        }
    }

    #[test]
    fn high_card_scoring_never_beats_the_best(cards in seven_distinct()) {
        let worst = evaluate_high_card(&cards).unwrap();
        prop_assert_eq!(worst.category(), HandCategory::HighCard);
        prop_assert!(worst <= evaluate_seven(&cards));
    }

    #[test]
    fn straights_rank_by_top_card(hi in 10u8..=14, lo in 9u8..=13) {
        prop_assume!(hi > lo);
        let mixed = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
        let fillers = [Card::new(Rank::Two, Suit::Hearts), Card::new(Rank::Three, Suit::Spades)];
        let mut a = straight_cards(hi, mixed);
        let mut b = straight_cards(lo, mixed);
        a.extend(fillers);
        b.extend(fillers);
        let (ea, eb) = (evaluate(&a).unwrap(), evaluate(&b).unwrap());
        prop_assert_eq!(ea.category(), HandCategory::Straight);
        prop_assert_eq!(eb.category(), HandCategory::Straight);
        prop_assert!(ea > eb);
    }
}
