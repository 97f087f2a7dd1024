use holdem_rs::cards::{parse_cards, Card, Rank};
use holdem_rs::evaluator::{compare_holdem, evaluate, evaluate_holdem, EvaluatedHand, HandCategory};
use holdem_rs::hand::PocketCards;
use std::cmp::Ordering;

fn eval(s: &str) -> EvaluatedHand {
    evaluate(&parse_cards(s).unwrap()).unwrap()
}

fn ranks(h: &EvaluatedHand) -> Vec<Rank> {
    h.cards().iter().map(|c| c.rank()).collect()
}

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

#[test]
fn low_straight_flush() {
    let h = eval("2c 3c 4c 5c 6c 9d 9h");
    assert_eq!(h.category(), HandCategory::StraightFlush);
    let mut cards = h.cards().to_vec();
    cards.sort();
    assert_eq!(cards, parse_cards("2c 3c 4c 5c 6c").unwrap());
}

#[test]
fn quads_keep_the_king_kicker() {
    let h = eval("9c 9d 9h 9s 2d 5h Kc");
    assert_eq!(h.category(), HandCategory::FourOfKind);
    assert_eq!(&ranks(&h)[..4], &[Rank::Nine; 4]);
    assert_eq!(h.cards()[4], card("Kc"));
}

#[test]
fn full_house_groups_by_triple() {
    let h = eval("Ac Ad Kc Kd Kh 2s 3s");
    assert_eq!(h.category(), HandCategory::FullHouse);
    assert_eq!(ranks(&h), vec![Rank::King, Rank::King, Rank::King, Rank::Ace, Rank::Ace]);
}

#[test]
fn high_card_queen() {
    let h = eval("2c 7d 9h Js 4d 6c Qh");
    assert_eq!(h.category(), HandCategory::HighCard);
    assert_eq!(h.cards()[0], card("Qh"));
    assert_eq!(ranks(&h), vec![Rank::Queen, Rank::Jack, Rank::Nine, Rank::Seven, Rank::Six]);
}

#[test]
fn fixtures_order_by_category() {
    let fixtures = [
        ("2c 7d 9h Js 4d 6c Qh", HandCategory::HighCard),
        ("2c 2d 9h Js 4d 6c Qh", HandCategory::Pair),
        ("2c 2d 9h 9s 4d 6c Qh", HandCategory::TwoPair),
        ("2c 2d 2h 9s 4d 6c Qh", HandCategory::ThreeOfKind),
        ("5c 6d 7h 8s 9d Jc Kh", HandCategory::Straight),
        ("2h 5h 9h Jh Kh 3c 4d", HandCategory::Flush),
        ("Ac Ad Kc Kd Kh 2s 3s", HandCategory::FullHouse),
        ("9c 9d 9h 9s 2d 5h Kc", HandCategory::FourOfKind),
        ("2c 3c 4c 5c 6c 9d 9h", HandCategory::StraightFlush),
    ];
    let hands: Vec<EvaluatedHand> = fixtures
        .iter()
        .map(|(s, want)| {
            let h = eval(s);
            assert_eq!(h.category(), *want, "{s}");
            h
        })
        .collect();
    for pair in hands.windows(2) {
        assert!(pair[0] < pair[1], "{} should lose to {}", pair[0], pair[1]);
    }
    assert!(hands.iter().all(|h| h.category() != HandCategory::NoHand));
}

#[test]
fn long_run_scores_its_lowest_straight() {
    let h = eval("4c 5d 6h 7s 8c 9d Th");
    assert_eq!(h.category(), HandCategory::Straight);
    assert_eq!(ranks(&h), vec![Rank::Eight, Rank::Seven, Rank::Six, Rank::Five, Rank::Four]);
    assert!(h < eval("6c 7d 8h 9s Tc 2d 3h"));
}

#[test]
fn ace_does_not_play_low() {
    let h = eval("Ac 2d 3h 4s 5c 9d Jh");
    assert_eq!(h.category(), HandCategory::HighCard);
}

#[test]
fn three_pairs_keep_the_best_two_and_best_kicker() {
    let h = eval("Kc Kd 7h 7s 3c 3d 2h");
    assert_eq!(h.category(), HandCategory::TwoPair);
    assert_eq!(ranks(&h), vec![Rank::King, Rank::King, Rank::Seven, Rank::Seven, Rank::Three]);
}

#[test]
fn two_triples_make_a_full_house() {
    let h = eval("Qc Qd Qh 4c 4d 4h 2s");
    assert_eq!(h.category(), HandCategory::FullHouse);
    assert_eq!(ranks(&h), vec![Rank::Queen, Rank::Queen, Rank::Queen, Rank::Four, Rank::Four]);
}

#[test]
fn kickers_break_ties_within_a_category() {
    assert!(eval("Ac Ad Kh 9s 4d 3c 2h") > eval("Ac Ad Qh 9s 4d 3c 2h"));
    assert_eq!(
        eval("Ac Ad Kh 9s 4d 3c 2h").cmp(&eval("Ah As Kd 9c 4h 3d 2s")),
        Ordering::Equal
    );
}

#[test]
fn holdem_helpers_compare_on_a_shared_board() {
    let board = parse_cards("2c 7d 9h Jd Ks").unwrap();
    let aces: PocketCards = "Ac Ad".parse().unwrap();
    let kings: PocketCards = "Kc Kd".parse().unwrap();
    assert_eq!(evaluate_holdem(&kings, &board).unwrap().category(), HandCategory::ThreeOfKind);
    assert_eq!(compare_holdem(&aces, &kings, &board).unwrap(), Ordering::Less);

    let plays = parse_cards("Ts Js Qs Ks As").unwrap();
    let low: PocketCards = "2c 3d".parse().unwrap();
    let other: PocketCards = "4c 5d".parse().unwrap();
    assert_eq!(compare_holdem(&low, &other, &plays).unwrap(), Ordering::Equal);
    assert!(compare_holdem(&low, &aces, &board[..4]).is_err());
}
