use holdem_rs::cards::parse_cards;
use holdem_rs::config::GameConfig;
use holdem_rs::game::Game;
use holdem_rs::player::Player;
use holdem_rs::strategy::{
    AlwaysCall, BetStrategy, BotKind, Decision, EstimatorDriven, EstimatorProfile, RandomBets, TableView,
};

fn river(pocket: &str, board: &str) -> TableView {
    TableView {
        small_blind: 5,
        big_blind: 10,
        stack: 500,
        pot: 100,
        pocket: Some(pocket.parse().unwrap()),
        community: parse_cards(board).unwrap(),
        ..Default::default()
    }
}

fn estimator() -> EstimatorDriven {
    EstimatorDriven::new(EstimatorProfile::default())
}

#[test]
fn made_quads_open_the_betting() {
    let v = river("9c 9d", "9h 9s 2d Kc 5h");
    assert_eq!(estimator().decide(&v).unwrap(), Decision::bet(10));
}

#[test]
fn quads_facing_a_bet_raise_the_minimum() {
    let mut v = river("9c 9d", "9h 9s 2d Kc 5h");
    v.current_bet = 40;
    assert_eq!(estimator().decide(&v).unwrap(), Decision::raise(10));
}

#[test]
fn air_checks_when_free_and_folds_to_a_bet() {
    let mut v = river("2c 7d", "Ah Kh Qh Jh 9s");
    assert_eq!(estimator().decide(&v).unwrap(), Decision::CHECK);
    v.current_bet = 50;
    assert_eq!(estimator().decide(&v).unwrap(), Decision::FOLD);
}

#[test]
fn fold_prone_opponents_invite_a_bluff() {
    let mut v = river("2c 7d", "Ah Kh Qh Jh 9s");
    v.hands_played = 10;
    v.max_opponent_folds = 9;
    assert_eq!(estimator().decide(&v).unwrap(), Decision::bet(10));
}

#[test]
fn bot_kinds_parse_from_cli_names() {
    assert_eq!("call".parse::<BotKind>().unwrap(), BotKind::AlwaysCall);
    assert_eq!("Random".parse::<BotKind>().unwrap(), BotKind::Random);
    assert_eq!("estimator".parse::<BotKind>().unwrap(), BotKind::Estimator);
    assert!("shark".parse::<BotKind>().is_err());
    for kind in [BotKind::AlwaysCall, BotKind::Random, BotKind::Estimator] {
        assert_eq!(kind.to_string().parse::<BotKind>().unwrap(), kind);
    }
}

#[test]
fn mixed_bots_finish_a_hand() {
    let quick = EstimatorProfile::default().with_cutoff(200);
    let roster = vec![
        Player::automated("caller", 300, Box::new(AlwaysCall)),
        Player::automated("gambler", 300, Box::new(RandomBets::new(Some(3)))),
        Player::automated("counter", 300, Box::new(EstimatorDriven::new(quick))),
    ];
    let mut g = Game::new(GameConfig::default().with_seed(17), roster).unwrap();
    for _ in 0..3 {
        if g.players().iter().filter(|p| p.stack() > 0).count() < 2 {
            break;
        }
        let winners = g.play_hand().unwrap();
        assert!(!winners.is_empty());
        assert_eq!(g.chip_count(), 900);
    }
}
