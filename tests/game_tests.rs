//! Session and sample-game integration tests.

use rust_minimax::core::{GameState, Player};
use rust_minimax::games::stonehenge::{LeyKind, Stonehenge};
use rust_minimax::games::subtract_square::SubtractSquare;
use rust_minimax::rules::{Game, GameResult, Session};
use rust_minimax::search::{
    IterativeMinimax, MemoizedMinimax, RecursiveMinimax, RoughOutcome, SearchConfig,
    Strategy, StrategyKind,
};
use rust_minimax::Error;

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_choose_move_leaves_session_untouched() {
    let session = Session::new(SubtractSquare::new(true, 13));
    let before = *session.current_state();

    let mut strategies: Vec<Box<dyn Strategy<SubtractSquare>>> = vec![
        Box::new(RecursiveMinimax::default()),
        Box::new(IterativeMinimax::default()),
        Box::new(MemoizedMinimax::default()),
        Box::new(RoughOutcome::new()),
    ];

    for strategy in strategies.iter_mut() {
        session.choose_move(strategy.as_mut()).unwrap();
        assert_eq!(*session.current_state(), before);
    }
}

#[test]
fn test_apply_advances_session() {
    let mut session = Session::new(SubtractSquare::new(true, 5));

    session.apply(&4).unwrap();
    assert_eq!(session.current_state().total(), 1);
    assert_eq!(session.current_state().current_player(), Player::Two);
    assert!(!session.is_over());

    session.apply(&1).unwrap();
    assert!(session.is_over());
    assert!(session.is_winner(Player::Two));
    assert!(!session.is_winner(Player::One));
    assert_eq!(session.result(), Some(GameResult::Winner(Player::Two)));
}

#[test]
fn test_apply_rejects_illegal_move() {
    let mut session = Session::new(SubtractSquare::new(true, 3));
    let before = *session.current_state();

    assert_eq!(
        session.apply(&4),
        Err(Error::InvalidMove { mv: "4".to_string() })
    );
    assert_eq!(*session.current_state(), before);
}

#[test]
fn test_apply_at_largest_total() {
    let mut session = Session::new(SubtractSquare::new(true, u32::MAX));

    assert!(session.apply(&(u32::MAX - 1)).is_err());
    session.apply(&(65535 * 65535)).unwrap();
    assert_eq!(session.current_state().total(), u32::MAX - 65535 * 65535);
}

#[test]
fn test_parsed_input_round_trip() {
    let mut session = Session::new(SubtractSquare::new(true, 10));

    let mv = session.game().str_to_move(" 9\n").unwrap();
    session.apply(&mv).unwrap();
    assert_eq!(session.current_state().total(), 1);

    // The invalid sentinel never reaches the session.
    assert_eq!(session.game().str_to_move("abc"), None);
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_optimal_player_wins_from_losing_start() {
    // 10 is lost for the player to move under best play.
    let mut session = Session::new(SubtractSquare::new(true, 10));
    let mut p1 = RoughOutcome::new();
    let mut p2 = MemoizedMinimax::default();

    let result = session.play_out(&mut p1, &mut p2).unwrap();
    assert_eq!(result, GameResult::Winner(Player::Two));
}

#[test]
fn test_optimal_self_play_matches_value() {
    let mut session = Session::new(SubtractSquare::new(true, 8));
    let mut p1 = SearchConfig::default().build::<SubtractSquare>();
    let mut p2 = SearchConfig::default()
        .with_strategy(StrategyKind::Recursive)
        .build::<SubtractSquare>();

    // 8 is a win for the player to move.
    let result = session.play_out(p1.as_mut(), p2.as_mut()).unwrap();
    assert_eq!(result, GameResult::Winner(Player::One));
}

#[test]
fn test_play_out_stonehenge() {
    let game = Stonehenge::new(true, 2).unwrap();
    let mut session = Session::new(game);
    let mut p1 = MemoizedMinimax::default();
    let mut p2 = IterativeMinimax::default();

    let result = session.play_out(&mut p1, &mut p2).unwrap();
    let state = session.current_state();

    assert!(session.is_over());
    assert!(state.possible_moves().is_empty());
    match result {
        GameResult::Winner(winner) => {
            assert!(state.leys_held(winner) * 2 >= 9);
            assert!(state.leys_held(winner.opponent()) * 2 < 9);
        }
        GameResult::Draw => panic!("stonehenge cannot end in a draw"),
    }
}

#[test]
fn test_stonehenge_session_tracks_markers() {
    let mut session = Session::new(Stonehenge::new(true, 1).unwrap());

    let mv = session.game().str_to_move("b").unwrap();
    session.apply(&mv).unwrap();

    let state = session.current_state();
    assert_eq!(state.cell('B'), Some(Player::One));
    assert_eq!(state.marker(LeyKind::Horizontal, 0), Some(Player::One));
    assert_eq!(state.marker(LeyKind::DownUp, 1), Some(Player::One));
    assert_eq!(state.marker(LeyKind::DownDown, 1), Some(Player::One));
    assert_eq!(session.result(), Some(GameResult::Winner(Player::One)));
}
