//! Behavioural tests for the game engine.

use brix_tictactoe::{
    BoardSize, Cell, GameEngine, Mark, Mode, MoveStatus, Outcome, Rejection, Score,
};

fn play(engine: &mut GameEngine, moves: &[usize]) {
    for &index in moves {
        assert!(
            engine.apply_move(index).is_accepted(),
            "move {index} should be accepted"
        );
    }
}

#[test]
fn test_top_row_win_scenario() {
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::TwoPlayer);
    play(&mut engine, &[0, 4, 1, 5, 2]);

    assert_eq!(engine.outcome(), Outcome::Winner(Mark::X));
    assert_eq!(engine.winning_line().unwrap().indices(), &[0, 1, 2]);
}

#[test]
fn test_draw_scenario() {
    // X O X
    // X O O
    // O X X
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::TwoPlayer);
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(engine.outcome(), Outcome::Draw);
    assert!(engine.winning_line().is_none());
    assert!(engine.board().is_full());
}

#[test]
fn test_full_board_with_diagonal_is_a_win_not_a_draw() {
    // X: 0, 4, 5, 7, 8 / O: 1, 2, 3, 6 fills the board but completes 0-4-8.
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::TwoPlayer);
    play(&mut engine, &[0, 1, 4, 2, 5, 3, 7, 6, 8]);

    assert!(engine.board().is_full());
    assert_eq!(engine.outcome(), Outcome::Winner(Mark::X));
    assert_eq!(engine.winning_line().unwrap().indices(), &[0, 4, 8]);
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::TwoPlayer);
    play(&mut engine, &[0, 4, 1, 5, 2]);
    let before = engine.snapshot();

    assert_eq!(
        engine.apply_move(8),
        MoveStatus::Rejected(Rejection::GameOver)
    );
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.board().get(8), Some(Cell::Empty));
}

#[test]
fn test_turn_parity() {
    let mut engine = GameEngine::new(BoardSize::new(5).unwrap(), Mode::TwoPlayer);
    // Pairs of columns per mark keep every line short of five.
    let order = [0, 1, 5, 6, 10, 11, 15, 16, 2, 3, 7, 8];
    for (n, &index) in order.iter().enumerate() {
        let expected = if n % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(engine.turn(), expected, "before move {n}");
        assert!(engine.apply_move(index).is_accepted());
    }
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.outcome(), Outcome::InProgress);
}

#[test]
fn test_winning_move_still_flips_turn() {
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::TwoPlayer);
    play(&mut engine, &[0, 4, 1, 5, 2]);
    assert_eq!(engine.turn(), Mark::O);
}

#[test]
fn test_reset_after_x_win_credits_x() {
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::TwoPlayer);
    play(&mut engine, &[0, 4, 1, 5, 2]);
    engine.reset_board();

    assert_eq!(*engine.score().x(), 1);
    assert_eq!(*engine.score().o(), 0);
    assert_eq!(engine.board().empty_cells().count(), 9);
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.outcome(), Outcome::InProgress);
    assert_eq!(engine.mode(), Mode::TwoPlayer);
}

#[test]
fn test_reset_after_draw_credits_nobody() {
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::TwoPlayer);
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    engine.reset_board();
    assert_eq!(engine.score(), Score::default());
}

#[test]
fn test_reset_mid_game_credits_nobody() {
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::TwoPlayer);
    play(&mut engine, &[0, 4]);
    engine.reset_board();
    assert_eq!(engine.score(), Score::default());
    assert_eq!(engine.board().empty_cells().count(), 9);
}

#[test]
fn test_score_survives_resets_and_clears_on_mode_change() {
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::TwoPlayer);
    play(&mut engine, &[0, 4, 1, 5, 2]);
    engine.reset_board();
    // O wins the middle column.
    play(&mut engine, &[0, 1, 2, 4, 3, 7]);
    assert_eq!(engine.outcome(), Outcome::Winner(Mark::O));
    engine.reset_board();
    assert_eq!(engine.score().to_string(), "X = 1 | O = 1");

    engine.change_mode(Mode::SingleOpponent);
    assert_eq!(engine.score(), Score::default());
    assert_eq!(engine.mode(), Mode::SingleOpponent);
    assert_eq!(engine.size(), BoardSize::CLASSIC);
}

#[test]
fn test_single_opponent_game_to_completion() {
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::SingleOpponent);
    // Human takes the left column while the opponent fills the top row
    // from the left: X0, O1, X3, O2, X6 wins.
    for index in [0, 3, 6] {
        assert!(engine.apply_move(index).is_accepted());
        if !engine.is_over() {
            let reply = engine.opponent_move().unwrap();
            assert_eq!(engine.board().get(reply), Some(Cell::Occupied(Mark::O)));
        }
    }
    assert_eq!(engine.outcome(), Outcome::Winner(Mark::X));
    assert_eq!(engine.winning_line().unwrap().indices(), &[0, 3, 6]);
    assert_eq!(engine.opponent_move(), None);
}

#[test]
fn test_opponent_never_moves_after_game_over() {
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::SingleOpponent);
    // Opponent fills 0, 1, 2 while the human plays 3, 4, 8.
    for index in [3, 4, 8] {
        engine.apply_move(index);
        engine.opponent_move();
    }
    assert_eq!(engine.outcome(), Outcome::Winner(Mark::O));
    let before = engine.snapshot();
    assert_eq!(engine.opponent_move(), None);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_initialize_keeps_score_and_mode() {
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::TwoPlayer);
    play(&mut engine, &[0, 4, 1, 5, 2]);
    engine.reset_board();
    engine.initialize(BoardSize::new(4).unwrap());
    assert_eq!(*engine.score().x(), 1);
    assert_eq!(engine.board().len(), 16);
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = GameEngine::new(BoardSize::CLASSIC, Mode::TwoPlayer);
    play(&mut engine, &[0, 4, 1, 5, 2]);
    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["winning_line"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["size"], serde_json::json!(3));
    assert_eq!(json["mode"], serde_json::json!("two_player"));
}
