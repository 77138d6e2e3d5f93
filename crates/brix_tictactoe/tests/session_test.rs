//! Tests for opponent scheduling and cancellation.

use std::time::Duration;

use brix_tictactoe::{
    BoardSize, Cell, GameEngine, Mark, Mode, PolicyKind, Session,
};

fn single_session() -> Session {
    Session::with_delay(
        GameEngine::new(BoardSize::CLASSIC, Mode::SingleOpponent),
        Duration::from_millis(500),
    )
}

#[test]
fn test_reset_cancels_pending_reply() {
    let mut session = single_session();
    let ticket = session.apply_move(4).scheduled.unwrap();

    assert_eq!(session.reset_board(), Some(ticket));
    assert_eq!(session.pending(), None);

    // The timer elapses after the reset: nothing lands on the new board.
    assert!(session.fire(ticket).is_none());
    assert_eq!(session.engine().board().empty_cells().count(), 9);
    assert_eq!(session.engine().turn(), Mark::X);
}

#[test]
fn test_mode_change_cancels_pending_reply() {
    let mut session = single_session();
    let ticket = session.apply_move(0).scheduled.unwrap();

    session.change_mode(Mode::SingleOpponent);
    assert!(session.fire(ticket).is_none());
    assert_eq!(session.engine().board().get(1), Some(Cell::Empty));
}

#[test]
fn test_size_change_cancels_pending_reply() {
    let mut session = single_session();
    let ticket = session.apply_move(0).scheduled.unwrap();

    session.change_size(BoardSize::new(4).unwrap());
    assert!(session.fire(ticket).is_none());
    assert_eq!(session.engine().board().empty_cells().count(), 16);
}

#[test]
fn test_only_one_reply_pending() {
    let mut session = single_session();
    let ticket = session.apply_move(0).scheduled.unwrap();
    // The human cannot move again until the opponent has replied.
    assert_eq!(session.apply_move(1).scheduled, None);
    assert_eq!(session.pending(), Some(ticket));
}

#[test]
fn test_full_game_through_session() {
    let mut session = single_session();
    for index in [0, 3, 6] {
        let update = session.apply_move(index);
        assert!(update.status.is_accepted());
        if let Some(ticket) = update.scheduled {
            let placement = session.fire(ticket).unwrap();
            assert_eq!(placement.mark, Mark::O);
        }
    }
    assert!(session.engine().is_over());
    assert_eq!(session.pending(), None);
}

#[test]
fn test_random_policy_through_session() {
    let engine = GameEngine::with_policy(
        BoardSize::new(4).unwrap(),
        Mode::SingleOpponent,
        PolicyKind::Random.build(Some(99)),
    );
    let mut session = Session::new(engine);
    let ticket = session.apply_move(5).scheduled.unwrap();
    let placement = session.fire(ticket).unwrap();
    assert_ne!(placement.index, 5);
    assert_eq!(
        session.engine().board().get(placement.index),
        Some(Cell::Occupied(Mark::O))
    );
}
