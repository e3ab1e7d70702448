//! Tests for the session surface a front-end drives.

use noughts::tui::ComputerScheduler;
use noughts::{
    Board, Cell, GameSession, GameStatus, IgnoreReason, MoveReport, Player, Position,
    ScriptedRandom, StatusView,
};
use std::time::Duration;
use tokio::time::timeout;

fn session() -> GameSession<ScriptedRandom> {
    GameSession::new(ScriptedRandom::new(vec![0]))
}

#[test]
fn test_block_scenario_from_fresh_session() {
    let mut session = session();
    let turn = session.handle_cell_select(0).unwrap();
    session.apply_scheduled(turn);
    let turn = session.handle_cell_select(1).unwrap();

    let report = session.apply_scheduled(turn);
    assert_eq!(report.applied().map(|mv| mv.position), Some(Position::TopRight));
    assert_eq!(session.status_view(), StatusView::HumanTurn);
}

#[test]
fn test_selection_rejected_while_computer_to_move() {
    let mut session = session();
    session.handle_cell_select(4).unwrap();
    assert!(session.handle_cell_select(0).is_none());
    assert_eq!(session.board().get(Position::TopLeft), Cell::Empty);
    assert_eq!(session.status_view(), StatusView::ComputerThinking);
}

#[test]
fn test_out_of_range_selection_changes_nothing() {
    let mut session = session();
    assert!(session.handle_cell_select(9).is_none());
    assert!(session.handle_cell_select(usize::MAX).is_none());
    assert_eq!(session.status(), GameStatus::INITIAL);
}

#[test]
fn test_ticket_redeemed_once() {
    let mut session = session();
    let turn = session.handle_cell_select(0).unwrap();
    assert!(session.apply_scheduled(turn).is_applied());
    assert_eq!(
        session.apply_scheduled(turn),
        MoveReport::Ignored(IgnoreReason::WrongTurn(Player::Computer))
    );
}

#[test]
fn test_human_win_highlights_line() {
    let mut session = session();
    for index in [0, 8, 6] {
        let turn = session.handle_cell_select(index).unwrap();
        session.apply_scheduled(turn);
    }
    assert!(session.handle_cell_select(7).is_none());

    let snapshot = session.snapshot();
    assert_eq!(snapshot.view, StatusView::HumanWon);
    assert_eq!(snapshot.message, "You win!");
    assert_eq!(
        snapshot.winning_line,
        Some([Position::BottomLeft, Position::BottomCenter, Position::BottomRight])
    );
    assert_eq!(session.status().winner(), Some(Player::Human));
}

#[tokio::test]
async fn test_reset_discards_in_flight_reply() {
    let mut session = session();
    let (mut scheduler, mut turns) = ComputerScheduler::new(Duration::from_millis(10));

    scheduler.schedule(session.handle_cell_select(0).unwrap());
    // Reset without cancelling: the ticket still arrives but is stale.
    session.reset();
    let turn = timeout(Duration::from_secs(2), turns.recv())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(session.apply_scheduled(turn), MoveReport::Ignored(IgnoreReason::Stale));
    assert_eq!(session.status(), GameStatus::INITIAL);
    assert_eq!(session.board(), Board::new());
}

#[tokio::test]
async fn test_scheduled_game_plays_to_completion() {
    let mut session = session();
    let (mut scheduler, mut turns) = ComputerScheduler::new(Duration::from_millis(1));

    for index in [0, 1, 6, 5, 7] {
        if let Some(turn) = session.handle_cell_select(index) {
            scheduler.schedule(turn);
            let turn = timeout(Duration::from_secs(2), turns.recv())
                .await
                .unwrap()
                .unwrap();
            assert!(session.apply_scheduled(turn).is_applied());
        }
    }

    assert_eq!(session.status(), GameStatus::Draw);
    assert_eq!(session.status_view(), StatusView::Draw);
    assert_eq!(session.game().history().len(), 9);
}
