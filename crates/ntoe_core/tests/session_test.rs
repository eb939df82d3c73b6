//! Tests for the session state machine.

use ntoe_core::{GameError, GameInProgress, GameResult, GameSetup, GameStatus, Mark};

fn in_progress(result: GameResult) -> GameInProgress {
    match result {
        GameResult::InProgress(game) => game,
        GameResult::Finished(done) => panic!("game ended early: {:?}", done.status()),
    }
}

#[test]
fn test_turns_alternate() {
    let game = GameSetup::new(3).unwrap().start();
    assert_eq!(game.to_move(), Mark::Player);

    let game = in_progress(game.make_move(4).unwrap());
    assert_eq!(game.to_move(), Mark::Computer);

    let game = in_progress(game.make_move(0).unwrap());
    assert_eq!(game.to_move(), Mark::Player);
    assert_eq!(game.turn(), 2);
}

#[test]
fn test_player_row_wins_immediately() {
    // Player: 0, 1, 2. Computer: 4, 8.
    let result = GameInProgress::replay(3, &[0, 4, 1, 8, 2]).unwrap();

    match result {
        GameResult::Finished(done) => {
            assert_eq!(done.status(), GameStatus::PlayerWon);
            assert_eq!(done.winner(), Some(Mark::Player));
            assert_eq!(done.turns(), 5);
            assert_eq!(done.board().empty_cells().count(), 4);
        }
        GameResult::InProgress(_) => panic!("row 0 is complete"),
    }
}

#[test]
fn test_computer_column_wins() {
    // Computer fills column 2 (spots 2, 5, 8).
    let result = GameInProgress::replay(3, &[0, 2, 4, 5, 7, 8]).unwrap();

    match result {
        GameResult::Finished(done) => assert_eq!(done.status(), GameStatus::ComputerWon),
        GameResult::InProgress(_) => panic!("column 2 is complete"),
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    // Final board: X O X / X O O / O X X
    let result = GameInProgress::replay(3, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();

    match result {
        GameResult::Finished(done) => {
            assert_eq!(done.status(), GameStatus::Draw);
            assert_eq!(done.winner(), None);
            assert!(done.board().is_full());
            assert_eq!(done.turns(), 9);
        }
        GameResult::InProgress(_) => panic!("board is full"),
    }
}

#[test]
fn test_one_by_one_board_first_move_wins() {
    let game = GameSetup::new(1).unwrap().start();
    match game.make_move(0).unwrap() {
        GameResult::Finished(done) => assert_eq!(done.status(), GameStatus::PlayerWon),
        GameResult::InProgress(_) => panic!("single cell is every line"),
    }
}

#[test]
fn test_zero_size_session_rejected() {
    assert_eq!(GameSetup::new(0).unwrap_err(), GameError::InvalidSize(0));
}

#[test]
fn test_restart_with_new_size() {
    let GameResult::Finished(done) = GameInProgress::replay(1, &[0]).unwrap() else {
        panic!("1x1 game ends on the first move");
    };

    let game = done.restart(4).unwrap().start();
    assert_eq!(game.board().size(), 4);
    assert_eq!(game.turn(), 0);
    assert_eq!(game.to_move(), Mark::Player);
}

#[test]
fn test_illegal_replay_surfaces_error() {
    let err = GameInProgress::replay(3, &[4, 4]).unwrap_err();
    assert_eq!(err, GameError::Occupied(4));
    assert!(err.is_illegal_move());
}
