//! Integration tests for the typestate match engine.

use monogram::{
    MatchError, MatchInProgress, MatchSetup, MatchTransition, Outcome, PlaceError, Position, Seat,
    StartError,
};

#[test]
fn test_lifecycle() {
    // Setup phase
    let game = MatchSetup::new();
    assert!(game.board().squares().iter().all(|s| s.owner().is_none()));

    // Start match
    let game = game.start("Ann Lee", "Bob").expect("valid names");
    assert_eq!(game.to_move(), Seat::A);
    assert_eq!(game.players().seat(Seat::A).monogram().as_str(), "AL");
    assert_eq!(game.players().seat(Seat::B).monogram().as_str(), "BOB");

    // First placement: seat A stamps 'A'
    let result = game.place(Position::Center).expect("valid placement");
    let game = match result {
        MatchTransition::InProgress(g) => g,
        MatchTransition::Finished(_) => panic!("Match shouldn't finish after one move"),
    };

    assert_eq!(game.to_move(), Seat::B);
    assert_eq!(game.board().get(Position::Center).glyph(), Some('A'));
    assert_eq!(game.board().get(Position::Center).owner(), Some(Seat::A));
    assert_eq!(game.players().seat(Seat::A).cursor(), 1);
}

#[test]
fn test_blank_names_cannot_start() {
    let result = MatchSetup::new().start("", "Bob");
    assert_eq!(result.unwrap_err(), StartError::BlankName(Seat::A));

    let result = MatchSetup::new().start("Ann Lee", "   ");
    assert_eq!(result.unwrap_err(), StartError::BlankName(Seat::B));
}

#[test]
fn test_occupied_cell_rejected() {
    let game = MatchSetup::new().start("Ann Lee", "Bob").unwrap();

    let game = match game.place(Position::Center).unwrap() {
        MatchTransition::InProgress(g) => g,
        MatchTransition::Finished(_) => panic!("Unexpected finish"),
    };

    // Seat B tries the same cell
    let result = game.place(Position::Center);
    assert!(matches!(
        result,
        Err(PlaceError::CellOccupied(Position::Center))
    ));
}

#[test]
fn test_adjacent_pair_wins_for_two_letter_monogram() {
    // A stamps 'A' top-left, B stamps 'B' bottom-center, A stamps 'L'
    // top-center: the window reads "AL" with both cells owned by A.
    let positions = [Position::TopLeft, Position::BottomCenter, Position::TopCenter];

    let result = MatchInProgress::replay("Ann Lee", "Bob", &positions).expect("valid replay");

    match result {
        MatchTransition::Finished(game) => {
            assert_eq!(
                game.outcome(),
                &Outcome::Winner {
                    seat: Seat::A,
                    cells: vec![Position::TopLeft, Position::TopCenter],
                }
            );
            assert_eq!(game.players().seat(Seat::A).name(), "Ann Lee");
        }
        MatchTransition::InProgress(_) => panic!("Match should be finished"),
    }
}

#[test]
fn test_full_board_without_ownership_line_is_draw() {
    // Both monograms are three letters, so only whole-line windows count.
    // Seats interleave so no line is ever owned by a single seat: no window
    // can match under ownership, and the board fills on the ninth move.
    let positions = [
        Position::TopLeft,      // A: Z
        Position::TopCenter,    // B: X
        Position::TopRight,     // A: I
        Position::MiddleLeft,   // B: A
        Position::Center,       // A: Z
        Position::BottomLeft,   // B: V
        Position::MiddleRight,  // A: Z
        Position::BottomRight,  // B: X
        Position::BottomCenter, // A: I
    ];

    let result = MatchInProgress::replay("Zizi", "Xavier", &positions).expect("valid replay");

    match result {
        MatchTransition::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Draw);
            assert!(game.board().is_full());
        }
        MatchTransition::InProgress(_) => panic!("Match should be finished"),
    }
}

#[test]
fn test_last_cell_win_reports_won_not_draw() {
    // Seat A takes the corners and finishes in the center; seat B takes the
    // edges. The ninth move fills the board AND completes "AL" on the
    // [top-left, center, bottom-right] diagonal — the win must be reported.
    let positions = [
        Position::TopLeft,      // A: A
        Position::TopCenter,    // B: B
        Position::BottomRight,  // A: L
        Position::MiddleLeft,   // B: O
        Position::TopRight,     // A: A
        Position::MiddleRight,  // B: B
        Position::BottomLeft,   // A: L
        Position::BottomCenter, // B: B
        Position::Center,       // A: A — fills the board and wins
    ];

    let result = MatchInProgress::replay("Ann Lee", "Bob", &positions).expect("valid replay");

    match result {
        MatchTransition::Finished(game) => {
            assert!(game.board().is_full());
            assert_eq!(
                game.outcome(),
                &Outcome::Winner {
                    seat: Seat::A,
                    cells: vec![Position::Center, Position::BottomRight],
                }
            );
        }
        MatchTransition::InProgress(_) => panic!("Match should be finished"),
    }
}

#[test]
fn test_replay_stops_at_conclusion() {
    // Positions after the winning move are ignored, mirroring the engine's
    // refusal to accept placements on a finished match.
    let positions = [
        Position::TopLeft,
        Position::BottomCenter,
        Position::TopCenter,
        Position::BottomRight, // after the win; never applied
    ];

    let result = MatchInProgress::replay("Ann Lee", "Bob", &positions).expect("valid replay");

    match result {
        MatchTransition::Finished(game) => {
            assert_eq!(game.history().len(), 3);
            assert!(game.board().is_empty(Position::BottomRight));
        }
        MatchTransition::InProgress(_) => panic!("Match should be finished"),
    }
}

#[test]
fn test_replay_rejects_blank_names() {
    let result = MatchInProgress::replay(" ", "Bob", &[]);
    assert!(matches!(
        result,
        Err(MatchError::Start(StartError::BlankName(Seat::A)))
    ));
}

#[test]
fn test_reset_clears_everything() {
    let positions = [Position::TopLeft, Position::BottomCenter, Position::TopCenter];

    let game = match MatchInProgress::replay("Ann Lee", "Bob", &positions).unwrap() {
        MatchTransition::Finished(g) => g,
        MatchTransition::InProgress(_) => panic!("Match should be finished"),
    };

    let fresh = game.reset();
    assert!(fresh.board().is_empty(Position::TopLeft));

    // A reset match starts over with new names and zeroed cursors.
    let game = fresh.start("Cara", "Dee").unwrap();
    assert_eq!(game.players().seat(Seat::A).monogram().as_str(), "CAR");
    assert_eq!(game.players().seat(Seat::A).cursor(), 0);
    assert!(game.history().is_empty());
}

#[test]
fn test_reset_from_live_match() {
    let game = MatchSetup::new().start("Ann Lee", "Bob").unwrap();
    let game = match game.place(Position::Center).unwrap() {
        MatchTransition::InProgress(g) => g,
        MatchTransition::Finished(_) => panic!("Unexpected finish"),
    };

    let fresh = game.reset();
    assert!(fresh.board().is_empty(Position::Center));
}

#[test]
fn test_single_letter_monograms_play_out() {
    // One-letter monograms win on the very first placement: any owned cell
    // is a full window.
    let result = MatchInProgress::replay("Q", "Zed", &[Position::Center]).expect("valid replay");

    match result {
        MatchTransition::Finished(game) => {
            assert_eq!(
                game.outcome(),
                &Outcome::Winner {
                    seat: Seat::A,
                    cells: vec![Position::Center],
                }
            );
        }
        MatchTransition::InProgress(_) => panic!("Match should be finished"),
    }
}
