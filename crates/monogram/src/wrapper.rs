//! Serializable match wrapper for typestate phases.

use crate::action::{MatchError, Move};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::types::{Board, Seat};
use crate::typestate::{MatchFinished, MatchInProgress, MatchSetup, MatchTransition, Players};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Wrapper for a match in any phase.
///
/// Typestate phases can't be held in a single field or serialized directly,
/// so frontends carry this enum instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnyMatch {
    /// Match in setup phase — no players yet.
    Setup {
        /// The (empty) board.
        board: Board,
    },
    /// Match in progress.
    InProgress {
        /// The board state.
        board: Board,
        /// Both players.
        players: Players,
        /// Seat whose turn it is.
        to_move: Seat,
        /// Accepted placements, in order.
        history: Vec<Move>,
    },
    /// Match finished with a win or a draw.
    Finished {
        /// The board state.
        board: Board,
        /// Both players.
        players: Players,
        /// The outcome.
        outcome: Outcome,
        /// Accepted placements, in order.
        history: Vec<Move>,
    },
}

impl From<MatchSetup> for AnyMatch {
    fn from(game: MatchSetup) -> Self {
        AnyMatch::Setup {
            board: game.board().clone(),
        }
    }
}

impl From<MatchInProgress> for AnyMatch {
    fn from(game: MatchInProgress) -> Self {
        AnyMatch::InProgress {
            board: game.board().clone(),
            players: game.players().clone(),
            to_move: game.to_move(),
            history: game.history().to_vec(),
        }
    }
}

impl From<MatchFinished> for AnyMatch {
    fn from(game: MatchFinished) -> Self {
        AnyMatch::Finished {
            board: game.board().clone(),
            players: game.players().clone(),
            outcome: game.outcome().clone(),
            history: game.history().to_vec(),
        }
    }
}

impl From<MatchTransition> for AnyMatch {
    fn from(transition: MatchTransition) -> Self {
        match transition {
            MatchTransition::InProgress(g) => g.into(),
            MatchTransition::Finished(g) => g.into(),
        }
    }
}

impl AnyMatch {
    /// Returns the board for any phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyMatch::Setup { board } => board,
            AnyMatch::InProgress { board, .. } => board,
            AnyMatch::Finished { board, .. } => board,
        }
    }

    /// Returns both players, if the match has started.
    pub fn players(&self) -> Option<&Players> {
        match self {
            AnyMatch::Setup { .. } => None,
            AnyMatch::InProgress { players, .. } => Some(players),
            AnyMatch::Finished { players, .. } => Some(players),
        }
    }

    /// Returns true if the match has concluded.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyMatch::Finished { .. })
    }

    /// Returns the seat to move, if the match is in progress.
    pub fn to_move(&self) -> Option<Seat> {
        match self {
            AnyMatch::InProgress { to_move, .. } => Some(*to_move),
            _ => None,
        }
    }

    /// Returns the winning seat, if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            AnyMatch::Finished { outcome, .. } => outcome.winner(),
            _ => None,
        }
    }

    /// Returns the winning cells, empty unless the match was won.
    pub fn winning_cells(&self) -> &[Position] {
        match self {
            AnyMatch::Finished { outcome, .. } => outcome.winning_cells(),
            _ => &[],
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyMatch::Setup { .. } => "Waiting for players".to_string(),
            AnyMatch::InProgress {
                players, to_move, ..
            } => {
                format!("Turn: {}", players.seat(*to_move).name())
            }
            AnyMatch::Finished {
                players, outcome, ..
            } => match outcome {
                Outcome::Winner { seat, .. } => {
                    format!("{} wins!", players.seat(*seat).name())
                }
                Outcome::Draw => "It's a draw!".to_string(),
            },
        }
    }

    /// Applies a placement, revalidating the whole match through the
    /// typestate engine.
    ///
    /// The stored position history plus the new position are replayed from a
    /// fresh start, so every glyph and transition is recomputed by the
    /// engine rather than trusted from this snapshot.
    #[instrument(skip(self))]
    pub fn place(self, position: Position) -> Result<Self, MatchError> {
        match self {
            AnyMatch::InProgress {
                players, history, ..
            } => {
                let mut positions: Vec<Position> =
                    history.iter().map(|m| m.position).collect();
                positions.push(position);

                debug!(
                    move_count = positions.len(),
                    "Replaying placements through the engine"
                );

                let name_a = players.seat(Seat::A).name().to_string();
                let name_b = players.seat(Seat::B).name().to_string();

                match MatchInProgress::replay(&name_a, &name_b, &positions) {
                    Ok(transition) => Ok(transition.into()),
                    Err(e) => {
                        warn!(error = %e, "Placement rejected");
                        Err(e)
                    }
                }
            }
            AnyMatch::Setup { .. } => Err(MatchError::NotStarted),
            AnyMatch::Finished { .. } => Err(MatchError::MatchOver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::PlaceError;

    fn started() -> AnyMatch {
        MatchSetup::new()
            .start("Ann Lee", "Bob")
            .expect("valid names")
            .into()
    }

    #[test]
    fn test_place_advances_turn() {
        let game = started();
        assert_eq!(game.to_move(), Some(Seat::A));

        let game = game.place(Position::Center).unwrap();
        assert_eq!(game.to_move(), Some(Seat::B));
        assert_eq!(game.status_string(), "Turn: Bob");
    }

    #[test]
    fn test_place_on_occupied_cell_is_rejected() {
        let game = started().place(Position::Center).unwrap();

        let result = game.place(Position::Center);
        assert!(matches!(
            result,
            Err(MatchError::Place(PlaceError::CellOccupied(Position::Center)))
        ));
    }

    #[test]
    fn test_place_after_conclusion_is_rejected() {
        // A: 'A' at top-left, B: 'B' at bottom-left, A: 'L' at top-center.
        // "AL" in line order on the top row ends the match.
        let game = started()
            .place(Position::TopLeft)
            .unwrap()
            .place(Position::BottomLeft)
            .unwrap()
            .place(Position::TopCenter)
            .unwrap();

        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Seat::A));

        let result = game.place(Position::BottomRight);
        assert!(matches!(result, Err(MatchError::MatchOver)));
    }

    #[test]
    fn test_place_before_start_is_rejected() {
        let game: AnyMatch = MatchSetup::new().into();
        assert!(matches!(
            game.place(Position::Center),
            Err(MatchError::NotStarted)
        ));
    }

    #[test]
    fn test_serialization_round_trip() {
        let game = started().place(Position::Center).unwrap();

        let json = serde_json::to_string(&game).expect("serialize");
        let restored: AnyMatch = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(restored.to_move(), Some(Seat::B));
        assert_eq!(restored.board(), game.board());
    }
}
