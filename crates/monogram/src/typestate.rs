//! Phase-specific typestate structs for the match engine.
//!
//! Each phase is its own distinct type. A finished match ALWAYS has an
//! outcome, not `Option<Outcome>`, and only a live match accepts
//! placements — invalid operations are unrepresentable.

use crate::action::{MatchError, Move, PlaceError, StartError};
use crate::contracts::{Contract, PlaceContract};
use crate::monogram::Monogram;
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Seat, Square};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// ─────────────────────────────────────────────────────────────
//  Players
// ─────────────────────────────────────────────────────────────

/// Per-seat player state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    name: String,
    monogram: Monogram,
    cursor: usize,
}

impl PlayerState {
    fn new(seat: Seat, name: &str) -> Result<Self, StartError> {
        let monogram = Monogram::from_name(name).ok_or(StartError::BlankName(seat))?;
        Ok(Self {
            name: name.trim().to_string(),
            monogram,
            cursor: 0,
        })
    }

    /// The display name entered at the start of the match.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The monogram derived from the name.
    pub fn monogram(&self) -> &Monogram {
        &self.monogram
    }

    /// Number of glyphs this player has placed.
    ///
    /// The next glyph is `monogram[cursor mod len]`; the cursor only ever
    /// increases during a match.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn next_glyph(&self) -> char {
        self.monogram.glyph_at(self.cursor)
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }
}

/// Both seats' players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    a: PlayerState,
    b: PlayerState,
}

impl Players {
    /// Returns the player at the given seat.
    pub fn seat(&self, seat: Seat) -> &PlayerState {
        match seat {
            Seat::A => &self.a,
            Seat::B => &self.b,
        }
    }

    fn seat_mut(&mut self, seat: Seat) -> &mut PlayerState {
        match seat {
            Seat::A => &mut self.a,
            Seat::B => &mut self.b,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Match before names are entered.
///
/// The board is always empty. No players, no history, no outcome.
#[derive(Debug, Clone)]
pub struct MatchSetup {
    board: Board,
}

impl MatchSetup {
    /// Creates a new match in the setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the (empty) board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the match, deriving both monograms (consumes setup, returns
    /// the live match).
    ///
    /// Seat A takes the first turn.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::BlankName`] when either name is empty or
    /// whitespace-only — the single validation condition in the engine.
    #[instrument(skip(self))]
    pub fn start(self, name_a: &str, name_b: &str) -> Result<MatchInProgress, StartError> {
        let players = Players {
            a: PlayerState::new(Seat::A, name_a)?,
            b: PlayerState::new(Seat::B, name_b)?,
        };

        info!(
            monogram_a = players.a.monogram().as_str(),
            monogram_b = players.b.monogram().as_str(),
            "Match started"
        );

        Ok(MatchInProgress {
            board: self.board,
            players,
            to_move: Seat::A,
            history: Vec::new(),
        })
    }
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Live match — can accept placements.
#[derive(Debug, Clone)]
pub struct MatchInProgress {
    pub(crate) board: Board,
    pub(crate) players: Players,
    pub(crate) to_move: Seat,
    pub(crate) history: Vec<Move>,
}

impl MatchInProgress {
    /// Places the acting seat's next glyph, consuming self and transitioning
    /// to the next state.
    ///
    /// The glyph is computed from the acting player's monogram and turn
    /// cursor. The cell and its ownership are written together, the cursor
    /// advances, and the win rule is evaluated for the acting seat only.
    /// The draw rule runs strictly after the win rule, so a move that fills
    /// the last cell and completes an arrangement reports the win.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::CellOccupied`] if the cell is taken. Callers
    /// that want the observed click-is-ignored behavior simply discard the
    /// error and keep the previous state.
    #[instrument(skip(self), fields(seat = %self.to_move))]
    pub fn place(self, position: Position) -> Result<MatchTransition, PlaceError> {
        // Keep the pre-state for postcondition checking.
        #[cfg(debug_assertions)]
        let before = self.clone();

        PlaceContract::pre(&self, &position)?;

        let mut game = self;
        let seat = game.to_move;
        let glyph = game.players.seat(seat).next_glyph();

        game.board.set(position, Square::Marked { glyph, owner: seat });
        game.players.seat_mut(seat).advance();
        game.history.push(Move::new(seat, position, glyph));

        // Win before draw: the last-cell move can still win.
        if let Some(cells) = rules::find_win(&game.board, seat, game.players.seat(seat).monogram())
        {
            info!(seat = %seat, ?cells, "Match won");
            return Ok(MatchTransition::Finished(MatchFinished {
                board: game.board,
                players: game.players,
                history: game.history,
                outcome: Outcome::Winner { seat, cells },
            }));
        }

        if rules::is_full(&game.board) {
            info!("Match drawn");
            return Ok(MatchTransition::Finished(MatchFinished {
                board: game.board,
                players: game.players,
                history: game.history,
                outcome: Outcome::Draw,
            }));
        }

        game.to_move = seat.opponent();

        #[cfg(debug_assertions)]
        PlaceContract::post(&before, &game)?;

        Ok(MatchTransition::InProgress(game))
    }

    /// Returns the seat whose turn it is.
    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the positions still open for placement.
    pub fn open_cells(&self) -> Vec<Position> {
        Position::open_cells(&self.board)
    }

    /// Abandons the match, returning a fresh setup.
    #[instrument(skip(self))]
    pub fn reset(self) -> MatchSetup {
        MatchSetup::new()
    }

    /// Replays a position sequence from a fresh start.
    ///
    /// Used by the phase wrapper to revalidate every move through the
    /// engine; glyphs are recomputed from the cursors, never trusted from
    /// the caller.
    #[instrument]
    pub fn replay(
        name_a: &str,
        name_b: &str,
        positions: &[Position],
    ) -> Result<MatchTransition, MatchError> {
        let mut game = MatchSetup::new().start(name_a, name_b)?;

        for &position in positions {
            match game.place(position)? {
                MatchTransition::InProgress(g) => game = g,
                MatchTransition::Finished(g) => return Ok(MatchTransition::Finished(g)),
            }
        }

        Ok(MatchTransition::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Finished match — outcome determined.
///
/// The outcome is ALWAYS present, encoding the invariant at the type level.
#[derive(Debug, Clone)]
pub struct MatchFinished {
    board: Board,
    players: Players,
    history: Vec<Move>,
    outcome: Outcome,
}

impl MatchFinished {
    /// Returns the outcome. Never an `Option` — it is guaranteed.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Resets everything, returning a fresh setup.
    #[instrument(skip(self))]
    pub fn reset(self) -> MatchSetup {
        MatchSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Type
// ─────────────────────────────────────────────────────────────

/// Result of placing a glyph — an explicit state transition.
#[derive(Debug)]
pub enum MatchTransition {
    /// Match continues with the other seat to move.
    InProgress(MatchInProgress),
    /// Match finished with a win or a draw.
    Finished(MatchFinished),
}
