//! Monogram tic-tac-toe — pure game logic.
//!
//! A two-player tic-tac-toe variant where each player's mark is a 1-3
//! letter "monogram" derived from their name, placed one character per
//! turn. A contiguous run of cells on a line wins when it spells any
//! arrangement of the acting player's monogram and every contributing cell
//! was placed by that player.
//!
//! # Architecture
//!
//! - **Monogram**: name derivation plus a cached distinct-permutation set
//! - **Rules**: win windows under ownership, draw on a full board
//! - **Engine**: typestate match phases with contract-checked placements
//! - **Wrapper**: serializable [`AnyMatch`] for frontends

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod monogram;
mod outcome;
mod position;
mod rules;
mod typestate;
mod types;
mod wrapper;

// Crate-level exports - actions and errors
pub use action::{MatchError, Move, PlaceError, StartError};

// Crate-level exports - contracts
pub use contracts::{CellIsEmpty, Contract, PlaceContract};

// Crate-level exports - invariants
pub use invariants::{
    AlternatingSeatInvariant, CursorConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MatchInvariants, MonotonicBoardInvariant,
};

// Crate-level exports - monogram derivation
pub use monogram::Monogram;

// Crate-level exports - rules
pub use rules::{find_win, is_full};

// Crate-level exports - match engine
pub use outcome::Outcome;
pub use typestate::{
    MatchFinished, MatchInProgress, MatchSetup, MatchTransition, PlayerState, Players,
};

// Crate-level exports - board types
pub use position::Position;
pub use types::{Board, Seat, Square};

// Crate-level exports - phase wrapper
pub use wrapper::AnyMatch;
