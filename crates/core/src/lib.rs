//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the board model and all of its rules. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: board state is a pure function of the constructor
//!   parameters and the moves applied so far
//! - **Testable**: every rule is observable through the public API
//! - **Portable**: usable from a terminal front end or a headless harness
//!
//! # Module Structure
//!
//! - [`geometry`]: stateless shape predicates over `(row, col, arm_thickness)`
//! - [`board`]: the grid, move legality, scoring, and termination
//! - [`error`]: typed failures for construction, queries, and moves
//!
//! # Game Rules
//!
//! The board is a cross of side `3 * arm_thickness - 2` with every playable
//! position holding a marble except one designated empty slot. A move jumps
//! a marble one step diagonally onto an empty slot and captures the marble
//! at the integer midpoint of the two endpoints. The game is over when no
//! marble has a legal jump left.
//!
//! The diagonal single-step jump (rather than the orthogonal two-step jump
//! of traditional peg solitaire) is the contract this model implements; see
//! [`Board::make_move`] for the exact legality checks and the midpoint
//! consequences.
//!
//! # Example
//!
//! ```
//! use marble_solitaire_core::Board;
//!
//! let mut board = Board::new();
//! assert_eq!(board.size(), 7);
//! assert_eq!(board.score(), 32);
//!
//! // Jump up-right onto the center, capturing the marble in the corner
//! // between the endpoints.
//! board.make_move(2, 4, 3, 3).unwrap();
//! assert_eq!(board.score(), 31);
//! ```

pub mod board;
pub mod error;
pub mod geometry;

pub use marble_solitaire_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{ConfigError, MoveError, OutOfBounds};
