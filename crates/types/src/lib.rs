//! Shared types module - plain data used across the workspace
//!
//! Pure data structures with no external dependencies, usable from the core
//! model, the text view, and the controller alike.
//!
//! # Board Dimensions
//!
//! The classic English board has arm thickness 3, giving a 7x7 grid with 33
//! playable positions arranged in a cross:
//!
//! ```text
//!     O O O
//!     O O O
//! O O O O O O O
//! O O O _ O O O
//! O O O O O O O
//!     O O O
//!     O O O
//! ```
//!
//! # Examples
//!
//! ```
//! use marble_solitaire_types::{Slot, DEFAULT_ARM_THICKNESS};
//!
//! assert_eq!(DEFAULT_ARM_THICKNESS, 3);
//! assert_eq!(Slot::Marble.as_char(), 'O');
//! assert_eq!(Slot::from_char('_'), Some(Slot::Empty));
//! ```

/// Arm thickness of the classic English cross board.
pub const DEFAULT_ARM_THICKNESS: usize = 3;

/// State of a single position on the board.
///
/// `Invalid` marks positions outside the cross shape. They never hold a
/// marble and are never a legal jump target; only `Empty` is. Keeping the
/// distinction in the type (rather than collapsing both into "no marble")
/// is what lets the rules reject jumps off the playable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A playable position currently holding a marble.
    Marble,
    /// A playable position with no marble in it.
    Empty,
    /// A position outside the cross shape.
    Invalid,
}

impl Slot {
    /// Single-character representation used by the text view.
    ///
    /// # Examples
    ///
    /// ```
    /// use marble_solitaire_types::Slot;
    ///
    /// assert_eq!(Slot::Marble.as_char(), 'O');
    /// assert_eq!(Slot::Empty.as_char(), '_');
    /// assert_eq!(Slot::Invalid.as_char(), ' ');
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            Slot::Marble => 'O',
            Slot::Empty => '_',
            Slot::Invalid => ' ',
        }
    }

    /// Parse a slot from its rendered character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(Slot::Marble),
            '_' => Some(Slot::Empty),
            ' ' => Some(Slot::Invalid),
            _ => None,
        }
    }

    /// Whether this slot holds a marble.
    pub fn is_marble(&self) -> bool {
        matches!(self, Slot::Marble)
    }

    /// Whether this slot is a playable position with no marble.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Whether this slot belongs to the playable cross at all.
    pub fn is_playable(&self) -> bool {
        !matches!(self, Slot::Invalid)
    }
}
