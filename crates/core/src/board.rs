//! Board module - the cross-shaped grid and its rules.
//!
//! Uses flat row-major storage (index = row * size + col) for cache locality.
//! The grid is fully populated at construction time and only `make_move`
//! mutates it afterwards; no position ever changes its playable/invalid
//! classification.

use arrayvec::ArrayVec;

use crate::error::{ConfigError, MoveError, OutOfBounds};
use crate::geometry::{board_size, in_cross};
use marble_solitaire_types::{Slot, DEFAULT_ARM_THICKNESS};

/// The four diagonal jump offsets, as (row, col) deltas.
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A peg-solitaire board: a square grid of [`Slot`]s forming a cross.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    arm_thickness: usize,
    size: usize,
    slots: Vec<Slot>,
}

impl Board {
    /// The classic board: arm thickness 3, empty slot at the center.
    pub fn new() -> Self {
        let center = board_size(DEFAULT_ARM_THICKNESS) / 2;
        Self::build(DEFAULT_ARM_THICKNESS, center, center)
    }

    /// A board with the given arm thickness and the empty slot at the center.
    ///
    /// Fails with [`ConfigError::ArmThickness`] unless `arm_thickness` is a
    /// positive odd number.
    pub fn with_arm_thickness(arm_thickness: usize) -> Result<Self, ConfigError> {
        Self::check_arm(arm_thickness)?;
        let center = board_size(arm_thickness) / 2;
        Ok(Self::build(arm_thickness, center, center))
    }

    /// A board with the given arm thickness and empty slot position.
    ///
    /// The empty slot must be a playable cross position; the four corner
    /// squares and anything off the grid are rejected with
    /// [`ConfigError::EmptySlot`].
    pub fn with_start(
        arm_thickness: usize,
        empty_row: usize,
        empty_col: usize,
    ) -> Result<Self, ConfigError> {
        Self::check_arm(arm_thickness)?;
        if !in_cross(empty_row, empty_col, arm_thickness) {
            return Err(ConfigError::EmptySlot {
                row: empty_row,
                col: empty_col,
            });
        }
        Ok(Self::build(arm_thickness, empty_row, empty_col))
    }

    fn check_arm(arm_thickness: usize) -> Result<(), ConfigError> {
        if arm_thickness == 0 || arm_thickness % 2 == 0 {
            return Err(ConfigError::ArmThickness(arm_thickness));
        }
        // The whole grid must stay addressable: reject arms whose size (or
        // cell count) overflows usize before any allocation is attempted.
        arm_thickness
            .checked_mul(3)
            .and_then(|n| n.checked_sub(2))
            .and_then(|size| size.checked_mul(size))
            .ok_or(ConfigError::ArmThickness(arm_thickness))?;
        Ok(())
    }

    // Callers have already validated the parameters.
    fn build(arm_thickness: usize, empty_row: usize, empty_col: usize) -> Self {
        let size = board_size(arm_thickness);
        let mut slots = vec![Slot::Invalid; size * size];
        for row in 0..size {
            for col in 0..size {
                if in_cross(row, col, arm_thickness) {
                    slots[row * size + col] = if (row, col) == (empty_row, empty_col) {
                        Slot::Empty
                    } else {
                        Slot::Marble
                    };
                }
            }
        }
        Self {
            arm_thickness,
            size,
            slots,
        }
    }

    /// Calculate flat index from (row, col); bounds are the caller's problem.
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    fn slot(&self, row: usize, col: usize) -> Slot {
        self.slots[self.index(row, col)]
    }

    /// Side length of the square grid (`3 * arm_thickness - 2`).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Arm thickness this board was built with.
    pub fn arm_thickness(&self) -> usize {
        self.arm_thickness
    }

    /// Slot at `(row, col)`.
    ///
    /// Fails with [`OutOfBounds`] if either axis leaves `[0, size)`. Never
    /// mutates state.
    pub fn slot_at(&self, row: usize, col: usize) -> Result<Slot, OutOfBounds> {
        if row >= self.size || col >= self.size {
            return Err(OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.slot(row, col))
    }

    /// Whether `(row, col)` lies on the playable cross.
    pub fn is_playable(&self, row: usize, col: usize) -> bool {
        in_cross(row, col, self.arm_thickness)
    }

    /// Number of marbles still on the board.
    pub fn score(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_marble()).count()
    }

    /// Flat view of the grid, row-major.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Validate a jump without touching the grid.
    ///
    /// Returns the captured position on success. Checks run in a fixed
    /// order and the first failure wins, so callers get the most specific
    /// rejection.
    fn check_move(
        &self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> Result<(usize, usize), MoveError> {
        if !self.is_playable(from_row, from_col) {
            return Err(MoveError::NotPlayable {
                row: from_row,
                col: from_col,
            });
        }
        if !self.is_playable(to_row, to_col) {
            return Err(MoveError::NotPlayable {
                row: to_row,
                col: to_col,
            });
        }
        if from_row.abs_diff(to_row) != 1 || from_col.abs_diff(to_col) != 1 {
            return Err(MoveError::NotDiagonal);
        }
        if !self.slot(from_row, from_col).is_marble() {
            return Err(MoveError::SourceNotMarble);
        }
        if !self.slot(to_row, to_col).is_empty() {
            return Err(MoveError::DestinationNotEmpty);
        }
        // Integer midpoint of the endpoints. For a diagonal step this floors
        // onto the orthogonal corner between them when the deltas disagree in
        // sign, and onto one of the endpoints when they agree: the source for
        // a down-right jump (which then captures itself) and the destination
        // for an up-left jump (which can never pass the marble check below).
        let cap_row = (from_row + to_row) / 2;
        let cap_col = (from_col + to_col) / 2;
        if !self.is_playable(cap_row, cap_col) || !self.slot(cap_row, cap_col).is_marble() {
            return Err(MoveError::NothingToCapture);
        }
        Ok((cap_row, cap_col))
    }

    /// Jump a marble one step diagonally onto an empty slot, capturing the
    /// marble at the integer midpoint of the endpoints.
    ///
    /// All legality checks run before any cell is written, so a rejected
    /// move leaves the board exactly as it was.
    pub fn make_move(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> Result<(), MoveError> {
        let (cap_row, cap_col) = self.check_move(from_row, from_col, to_row, to_col)?;
        let from = self.index(from_row, from_col);
        let to = self.index(to_row, to_col);
        let cap = self.index(cap_row, cap_col);
        self.slots[from] = Slot::Empty;
        self.slots[to] = Slot::Marble;
        self.slots[cap] = Slot::Empty;
        Ok(())
    }

    /// Destinations reachable by a legal jump from `(row, col)`.
    ///
    /// At most the four diagonal neighbours; allocation-free.
    pub fn legal_moves_from(&self, row: usize, col: usize) -> ArrayVec<(usize, usize), 4> {
        let mut moves = ArrayVec::new();
        for (d_row, d_col) in DIAGONALS {
            let Some(to_row) = row.checked_add_signed(d_row) else {
                continue;
            };
            let Some(to_col) = col.checked_add_signed(d_col) else {
                continue;
            };
            if self.check_move(row, col, to_row, to_col).is_ok() {
                moves.push((to_row, to_col));
            }
        }
        moves
    }

    /// True when no marble on the board has a legal jump left.
    ///
    /// Runs the full move-legality predicate over every marble and all four
    /// diagonals, so the answer agrees exactly with what [`Board::make_move`]
    /// would accept.
    pub fn is_game_over(&self) -> bool {
        for row in 0..self.size {
            for col in 0..self.size {
                if self.slot(row, col).is_marble() && !self.legal_moves_from(row, col).is_empty() {
                    return false;
                }
            }
        }
        true
    }

    /// Overwrite a single slot to set up positions in tests.
    #[cfg(test)]
    pub(crate) fn set_slot(&mut self, row: usize, col: usize, slot: Slot) {
        let idx = self.index(row, col);
        self.slots[idx] = slot;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
