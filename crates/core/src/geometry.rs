//! Cross-shape geometry helpers.
//!
//! Pure functions of `(row, col, arm_thickness)` with no grid state, so the
//! shape rules can be tested without building a board.
//!
//! All helpers assume a positive arm thickness; [`crate::Board`] validates
//! before calling.

/// Board side length for a given arm thickness.
///
/// Three bands of width `arm_thickness` minus the two overlaps with the
/// center block: the classic arm 3 gives the 7x7 grid.
#[inline]
pub fn board_size(arm_thickness: usize) -> usize {
    3 * arm_thickness - 2
}

/// Whether a position lies inside the square grid.
#[inline]
pub fn in_bounds(row: usize, col: usize, size: usize) -> bool {
    row < size && col < size
}

/// Whether a position belongs to the playable cross.
///
/// A cell is playable iff its row or column falls in the central band of
/// width `arm_thickness` (either arm plus the center block). Everything
/// else is one of the four corner squares outside the cross.
pub fn in_cross(row: usize, col: usize, arm_thickness: usize) -> bool {
    let size = board_size(arm_thickness);
    if !in_bounds(row, col, size) {
        return false;
    }
    let band = (arm_thickness - 1)..=(size - arm_thickness);
    band.contains(&row) || band.contains(&col)
}

/// Number of playable positions on the cross.
///
/// The full square minus the four corner blocks of side `arm_thickness - 1`.
pub fn cross_cells(arm_thickness: usize) -> usize {
    let size = board_size(arm_thickness);
    let corner = arm_thickness - 1;
    size * size - 4 * corner * corner
}
