//! Board tests - model behavior through the public facade

use marble_solitaire::core::{Board, ConfigError, MoveError, OutOfBounds};
use marble_solitaire::types::Slot;

#[test]
fn test_board_size_derives_from_arm_thickness() {
    for arm in [1usize, 3, 5, 7] {
        let board = Board::with_arm_thickness(arm).unwrap();
        assert_eq!(board.size(), 3 * arm - 2);
        assert_eq!(board.arm_thickness(), arm);
    }
    // the classic cross is 7x7
    assert_eq!(Board::new().size(), 7);
}

#[test]
fn test_default_board_scores_32() {
    let board = Board::new();
    assert_eq!(board.size(), 7);
    assert_eq!(board.score(), 32);
    assert_eq!(board.slot_at(3, 3), Ok(Slot::Empty));
}

#[test]
fn test_even_arm_thickness_is_rejected() {
    assert_eq!(
        Board::with_arm_thickness(4),
        Err(ConfigError::ArmThickness(4))
    );
    assert_eq!(
        Board::with_arm_thickness(0),
        Err(ConfigError::ArmThickness(0))
    );
}

#[test]
fn test_empty_slot_must_be_on_the_cross() {
    assert_eq!(
        Board::with_start(3, 1, 1),
        Err(ConfigError::EmptySlot { row: 1, col: 1 })
    );
    let board = Board::with_start(3, 1, 2).unwrap();
    assert_eq!(board.slot_at(1, 2), Ok(Slot::Empty));
    assert_eq!(board.score(), 32);
}

#[test]
fn test_slot_at_out_of_bounds_on_either_axis() {
    let board = Board::new();
    assert!(board.slot_at(6, 6).is_ok());
    assert_eq!(
        board.slot_at(7, 3),
        Err(OutOfBounds {
            row: 7,
            col: 3,
            size: 7
        })
    );
    assert_eq!(
        board.slot_at(3, 7),
        Err(OutOfBounds {
            row: 3,
            col: 7,
            size: 7
        })
    );
    assert_eq!(
        board.slot_at(usize::MAX, 0),
        Err(OutOfBounds {
            row: usize::MAX,
            col: 0,
            size: 7
        })
    );
}

#[test]
fn test_legal_jump_full_grid_diff() {
    let mut board = Board::new();
    let before = board.clone();

    board.make_move(2, 4, 3, 3).unwrap();
    assert_eq!(board.score(), 31);

    let mut changed = Vec::new();
    for row in 0..7 {
        for col in 0..7 {
            let old = before.slot_at(row, col).unwrap();
            let new = board.slot_at(row, col).unwrap();
            if old != new {
                changed.push(((row, col), old, new));
            }
        }
    }
    assert_eq!(
        changed,
        vec![
            ((2, 3), Slot::Marble, Slot::Empty),
            ((2, 4), Slot::Marble, Slot::Empty),
            ((3, 3), Slot::Empty, Slot::Marble),
        ]
    );
}

#[test]
fn test_rejected_moves_leave_board_intact() {
    let mut board = Board::new();
    let before = board.clone();

    let rejections = [
        ((0, 0), (1, 1), MoveError::NotPlayable { row: 0, col: 0 }),
        ((3, 1), (3, 3), MoveError::NotDiagonal),
        ((3, 3), (2, 2), MoveError::SourceNotMarble),
        ((1, 2), (2, 3), MoveError::DestinationNotEmpty),
        ((4, 4), (3, 3), MoveError::NothingToCapture),
    ];
    for (from, to, expected) in rejections {
        assert_eq!(board.make_move(from.0, from.1, to.0, to.1), Err(expected));
        assert_eq!(board, before, "board changed after rejected {from:?}->{to:?}");
    }
}

#[test]
fn test_consumed_source_cannot_move_again() {
    let mut board = Board::new();
    board.make_move(2, 4, 3, 3).unwrap();
    assert_eq!(board.score(), 31);
    // (2, 4) is empty now; jumping from it again is rejected with the board
    // left as the first move produced it
    assert_eq!(board.make_move(2, 4, 1, 3), Err(MoveError::SourceNotMarble));
    assert_eq!(board.score(), 31);
}

#[test]
fn test_game_not_over_while_jumps_remain() {
    let board = Board::new();
    assert!(!board.is_game_over());
    assert_eq!(board.legal_moves_from(2, 4).as_slice(), &[(3, 3)]);
}
