mod common;

use ndarray::Array2;

use sudosnap_core::board::{locate, locate_masked};
use sudosnap_core::error::SudosnapError;
use sudosnap_core::frame::BoundingBox;

use common::{binary_board, draw_block, draw_digit_blob, draw_outline};

#[test]
fn empty_image_reports_no_board() {
    let mask = Array2::from_elem((100, 100), false);
    assert!(matches!(locate(&mask), Err(SudosnapError::NoBoardFound)));
}

#[test]
fn board_border_yields_tight_bounding_box() {
    let mask = binary_board(550);
    let bbox = locate(&mask).unwrap();
    assert_eq!(
        bbox,
        BoundingBox {
            x: 0,
            y: 0,
            width: 450,
            height: 450,
        }
    );
}

#[test]
fn hollow_border_outranks_denser_solid_blob() {
    // The blob has more ink pixels (900 vs ~400) but encloses far less
    // area than the outline, so the outline must win.
    let mut mask = Array2::from_elem((300, 300), false);
    draw_outline(&mut mask, 10, 10, 100, 100);
    draw_block(&mut mask, 200, 200, 30, 30);

    let bbox = locate(&mask).unwrap();
    assert_eq!(
        bbox,
        BoundingBox {
            x: 10,
            y: 10,
            width: 100,
            height: 100,
        }
    );
}

#[test]
fn offset_board_keeps_image_coordinates() {
    let mut mask = Array2::from_elem((550, 550), false);
    draw_outline(&mut mask, 60, 40, 450, 450);
    let bbox = locate(&mask).unwrap();
    assert_eq!(bbox.x, 60);
    assert_eq!(bbox.y, 40);
}

#[test]
fn masking_erases_outside_clutter_and_keeps_digits() {
    let mut mask = Array2::from_elem((550, 550), false);
    draw_outline(&mut mask, 50, 50, 450, 450);
    // Digit ink inside cell (2, 3) of the located board.
    draw_digit_blob(&mut mask, 50, 50, 2, 3);
    // Clutter outside the board.
    draw_block(&mut mask, 5, 5, 15, 15);
    draw_block(&mut mask, 520, 300, 10, 10);

    let (bbox, cleaned) = locate_masked(&mask).unwrap();
    assert_eq!(bbox.x, 50);
    assert_eq!(bbox.width, 450);

    // Clutter gone.
    assert!(!cleaned[[10, 10]]);
    assert!(!cleaned[[305, 525]]);
    // Border and digit ink survive.
    assert!(cleaned[[50, 50]]);
    assert!(cleaned[[50 + 2 * 50 + 25, 50 + 3 * 50 + 25]]);
}

#[test]
fn masking_without_clutter_is_a_no_op_inside_the_board() {
    let mut mask = Array2::from_elem((550, 550), false);
    draw_outline(&mut mask, 0, 0, 450, 450);
    draw_digit_blob(&mut mask, 0, 0, 0, 0);

    let (_, cleaned) = locate_masked(&mask).unwrap();
    assert_eq!(mask, cleaned);
}
