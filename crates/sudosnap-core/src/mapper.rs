use crate::consts::GRID_SIZE;
use crate::frame::{BoundingBox, ScreenPoint};

/// Map a grid cell to the screen-space point at its geometric center.
///
/// `offset` is the screen position of the captured region's origin. The
/// center is computed from the raw (non-inset) cell spacing, so a pointer
/// click lands inside the cell regardless of any classification inset.
pub fn to_screen(row: usize, col: usize, bbox: &BoundingBox, offset: ScreenPoint) -> ScreenPoint {
    let dw = (bbox.width / GRID_SIZE) as f64;
    let dh = (bbox.height / GRID_SIZE) as f64;
    ScreenPoint {
        x: bbox.x as f64 + dw * (col as f64 + 0.5) + offset.x,
        y: bbox.y as f64 + dh * (row as f64 + 0.5) + offset.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn center_of_first_cell() {
        let bbox = BoundingBox {
            x: 10,
            y: 10,
            width: 450,
            height: 450,
        };
        let offset = ScreenPoint { x: 300.0, y: 342.0 };
        let point = to_screen(0, 0, &bbox, offset);
        assert_relative_eq!(point.x, 300.0 + 10.0 + 25.0);
        assert_relative_eq!(point.y, 342.0 + 10.0 + 25.0);
    }

    #[test]
    fn every_center_lies_strictly_inside_its_raw_cell() {
        let bbox = BoundingBox {
            x: 17,
            y: 23,
            width: 451,
            height: 449,
        };
        let offset = ScreenPoint { x: 0.0, y: 0.0 };
        let dw = bbox.width / 9;
        let dh = bbox.height / 9;

        for row in 0..9 {
            for col in 0..9 {
                let p = to_screen(row, col, &bbox, offset);
                let x0 = (bbox.x + dw * col) as f64;
                let y0 = (bbox.y + dh * row) as f64;
                assert!(p.x > x0 && p.x < x0 + dw as f64, "({row},{col}) x");
                assert!(p.y > y0 && p.y < y0 + dh as f64, "({row},{col}) y");
            }
        }
    }
}
