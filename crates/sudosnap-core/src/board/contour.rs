use ndarray::Array2;

/// A closed boundary of a connected foreground region, as an ordered
/// sequence of (col, row) pixel coordinates.
#[derive(Clone, Debug)]
pub struct Contour {
    pub points: Vec<(usize, usize)>,
}

impl Contour {
    /// Enclosed area via the shoelace formula. Comparable across contours;
    /// a hollow border scores the full area its outer boundary encloses.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice_area: i64 = 0;
        for i in 0..n {
            let (x0, y0) = self.points[i];
            let (x1, y1) = self.points[(i + 1) % n];
            twice_area += x0 as i64 * y1 as i64 - x1 as i64 * y0 as i64;
        }
        twice_area.abs() as f64 / 2.0
    }

    /// Tight axis-aligned bounds as (min_col, min_row, max_col, max_row).
    pub fn bounds(&self) -> (usize, usize, usize, usize) {
        let mut min_col = usize::MAX;
        let mut min_row = usize::MAX;
        let mut max_col = 0;
        let mut max_row = 0;
        for &(col, row) in &self.points {
            min_col = min_col.min(col);
            min_row = min_row.min(row);
            max_col = max_col.max(col);
            max_row = max_row.max(row);
        }
        (min_col, min_row, max_col, max_row)
    }
}

/// Neighbor offsets (dcol, drow) in clockwise order starting West.
const MOORE_DIRS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

/// Trace the outer boundary of the component identified by `label`, using
/// Moore-neighbor tracing with a clockwise scan.
///
/// `seed` must be the component's first pixel in scan order, so that its
/// west and north neighbors are background.
pub fn trace_boundary(labels: &Array2<u32>, label: u32, seed: (usize, usize)) -> Contour {
    let (h, w) = labels.dim();
    let in_component = |row: i32, col: i32| -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < h
            && (col as usize) < w
            && labels[[row as usize, col as usize]] == label
    };

    let start = (seed.1 as i32, seed.0 as i32); // (col, row)
    let mut points = vec![(seed.1, seed.0)];

    // Backtrack starts at the west neighbor, which is background by the
    // seed's scan-order guarantee.
    let start_backtrack = 0usize;
    let mut current = start;
    let mut backtrack_dir = start_backtrack;
    let mut first_move: Option<((i32, i32), usize)> = None;

    let max_steps = 4 * h * w + 4;
    for _ in 0..max_steps {
        // Scan clockwise from the cell after the backtrack.
        let mut found = None;
        for offset in 1..=8 {
            let dir = (backtrack_dir + offset) % 8;
            let (dc, dr) = MOORE_DIRS[dir];
            let (nc, nr) = (current.0 + dc, current.1 + dr);
            if in_component(nr, nc) {
                found = Some((dir, nc, nr));
                break;
            }
        }

        let Some((dir, nc, nr)) = found else {
            // Isolated pixel.
            break;
        };

        current = (nc, nr);
        // The cell scanned just before `dir` is background and adjacent to
        // the new pixel; re-expressed relative to the new pixel its
        // direction index is ((dir & 6) + 6) % 8. It becomes the backtrack.
        backtrack_dir = ((dir & 6) + 6) % 8;

        // Stop on a full clockwise cycle back into the start state, or --
        // for open, one-pixel-wide structures that never reproduce the
        // start state -- when the first traced move repeats.
        if current == start && backtrack_dir == start_backtrack {
            break;
        }
        match first_move {
            None => first_move = Some((current, backtrack_dir)),
            Some(fm) if fm == (current, backtrack_dir) => break,
            _ => {}
        }
        points.push((nc as usize, nr as usize));
    }

    Contour { points }
}
