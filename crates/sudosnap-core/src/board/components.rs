use ndarray::Array2;

use crate::frame::BinaryImage;

/// One connected foreground region of a binary image.
#[derive(Clone, Debug)]
pub struct Component {
    /// Resolved label of this component in the label map.
    pub label: u32,
    /// First pixel of the component in scan order, as (row, col). The pixel
    /// to its left and the pixel above it are guaranteed background, which
    /// makes it a valid boundary-tracing start.
    pub seed: (usize, usize),
    /// Number of foreground pixels in the component.
    pub pixel_count: usize,
}

/// Result of labeling: the resolved label map plus per-component stats.
///
/// Components are ordered by the scan-order position of their seed pixel,
/// which makes downstream selection deterministic.
pub struct ComponentMap {
    pub labels: Array2<u32>,
    pub components: Vec<Component>,
}

/// Two-pass connected component labeling with union-find, 4-connectivity.
pub fn connected_components(mask: &BinaryImage) -> ComponentMap {
    let (h, w) = mask.dim();
    let mut labels = Array2::<u32>::zeros((h, w));
    if h == 0 || w == 0 {
        return ComponentMap {
            labels,
            components: Vec::new(),
        };
    }

    let mut next_label: u32 = 1;
    // Union-find parent array. Index 0 unused; labels start at 1.
    let mut parent: Vec<u32> = vec![0; h * w / 2 + 2];

    // Pass 1: assign provisional labels from the upper and left neighbors.
    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            let up = if row > 0 { labels[[row - 1, col]] } else { 0 };
            let left = if col > 0 { labels[[row, col - 1]] } else { 0 };

            match (up > 0, left > 0) {
                (false, false) => {
                    if next_label as usize >= parent.len() {
                        parent.resize(parent.len() * 2, 0);
                    }
                    parent[next_label as usize] = next_label;
                    labels[[row, col]] = next_label;
                    next_label += 1;
                }
                (true, false) => labels[[row, col]] = up,
                (false, true) => labels[[row, col]] = left,
                (true, true) => {
                    let smaller = up.min(left);
                    labels[[row, col]] = smaller;
                    if up != left {
                        union(&mut parent, up, left);
                    }
                }
            }
        }
    }

    // Flatten parent references.
    for i in 1..next_label as usize {
        parent[i] = find(&parent, i as u32);
    }

    // Pass 2: resolve labels, recording each component's seed in scan order.
    let mut components: Vec<Component> = Vec::new();
    let mut slot_of_label = vec![usize::MAX; next_label as usize];

    for row in 0..h {
        for col in 0..w {
            let lbl = labels[[row, col]];
            if lbl == 0 {
                continue;
            }
            let root = parent[lbl as usize];
            labels[[row, col]] = root;

            let slot = slot_of_label[root as usize];
            if slot == usize::MAX {
                slot_of_label[root as usize] = components.len();
                components.push(Component {
                    label: root,
                    seed: (row, col),
                    pixel_count: 1,
                });
            } else {
                components[slot].pixel_count += 1;
            }
        }
    }

    ComponentMap { labels, components }
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Merge larger root into smaller root to keep labels consistent.
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
