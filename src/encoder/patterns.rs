/// Function pattern placement (finder, timing, alignment)
use crate::models::{ModuleMatrix, Version};

/// Stamp every function pattern for the given version into the matrix.
///
/// Runs before data placement; everything written here is protected by the
/// first-writer-wins rule of `ModuleMatrix::paint`.
pub fn place_function_patterns(matrix: &mut ModuleMatrix, version: Version) {
    let size = matrix.size() as i32;

    // Finder patterns at top-left, top-right and bottom-left corners
    stamp_finder(matrix, 0, 0);
    stamp_finder(matrix, 0, size - 7);
    stamp_finder(matrix, size - 7, 0);

    place_timing_patterns(matrix);

    if version.number() > 1 {
        let positions = alignment_positions(version);
        for &row in &positions {
            for &col in &positions {
                stamp_alignment(matrix, row as i32, col as i32);
            }
        }
    }
}

/// Stamp a 7x7 finder pattern anchored at (row, col), plus its light border.
///
/// Ring-plus-core shape: dark outer ring, dark 3x3 core, light in between.
/// The 1-module border at offsets -1 and 7 separates the pattern from data;
/// off-grid border cells are skipped.
fn stamp_finder(matrix: &mut ModuleMatrix, row: i32, col: i32) {
    for r in -1..=7 {
        for c in -1..=7 {
            let on_ring = (0..=6).contains(&r)
                && (0..=6).contains(&c)
                && (r == 0 || r == 6 || c == 0 || c == 6);
            let in_core = (2..=4).contains(&r) && (2..=4).contains(&c);
            matrix.paint(row + r, col + c, on_ring || in_core);
        }
    }
}

/// Alternating timing lines along row 6 and column 6, between the finders
fn place_timing_patterns(matrix: &mut ModuleMatrix) {
    let size = matrix.size();
    for i in 8..=size - 9 {
        let dark = i % 2 == 0;
        matrix.paint(6, i as i32, dark);
        matrix.paint(i as i32, 6, dark);
    }
}

/// Stamp a 5x5 alignment pattern centered at (row, col).
///
/// Dark border ring, dark center, light interior. Cells already claimed by a
/// finder pattern near the corners stay untouched.
fn stamp_alignment(matrix: &mut ModuleMatrix, row: i32, col: i32) {
    for r in -2i32..=2 {
        for c in -2i32..=2 {
            let dark = r.abs() == 2 || c.abs() == 2 || (r == 0 && c == 0);
            matrix.paint(row + r, col + c, dark);
        }
    }
}

/// Alignment pattern center coordinates for a given version.
///
/// Walks backward from the far edge in even steps, anchoring 6 as the
/// position nearest the top-left corner. Version 1 has no alignment patterns.
pub fn alignment_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }

    let intervals = v / 7 + 1;
    let dist = 4 * v + 4;
    // Even step nearest above dist / intervals / 2, doubled back to a full interval
    let step = dist.div_ceil(2 * intervals) * 2;

    let mut positions = vec![6usize];
    let mut pos = (dist + 6) as isize;
    while positions.len() < intervals + 1 && pos > 6 {
        positions.push(pos as usize);
        pos -= step as isize;
    }
    positions.sort_unstable();
    positions
}
