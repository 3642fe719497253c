/// Data module placement: zigzag traversal and masking
use crate::encoder::bitstream::BitStream;
use crate::models::{MaskPattern, ModuleMatrix};

/// Canonical zigzag scan over a square grid.
///
/// Walks 2-column strips from the right edge leftward, alternating vertical
/// direction per strip and visiting the right column before the left one at
/// each row. Column 6 (the vertical timing column) is stepped over. The scan
/// yields every cell outside that column; callers filter on module state.
///
/// Kept as an explicit state machine (column-pair cursor, direction flag,
/// right/left toggle) so the visit order is testable on its own.
pub struct ZigzagScan {
    size: i32,
    col: i32,
    row: i32,
    upward: bool,
    right: bool,
}

impl ZigzagScan {
    /// Start a scan at the bottom-right corner of a size x size grid
    pub fn new(size: usize) -> Self {
        let size = size as i32;
        Self {
            size,
            col: size - 1,
            row: size - 1,
            upward: true,
            right: true,
        }
    }
}

impl Iterator for ZigzagScan {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        // Terminal once the column pair cursor has walked off the left edge
        if self.col < 1 {
            return None;
        }

        let col = if self.right { self.col } else { self.col - 1 };
        let item = (self.row as usize, col as usize);

        if self.right {
            self.right = false;
        } else {
            self.right = true;
            let next_row = if self.upward {
                self.row - 1
            } else {
                self.row + 1
            };
            if (0..self.size).contains(&next_row) {
                self.row = next_row;
            } else {
                // Strip exhausted: two columns left, reverse direction,
                // step over the vertical timing column
                self.upward = !self.upward;
                self.col -= 2;
                if self.col == 6 {
                    self.col -= 1;
                }
            }
        }

        Some(item)
    }
}

/// Fill every still-unset module from the bit stream, applying the mask.
///
/// Stream bits map dark=1/light=0; once the stream runs dry the remaining
/// unset modules are filled light. The mask predicate flips each value right
/// after assignment, so no cell is left unset when placement returns.
pub fn place_data(matrix: &mut ModuleMatrix, stream: &BitStream, mask: MaskPattern) {
    let mut bits = stream.iter();
    for (row, col) in ZigzagScan::new(matrix.size()) {
        if !matrix.is_unset(row, col) {
            continue;
        }
        let mut dark = bits.next().unwrap_or(false);
        if mask.is_masked(row, col) {
            dark = !dark;
        }
        matrix.paint(row as i32, col as i32, dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::bitstream::BitStreamBuilder;
    use crate::encoder::patterns::place_function_patterns;
    use crate::models::Version;

    #[test]
    fn test_scan_starts_bottom_right_moving_up() {
        let mut scan = ZigzagScan::new(21);
        let head: Vec<_> = scan.by_ref().take(6).collect();
        assert_eq!(
            head,
            vec![(20, 20), (20, 19), (19, 20), (19, 19), (18, 20), (18, 19)]
        );
    }

    #[test]
    fn test_scan_reverses_at_top_of_strip() {
        let order: Vec<_> = ZigzagScan::new(21).collect();
        // First strip ends at row 0, second strip starts there moving down
        let strip_len = 21 * 2;
        assert_eq!(order[strip_len - 1], (0, 19));
        assert_eq!(order[strip_len], (0, 18));
        assert_eq!(order[strip_len + 1], (0, 17));
        assert_eq!(order[strip_len + 2], (1, 18));
    }

    #[test]
    fn test_scan_skips_timing_column() {
        let order: Vec<_> = ZigzagScan::new(21).collect();
        assert!(order.iter().all(|&(_, col)| col != 6));
        // Every cell outside column 6 is visited exactly once
        assert_eq!(order.len(), 21 * 20);
        let mut seen = std::collections::HashSet::new();
        assert!(order.iter().all(|cell| seen.insert(*cell)));
    }

    #[test]
    fn test_scan_column_pairs_descend() {
        let mut columns: Vec<usize> = Vec::new();
        for (_, col) in ZigzagScan::new(21) {
            if !columns.contains(&col) {
                columns.push(col);
            }
        }
        // Right column first within each pair, pairs marching left, 6 skipped
        assert_eq!(
            columns,
            vec![20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 5, 4, 3, 2, 1, 0]
        );
    }

    #[test]
    fn test_placement_leaves_no_unset_modules() {
        let version = Version::new(1).unwrap();
        let mut matrix = ModuleMatrix::new(version.size());
        place_function_patterns(&mut matrix, version);
        let stream = BitStreamBuilder::build(b"hello", version);
        place_data(&mut matrix, &stream, MaskPattern::default());
        assert_eq!(matrix.unset_count(), 0);
    }

    #[test]
    fn test_first_data_bit_lands_bottom_right() {
        let version = Version::new(1).unwrap();
        let mut matrix = ModuleMatrix::new(version.size());
        place_function_patterns(&mut matrix, version);
        let stream = BitStreamBuilder::build(b"A", version);
        place_data(&mut matrix, &stream, MaskPattern::Pattern0);

        // First stream bit is 0 (mode 0100 starts with 0); (20, 20) is
        // masked ((20+20) % 2 == 0), so the placed module flips to dark
        assert!(matrix.get(20, 20).is_dark());
    }

    #[test]
    fn test_mask_choice_changes_data_cells() {
        let version = Version::new(1).unwrap();
        let mut rows_mask = ModuleMatrix::new(version.size());
        let mut checker_mask = ModuleMatrix::new(version.size());
        place_function_patterns(&mut rows_mask, version);
        place_function_patterns(&mut checker_mask, version);

        let stream = BitStreamBuilder::build(b"A", version);
        place_data(&mut rows_mask, &stream, MaskPattern::Pattern1);
        place_data(&mut checker_mask, &stream, MaskPattern::Pattern0);

        // (20, 19): Pattern1 flips (even row), Pattern0 does not (odd sum)
        assert_ne!(
            checker_mask.get(20, 19).is_dark(),
            rows_mask.get(20, 19).is_dark()
        );
    }
}
