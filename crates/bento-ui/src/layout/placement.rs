//! Sparse grid auto-placement
//!
//! Mirrors what the browser does with cards that carry only span hints: walk
//! the items in document order, row-major, and drop each one into the first
//! free area at or after the placement cursor. The cursor only moves
//! forward, so a narrow card never back-fills a hole left earlier.

use serde::Serialize;

/// Final position of one card, zero-based tracks
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Placement {
    /// Position of the card in document order
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub col_span: usize,
    pub row_span: usize,
}

impl Placement {
    /// Whether two placements share any cell
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.row < other.row + other.row_span
            && other.row < self.row + self.row_span
            && self.col < other.col + other.col_span
            && other.col < self.col + self.col_span
    }
}

/// Occupied cells, grown row by row as placement proceeds
struct Occupancy {
    columns: usize,
    cells: Vec<Vec<bool>>,
}

impl Occupancy {
    fn new(columns: usize) -> Self {
        Self {
            columns,
            cells: Vec::new(),
        }
    }

    fn is_free(&self, row: usize, col: usize) -> bool {
        self.cells.get(row).map_or(true, |r| !r[col])
    }

    fn fits(&self, row: usize, col: usize, col_span: usize, row_span: usize) -> bool {
        col + col_span <= self.columns
            && (row..row + row_span).all(|r| (col..col + col_span).all(|c| self.is_free(r, c)))
    }

    fn claim(&mut self, row: usize, col: usize, col_span: usize, row_span: usize) {
        while self.cells.len() < row + row_span {
            self.cells.push(vec![false; self.columns]);
        }
        for r in row..row + row_span {
            for c in col..col + col_span {
                self.cells[r][c] = true;
            }
        }
    }
}

/// Places items with `(col_span, row_span)` into a grid of `columns` tracks.
///
/// Zero spans count as one track. Column spans wider than the grid are
/// clamped to the grid width.
pub fn place(columns: u8, spans: &[(u8, u8)]) -> Vec<Placement> {
    let columns = usize::from(columns.max(1));
    let mut grid = Occupancy::new(columns);
    let (mut row, mut col) = (0usize, 0usize);
    let mut placements = Vec::with_capacity(spans.len());

    for (index, &(cs, rs)) in spans.iter().enumerate() {
        let mut col_span = usize::from(cs.max(1));
        let row_span = usize::from(rs.max(1));
        if col_span > columns {
            tracing::warn!(index, col_span, columns, "column span wider than grid, clamping");
            col_span = columns;
        }

        while !grid.fits(row, col, col_span, row_span) {
            col += 1;
            if col + col_span > columns {
                row += 1;
                col = 0;
            }
        }

        grid.claim(row, col, col_span, row_span);
        placements.push(Placement {
            index,
            row,
            col,
            col_span,
            row_span,
        });
        col += col_span;
    }

    tracing::debug!(columns, items = placements.len(), "placed grid items");
    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(placements: &[Placement]) -> Vec<(usize, usize)> {
        placements.iter().map(|p| (p.row, p.col)).collect()
    }

    #[test]
    fn five_cards_wrap_after_fourth() {
        let placed = place(4, &[(1, 1); 5]);
        assert_eq!(
            positions(&placed),
            vec![(0, 0), (0, 1), (0, 2), (0, 3), (1, 0)]
        );
    }

    #[test]
    fn column_spans_are_respected() {
        let placed = place(4, &[(2, 1), (1, 1), (1, 1), (1, 1), (2, 1)]);
        assert_eq!(
            positions(&placed),
            vec![(0, 0), (0, 2), (0, 3), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn wide_card_skips_to_next_row() {
        let placed = place(4, &[(3, 1), (2, 1)]);
        assert_eq!(positions(&placed), vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn sparse_packing_leaves_holes_behind() {
        // The 1-wide card after the wrap does not back-fill column 3 of row 0.
        let placed = place(4, &[(3, 1), (2, 1), (1, 1)]);
        assert_eq!(positions(&placed), vec![(0, 0), (1, 0), (1, 2)]);
    }

    #[test]
    fn row_spans_block_cells_below() {
        // Six-column dashboard: the welcome card covers 3x2.
        let placed = place(6, &[(3, 2), (1, 1), (1, 1), (1, 1), (2, 1), (2, 1)]);
        assert_eq!(
            positions(&placed),
            vec![(0, 0), (0, 3), (0, 4), (0, 5), (1, 3), (2, 0)]
        );
    }

    #[test]
    fn oversized_span_is_clamped() {
        let placed = place(1, &[(3, 1), (1, 1)]);
        assert_eq!(placed[0].col_span, 1);
        assert_eq!(positions(&placed), vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn zero_spans_and_zero_columns_count_as_one() {
        let placed = place(0, &[(0, 0), (0, 0)]);
        assert_eq!(placed[0].col_span, 1);
        assert_eq!(placed[0].row_span, 1);
        assert_eq!(positions(&placed), vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn empty_input() {
        assert!(place(4, &[]).is_empty());
    }

    #[test]
    fn overlap_detection() {
        let a = Placement { index: 0, row: 0, col: 0, col_span: 2, row_span: 2 };
        let b = Placement { index: 1, row: 1, col: 1, col_span: 1, row_span: 1 };
        let c = Placement { index: 2, row: 0, col: 2, col_span: 1, row_span: 1 };
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}
