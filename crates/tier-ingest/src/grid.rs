//! Logical grid reconstruction for merged-cell tables.

/// Largest `colspan` honored; larger values are clamped, as HTML does.
pub const MAX_COL_SPAN: usize = 1000;
/// Largest `rowspan` honored.
pub const MAX_ROW_SPAN: usize = 65534;

/// One `td`/`th` element as it appears in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    /// Rows covered, in `1..=MAX_ROW_SPAN`.
    pub row_span: usize,
    /// Columns covered, in `1..=MAX_COL_SPAN`.
    pub col_span: usize,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self::spanning(text, 1, 1)
    }

    /// Spans are clamped to `1..=MAX_ROW_SPAN` and `1..=MAX_COL_SPAN`.
    pub fn spanning(text: impl Into<String>, row_span: usize, col_span: usize) -> Self {
        Self {
            text: text.into(),
            row_span: row_span.clamp(1, MAX_ROW_SPAN),
            col_span: col_span.clamp(1, MAX_COL_SPAN),
        }
    }
}

/// Dense `rows × width` view of a table after merge expansion.
///
/// Every slot is either unset or holds the text of the single cell whose
/// span rectangle first covered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    slots: Vec<Vec<Option<String>>>,
    width: usize,
}

impl Grid {
    /// Widest span-expanded row among the first `sample_rows` rows.
    ///
    /// Rows further down are assumed to be no wider than the header region.
    pub fn estimate_width(rows: &[Vec<Cell>], sample_rows: usize) -> usize {
        rows.iter()
            .take(sample_rows)
            .map(|cells| {
                cells
                    .iter()
                    .fold(0usize, |width, c| width.saturating_add(c.col_span))
            })
            .max()
            .unwrap_or(0)
    }

    /// Places every cell, left to right and top to bottom.
    ///
    /// Slots already claimed by a row span from above are skipped over.
    /// Cells that would start past the estimated width are dropped and spans
    /// are clipped at the grid edges.
    pub fn build(rows: &[Vec<Cell>], sample_rows: usize) -> Self {
        let width = Self::estimate_width(rows, sample_rows);
        let height = rows.len();
        let mut slots = vec![vec![None; width]; height];

        for (r, cells) in rows.iter().enumerate() {
            let mut cursor = 0;
            for cell in cells {
                while cursor < width && slots[r][cursor].is_some() {
                    cursor += 1;
                }
                if cursor >= width {
                    break;
                }
                let row_end = r.saturating_add(cell.row_span).min(height);
                let col_end = cursor.saturating_add(cell.col_span).min(width);
                for row in &mut slots[r..row_end] {
                    for slot in &mut row[cursor..col_end] {
                        if slot.is_none() {
                            *slot = Some(cell.text.clone());
                        }
                    }
                }
                cursor = cursor.saturating_add(cell.col_span);
            }
        }

        Self { slots, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Text at `(row, col)`; `None` when unset or out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.slots.get(row)?.get(col)?.as_deref()
    }

    /// Like [`Grid::get`] but treats blank text as unset.
    pub fn non_empty(&self, row: usize, col: usize) -> Option<&str> {
        self.get(row, col).filter(|text| !text.trim().is_empty())
    }

    pub fn row(&self, row: usize) -> Option<&[Option<String>]> {
        self.slots.get(row).map(Vec::as_slice)
    }

    /// Number of slots in `row` holding non-blank text.
    pub fn populated(&self, row: usize) -> usize {
        self.row(row).map_or(0, |slots| {
            slots
                .iter()
                .flatten()
                .filter(|text| !text.trim().is_empty())
                .count()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(grid: &Grid, row: usize) -> Vec<Option<&str>> {
        (0..grid.width()).map(|c| grid.get(row, c)).collect()
    }

    #[test]
    fn test_width_from_sampled_rows() {
        let rows = vec![
            vec![Cell::spanning("a", 1, 3), Cell::new("b")],
            vec![Cell::new("c")],
            vec![Cell::new("x"); 9],
        ];
        assert_eq!(Grid::estimate_width(&rows, 2), 4);
        assert_eq!(Grid::estimate_width(&rows, 10), 9);
        assert_eq!(Grid::estimate_width(&[], 10), 0);
    }

    #[test]
    fn test_rowspan_pushes_cursor() {
        let rows = vec![
            vec![Cell::spanning("Corsair", 2, 1), Cell::new("RM"), Cell::new("A")],
            vec![Cell::new("HX"), Cell::new("B")],
        ];
        let grid = Grid::build(&rows, 10);
        assert_eq!(grid.width(), 3);
        assert_eq!(texts(&grid, 0), vec![Some("Corsair"), Some("RM"), Some("A")]);
        assert_eq!(texts(&grid, 1), vec![Some("Corsair"), Some("HX"), Some("B")]);
    }

    #[test]
    fn test_colspan_and_rowspan_rectangle() {
        let rows = vec![
            vec![Cell::new("a"), Cell::spanning("merged", 2, 2)],
            vec![Cell::new("b")],
            vec![Cell::new("c"), Cell::new("d"), Cell::new("e")],
        ];
        let grid = Grid::build(&rows, 10);
        assert_eq!(texts(&grid, 0), vec![Some("a"), Some("merged"), Some("merged")]);
        assert_eq!(texts(&grid, 1), vec![Some("b"), Some("merged"), Some("merged")]);
        assert_eq!(texts(&grid, 2), vec![Some("c"), Some("d"), Some("e")]);
    }

    #[test]
    fn test_overflowing_cells_are_dropped() {
        let rows = vec![
            vec![Cell::new("a"), Cell::new("b")],
            vec![Cell::new("c"), Cell::spanning("wide", 1, 5), Cell::new("lost")],
        ];
        let grid = Grid::build(&rows, 1);
        assert_eq!(grid.width(), 2);
        assert_eq!(texts(&grid, 1), vec![Some("c"), Some("wide")]);
    }

    #[test]
    fn test_rowspan_clipped_at_bottom() {
        let rows = vec![vec![Cell::spanning("tall", 5, 1)], vec![]];
        let grid = Grid::build(&rows, 10);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(1, 0), Some("tall"));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_short_rows_leave_unset_slots() {
        let rows = vec![
            vec![Cell::new("a"), Cell::new("b"), Cell::new("c")],
            vec![Cell::new("d")],
        ];
        let grid = Grid::build(&rows, 10);
        assert_eq!(texts(&grid, 1), vec![Some("d"), None, None]);
        assert_eq!(grid.populated(1), 1);
    }

    #[test]
    fn test_filled_slots_are_not_overwritten() {
        // Row 1's colspan would cover the slot held by row 0's rowspan.
        let rows = vec![
            vec![Cell::new("a"), Cell::new("b"), Cell::spanning("c", 2, 1)],
            vec![Cell::new("d"), Cell::spanning("e", 1, 2)],
        ];
        let grid = Grid::build(&rows, 10);
        assert_eq!(texts(&grid, 1), vec![Some("d"), Some("e"), Some("c")]);
    }

    #[test]
    fn test_huge_spans_are_clamped() {
        let cell = Cell::spanning("x", usize::MAX, usize::MAX);
        assert_eq!(cell.row_span, MAX_ROW_SPAN);
        assert_eq!(cell.col_span, MAX_COL_SPAN);
        assert_eq!(Cell::spanning("x", 0, 0), Cell::new("x"));
    }

    #[test]
    fn test_huge_rowspan_is_clipped_to_the_table() {
        let rows = vec![
            vec![Cell::new("a"), Cell::new("b")],
            vec![Cell::spanning("x", usize::MAX, 1)],
            vec![],
        ];
        let grid = Grid::build(&rows, 10);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(1, 0), Some("x"));
        assert_eq!(grid.get(2, 0), Some("x"));
    }

    #[test]
    fn test_huge_colspan_bounds_the_width() {
        let rows = vec![vec![
            Cell::new("a"),
            Cell::spanning("wide", 1, usize::MAX),
            Cell::spanning("wider", 1, usize::MAX),
        ]];
        assert_eq!(Grid::estimate_width(&rows, 10), 1 + 2 * MAX_COL_SPAN);
        let grid = Grid::build(&rows, 10);
        assert_eq!(grid.get(0, MAX_COL_SPAN), Some("wide"));
        assert_eq!(grid.get(0, MAX_COL_SPAN + 1), Some("wider"));
    }

    #[test]
    fn test_populated_ignores_blank_text() {
        let rows = vec![vec![Cell::new("a"), Cell::new("  "), Cell::new("")]];
        let grid = Grid::build(&rows, 10);
        assert_eq!(grid.populated(0), 1);
        assert_eq!(grid.non_empty(0, 1), None);
        assert_eq!(grid.get(0, 1), Some("  "));
    }
}
