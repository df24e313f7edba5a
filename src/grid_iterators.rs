use crate::grid_dimensions::RectGridDimensions;
use crate::units::{CellIndex, Height, Width};

/// Row-major iteration over every cell of a grid.
#[derive(Debug, Clone)]
pub struct RectGridCellIter {
    current_cell_number: usize,
    cells_count: usize,
}

impl RectGridCellIter {
    pub(crate) fn new(dimensions: &RectGridDimensions) -> RectGridCellIter {
        RectGridCellIter {
            current_cell_number: 0,
            cells_count: dimensions.size().0,
        }
    }
}

impl ExactSizeIterator for RectGridCellIter {} // default impl using size_hint()
impl Iterator for RectGridCellIter {
    type Item = CellIndex;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let index = CellIndex(self.current_cell_number);
            self.current_cell_number += 1;
            Some(index)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Iteration over the rows of a grid, north to south, each row west to east.
#[derive(Debug, Clone)]
pub struct RectBatchIter {
    current_index: usize,
    row_length: Width,
    rows_count: Height,
}

impl RectBatchIter {
    pub(crate) fn new(dimensions: &RectGridDimensions) -> RectBatchIter {
        RectBatchIter {
            current_index: 0,
            row_length: dimensions.width(),
            rows_count: dimensions.height(),
        }
    }
}

impl ExactSizeIterator for RectBatchIter {} // default impl using size_hint()
impl Iterator for RectBatchIter {
    type Item = Vec<CellIndex>;
    fn next(&mut self) -> Option<Self::Item> {
        let Height(count) = self.rows_count;
        if self.current_index < count {
            let Width(length) = self.row_length;
            let row_start = self.current_index * length;
            let indices = (row_start..row_start + length).map(CellIndex).collect();
            self.current_index += 1;
            Some(indices)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.rows_count.0 - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
