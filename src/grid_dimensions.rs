use crate::cells::Cartesian2DCoordinate;
use crate::units::{CellIndex, EdgesCount, Height, NodesCount, Width};


#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectGridDimensions {
    width: Width,
    height: Height,
}

impl RectGridDimensions {
    /// Unchecked, `Grid::new` validates the dimensions before building one of these.
    pub(crate) fn new(width: Width, height: Height) -> RectGridDimensions {
        RectGridDimensions { width, height }
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.width.0 * self.height.0)
    }

    /// Node count plus an upper bound on the passages between adjacent cells.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (Width(w), Height(h)) = (self.width, self.height);
        let cells_count = self.size();
        let edges_count_hint = (w - 1) * h + w * (h - 1);
        (cells_count, EdgesCount(edges_count_hint))
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...size.
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<CellIndex> {
        if self.is_valid_coordinate(coord) {
            Some(CellIndex(coord.y as usize * self.width.0 + coord.x as usize))
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_coordinate(&self, index: CellIndex) -> Cartesian2DCoordinate {
        let Width(w) = self.width;
        Cartesian2DCoordinate::new((index.0 % w) as u32, (index.0 / w) as u32)
    }
}
