use log::trace;
use petgraph::algo::connected_components;
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};
use rand::seq::SliceRandom;
use rand::Rng;
use std::error::Error;
use std::fmt;

use crate::cells::{Cartesian2DCoordinate, Cell, CellIndexOptionSmallVec, CellIndexSmallVec,
                   CompassPrimary};
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_iterators::{RectBatchIter, RectGridCellIter};
use crate::units::{CellIndex, EdgesCount, Height, NodesCount, Width};

/// Undirected graph of the passages in a grid, node weights are the cell coordinates and node
/// indices match the grid's `CellIndex` values.
pub type LinkGraph = Graph<Cartesian2DCoordinate, (), Undirected>;

// Each passage is reported once, from its northern or western end.
static FORWARD_DIRECTIONS: [CompassPrimary; 2] = [CompassPrimary::South, CompassPrimary::East];

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridError {
    ZeroWidth,
    ZeroHeight,
    TooLarge,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GridError::ZeroWidth => write!(f, "grid width must be at least 1 cell"),
            GridError::ZeroHeight => write!(f, "grid height must be at least 1 cell"),
            GridError::TooLarge => write!(f, "grid dimensions are too large to address every cell"),
        }
    }
}

impl Error for GridError {}

/// A rectangular maze grid. Owns every cell, the neighbour wiring is computed once by `new` and
/// only the passages between cells change afterwards.
pub struct Grid {
    dimensions: RectGridDimensions,
    cells: Vec<Cell>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {:?}, height: {:?}, links: {:?}",
               self.width(), self.height(), self.links_count())
    }
}

impl Grid {
    /// Build a `width` * `height` grid with every cell wired to its lattice neighbours and no
    /// passages. Zero sized dimensions are rejected before anything is allocated.
    pub fn new(width: Width, height: Height) -> Result<Grid, GridError> {
        if width.0 == 0 {
            return Err(GridError::ZeroWidth);
        }
        if height.0 == 0 {
            return Err(GridError::ZeroHeight);
        }
        // Coordinates are u32 pairs.
        if width.0 > u32::MAX as usize || height.0 > u32::MAX as usize {
            return Err(GridError::TooLarge);
        }
        let cells_count = width.0.checked_mul(height.0).ok_or(GridError::TooLarge)?;

        let dimensions = RectGridDimensions::new(width, height);
        let cells = (0..cells_count)
            .map(|index| {
                let coord = dimensions.index_to_coordinate(CellIndex(index));
                let mut neighbours = [None; 4];
                for dir in CompassPrimary::ALL.iter() {
                    neighbours[dir.slot()] = coord.offset(*dir)
                        .and_then(|adjacent| dimensions.coordinate_to_index(adjacent));
                }
                Cell::new(coord, neighbours)
            })
            .collect();

        Ok(Grid { dimensions, cells })
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.dimensions.width()
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.dimensions.height()
    }

    /// Panics if the cell does not exist.
    #[inline]
    pub fn cell(&self, index: CellIndex) -> &Cell {
        &self.cells[index.0]
    }

    pub fn cell_at(&self, coord: Cartesian2DCoordinate) -> Option<&Cell> {
        self.coordinate_to_index(coord).map(|index| self.cell(index))
    }

    #[inline]
    pub fn coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<CellIndex> {
        self.dimensions.coordinate_to_index(coord)
    }

    #[inline]
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> CellIndex {
        CellIndex(rng.gen_range(0..self.size()))
    }

    /// A uniformly chosen lattice neighbour of `index`.
    ///
    /// Panics if the cell has no neighbours, which only happens on a 1x1 grid.
    pub fn random_neighbour<R: Rng>(&self, index: CellIndex, rng: &mut R) -> CellIndex {
        let neighbours = self.neighbours(index);
        match neighbours.choose(rng) {
            Some(neighbour) => *neighbour,
            None => panic!("cell {:?} has no neighbours to choose from",
                           self.cell(index).coordinate()),
        }
    }

    /// Link two neighbouring cells with a passage. Linking an already linked pair changes
    /// nothing.
    ///
    /// Panics if `b` is not a lattice neighbour of `a`, which also rules out linking a cell to
    /// itself.
    pub fn link(&mut self, a: CellIndex, b: CellIndex) {
        let dir = match self.cell(a).direction_to(b) {
            Some(dir) => dir,
            None => panic!("cannot link {:?} and {:?}, they are not neighbours", a, b),
        };
        let added = self.cells[a.0].add_link(dir);
        let added_back = self.cells[b.0].add_link(dir.opposite());
        debug_assert_eq!(added, added_back);
        if added {
            trace!("linked {:?} {:?} of {:?}", b, dir, a);
        }
    }

    /// Are two cells in the grid linked? `b` may be the absent neighbour beyond a boundary, in
    /// which case they are not.
    pub fn is_linked(&self, a: CellIndex, b: Option<CellIndex>) -> bool {
        self.cells.get(a.0).map_or(false, |cell| cell.has_link_to(b))
    }

    pub fn is_neighbour_linked(&self, index: CellIndex, direction: CompassPrimary) -> bool {
        self.cell(index).has_link(direction)
    }

    #[inline]
    pub fn neighbour_at_direction(&self,
                                  index: CellIndex,
                                  direction: CompassPrimary)
                                  -> Option<CellIndex> {
        self.cell(index).neighbour(direction)
    }

    pub fn neighbours_at_directions(&self,
                                    index: CellIndex,
                                    dirs: &[CompassPrimary])
                                    -> CellIndexOptionSmallVec {
        dirs.iter()
            .map(|direction| self.neighbour_at_direction(index, *direction))
            .collect()
    }

    /// Cells that are to the North, South, East or West of a particular cell, but not
    /// necessarily linked by a passage.
    #[inline]
    pub fn neighbours(&self, index: CellIndex) -> CellIndexSmallVec {
        self.cell(index).neighbours()
    }

    /// Cells that are linked to a particular cell by a passage.
    pub fn links(&self, index: CellIndex) -> CellIndexSmallVec {
        let cell = self.cell(index);
        cell.links()
            .iter()
            .filter_map(|dir| cell.neighbour(dir))
            .collect()
    }

    pub fn links_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.links().len()).sum::<usize>() / 2
    }

    #[inline]
    pub fn iter(&self) -> RectGridCellIter {
        RectGridCellIter::new(&self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RectBatchIter {
        RectBatchIter::new(&self.dimensions)
    }

    /// Every passage exactly once, as (cell, southern or eastern neighbour) pairs in row-major
    /// order of the first cell.
    pub fn iter_links<'a>(&'a self) -> impl Iterator<Item = (CellIndex, CellIndex)> + 'a {
        self.iter().flat_map(move |index| {
            let cell = self.cell(index);
            FORWARD_DIRECTIONS
                .iter()
                .filter(move |dir| cell.has_link(**dir))
                .filter_map(move |dir| cell.neighbour(*dir))
                .map(move |neighbour| (index, neighbour))
        })
    }

    pub fn link_graph(&self) -> LinkGraph {
        let (NodesCount(nodes), EdgesCount(edges)) = self.dimensions.graph_size();
        let mut graph = LinkGraph::with_capacity(nodes, edges);
        for cell in &self.cells {
            let _ = graph.add_node(cell.coordinate());
        }
        for (a, b) in self.iter_links() {
            let _ = graph.add_edge(NodeIndex::new(a.0), NodeIndex::new(b.0), ());
        }
        graph
    }

    /// A perfect maze has exactly one path between any two cells: the passages form a spanning
    /// tree.
    pub fn is_perfect_maze(&self) -> bool {
        self.links_count() == self.size() - 1 && connected_components(&self.link_graph()) == 1
    }
}
