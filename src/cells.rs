use smallvec::SmallVec;

use crate::units::{CellIndex, ColumnIndex, RowIndex};

pub type CellIndexSmallVec = SmallVec<[CellIndex; 4]>;
pub type CellIndexOptionSmallVec = SmallVec<[Option<CellIndex>; 4]>;

/// Position of a cell on the lattice. `x` is the column, `y` the row, (0, 0) is the north west corner.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable, the caller still needs to check
    /// the result lies within its grid.
    pub fn offset(&self, dir: CompassPrimary) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => y.checked_sub(1).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::South => y.checked_add(1).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::East => x.checked_add(1).map(|x| Cartesian2DCoordinate { x, y }),
            CompassPrimary::West => x.checked_sub(1).map(|x| Cartesian2DCoordinate { x, y }),
        }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::South,
                                          CompassPrimary::East,
                                          CompassPrimary::West];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        match self {
            CompassPrimary::North => 0,
            CompassPrimary::South => 1,
            CompassPrimary::East => 2,
            CompassPrimary::West => 3,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self.slot()
    }
}

/// The directions a cell has open passages in. At most one passage per direction can exist.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub fn new() -> DirectionSet {
        DirectionSet(0)
    }

    /// Returns true if the direction was not already present.
    #[inline]
    pub fn insert(&mut self, dir: CompassPrimary) -> bool {
        let absent = !self.contains(dir);
        self.0 |= dir.bit();
        absent
    }

    #[inline]
    pub fn contains(&self, dir: CompassPrimary) -> bool {
        self.0 & dir.bit() != 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CompassPrimary> + '_ {
        CompassPrimary::ALL.iter().cloned().filter(move |dir| self.contains(*dir))
    }
}

/// One lattice position. The neighbour table is fixed when the owning grid is built, only the
/// link set changes afterwards and only through `Grid::link`.
#[derive(Clone, Debug)]
pub struct Cell {
    coord: Cartesian2DCoordinate,
    neighbours: [Option<CellIndex>; 4],
    links: DirectionSet,
}

impl Cell {
    pub(crate) fn new(coord: Cartesian2DCoordinate, neighbours: [Option<CellIndex>; 4]) -> Cell {
        Cell {
            coord,
            neighbours,
            links: DirectionSet::new(),
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Cartesian2DCoordinate {
        self.coord
    }

    #[inline]
    pub fn row(&self) -> RowIndex {
        RowIndex(self.coord.y as usize)
    }

    #[inline]
    pub fn column(&self) -> ColumnIndex {
        ColumnIndex(self.coord.x as usize)
    }

    #[inline]
    pub fn neighbour(&self, dir: CompassPrimary) -> Option<CellIndex> {
        self.neighbours[dir.slot()]
    }

    /// The existing lattice neighbours, in North, South, East, West order.
    pub fn neighbours(&self) -> CellIndexSmallVec {
        self.neighbours.iter().filter_map(|n| *n).collect()
    }

    /// Direction to reach `other` from this cell, if `other` is one of its neighbours.
    pub fn direction_to(&self, other: CellIndex) -> Option<CompassPrimary> {
        CompassPrimary::ALL
            .iter()
            .cloned()
            .find(|dir| self.neighbour(*dir) == Some(other))
    }

    #[inline]
    pub fn links(&self) -> DirectionSet {
        self.links
    }

    #[inline]
    pub fn has_link(&self, dir: CompassPrimary) -> bool {
        self.links.contains(dir)
    }

    /// Is there a passage to `other`? An absent neighbour, e.g. beyond the grid boundary, is
    /// never linked.
    pub fn has_link_to(&self, other: Option<CellIndex>) -> bool {
        other
            .and_then(|index| self.direction_to(index))
            .map_or(false, |dir| self.has_link(dir))
    }

    #[inline]
    pub fn is_linked(&self) -> bool {
        !self.links.is_empty()
    }

    /// Single sided link update, `Grid::link` keeps both ends in step.
    #[inline]
    pub(crate) fn add_link(&mut self, dir: CompassPrimary) -> bool {
        debug_assert!(self.neighbour(dir).is_some());
        self.links.insert(dir)
    }
}
