use bit_set::BitSet;
use log::debug;
use rand::Rng;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::cells::{CellIndexSmallVec, CompassPrimary};
use crate::grid::Grid;

/// The maze generation algorithms that can be applied to a fresh grid.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Algorithm {
    /// No passages are carved, every wall stays in place.
    Blank,
    AldousBroder,
    BinaryTree,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match *self {
            Algorithm::Blank => "none",
            Algorithm::AldousBroder => "aldousbroder",
            Algorithm::BinaryTree => "binarytree",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Eq, PartialEq, Clone, Debug)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown maze algorithm '{}'", self.0)
    }
}

impl Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Algorithm, UnknownAlgorithm> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Algorithm::Blank),
            "aldousbroder" | "aldous-broder" => Ok(Algorithm::AldousBroder),
            "binarytree" | "binary-tree" | "binary" => Ok(Algorithm::BinaryTree),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Carve the passages of `algorithm` into a freshly built grid.
pub fn generate<R: Rng>(grid: &mut Grid, algorithm: Algorithm, rng: &mut R) {
    match algorithm {
        Algorithm::Blank => {}
        Algorithm::AldousBroder => aldous_broder(grid, rng),
        Algorithm::BinaryTree => binary_tree(grid, rng),
    }
    debug!("{} carved {} passages into {:?}", algorithm, grid.links_count(), grid);
}

/// Apply the binary tree maze generation algorithm to a grid
/// It works simply by visiting each cell in the grid and choosing to carve a passage
/// either north or east. Only the choice between the two is random, a cell on the northern
/// row must carve east and a cell on the eastern column must carve north. The north east
/// corner carves nothing.
///
/// Every passage leads north or east so no cycles can form, the passages all drain towards
/// the north east corner giving the maze its diagonal bias.
pub fn binary_tree<R: Rng>(grid: &mut Grid, rng: &mut R) {
    const CARVE_DIRECTIONS: [CompassPrimary; 2] = [CompassPrimary::North, CompassPrimary::East];

    for cell in grid.iter() {

        let neighbours = grid.neighbours_at_directions(cell, &CARVE_DIRECTIONS)
                             .into_iter()
                             .filter_map(|neighbour_maybe| neighbour_maybe)
                             .collect::<CellIndexSmallVec>();

        let link_index = match neighbours.len() {
            0 => continue,
            1 => neighbours[0],
            2 => neighbours[rng.gen_range(0..2)],
            _ => unreachable!("Should only have a maximum of 2 neighbours to check."),
        };

        grid.link(cell, link_index);
    }
}

/// Apply the Aldous-Broder maze generation algorithm to a grid
/// A random walk visits neighbours until every cell has been visited, carving a passage each
/// time the walk enters a cell for the first time. Every possible perfect maze of the grid is
/// equally likely, at the cost of a walk whose length is the cover time of the grid.
pub fn aldous_broder<R: Rng>(grid: &mut Grid, rng: &mut R) {

    let mut visited = BitSet::with_capacity(grid.size());
    let mut current_cell = grid.random_cell(rng);
    let _ = visited.insert(current_cell.0);
    let mut unvisited = grid.size() - 1;
    let mut steps = 0usize;

    while unvisited > 0 {
        let neighbour = grid.random_neighbour(current_cell, rng);

        if visited.insert(neighbour.0) {
            grid.link(current_cell, neighbour);
            unvisited -= 1;
        }

        current_cell = neighbour;
        steps += 1;
    }

    debug!("aldous-broder walk covered {} cells in {} steps", grid.size(), steps);
}


#[cfg(test)]
mod tests {

    use quickcheck::quickcheck;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use std::collections::HashMap;

    use super::*;
    use crate::units::{CellIndex, Height, Width};

    type Links = Vec<(CellIndex, CellIndex)>;

    fn generated_grid(w: usize, h: usize, algorithm: Algorithm, seed: u64) -> Grid {
        let mut g = Grid::new(Width(w), Height(h)).expect("valid grid dimensions");
        let mut rng = XorShiftRng::seed_from_u64(seed);
        generate(&mut g, algorithm, &mut rng);
        g
    }

    fn links_of(g: &Grid) -> Links {
        g.iter_links().collect()
    }

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("aldousbroder".parse::<Algorithm>(), Ok(Algorithm::AldousBroder));
        assert_eq!("aldous-broder".parse::<Algorithm>(), Ok(Algorithm::AldousBroder));
        assert_eq!("binarytree".parse::<Algorithm>(), Ok(Algorithm::BinaryTree));
        assert_eq!(" Binary-Tree ".parse::<Algorithm>(), Ok(Algorithm::BinaryTree));
        assert_eq!("none".parse::<Algorithm>(), Ok(Algorithm::Blank));
        assert_eq!("".parse::<Algorithm>(), Err(UnknownAlgorithm(String::new())));
        assert_eq!("wilson".parse::<Algorithm>(),
                   Err(UnknownAlgorithm(String::from("wilson"))));

        for algorithm in &[Algorithm::Blank, Algorithm::AldousBroder, Algorithm::BinaryTree] {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(*algorithm));
        }
    }

    #[test]
    fn blank_grid_has_no_passages() {
        let g = generated_grid(6, 4, Algorithm::Blank, 3);
        assert_eq!(g.links_count(), 0);
        assert!(!g.is_perfect_maze());
    }

    #[test]
    fn generators_make_perfect_mazes() {
        fn prop(w: u8, h: u8, seed: u64) -> bool {
            let (w, h) = (w as usize % 10 + 1, h as usize % 10 + 1);
            [Algorithm::AldousBroder, Algorithm::BinaryTree].iter().all(|algorithm| {
                let g = generated_grid(w, h, *algorithm, seed);
                g.links_count() == w * h - 1 && g.is_perfect_maze()
            })
        }
        quickcheck(prop as fn(u8, u8, u64) -> bool);
    }

    #[test]
    fn links_stay_symmetric() {
        for algorithm in &[Algorithm::AldousBroder, Algorithm::BinaryTree] {
            let g = generated_grid(7, 5, *algorithm, 11);
            for a in g.iter() {
                for b in g.iter() {
                    assert_eq!(g.is_linked(a, Some(b)), g.is_linked(b, Some(a)));
                }
            }
        }
    }

    #[test]
    fn single_cell_mazes() {
        for algorithm in &[Algorithm::AldousBroder, Algorithm::BinaryTree] {
            let g = generated_grid(1, 1, *algorithm, 5);
            assert_eq!(g.links_count(), 0);
            assert!(g.is_perfect_maze());
        }
    }

    #[test]
    fn binary_tree_carves_north_or_east_once_per_cell() {
        for seed in 0..10 {
            let g = generated_grid(8, 6, Algorithm::BinaryTree, seed);
            for index in g.iter() {
                let cell = g.cell(index);
                let carved = [CompassPrimary::North, CompassPrimary::East]
                    .iter()
                    .filter(|dir| cell.has_link(**dir))
                    .count();
                let is_north_east_corner = cell.neighbour(CompassPrimary::North).is_none() &&
                                           cell.neighbour(CompassPrimary::East).is_none();
                assert_eq!(carved, if is_north_east_corner { 0 } else { 1 });

                if cell.neighbour(CompassPrimary::North).is_none() && !is_north_east_corner {
                    assert!(cell.has_link(CompassPrimary::East));
                }
                if cell.neighbour(CompassPrimary::East).is_none() && !is_north_east_corner {
                    assert!(cell.has_link(CompassPrimary::North));
                }
            }
        }
    }

    #[test]
    fn binary_tree_single_row_is_one_corridor() {
        for seed in 0..20 {
            let g = generated_grid(2, 1, Algorithm::BinaryTree, seed);
            assert_eq!(links_of(&g), vec![(CellIndex(0), CellIndex(1))]);
        }
    }

    #[test]
    fn aldous_broder_five_by_five() {
        for seed in 0..5 {
            let g = generated_grid(5, 5, Algorithm::AldousBroder, seed);
            assert_eq!(g.links_count(), 24);
            assert!(g.is_perfect_maze());
        }
    }

    #[test]
    fn same_seed_same_maze() {
        for algorithm in &[Algorithm::AldousBroder, Algorithm::BinaryTree] {
            let first = generated_grid(12, 9, *algorithm, 1234);
            let second = generated_grid(12, 9, *algorithm, 1234);
            assert_eq!(links_of(&first), links_of(&second));
        }
    }

    #[test]
    fn aldous_broder_is_unbiased() {
        // A 2x2 grid has 4 spanning trees, one per omitted passage.
        let runs = 4000;
        let mut counts: HashMap<Links, usize> = HashMap::new();
        for seed in 0..runs {
            let g = generated_grid(2, 2, Algorithm::AldousBroder, seed);
            *counts.entry(links_of(&g)).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 4);
        for count in counts.values() {
            assert!(*count > 850 && *count < 1150, "skewed count {}", count);
        }
    }

    #[test]
    fn binary_tree_is_biased() {
        // Only the south west cell has a choice to make on a 2x2 grid.
        let mut counts: HashMap<Links, usize> = HashMap::new();
        for seed in 0..200 {
            let g = generated_grid(2, 2, Algorithm::BinaryTree, seed);
            *counts.entry(links_of(&g)).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 2);
    }
}
