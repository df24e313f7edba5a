use docopt::Docopt;
use log::{debug, info, warn};
use mazes::{
    generators::{self, Algorithm},
    grid::Grid,
    renderers::{self, RenderOptionsBuilder},
    units::{Height, Width},
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [--width=<w>] [--height=<h>] [--algorithm=<name>] [--pngfile=<path>] [--seed=<n>] [--cell-pixels=<n>] [--border-pixels=<n>]

Options:
    -h --help              Show this screen.
    --width=<w>            Width of the maze, in cells [default: 5].
    --height=<h>           Height of the maze, in cells [default: 5].
    --algorithm=<name>     aldousbroder | binarytree | none. Anything else leaves every wall standing.
    --pngfile=<path>       Output file path for an image rendering of the maze. Always PNG format.
    --seed=<n>             Seed for the random number generator, picked at random if not given.
    --cell-pixels=<n>      Pixel count to render one cell wall in the image [default: 30].
    --border-pixels=<n>    Pixel thickness of the walls in the image [default: 2].
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_width: usize,
    flag_height: usize,
    flag_algorithm: String,
    flag_pngfile: String,
    flag_seed: Option<u64>,
    flag_cell_pixels: u32,
    flag_border_pixels: u32,
}

// Error, ErrorKind, ResultExt (`chain_err`) and Result for the driver.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            Docopt(::docopt::Error);
            Image(::image::ImageError);
            GridFailure(::mazes::grid::GridError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    // Rejects zero sized mazes before anything else happens
    let mut maze_grid = Grid::new(Width(args.flag_width), Height(args.flag_height))?;

    let algorithm = args.flag_algorithm.parse::<Algorithm>().unwrap_or_else(|err| {
        warn!("{}, falling back to a blank grid", err);
        println!("No maze algorithm - using default grid");
        Algorithm::Blank
    });

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("generating a {}x{} {} maze with seed {}",
          args.flag_width, args.flag_height, algorithm, seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);

    generators::generate(&mut maze_grid, algorithm, &mut rng);
    debug!("perfect maze: {}", maze_grid.is_perfect_maze());

    println!("{}", maze_grid);

    if !args.flag_pngfile.is_empty() {
        let render_options = RenderOptionsBuilder::new()
            .cell_side_pixels_length(args.flag_cell_pixels)
            .border_pixels(args.flag_border_pixels)
            .build();
        renderers::save_png(&maze_grid, &render_options, &args.flag_pngfile)
            .chain_err(|| format!("Failed to write maze to png file {}", args.flag_pngfile))?;
        info!("maze image saved to {}", args.flag_pngfile);
    }

    Ok(())
}
