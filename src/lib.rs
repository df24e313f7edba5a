//! **mazes** generates rectangular mazes and renders them as ASCII text or PNG images.

pub mod cells;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod renderers;
pub mod units;
