use image::error::{ImageError, ImageResult, LimitError, LimitErrorKind};
use image::{ImageFormat, Rgba, RgbaImage};
use log::debug;
use std::cmp;
use std::convert::TryFrom;
use std::path::Path;

use crate::cells::CompassPrimary;
use crate::grid::Grid;

const WALL_COLOUR: Rgba<u8> = Rgba([0x44, 0x44, 0x44, 0xff]);
const BACKGROUND_COLOUR: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderOptions {
    cell_side_pixels_length: u32,
    border_pixels: u32,
    wall_colour: Rgba<u8>,
    background_colour: Rgba<u8>,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            cell_side_pixels_length: 30,
            border_pixels: 2,
            wall_colour: WALL_COLOUR,
            background_colour: BACKGROUND_COLOUR,
        }
    }
}

impl RenderOptions {
    pub fn cell_side_pixels_length(&self) -> u32 {
        self.cell_side_pixels_length
    }

    pub fn border_pixels(&self) -> u32 {
        self.border_pixels
    }
}

#[derive(Debug, Default)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    /// Pixel length of one cell wall, at least 1.
    pub fn cell_side_pixels_length(mut self, cell_side_pixels_length: u32) -> Self {
        self.options.cell_side_pixels_length = cmp::max(cell_side_pixels_length, 1);
        self
    }

    /// Thickness of the wall strokes, at least 1.
    pub fn border_pixels(mut self, border_pixels: u32) -> Self {
        self.options.border_pixels = cmp::max(border_pixels, 1);
        self
    }

    pub fn wall_colour(mut self, colour: Rgba<u8>) -> Self {
        self.options.wall_colour = colour;
        self
    }

    pub fn background_colour(mut self, colour: Rgba<u8>) -> Self {
        self.options.background_colour = colour;
        self
    }

    pub fn build(self) -> RenderOptions {
        self.options
    }
}

/// Pixel width and height of the image for a grid.
pub fn canvas_size(grid: &Grid, options: &RenderOptions) -> Option<(u32, u32)> {
    let side = |cells: usize| -> Option<u32> {
        let cells = u32::try_from(cells).ok()?;
        cells.checked_mul(options.cell_side_pixels_length)?
             .checked_add(options.border_pixels)
    };
    Some((side(grid.width().0)?, side(grid.height().0)?))
}

/// Draw the walls of a maze. Every cell strokes its northern wall unless it has a passage north
/// and its western wall unless it has a passage west, then the eastern and southern edges of the
/// maze are closed off.
pub fn render_square_grid(grid: &Grid, options: &RenderOptions) -> ImageResult<RgbaImage> {
    let (canvas_width, canvas_height) = canvas_size(grid, options).ok_or_else(|| {
        ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError))
    })?;
    debug!("rendering {:?} on a {}x{} pixel canvas", grid, canvas_width, canvas_height);

    let mut canvas = Canvas {
        image: RgbaImage::from_pixel(canvas_width, canvas_height, options.background_colour),
        stroke: i64::from(options.border_pixels),
        colour: options.wall_colour,
    };
    let cell_size = i64::from(options.cell_side_pixels_length);

    for index in grid.iter() {
        let coord = grid.cell(index).coordinate();
        let top_left_x = i64::from(coord.x) * cell_size + 1;
        let top_left_y = i64::from(coord.y) * cell_size + 1;

        if !grid.is_neighbour_linked(index, CompassPrimary::North) {
            canvas.horizontal_line(top_left_x, top_left_x + cell_size, top_left_y);
        }
        if !grid.is_neighbour_linked(index, CompassPrimary::West) {
            canvas.vertical_line(top_left_x, top_left_y, top_left_y + cell_size);
        }
    }

    let (right, bottom) = (i64::from(canvas_width) - 1, i64::from(canvas_height) - 1);
    canvas.horizontal_line(1, right, bottom);
    canvas.vertical_line(right, 1, bottom);

    Ok(canvas.image)
}

/// Render the maze and write it to `path` as a PNG, whatever the path's extension.
pub fn save_png<P: AsRef<Path>>(grid: &Grid, options: &RenderOptions, path: P) -> ImageResult<()> {
    let image = render_square_grid(grid, options)?;
    image.save_with_format(path, ImageFormat::Png)
}

struct Canvas {
    image: RgbaImage,
    stroke: i64,
    colour: Rgba<u8>,
}

impl Canvas {
    // Strokes are centred on the line and extended by the stroke width so wall ends join up.
    fn horizontal_line(&mut self, x0: i64, x1: i64, y: i64) {
        let half = self.stroke / 2;
        self.fill_rect(x0 - half, y - half, x1 - half + self.stroke, y - half + self.stroke);
    }

    fn vertical_line(&mut self, x: i64, y0: i64, y1: i64) {
        let half = self.stroke / 2;
        self.fill_rect(x - half, y0 - half, x - half + self.stroke, y1 - half + self.stroke);
    }

    /// Fill [x0, x1) * [y0, y1), clipped to the image.
    fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let (width, height) = (i64::from(self.image.width()), i64::from(self.image.height()));
        let (x0, x1) = (cmp::max(x0, 0), cmp::min(x1, width));
        let (y0, y1) = (cmp::max(y0, 0), cmp::min(y1, height));
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x as u32, y as u32, self.colour);
            }
        }
    }
}
