use std::fmt;

use crate::cells::CompassPrimary;
use crate::grid::Grid;

const CORNER: &str = "+";
const WALL_LR: &str = "--";
const WALL_UD: &str = "|";
const CELL_BODY: &str = "  ";
const OPEN_CEILING: &str = "  ";
const OPEN_SIDE: &str = " ";

/// Plain ASCII view of a maze. Each row is a ceiling line and a body line, the last row is closed
/// off by a floor line:
///
/// ```text
/// +--+--+
/// |     |
/// +--+--+
/// ```
///
/// A cell's ceiling is open when it is linked to its northern neighbour and its left hand wall is
/// open when it is linked to its western neighbour.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut output = String::new();

        for row in self.iter_row() {

            for &cell in &row {
                output.push_str(CORNER);
                if self.is_neighbour_linked(cell, CompassPrimary::North) {
                    output.push_str(OPEN_CEILING);
                } else {
                    output.push_str(WALL_LR);
                }
            }
            output.push_str(CORNER);
            output.push('\n');

            for &cell in &row {
                if self.is_neighbour_linked(cell, CompassPrimary::West) {
                    output.push_str(OPEN_SIDE);
                } else {
                    output.push_str(WALL_UD);
                }
                output.push_str(CELL_BODY);
            }
            output.push_str(WALL_UD);
            output.push('\n');
        }

        for _ in 0..self.width().0 {
            output.push_str(CORNER);
            output.push_str(WALL_LR);
        }
        output.push_str(CORNER);
        output.push('\n');

        write!(f, "{}", output)
    }
}
