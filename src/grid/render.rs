use crate::grid::Grid;
use colored::Colorize;
use std::fmt;

const BLACK: &str = "1 ";
const WHITE: &str = "0 ";

impl Grid {
    /// One line per row, each cell written as `1 ` (black) or `0 ` (white)
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.height() * (self.width() * 2 + 1));
        for row in self.rows() {
            for &cell in row {
                out.push_str(if cell { BLACK } else { WHITE });
            }
            out.push('\n');
        }
        out
    }

    /// Same layout as [`Grid::render`] with black cells highlighted.
    ///
    /// `colored` drops the escape codes when stdout is not a terminal.
    pub fn render_colored(&self) -> String {
        let mut out = String::with_capacity(self.height() * (self.width() * 2 + 1));
        for row in self.rows() {
            for &cell in row {
                if cell {
                    out.push_str(&BLACK.bold().yellow().to_string());
                } else {
                    out.push_str(&WHITE.dimmed().to_string());
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
