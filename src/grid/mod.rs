pub mod grid;
pub mod render;

pub use grid::Grid;
