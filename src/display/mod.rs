// Display module for terminal rendering of maze edges
pub mod formatters;

pub use formatters::{print_edge_grid, print_grid_header, render_ascii, Palette};
