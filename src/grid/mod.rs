// Grid module - the edge model of a maze
// Edge references identify segments; EdgeGrid owns their state

pub mod edge;
pub mod edge_grid;

pub use edge::{EdgeRef, Orientation};
pub use edge_grid::{EdgeGrid, EdgeState};
