// Configuration module - grid sizing and editor settings

pub mod editor_config;
pub mod grid_config;

pub use editor_config::{EditorConfig, ExportConfig};
pub use grid_config::{is_grid_size, parse_grid_size, parse_positive_or, GridInput, GridSpec};
