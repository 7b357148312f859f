use crate::config::GridInput;
use crate::maze_errors::{MazeError, MazeResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_EXPORT_FILE: &str = "map.json";
pub const EXPORT_CONTENT_TYPE: &str = "application/json";

/// Complete configuration for an editor host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid: GridInput,
    pub export: ExportConfig,
}

/// Where and how export snapshots are saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Suggested file name for saved snapshots
    pub file_name: String,
    /// Content type announced alongside the saved bytes
    pub content_type: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_EXPORT_FILE.to_string(),
            content_type: EXPORT_CONTENT_TYPE.to_string(),
        }
    }
}

impl EditorConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MazeResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: EditorConfig = serde_json::from_str(&contents).map_err(|e| {
            MazeError::ConfigError(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> MazeResult<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| MazeError::ConfigError(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply `MAZE_*` overrides from any key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(size) = lookup("MAZE_GRID_SIZE") {
            self.grid.grid_size = size;
        }
        if let Some(cell) = lookup("MAZE_CELL_SIZE") {
            self.grid.cell_size = cell;
        }
        if let Some(stroke) = lookup("MAZE_STROKE_WIDTH") {
            self.grid.stroke_width = stroke;
        }
        if let Some(dots) = lookup("MAZE_SHOW_DOTS") {
            self.grid.show_dots = matches!(dots.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(file) = lookup("MAZE_EXPORT_FILE") {
            self.export.file_name = file;
        }
        debug!("Editor configuration after overrides: {:?}", self);
    }

    /// Validate configuration values. Grid values need no validation since
    /// malformed ones fall back to defaults.
    pub fn validate(&self) -> MazeResult<()> {
        if self.export.file_name.trim().is_empty() {
            return Err(MazeError::ConfigError(
                "Export file name must not be empty".into(),
            ));
        }
        if self.export.content_type.trim().is_empty() {
            return Err(MazeError::ConfigError(
                "Export content type must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.export.file_name, "map.json");
        assert_eq!(config.export.content_type, "application/json");
        assert_eq!(config.grid.grid_size, "10x10");
        assert!(config.grid.show_dots);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("MAZE_GRID_SIZE", "4x3"),
            ("MAZE_SHOW_DOTS", "false"),
            ("MAZE_EXPORT_FILE", "level.json"),
        ]
        .into_iter()
        .collect();

        let mut config = EditorConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.grid.grid_size, "4x3");
        assert!(!config.grid.show_dots);
        assert_eq!(config.grid.cell_size, "40");
        assert_eq!(config.export.file_name, "level.json");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{ "grid": { "grid_size": "6x2" } }"#).unwrap();
        assert_eq!(config.grid.grid_size, "6x2");
        assert_eq!(config.grid.stroke_width, "3");
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "edge_maze_config_{}.json",
            std::process::id()
        ));
        let mut config = EditorConfig::default();
        config.grid.grid_size = "7x5".into();
        config.save_to_file(&path).unwrap();

        let loaded = EditorConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_bad_file_is_config_error() {
        let path = std::env::temp_dir().join(format!(
            "edge_maze_bad_config_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").unwrap();
        let result = EditorConfig::load_from_file(&path);
        assert!(matches!(result, Err(MazeError::ConfigError(_))));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_empty_file_name_rejected() {
        let mut config = EditorConfig::default();
        config.export.file_name = "  ".into();
        assert!(config.validate().is_err());
    }
}
