use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::ui::board_view::Glyphs;
use crate::ui::prompt::DIMENSION_RANGE;

/// Board size offered when the dimension prompt is left empty.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Games played when the game-count prompt is left empty.
    pub games: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { games: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub names: [String; 2],
    pub markers: [char; 2],
    pub color: bool,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            names: ["Player 1".to_string(), "Player 2".to_string()],
            markers: ['X', 'O'],
            color: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub session: SessionConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !DIMENSION_RANGE.contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in {}..={}",
                DIMENSION_RANGE.start(),
                DIMENSION_RANGE.end()
            )));
        }
        if !DIMENSION_RANGE.contains(&self.board.columns) {
            return Err(ConfigError::Validation(format!(
                "board.columns must be in {}..={}",
                DIMENSION_RANGE.start(),
                DIMENSION_RANGE.end()
            )));
        }
        if self.session.games == 0 {
            return Err(ConfigError::Validation(
                "session.games must be >= 1".into(),
            ));
        }
        if self.players.names.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "players.names must not be blank".into(),
            ));
        }
        let [one, two] = self.players.markers;
        if one.is_whitespace() || two.is_whitespace() {
            return Err(ConfigError::Validation(
                "players.markers must be visible characters".into(),
            ));
        }
        if one == two {
            return Err(ConfigError::Validation(
                "players.markers must differ".into(),
            ));
        }

        Ok(())
    }

    /// Marker glyphs for rendering; `color` is further gated by the caller
    /// (e.g. when stdout is not a terminal).
    pub fn glyphs(&self, color: bool) -> Glyphs {
        let [player_one, player_two] = self.players.markers;
        Glyphs {
            player_one,
            player_two,
            color: color && self.players.color,
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!((config.board.rows, config.board.columns), (6, 7));
        assert_eq!(config.session.games, 1);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
rows = 8
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.rows, 8);
        assert_eq!(config.board.columns, 7);
        assert_eq!(config.players.markers, ['X', 'O']);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = AppConfig::default();
        config.board.rows = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_large_board() {
        let mut config = AppConfig::default();
        config.board.columns = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.session.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut config = AppConfig::default();
        config.players.names[1] = "   ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_same_markers() {
        let mut config = AppConfig::default();
        config.players.markers = ['X', 'X'];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_whitespace_marker() {
        let mut config = AppConfig::default();
        config.players.markers = [' ', 'O'];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_glyphs_respect_color_gate() {
        let config = AppConfig::default();
        assert!(config.glyphs(true).color);
        assert!(!config.glyphs(false).color);
        assert_eq!(config.glyphs(false).player_two, 'O');
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.session.games, 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[session]
games = 3

[players]
names = ["Alice", "Bob"]
markers = ["R", "Y"]
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.session.games, 3);
        assert_eq!(config.players.names, ["Alice", "Bob"]);
        assert_eq!(config.players.markers, ['R', 'Y']);
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nrows = 3\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
