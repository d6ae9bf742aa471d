//! Client settings loaded from `meeple_tiles.toml`.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TileError};
use crate::tiles::board::{Board, DEFAULT_BOARD_HALF};
use crate::tiles::types::{Edition, MeepleColor};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Board side is `2 * board_half_size + 1`.
    pub board_half_size: usize,
    pub edition: Edition,
    pub player0_color: MeepleColor,
    pub player1_color: MeepleColor,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            board_half_size: DEFAULT_BOARD_HALF,
            edition: Edition::First,
            player0_color: MeepleColor::Red,
            player1_color: MeepleColor::Yellow,
        }
    }
}

impl ClientConfig {
    /// Fresh board of the configured size with the starting tile at the centre.
    pub fn initial_board(&self) -> Board {
        Board::initial(self.board_half_size, self.edition)
    }

    /// Warn when a server snapshot disagrees with the configured board size.
    pub fn check_board_size(&self, board: &Board) -> bool {
        let matches = board.half() == self.board_half_size;
        if !matches {
            tracing::warn!(
                configured = self.board_half_size,
                snapshot = board.half(),
                "board size differs from config"
            );
        }
        matches
    }
}

/// Load settings from a TOML file at the given path.
pub fn load_config(path: &Path) -> Result<ClientConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| TileError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| TileError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Try well-known paths, falling back to defaults if none can be loaded.
pub fn load_default_config() -> ClientConfig {
    let candidates = [
        "meeple_tiles.toml",
        "../meeple_tiles.toml",
        "/etc/meeple/meeple_tiles.toml",
    ];
    for path in &candidates {
        let p = Path::new(path);
        if p.exists() {
            match load_config(p) {
                Ok(config) => {
                    tracing::info!(path = %p.display(), ?config.edition, "loaded client config");
                    return config;
                }
                Err(e) => {
                    tracing::warn!(path = %p.display(), error = %e, "failed to load client config");
                }
            }
        }
    }
    tracing::info!("no meeple_tiles.toml found, using built-in defaults");
    ClientConfig::default()
}
