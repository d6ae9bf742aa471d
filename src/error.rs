//! Error taxonomy shared by the catalog, board assembly and config loading.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum TileError {
    #[error("unknown tile kind code: {0}")]
    UnknownTileKind(i32),
    #[error("malformed board snapshot: {0}")]
    MalformedBoard(String),
    #[error("failed to read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, TileError>;
