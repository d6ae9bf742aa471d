//! Wire records exchanged with the game server.

use serde::{Deserialize, Serialize};

use crate::tiles::types::TileKind;

/// One board cell as sent by `GET /board`. `id == -1` marks an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTile {
    pub id: i32,
    pub rot: i32,
    pub meeple_id: i32,
    pub meeple_pos: i32,
}

impl BoardTile {
    pub const EMPTY: BoardTile = BoardTile {
        id: -1,
        rot: 0,
        meeple_id: -1,
        meeple_pos: -1,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteEvent {
    pub meeple_ids: Vec<i32>,
    pub feature: String,
    pub point: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub player0_point: i32,
    pub player1_point: i32,
    #[serde(default)]
    pub meepleable_positions: Vec<i32>,
    pub tiles: Vec<Vec<BoardTile>>,
    #[serde(default)]
    pub complete_events: Vec<CompleteEvent>,
}

// --- Move requests (client -> server) ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMoveRequest {
    pub game_id: Option<i32>,
    pub player_id: i32,
    pub tile_id: i32,
    pub rot: i32,
    pub pos_y: i32,
    pub pos_x: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeepleMoveRequest {
    pub game_id: Option<i32>,
    pub player_id: i32,
    pub meeple_id: i32,
    pub pos: i32,
    pub tile_pos_y: i32,
    pub tile_pos_x: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardMoveRequest {
    pub game_id: i32,
    pub player_id: i32,
    pub tile_id: i32,
}

// --- Move history (server -> client) ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMove {
    pub id: i32,
    pub ord: i32,
    #[serde(default)]
    pub game_id: Option<i32>,
    pub player_id: i32,
    pub tile: TileKind,
    pub rot: i32,
    /// (y, x) in server coordinates.
    pub pos: (i32, i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeepleMove {
    pub id: i32,
    pub ord: i32,
    #[serde(default)]
    pub game_id: Option<i32>,
    pub player_id: i32,
    pub meeple_id: i32,
    pub tile_pos: (i32, i32),
    pub meeple_pos: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardMove {
    pub id: i32,
    pub ord: i32,
    #[serde(default)]
    pub game_id: Option<i32>,
    pub player_id: i32,
    pub tile: TileKind,
}

/// Externally tagged as the server sends it: `{"TMove": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    TMove(TileMove),
    MMove(MeepleMove),
    DMove(DiscardMove),
}

impl Move {
    pub fn ord(&self) -> i32 {
        match self {
            Move::TMove(m) => m.ord,
            Move::MMove(m) => m.ord,
            Move::DMove(m) => m.ord,
        }
    }
}

/// Kinds that have left the deck: placed or discarded, in history order.
pub fn drawn_kinds(moves: &[Move]) -> Vec<TileKind> {
    moves
        .iter()
        .filter_map(|m| match m {
            Move::TMove(t) => Some(t.tile),
            Move::DMove(d) => Some(d.tile),
            Move::MMove(_) => None,
        })
        .collect()
}
