//! Core tile types: terrains, sides, kinds, meeple colors, editions.

use serde::{Deserialize, Serialize};

use crate::error::TileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Field,
    Road,
    City,
}

/// A tile border as seen on screen. The discriminant is the canonical edge
/// index: edges are stored as [right, top, left, bottom].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Right = 0,
    Top = 1,
    Left = 2,
    Bottom = 3,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Right, Side::Top, Side::Left, Side::Bottom];

    pub fn opposite(self) -> Side {
        match self {
            Side::Right => Side::Left,
            Side::Top => Side::Bottom,
            Side::Left => Side::Right,
            Side::Bottom => Side::Top,
        }
    }

    /// Grid offset (d_row, d_col) of the neighbour across this side.
    /// Rows grow downwards, so the top neighbour is one row up.
    pub fn grid_offset(self) -> (isize, isize) {
        match self {
            Side::Right => (0, 1),
            Side::Top => (-1, 0),
            Side::Left => (0, -1),
            Side::Bottom => (1, 0),
        }
    }
}

// --- Tile kinds ---

/// The 24 base-game tile designs. Declaration order is the wire id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    StartingTile,
    Monastery,
    MonasteryWithRoad,
    CityCapWithCrossroad,
    TriangleWithRoad,
    TriangleWithRoadWithCOA,
    Straight,
    CityCap,
    Separator,
    TripleRoad,
    Curve,
    QuadrupleRoad,
    Connector,
    ConnectorWithCOA,
    Left,
    Right,
    TripleCity,
    TripleCityWithCOA,
    VerticalSeparator,
    TripleCityWithRoad,
    TripleCityWithRoadWithCOA,
    Triangle,
    TriangleWithCOA,
    QuadrupleCityWithCOA,
}

impl TileKind {
    pub const ALL: [TileKind; 24] = [
        TileKind::StartingTile,
        TileKind::Monastery,
        TileKind::MonasteryWithRoad,
        TileKind::CityCapWithCrossroad,
        TileKind::TriangleWithRoad,
        TileKind::TriangleWithRoadWithCOA,
        TileKind::Straight,
        TileKind::CityCap,
        TileKind::Separator,
        TileKind::TripleRoad,
        TileKind::Curve,
        TileKind::QuadrupleRoad,
        TileKind::Connector,
        TileKind::ConnectorWithCOA,
        TileKind::Left,
        TileKind::Right,
        TileKind::TripleCity,
        TileKind::TripleCityWithCOA,
        TileKind::VerticalSeparator,
        TileKind::TripleCityWithRoad,
        TileKind::TripleCityWithRoadWithCOA,
        TileKind::Triangle,
        TileKind::TriangleWithCOA,
        TileKind::QuadrupleCityWithCOA,
    ];

    /// Wire id (0–23) used by the game server.
    #[inline]
    pub fn id(self) -> i32 {
        self as i32
    }

    /// Decode a wire id. Unknown codes are an error, never a fallback kind.
    pub fn from_id(id: i32) -> Result<Self, TileError> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(TileError::UnknownTileKind(id))
    }
}

impl TryFrom<i32> for TileKind {
    type Error = TileError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

// --- Meeple colors ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeepleColor {
    Red,
    Yellow,
    Green,
    Black,
    Blue,
}

impl MeepleColor {
    pub const ALL: [MeepleColor; 5] = [
        MeepleColor::Red,
        MeepleColor::Yellow,
        MeepleColor::Green,
        MeepleColor::Black,
        MeepleColor::Blue,
    ];
}

/// Decode a server color id. Anything outside 0–4 (the server sends -1)
/// means "no color".
pub fn color_from_id(color_id: i32) -> Option<MeepleColor> {
    match color_id {
        0 => Some(MeepleColor::Red),
        1 => Some(MeepleColor::Yellow),
        2 => Some(MeepleColor::Green),
        3 => Some(MeepleColor::Black),
        4 => Some(MeepleColor::Blue),
        _ => None,
    }
}

pub fn color_to_id(color: Option<MeepleColor>) -> i32 {
    match color {
        Some(MeepleColor::Red) => 0,
        Some(MeepleColor::Yellow) => 1,
        Some(MeepleColor::Green) => 2,
        Some(MeepleColor::Black) => 3,
        Some(MeepleColor::Blue) => 4,
        None => -1,
    }
}

// --- Editions ---

/// Presentation skin. Selects the image set and the attachment-point table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    #[default]
    First,
    Second,
}

// --- Attachment points ---

/// A meepleable spot in tile-local coordinates: [-1,1]², y up, x right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttachmentPoint {
    pub idx: i32,
    pub y: f64,
    pub x: f64,
    pub is_field: bool,
}

/// An attachment point after the tile's rotation has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub idx: i32,
    pub y: f64,
    pub x: f64,
    pub is_field: bool,
}
