//! A tile on the board or in hand: kind, rotation and meeple occupancy.
//!
//! `Tile` is a small `Copy` value. Every transition (`rotate`, `place_meeple`,
//! ...) returns a new value, so a board snapshot can be shared freely
//! between renderers.

use std::f64::consts::FRAC_PI_2;

use super::catalog::{asset_of, attachment_points_of, edges_of};
use super::types::*;

/// A meeple standing on one of the tile's attachment points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meeple {
    pub position: i32,
    pub color: MeepleColor,
    pub id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    kind: TileKind,
    edition: Edition,
    /// Quarter turns, 0..=3.
    direction: u8,
    edges: [Edge; 4],
    points: &'static [AttachmentPoint],
    meeple: Option<Meeple>,
    frame: Option<MeepleColor>,
}

impl Tile {
    pub fn new(rotation: u32, kind: TileKind, edition: Edition) -> Self {
        Self {
            kind,
            edition,
            direction: (rotation % 4) as u8,
            edges: edges_of(kind),
            points: attachment_points_of(kind, edition),
            meeple: None,
            frame: None,
        }
    }

    /// Build a tile from the server's sentinel encoding of occupancy
    /// (`-1` position/id, no color). A partially set triple is treated as
    /// an empty tile.
    pub fn with_state(
        rotation: u32,
        kind: TileKind,
        meeple_color: Option<MeepleColor>,
        meepled_position: i32,
        meeple_id: i32,
        edition: Edition,
    ) -> Self {
        let tile = Self::new(rotation, kind, edition);
        match meeple_color {
            Some(color) => tile.place_meeple(meepled_position, color, meeple_id),
            None => tile,
        }
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn rotation(&self) -> u32 {
        self.direction as u32
    }

    /// Canonical (rotation 0) edges snapshotted at construction.
    pub fn edges(&self) -> [Edge; 4] {
        self.edges
    }

    pub fn asset(&self) -> String {
        asset_of(self.kind, self.edition)
    }

    // --- Edges as seen at the current rotation ---

    #[inline]
    pub fn edge(&self, side: Side) -> Edge {
        self.edges[(side as usize + self.direction as usize) % 4]
    }

    pub fn right(&self) -> Edge {
        self.edge(Side::Right)
    }

    pub fn top(&self) -> Edge {
        self.edge(Side::Top)
    }

    pub fn left(&self) -> Edge {
        self.edge(Side::Left)
    }

    pub fn bottom(&self) -> Edge {
        self.edge(Side::Bottom)
    }

    // --- Transitions ---

    #[must_use]
    pub fn rotate(self) -> Self {
        Self {
            direction: (self.direction + 1) % 4,
            ..self
        }
    }

    #[must_use]
    pub fn reset_direction(self) -> Self {
        Self { direction: 0, ..self }
    }

    /// Overwrites any previous occupancy. Indices are trusted as given by the
    /// server; a negative position or id clears the tile instead.
    #[must_use]
    pub fn place_meeple(self, position: i32, color: MeepleColor, meeple_id: i32) -> Self {
        if position < 0 || meeple_id < 0 {
            return self.remove_meeple();
        }
        Self {
            meeple: Some(Meeple {
                position,
                color,
                id: meeple_id,
            }),
            ..self
        }
    }

    #[must_use]
    pub fn remove_meeple(self) -> Self {
        Self { meeple: None, ..self }
    }

    /// Highlight only; no effect on game state.
    #[must_use]
    pub fn add_frame(self, color: MeepleColor) -> Self {
        Self {
            frame: Some(color),
            ..self
        }
    }

    // --- Occupancy ---

    pub fn meeple(&self) -> Option<Meeple> {
        self.meeple
    }

    pub fn meepled_position(&self) -> i32 {
        self.meeple.map_or(-1, |m| m.position)
    }

    pub fn meeple_color(&self) -> Option<MeepleColor> {
        self.meeple.map(|m| m.color)
    }

    pub fn meeple_id(&self) -> i32 {
        self.meeple.map_or(-1, |m| m.id)
    }

    pub fn frame(&self) -> Option<MeepleColor> {
        self.frame
    }

    // --- Attachment points ---

    /// Canonical (rotation 0) attachment points.
    pub fn default_meepleable_positions(&self) -> &'static [AttachmentPoint] {
        self.points
    }

    /// Attachment points whose index is in `empty_positions`, rotated by
    /// -90° per quarter turn into screen orientation.
    pub fn meepleable_positions(&self, empty_positions: &[i32]) -> Vec<Position> {
        let theta = -FRAC_PI_2 * self.direction as f64;
        let (sin, cos) = theta.sin_cos();
        self.points
            .iter()
            .filter(|p| empty_positions.contains(&p.idx))
            .map(|p| Position {
                idx: p.idx,
                y: p.x * sin + p.y * cos,
                x: p.x * cos - p.y * sin,
                is_field: p.is_field,
            })
            .collect()
    }
}
