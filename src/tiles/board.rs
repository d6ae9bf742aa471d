//! Client-side board: a square grid of optional tiles built from server
//! snapshots, plus grid <-> server coordinate translation.

use crate::api::models::{BoardSnapshot, BoardTile, MeepleMoveRequest, TileMoveRequest};
use crate::error::{Result, TileError};

use super::catalog::STARTING_TILE;
use super::tile::Tile;
use super::types::*;

/// Half side length of the standard 41x41 board.
pub const DEFAULT_BOARD_HALF: usize = 20;

/// Meeple ids below this belong to player 0, the rest to player 1.
pub const MEEPLES_PER_PLAYER: i32 = 7;

/// Seat (0 or 1) owning a meeple id, or `None` for the -1 sentinel.
pub fn meeple_owner(meeple_id: i32) -> Option<usize> {
    match meeple_id {
        id if id < 0 => None,
        id if id < MEEPLES_PER_PLAYER => Some(0),
        _ => Some(1),
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    half: usize,
    cells: Vec<Option<Tile>>,
}

impl Board {
    pub fn empty(half: usize) -> Self {
        let size = 2 * half + 1;
        Self {
            half,
            cells: vec![None; size * size],
        }
    }

    /// Empty board with the starting tile at the centre, rotation 0.
    pub fn initial(half: usize, edition: Edition) -> Self {
        let mut board = Self::empty(half);
        board.set(half, half, Some(Tile::new(0, STARTING_TILE, edition)));
        board
    }

    /// Materialize a snapshot. Meeple colors are assigned per seat from the
    /// meeple id; unknown tile ids are rejected.
    pub fn from_snapshot(
        snapshot: &BoardSnapshot,
        player0_color: MeepleColor,
        player1_color: MeepleColor,
        edition: Edition,
    ) -> Result<Self> {
        let size = snapshot.tiles.len();
        if size == 0 || size % 2 == 0 {
            return Err(TileError::MalformedBoard(format!(
                "expected an odd side length, got {size}"
            )));
        }
        if let Some(row) = snapshot.tiles.iter().position(|r| r.len() != size) {
            return Err(TileError::MalformedBoard(format!(
                "row {row} has {} cells, expected {size}",
                snapshot.tiles[row].len()
            )));
        }

        let mut board = Self::empty((size - 1) / 2);
        let mut placed = 0usize;
        for (row, cells) in snapshot.tiles.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let tile = decode_cell(cell, player0_color, player1_color, edition)?;
                placed += tile.is_some() as usize;
                board.set(row, col, tile);
            }
        }
        tracing::debug!(size, placed, ?edition, "assembled board from snapshot");
        Ok(board)
    }

    pub fn half(&self) -> usize {
        self.half
    }

    pub fn size(&self) -> usize {
        2 * self.half + 1
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let size = self.size();
        (row < size && col < size).then_some(row * size + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.index(row, col).and_then(|i| self.cells[i].as_ref())
    }

    /// Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, tile: Option<Tile>) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = tile;
        }
    }

    /// Occupied cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = ((usize, usize), &Tile)> + '_ {
        let size = self.size();
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, t)| t.as_ref().map(|t| ((i / size, i % size), t)))
    }

    // --- Coordinates ---

    /// Grid index -> server (y, x), origin at the centre.
    pub fn to_server(&self, row: usize, col: usize) -> (i32, i32) {
        let half = self.half as i32;
        (row as i32 - half, col as i32 - half)
    }

    /// Server (y, x) -> grid index, `None` when off the board.
    pub fn from_server(&self, y: i32, x: i32) -> Option<(usize, usize)> {
        let half = self.half as i32;
        let row = usize::try_from(y.checked_add(half)?).ok()?;
        let col = usize::try_from(x.checked_add(half)?).ok()?;
        self.index(row, col).map(|_| (row, col))
    }

    fn neighbor(&self, row: usize, col: usize, side: Side) -> Option<&Tile> {
        let (dr, dc) = side.grid_offset();
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.get(r, c)
    }

    /// Preview check for placing `tile` at an empty cell: at least one
    /// neighbour, and every neighbour shows the same terrain on the shared
    /// edge. The server remains the authority on legality.
    pub fn fits(&self, tile: &Tile, row: usize, col: usize) -> bool {
        if self.index(row, col).is_none() || self.get(row, col).is_some() {
            return false;
        }
        let mut has_neighbor = false;
        for side in Side::ALL {
            let Some(neighbor) = self.neighbor(row, col, side) else {
                continue;
            };
            has_neighbor = true;
            if tile.edge(side) != neighbor.edge(side.opposite()) {
                return false;
            }
        }
        has_neighbor
    }

    /// First open cell and rotation where a `kind` tile fits, scanning cells
    /// in sorted order and rotations 0..4. `None` means the tile would be
    /// discarded.
    pub fn first_fit(&self, kind: TileKind, edition: Edition) -> Option<(Tile, usize, usize)> {
        self.open_cells().into_iter().find_map(|(row, col)| {
            let mut tile = Tile::new(0, kind, edition);
            for _ in 0..4 {
                if self.fits(&tile, row, col) {
                    return Some((tile, row, col));
                }
                tile = tile.rotate();
            }
            None
        })
    }

    /// Empty cells orthogonally adjacent to a placed tile, sorted.
    pub fn open_cells(&self) -> Vec<(usize, usize)> {
        let mut open: Vec<(usize, usize)> = self
            .tiles()
            .flat_map(|((row, col), _)| {
                Side::ALL.into_iter().filter_map(move |side| {
                    let (dr, dc) = side.grid_offset();
                    Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
                })
            })
            .filter(|&(r, c)| self.index(r, c).is_some() && self.get(r, c).is_none())
            .collect();
        open.sort_unstable();
        open.dedup();
        open
    }

    /// Encode back into the wire grid, e.g. for fixtures.
    pub fn to_board_tiles(&self) -> Vec<Vec<BoardTile>> {
        let size = self.size();
        (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| match self.get(row, col) {
                        Some(t) => BoardTile {
                            id: t.kind().id(),
                            rot: t.rotation() as i32,
                            meeple_id: t.meeple_id(),
                            meeple_pos: t.meepled_position(),
                        },
                        None => BoardTile::EMPTY,
                    })
                    .collect()
            })
            .collect()
    }

    // --- Move requests ---

    pub fn tile_move_request(
        &self,
        game_id: Option<i32>,
        player_id: i32,
        tile: &Tile,
        row: usize,
        col: usize,
    ) -> TileMoveRequest {
        let (pos_y, pos_x) = self.to_server(row, col);
        TileMoveRequest {
            game_id,
            player_id,
            tile_id: tile.kind().id(),
            rot: tile.rotation() as i32,
            pos_y,
            pos_x,
        }
    }

    pub fn meeple_move_request(
        &self,
        game_id: Option<i32>,
        player_id: i32,
        meeple_id: i32,
        pos: i32,
        row: usize,
        col: usize,
    ) -> MeepleMoveRequest {
        let (tile_pos_y, tile_pos_x) = self.to_server(row, col);
        MeepleMoveRequest {
            game_id,
            player_id,
            meeple_id,
            pos,
            tile_pos_y,
            tile_pos_x,
        }
    }
}

fn decode_cell(
    cell: &BoardTile,
    player0_color: MeepleColor,
    player1_color: MeepleColor,
    edition: Edition,
) -> Result<Option<Tile>> {
    if cell.id == -1 {
        return Ok(None);
    }
    let kind = TileKind::from_id(cell.id)?;
    let color = meeple_owner(cell.meeple_id).map(|seat| match seat {
        0 => player0_color,
        _ => player1_color,
    });
    Ok(Some(Tile::with_state(
        cell.rot.rem_euclid(4) as u32,
        kind,
        color,
        cell.meeple_pos,
        cell.meeple_id,
        edition,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_3x3(cells: [[BoardTile; 3]; 3]) -> BoardSnapshot {
        BoardSnapshot {
            player0_point: 0,
            player1_point: 0,
            meepleable_positions: vec![],
            tiles: cells.iter().map(|r| r.to_vec()).collect(),
            complete_events: vec![],
        }
    }

    fn cell(id: i32, rot: i32, meeple_id: i32, meeple_pos: i32) -> BoardTile {
        BoardTile { id, rot, meeple_id, meeple_pos }
    }

    #[test]
    fn test_initial_board() {
        let board = Board::initial(DEFAULT_BOARD_HALF, Edition::First);
        assert_eq!(board.size(), 41);
        let centre = board.get(20, 20).unwrap();
        assert_eq!(centre.kind(), TileKind::StartingTile);
        assert_eq!(centre.rotation(), 0);
        assert_eq!(board.tiles().count(), 1);
    }

    #[test]
    fn test_coordinate_translation() {
        let board = Board::empty(DEFAULT_BOARD_HALF);
        assert_eq!(board.to_server(20, 20), (0, 0));
        assert_eq!(board.to_server(19, 22), (-1, 2));
        assert_eq!(board.from_server(-1, 2), Some((19, 22)));
        assert_eq!(board.from_server(-21, 0), None);
        assert_eq!(board.from_server(0, 21), None);
        assert_eq!(board.from_server(i32::MAX, 0), None);
        assert_eq!(board.from_server(i32::MIN, 0), None);
        assert_eq!(board.from_server(0, i32::MAX), None);
        assert_eq!(board.from_server(0, i32::MIN), None);
    }

    #[test]
    fn test_meeple_owner_split() {
        assert_eq!(meeple_owner(-1), None);
        assert_eq!(meeple_owner(0), Some(0));
        assert_eq!(meeple_owner(6), Some(0));
        assert_eq!(meeple_owner(7), Some(1));
        assert_eq!(meeple_owner(13), Some(1));
    }

    #[test]
    fn test_from_snapshot_colors_by_seat() {
        let e = BoardTile::EMPTY;
        let snap = snapshot_3x3([
            [e, cell(10, 1, 3, 1), e],
            [e, cell(0, 0, -1, -1), cell(6, 5, 9, 0)],
            [e, e, e],
        ]);
        let board = Board::from_snapshot(&snap, MeepleColor::Red, MeepleColor::Blue, Edition::First).unwrap();
        assert_eq!(board.half(), 1);
        assert_eq!(board.tiles().count(), 3);

        let top = board.get(0, 1).unwrap();
        assert_eq!(top.kind(), TileKind::Curve);
        assert_eq!(top.meeple_color(), Some(MeepleColor::Red));
        assert_eq!(top.meepled_position(), 1);

        let right = board.get(1, 2).unwrap();
        assert_eq!(right.rotation(), 1);
        assert_eq!(right.meeple_color(), Some(MeepleColor::Blue));
        assert_eq!(right.meeple_id(), 9);

        assert_eq!(board.get(1, 1).unwrap().meeple(), None);
        assert!(board.get(2, 2).is_none());
    }

    #[test]
    fn test_from_snapshot_rejects_unknown_kind() {
        let e = BoardTile::EMPTY;
        let snap = snapshot_3x3([[e, e, e], [e, cell(31, 0, -1, -1), e], [e, e, e]]);
        let err = Board::from_snapshot(&snap, MeepleColor::Red, MeepleColor::Blue, Edition::First).unwrap_err();
        assert!(matches!(err, TileError::UnknownTileKind(31)));
    }

    #[test]
    fn test_from_snapshot_rejects_ragged_grid() {
        let mut snap = snapshot_3x3([[BoardTile::EMPTY; 3]; 3]);
        snap.tiles[1].pop();
        assert!(matches!(
            Board::from_snapshot(&snap, MeepleColor::Red, MeepleColor::Blue, Edition::First),
            Err(TileError::MalformedBoard(_))
        ));
        snap.tiles.clear();
        assert!(Board::from_snapshot(&snap, MeepleColor::Red, MeepleColor::Blue, Edition::First).is_err());
    }

    #[test]
    fn test_fits_against_starting_tile() {
        let board = Board::initial(2, Edition::First);
        // Starting tile shows city on top; a CityCap turned upside down
        // (rotation 2) shows city on its bottom.
        let cap = Tile::new(2, TileKind::CityCap, Edition::First);
        assert!(board.fits(&cap, 1, 2));
        assert!(!board.fits(&cap.rotate(), 1, 2));
        // Straight at rotation 0 shows road on top and bottom, field left/right.
        let straight = Tile::new(0, TileKind::Straight, Edition::First);
        assert!(!board.fits(&straight, 2, 3));
        assert!(board.fits(&straight.rotate(), 2, 3));
        // Occupied and isolated cells never fit.
        assert!(!board.fits(&straight, 2, 2));
        assert!(!board.fits(&straight, 0, 0));
    }

    #[test]
    fn test_first_fit_picks_lowest_cell_and_rotation() {
        let board = Board::initial(2, Edition::First);
        // (1, 2) is the first open cell; the cap needs rotation 2 to face
        // its city down onto the starting tile.
        let (tile, row, col) = board.first_fit(TileKind::CityCap, Edition::First).unwrap();
        assert_eq!((row, col), (1, 2));
        assert_eq!(tile.rotation(), 2);
        assert_eq!(tile.meeple(), None);

        let empty = Board::empty(2);
        assert!(empty.first_fit(TileKind::Curve, Edition::First).is_none());
    }

    #[test]
    fn test_open_cells() {
        let board = Board::initial(DEFAULT_BOARD_HALF, Edition::First);
        assert_eq!(board.open_cells(), vec![(19, 20), (20, 19), (20, 21), (21, 20)]);
        let corner = {
            let mut b = Board::empty(1);
            b.set(0, 0, Some(Tile::new(0, TileKind::Monastery, Edition::First)));
            b
        };
        assert_eq!(corner.open_cells(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_board_tiles_roundtrip_through_snapshot() {
        let mut board = Board::initial(1, Edition::First);
        board.set(0, 1, Some(Tile::new(2, TileKind::CityCap, Edition::First).place_meeple(0, MeepleColor::Yellow, 8)));
        let snap = BoardSnapshot {
            player0_point: 0,
            player1_point: 0,
            meepleable_positions: vec![],
            tiles: board.to_board_tiles(),
            complete_events: vec![],
        };
        assert_eq!(snap.tiles[0][1], cell(7, 2, 8, 0));
        let again = Board::from_snapshot(&snap, MeepleColor::Red, MeepleColor::Yellow, Edition::First).unwrap();
        assert_eq!(again.get(0, 1), board.get(0, 1));
        assert_eq!(again.get(1, 1), board.get(1, 1));
    }

    #[test]
    fn test_move_requests_use_server_coordinates() {
        let board = Board::initial(DEFAULT_BOARD_HALF, Edition::First);
        let tile = Tile::new(3, TileKind::Left, Edition::First);
        let req = board.tile_move_request(Some(5), 2, &tile, 19, 20);
        assert_eq!((req.tile_id, req.rot, req.pos_y, req.pos_x), (14, 3, -1, 0));
        let req = board.meeple_move_request(None, 2, 4, 1, 21, 18);
        assert_eq!((req.tile_pos_y, req.tile_pos_x), (1, -2));
    }
}
