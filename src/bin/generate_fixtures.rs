//! Fixture generator for snapshot tests.
//!
//! Lays out a seeded, shuffled draw bag greedily (first open cell and
//! rotation that fits) on a board built from `meeple_tiles.toml`,
//! places a meeple on every third tile while supply
//! lasts, and writes board snapshots at fixed tile counts. Run with:
//!
//!     cargo run --bin generate_fixtures

use std::fs;
use std::path::PathBuf;

use meeple_tiles::api::models::BoardSnapshot;
use meeple_tiles::config::load_default_config;
use meeple_tiles::tiles::board::MEEPLES_PER_PLAYER;
use meeple_tiles::tiles::supply::shuffled_tile_bag;

const SEEDS: [u64; 3] = [42, 123, 999];
const CHECKPOINTS: [usize; 4] = [5, 15, 30, 50];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let fixtures_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/generated");
    fs::create_dir_all(&fixtures_dir)?;

    let config = load_default_config();
    let mut total_generated = 0;

    for &seed in &SEEDS {
        let mut board = config.initial_board();
        let mut next_meeple = [0, MEEPLES_PER_PLAYER];
        let mut placed = 0usize;
        let mut discarded = 0usize;

        for (turn, kind) in shuffled_tile_bag(seed).into_iter().enumerate() {
            let seat = turn % 2;
            let Some((mut tile, row, col)) = board.first_fit(kind, config.edition) else {
                discarded += 1;
                continue;
            };

            let limit = MEEPLES_PER_PLAYER * (seat as i32 + 1);
            if placed % 3 == 0 && next_meeple[seat] < limit {
                let color = if seat == 0 { config.player0_color } else { config.player1_color };
                tile = tile.place_meeple(0, color, next_meeple[seat]);
                next_meeple[seat] += 1;
            }
            board.set(row, col, Some(tile));
            placed += 1;

            if CHECKPOINTS.contains(&placed) {
                let snapshot = BoardSnapshot {
                    player0_point: 0,
                    player1_point: 0,
                    meepleable_positions: vec![],
                    tiles: board.to_board_tiles(),
                    complete_events: vec![],
                };
                let path = fixtures_dir.join(format!("seed{seed}_tiles{placed:02}.json"));
                fs::write(&path, serde_json::to_string(&snapshot)?)?;
                tracing::info!(path = %path.display(), placed, discarded, "wrote fixture");
                total_generated += 1;
            }
        }
    }

    tracing::info!(total_generated, "done");
    Ok(())
}
