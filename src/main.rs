use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use meeple_tiles::api::models::BoardSnapshot;
use meeple_tiles::config::{load_config, load_default_config, ClientConfig};
use meeple_tiles::tiles::board::Board;
use meeple_tiles::tiles::catalog::{asset_of, attachment_points_of, edges_of, supply_of};
use meeple_tiles::tiles::supply::remaining_counts;
use meeple_tiles::tiles::tile::Tile;
use meeple_tiles::tiles::types::{Edge, Edition, TileKind};

#[derive(Parser)]
#[command(name = "meeple-tiles", about = "Inspect the tile catalog and board snapshots")]
struct Cli {
    /// Path to meeple_tiles.toml (default: auto-discover)
    #[arg(long, env = "MEEPLE_TILES_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Override the configured edition
    #[arg(long, value_parser = parse_edition, global = true)]
    edition: Option<Edition>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every tile kind with its edges, supply and asset
    Catalog,
    /// Remaining tile counts after the given kind ids were drawn
    Remaining {
        #[arg(allow_negative_numbers = true)]
        drawn: Vec<i32>,
    },
    /// Assemble a board snapshot JSON file and print it
    Board { snapshot: PathBuf },
    /// Rotated meepleable positions of one tile kind
    Positions {
        kind: i32,
        #[arg(long, default_value = "0")]
        rot: u32,
        /// Empty attachment indices (default: all)
        #[arg(long, value_delimiter = ',')]
        empty: Option<Vec<i32>>,
    },
}

fn parse_edition(s: &str) -> Result<Edition, String> {
    match s {
        "first" | "1" => Ok(Edition::First),
        "second" | "2" => Ok(Edition::Second),
        _ => Err(format!("unknown edition: {s}")),
    }
}

fn edge_char(edge: Edge) -> char {
    match edge {
        Edge::Field => 'F',
        Edge::Road => 'R',
        Edge::City => 'C',
    }
}

fn print_board(board: &Board) {
    let cells: Vec<(usize, usize)> = board.tiles().map(|(pos, _)| pos).collect();
    let Some(min_row) = cells.iter().map(|p| p.0).min() else {
        println!("(empty board)");
        return;
    };
    let max_row = cells.iter().map(|p| p.0).max().unwrap_or(min_row);
    let min_col = cells.iter().map(|p| p.1).min().unwrap_or(0);
    let max_col = cells.iter().map(|p| p.1).max().unwrap_or(min_col);

    for row in min_row..=max_row {
        let line: String = (min_col..=max_col)
            .map(|col| match board.get(row, col) {
                Some(t) if t.meeple().is_some() => format!("{:>3}*{}", t.kind().id(), t.rotation()),
                Some(t) => format!("{:>3}:{}", t.kind().id(), t.rotation()),
                None => "    .".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        let (y, _) = board.to_server(row, min_col);
        println!("{y:>4} | {line}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    let mut config: ClientConfig = match cli.config {
        Some(ref path) => load_config(path)?,
        None => load_default_config(),
    };
    if let Some(edition) = cli.edition {
        config.edition = edition;
    }

    match cli.command {
        Command::Catalog => {
            for kind in TileKind::ALL {
                let edges: String = edges_of(kind).into_iter().map(edge_char).collect();
                println!(
                    "{:>2} {:<26} {} x{:<2} points={} {}",
                    kind.id(),
                    format!("{kind:?}"),
                    edges,
                    supply_of(kind),
                    attachment_points_of(kind, config.edition).len(),
                    asset_of(kind, config.edition),
                );
            }
        }
        Command::Remaining { drawn } => {
            let drawn = drawn
                .into_iter()
                .map(TileKind::from_id)
                .collect::<Result<Vec<_>, _>>()?;
            let counts = remaining_counts(&drawn);
            for (kind, n) in &counts {
                println!("{:<26} {}", format!("{kind:?}"), n);
            }
            println!("total {}", counts.values().sum::<u32>());
        }
        Command::Board { snapshot } => {
            let content = std::fs::read_to_string(&snapshot)?;
            let snapshot: BoardSnapshot = serde_json::from_str(&content)?;
            let board = Board::from_snapshot(
                &snapshot,
                config.player0_color,
                config.player1_color,
                config.edition,
            )?;
            config.check_board_size(&board);
            tracing::info!(
                tiles = board.tiles().count(),
                open = board.open_cells().len(),
                "loaded board"
            );
            print_board(&board);
            println!("points: {} - {}", snapshot.player0_point, snapshot.player1_point);
            for event in &snapshot.complete_events {
                println!("  {} +{} meeples={:?}", event.feature, event.point, event.meeple_ids);
            }
        }
        Command::Positions { kind, rot, empty } => {
            let tile = Tile::new(rot, TileKind::from_id(kind)?, config.edition);
            let empty = empty.unwrap_or_else(|| {
                tile.default_meepleable_positions().iter().map(|p| p.idx).collect()
            });
            for p in tile.meepleable_positions(&empty) {
                println!(
                    "{:>2} y={:+.3} x={:+.3} {}",
                    p.idx,
                    p.y,
                    p.x,
                    if p.is_field { "field" } else { "feature" }
                );
            }
        }
    }

    Ok(())
}
