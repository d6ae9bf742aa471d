//! Complete tile catalog for the base game (24 kinds, 72 tiles).
//!
//! Edges are listed in canonical order [right, top, left, bottom].
//! Attachment-point indices are shared with the game server and must never be
//! renumbered.

use once_cell::sync::Lazy;

use super::types::*;

use Edge::{City as C, Field as F, Road as R};

/// Static definition of one tile kind.
#[derive(Debug, Clone)]
pub struct TileDefinition {
    pub kind: TileKind,
    pub edges: [Edge; 4],
    pub points: Vec<AttachmentPoint>,
    /// Copies in the physical deck, including the opening tile.
    pub count: u32,
    /// Image file stem, shared by both editions.
    pub image: &'static str,
}

fn def(
    kind: TileKind,
    edges: [Edge; 4],
    points: &[(f64, f64, bool)],
    count: u32,
    image: &'static str,
) -> TileDefinition {
    TileDefinition {
        kind,
        edges,
        points: points
            .iter()
            .enumerate()
            .map(|(idx, &(y, x, is_field))| AttachmentPoint {
                idx: idx as i32,
                y,
                x,
                is_field,
            })
            .collect(),
        count,
        image,
    }
}

/// Indexed by `TileKind::id()`. Points are (y, x, is_field) listed in index order.
pub static TILE_CATALOG: Lazy<Vec<TileDefinition>> = Lazy::new(|| {
    use TileKind::*;
    vec![
        def(StartingTile, [R, C, R, F], &[
            (0.8, 0.0, false),
            (0.3, 0.7, true),
            (0.0, 0.0, false),
            (-0.6, 0.0, true),
        ], 4, "city_cap_with_straight"),
        def(Monastery, [F, F, F, F], &[
            (0.0, 0.0, false),
            (0.6, 0.6, true),
        ], 4, "monastery"),
        def(MonasteryWithRoad, [F, F, F, R], &[
            (0.0, 0.0, false),
            (0.6, 0.6, true),
            (-0.75, 0.0, false),
        ], 2, "monastery_with_road"),
        def(CityCapWithCrossroad, [R, C, R, R], &[
            (0.8, 0.0, false),
            (0.3, 0.8, true),
            (-0.1, -0.6, false),
            (-0.2, 0.6, false),
            (-0.6, -0.7, true),
            (-0.6, -0.1, false),
            (-0.6, 0.7, true),
        ], 3, "city_cap_with_crossroads"),
        def(TriangleWithRoad, [R, C, C, R], TRIANGLE_WITH_ROAD, 3, "triangle_with_road"),
        def(TriangleWithRoadWithCOA, [R, C, C, R], TRIANGLE_WITH_ROAD, 2, "triangle_with_road_with_coa"),
        def(Straight, [F, R, F, R], &[
            (0.0, -0.5, true),
            (0.0, 0.0, false),
            (0.0, 0.5, true),
        ], 8, "straight"),
        def(CityCap, [F, C, F, F], &[
            (0.8, 0.0, false),
            (-0.1, 0.0, true),
        ], 5, "city_cap"),
        def(Separator, [F, C, C, F], &[
            (0.8, 0.0, false),
            (0.0, -0.85, false),
            (-0.4, 0.4, true),
        ], 2, "separator"),
        def(TripleRoad, [R, F, R, R], &[
            (0.7, 0.0, true),
            (0.1, -0.7, false),
            (0.1, 0.7, false),
            (-0.5, -0.5, true),
            (-0.5, 0.0, false),
            (-0.5, 0.5, true),
        ], 4, "triple_road"),
        def(Curve, [F, F, R, R], &[
            (0.5, 0.5, true),
            (0.0, 0.0, false),
            (-0.5, -0.5, true),
        ], 9, "curve"),
        def(QuadrupleRoad, [R, R, R, R], &[
            (0.5, -0.5, true),
            (0.7, 0.1, false),
            (0.5, 0.5, true),
            (0.0, -0.7, false),
            (-0.1, 0.7, false),
            (-0.5, -0.5, true),
            (-0.7, 0.0, false),
            (-0.5, 0.5, true),
        ], 1, "quadruple_road"),
        def(Connector, [C, F, C, F], CONNECTOR, 1, "connector"),
        def(ConnectorWithCOA, [C, F, C, F], CONNECTOR, 2, "connector_with_coa"),
        def(Left, [F, C, R, R], &[
            (0.8, 0.0, false),
            (-0.1, 0.5, true),
            (-0.25, -0.25, false),
            (-0.6, -0.6, true),
        ], 3, "left"),
        def(Right, [R, C, F, R], &[
            (0.8, 0.0, false),
            (-0.1, -0.5, true),
            (-0.25, 0.25, false),
            (-0.6, 0.6, true),
        ], 3, "right"),
        def(TripleCity, [C, C, C, F], TRIPLE_CITY, 3, "triple_city"),
        def(TripleCityWithCOA, [C, C, C, F], TRIPLE_CITY, 1, "triple_city_with_coa"),
        def(VerticalSeparator, [F, C, F, C], &[
            (0.8, 0.0, false),
            (0.0, 0.0, true),
            (-0.8, 0.0, false),
        ], 3, "vertical_separator"),
        def(TripleCityWithRoad, [C, C, C, R], TRIPLE_CITY_WITH_ROAD, 1, "triple_city_with_road"),
        def(TripleCityWithRoadWithCOA, [C, C, C, R], TRIPLE_CITY_WITH_ROAD, 2, "triple_city_with_road_with_coa"),
        def(Triangle, [F, C, C, F], TRIANGLE, 3, "triangle"),
        def(TriangleWithCOA, [F, C, C, F], TRIANGLE, 2, "triangle_with_coa"),
        def(QuadrupleCityWithCOA, [C, C, C, C], &[
            (0.0, 0.0, false),
        ], 1, "quadruple_city_with_coa"),
    ]
});

// Point sets shared by a kind and its coat-of-arms variant.
const TRIANGLE_WITH_ROAD: &[(f64, f64, bool)] = &[
    (0.5, -0.5, false),
    (-0.1, 0.1, true),
    (-0.4, 0.4, false),
    (-0.7, 0.7, true),
];
const CONNECTOR: &[(f64, f64, bool)] = &[
    (0.85, 0.0, true),
    (0.0, 0.0, false),
    (-0.8, 0.0, true),
];
const TRIPLE_CITY: &[(f64, f64, bool)] = &[
    (0.1, 0.0, false),
    (-0.7, 0.0, true),
];
const TRIPLE_CITY_WITH_ROAD: &[(f64, f64, bool)] = &[
    (0.1, 0.0, false),
    (-0.8, -0.4, true),
    (-0.7, 0.0, false),
    (-0.8, 0.4, true),
];
const TRIANGLE: &[(f64, f64, bool)] = &[
    (0.5, -0.5, false),
    (-0.4, 0.4, true),
];

/// Second-edition point placements that differ from the first edition.
/// Kinds not listed keep the first-edition coordinates and indices.
const SECOND_EDITION_OVERRIDES: &[(TileKind, &[(f64, f64, bool)])] = &[];

/// Attachment tables per edition, indexed by `TileKind::id()`.
static FIRST_EDITION_POINTS: Lazy<Vec<Vec<AttachmentPoint>>> =
    Lazy::new(|| TILE_CATALOG.iter().map(|d| d.points.clone()).collect());

static SECOND_EDITION_POINTS: Lazy<Vec<Vec<AttachmentPoint>>> = Lazy::new(|| {
    let mut table: Vec<Vec<AttachmentPoint>> = (*FIRST_EDITION_POINTS).clone();
    for &(kind, points) in SECOND_EDITION_OVERRIDES {
        let d = def(kind, edges_of(kind), points, 0, "");
        table[kind.id() as usize] = d.points;
    }
    table
});

pub const STARTING_TILE: TileKind = TileKind::StartingTile;

#[inline]
pub fn definition(kind: TileKind) -> &'static TileDefinition {
    &TILE_CATALOG[kind.id() as usize]
}

/// Canonical (rotation 0) edges in order [right, top, left, bottom].
#[inline]
pub fn edges_of(kind: TileKind) -> [Edge; 4] {
    definition(kind).edges
}

/// Canonical (rotation 0) attachment points for the given edition.
pub fn attachment_points_of(kind: TileKind, edition: Edition) -> &'static [AttachmentPoint] {
    let table: &'static Vec<Vec<AttachmentPoint>> = match edition {
        Edition::First => Lazy::force(&FIRST_EDITION_POINTS),
        Edition::Second => Lazy::force(&SECOND_EDITION_POINTS),
    };
    &table[kind.id() as usize]
}

/// Image asset key, e.g. `img/curve.png` or `img/2nd/curve.png`.
pub fn asset_of(kind: TileKind, edition: Edition) -> String {
    let dir = match edition {
        Edition::First => "img",
        Edition::Second => "img/2nd",
    };
    format!("{}/{}.png", dir, definition(kind).image)
}

/// Copies of this kind in the physical deck.
#[inline]
pub fn supply_of(kind: TileKind) -> u32 {
    definition(kind).count
}

/// Total number of tiles in the base game.
pub fn total_supply() -> u32 {
    TILE_CATALOG.iter().map(|d| d.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_indexed_by_id() {
        assert_eq!(TILE_CATALOG.len(), 24);
        for kind in TileKind::ALL {
            assert_eq!(definition(kind).kind, kind);
        }
    }

    #[test]
    fn test_total_supply() {
        assert_eq!(total_supply(), 72);
        assert_eq!(supply_of(TileKind::Curve), 9);
        assert_eq!(supply_of(TileKind::Straight), 8);
        assert_eq!(supply_of(TileKind::QuadrupleRoad), 1);
    }

    #[test]
    fn test_golden_edges() {
        let golden: [(TileKind, [Edge; 4]); 24] = [
            (TileKind::StartingTile, [R, C, R, F]),
            (TileKind::Monastery, [F, F, F, F]),
            (TileKind::MonasteryWithRoad, [F, F, F, R]),
            (TileKind::CityCapWithCrossroad, [R, C, R, R]),
            (TileKind::TriangleWithRoad, [R, C, C, R]),
            (TileKind::TriangleWithRoadWithCOA, [R, C, C, R]),
            (TileKind::Straight, [F, R, F, R]),
            (TileKind::CityCap, [F, C, F, F]),
            (TileKind::Separator, [F, C, C, F]),
            (TileKind::TripleRoad, [R, F, R, R]),
            (TileKind::Curve, [F, F, R, R]),
            (TileKind::QuadrupleRoad, [R, R, R, R]),
            (TileKind::Connector, [C, F, C, F]),
            (TileKind::ConnectorWithCOA, [C, F, C, F]),
            (TileKind::Left, [F, C, R, R]),
            (TileKind::Right, [R, C, F, R]),
            (TileKind::TripleCity, [C, C, C, F]),
            (TileKind::TripleCityWithCOA, [C, C, C, F]),
            (TileKind::VerticalSeparator, [F, C, F, C]),
            (TileKind::TripleCityWithRoad, [C, C, C, R]),
            (TileKind::TripleCityWithRoadWithCOA, [C, C, C, R]),
            (TileKind::Triangle, [F, C, C, F]),
            (TileKind::TriangleWithCOA, [F, C, C, F]),
            (TileKind::QuadrupleCityWithCOA, [C, C, C, C]),
        ];
        for (kind, edges) in golden {
            assert_eq!(edges_of(kind), edges, "{kind:?}");
        }
    }

    #[test]
    fn test_golden_point_counts() {
        let counts: [usize; 24] = [4, 2, 3, 7, 4, 4, 3, 2, 3, 6, 3, 8, 3, 3, 4, 4, 2, 2, 3, 4, 4, 2, 2, 1];
        for (kind, expected) in TileKind::ALL.iter().zip(counts) {
            assert_eq!(attachment_points_of(*kind, Edition::First).len(), expected, "{kind:?}");
        }
    }

    #[test]
    fn test_point_indices_are_sequential() {
        for edition in [Edition::First, Edition::Second] {
            for kind in TileKind::ALL {
                for (i, p) in attachment_points_of(kind, edition).iter().enumerate() {
                    assert_eq!(p.idx, i as i32);
                    assert!((-1.0..=1.0).contains(&p.x) && (-1.0..=1.0).contains(&p.y));
                }
            }
        }
    }

    #[test]
    fn test_exact_coordinates() {
        let p = attachment_points_of(TileKind::CityCapWithCrossroad, Edition::First);
        assert_eq!(p[4], AttachmentPoint { idx: 4, y: -0.6, x: -0.7, is_field: true });
        let p = attachment_points_of(TileKind::MonasteryWithRoad, Edition::First);
        assert_eq!(p[2], AttachmentPoint { idx: 2, y: -0.75, x: 0.0, is_field: false });
        let p = attachment_points_of(TileKind::Separator, Edition::First);
        assert_eq!(p[1], AttachmentPoint { idx: 1, y: 0.0, x: -0.85, is_field: false });
    }

    #[test]
    fn test_asset_keys() {
        assert_eq!(asset_of(TileKind::StartingTile, Edition::First), "img/city_cap_with_straight.png");
        assert_eq!(asset_of(TileKind::Curve, Edition::Second), "img/2nd/curve.png");
    }
}
