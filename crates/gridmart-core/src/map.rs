//! # Map Module
//!
//! The two-floor amenity grid, the product catalog, and the display index.
//!
//! ## Construction
//! A map is built exactly once, from a token floor plan: one whitespace-
//! separated token per tile, one string per row. The plan encoding is an
//! input format handed over at startup, not something re-parsed during the
//! session. After construction, tiles are never added or removed and only
//! display/entrance contents mutate.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  Token   Tile                                 │
//! │  ─────   ──────────────────────────────────── │
//! │  w       Wall                                 │
//! │  sh      Shelf            (2 tiers × 4)       │
//! │  tb      Table            (1 × 4)             │
//! │  ch      Chilled counter  (1 × 3)             │
//! │  rf      Refrigerator     (3 × 3)             │
//! │  en      Entrance         ex   Exit           │
//! │  co      Checkout         st   Stairs         │
//! │  cs      Cart station     bs   Basket station │
//! │  ps      Product search   .    Open floor     │
//! │                                               │
//! │  A blank tile on the outer border becomes a   │
//! │  Wall, so a shopper can never leave the grid. │
//! └───────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::amenity::Amenity;
use crate::catalog::Catalog;
use crate::display::{Display, DisplayKind};
use crate::geometry::{Direction, Point};

/// Human-readable floor names used in display addresses ("GF, R4C2").
const FLOOR_NAMES: [&str; crate::FLOOR_COUNT] = ["GF", "2F"];

// =============================================================================
// Layout Errors
// =============================================================================

/// A floor plan that cannot be turned into a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A token that names no tile.
    #[error("unknown tile token {token:?} at floor {floor}, row {row}, column {col}")]
    UnknownToken {
        token: String,
        floor: usize,
        row: usize,
        col: usize,
    },

    /// Rows of differing width, or a floor with no rows.
    #[error("floor {floor} is not rectangular")]
    NotRectangular { floor: usize },
}

// =============================================================================
// Store Map
// =============================================================================

/// Location of one display, for search results and take/return targeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisplayLocation {
    pub floor: usize,
    pub position: Point,
    pub kind: DisplayKind,
    pub address: String,
}

/// The complete store: per-floor grids, catalog, and display index.
#[derive(Debug, Clone)]
pub struct StoreMap {
    /// `floors[floor][y][x]`; `None` is open floor.
    floors: Vec<Vec<Vec<Option<Amenity>>>>,
    catalog: Catalog,
    displays: Vec<DisplayLocation>,
}

impl StoreMap {
    /// Builds the map from one token plan per floor plus the catalog.
    pub fn build(plans: &[&[&str]], catalog: Catalog) -> Result<StoreMap, LayoutError> {
        let mut floors = Vec::with_capacity(plans.len());
        let mut displays = Vec::new();

        for (floor, plan) in plans.iter().enumerate() {
            let rows: Vec<Vec<&str>> = plan
                .iter()
                .map(|line| line.split_whitespace().collect())
                .collect();
            let height = rows.len();
            let width = rows.first().map(|r| r.len()).unwrap_or(0);
            if height == 0 || rows.iter().any(|r| r.len() != width) {
                return Err(LayoutError::NotRectangular { floor });
            }

            let floor_name = FLOOR_NAMES.get(floor).copied().unwrap_or("F?");
            let mut grid: Vec<Vec<Option<Amenity>>> = Vec::with_capacity(height);

            for (row, tokens) in rows.iter().enumerate() {
                let mut grid_row = Vec::with_capacity(width);
                for (col, token) in tokens.iter().enumerate() {
                    let address = format!("{}, R{}C{}", floor_name, row, col);
                    let display_kind = match *token {
                        "sh" => Some(DisplayKind::Shelf),
                        "tb" => Some(DisplayKind::Table),
                        "ch" => Some(DisplayKind::ChilledCounter),
                        "rf" => Some(DisplayKind::Refrigerator),
                        _ => None,
                    };

                    let tile = if let Some(kind) = display_kind {
                        displays.push(DisplayLocation {
                            floor,
                            position: Point::new(col as i32, row as i32),
                            kind,
                            address: address.clone(),
                        });
                        Some(Amenity::Display(Display::new(kind, address)))
                    } else {
                        match *token {
                            "w" => Some(Amenity::Wall),
                            "en" => Some(Amenity::Entrance { sealed: false }),
                            "ex" => Some(Amenity::Exit),
                            "co" => Some(Amenity::Checkout),
                            "st" => Some(Amenity::Stairs),
                            "cs" => Some(Amenity::CartStation),
                            "bs" => Some(Amenity::BasketStation),
                            "ps" => Some(Amenity::Search),
                            "." => {
                                // Border tiles default to walls
                                if row == 0 || row == height - 1 || col == 0 || col == width - 1 {
                                    Some(Amenity::Wall)
                                } else {
                                    None
                                }
                            }
                            _ => {
                                return Err(LayoutError::UnknownToken {
                                    token: (*token).to_string(),
                                    floor,
                                    row,
                                    col,
                                })
                            }
                        }
                    };
                    grid_row.push(tile);
                }
                grid.push(grid_row);
            }
            floors.push(grid);
        }

        Ok(StoreMap {
            floors,
            catalog,
            displays,
        })
    }

    /// Number of floors.
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// The shared product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every display location, in plan order.
    pub fn displays(&self) -> &[DisplayLocation] {
        &self.displays
    }

    /// The tile at `(x, y)` on `floor`.
    ///
    /// `None` both for open floor and for out-of-grid coordinates; the
    /// movement rules treat either as walkable, and the shipped layouts
    /// keep the outside unreachable behind border walls.
    pub fn amenity_at(&self, x: i32, y: i32, floor: usize) -> Option<&Amenity> {
        if x < 0 || y < 0 {
            return None;
        }
        self.floors
            .get(floor)?
            .get(y as usize)?
            .get(x as usize)?
            .as_ref()
    }

    /// Mutable access to a tile (display stocking, entrance sealing).
    pub fn amenity_at_mut(&mut self, x: i32, y: i32, floor: usize) -> Option<&mut Amenity> {
        if x < 0 || y < 0 {
            return None;
        }
        self.floors
            .get_mut(floor)?
            .get_mut(y as usize)?
            .get_mut(x as usize)?
            .as_mut()
    }

    /// The tile one step from `pos` in `dir` - what the shopper is facing.
    pub fn amenity_facing(&self, pos: Point, dir: Direction, floor: usize) -> Option<&Amenity> {
        let target = pos.step(dir);
        self.amenity_at(target.x, target.y, floor)
    }

    /// Seals the entrance at the given tile, if one is there.
    ///
    /// Sealing is monotonic: there is no way to unseal.
    pub fn seal_entrance(&mut self, pos: Point, floor: usize) {
        if let Some(Amenity::Entrance { sealed }) = self.amenity_at_mut(pos.x, pos.y, floor) {
            *sealed = true;
        }
    }

    /// Pure query: every display currently stocking a product whose name
    /// contains `needle` (case-insensitive).
    pub fn search_displays(&self, needle: &str) -> Vec<DisplayLocation> {
        self.displays
            .iter()
            .filter(|loc| {
                self.amenity_at(loc.position.x, loc.position.y, loc.floor)
                    .and_then(Amenity::as_display)
                    .is_some_and(|d| d.contains_by_name(needle))
            })
            .cloned()
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amenity::AmenityKind;
    use crate::catalog::Product;
    use crate::money::Money;

    fn tiny_plan() -> Vec<&'static str> {
        vec![
            "w  w  w  w",
            "w  sh .  w",
            "w  .  tb w",
            "w  ex en w",
        ]
    }

    fn tiny_map() -> StoreMap {
        let plans: Vec<&str> = tiny_plan();
        StoreMap::build(&[&plans], Catalog::default()).unwrap()
    }

    #[test]
    fn test_build_places_tiles() {
        let map = tiny_map();
        assert_eq!(map.floor_count(), 1);
        assert_eq!(map.amenity_at(0, 0, 0).unwrap().kind(), AmenityKind::Wall);
        assert_eq!(
            map.amenity_at(1, 1, 0).unwrap().kind(),
            AmenityKind::Display(DisplayKind::Shelf)
        );
        assert_eq!(map.amenity_at(2, 3, 0).unwrap().kind(), AmenityKind::Entrance);
        assert!(map.amenity_at(2, 1, 0).is_none()); // open floor
    }

    #[test]
    fn test_display_index_and_addresses() {
        let map = tiny_map();
        assert_eq!(map.displays().len(), 2);
        assert_eq!(map.displays()[0].address, "GF, R1C1");
        assert_eq!(map.displays()[1].kind, DisplayKind::Table);
    }

    #[test]
    fn test_out_of_grid_is_none() {
        let map = tiny_map();
        assert!(map.amenity_at(-1, 0, 0).is_none());
        assert!(map.amenity_at(0, 99, 0).is_none());
        assert!(map.amenity_at(0, 0, 7).is_none());
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        let plan = vec!["w w", "w zz"];
        let err = StoreMap::build(&[&plan], Catalog::default()).unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnknownToken {
                token: "zz".to_string(),
                floor: 0,
                row: 1,
                col: 1
            }
        );
    }

    #[test]
    fn test_ragged_plan_is_an_error() {
        let plan = vec!["w w w", "w w"];
        let err = StoreMap::build(&[&plan], Catalog::default()).unwrap_err();
        assert_eq!(err, LayoutError::NotRectangular { floor: 0 });
    }

    #[test]
    fn test_border_open_tile_becomes_wall() {
        let plan = vec!["w  .  w", "w  .  w", "w  w  w"];
        let map = StoreMap::build(&[&plan], Catalog::default()).unwrap();
        assert_eq!(map.amenity_at(1, 0, 0).unwrap().kind(), AmenityKind::Wall);
        assert!(map.amenity_at(1, 1, 0).is_none()); // interior stays open
    }

    #[test]
    fn test_seal_entrance_is_monotonic() {
        let mut map = tiny_map();
        let at = Point::new(2, 3);
        assert!(map.amenity_at(2, 3, 0).unwrap().is_passable());

        map.seal_entrance(at, 0);
        assert!(!map.amenity_at(2, 3, 0).unwrap().is_passable());

        // Sealing again changes nothing; there is no unseal path
        map.seal_entrance(at, 0);
        assert!(!map.amenity_at(2, 3, 0).unwrap().is_passable());
    }

    #[test]
    fn test_search_displays() {
        let mut map = tiny_map();
        let bread = Product::new("BRD001", "Gardenia White Bread", Money::from_pesos(85), true, false);
        map.amenity_at_mut(2, 2, 0)
            .and_then(Amenity::as_display_mut)
            .unwrap()
            .stock(bread)
            .unwrap();

        let hits = map.search_displays("gardenia");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].address, "GF, R2C2");
        assert!(map.search_displays("tofu").is_empty());
    }

    #[test]
    fn test_amenity_facing() {
        let map = tiny_map();
        let shelf = map.amenity_facing(Point::new(1, 2), Direction::North, 0);
        assert_eq!(shelf.unwrap().kind(), AmenityKind::Display(DisplayKind::Shelf));
    }
}
