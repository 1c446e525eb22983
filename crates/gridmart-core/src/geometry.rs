//! # Geometry Module
//!
//! Coordinate and direction primitives for the tile grid. No dependencies
//! on the rest of the engine; bounds checking is the grid's responsibility.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Direction
// =============================================================================

/// One of the four cardinal directions.
///
/// Used by the shopper for movement and for specifying which adjacent tile
/// an interaction targets. North is "up" on the rendered map: it decreases
/// the y (row) index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

// =============================================================================
// Point
// =============================================================================

/// An immutable (x, y) coordinate on a floor grid.
///
/// `x` is the column index and `y` the row index. Equality is structural.
/// Stepping off the grid is legal here; [`crate::map::StoreMap`] decides
/// what an out-of-grid coordinate means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a point at the given column/row.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Returns the adjacent coordinate one tile away in `direction`.
    ///
    /// ## Example
    /// ```rust
    /// use gridmart_core::geometry::{Direction, Point};
    ///
    /// let p = Point::new(5, 5);
    /// assert_eq!(p.step(Direction::North), Point::new(5, 4));
    /// assert_eq!(p.step(Direction::East), Point::new(6, 5));
    /// ```
    pub const fn step(&self, direction: Direction) -> Point {
        match direction {
            Direction::North => Point::new(self.x, self.y - 1),
            Direction::South => Point::new(self.x, self.y + 1),
            Direction::West => Point::new(self.x - 1, self.y),
            Direction::East => Point::new(self.x + 1, self.y),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
