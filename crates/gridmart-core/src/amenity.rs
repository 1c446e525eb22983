//! # Amenity Module
//!
//! The closed set of grid tile variants.
//!
//! The original model was an inheritance tree (Amenity → Display/Service →
//! concrete tiles); here it is a tagged enum dispatched through plain
//! methods. Interaction *behavior* lives in [`crate::session`], where both
//! the shopper and the map are in scope; this module only answers the
//! structural questions: what is on this tile, and can the shopper stand
//! on it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::display::Display;

// =============================================================================
// Amenity
// =============================================================================

/// A fixed tile object on the grid.
#[derive(Debug, Clone)]
pub enum Amenity {
    /// Impassable structure defining the floor boundaries.
    Wall,

    /// Stock-holding display (barrier; interaction opens its contents).
    Display(Display),

    /// Store entrance. Passable until the shopper first steps *off* it,
    /// at which point it seals permanently for the session.
    Entrance { sealed: bool },

    /// Store exit (barrier; interaction is gated on equipment and payment).
    Exit,

    /// Checkout counter. Passable: stepping onto it triggers checkout.
    Checkout,

    /// Stairs between the two floors. Passable; the floor toggle happens
    /// in the movement logic, not in the interaction.
    Stairs,

    /// Station issuing and accepting carts (barrier).
    CartStation,

    /// Station issuing and accepting baskets (barrier).
    BasketStation,

    /// Product search terminal (barrier; interaction is a pure query).
    Search,
}

impl Amenity {
    /// Whether the shopper can stand on this tile.
    ///
    /// Entrance passability is monotonic: once sealed it never reopens.
    pub fn is_passable(&self) -> bool {
        match self {
            Amenity::Entrance { sealed } => !sealed,
            Amenity::Checkout | Amenity::Stairs => true,
            Amenity::Wall
            | Amenity::Display(_)
            | Amenity::Exit
            | Amenity::CartStation
            | Amenity::BasketStation
            | Amenity::Search => false,
        }
    }

    /// The data-free tag for reporting (blocked messages, snapshots).
    pub fn kind(&self) -> AmenityKind {
        match self {
            Amenity::Wall => AmenityKind::Wall,
            Amenity::Display(d) => AmenityKind::Display(d.kind()),
            Amenity::Entrance { .. } => AmenityKind::Entrance,
            Amenity::Exit => AmenityKind::Exit,
            Amenity::Checkout => AmenityKind::Checkout,
            Amenity::Stairs => AmenityKind::Stairs,
            Amenity::CartStation => AmenityKind::CartStation,
            Amenity::BasketStation => AmenityKind::BasketStation,
            Amenity::Search => AmenityKind::Search,
        }
    }

    /// Borrow the display stored on this tile, if it is one.
    pub fn as_display(&self) -> Option<&Display> {
        match self {
            Amenity::Display(d) => Some(d),
            _ => None,
        }
    }

    /// Mutably borrow the display stored on this tile, if it is one.
    pub fn as_display_mut(&mut self) -> Option<&mut Display> {
        match self {
            Amenity::Display(d) => Some(d),
            _ => None,
        }
    }
}

// =============================================================================
// Amenity Kind
// =============================================================================

/// Data-free tile tag, serializable for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "type", content = "display")]
pub enum AmenityKind {
    Wall,
    Display(crate::display::DisplayKind),
    Entrance,
    Exit,
    Checkout,
    Stairs,
    CartStation,
    BasketStation,
    Search,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayKind;

    #[test]
    fn test_passability() {
        assert!(!Amenity::Wall.is_passable());
        assert!(!Amenity::Exit.is_passable());
        assert!(!Amenity::CartStation.is_passable());
        assert!(!Amenity::BasketStation.is_passable());
        assert!(!Amenity::Search.is_passable());
        assert!(!Amenity::Display(Display::new(DisplayKind::Shelf, "GF, R4C2")).is_passable());

        assert!(Amenity::Checkout.is_passable());
        assert!(Amenity::Stairs.is_passable());
    }

    #[test]
    fn test_entrance_seals_one_way() {
        assert!(Amenity::Entrance { sealed: false }.is_passable());
        assert!(!Amenity::Entrance { sealed: true }.is_passable());
    }

    #[test]
    fn test_kind_carries_display_kind() {
        let tile = Amenity::Display(Display::new(DisplayKind::Refrigerator, "2F, R1C3"));
        assert_eq!(tile.kind(), AmenityKind::Display(DisplayKind::Refrigerator));
        assert!(tile.as_display().is_some());
        assert!(Amenity::Wall.as_display().is_none());
    }
}
