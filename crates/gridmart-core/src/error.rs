//! # Error Types
//!
//! The denial taxonomy for the simulation engine.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every denial is an *expected, recoverable, user-facing* outcome -
//!    the engine never panics or unwinds for a rule violation
//! 3. Errors are enum variants with context, never bare strings
//! 4. The presentation layer owns turning variants into rendered messages;
//!    the `#[error]` text is a developer-facing default
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session command (move / interact / take / return / checkout)          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Ok(event)  ──────────────► state mutated, presentation renders it     │
//! │  Err(EngineError) ────────► state untouched, presentation shows denial │
//! │                                                                         │
//! │  gridmart-receipt has its own ReceiptError; a receipt write failure    │
//! │  is a warning there and never becomes an EngineError.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::amenity::AmenityKind;
use crate::display::DisplayKind;
use crate::equipment::EquipmentKind;

// =============================================================================
// Engine Error
// =============================================================================

/// A rule-engine denial.
///
/// Every variant leaves simulation state exactly as it was before the
/// command ran (a denied interaction during a successful move does not
/// undo the step - see [`crate::session::MoveEvent`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Movement target is a barrier tile.
    #[error("blocked by {kind:?}")]
    Blocked { kind: AmenityKind },

    /// Display add rejected: every tier is at capacity.
    #[error("{kind:?} is full")]
    DisplayFull { kind: DisplayKind },

    /// Display add rejected: the product's serial prefix is not in the
    /// display's allow-set. An empty prefix lands here for every display.
    #[error("products with prefix {prefix:?} are not allowed on a {kind:?}")]
    NotAllowedOnDisplay { prefix: String, kind: DisplayKind },

    /// Equipment add rejected because the cart/basket is at capacity.
    #[error("{kind:?} is full (capacity {capacity})")]
    EquipmentFull { kind: EquipmentKind, capacity: usize },

    /// Hand-carry add rejected: both hands already hold an item.
    #[error("hands are full")]
    HandsFull,

    /// Take denied for an age-restricted product.
    #[error("must be at least {minimum_age} to take this product")]
    AgeRestricted { minimum_age: u8 },

    /// Station denial: the shopper already holds equipment (possibly of
    /// the other kind - a held basket blocks a cart station too).
    #[error("already holding equipment")]
    AlreadyHasEquipment,

    /// Station denial: equipment can only be issued to empty hands.
    #[error("hands must be empty to take equipment")]
    HandsNotEmpty,

    /// Station denial: no equipment is issued after checkout.
    #[error("cannot take equipment after checking out")]
    AcquireAfterCheckout,

    /// Station denial: only empty equipment can be returned.
    #[error("cannot return {kind:?}: it is not empty")]
    EquipmentNotEmpty { kind: EquipmentKind },

    /// Checkout denial: the shopper holds no products.
    #[error("no products to pay for")]
    EmptyCheckout,

    /// Checkout denial: the shopper already paid. The first checkout did
    /// all the work; this one is a no-op.
    #[error("already checked out")]
    AlreadyCheckedOut,

    /// Exit denial: equipment must go back to a station first.
    #[error("cannot exit while holding a cart or basket")]
    ExitWithEquipment,

    /// Exit denial: products are held and checkout has not happened.
    #[error("cannot exit with unpaid products")]
    UnpaidProducts,

    /// The referenced product is not where the command said it would be
    /// (inventory removal, or an empty display slot).
    #[error("product not found")]
    ProductNotFound,

    /// A take/return command targeted a tile that is not a display.
    #[error("the tile ahead is not a display")]
    NotADisplay,

    /// Any command issued after the shopper exited.
    #[error("the shopping session has ended")]
    SessionOver,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

// =============================================================================
// Unit Tests
// =============================================================================
