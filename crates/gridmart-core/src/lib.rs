//! # gridmart-core: Pure Simulation Engine for GridMart
//!
//! This crate is the **heart** of GridMart. It contains the whole store
//! simulation - grid, rules, movement, checkout - as pure logic with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GridMart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation layer (rendering + input)             │   │
//! │  │    tile view ──► movement keys ──► dialogs ──► receipt view     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Session commands                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gridmart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  session  │  │    map    │  │  shopper  │  │ checkout  │   │   │
//! │  │   │ commands  │  │ amenities │  │ inventory │  │ discounts │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  display  │  │ equipment │  │  catalog  │  │   money   │   │   │
//! │  │   │ admission │  │ cart/bskt │  │  handles  │  │ centavos  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE STATE MACHINE           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Receipt value                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 gridmart-receipt (File Sink)                    │   │
//! │  │           formats and writes the receipt text file              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Coordinates and directions
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Immutable products and shared handles
//! - [`summary`] - Quantity aggregation for inventory and receipts
//! - [`equipment`] - Carts and baskets
//! - [`display`] - Stock-holding displays with admission rules
//! - [`amenity`] - The closed set of grid tiles
//! - [`map`] - Per-floor grids built from token plans
//! - [`shopper`] - The actor's state
//! - [`checkout`] - Settlement and the receipt value
//! - [`session`] - The command surface
//! - [`seed`] - The bundled store layout and catalog
//! - [`validation`] - Catalog data validation
//! - [`error`] - The denial taxonomy
//!
//! ## Design Principles
//!
//! 1. **Pure State Machine**: every command is deterministic; the only
//!    nondeterminism is the receipt timestamp, injected at the edge
//! 2. **No I/O**: file, network, and terminal access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are centavos (i64), never floats
//! 4. **Explicit Denials**: every rule violation is a typed error, never a
//!    panic or a printed message
//!
//! ## Example Usage
//!
//! ```rust
//! use gridmart_core::geometry::Direction;
//! use gridmart_core::seed::starter_session;
//!
//! let mut session = starter_session("Ana", 30);
//!
//! // Step off the entrance; it seals behind the shopper.
//! session.move_forward().unwrap();
//!
//! // Walls deny with a typed error, position unchanged.
//! session.face(Direction::South).unwrap();
//! assert!(session.move_forward().is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amenity;
pub mod catalog;
pub mod checkout;
pub mod display;
pub mod equipment;
pub mod error;
pub mod geometry;
pub mod map;
pub mod money;
pub mod seed;
pub mod session;
pub mod shopper;
pub mod summary;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gridmart_core::Session` instead of
// `use gridmart_core::session::Session`

pub use catalog::{Catalog, Product, ProductHandle};
pub use checkout::{Receipt, ReceiptLine};
pub use error::{EngineError, EngineResult};
pub use geometry::{Direction, Point};
pub use money::Money;
pub use session::{Interaction, MoveEvent, Session};
pub use shopper::{Shopper, ShopperSnapshot};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// How many product references a cart holds.
pub const CART_CAPACITY: usize = 30;

/// How many product references a basket holds.
pub const BASKET_CAPACITY: usize = 15;

/// How many items fit in bare hands when no equipment is held.
pub const HAND_CARRY_CAPACITY: usize = 2;

/// Minimum shopper age for taking alcohol-class products.
pub const ALCOHOL_MIN_AGE: u8 = 18;

/// Shoppers from this age up get the senior discount at checkout.
pub const SENIOR_AGE: u8 = 60;

/// Senior discount on food lines, in basis points (20%).
pub const FOOD_DISCOUNT_BPS: u32 = 2000;

/// Senior discount on beverage lines, in basis points (10%).
pub const BEVERAGE_DISCOUNT_BPS: u32 = 1000;

/// The store always has exactly two floors.
pub const FLOOR_COUNT: usize = 2;

/// The serial prefix of the age-restricted product class.
pub const ALCOHOL_PREFIX: &str = "ALC";
