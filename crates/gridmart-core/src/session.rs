//! # Session Module
//!
//! The command surface the presentation layer talks to. A session owns
//! exactly one shopper and one store map and lives from shopper creation
//! until the shopper exits.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Presentation layer                                                     │
//! │        │  face / move_forward / interact / take / return / checkout     │
//! │        ▼                                                                │
//! │  Session ──── movement + tile rules ────► Shopper + StoreMap mutate     │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Ok(MoveEvent / Interaction / Receipt)   or   Err(EngineError)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Movement and interaction are deliberately split the way the tiles
//! behave: stepping onto a *passable* special tile (stairs, checkout)
//! acts during the move; barrier tiles (displays, stations, exit,
//! search) act through [`Session::interact`] against the tile in front.

use chrono::Utc;

use crate::amenity::{Amenity, AmenityKind};
use crate::catalog::ProductHandle;
use crate::checkout::{settle, Receipt};
use crate::display::DisplayKind;
use crate::equipment::{Equipment, EquipmentKind};
use crate::error::{EngineError, EngineResult};
use crate::geometry::{Direction, Point};
use crate::map::{DisplayLocation, StoreMap};
use crate::shopper::{Shopper, ShopperSnapshot};

// =============================================================================
// Events
// =============================================================================

/// What a successful step produced.
///
/// An arrival interaction (stepping onto a checkout counter) may itself
/// be denied; the step is NOT rolled back in that case, so the denial
/// rides inside the event instead of failing the move.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveEvent {
    /// Plain step onto an open or inert passable tile.
    Moved,
    /// Stepped onto stairs; now on the other floor, same (x, y).
    ChangedFloor { floor: usize },
    /// Stepped onto an interactive passable tile; this is what its
    /// interaction produced.
    Interacted(Result<Interaction, EngineError>),
}

/// What an interaction produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Inert tile, open floor, or informational tile (entrance, stairs
    /// seen from the side). Nothing changed.
    Nothing,
    /// Facing a display; the presentation layer opens its contents and
    /// follows up with take/return commands.
    BrowsingDisplay { kind: DisplayKind, address: String },
    /// A station issued fresh, empty equipment.
    AcquiredEquipment(EquipmentKind),
    /// A station took the (empty) equipment back.
    ReturnedEquipment(EquipmentKind),
    /// Facing the search terminal; the presentation layer prompts for a
    /// query and calls [`Session::search_product`].
    SearchAvailable,
    /// Checkout settled; the session keeps a copy in `last_receipt`.
    CheckedOut(Receipt),
    /// The shopper left the store. Terminal: every later command is
    /// denied with [`EngineError::SessionOver`].
    Exited,
}

// =============================================================================
// Session
// =============================================================================

/// One shopper's trip through one store.
#[derive(Debug, Clone)]
pub struct Session {
    shopper: Shopper,
    map: StoreMap,
    last_receipt: Option<Receipt>,
}

impl Session {
    /// Starts a session with the shopper standing at `start` on the
    /// ground floor, facing North.
    pub fn new(map: StoreMap, name: impl Into<String>, age: u8, start: Point) -> Self {
        Session {
            shopper: Shopper::new(name, age, start),
            map,
            last_receipt: None,
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn shopper(&self) -> &Shopper {
        &self.shopper
    }

    pub fn map(&self) -> &StoreMap {
        &self.map
    }

    pub fn snapshot(&self) -> ShopperSnapshot {
        self.shopper.snapshot()
    }

    /// The receipt from the (single possible) successful checkout.
    pub fn last_receipt(&self) -> Option<&Receipt> {
        self.last_receipt.as_ref()
    }

    /// True once the shopper has exited; no further commands succeed.
    pub fn is_over(&self) -> bool {
        self.shopper.has_exited()
    }

    /// The tile the shopper is facing, if any amenity sits there.
    pub fn amenity_in_front(&self) -> Option<&Amenity> {
        self.map
            .amenity_facing(self.shopper.position(), self.shopper.facing(), self.shopper.floor())
    }

    /// Case-insensitive product search across every display on both
    /// floors. Pure query; works from anywhere, the search terminal is
    /// just where the presentation layer offers it.
    pub fn search_product(&self, needle: &str) -> Vec<DisplayLocation> {
        self.map.search_displays(needle)
    }

    // -------------------------------------------------------------------------
    // Movement
    // -------------------------------------------------------------------------

    /// Unconditionally turns the shopper. Never denied mid-session.
    pub fn face(&mut self, direction: Direction) -> EngineResult<()> {
        self.guard_active()?;
        self.shopper.face(direction);
        Ok(())
    }

    /// One step in the facing direction.
    ///
    /// Open tiles (no amenity) are walkable; barrier tiles deny with
    /// [`EngineError::Blocked`] and leave the position unchanged. On a
    /// successful step off an unsealed entrance, the entrance seals for
    /// good. Arriving on stairs toggles the floor with (x, y) unchanged;
    /// arriving on any other passable amenity runs its interaction.
    pub fn move_forward(&mut self) -> EngineResult<MoveEvent> {
        self.guard_active()?;

        let origin = self.shopper.position();
        let floor = self.shopper.floor();
        let target = origin.step(self.shopper.facing());

        let arrival = match self.map.amenity_at(target.x, target.y, floor) {
            Some(tile) if !tile.is_passable() => {
                return Err(EngineError::Blocked { kind: tile.kind() });
            }
            Some(tile) => Some(tile.kind()),
            None => None,
        };

        // Departure seals the entrance, not arrival.
        self.shopper.place_at(target);
        self.map.seal_entrance(origin, floor);

        match arrival {
            Some(AmenityKind::Stairs) => {
                self.shopper.toggle_floor();
                Ok(MoveEvent::ChangedFloor {
                    floor: self.shopper.floor(),
                })
            }
            Some(AmenityKind::Checkout) => Ok(MoveEvent::Interacted(self.perform_checkout_interaction())),
            Some(_) | None => Ok(MoveEvent::Moved),
        }
    }

    // -------------------------------------------------------------------------
    // Interaction with the tile in front
    // -------------------------------------------------------------------------

    /// Acts on whatever the shopper is facing.
    ///
    /// Walls, open floor, entrances and side-on stairs are inert. The
    /// stateful cases are the stations, the checkout counter and the
    /// exit; displays and the search terminal answer with what the
    /// presentation layer should do next.
    pub fn interact(&mut self) -> EngineResult<Interaction> {
        self.guard_active()?;

        let kind = match self.amenity_in_front() {
            Some(tile) => tile.kind(),
            None => return Ok(Interaction::Nothing),
        };

        match kind {
            AmenityKind::Wall | AmenityKind::Entrance | AmenityKind::Stairs => {
                Ok(Interaction::Nothing)
            }
            AmenityKind::Display(display_kind) => {
                let address = self
                    .amenity_in_front()
                    .and_then(Amenity::as_display)
                    .map(|d| d.address().to_string())
                    .unwrap_or_default();
                Ok(Interaction::BrowsingDisplay {
                    kind: display_kind,
                    address,
                })
            }
            AmenityKind::Search => Ok(Interaction::SearchAvailable),
            AmenityKind::CartStation => self.station_exchange(EquipmentKind::Cart),
            AmenityKind::BasketStation => self.station_exchange(EquipmentKind::Basket),
            AmenityKind::Checkout => self.perform_checkout_interaction(),
            AmenityKind::Exit => self.attempt_exit(),
        }
    }

    /// Station rules: a held equipment of the matching kind goes back
    /// only when empty; any held equipment blocks acquiring; fresh
    /// equipment is issued only to empty hands before checkout.
    fn station_exchange(&mut self, station_kind: EquipmentKind) -> EngineResult<Interaction> {
        match self.shopper.equipment_kind() {
            Some(held) if held == station_kind => {
                let equipment = self.shopper.equipment().ok_or(EngineError::ProductNotFound)?;
                if !equipment.is_empty() {
                    return Err(EngineError::EquipmentNotEmpty { kind: held });
                }
                self.shopper.release_equipment();
                Ok(Interaction::ReturnedEquipment(held))
            }
            Some(_) => Err(EngineError::AlreadyHasEquipment),
            None => {
                if !self.shopper.hand_carried().is_empty() {
                    return Err(EngineError::HandsNotEmpty);
                }
                if self.shopper.has_checked_out() {
                    return Err(EngineError::AcquireAfterCheckout);
                }
                self.shopper.assign_equipment(Equipment::new(station_kind));
                Ok(Interaction::AcquiredEquipment(station_kind))
            }
        }
    }

    /// Exit gate: no equipment, and either nothing held or everything
    /// paid for. Passing it is the session's sole terminal transition.
    fn attempt_exit(&mut self) -> EngineResult<Interaction> {
        if self.shopper.has_equipment() {
            return Err(EngineError::ExitWithEquipment);
        }
        if !self.shopper.all_products().is_empty() && !self.shopper.has_checked_out() {
            return Err(EngineError::UnpaidProducts);
        }
        self.shopper.mark_exited();
        Ok(Interaction::Exited)
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    /// Takes the product at (tier, slot) from the display in front.
    ///
    /// If the shopper cannot hold it (age gate, full equipment, full
    /// hands) the product goes back into its exact display slot and the
    /// denial propagates.
    pub fn take_from_front(&mut self, tier: usize, slot: usize) -> EngineResult<ProductHandle> {
        self.guard_active()?;

        let front = self.front_point();
        let floor = self.shopper.floor();
        let display = self
            .map
            .amenity_at_mut(front.x, front.y, floor)
            .and_then(Amenity::as_display_mut)
            .ok_or(EngineError::NotADisplay)?;

        let item = display.take(tier, slot)?;
        match self.shopper.take_product(item.clone()) {
            Ok(()) => Ok(item),
            Err(denial) => {
                // Put it back exactly where it came from.
                if let Some(display) = self
                    .map
                    .amenity_at_mut(front.x, front.y, floor)
                    .and_then(Amenity::as_display_mut)
                {
                    display.restore(tier, slot, item);
                }
                Err(denial)
            }
        }
    }

    /// Returns this exact held item to the display in front.
    ///
    /// The display's admission and capacity rules apply on the way back;
    /// a denial restores the item to the slot it was removed from.
    pub fn return_to_front(&mut self, item: &ProductHandle) -> EngineResult<()> {
        self.guard_active()?;

        let front = self.front_point();
        let floor = self.shopper.floor();
        if self
            .map
            .amenity_at(front.x, front.y, floor)
            .and_then(Amenity::as_display)
            .is_none()
        {
            return Err(EngineError::NotADisplay);
        }

        let (removed, origin_slot) = self.shopper.remove_product(item)?;
        let display = self
            .map
            .amenity_at_mut(front.x, front.y, floor)
            .and_then(Amenity::as_display_mut)
            .ok_or(EngineError::NotADisplay)?;

        match display.stock(removed.clone()) {
            Ok(()) => Ok(()),
            Err(denial) => {
                self.shopper.restore_product(origin_slot, removed);
                Err(denial)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Settles the purchase: aggregates all held products into a receipt
    /// and finalizes the shopper (hands cleared, equipment released,
    /// checked-out set). Denied when nothing is held or already paid.
    pub fn checkout(&mut self) -> EngineResult<Receipt> {
        self.guard_active()?;
        self.perform_checkout()
    }

    fn perform_checkout(&mut self) -> EngineResult<Receipt> {
        if self.shopper.has_checked_out() {
            return Err(EngineError::AlreadyCheckedOut);
        }
        let products = self.shopper.all_products();
        if products.is_empty() {
            return Err(EngineError::EmptyCheckout);
        }

        let receipt = settle(self.shopper.name(), self.shopper.age(), &products, Utc::now());
        self.shopper.finalize_checkout();
        self.last_receipt = Some(receipt.clone());
        Ok(receipt)
    }

    fn perform_checkout_interaction(&mut self) -> EngineResult<Interaction> {
        self.perform_checkout().map(Interaction::CheckedOut)
    }

    fn front_point(&self) -> Point {
        self.shopper.position().step(self.shopper.facing())
    }

    fn guard_active(&self) -> EngineResult<()> {
        if self.shopper.has_exited() {
            Err(EngineError::SessionOver)
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
