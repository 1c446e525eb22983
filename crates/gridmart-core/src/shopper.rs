//! # Shopper Module
//!
//! The single actor's state: position, facing, floor, inventory, and the
//! monotonic checked-out / exited flags.
//!
//! ## Inventory Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Hands (max 2 items)      XOR      Equipment (cart 30 / basket 15)     │
//! │                                                                         │
//! │  A station only issues equipment to empty hands, and equipment must    │
//! │  go back before anything else lands in the hands - so at any moment    │
//! │  at most one of the two holds products. Enforced by the acquisition    │
//! │  rules, not by the type.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Movement itself lives in [`crate::session`], which owns both the
//! shopper and the map; this module has no map back-reference.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{same_item, ProductHandle};
use crate::equipment::{Equipment, EquipmentKind};
use crate::error::{EngineError, EngineResult};
use crate::geometry::{Direction, Point};
use crate::summary::{summarize_by_name, ProductSummary};
use crate::{ALCOHOL_MIN_AGE, ALCOHOL_PREFIX, HAND_CARRY_CAPACITY};

// =============================================================================
// Item Slot
// =============================================================================

/// Where a removed product came from, so a failed transfer can put it
/// back in exactly the same place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSlot {
    /// Index into the hand-carried list.
    Hand(usize),
    /// Index into the held equipment's contents.
    Equipment(usize),
}

// =============================================================================
// Shopper
// =============================================================================

/// The user-controlled actor.
///
/// Created once at session start; the session ends when `exited` flips
/// true. `checked_out` and `exited` never reset.
#[derive(Debug, Clone)]
pub struct Shopper {
    name: String,
    age: u8,
    position: Point,
    facing: Direction,
    floor: usize,
    equipment: Option<Equipment>,
    hand_carried: Vec<ProductHandle>,
    checked_out: bool,
    exited: bool,
}

impl Shopper {
    /// Creates a shopper at the session entry tile, facing North, on the
    /// ground floor.
    pub fn new(name: impl Into<String>, age: u8, start: Point) -> Self {
        Shopper {
            name: name.into(),
            age,
            position: start,
            facing: Direction::North,
            floor: 0,
            equipment: None,
            hand_carried: Vec::with_capacity(HAND_CARRY_CAPACITY),
            checked_out: false,
            exited: false,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Current floor index (0 = ground floor, 1 = second floor).
    pub fn floor(&self) -> usize {
        self.floor
    }

    pub fn equipment(&self) -> Option<&Equipment> {
        self.equipment.as_ref()
    }

    pub fn has_equipment(&self) -> bool {
        self.equipment.is_some()
    }

    pub fn hand_carried(&self) -> &[ProductHandle] {
        &self.hand_carried
    }

    pub fn has_checked_out(&self) -> bool {
        self.checked_out
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    // -------------------------------------------------------------------------
    // Movement-adjacent state (driven by the session)
    // -------------------------------------------------------------------------

    /// Unconditionally sets the facing direction. No side effects.
    pub fn face(&mut self, direction: Direction) {
        self.facing = direction;
    }

    /// Moves the shopper to a tile the session already validated.
    pub(crate) fn place_at(&mut self, position: Point) {
        self.position = position;
    }

    /// Flips between floor 0 and floor 1, leaving (x, y) unchanged.
    pub(crate) fn toggle_floor(&mut self) {
        self.floor = 1 - self.floor;
    }

    // -------------------------------------------------------------------------
    // Inventory
    // -------------------------------------------------------------------------

    /// Takes a product into equipment (if held) or the hands (max 2).
    ///
    /// A shopper under 18 can never take an alcohol-prefixed product.
    /// Any failure leaves all state unchanged so the caller can put the
    /// product back where it came from.
    pub fn take_product(&mut self, item: ProductHandle) -> EngineResult<()> {
        if self.age < ALCOHOL_MIN_AGE && item.serial_prefix() == ALCOHOL_PREFIX {
            return Err(EngineError::AgeRestricted {
                minimum_age: ALCOHOL_MIN_AGE,
            });
        }

        if let Some(equipment) = self.equipment.as_mut() {
            return equipment.add(item);
        }

        if self.hand_carried.len() < HAND_CARRY_CAPACITY {
            self.hand_carried.push(item);
            Ok(())
        } else {
            Err(EngineError::HandsFull)
        }
    }

    /// Removes this exact item from the hands first, then the equipment.
    ///
    /// Returns the handle and the slot it occupied, so
    /// [`Self::restore_product`] can undo the removal precisely.
    pub fn remove_product(&mut self, item: &ProductHandle) -> EngineResult<(ProductHandle, ItemSlot)> {
        if let Some(index) = self.hand_carried.iter().position(|held| same_item(held, item)) {
            return Ok((self.hand_carried.remove(index), ItemSlot::Hand(index)));
        }
        if let Some(equipment) = self.equipment.as_mut() {
            if let Some(index) = equipment.position_of(item) {
                let removed = equipment
                    .remove_at(index)
                    .ok_or(EngineError::ProductNotFound)?;
                return Ok((removed, ItemSlot::Equipment(index)));
            }
        }
        Err(EngineError::ProductNotFound)
    }

    /// Puts a just-removed product back into its original slot.
    pub fn restore_product(&mut self, slot: ItemSlot, item: ProductHandle) {
        match slot {
            ItemSlot::Hand(index) => {
                let index = index.min(self.hand_carried.len());
                self.hand_carried.insert(index, item);
            }
            ItemSlot::Equipment(index) => {
                if let Some(equipment) = self.equipment.as_mut() {
                    equipment.insert_at(index, item);
                }
            }
        }
    }

    /// Everything the shopper holds: hand items first, then equipment
    /// contents, each in stored order. A read view, not a second owner.
    pub fn all_products(&self) -> Vec<ProductHandle> {
        let mut all = self.hand_carried.clone();
        if let Some(equipment) = &self.equipment {
            all.extend_from_slice(equipment.items());
        }
        all
    }

    /// The inventory view: quantities grouped by product *name* (the
    /// receipt groups by serial instead - observed behavior, preserved).
    pub fn inventory_summary(&self) -> Vec<ProductSummary> {
        summarize_by_name(&self.all_products())
    }

    // -------------------------------------------------------------------------
    // Equipment hand-off (station logic lives in the session)
    // -------------------------------------------------------------------------

    /// Hands equipment to the shopper. The session has already verified
    /// the acquisition rules.
    pub(crate) fn assign_equipment(&mut self, equipment: Equipment) {
        self.equipment = Some(equipment);
    }

    /// Takes the held equipment away, if any.
    pub(crate) fn release_equipment(&mut self) -> Option<Equipment> {
        self.equipment.take()
    }

    /// Kind of the held equipment, if any.
    pub fn equipment_kind(&self) -> Option<EquipmentKind> {
        self.equipment.as_ref().map(Equipment::kind)
    }

    // -------------------------------------------------------------------------
    // Terminal transitions
    // -------------------------------------------------------------------------

    /// Finalizes a successful checkout: hands emptied, equipment released,
    /// checked-out set. Runs even if the receipt file later fails to write.
    pub(crate) fn finalize_checkout(&mut self) {
        self.hand_carried.clear();
        self.equipment = None;
        self.checked_out = true;
    }

    /// Marks the session's sole terminal transition.
    pub(crate) fn mark_exited(&mut self) {
        self.exited = true;
    }

    /// Read-only state snapshot for the presentation layer.
    pub fn snapshot(&self) -> ShopperSnapshot {
        ShopperSnapshot {
            name: self.name.clone(),
            age: self.age,
            position: self.position,
            facing: self.facing,
            floor: self.floor,
            equipment: self.equipment_kind(),
            held_count: self.all_products().len(),
            inventory: self.inventory_summary(),
            checked_out: self.checked_out,
            exited: self.exited,
        }
    }
}

// =============================================================================
// Snapshot DTO
// =============================================================================

/// What the presentation layer sees of the shopper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShopperSnapshot {
    pub name: String,
    pub age: u8,
    pub position: Point,
    pub facing: Direction,
    pub floor: usize,
    pub equipment: Option<EquipmentKind>,
    pub held_count: usize,
    pub inventory: Vec<ProductSummary>,
    pub checked_out: bool,
    pub exited: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
