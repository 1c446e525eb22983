//! # Seed Module
//!
//! The bundled store: a two-floor 22x22 layout and its product catalog,
//! supplied as static data and assembled once at session start.
//!
//! ## Store Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Ground floor: chilled counters along the top wall (chicken / beef /   │
//! │  seafood), two banks of shelf-and-table aisles (pantry goods and the   │
//! │  fruit tables), checkout counters, cart/basket stations, and the       │
//! │  entrance/exit pair on the bottom wall.                                │
//! │                                                                         │
//! │  Second floor: refrigerators along the top wall (milk / frozen /       │
//! │  cheese), aisles for household and personal care, bread and egg        │
//! │  tables along the bottom wall, stairs in the same corners as below.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Layout tokens: `w` wall, `sh` shelf, `tb` table, `ch` chilled counter,
//! `rf` refrigerator, `en` entrance, `ex` exit, `co` checkout, `st`
//! stairs, `cs` cart station, `bs` basket station, `ps` product search,
//! `.` open floor.

use std::collections::HashMap;

use crate::amenity::Amenity;
use crate::catalog::{Catalog, Product, ProductHandle};
use crate::display::DisplayKind;
use crate::geometry::Point;
use crate::map::{DisplayLocation, StoreMap};
use crate::money::Money;
use crate::session::Session;

/// The entrance tile on the ground floor, where every session begins.
pub const SHOPPER_START: Point = Point::new(11, 21);

// =============================================================================
// Floor Plans
// =============================================================================

const GROUND_FLOOR: [&str; 22] = [
    "w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w",
    "w  ch ch ch ch ch ch .  ch ch ch ch ch ch .  ch ch ch ch ch ch w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  st .  .  .  .  .  .  ps .  .  .  .  ps .  .  .  .  .  .  st w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  .  .  .  .  .  .  .  .  .  w  w  .  .  .  .  .  .  .  .  .  w",
    "w  w  co w  co w  co w  co .  w  w  .  co w  co w  co w  co w  w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  cs .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  bs w",
    "w  w  w  w  w  w  w  w  w  w  ex en w  w  w  w  w  w  w  w  w  w",
];

const SECOND_FLOOR: [&str; 22] = [
    "w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w",
    "w  cs .  rf rf rf rf .  .  rf rf rf rf .  .  rf rf rf rf .  bs w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  sh sh .  .  sh sh .  .  tb tb .  .  sh sh .  .  sh sh .  w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  st .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  st w",
    "w  .  .  .  w  w  .  .  .  .  w  w  .  .  .  .  w  w  .  .  .  w",
    "w  .  .  .  w  w  .  .  .  .  w  w  .  .  .  .  w  w  .  .  .  w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  w",
    "w  ps .  tb tb tb tb tb .  tb tb tb tb .  tb tb tb tb tb .  ps w",
    "w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w  w",
];

// =============================================================================
// Catalog
// =============================================================================

/// Every product the store sells, three variants per category.
pub fn starter_catalog() -> Catalog {
    fn p(serial: &str, name: &str, pesos: i64, consumable: bool, beverage: bool) -> ProductHandle {
        Product::new(serial, name, Money::from_pesos(pesos), consumable, beverage)
    }

    Catalog::new(vec![
        // Bread
        p("BRD001", "Gardenia White Bread", 85, true, false),
        p("BRD002", "Pan de Manila Pandesal", 60, true, false),
        p("BRD003", "Monde Special Mamon", 75, true, false),
        // Eggs
        p("EGG001", "Bounty Fresh L-Eggs", 290, true, false),
        p("EGG002", "Magnolia Brown Eggs", 130, true, false),
        p("EGG003", "Salted Eggs (6pcs)", 85, true, false),
        // Frozen
        p("FRZ001", "Tender Juicy Hotdog", 220, true, false),
        p("FRZ002", "Pampanga's Best Tocino", 150, true, false),
        p("FRZ003", "CDO Young Pork Tocino", 75, true, false),
        // Milk
        p("MLK001", "Bear Brand Fresh Milk", 115, true, true),
        p("MLK002", "Selecta Skim Milk", 35, true, true),
        p("MLK003", "Magnolia Fresh Milk", 98, true, true),
        // Cheese
        p("CHS001", "Eden Cheese Original", 58, true, false),
        p("CHS002", "Magnolia Cheezee", 65, true, false),
        p("CHS003", "Ques-O Cheddar Block", 48, true, false),
        // Cleaning
        p("CLE001", "Joy Dishwashing Liq", 60, false, false),
        p("CLE002", "Zonrox Bleach (1L)", 40, false, false),
        p("CLE003", "Ariel Powder (600g)", 135, false, false),
        // Home essentials
        p("HOM001", "Sanicare Kitchen Towel", 95, false, false),
        p("HOM002", "Reynolds Aluminum Foil", 110, false, false),
        p("HOM003", "Scotch Brite Sponge", 35, false, false),
        // Hair care
        p("HAR001", "Palmolive Shampoo", 95, false, false),
        p("HAR002", "Cream Silk Conditioner", 110, false, false),
        p("HAR003", "Gatsby Styling Wax", 130, false, false),
        // Body care
        p("BOD001", "Safeguard Bar Soap", 55, false, false),
        p("BOD002", "Johnson's Baby Powder", 70, false, false),
        p("BOD003", "Green Cross Alcohol", 80, false, false),
        // Dental care
        p("DEN001", "Colgate Toothpaste", 105, false, false),
        p("DEN002", "Oral-B Toothbrush", 90, false, false),
        p("DEN003", "Listerine Mouthwash", 140, false, false),
        // Vegetables
        p("VEG001", "Broccoli Heads", 140, true, false),
        p("VEG002", "Baguio Carrots", 95, true, false),
        p("VEG003", "Ampalaya (1kg)", 110, true, false),
        // Clothes
        p("CLO001", "Cotton T-Shirt", 250, false, false),
        p("CLO002", "Boxer Shorts (3pk)", 350, false, false),
        p("CLO003", "Ankle Socks (3pk)", 150, false, false),
        // Stationery
        p("STN001", "Panda Ballpens (12)", 85, false, false),
        p("STN002", "Cattleya Notebook", 35, false, false),
        p("STN003", "Yellow Pad Ream", 120, false, false),
        // Pet food
        p("PET001", "Pedigree Dog Food", 140, true, false),
        p("PET002", "Whiskas Cat Food", 35, true, false),
        p("PET003", "Purina One Dry Food", 380, true, false),
        // Fruits
        p("FRU001", "Davao Pomelos", 120, true, false),
        p("FRU002", "Phil. Mangoes", 180, true, false),
        p("FRU003", "Apples", 60, true, false),
        // Chicken
        p("CHK001", "Chicken Thigh", 200, true, false),
        p("CHK002", "Ground Chicken", 120, true, false),
        p("CHK003", "Drumsticks", 185, true, false),
        // Beef
        p("BEF001", "Rib-eye Steak", 450, true, false),
        p("BEF002", "Ground Beef", 305, true, false),
        p("BEF003", "Beef Shank", 310, true, false),
        // Seafood
        p("SEA001", "Tilapia Fillet", 210, true, false),
        p("SEA002", "Shrimp", 350, true, false),
        p("SEA003", "Squid Rings", 175, true, false),
        // Cereal
        p("CER001", "Koko Krunch", 120, true, false),
        p("CER002", "Quaker Oats", 95, true, false),
        p("CER003", "Honey Bunches", 145, true, false),
        // Noodles
        p("NDL001", "Pancit Canton", 25, true, false),
        p("NDL002", "Miswa", 40, true, false),
        p("NDL003", "Egg Noodles", 65, true, false),
        // Snacks
        p("SNK001", "Lay's Chips", 55, true, false),
        p("SNK002", "Choco Cookies", 110, true, false),
        p("SNK003", "Crackers", 45, true, false),
        // Canned goods
        p("CAN001", "Century Tuna", 49, true, false),
        p("CAN002", "Condensed Soup", 65, true, false),
        p("CAN003", "Sardines", 35, true, false),
        // Condiments
        p("CON001", "Soy Sauce", 21, true, false),
        p("CON002", "Banana Ketchup", 60, true, false),
        p("CON003", "Vinegar", 85, true, false),
        // Soft drinks
        p("SFT001", "Distilled Water", 30, true, true),
        p("SFT002", "Coke 1.5L", 65, true, true),
        p("SFT003", "Sprite", 40, true, true),
        // Juice
        p("JUC001", "C2 Green Tea", 85, true, true),
        p("JUC002", "Orange Juice", 70, true, true),
        p("JUC003", "Pineapple Juice", 90, true, true),
        // Alcohol
        p("ALC001", "Pale Pilsen", 60, true, true),
        p("ALC002", "Tanduay Rhum", 350, true, true),
        p("ALC003", "Emperador", 500, true, true),
    ])
}

// =============================================================================
// Stocking
// =============================================================================

/// Which product category a display carries, decided by its position.
///
/// The store is zoned: chilled counters split into chicken / beef /
/// seafood thirds, ground-floor shelves carry pantry goods by aisle,
/// second-floor rows carry household and personal care, and the bottom
/// tables hold bread and eggs.
fn category_for(location: &DisplayLocation) -> Option<&'static str> {
    let r = location.position.y;
    let c = location.position.x;

    if location.floor == 0 {
        return match location.kind {
            DisplayKind::ChilledCounter => Some(if c <= 7 {
                "CHK"
            } else if c <= 14 {
                "BEF"
            } else {
                "SEA"
            }),
            DisplayKind::Table => Some("FRU"),
            DisplayKind::Shelf if r <= 7 => Some(if c <= 3 {
                "ALC"
            } else if c <= 8 {
                "SFT"
            } else if c <= 15 {
                "CER"
            } else {
                "CAN"
            }),
            DisplayKind::Shelf => Some(if c <= 3 {
                "CON"
            } else if c <= 8 {
                "JUC"
            } else if c <= 15 {
                "NDL"
            } else {
                "SNK"
            }),
            DisplayKind::Refrigerator => None,
        };
    }

    // Second floor is zoned by row band, shelves and tables alike.
    match r {
        1 => Some(if c <= 6 {
            "MLK"
        } else if c <= 12 {
            "FRZ"
        } else {
            "CHS"
        }),
        4..=7 => Some(if c <= 3 {
            "PET"
        } else if c <= 7 {
            "CLO"
        } else if c <= 11 {
            "VEG"
        } else if c <= 15 {
            "CLE"
        } else {
            "HOM"
        }),
        10..=13 => Some(if c <= 3 {
            "STN"
        } else if c <= 7 {
            "DEN"
        } else if c <= 11 {
            "VEG"
        } else if c <= 15 {
            "HAR"
        } else {
            "BOD"
        }),
        20 => Some(if c <= 7 {
            "BRD"
        } else if c <= 13 {
            "EGG"
        } else {
            "BRD"
        }),
        _ => None,
    }
}

/// Fills every display with one product variant, cycling through the
/// category's three variants so adjacent displays differ.
fn stock_displays(map: &mut StoreMap) {
    let locations: Vec<DisplayLocation> = map.displays().to_vec();
    let mut cycle: HashMap<&'static str, usize> = HashMap::new();

    for location in &locations {
        let Some(category) = category_for(location) else {
            continue;
        };
        let variants = map.catalog().by_prefix(category);
        if variants.len() < 3 {
            continue;
        }

        let counter = cycle.entry(category).or_insert(0);
        let item = variants[*counter % 3].clone();
        *counter += 1;

        let Some(display) = map
            .amenity_at_mut(location.position.x, location.position.y, location.floor)
            .and_then(Amenity::as_display_mut)
        else {
            continue;
        };
        while !display.is_full() {
            // Same catalog entry repeated; duplicates are legal stock.
            if display.stock(item.clone()).is_err() {
                break;
            }
        }
    }
}

// =============================================================================
// Assembly
// =============================================================================

/// Builds and stocks the bundled two-floor store.
pub fn starter_map() -> StoreMap {
    let mut map = StoreMap::build(&[&GROUND_FLOOR, &SECOND_FLOOR], starter_catalog())
        .expect("bundled floor plans are valid");
    stock_displays(&mut map);
    map
}

/// Starts a session in the bundled store, at the entrance.
pub fn starter_session(name: impl Into<String>, age: u8) -> Session {
    Session::new(starter_map(), name, age, SHOPPER_START)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amenity::AmenityKind;
    use crate::display::Display;

    #[test]
    fn test_plans_build() {
        let map = starter_map();
        assert_eq!(map.floor_count(), 2);
        assert_eq!(map.catalog().len(), 75);
    }

    #[test]
    fn test_service_tiles_in_place() {
        let map = starter_map();
        assert_eq!(map.amenity_at(11, 21, 0).map(Amenity::kind), Some(AmenityKind::Entrance));
        assert_eq!(map.amenity_at(10, 21, 0).map(Amenity::kind), Some(AmenityKind::Exit));
        assert_eq!(map.amenity_at(1, 20, 0).map(Amenity::kind), Some(AmenityKind::CartStation));
        assert_eq!(map.amenity_at(20, 20, 0).map(Amenity::kind), Some(AmenityKind::BasketStation));
        assert_eq!(map.amenity_at(1, 15, 0).map(Amenity::kind), Some(AmenityKind::Stairs));
        assert_eq!(map.amenity_at(20, 15, 1).map(Amenity::kind), Some(AmenityKind::Stairs));
        assert_eq!(map.amenity_at(2, 18, 0).map(Amenity::kind), Some(AmenityKind::Checkout));
        assert_eq!(map.amenity_at(8, 15, 0).map(Amenity::kind), Some(AmenityKind::Search));
    }

    #[test]
    fn test_display_census() {
        // Ground floor: 18 chilled counters, 64 shelves, 16 tables.
        // Second floor: 12 refrigerators, 64 shelves, 30 tables.
        let map = starter_map();
        assert_eq!(map.displays().len(), 204);

        let count = |floor: usize, kind: DisplayKind| {
            map.displays()
                .iter()
                .filter(|d| d.floor == floor && d.kind == kind)
                .count()
        };
        assert_eq!(count(0, DisplayKind::ChilledCounter), 18);
        assert_eq!(count(0, DisplayKind::Shelf), 64);
        assert_eq!(count(0, DisplayKind::Table), 16);
        assert_eq!(count(1, DisplayKind::Refrigerator), 12);
        assert_eq!(count(1, DisplayKind::Shelf), 64);
        assert_eq!(count(1, DisplayKind::Table), 30);
    }

    #[test]
    fn test_every_display_stocked_full() {
        let map = starter_map();
        for location in map.displays() {
            let display = map
                .amenity_at(location.position.x, location.position.y, location.floor)
                .and_then(Amenity::as_display)
                .unwrap();
            assert!(display.is_full(), "unstocked display at {}", location.address);
        }
    }

    #[test]
    fn test_zoning() {
        let map = starter_map();
        let display_at = |x: i32, y: i32, floor: usize| -> &Display {
            map.amenity_at(x, y, floor).and_then(Amenity::as_display).unwrap()
        };

        // First ground-floor shelf aisle is the alcohol zone
        assert!(display_at(2, 4, 0).contains_by_name("pale pilsen"));
        // The first refrigerator upstairs carries milk
        assert!(display_at(3, 1, 1).contains_by_name("bear brand"));
        // Chilled counters start with chicken
        assert!(display_at(1, 1, 0).contains_by_name("chicken"));
        // Bottom tables upstairs hold bread
        assert!(display_at(3, 20, 1).contains_by_name("gardenia"));
    }

    #[test]
    fn test_variants_cycle_across_displays() {
        let map = starter_map();
        // Fruit tables cycle FRU001, FRU002, FRU003 in placement order
        let fruit_tables: Vec<&DisplayLocation> = map
            .displays()
            .iter()
            .filter(|d| d.floor == 0 && d.kind == DisplayKind::Table)
            .collect();
        let first = map
            .amenity_at(fruit_tables[0].position.x, fruit_tables[0].position.y, 0)
            .and_then(Amenity::as_display)
            .unwrap();
        let second = map
            .amenity_at(fruit_tables[1].position.x, fruit_tables[1].position.y, 0)
            .and_then(Amenity::as_display)
            .unwrap();
        assert!(first.contains_by_name("pomelos"));
        assert!(second.contains_by_name("mangoes"));
    }

    #[test]
    fn test_catalog_passes_validation() {
        use crate::validation::{validate_price, validate_product_name, validate_serial};

        for product in starter_catalog().products() {
            validate_serial(&product.serial).unwrap();
            validate_product_name(&product.name).unwrap();
            validate_price(product.price).unwrap();
        }
    }

    #[test]
    fn test_starter_session_begins_at_entrance() {
        let session = starter_session("Ana", 30);
        assert_eq!(session.shopper().position(), SHOPPER_START);
        assert_eq!(session.shopper().floor(), 0);
    }

    #[test]
    fn test_full_trip_through_the_store() {
        use crate::geometry::Direction;
        use crate::session::{Interaction, MoveEvent, Session};

        fn walk(s: &mut Session, direction: Direction, steps: usize) {
            s.face(direction).unwrap();
            for _ in 0..steps {
                s.move_forward().unwrap();
            }
        }

        let mut s = starter_session("Ana", 30);

        // Entrance (11,21) -> around the checkout row to the noodle aisle
        walk(&mut s, Direction::North, 1);
        walk(&mut s, Direction::East, 1);
        walk(&mut s, Direction::North, 7);
        walk(&mut s, Direction::East, 1);
        assert_eq!(s.shopper().position(), Point::new(13, 13));

        // The shelf at (14,13) is in the noodle zone
        s.face(Direction::East).unwrap();
        let taken = s.take_from_front(0, 0).unwrap();
        assert_eq!(taken.serial_prefix(), "NDL");

        // Back down to the counter at (13,18); arrival settles the bill
        walk(&mut s, Direction::West, 1);
        walk(&mut s, Direction::South, 5);
        s.face(Direction::East).unwrap();
        match s.move_forward().unwrap() {
            MoveEvent::Interacted(Ok(Interaction::CheckedOut(receipt))) => {
                assert_eq!(receipt.lines.len(), 1);
                assert_eq!(receipt.lines[0].serial, taken.serial);
            }
            other => panic!("expected checkout on arrival, got {other:?}"),
        }

        // Out through the exit at (10,21)
        walk(&mut s, Direction::South, 2);
        walk(&mut s, Direction::West, 3);
        s.face(Direction::South).unwrap();
        assert_eq!(s.interact().unwrap(), Interaction::Exited);
        assert!(s.is_over());
    }
}
