//! # Menu Module
//!
//! The stand's fixed reference tables: what can be ordered and what it costs.
//!
//! ## Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Drinks                        Food                  Toppings           │
//! │  ──────                        ────                  ────────           │
//! │  Base (no price)               hotdog       $2.30    cherry       $0.00 │
//! │  Size  small     $1.50         corndog      $2.00    whipped cream$0.00 │
//! │        medium    $1.75         ice cream    $3.00    caramel sauce$0.50 │
//! │        large     $2.05         onion rings  $1.75    choc. sauce  $0.50 │
//! │        mega      $2.15         french fries $1.50    nacho cheese $0.30 │
//! │  Flavor shot     $0.15 each    tater tots   $1.70    chili        $0.60 │
//! │                                nacho chips  $1.90    bacon bits   $0.30 │
//! │                                                      ketchup      $0.00 │
//! │                                                      mustard      $0.00 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every table is an enum: a value that exists is on the menu. Parsing is
//! case-insensitive and the normalized (lowercase) name is what gets stored
//! and printed.
//!
//! ## Usage
//! ```rust
//! use stand_core::menu::{Base, Size};
//!
//! let base: Base = "HILL FOG".parse().unwrap();
//! assert_eq!(base.as_str(), "hill fog");
//! assert_eq!(Size::Mega.price().cents(), 215);
//! assert!("grape soda".parse::<Base>().is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Surcharge for each distinct flavor shot in a drink.
pub const FLAVOR_SURCHARGE: Money = Money::from_cents(15);

/// Declares a menu table enum.
///
/// Generates `ALL`, `as_str`, `parse`, case-insensitive `FromStr` that
/// fails with the given `CoreError` variant, `Display`, and string-based
/// serde impls.
macro_rules! menu_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident / $err:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every entry, in menu order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Normalized name as printed on receipts.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Looks up an entry by name, ignoring case.
            pub fn parse(input: &str) -> CoreResult<Self> {
                input.parse()
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|entry| entry.as_str() == normalized)
                    .ok_or_else(|| CoreError::$err(s.to_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

// =============================================================================
// Drink Tables
// =============================================================================

menu_table! {
    /// The liquid a drink is built on. Bases carry no price of their own.
    pub enum Base / InvalidBase {
        Water => "water",
        Sbrite => "sbrite",
        Pokeacola => "pokeacola",
        MrSalt => "mr. salt",
        HillFog => "hill fog",
        LeafWine => "leaf wine",
    }
}

menu_table! {
    /// Cup size; sets the drink's base price.
    pub enum Size / InvalidSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
        Mega => "mega",
    }
}

impl Size {
    /// Price of a plain drink in this size.
    pub const fn price(&self) -> Money {
        match self {
            Size::Small => Money::from_cents(150),
            Size::Medium => Money::from_cents(175),
            Size::Large => Money::from_cents(205),
            Size::Mega => Money::from_cents(215),
        }
    }
}

menu_table! {
    /// Flavor shot. Each distinct flavor costs [`FLAVOR_SURCHARGE`].
    pub enum Flavor / InvalidFlavor {
        Lemon => "lemon",
        Cherry => "cherry",
        Strawberry => "strawberry",
        Mint => "mint",
        Blueberry => "blueberry",
        Lime => "lime",
    }
}

// =============================================================================
// Food Tables
// =============================================================================

menu_table! {
    /// Kind of food item; sets its base price.
    pub enum FoodType / InvalidFoodType {
        Hotdog => "hotdog",
        Corndog => "corndog",
        IceCream => "ice cream",
        OnionRings => "onion rings",
        FrenchFries => "french fries",
        TaterTots => "tater tots",
        NachoChips => "nacho chips",
    }
}

impl FoodType {
    /// Price of the food item before toppings.
    pub const fn price(&self) -> Money {
        match self {
            FoodType::Hotdog => Money::from_cents(230),
            FoodType::Corndog => Money::from_cents(200),
            FoodType::IceCream => Money::from_cents(300),
            FoodType::OnionRings => Money::from_cents(175),
            FoodType::FrenchFries => Money::from_cents(150),
            FoodType::TaterTots => Money::from_cents(170),
            FoodType::NachoChips => Money::from_cents(190),
        }
    }
}

menu_table! {
    /// Food topping.
    pub enum Topping / InvalidTopping {
        Cherry => "cherry",
        WhippedCream => "whipped cream",
        CaramelSauce => "caramel sauce",
        ChocolateSauce => "chocolate sauce",
        NachoCheese => "nacho cheese",
        Chili => "chili",
        BaconBits => "bacon bits",
        Ketchup => "ketchup",
        Mustard => "mustard",
    }
}

impl Topping {
    /// Surcharge for this topping. Several toppings are free.
    pub const fn price(&self) -> Money {
        match self {
            Topping::Cherry => Money::from_cents(0),
            Topping::WhippedCream => Money::from_cents(0),
            Topping::CaramelSauce => Money::from_cents(50),
            Topping::ChocolateSauce => Money::from_cents(50),
            Topping::NachoCheese => Money::from_cents(30),
            Topping::Chili => Money::from_cents(60),
            Topping::BaconBits => Money::from_cents(30),
            Topping::Ketchup => Money::from_cents(0),
            Topping::Mustard => Money::from_cents(0),
        }
    }
}

// =============================================================================
// Menu Board
// =============================================================================

fn join_names<T: fmt::Display>(entries: &[T]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders every table as a plain-text menu board.
pub fn price_list() -> String {
    let mut board = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(board, "Drinks");
    let _ = writeln!(board, "  Bases: {}", join_names(Base::ALL));
    for size in Size::ALL {
        let _ = writeln!(board, "  {:<16}{}", size.as_str(), size.price());
    }
    let _ = writeln!(
        board,
        "  Flavors ({} each): {}",
        FLAVOR_SURCHARGE,
        join_names(Flavor::ALL)
    );

    let _ = writeln!(board, "Food");
    for food in FoodType::ALL {
        let _ = writeln!(board, "  {:<16}{}", food.as_str(), food.price());
    }

    let _ = writeln!(board, "Toppings");
    for topping in Topping::ALL {
        let _ = writeln!(board, "  {:<16}{}", topping.as_str(), topping.price());
    }

    board
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Size::Small, 150)]
    #[case(Size::Medium, 175)]
    #[case(Size::Large, 205)]
    #[case(Size::Mega, 215)]
    fn test_size_prices(#[case] size: Size, #[case] cents: i64) {
        assert_eq!(size.price().cents(), cents);
    }

    #[rstest]
    #[case(FoodType::Hotdog, 230)]
    #[case(FoodType::Corndog, 200)]
    #[case(FoodType::IceCream, 300)]
    #[case(FoodType::OnionRings, 175)]
    #[case(FoodType::FrenchFries, 150)]
    #[case(FoodType::TaterTots, 170)]
    #[case(FoodType::NachoChips, 190)]
    fn test_food_prices(#[case] food: FoodType, #[case] cents: i64) {
        assert_eq!(food.price().cents(), cents);
    }

    #[rstest]
    #[case(Topping::Cherry, 0)]
    #[case(Topping::WhippedCream, 0)]
    #[case(Topping::CaramelSauce, 50)]
    #[case(Topping::ChocolateSauce, 50)]
    #[case(Topping::NachoCheese, 30)]
    #[case(Topping::Chili, 60)]
    #[case(Topping::BaconBits, 30)]
    #[case(Topping::Ketchup, 0)]
    #[case(Topping::Mustard, 0)]
    fn test_topping_prices(#[case] topping: Topping, #[case] cents: i64) {
        assert_eq!(topping.price().cents(), cents);
    }

    #[rstest]
    #[case("hill fog", Base::HillFog)]
    #[case("HILL FOG", Base::HillFog)]
    #[case("Mr. Salt", Base::MrSalt)]
    #[case("mr. salt", Base::MrSalt)]
    #[case("LeAf WiNe", Base::LeafWine)]
    fn test_base_parse_ignores_case(#[case] input: &str, #[case] expected: Base) {
        assert_eq!(input.parse::<Base>().unwrap(), expected);
    }

    #[test]
    fn test_parse_errors_name_the_table() {
        assert_eq!(
            "root beer".parse::<Base>(),
            Err(CoreError::InvalidBase("root beer".to_string()))
        );
        assert_eq!(
            "extra large".parse::<Size>(),
            Err(CoreError::InvalidSize("extra large".to_string()))
        );
        assert_eq!(
            "Grape".parse::<Flavor>(),
            Err(CoreError::InvalidFlavor("Grape".to_string()))
        );
        assert_eq!(
            "pizza".parse::<FoodType>(),
            Err(CoreError::InvalidFoodType("pizza".to_string()))
        );
        assert_eq!(
            "sprinkles".parse::<Topping>(),
            Err(CoreError::InvalidTopping("sprinkles".to_string()))
        );
    }

    #[test]
    fn test_names_do_not_trim_whitespace() {
        assert!(" lemon".parse::<Flavor>().is_err());
    }

    #[test]
    fn test_every_name_round_trips() {
        for base in Base::ALL {
            assert_eq!(Base::parse(base.as_str()).unwrap(), *base);
        }
        for topping in Topping::ALL {
            assert_eq!(topping.to_string().parse::<Topping>().unwrap(), *topping);
        }
    }

    #[test]
    fn test_serde_uses_menu_names() {
        let json = serde_json::to_string(&FoodType::FrenchFries).unwrap();
        assert_eq!(json, "\"french fries\"");

        let parsed: Flavor = serde_json::from_str("\"LIME\"").unwrap();
        assert_eq!(parsed, Flavor::Lime);

        assert!(serde_json::from_str::<Flavor>("\"grape\"").is_err());
    }

    #[test]
    fn test_price_list_mentions_every_table() {
        let board = price_list();
        assert!(board.contains("hill fog"));
        assert!(board.contains("mega            $2.15"));
        assert!(board.contains("Flavors ($0.15 each): lemon, cherry"));
        assert!(board.contains("onion rings     $1.75"));
        assert!(board.contains("chili           $0.60"));
    }
}
