//! # Food
//!
//! A priced food item: type + toppings.
//!
//! ## Pricing
//! ```text
//! total = food type price + Σ surcharge of each distinct topping
//!
//! french fries, [nacho cheese, chili] → $1.50 + $0.30 + $0.60 = $2.40
//! ```
//!
//! The food type is fixed once the item exists. Toppings only grow; there is
//! no way to take one off.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CoreResult;
use crate::menu::{FoodType, Topping};
use crate::money::Money;
use crate::order::OrderItem;
use crate::types::AddOutcome;

/// A food item on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    food_type: FoodType,
    #[serde(default)]
    toppings: IndexSet<Topping>,
}

impl Food {
    /// Creates a food item with no toppings.
    ///
    /// ## Errors
    /// [`CoreError::InvalidFoodType`](crate::CoreError::InvalidFoodType) if
    /// the type is not on the menu (matched case-insensitively).
    ///
    /// ## Example
    /// ```rust
    /// use stand_core::Food;
    ///
    /// let mut fries = Food::new("French Fries").unwrap();
    /// fries.add_topping("chili").unwrap();
    /// assert_eq!(fries.total().cents(), 210);
    /// ```
    pub fn new(food_type: &str) -> CoreResult<Self> {
        Ok(Self::from_type(FoodType::parse(food_type)?))
    }

    pub fn from_type(food_type: FoodType) -> Self {
        Food {
            food_type,
            toppings: IndexSet::new(),
        }
    }

    pub fn food_type(&self) -> FoodType {
        self.food_type
    }

    /// Returns a snapshot of the toppings in the order they were added.
    pub fn toppings(&self) -> Vec<Topping> {
        self.toppings.iter().copied().collect()
    }

    /// Number of distinct toppings.
    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }

    /// Adds a topping.
    ///
    /// A topping that is already on the item is reported through
    /// [`AddOutcome::AlreadyPresent`] and a log notice; it is not an error.
    pub fn add_topping(&mut self, topping: &str) -> CoreResult<AddOutcome> {
        let topping = Topping::parse(topping)?;

        if self.toppings.insert(topping) {
            debug!(%topping, food = %self.food_type, "Topping added");
            Ok(AddOutcome::Added)
        } else {
            info!(%topping, "Topping '{}' is already added", topping);
            Ok(AddOutcome::AlreadyPresent)
        }
    }

    /// Base price only, toppings excluded.
    pub fn price(&self) -> Money {
        self.food_type.price()
    }

    pub fn total(&self) -> Money {
        self.price() + self.toppings.iter().map(Topping::price).sum::<Money>()
    }
}

impl OrderItem for Food {
    fn kind(&self) -> &'static str {
        "Food"
    }

    fn describe(&self) -> Vec<(&'static str, String)> {
        let toppings = self
            .toppings
            .iter()
            .map(Topping::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        vec![("Type", self.food_type.to_string()), ("Toppings", toppings)]
    }

    fn cost(&self) -> Money {
        self.total()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
