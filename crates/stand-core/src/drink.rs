//! # Drink
//!
//! A priced beverage: base + size + flavor shots.
//!
//! ## Pricing
//! ```text
//! total = size price + $0.15 × distinct flavors
//!
//! hill fog, medium, [lemon]        → $1.75 + $0.15       = $1.90
//! water, mega, [lime, mint, lime]  → $2.15 + $0.15 × 2   = $2.45
//! ```
//!
//! ## Invariants
//! - Base and size are always on the menu. Every setter validates before it
//!   writes, so a rejected call leaves the drink exactly as it was.
//! - Flavors are unique and keep the order they were first added in.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CoreResult;
use crate::menu::{Base, Flavor, Size, FLAVOR_SURCHARGE};
use crate::money::Money;
use crate::order::OrderItem;
use crate::types::AddOutcome;
use crate::validation::parse_all;

/// A drink on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    base: Base,
    size: Size,
    #[serde(default)]
    flavors: IndexSet<Flavor>,
}

impl Drink {
    /// Creates a drink with no flavors.
    ///
    /// Both names are matched case-insensitively.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidBase`](crate::CoreError::InvalidBase) if the base is not on the menu
    /// - [`CoreError::InvalidSize`](crate::CoreError::InvalidSize) if the size is not on the menu
    ///
    /// ## Example
    /// ```rust
    /// use stand_core::Drink;
    ///
    /// let drink = Drink::new("Hill Fog", "MEDIUM").unwrap();
    /// assert_eq!(drink.base().as_str(), "hill fog");
    /// assert_eq!(drink.total().cents(), 175);
    /// ```
    pub fn new(base: &str, size: &str) -> CoreResult<Self> {
        let base = Base::parse(base)?;
        let size = Size::parse(size)?;
        Ok(Self::from_parts(base, size))
    }

    /// Creates a drink from already-validated menu entries.
    pub fn from_parts(base: Base, size: Size) -> Self {
        Drink {
            base,
            size,
            flavors: IndexSet::new(),
        }
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns a snapshot of the flavors in the order they were added.
    pub fn flavors(&self) -> Vec<Flavor> {
        self.flavors.iter().copied().collect()
    }

    pub fn flavor_count(&self) -> usize {
        self.flavors.len()
    }

    /// Adds a flavor shot.
    ///
    /// Adding a flavor that is already in the drink is not an error: the
    /// drink is unchanged, a notice is logged, and
    /// [`AddOutcome::AlreadyPresent`] is returned.
    pub fn add_flavor(&mut self, flavor: &str) -> CoreResult<AddOutcome> {
        let flavor = Flavor::parse(flavor)?;

        if self.flavors.insert(flavor) {
            debug!(%flavor, base = %self.base, "Flavor added");
            Ok(AddOutcome::Added)
        } else {
            info!(%flavor, "Flavor '{}' is already added", flavor);
            Ok(AddOutcome::AlreadyPresent)
        }
    }

    /// Replaces every flavor.
    ///
    /// All entries are checked before anything changes; on the first invalid
    /// one the error is returned and the existing flavors are kept.
    /// Duplicates collapse to their first occurrence.
    pub fn set_flavors<I, S>(&mut self, flavors: I) -> CoreResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed: Vec<Flavor> = parse_all(flavors)?;
        self.flavors = parsed.into_iter().collect();
        debug!(count = self.flavors.len(), "Flavors replaced");
        Ok(())
    }

    /// Changes the cup size.
    pub fn set_size(&mut self, size: &str) -> CoreResult<()> {
        self.size = Size::parse(size)?;
        Ok(())
    }

    /// Size price plus one surcharge per distinct flavor.
    pub fn total(&self) -> Money {
        self.size.price() + FLAVOR_SURCHARGE * self.flavors.len() as i64
    }
}

impl OrderItem for Drink {
    fn kind(&self) -> &'static str {
        "Drink"
    }

    fn describe(&self) -> Vec<(&'static str, String)> {
        let flavors = self
            .flavors
            .iter()
            .map(Flavor::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            ("Base", self.base.to_string()),
            ("Flavors", flavors),
            ("Size", self.size.to_string()),
        ]
    }

    fn cost(&self) -> Money {
        self.total()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
