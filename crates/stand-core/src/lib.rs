//! # stand-core: Pure Business Logic for the Snack Stand
//!
//! This crate is the **heart** of the stand's register. It holds the menu,
//! the pricing rules, and the order/receipt model, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Snack Stand Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stand-cli (binary)                           │   │
//! │  │    args ──► Drink/Food ──► Order ──► receipt on stdout          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stand-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │   money   │  │   order   │  │ validation│  │   │
//! │  │   │  Base     │  │   Money   │  │   Order   │  │ parse_all │  │   │
//! │  │   │  Size ... │  │  TaxRate  │  │ OrderItem │  │  tax bps  │  │   │
//! │  │   └───────────┘  └───────────┘  └─────┬─────┘  └───────────┘  │   │
//! │  │                                 ┌─────┴─────┐                   │   │
//! │  │                              ┌──┴──┐     ┌──┴──┐                │   │
//! │  │                              │Drink│     │Food │                │   │
//! │  │                              └─────┘     └─────┘                │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - Reference tables (bases, sizes, flavors, foods, toppings)
//! - [`money`] - Money type with integer cents
//! - [`types`] - TaxRate and AddOutcome
//! - [`drink`] / [`food`] - The two item kinds
//! - [`order`] - Order aggregate, `OrderItem` capability, receipt
//! - [`error`] - Domain error types
//! - [`validation`] - Batch parsing and numeric checks
//!
//! ## Example Usage
//!
//! ```rust
//! use stand_core::{Drink, Food, Order};
//!
//! let mut drink = Drink::new("hill fog", "medium")?;
//! drink.add_flavor("lemon")?;
//!
//! let mut fries = Food::new("french fries")?;
//! fries.add_topping("nacho cheese")?;
//! fries.add_topping("chili")?;
//!
//! let mut order = Order::new();
//! order.add_item(drink);
//! order.add_item(fries);
//!
//! assert_eq!(
//!     order.receipt(),
//!     "Receipt:\n\
//!      Drink 1: Base = hill fog, Flavors = lemon, Size = medium, Cost: $1.90\n\
//!      Food 1: Type = french fries, Toppings = nacho cheese, chili, Cost: $2.40\n\
//!      Order Total: $4.61\n"
//! );
//! # Ok::<(), stand_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod drink;
pub mod error;
pub mod food;
pub mod menu;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use drink::Drink;
pub use error::{CoreError, CoreResult, ValidationError};
pub use food::Food;
pub use menu::{Base, Flavor, FoodType, Size, Topping};
pub use money::Money;
pub use order::{Order, OrderItem, OrderSummary, ReceiptLine};
pub use types::{AddOutcome, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every order unless the caller picks another rate.
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(725);
