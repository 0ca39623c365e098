//! # Order
//!
//! An ordered collection of items with a taxed total and a printed receipt.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order Lifecycle                                 │
//! │                                                                         │
//! │  Order::new() ──► add_item(drink) ──► add_item(food) ──► ...           │
//! │                                                                         │
//! │  Queries (any number of times, no side effects):                       │
//! │    subtotal() ── Σ item.cost()                     (Money, exact)       │
//! │    total()    ── subtotal × 1.0725                 (f64, unrounded)     │
//! │    receipt()  ── one line per item + "Order Total" (2-decimal display)  │
//! │    summary()  ── serializable totals for callers                       │
//! │                                                                         │
//! │  Items are appended only. Never removed, never reordered.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Receipt Format
//! ```text
//! Receipt:
//! Drink 1: Base = hill fog, Flavors = lemon, Size = medium, Cost: $1.90
//! Food 1: Type = french fries, Toppings = nacho cheese, chili, Cost: $2.40
//! Order Total: $4.61
//! ```
//! Each line number counts items of the same kind, in the order they were
//! added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Write as _};
use tracing::debug;
use uuid::Uuid;

use crate::money::Money;
use crate::types::TaxRate;

// =============================================================================
// Order Item Capability
// =============================================================================

/// Anything that can be put on an order.
///
/// The order never looks at concrete types: it asks each item for its
/// receipt label, its labelled fields, and its cost. [`Drink`](crate::Drink)
/// and [`Food`](crate::Food) implement it; new item kinds only need to
/// implement it too.
pub trait OrderItem: fmt::Debug {
    /// Receipt label, e.g. `"Drink"`. Also groups line numbering.
    fn kind(&self) -> &'static str;

    /// Labelled fields, printed as `Label = value` in this order.
    fn describe(&self) -> Vec<(&'static str, String)>;

    /// Pre-tax cost of the item.
    fn cost(&self) -> Money;
}

// =============================================================================
// Receipt Line
// =============================================================================

/// One rendered item line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub kind: String,
    /// 1-based position among items of the same kind.
    pub number: usize,
    /// `Label = value` pairs joined with `", "`.
    pub description: String,
    pub cost_cents: i64,
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: ", self.kind, self.number)?;
        if !self.description.is_empty() {
            write!(f, "{}, ", self.description)?;
        }
        write!(f, "Cost: {}", Money::from_cents(self.cost_cents))
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer's order.
///
/// ## Invariants
/// - `items` keeps insertion order
/// - `total() == subtotal × tax multiplier`, never rounded
#[derive(Debug)]
pub struct Order {
    id: Uuid,
    created_at: DateTime<Utc>,
    tax_rate: TaxRate,
    items: Vec<Box<dyn OrderItem>>,
}

impl Order {
    /// Creates an empty order at the stand's tax rate (7.25%).
    pub fn new() -> Self {
        Self::with_tax_rate(TaxRate::default())
    }

    /// Creates an empty order at a specific tax rate.
    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        Order {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            tax_rate,
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Appends an item. Items are valid by construction, so this cannot fail.
    pub fn add_item<T: OrderItem + 'static>(&mut self, item: T) {
        debug!(
            order_id = %self.id,
            kind = item.kind(),
            cost = %item.cost(),
            "Item added to order"
        );
        self.items.push(Box::new(item));
    }

    /// Read-only view of the items in insertion order.
    pub fn items(&self) -> &[Box<dyn OrderItem>] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item costs before tax.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|item| item.cost()).sum()
    }

    /// Subtotal with tax applied, in dollars. Not rounded.
    pub fn total(&self) -> f64 {
        self.subtotal().with_tax(self.tax_rate)
    }

    /// Tax portion of the total, in dollars. Not rounded.
    pub fn tax(&self) -> f64 {
        self.total() - self.subtotal().as_dollars()
    }

    /// Renders each item as a numbered receipt line.
    pub fn lines(&self) -> Vec<ReceiptLine> {
        let mut seen: HashMap<&'static str, usize> = HashMap::new();

        self.items
            .iter()
            .map(|item| {
                let number = seen.entry(item.kind()).or_insert(0);
                *number += 1;

                let description = item
                    .describe()
                    .into_iter()
                    .map(|(label, value)| format!("{} = {}", label, value))
                    .collect::<Vec<_>>()
                    .join(", ");

                ReceiptLine {
                    kind: item.kind().to_string(),
                    number: *number,
                    description,
                    cost_cents: item.cost().cents(),
                }
            })
            .collect()
    }

    /// Renders the full receipt, ending with a newline.
    pub fn receipt(&self) -> String {
        let mut receipt = String::from("Receipt:\n");

        // Writing to a String cannot fail.
        for line in self.lines() {
            let _ = writeln!(receipt, "{}", line);
        }
        let _ = writeln!(receipt, "Order Total: ${:.2}", self.total());

        receipt
    }

    /// Serializable snapshot of the order's totals and lines.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from(self)
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.receipt())
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Order totals for callers that want data rather than receipt text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub item_count: usize,
    pub lines: Vec<ReceiptLine>,
    pub subtotal_cents: i64,
    pub tax_rate_bps: u32,
    pub tax: f64,
    pub total: f64,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        OrderSummary {
            order_id: order.id(),
            created_at: order.created_at(),
            item_count: order.item_count(),
            lines: order.lines(),
            subtotal_cents: order.subtotal().cents(),
            tax_rate_bps: order.tax_rate().bps(),
            tax: order.tax(),
            total: order.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
