//! # Shared Types
//!
//! Small value types used by more than one entity.

use serde::{Deserialize, Serialize};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 725 bps = 7.25% (the stand's sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the factor a pre-tax amount is multiplied by.
    ///
    /// 725 bps → 1.0725
    #[inline]
    pub fn multiplier(&self) -> f64 {
        1.0 + self.0 as f64 / 10_000.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        crate::DEFAULT_TAX_RATE
    }
}

// =============================================================================
// Add Outcome
// =============================================================================

/// Result of adding a flavor or topping.
///
/// Adding something already present succeeds without changing the item;
/// the caller is told which case happened instead of getting an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// The entry was new and is now part of the item.
    Added,
    /// The entry was already present; nothing changed.
    AlreadyPresent,
}

impl AddOutcome {
    /// Returns true if the item changed.
    #[inline]
    pub const fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
