//! # Money Module
//!
//! Provides the `Money` type for ticket prices and purchase totals.
//!
//! ## Why Integer Money?
//! Ticket prices are whole currency units (adult 20, child 10), and the
//! payment service is charged exactly the sum of those. Keeping the value an
//! integer means a total is always the exact sum of its parts.
//!
//! ## Usage
//! ```rust
//! use ticket_core::money::Money;
//!
//! let adults = Money::from_units(20).checked_multiply_quantity(2).unwrap();
//! let total = adults.checked_add(Money::from_units(10)).unwrap();
//! assert_eq!(total.units(), 50);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the account id width and leaves headroom for
///   large group bookings
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a bare number (`50`, not `{"0":50}`)
///
/// ## Where Money is Used
/// ```text
/// TicketType::unit_price ──► × count ──► PurchaseOutcome.total_cost
///                                               │
///                                               ▼
///                                 PaymentService::make_payment
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use ticket_core::money::Money;
    ///
    /// let price = Money::from_units(20);
    /// assert_eq!(price.units(), 20);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies a unit price by a ticket count.
    ///
    /// Returns `None` if the count does not fit in an `i64` or the product
    /// overflows.
    ///
    /// ## Example
    /// ```rust
    /// use ticket_core::money::Money;
    ///
    /// let child = Money::from_units(10);
    /// assert_eq!(child.checked_multiply_quantity(3), Some(Money::from_units(30)));
    /// assert_eq!(child.checked_multiply_quantity(u64::MAX), None);
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: u64) -> Option<Self> {
        i64::try_from(qty)
            .ok()
            .and_then(|qty| self.0.checked_mul(qty))
            .map(Money)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain number, the currency is implied by the venue.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
