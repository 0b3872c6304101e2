//! # ticket-core: Pure Business Logic for Box Office
//!
//! This crate decides whether a ticket purchase is legal and what it costs.
//! It contains no I/O: paying and reserving seats happen in `ticket-service`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Box Office Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 box-office (hosting binary)                     │   │
//! │  │        logging init ──► config ──► console gateways             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    ticket-service                               │   │
//! │  │        validate ──► compute ──► pay ──► reserve                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ticket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │ Purchaser │  │   Money   │  │ Purchase  │  │  totals   │  │   │
//! │  │   │ Request   │  │  prices   │  │   Error   │  │  rules    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Purchaser, TicketType, TicketRequest)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Purchase rules and totals
//!
//! ## Example Usage
//!
//! ```rust
//! use ticket_core::{evaluate_purchase, Purchaser, TicketRequest, TicketType};
//!
//! let purchaser = Purchaser::new(1);
//! let requests = [
//!     TicketRequest::new(TicketType::Adult, 2),
//!     TicketRequest::new(TicketType::Child, 1),
//!     TicketRequest::new(TicketType::Infant, 1),
//! ];
//!
//! let outcome = evaluate_purchase(Some(&purchaser), &requests).unwrap();
//! assert_eq!(outcome.total_cost.units(), 50);
//! assert_eq!(outcome.total_seats, 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{PurchaseError, PurchaseResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use validation::{evaluate_purchase, PurchaseOutcome};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Price of one adult ticket.
pub const ADULT_TICKET_PRICE: Money = Money::from_units(20);

/// Price of one child ticket.
pub const CHILD_TICKET_PRICE: Money = Money::from_units(10);

/// Infants sit on an adult's lap and travel free.
pub const INFANT_TICKET_PRICE: Money = Money::zero();
