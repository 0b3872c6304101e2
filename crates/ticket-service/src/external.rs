//! # External Service Contracts
//!
//! The two collaborators a purchase is fulfilled through. Both are
//! synchronous and owned by someone else; this crate only relies on the
//! signatures below.
//!
//! ## Failure Contract
//! ```text
//! make_payment  ──Err(any)──► ExternalCallError::Payment     ─┐
//!                                                             ├──► PurchaseError::ExternalFailure(msg)
//! reserve_seat  ──Err(any)──► ExternalCallError::Reservation ─┘
//! ```
//! The stage survives into logs; callers only see the message.

use std::error::Error;
use std::sync::Arc;

use thiserror::Error;
use ticket_core::{AccountId, Money, PurchaseError};

/// Arbitrary failure raised by an external service.
pub type BoxError = Box<dyn Error + Send + Sync>;

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Debits a purchaser's account.
pub trait PaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), BoxError>;
}

/// Reserves seats for a purchaser.
pub trait ReservationService {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), BoxError>;
}

impl<T: PaymentService + ?Sized> PaymentService for &T {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), BoxError> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: PaymentService + ?Sized> PaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), BoxError> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: ReservationService + ?Sized> ReservationService for &T {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), BoxError> {
        (**self).reserve_seat(account_id, seat_count)
    }
}

impl<T: ReservationService + ?Sized> ReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), BoxError> {
        (**self).reserve_seat(account_id, seat_count)
    }
}

// =============================================================================
// External Call Error
// =============================================================================

/// A failed call to one of the collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExternalCallError {
    #[error("{message}")]
    Payment { message: String },

    #[error("{message}")]
    Reservation { message: String },
}

impl ExternalCallError {
    pub fn payment(source: BoxError) -> Self {
        ExternalCallError::Payment {
            message: source.to_string(),
        }
    }

    pub fn reservation(source: BoxError) -> Self {
        ExternalCallError::Reservation {
            message: source.to_string(),
        }
    }

    /// Which collaborator failed, for log fields.
    pub fn stage(&self) -> &'static str {
        match self {
            ExternalCallError::Payment { .. } => "payment",
            ExternalCallError::Reservation { .. } => "reservation",
        }
    }
}

/// Collapses both stages into the caller-facing error.
impl From<ExternalCallError> for PurchaseError {
    fn from(err: ExternalCallError) -> Self {
        match err {
            ExternalCallError::Payment { message } | ExternalCallError::Reservation { message } => {
                PurchaseError::ExternalFailure(message)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
