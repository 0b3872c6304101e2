//! # Error Types
//!
//! Domain-specific error types for ticket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ticket-core errors (this file)                                        │
//! │  ├── PurchaseError    - Why a purchase was refused                     │
//! │  └── ValidationError  - Malformed textual input ("ADULT:2")            │
//! │                                                                         │
//! │  ticket-service (separate crate)                                       │
//! │  └── ExternalCallError - Payment / reservation failure, folded into    │
//! │                          PurchaseError::ExternalFailure                │
//! │                                                                         │
//! │  box-office (app)                                                      │
//! │  └── ConfigError      - Bad environment configuration                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Caller Contract
//! Every refusal reaches the caller as a [`PurchaseError`]. The display text is
//! the human-readable message; for external failures it is the collaborator's
//! own message, forwarded verbatim.

use thiserror::Error;

// =============================================================================
// Purchase Error
// =============================================================================

/// Reasons a purchase is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// No purchaser was supplied, or the request list was empty.
    #[error("Invalid Purchase Request")]
    InvalidRequest,

    /// The purchase contains no adult ticket.
    ///
    /// Child and infant tickets must be accompanied by at least one adult,
    /// so this fires regardless of how many of those were requested.
    #[error("No Adult Tickets")]
    NoAdult,

    /// The payment or reservation service failed.
    ///
    /// Which of the two failed is not part of the contract; only the
    /// underlying message is carried.
    #[error("{0}")]
    ExternalFailure(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a ticket request arrives as text (configuration, CLI)
/// and cannot be turned into a [`crate::TicketRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., missing separator, non-numeric count).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with PurchaseError.
pub type PurchaseResult<T> = Result<T, PurchaseError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_error_messages() {
        assert_eq!(
            PurchaseError::InvalidRequest.to_string(),
            "Invalid Purchase Request"
        );
        assert_eq!(PurchaseError::NoAdult.to_string(), "No Adult Tickets");
    }

    #[test]
    fn test_external_failure_forwards_message() {
        let err = PurchaseError::ExternalFailure("card declined".to_string());
        assert_eq!(err.to_string(), "card declined");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "ticket request".to_string(),
        };
        assert_eq!(err.to_string(), "ticket request is required");

        let err = ValidationError::InvalidFormat {
            field: "count".to_string(),
            reason: "must be a non-negative integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "count has invalid format: must be a non-negative integer"
        );
    }
}
