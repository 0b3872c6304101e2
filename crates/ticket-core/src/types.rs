//! # Domain Types
//!
//! Core domain types used throughout Box Office.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Purchaser     │   │ TicketRequest   │   │   TicketType    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  account_id     │   │  ticket_type ───┼──►│  Adult   (20)   │       │
//! │  │                 │   │  count (u32)    │   │  Child   (10)   │       │
//! │  └─────────────────┘   └─────────────────┘   │  Infant  (0)    │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Counts are unsigned: a negative ticket count cannot be constructed, and
//! textual input carrying one is rejected while parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{ADULT_TICKET_PRICE, CHILD_TICKET_PRICE, INFANT_TICKET_PRICE};

// =============================================================================
// Purchaser
// =============================================================================

/// Account identifier of a purchaser.
pub type AccountId = i64;

/// The identity on whose behalf tickets are bought and paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Purchaser {
    account_id: AccountId,
}

impl Purchaser {
    #[inline]
    pub const fn new(account_id: AccountId) -> Self {
        Purchaser { account_id }
    }

    #[inline]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }
}

// =============================================================================
// Ticket Type
// =============================================================================

/// The kind of ticket being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    /// Under-twos; no seat and no charge.
    Infant,
}

impl TicketType {
    /// Every ticket type, in display order.
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Fixed price of one ticket of this type.
    pub const fn unit_price(&self) -> Money {
        match self {
            TicketType::Adult => ADULT_TICKET_PRICE,
            TicketType::Child => CHILD_TICKET_PRICE,
            TicketType::Infant => INFANT_TICKET_PRICE,
        }
    }

    /// Whether a ticket of this type is allocated a seat.
    pub const fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `adult`, `Adult` and `ADULT` all parse.
impl FromStr for TicketType {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        let s = s.trim();
        TicketType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "ticket type".to_string(),
                allowed: TicketType::ALL.iter().map(|t| t.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Ticket Request
// =============================================================================

/// A request for `count` tickets of one type.
///
/// A purchase is an ordered list of these; the same type may appear more
/// than once and its counts are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    pub ticket_type: TicketType,
    /// Zero is legal and contributes nothing.
    pub count: u32,
}

impl TicketRequest {
    #[inline]
    pub const fn new(ticket_type: TicketType, count: u32) -> Self {
        TicketRequest { ticket_type, count }
    }
}

/// Parses `TYPE:COUNT`, e.g. `ADULT:2` or `infant:1`.
impl FromStr for TicketRequest {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "ticket request".to_string(),
            });
        }

        let (kind, count) = s.split_once(':').ok_or_else(|| ValidationError::InvalidFormat {
            field: "ticket request".to_string(),
            reason: format!("expected TYPE:COUNT, got '{s}'"),
        })?;

        let ticket_type = kind.parse()?;
        let count = count
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidFormat {
                field: "count".to_string(),
                reason: "must be a non-negative integer".to_string(),
            })?;

        Ok(TicketRequest::new(ticket_type, count))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_prices() {
        assert_eq!(TicketType::Adult.unit_price().units(), 20);
        assert_eq!(TicketType::Child.unit_price().units(), 10);
        assert_eq!(TicketType::Infant.unit_price(), Money::zero());
    }

    #[test]
    fn test_infants_do_not_occupy_seats() {
        assert!(TicketType::Adult.occupies_seat());
        assert!(TicketType::Child.occupies_seat());
        assert!(!TicketType::Infant.occupies_seat());
    }

    #[test]
    fn test_ticket_type_from_str() {
        assert_eq!("ADULT".parse::<TicketType>().unwrap(), TicketType::Adult);
        assert_eq!(" child ".parse::<TicketType>().unwrap(), TicketType::Child);
        assert_eq!("Infant".parse::<TicketType>().unwrap(), TicketType::Infant);

        let err = "SENIOR".parse::<TicketType>().unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
    }

    #[test]
    fn test_ticket_request_from_str() {
        let request: TicketRequest = "ADULT:2".parse().unwrap();
        assert_eq!(request, TicketRequest::new(TicketType::Adult, 2));

        let request: TicketRequest = "infant: 0".parse().unwrap();
        assert_eq!(request, TicketRequest::new(TicketType::Infant, 0));
    }

    #[test]
    fn test_ticket_request_rejects_bad_input() {
        assert!(matches!(
            "".parse::<TicketRequest>(),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            "ADULT".parse::<TicketRequest>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "ADULT:-1".parse::<TicketRequest>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "ADULT:two".parse::<TicketRequest>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_ticket_type_serde() {
        let json = serde_json::to_string(&TicketType::Infant).unwrap();
        assert_eq!(json, "\"INFANT\"");

        let request: TicketRequest =
            serde_json::from_str(r#"{"ticket_type":"CHILD","count":3}"#).unwrap();
        assert_eq!(request, TicketRequest::new(TicketType::Child, 3));
    }
}
