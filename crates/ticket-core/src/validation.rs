//! # Validation Module
//!
//! Purchase rules and the totals they produce.
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  evaluate_purchase(purchaser, requests)                                 │
//! │       │                                                                 │
//! │       ├── purchaser absent or requests empty?                          │
//! │       │       → PurchaseError::InvalidRequest                          │
//! │       │                                                                 │
//! │       ├── no adult tickets?                                            │
//! │       │       → PurchaseError::NoAdult                                 │
//! │       │                                                                 │
//! │       └── OK → PurchaseOutcome { seats, cost, ... }                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here talks to the payment or reservation services; the caller
//! only does so when this returns `Ok`.

use serde::{Deserialize, Serialize};

use crate::error::{PurchaseError, PurchaseResult};
use crate::money::Money;
use crate::types::{AccountId, Purchaser, TicketRequest, TicketType};

// =============================================================================
// Purchase Outcome
// =============================================================================

/// Totals of a valid purchase. Derived per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    pub account_id: AccountId,
    pub total_adult: u64,
    pub total_child: u64,
    pub total_infant: u64,
    /// Adults plus children; infants never occupy a seat.
    pub total_seats: u64,
    pub total_cost: Money,
}

impl PurchaseOutcome {
    /// Builds the outcome from per-type totals.
    ///
    /// A purchase too large to price or seat without overflowing is refused
    /// as an invalid request rather than wrapped into a wrong amount.
    fn from_totals(
        account_id: AccountId,
        adult: u64,
        child: u64,
        infant: u64,
    ) -> PurchaseResult<Self> {
        let totals = [
            (TicketType::Adult, adult),
            (TicketType::Child, child),
            (TicketType::Infant, infant),
        ];

        let seats = totals
            .iter()
            .filter(|(ticket_type, _)| ticket_type.occupies_seat())
            .try_fold(0u64, |seats, (_, count)| seats.checked_add(*count))
            .ok_or(PurchaseError::InvalidRequest)?;

        let cost = totals
            .iter()
            .try_fold(Money::zero(), |cost, (ticket_type, count)| {
                ticket_type
                    .unit_price()
                    .checked_multiply_quantity(*count)
                    .and_then(|line| cost.checked_add(line))
            })
            .ok_or(PurchaseError::InvalidRequest)?;

        Ok(PurchaseOutcome {
            account_id,
            total_adult: adult,
            total_child: child,
            total_infant: infant,
            total_seats: seats,
            total_cost: cost,
        })
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Sums the counts of every request of `ticket_type`.
pub fn tally(requests: &[TicketRequest], ticket_type: TicketType) -> u64 {
    requests
        .iter()
        .filter(|request| request.ticket_type == ticket_type)
        .map(|request| u64::from(request.count))
        .sum()
}

/// Validates a purchase and computes its totals.
///
/// ## Example
/// ```rust
/// use ticket_core::{evaluate_purchase, PurchaseError, Purchaser, TicketRequest, TicketType};
///
/// let children_only = [TicketRequest::new(TicketType::Child, 2)];
/// let err = evaluate_purchase(Some(&Purchaser::new(1)), &children_only).unwrap_err();
/// assert_eq!(err, PurchaseError::NoAdult);
/// ```
pub fn evaluate_purchase(
    purchaser: Option<&Purchaser>,
    requests: &[TicketRequest],
) -> PurchaseResult<PurchaseOutcome> {
    let purchaser = match purchaser {
        Some(purchaser) if !requests.is_empty() => purchaser,
        _ => return Err(PurchaseError::InvalidRequest),
    };

    let adult = tally(requests, TicketType::Adult);
    if adult == 0 {
        return Err(PurchaseError::NoAdult);
    }

    let child = tally(requests, TicketType::Child);
    let infant = tally(requests, TicketType::Infant);

    PurchaseOutcome::from_totals(purchaser.account_id(), adult, child, infant)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn purchaser() -> Purchaser {
        Purchaser::new(1)
    }

    #[test]
    fn test_mixed_family_purchase() {
        let requests = [
            TicketRequest::new(TicketType::Adult, 2),
            TicketRequest::new(TicketType::Child, 1),
            TicketRequest::new(TicketType::Infant, 1),
        ];
        let outcome = evaluate_purchase(Some(&purchaser()), &requests).unwrap();

        assert_eq!(outcome.account_id, 1);
        assert_eq!(outcome.total_adult, 2);
        assert_eq!(outcome.total_child, 1);
        assert_eq!(outcome.total_infant, 1);
        assert_eq!(outcome.total_seats, 3);
        assert_eq!(outcome.total_cost, Money::from_units(50));
    }

    #[test]
    fn test_repeated_types_are_summed() {
        let requests = [
            TicketRequest::new(TicketType::Adult, 2),
            TicketRequest::new(TicketType::Adult, 1),
            TicketRequest::new(TicketType::Adult, 3),
        ];
        let outcome = evaluate_purchase(Some(&purchaser()), &requests).unwrap();

        assert_eq!(outcome.total_adult, 6);
        assert_eq!(outcome.total_seats, 6);
        assert_eq!(outcome.total_cost, Money::from_units(120));
    }

    #[test]
    fn test_zero_counts_contribute_nothing() {
        let requests = [
            TicketRequest::new(TicketType::Adult, 1),
            TicketRequest::new(TicketType::Child, 0),
        ];
        let outcome = evaluate_purchase(Some(&purchaser()), &requests).unwrap();
        assert_eq!(outcome.total_seats, 1);
        assert_eq!(outcome.total_cost, Money::from_units(20));
    }

    #[test]
    fn test_missing_purchaser_or_requests() {
        let adults = [TicketRequest::new(TicketType::Adult, 2)];

        assert_eq!(
            evaluate_purchase(None, &adults),
            Err(PurchaseError::InvalidRequest)
        );
        assert_eq!(
            evaluate_purchase(Some(&purchaser()), &[]),
            Err(PurchaseError::InvalidRequest)
        );
        assert_eq!(evaluate_purchase(None, &[]), Err(PurchaseError::InvalidRequest));
    }

    #[test]
    fn test_no_adult_is_rejected() {
        let cases: [&[TicketRequest]; 3] = [
            &[TicketRequest::new(TicketType::Child, 2)],
            &[TicketRequest::new(TicketType::Infant, 1)],
            &[TicketRequest::new(TicketType::Adult, 0), TicketRequest::new(TicketType::Child, 1)],
        ];
        for requests in cases {
            assert_eq!(
                evaluate_purchase(Some(&purchaser()), requests),
                Err(PurchaseError::NoAdult)
            );
        }
    }

    #[test]
    fn test_unpriceable_totals_are_refused() {
        // Adult cost overflows i64 even though the count fits in u64.
        assert_eq!(
            PurchaseOutcome::from_totals(1, i64::MAX as u64 / 20 + 1, 0, 0),
            Err(PurchaseError::InvalidRequest)
        );
        // Count above i64::MAX must not wrap to a negative amount.
        assert_eq!(
            PurchaseOutcome::from_totals(1, 1, u64::MAX, 0),
            Err(PurchaseError::InvalidRequest)
        );
        // Seat count overflows u64.
        assert_eq!(
            PurchaseOutcome::from_totals(1, u64::MAX, 1, 0),
            Err(PurchaseError::InvalidRequest)
        );
        // Infants are free, so a huge infant count still prices.
        let outcome = PurchaseOutcome::from_totals(1, 1, 0, u64::MAX).unwrap();
        assert_eq!(outcome.total_cost, Money::from_units(20));
        assert_eq!(outcome.total_seats, 1);
    }

    fn ticket_request() -> impl Strategy<Value = TicketRequest> {
        (
            prop_oneof![
                Just(TicketType::Adult),
                Just(TicketType::Child),
                Just(TicketType::Infant)
            ],
            0u32..50,
        )
            .prop_map(|(ticket_type, count)| TicketRequest::new(ticket_type, count))
    }

    proptest! {
        #[test]
        fn prop_totals_follow_unit_prices(
            requests in prop::collection::vec(ticket_request(), 1..20),
        ) {
            let adult = tally(&requests, TicketType::Adult);
            let child = tally(&requests, TicketType::Child);

            match evaluate_purchase(Some(&purchaser()), &requests) {
                Ok(outcome) => {
                    prop_assert!(adult >= 1);
                    prop_assert_eq!(outcome.total_seats, adult + child);
                    prop_assert_eq!(
                        outcome.total_cost.units(),
                        (20 * adult + 10 * child) as i64
                    );
                }
                Err(err) => {
                    prop_assert_eq!(adult, 0);
                    prop_assert_eq!(err, PurchaseError::NoAdult);
                }
            }
        }
    }
}
