//! # Ticket Service
//!
//! The purchase validator/orchestrator.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  purchase_tickets(purchaser, requests)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  evaluate_purchase ──Err──► InvalidRequest / NoAdult (no calls made)   │
//! │       │ Ok(outcome)                                                     │
//! │       ▼                                                                 │
//! │  make_payment(account, total_cost) ──Err──► ExternalFailure(msg)       │
//! │       │                                     (reservation skipped)       │
//! │       ▼                                                                 │
//! │  reserve_seat(account, total_seats) ──Err──► ExternalFailure(msg)      │
//! │       │                                     (payment NOT rolled back)   │
//! │       ▼                                                                 │
//! │  Ok(outcome)                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, error, info, warn};

use ticket_core::{
    evaluate_purchase, AccountId, PurchaseError, PurchaseOutcome, PurchaseResult, Purchaser,
    TicketRequest,
};

use crate::external::{ExternalCallError, PaymentService, ReservationService};

/// Validates ticket purchases and fulfils them through the payment and
/// reservation services.
///
/// Holds no state beyond its collaborators; every call is independent.
#[derive(Debug, Clone)]
pub struct TicketService<P, R> {
    payment: P,
    reservation: R,
}

impl<P, R> TicketService<P, R>
where
    P: PaymentService,
    R: ReservationService,
{
    pub fn new(payment: P, reservation: R) -> Self {
        TicketService {
            payment,
            reservation,
        }
    }

    /// Purchases tickets on behalf of `purchaser`.
    ///
    /// On success the purchaser has been charged exactly once and their seats
    /// reserved exactly once, and the computed totals are returned.
    ///
    /// ## Errors
    /// - [`PurchaseError::InvalidRequest`] if `purchaser` is `None` or
    ///   `requests` is empty
    /// - [`PurchaseError::NoAdult`] if no adult ticket is requested
    /// - [`PurchaseError::ExternalFailure`] if either service fails
    ///
    /// Neither service is called when validation fails.
    pub fn purchase_tickets(
        &self,
        purchaser: Option<&Purchaser>,
        requests: &[TicketRequest],
    ) -> PurchaseResult<PurchaseOutcome> {
        let outcome = match evaluate_purchase(purchaser, requests) {
            Ok(outcome) => outcome,
            Err(err) => {
                log_rejection(purchaser, &err);
                return Err(err);
            }
        };

        debug!(
            account_id = outcome.account_id,
            adult = outcome.total_adult,
            child = outcome.total_child,
            infant = outcome.total_infant,
            amount = %outcome.total_cost,
            seats = outcome.total_seats,
            "Purchase validated"
        );

        if let Err(err) = self.pay_and_reserve(&outcome) {
            error!(
                account_id = outcome.account_id,
                seats = outcome.total_seats,
                stage = err.stage(),
                %err,
                "Unable to make payment and reserve seats"
            );
            return Err(err.into());
        }

        info!(
            account_id = outcome.account_id,
            amount = %outcome.total_cost,
            seats = outcome.total_seats,
            "Tickets purchased"
        );
        Ok(outcome)
    }

    /// Charges first, then reserves. The reservation is only attempted once
    /// the payment has gone through.
    fn pay_and_reserve(&self, outcome: &PurchaseOutcome) -> Result<(), ExternalCallError> {
        let account_id: AccountId = outcome.account_id;

        self.payment
            .make_payment(account_id, outcome.total_cost)
            .map_err(|source| {
                error!(
                    account_id,
                    amount = %outcome.total_cost,
                    "Failed making payment"
                );
                ExternalCallError::payment(source)
            })?;

        // TODO: refund through the payment service once it exposes one; until
        // then a failed reservation leaves the purchaser charged.
        self.reservation
            .reserve_seat(account_id, outcome.total_seats)
            .map_err(|source| {
                error!(
                    account_id,
                    amount = %outcome.total_cost,
                    seats = outcome.total_seats,
                    "Failed reserving seats, payment taken without seats reserved"
                );
                ExternalCallError::reservation(source)
            })
    }
}

fn log_rejection(purchaser: Option<&Purchaser>, err: &PurchaseError) {
    match (purchaser, err) {
        (Some(purchaser), PurchaseError::NoAdult) => {
            warn!(account_id = purchaser.account_id(), "Purchase has no adult tickets");
        }
        (Some(purchaser), _) => {
            warn!(account_id = purchaser.account_id(), %err, "Invalid purchase request");
        }
        (None, _) => warn!(%err, "Purchase rejected without a purchaser"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use ticket_core::{Money, TicketType};

    use super::*;
    use crate::external::BoxError;

    #[derive(Default)]
    struct Ledger {
        calls: RefCell<Vec<String>>,
    }

    impl PaymentService for Ledger {
        fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), BoxError> {
            self.calls.borrow_mut().push(format!("pay {account_id} {amount}"));
            Ok(())
        }
    }

    impl ReservationService for Ledger {
        fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), BoxError> {
            self.calls.borrow_mut().push(format!("reserve {account_id} {seat_count}"));
            Ok(())
        }
    }

    #[test]
    fn test_payment_happens_before_reservation() {
        let ledger = Ledger::default();
        let service = TicketService::new(&ledger, &ledger);

        service
            .purchase_tickets(
                Some(&Purchaser::new(1)),
                &[
                    TicketRequest::new(TicketType::Adult, 2),
                    TicketRequest::new(TicketType::Child, 1),
                    TicketRequest::new(TicketType::Infant, 1),
                ],
            )
            .unwrap();

        assert_eq!(*ledger.calls.borrow(), vec!["pay 1 50", "reserve 1 3"]);
    }

    #[test]
    fn test_rejected_purchase_makes_no_calls() {
        let ledger = Ledger::default();
        let service = TicketService::new(&ledger, &ledger);

        let err = service
            .purchase_tickets(None, &[TicketRequest::new(TicketType::Adult, 2)])
            .unwrap_err();

        assert_eq!(err, PurchaseError::InvalidRequest);
        assert!(ledger.calls.borrow().is_empty());
    }
}
