//! Console stand-ins for the external payment and reservation services.
//!
//! They log the call they would have made and succeed, unless configured to
//! fail with a given message.

use tracing::info;

use ticket_core::{AccountId, Money};
use ticket_service::{BoxError, PaymentService, ReservationService};

#[derive(Debug, Clone, Default)]
pub struct ConsolePayments {
    fail_with: Option<String>,
}

impl ConsolePayments {
    pub fn new(fail_with: Option<String>) -> Self {
        ConsolePayments { fail_with }
    }
}

impl PaymentService for ConsolePayments {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), BoxError> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone().into());
        }
        info!(account_id, %amount, "Payment captured");
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsoleReservations {
    fail_with: Option<String>,
}

impl ConsoleReservations {
    pub fn new(fail_with: Option<String>) -> Self {
        ConsoleReservations { fail_with }
    }
}

impl ReservationService for ConsoleReservations {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), BoxError> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone().into());
        }
        info!(account_id, seat_count, "Seats reserved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_failure() {
        let payments = ConsolePayments::new(Some("card declined".to_string()));
        let err = payments.make_payment(1, Money::from_units(20)).unwrap_err();
        assert_eq!(err.to_string(), "card declined");

        let reservations = ConsoleReservations::default();
        assert!(reservations.reserve_seat(1, 2).is_ok());
    }
}
