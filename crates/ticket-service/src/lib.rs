//! # ticket-service: Purchase Orchestration
//!
//! Turns a validated purchase into two external calls: charge the purchaser,
//! then reserve their seats.
//!
//! ## Module Organization
//! ```text
//! ticket_service/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── external.rs     ◄─── PaymentService / ReservationService contracts
//! └── service.rs      ◄─── TicketService::purchase_tickets
//! ```
//!
//! ## Usage
//! ```rust
//! use ticket_core::{Money, Purchaser, TicketRequest, TicketType};
//! use ticket_service::{BoxError, PaymentService, ReservationService, TicketService};
//!
//! struct Gateway;
//!
//! impl PaymentService for Gateway {
//!     fn make_payment(&self, _account_id: i64, _amount: Money) -> Result<(), BoxError> {
//!         Ok(())
//!     }
//! }
//!
//! impl ReservationService for Gateway {
//!     fn reserve_seat(&self, _account_id: i64, _seat_count: u64) -> Result<(), BoxError> {
//!         Ok(())
//!     }
//! }
//!
//! let service = TicketService::new(Gateway, Gateway);
//! let outcome = service
//!     .purchase_tickets(Some(&Purchaser::new(7)), &[TicketRequest::new(TicketType::Adult, 1)])
//!     .unwrap();
//! assert_eq!(outcome.total_cost, Money::from_units(20));
//! ```
//!
//! Logging is emitted through `tracing`; installing a subscriber is the
//! hosting application's job.

pub mod external;
pub mod service;

pub use external::{BoxError, ExternalCallError, PaymentService, ReservationService};
pub use service::TicketService;
