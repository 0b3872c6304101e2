//! # Box Office
//!
//! Runs one ticket purchase described by the environment and prints its
//! totals as JSON.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging), once per process
//! 2. Load configuration from `BOX_OFFICE_*` variables
//! 3. Wire TicketService to the console gateways
//! 4. Purchase, print the outcome, exit non-zero if refused
//!
//! ```text
//! BOX_OFFICE_ACCOUNT_ID=1 BOX_OFFICE_TICKETS=ADULT:2,CHILD:1,INFANT:1 box-office
//! {"account_id":1,"total_adult":2,"total_child":1,"total_infant":1,"total_seats":3,"total_cost":50}
//! ```

mod config;
mod gateway;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ticket_service::TicketService;

use crate::config::BoxOfficeConfig;
use crate::gateway::{ConsolePayments, ConsoleReservations};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = BoxOfficeConfig::load().context("Failed to load configuration")?;
    info!(
        account_id = ?config.account_id,
        requests = config.tickets.len(),
        "Configuration loaded"
    );

    let service = TicketService::new(
        ConsolePayments::new(config.fail_payment.clone()),
        ConsoleReservations::new(config.fail_reservation.clone()),
    );

    let purchaser = config.purchaser();
    let outcome = service
        .purchase_tickets(purchaser.as_ref(), &config.tickets)
        .context("Purchase refused")?;

    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, with debug for the ticket crates
///
/// Logs go to stderr so stdout carries only the JSON outcome.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ticket_service=debug,box_office=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
