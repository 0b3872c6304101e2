//! Box office configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! Ticket prices are fixed and deliberately absent from here.

use serde::{Deserialize, Serialize};
use std::env;

use ticket_core::{AccountId, Purchaser, TicketRequest, TicketType};

/// Box office configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxOfficeConfig {
    /// Purchaser account; `None` submits the purchase without a purchaser
    pub account_id: Option<AccountId>,

    /// Ticket requests, in submission order
    pub tickets: Vec<TicketRequest>,

    /// Makes the console payment gateway fail with this message
    pub fail_payment: Option<String>,

    /// Makes the console reservation gateway fail with this message
    pub fail_reservation: Option<String>,
}

impl Default for BoxOfficeConfig {
    fn default() -> Self {
        BoxOfficeConfig {
            account_id: None,
            tickets: vec![TicketRequest::new(TicketType::Adult, 1)],
            fail_payment: None,
            fail_reservation: None,
        }
    }
}

impl BoxOfficeConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `BOX_OFFICE_ACCOUNT_ID`: purchaser account id
    /// - `BOX_OFFICE_TICKETS`: e.g. `ADULT:2,CHILD:1,INFANT:1`
    /// - `BOX_OFFICE_FAIL_PAYMENT`: simulated payment failure message
    /// - `BOX_OFFICE_FAIL_RESERVATION`: simulated reservation failure message
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = BoxOfficeConfig::default();

        if let Some(raw) = lookup("BOX_OFFICE_ACCOUNT_ID") {
            let account_id = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BOX_OFFICE_ACCOUNT_ID".to_string()))?;
            config.account_id = Some(account_id);
        }

        if let Some(raw) = lookup("BOX_OFFICE_TICKETS") {
            config.tickets = parse_tickets(&raw)?;
        }

        // An empty message means "succeed", same as unset.
        config.fail_payment = lookup("BOX_OFFICE_FAIL_PAYMENT").filter(|m| !m.trim().is_empty());
        config.fail_reservation =
            lookup("BOX_OFFICE_FAIL_RESERVATION").filter(|m| !m.trim().is_empty());

        Ok(config)
    }

    pub fn purchaser(&self) -> Option<Purchaser> {
        self.account_id.map(Purchaser::new)
    }
}

/// An empty list is allowed and is rejected later as an invalid purchase.
fn parse_tickets(raw: &str) -> Result<Vec<TicketRequest>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse::<TicketRequest>().map_err(|source| ConfigError::InvalidTicket {
                entry: entry.to_string(),
                source,
            })
        })
        .collect()
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid ticket request '{entry}': {source}")]
    InvalidTicket {
        entry: String,
        #[source]
        source: ticket_core::ValidationError,
    },
}
