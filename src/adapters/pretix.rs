//! pretix REST API adapter
//!
//! Implements [`OrderBook`] for one organizer/event pair. Orders do not
//! carry a currency in pretix, so every lookup also reads the event and
//! attaches its currency to the order. Nothing is kept between lookups.

use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::AUTHORIZATION;
use reqwest::{StatusCode, Url};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::{Secret, TicketingConfig};
use crate::core::models::{Order, OrderStatus};
use crate::core::ports::{LookupError, MarkError, OrderBook};

use super::http::{SetupError, build_client, endpoint, parse_base_url};

/// Order book backed by the pretix API
#[derive(Debug)]
pub struct PretixClient {
    client: Client,
    base_url: Url,
    api_key: Secret,
    organizer: String,
    event: String,
}

impl PretixClient {
    /// Create a client from the ticketing settings
    pub fn new(config: &TicketingConfig, timeout: Option<Duration>) -> Result<Self, SetupError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: parse_base_url(&config.base_url)?,
            api_key: config.api_key.clone(),
            organizer: config.organizer_slug.clone(),
            event: config.event_slug.clone(),
        })
    }

    fn event_url(&self, tail: &[&str]) -> Url {
        let mut segments =
            vec!["api", "v1", "organizers", self.organizer.as_str(), "events", self.event.as_str()];
        segments.extend_from_slice(tail);
        endpoint(&self.base_url, &segments)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("Token {}", self.api_key.expose()))
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url, code: &str) -> Result<T, LookupError> {
        debug!("GET {url}");
        let response = self
            .authorized(self.client.get(url))
            .send()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {},
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound(code.to_string())),
            status => {
                return Err(LookupError::Status {
                    status: status.as_u16(),
                });
            },
        }

        let body = response.text().map_err(|e| LookupError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))
    }

    fn currency(&self) -> Result<String, LookupError> {
        // a missing event is a configuration problem, not a missing order
        let event: EventRecord =
            self.get_json(self.event_url(&[]), &self.event).map_err(|e| match e {
                LookupError::NotFound(_) => LookupError::Status { status: 404 },
                other => other,
            })?;
        debug!("Event {} is sold in {}", self.event, event.currency);
        Ok(event.currency)
    }
}

impl OrderBook for PretixClient {
    fn order(&self, code: &str) -> Result<Order, LookupError> {
        let record: OrderRecord = self.get_json(self.event_url(&["orders", code]), code)?;
        let currency = self.currency()?;

        Ok(Order {
            status: OrderStatus::from_pretix(&record.status, record.require_approval),
            code: record.code,
            total: record.total,
            currency: Some(currency),
        })
    }

    fn mark_paid(&self, code: &str) -> Result<(), MarkError> {
        let url = self.event_url(&["orders", code, "mark_paid"]);
        debug!("POST {url}");

        let response = self
            .authorized(self.client.post(url))
            .send()
            .map_err(|e| MarkError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(MarkError::Status {
                status: status.as_u16(),
            })
        }
    }
}

#[derive(Deserialize)]
struct OrderRecord {
    code: String,
    status: String,
    total: Decimal,
    #[serde(default)]
    require_approval: bool,
}

#[derive(Deserialize)]
struct EventRecord {
    currency: String,
}
