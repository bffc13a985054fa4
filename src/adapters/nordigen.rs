//! GoCardless Bank Account Data (formerly Nordigen) adapter
//!
//! Implements [`TransactionSource`] against the v2 REST API:
//!
//! - `POST /api/v2/token/new/` exchanges client credentials for an access
//!   token (skipped when a static token is configured)
//! - `GET /api/v2/accounts/{id}/transactions/` lists transactions, split
//!   into `booked` and `pending`; only `booked` is returned

use std::time::Duration;

use chrono::NaiveDate;
use log::debug;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{BankAuth, BankConfig};
use crate::core::models::{BookingWindow, Transaction};
use crate::core::ports::{FetchError, TransactionSource};

use super::http::{SetupError, build_client, endpoint, parse_base_url};

/// Bank data client
#[derive(Debug, Clone)]
pub struct NordigenClient {
    client: Client,
    base_url: Url,
    auth: BankAuth,
}

impl NordigenClient {
    /// Create a client from the bank settings
    pub fn new(config: &BankConfig, timeout: Option<Duration>) -> Result<Self, SetupError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: parse_base_url(&config.base_url)?,
            auth: config.auth.clone(),
        })
    }

    fn access_token(&self) -> Result<String, FetchError> {
        let (secret_id, secret_key) = match &self.auth {
            BankAuth::Token(token) => return Ok(token.expose().to_string()),
            BankAuth::Credentials {
                secret_id,
                secret_key,
            } => (secret_id, secret_key),
        };

        let url = endpoint(&self.base_url, &["api", "v2", "token", "new"]);
        debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .json(&TokenRequest {
                secret_id,
                secret_key: secret_key.expose(),
            })
            .send()
            .map_err(|e| FetchError::Auth(e.to_string()))?;

        let status = response.status();
        let body = response.text().map_err(|e| FetchError::Auth(e.to_string()))?;
        if !status.is_success() {
            return Err(FetchError::Auth(format!("status {}: {body}", status.as_u16())));
        }

        serde_json::from_str::<TokenResponse>(&body)
            .map(|t| t.access)
            .map_err(|e| FetchError::Auth(format!("unexpected token response: {e}")))
    }
}

impl TransactionSource for NordigenClient {
    fn booked_transactions(
        &self,
        account_id: &str,
        window: &BookingWindow,
    ) -> Result<Vec<Transaction>, FetchError> {
        let token = self.access_token()?;

        let mut url = endpoint(&self.base_url, &["api", "v2", "accounts", account_id, "transactions"]);
        url.query_pairs_mut()
            .append_pair("date_from", &window.from_param())
            .append_pair("date_to", &window.to_param());
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let body = success_body(response)?;
        let listing: TransactionsResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        debug!(
            "Received {} booked and {} pending transactions",
            listing.transactions.booked.len(),
            listing.transactions.pending.len()
        );

        listing.transactions.booked.into_iter().map(TransactionRecord::into_transaction).collect()
    }
}

fn success_body(response: Response) -> Result<String, FetchError> {
    let status = response.status();
    let body = response.text().map_err(|e| FetchError::Transport(e.to_string()))?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(FetchError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    secret_id: &'a str,
    secret_key: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access: String,
}

#[derive(Deserialize)]
struct TransactionsResponse {
    transactions: TransactionLists,
}

#[derive(Deserialize)]
struct TransactionLists {
    #[serde(default)]
    booked: Vec<TransactionRecord>,
    #[serde(default)]
    pending: Vec<serde_json::Value>,
}

/// One transaction as reported by the provider
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionRecord {
    transaction_id: Option<String>,
    internal_transaction_id: Option<String>,
    booking_date: Option<NaiveDate>,
    value_date: Option<NaiveDate>,
    transaction_amount: AmountRecord,
    debtor_account: Option<AccountRecord>,
    debtor_name: Option<String>,
    remittance_information_unstructured: Option<String>,
    #[serde(default)]
    remittance_information_unstructured_array: Vec<String>,
    bank_transaction_code: Option<String>,
}

#[derive(Deserialize)]
struct AmountRecord {
    amount: Decimal,
    currency: String,
}

#[derive(Deserialize)]
struct AccountRecord {
    iban: Option<String>,
}

impl TransactionRecord {
    fn into_transaction(self) -> Result<Transaction, FetchError> {
        let id = self.transaction_id.or(self.internal_transaction_id).unwrap_or_default();

        let booking_date = self.booking_date.or(self.value_date).ok_or_else(|| {
            FetchError::Decode(format!("transaction {id:?} has no booking date"))
        })?;

        // some banks split the reference over several lines
        let remittance = self
            .remittance_information_unstructured
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| self.remittance_information_unstructured_array.join(" "));

        Ok(Transaction {
            id,
            booking_date,
            amount: self.transaction_amount.amount,
            currency: self.transaction_amount.currency,
            debtor_iban: self.debtor_account.and_then(|a| a.iban).unwrap_or_default(),
            debtor_name: self.debtor_name,
            remittance,
            bank_transaction_code: self.bank_transaction_code.unwrap_or_default(),
        })
    }
}
