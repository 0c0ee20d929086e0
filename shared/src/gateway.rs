//! Wire format of the spreadsheet endpoint.
//!
//! Reads are a plain GET; writes are a POST carrying an action discriminator.
//! Both answer with the same `{ success, data?, error? }` envelope.

use serde::{Deserialize, Serialize};

use crate::record::SalesRecord;

pub const LOAD_FAILED_FALLBACK: &str = "Failed to load data";

/// Failures surfaced by the gateway. None of them is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a usable HTTP response.
    #[error("Network error: {0}")]
    Transport(String),
    /// The backend answered with `success: false`.
    #[error("{0}")]
    Remote(String),
    /// The backend answered, but not with the expected envelope.
    #[error("Unexpected response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteAction {
    Add,
    Update,
}

impl WriteAction {
    fn failure_fallback(&self) -> &'static str {
        match self {
            WriteAction::Add => "Failed to add record",
            WriteAction::Update => "Failed to update record",
        }
    }

    /// "added" / "updated"
    pub fn past_tense(&self) -> &'static str {
        match self {
            WriteAction::Add => "added",
            WriteAction::Update => "updated",
        }
    }

    /// "adding" / "updating"
    pub fn progressive(&self) -> &'static str {
        match self {
            WriteAction::Add => "adding",
            WriteAction::Update => "updating",
        }
    }
}

/// Body of a write request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteRequest {
    pub action: WriteAction,
    pub data: SalesRecord,
    /// Data row to overwrite; only sent for updates.
    #[serde(rename = "rowIndex", skip_serializing_if = "Option::is_none")]
    pub row_index: Option<usize>,
}

impl WriteRequest {
    pub fn add(record: SalesRecord) -> Self {
        Self {
            action: WriteAction::Add,
            data: record,
            row_index: None,
        }
    }

    pub fn update(record: SalesRecord, row_index: usize) -> Self {
        Self {
            action: WriteAction::Update,
            data: record,
            row_index: Some(row_index),
        }
    }
}

/// Response envelope shared by reads and writes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload, or turns `success: false` into
    /// [`GatewayError::Remote`] with the server's message or `fallback`.
    pub fn into_result(self, fallback: &str) -> Result<Option<T>, GatewayError> {
        if self.success {
            Ok(self.data)
        } else {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            Err(GatewayError::Remote(message))
        }
    }
}

/// Decodes the body of a read response into records.
pub fn decode_read(body: &str) -> Result<Vec<SalesRecord>, GatewayError> {
    let envelope: ApiEnvelope<Vec<SalesRecord>> =
        serde_json::from_str(body).map_err(|e| GatewayError::Malformed(e.to_string()))?;
    envelope
        .into_result(LOAD_FAILED_FALLBACK)?
        .ok_or_else(|| GatewayError::Malformed("response carries no data".to_string()))
}

/// Decodes the body of a write response.
pub fn decode_write(body: &str, action: WriteAction) -> Result<(), GatewayError> {
    let envelope: ApiEnvelope<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| GatewayError::Malformed(e.to_string()))?;
    envelope.into_result(action.failure_fallback()).map(|_| ())
}
