use gloo::net::http::{Request, Response};
use shared::gateway::{decode_read, decode_write};
use shared::{DashboardConfig, GatewayError, SalesRecord, WriteRequest};

/// Client for the spreadsheet endpoint. Reads and writes go to the same URL.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every record
    pub async fn fetch_all(&self) -> Result<Vec<SalesRecord>, GatewayError> {
        let response = Request::get(&self.base_url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let (ok, status, body) = read_body(response).await?;
        decode_read(&body).map_err(|e| with_status(e, ok, status))
    }

    /// Add or update a record
    pub async fn submit(&self, request: &WriteRequest) -> Result<(), GatewayError> {
        let response = Request::post(&self.base_url)
            .json(request)
            .map_err(|e| GatewayError::Malformed(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let (ok, status, body) = read_body(response).await?;
        decode_write(&body, request.action).map_err(|e| with_status(e, ok, status))
    }
}

async fn read_body(response: Response) -> Result<(bool, u16, String), GatewayError> {
    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;
    Ok((ok, status, body))
}

/// An error page instead of an envelope is a transport problem, not a
/// malformed answer from the backend.
fn with_status(err: GatewayError, ok: bool, status: u16) -> GatewayError {
    match err {
        GatewayError::Malformed(_) if !ok => {
            GatewayError::Transport(format!("server returned HTTP {}", status))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_pages_become_transport_errors() {
        let err = with_status(GatewayError::Malformed("expected value".to_string()), false, 502);
        assert_eq!(err, GatewayError::Transport("server returned HTTP 502".to_string()));
    }

    #[test]
    fn test_remote_errors_keep_their_message() {
        let err = with_status(GatewayError::Remote("bad token".to_string()), false, 500);
        assert_eq!(err, GatewayError::Remote("bad token".to_string()));
        let err = with_status(GatewayError::Malformed("eof".to_string()), true, 200);
        assert!(matches!(err, GatewayError::Malformed(_)));
    }

    #[test]
    fn test_update_body_carries_row_hint() {
        let request = WriteRequest::update(SalesRecord::default(), 7);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["action"], "update");
        assert_eq!(body["rowIndex"], 7);
    }

    #[test]
    fn test_client_uses_configured_url() {
        let config = DashboardConfig {
            api_url: "http://localhost:8080/exec".to_string(),
            ..Default::default()
        };
        assert_eq!(ApiClient::from_config(&config).base_url(), "http://localhost:8080/exec");
    }
}
