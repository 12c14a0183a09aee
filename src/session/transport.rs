//! Session transport: the seam to the external voice platform

use crate::config::{AppConfig, SessionConfig};
use crate::{Result, VaaniError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};
use uuid::Uuid;

/// A started session
///
/// `payload` is whatever the backend answered with. Its shape is not
/// documented anywhere we control, so it is kept as raw JSON and never
/// interpreted.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionHandle {
    /// Id of the connect request that produced this session
    pub request_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub payload: Value,
}

impl SessionHandle {
    pub fn new(request_id: Uuid, payload: Value) -> Self {
        Self {
            request_id,
            started_at: Utc::now(),
            payload,
        }
    }
}

/// Starts and ends sessions on the external platform
#[async_trait]
pub trait SessionTransport: Send + Sync {
    /// Ask the platform for a new session
    async fn start_session(
        &self,
        request_id: Uuid,
        config: &SessionConfig,
    ) -> Result<SessionHandle>;

    /// Release a session
    ///
    /// The default does nothing: ending a session is purely local unless a
    /// transport has something to tear down.
    async fn end_session(&self, _session: &SessionHandle) -> Result<()> {
        Ok(())
    }

    /// Short name for logs
    fn name(&self) -> &str;
}

/// `POST {backend}/api/start-session` with the config as JSON
///
/// The status code is not checked: any response whose body parses as JSON
/// counts as started. No retries. No timeout unless one is configured.
#[derive(Clone, Debug)]
pub struct HttpSessionTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSessionTransport {
    /// Create a transport for the given session-start URL
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| VaaniError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.start_session_url(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SessionTransport for HttpSessionTransport {
    async fn start_session(
        &self,
        request_id: Uuid,
        config: &SessionConfig,
    ) -> Result<SessionHandle> {
        debug!("[SESSION] POST {} ({})", self.endpoint, request_id);

        let result = async {
            // `.json()` sets Content-Type: application/json
            let response = self.client.post(&self.endpoint).json(config).send().await?;
            let status = response.status();
            let payload: Value = response.json().await?;
            Ok::<_, VaaniError>((status, payload))
        }
        .await;

        match result {
            Ok((status, payload)) => {
                info!("[SESSION] Session started ({}): {}", status, payload);
                Ok(SessionHandle::new(request_id, payload))
            }
            Err(e) => {
                error!("[SESSION] Connection failed: {}", e);
                Err(e)
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}
