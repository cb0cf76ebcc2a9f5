//! HTTP dispatch: one request out, the raw response back.

use crate::HarnessError;
use crate::config::HarnessConfig;
use crate::request::{Payload, RequestSpec};
use crate::response::ApiResponse;
use async_trait::async_trait;
use log::{Level, log, trace};
use std::time::Instant;

/// Level of the one-line exchange summary. Payloads and bodies go to `trace`.
pub const EXCHANGE_LOG_LEVEL: Level = Level::Info;

/// Sends a single request and returns whatever the server answered.
///
/// Non-2xx statuses are responses, not errors. Only network-layer failures
/// produce `HarnessError::Transport`. Implementations never retry.
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, spec: &RequestSpec) -> Result<ApiResponse, HarnessError>;
}

pub struct HttpDispatcher {
    client: reqwest::Client,
    config: HarnessConfig,
}

impl HttpDispatcher {
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        let config = config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| HarnessError::InvalidConfig {
            context: "HTTP client".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }
}

#[async_trait]
impl Dispatch for HttpDispatcher {
    async fn dispatch(&self, spec: &RequestSpec) -> Result<ApiResponse, HarnessError> {
        let context = spec.describe();
        let url = self.config.endpoint(&spec.resolve_path()?);

        let mut request = self.client.request(spec.method().clone(), &url);
        if !spec.query_params().is_empty() {
            request = request.query(spec.query_params());
        }
        request = match spec.payload() {
            Payload::Empty => request,
            Payload::Json(body) => request.json(body),
            Payload::Form(fields) => request.form(fields),
        };

        let started = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|e| HarnessError::from_transport_error(e, &context))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| HarnessError::from_transport_error(e, &context))?;

        if self.config.log_exchanges {
            log!(
                EXCHANGE_LOG_LEVEL,
                "{} {} -> {} ({} ms)",
                spec.method(),
                url,
                status,
                started.elapsed().as_millis()
            );
            trace!("{context} payload: {:?}", spec.payload());
            trace!("{context} response body: {body}");
        }

        Ok(ApiResponse::new(status, headers, body))
    }
}
