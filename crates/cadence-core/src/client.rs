//! HTTP client for the external scheduling service.
//!
//! One request per submission: the collected data is POSTed as JSON, the full
//! body is read, and the reply is decoded into a [`ScheduleResponse`]. There
//! are no retries. Transport errors and non-2xx statuses are both failures;
//! a 2xx body that matches neither known shape is not.

use std::time::Duration;

use url::Url;

use crate::{
    config::Config,
    error::{NetworkResultExt, Result, SchedulerError},
    models::{ScheduleRequest, ScheduleResponse},
};

/// Client for `POST /api/schedule`.
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ScheduleClient {
    /// Create a client for `endpoint` with no request timeout.
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::Network` if the HTTP client cannot be
    /// initialized.
    pub fn new(endpoint: Url) -> Result<Self> {
        Self::with_timeout(endpoint, None)
    }

    /// Create a client for `endpoint`, optionally bounding each request.
    pub fn with_timeout(endpoint: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("cadence/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .network_context("Failed to initialize HTTP client")?;
        Ok(Self { http, endpoint })
    }

    /// Create a client from resolved configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(config.endpoint.clone(), config.timeout)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send `request` and decode the reply.
    ///
    /// # Errors
    ///
    /// * `SchedulerError::Network` - The service could not be reached or the
    ///   body could not be read
    /// * `SchedulerError::UnexpectedStatus` - The service answered with a
    ///   non-success status
    pub async fn submit(&self, request: &ScheduleRequest) -> Result<ScheduleResponse> {
        log::debug!(
            "POST {} ({} day(s), n={:?})",
            self.endpoint,
            request.days.len(),
            request.n
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .network_context("Failed to reach scheduling service")?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("scheduling service at {} returned {status}", self.endpoint);
            return Err(SchedulerError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .network_context("Failed to read scheduling service response")?;
        let decoded = ScheduleResponse::from_body(&body);
        if let ScheduleResponse::Unrecognized(_) = &decoded {
            log::warn!("unrecognized response from scheduling service: {body}");
        }
        Ok(decoded)
    }
}
