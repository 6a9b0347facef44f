use crate::core::reservation::{is_unconfigured, SimulatedSubmitter};
use crate::core::{ReservationForm, ReservationSubmitter};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Posts the reservation form as `application/x-www-form-urlencoded`.
pub struct HttpSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ReservationSubmitter for HttpSubmitter {
    async fn submit(&self, form: &ReservationForm) -> Result<()> {
        tracing::debug!("Posting reservation to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .form(&form.to_pairs())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Reservation endpoint status: {}", status);
        if !status.is_success() {
            return Err(SiteError::SubmissionRejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Real endpoint when configured, simulation otherwise.
pub fn build_submitter(
    endpoint: Option<&str>,
    timeout: Duration,
    simulated_delay: Duration,
) -> Result<Arc<dyn ReservationSubmitter>> {
    match endpoint {
        Some(url) if !is_unconfigured(Some(url)) => Ok(Arc::new(HttpSubmitter::new(url, timeout)?)),
        _ => Ok(Arc::new(SimulatedSubmitter::new(simulated_delay))),
    }
}
