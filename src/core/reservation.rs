use crate::domain::model::ReservationForm;
use crate::domain::ports::ReservationSubmitter;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::validate_range;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use std::time::Duration;

/// Value shipped in the template config before an endpoint is set up.
pub const PLACEHOLDER_ENDPOINT: &str = "REPLACE_WITH_YOUR_GOOGLE_SCRIPT_URL";
pub const BUSY_LABEL: &str = "Booking...";
pub const DEFAULT_IDLE_LABEL: &str = "Book a Table";
pub const FAILURE_ALERT: &str = "Something went wrong. Please try again.";
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);
pub const MAX_GUESTS: u32 = 20;

pub fn is_unconfigured(endpoint: Option<&str>) -> bool {
    match endpoint.map(str::trim) {
        None | Some("") => true,
        Some(url) => url == PLACEHOLDER_ENDPOINT,
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> SiteError {
    SiteError::FormValidationError {
        field: field.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_form(form: &ReservationForm) -> Result<()> {
    if form.name.trim().is_empty() {
        return Err(invalid("name", "required"));
    }
    if !form.email.contains('@') {
        return Err(invalid("email", "must be an email address"));
    }
    NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
        .map_err(|e| invalid("date", format!("expected YYYY-MM-DD ({})", e)))?;
    NaiveTime::parse_from_str(form.time.trim(), "%H:%M")
        .map_err(|e| invalid("time", format!("expected HH:MM ({})", e)))?;
    validate_range("guests", form.guests, 1, MAX_GUESTS)
        .map_err(|_| invalid("guests", format!("must be between 1 and {}", MAX_GUESTS)))?;
    Ok(())
}

/// Submit button of the reservation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingButton {
    idle_label: String,
    busy: bool,
}

impl BookingButton {
    pub fn new(idle_label: impl Into<String>) -> Self {
        Self {
            idle_label: idle_label.into(),
            busy: false,
        }
    }

    pub fn label(&self) -> &str {
        if self.busy {
            BUSY_LABEL
        } else {
            &self.idle_label
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.busy
    }

    pub fn begin(&mut self) {
        self.busy = true;
    }

    pub fn restore(&mut self) {
        self.busy = false;
    }
}

impl Default for BookingButton {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationOutcome {
    Confirmed,
    Failed { alert: String },
}

/// Stands in for the endpoint until one is configured.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

#[async_trait]
impl ReservationSubmitter for SimulatedSubmitter {
    async fn submit(&self, form: &ReservationForm) -> Result<()> {
        tracing::warn!("Reservation endpoint not set. Simulating submission.");
        tokio::time::sleep(self.delay).await;
        tracing::debug!(guests = form.guests, "Simulated reservation accepted");
        Ok(())
    }
}
