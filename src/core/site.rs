use crate::core::menu::MenuRenderer;
use crate::core::reservation::{validate_form, ReservationOutcome, FAILURE_ALERT};
use crate::core::state::{AppState, Effect, UiEvent};
use crate::core::theme::ThemeStore;
use crate::domain::model::{ModalId, ReservationForm};
use crate::domain::ports::{DisplayRegion, ReservationSubmitter, Storage};
use crate::utils::error::Result;
use std::sync::Arc;

/// One page session: state, menu data, display region and collaborators.
pub struct Site<S: Storage, R: DisplayRegion> {
    state: AppState,
    renderer: MenuRenderer,
    region: R,
    themes: ThemeStore<S>,
    submitter: Arc<dyn ReservationSubmitter>,
}

impl<S: Storage, R: DisplayRegion> Site<S, R> {
    pub fn new(
        state: AppState,
        renderer: MenuRenderer,
        region: R,
        themes: ThemeStore<S>,
        submitter: Arc<dyn ReservationSubmitter>,
    ) -> Self {
        Self {
            state,
            renderer,
            region,
            themes,
            submitter,
        }
    }

    /// Applies the stored theme and performs the first menu render.
    pub async fn start(&mut self, system_prefers_dark: bool) {
        self.state.theme = self.themes.initial_theme(system_prefers_dark).await;
        self.render_menu();
        tracing::info!(
            theme = %self.state.theme,
            items = self.renderer.items().len(),
            "Page ready"
        );
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    pub fn renderer(&self) -> &MenuRenderer {
        &self.renderer
    }

    pub fn render_menu(&mut self) -> usize {
        self.renderer.render_into(&self.state.menu, &mut self.region)
    }

    pub async fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        tracing::debug!(?event, "Handling UI event");
        let selects_menu = matches!(event, UiEvent::SelectCategory(_) | UiEvent::ToggleFilter(_));
        if selects_menu && !self.renderer.is_available() {
            tracing::warn!(?event, "Menu data unavailable, ignoring menu selection");
            self.render_menu();
            return Ok(());
        }
        match self.state.apply(&event)? {
            Some(Effect::RenderMenu) => {
                self.render_menu();
            }
            Some(Effect::PersistTheme(theme)) => {
                if let Err(e) = self.themes.save(theme).await {
                    tracing::warn!("Could not persist theme preference: {}", e);
                }
            }
            None => {}
        }
        Ok(())
    }

    pub fn set_draft(&mut self, form: ReservationForm) {
        self.state.draft = form;
    }

    /// Sends the draft form once. Invalid drafts are rejected before the
    /// button changes; otherwise the button is always restored afterwards.
    pub async fn submit_reservation(&mut self) -> Result<ReservationOutcome> {
        validate_form(&self.state.draft)?;

        self.state.booking.begin();
        let result = self.submitter.submit(&self.state.draft).await;
        self.state.booking.restore();

        let outcome = match result {
            Ok(()) => {
                tracing::info!(guests = self.state.draft.guests, "Reservation submitted");
                self.state.modals.show(ModalId::Reservation);
                self.state.draft = ReservationForm::default();
                ReservationOutcome::Confirmed
            }
            Err(e) => {
                tracing::error!("Reservation failed: {}", e);
                self.state.alert = Some(FAILURE_ALERT.to_string());
                ReservationOutcome::Failed {
                    alert: FAILURE_ALERT.to_string(),
                }
            }
        };
        Ok(outcome)
    }
}
