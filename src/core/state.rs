//! Explicit application state and the synchronous event transitions on it.

use crate::core::carousel::Carousel;
use crate::core::menu::MenuControls;
use crate::core::modal::Modals;
use crate::core::nav::{NavState, NavbarStyle};
use crate::core::reservation::BookingButton;
use crate::domain::model::{ClickTarget, ModalId, ReservationForm, Theme};
use crate::utils::error::{Result, SiteError};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    ToggleNav,
    NavLinkClicked,
    Scrolled(f64),
    ToggleTheme,
    SelectCategory(String),
    ToggleFilter(String),
    NextSlide,
    PrevSlide,
    AutoplayTick,
    OpenOrder,
    CloseModal(ModalId),
    WindowClick(ClickTarget),
    EditReservation { field: String, value: String },
    DismissAlert,
}

/// Follow-up work a transition asks the session to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    RenderMenu,
    PersistTheme(Theme),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub theme: Theme,
    pub nav: NavState,
    pub navbar: NavbarStyle,
    pub carousel: Carousel,
    pub menu: MenuControls,
    pub modals: Modals,
    pub booking: BookingButton,
    pub draft: ReservationForm,
    pub alert: Option<String>,
}

impl AppState {
    pub fn new(menu: MenuControls, carousel: Carousel, booking: BookingButton) -> Self {
        Self {
            theme: Theme::default(),
            nav: NavState::default(),
            navbar: NavbarStyle::default(),
            carousel,
            menu,
            modals: Modals::default(),
            booking,
            draft: ReservationForm::default(),
            alert: None,
        }
    }

    pub fn apply(&mut self, event: &UiEvent) -> Result<Option<Effect>> {
        let effect = match event {
            UiEvent::ToggleNav => {
                self.nav.toggle();
                None
            }
            UiEvent::NavLinkClicked => {
                self.nav.link_clicked();
                None
            }
            UiEvent::Scrolled(y) => {
                self.navbar = NavbarStyle::for_scroll(*y);
                None
            }
            UiEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                Some(Effect::PersistTheme(self.theme))
            }
            UiEvent::SelectCategory(category) => {
                self.menu.select_category(category)?;
                Some(Effect::RenderMenu)
            }
            UiEvent::ToggleFilter(filter) => {
                self.menu.toggle_filter(filter)?;
                Some(Effect::RenderMenu)
            }
            UiEvent::NextSlide | UiEvent::AutoplayTick => {
                self.carousel.next();
                None
            }
            UiEvent::PrevSlide => {
                self.carousel.prev();
                None
            }
            UiEvent::OpenOrder => {
                self.modals.show(ModalId::Order);
                None
            }
            UiEvent::CloseModal(id) => {
                self.modals.close(*id);
                None
            }
            UiEvent::WindowClick(target) => {
                self.modals.window_click(*target);
                None
            }
            UiEvent::EditReservation { field, value } => {
                if !self.draft.set_field(field, value) {
                    return Err(SiteError::FormValidationError {
                        field: field.clone(),
                        reason: format!("cannot set to '{}'", value),
                    });
                }
                None
            }
            UiEvent::DismissAlert => {
                self.alert = None;
                None
            }
        };
        Ok(effect)
    }
}
