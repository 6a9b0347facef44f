use crate::domain::model::{ClickTarget, ModalId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modals {
    reservation: bool,
    order: bool,
}

impl Modals {
    fn slot(&mut self, id: ModalId) -> &mut bool {
        match id {
            ModalId::Reservation => &mut self.reservation,
            ModalId::Order => &mut self.order,
        }
    }

    pub fn is_shown(&self, id: ModalId) -> bool {
        match id {
            ModalId::Reservation => self.reservation,
            ModalId::Order => self.order,
        }
    }

    pub fn show(&mut self, id: ModalId) {
        *self.slot(id) = true;
    }

    pub fn close(&mut self, id: ModalId) {
        *self.slot(id) = false;
    }

    /// Clicking a modal's backdrop dismisses it.
    pub fn window_click(&mut self, target: ClickTarget) {
        if let ClickTarget::Backdrop(id) = target {
            self.close(id);
        }
    }
}
