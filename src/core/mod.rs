pub mod carousel;
pub mod menu;
pub mod modal;
pub mod nav;
pub mod reservation;
pub mod site;
pub mod state;
pub mod theme;

pub use crate::domain::model::{MenuItem, MenuView, ReservationForm, Testimonial, Theme};
pub use crate::domain::ports::{
    DisplayRegion, MenuSource, ReservationSubmitter, SelectionControls, Storage,
};
pub use crate::utils::error::Result;
