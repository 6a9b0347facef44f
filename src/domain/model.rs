use serde::{Deserialize, Serialize};
use std::fmt;

/// One dish as supplied by the menu data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    /// Pre-formatted for display, e.g. "$14.50".
    pub price: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MenuItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Result of one menu render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuView<'a> {
    /// Matching items in data-file order.
    Items(Vec<&'a MenuItem>),
    /// Data loaded but nothing matches the current selection.
    NoMatches,
    /// The menu data could not be loaded at startup.
    DataUnavailable,
}

impl MenuView<'_> {
    pub fn item_count(&self) -> usize {
        match self {
            MenuView::Items(items) => items.len(),
            _ => 0,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            MenuView::Items(_) => None,
            MenuView::NoMatches => Some(NO_MATCHES_MESSAGE),
            MenuView::DataUnavailable => Some(DATA_UNAVAILABLE_MESSAGE),
        }
    }
}

pub const NO_MATCHES_MESSAGE: &str = "No items match your filters.";
pub const DATA_UNAVAILABLE_MESSAGE: &str = "Failed to load menu data.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
}

impl Testimonial {
    pub fn defaults() -> Vec<Testimonial> {
        vec![
            Testimonial {
                text: "The best food I've had. The Butter Chicken is absolute heaven!".to_string(),
                author: "Sarah Jenkins".to_string(),
            },
            Testimonial {
                text: "Incredible ambiance and service. Chef Ahmed's modern take on classics is refreshing.".to_string(),
                author: "Michael Chen".to_string(),
            },
            Testimonial {
                text: "A true culinary gem. The flavors are authentic yet sophisticated. Highly recommended!".to_string(),
                author: "Priya Patel".to_string(),
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Material icon shown on the toggle; it names the theme a click switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "dark_mode",
            Theme::Dark => "light_mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub guests: u32,
    #[serde(default)]
    pub requests: String,
}

impl ReservationForm {
    /// Url-encoded body pairs in form field order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("date", self.date.clone()),
            ("time", self.time.clone()),
            ("guests", self.guests.to_string()),
            ("requests", self.requests.clone()),
        ]
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        match field {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "date" => self.date = value.to_string(),
            "time" => self.time = value.to_string(),
            "guests" => match value.trim().parse() {
                Ok(guests) => self.guests = guests,
                Err(_) => return false,
            },
            "requests" => self.requests = value.to_string(),
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    Reservation,
    Order,
}

/// Where a window click landed, as far as modal dismissal cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop(ModalId),
    Elsewhere,
}
