/// Scroll offset past which the navbar collapses.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following any navigation link closes the mobile menu.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.open {
            "close"
        } else {
            "menu"
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavbarStyle {
    #[default]
    Expanded,
    Compact,
}

impl NavbarStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > SCROLL_THRESHOLD {
            NavbarStyle::Compact
        } else {
            NavbarStyle::Expanded
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            NavbarStyle::Expanded => "none",
            NavbarStyle::Compact => "0 2px 10px rgba(0,0,0,0.1)",
        }
    }

    pub fn padding(&self) -> &'static str {
        match self {
            NavbarStyle::Expanded => "16px 0",
            NavbarStyle::Compact => "8px 0",
        }
    }
}
