//! Fake dark mode toggle.
//!
//! Purely cosmetic and independent of the post store.

use log::debug;

const FAKE_DARK_MODE_CLASS: &str = "fake-dark-mode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FakeDarkMode {
    enabled: bool,
}

impl FakeDarkMode {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Flip the toggle and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        debug!("Fake dark mode set to {}", self.enabled);
        self.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle button label: the mode the button switches to.
    pub fn icon(&self) -> &'static str {
        if self.enabled { "☀️" } else { "🌙" }
    }

    /// Class applied to the page root while enabled.
    pub fn css_class(&self) -> Option<&'static str> {
        self.enabled.then_some(FAKE_DARK_MODE_CLASS)
    }
}
