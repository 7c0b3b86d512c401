//! Local UI chrome state (active tab).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`session`, `brts`) so
//! tab switching never touches network-backed data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Main-content tabs, unlocked once the session is ready.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Brts,
    Create,
    Dashboard,
    Notifications,
}

impl ActiveTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Brts => "My BRTs",
            Self::Create => "Create BRT",
            Self::Dashboard => "Dashboard",
            Self::Notifications => "Notifications",
        }
    }

    /// Tab order for the nav bar.
    pub fn all() -> [Self; 4] {
        [Self::Brts, Self::Create, Self::Dashboard, Self::Notifications]
    }
}

/// UI state for the shell's tab bar.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub active_tab: ActiveTab,
}
