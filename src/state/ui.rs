//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of session and todo state so the navbar
//! can evolve independently of network data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the navbar and pages.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
