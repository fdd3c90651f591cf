//! View state for rendering.

use std::time::Instant;

use super::ScreenEffect;

/// UI configuration options derived from config/environment/flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Static spinner and no screen effects. The calculation delay still applies.
    pub reduced_motion: bool,
}

/// Rendering-only state, kept apart from the form and result.
#[derive(Debug)]
pub struct ViewState {
    pub screen_effect: Option<ScreenEffect>,
    pub ui_options: UiOptions,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
    /// Frame counter driving spinners.
    pub tick: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            screen_effect: None,
            ui_options: UiOptions::default(),
            last_frame: Instant::now(),
            tick: 0,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }
}
