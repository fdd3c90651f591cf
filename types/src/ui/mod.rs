//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod draft;
mod screen_effect;
mod view_state;

pub use animation::{AnimPhase, EffectTimer};
pub use draft::NameDraft;
pub use screen_effect::{ScreenEffect, ScreenEffectKind};
pub use view_state::{UiOptions, ViewState};
