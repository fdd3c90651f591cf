//! Core engine for FLAMES - the reading and the form state machine.
//!
//! This crate contains the App state machine without TUI dependencies.
//! The reading itself lives in [`flames`] and is pure; `App` is the
//! collaborator that validates input, calls it once per submit, and paces
//! the result behind a cosmetic delay.

use std::time::{Duration, Instant};

use tracing::{debug, info};

pub mod flames;
pub use flames::Reading;

// Config types - passed in from caller
mod config;
pub use config::{
    AppConfig, CalculationConfig, ConfigError, DEFAULT_CALCULATION_DELAY, FlamesConfig,
    calculation_delay_from_ms, config_path,
};

pub use flames_types::ui::{
    AnimPhase, EffectTimer, NameDraft, ScreenEffect, ScreenEffectKind, UiOptions, ViewState,
};
pub use flames_types::{
    Accent, InvalidInput, Name, NameSlot, ResultCode, ResultDetails, ResultIcon, Rgb,
    is_allowed_char,
};

pub const EMPTY_NAMES_MESSAGE: &str = "Please enter both names!";

const INTRO_DURATION: Duration = Duration::from_millis(500);
const SHAKE_DURATION: Duration = Duration::from_millis(350);
const POP_DURATION: Duration = Duration::from_millis(450);

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Input,
    Calculating,
    Result,
}

/// Two validated names and their reading; exists only once submit succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub first: Name,
    pub second: Name,
    pub reading: Reading,
}

#[derive(Debug)]
enum Screen {
    Input,
    Calculating {
        submission: Submission,
        timer: EffectTimer,
    },
    Result {
        submission: Submission,
    },
}

pub struct App {
    first: NameDraft,
    second: NameDraft,
    focus: NameSlot,
    error: Option<String>,
    screen: Screen,
    view: ViewState,
    calculation_delay: Duration,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(ui_options: UiOptions, calculation_delay: Duration) -> Self {
        let mut app = Self {
            first: NameDraft::default(),
            second: NameDraft::default(),
            focus: NameSlot::First,
            error: None,
            screen: Screen::Input,
            view: ViewState::new(ui_options),
            calculation_delay,
            should_quit: false,
        };
        app.start_effect(ScreenEffect::slide_up(INTRO_DURATION));
        app
    }

    #[must_use]
    pub fn from_config(config: Option<&FlamesConfig>) -> Self {
        match config {
            Some(config) => Self::new(config.ui_options(), config.calculation_delay()),
            None => Self::new(
                FlamesConfig::default().ui_options(),
                DEFAULT_CALCULATION_DELAY,
            ),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn screen_kind(&self) -> ScreenKind {
        match self.screen {
            Screen::Input => ScreenKind::Input,
            Screen::Calculating { .. } => ScreenKind::Calculating,
            Screen::Result { .. } => ScreenKind::Result,
        }
    }

    #[must_use]
    pub fn draft(&self, slot: NameSlot) -> &NameDraft {
        match slot {
            NameSlot::First => &self.first,
            NameSlot::Second => &self.second,
        }
    }

    fn draft_mut(&mut self, slot: NameSlot) -> &mut NameDraft {
        match slot {
            NameSlot::First => &mut self.first,
            NameSlot::Second => &mut self.second,
        }
    }

    #[must_use]
    pub fn focus(&self) -> NameSlot {
        self.focus
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The submission being calculated or shown.
    #[must_use]
    pub fn submission(&self) -> Option<&Submission> {
        match &self.screen {
            Screen::Input => None,
            Screen::Calculating { submission, .. } | Screen::Result { submission } => {
                Some(submission)
            }
        }
    }

    /// The final result, once the delay has elapsed.
    #[must_use]
    pub fn result(&self) -> Option<ResultCode> {
        match &self.screen {
            Screen::Result { submission } => Some(submission.reading.code),
            _ => None,
        }
    }

    /// Progress through the calculation delay, `0.0..=1.0`.
    #[must_use]
    pub fn calculation_progress(&self) -> Option<f32> {
        match &self.screen {
            Screen::Calculating { timer, .. } => Some(timer.progress()),
            _ => None,
        }
    }

    /// How many FLAMES letters have been struck out so far.
    ///
    /// Spreads the five strikes evenly over the delay; all five are out
    /// once the result shows.
    #[must_use]
    pub fn struck_count(&self) -> usize {
        match &self.screen {
            Screen::Input => 0,
            Screen::Calculating { submission, timer } => {
                let total = submission.reading.eliminated.len();
                let struck = (timer.progress() * total as f32).floor() as usize;
                struck.min(total)
            }
            Screen::Result { submission } => submission.reading.eliminated.len(),
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.view.tick
    }

    #[must_use]
    pub fn screen_effect(&self) -> Option<&ScreenEffect> {
        self.view.screen_effect.as_ref()
    }

    #[must_use]
    pub fn calculation_delay(&self) -> Duration {
        self.calculation_delay
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Form editing (Input screen only)
    // ------------------------------------------------------------------

    fn editing(&self) -> bool {
        matches!(self.screen, Screen::Input)
    }

    /// Type one character into the focused field.
    ///
    /// Anything other than a letter or whitespace is rejected and leaves
    /// the field untouched. Returns whether the character was accepted.
    pub fn enter_char(&mut self, c: char) -> bool {
        if !self.editing() {
            return false;
        }
        if !is_allowed_char(c) {
            debug!(?c, field = %self.focus, "Rejected keystroke");
            return false;
        }
        let focus = self.focus;
        self.draft_mut(focus).enter_char(c);
        self.error = None;
        true
    }

    /// Paste into the focused field. Accepted only as a whole.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if !self.editing() {
            return false;
        }
        let folded = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
        if let Some(bad) = folded.chars().find(|c| !is_allowed_char(*c)) {
            debug!(?bad, field = %self.focus, "Rejected paste");
            return false;
        }
        if folded.is_empty() {
            return true;
        }
        let focus = self.focus;
        self.draft_mut(focus).enter_text(&folded);
        self.error = None;
        true
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut NameDraft)) {
        if !self.editing() {
            return;
        }
        let focus = self.focus;
        edit(self.draft_mut(focus));
    }

    pub fn delete_char(&mut self) {
        self.edit_focused(NameDraft::delete_char);
    }

    pub fn delete_char_forward(&mut self) {
        self.edit_focused(NameDraft::delete_char_forward);
    }

    pub fn move_cursor_left(&mut self) {
        self.edit_focused(NameDraft::move_cursor_left);
    }

    pub fn move_cursor_right(&mut self) {
        self.edit_focused(NameDraft::move_cursor_right);
    }

    pub fn reset_cursor(&mut self) {
        self.edit_focused(NameDraft::reset_cursor);
    }

    pub fn move_cursor_end(&mut self) {
        self.edit_focused(NameDraft::move_cursor_end);
    }

    pub fn clear_field(&mut self) {
        self.edit_focused(NameDraft::clear);
    }

    pub fn focus_next(&mut self) {
        if self.editing() {
            self.focus = self.focus.other();
        }
    }

    pub fn focus_prev(&mut self) {
        // Two fields: previous and next coincide.
        self.focus_next();
    }

    /// Enter on a field: move on from an unfinished first name, else submit.
    pub fn confirm(&mut self) {
        if !self.editing() {
            return;
        }
        if self.focus == NameSlot::First && self.second.is_blank() && !self.first.is_blank() {
            self.focus = NameSlot::Second;
            return;
        }
        self.submit();
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Validate both fields and start the calculation.
    ///
    /// Empty input never reaches the engine; it surfaces an inline message.
    pub fn submit(&mut self) {
        if !self.editing() {
            return;
        }

        if self.first.is_blank() || self.second.is_blank() {
            self.reject(EMPTY_NAMES_MESSAGE.to_string());
            return;
        }

        let parsed = Name::parse(NameSlot::First, self.first.text()).and_then(|first| {
            Name::parse(NameSlot::Second, self.second.text()).map(|second| (first, second))
        });
        let (first, second) = match parsed {
            Ok(names) => names,
            Err(err) => {
                self.focus = err.slot();
                self.reject(err.to_string());
                return;
            }
        };

        let reading = flames::evaluate(&first, &second);
        info!(
            survivors = reading.survivors,
            code = %reading.code.letter(),
            "Reading computed"
        );

        self.error = None;
        self.screen = Screen::Calculating {
            submission: Submission {
                first,
                second,
                reading,
            },
            timer: EffectTimer::new(self.calculation_delay),
        };
        self.view.screen_effect = None;
        self.view.last_frame = Instant::now();
    }

    fn reject(&mut self, message: String) {
        debug!(%message, "Submit rejected");
        self.error = Some(message);
        self.start_effect(ScreenEffect::shake(SHAKE_DURATION));
    }

    /// "Try Again": forget both names and the result.
    pub fn reset(&mut self) {
        self.first.clear();
        self.second.clear();
        self.focus = NameSlot::First;
        self.error = None;
        self.screen = Screen::Input;
        self.start_effect(ScreenEffect::slide_up(INTRO_DURATION));
    }

    fn start_effect(&mut self, effect: ScreenEffect) {
        if self.view.ui_options.reduced_motion {
            self.view.screen_effect = None;
            return;
        }
        self.view.screen_effect = Some(effect);
        self.view.last_frame = Instant::now();
    }

    // ------------------------------------------------------------------
    // Frame clock
    // ------------------------------------------------------------------

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        elapsed
    }

    /// Advance animations by the wall-clock time since the last frame.
    pub fn tick(&mut self) {
        let delta = self.frame_elapsed();
        self.advance(delta);
    }

    /// Advance animations and the calculation delay by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.view.tick = self.view.tick.wrapping_add(1);

        if let Some(effect) = self.view.screen_effect.as_mut() {
            effect.advance(delta);
            if matches!(effect.phase(), AnimPhase::Completed) {
                self.view.screen_effect = None;
            }
        }

        let finished = match &mut self.screen {
            Screen::Calculating { timer, .. } => {
                timer.advance(delta);
                timer.is_finished()
            }
            _ => false,
        };
        if finished {
            self.finish_calculation();
        }
    }

    fn finish_calculation(&mut self) {
        let screen = std::mem::replace(&mut self.screen, Screen::Input);
        let Screen::Calculating { submission, .. } = screen else {
            self.screen = screen;
            return;
        };
        info!(result = submission.reading.code.label(), "Reading revealed");
        self.screen = Screen::Result { submission };
        self.start_effect(ScreenEffect::pop_scale(POP_DURATION));
    }
}
