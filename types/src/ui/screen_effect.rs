//! Screen transition effects.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEffectKind {
    /// Result card grows in from the center.
    PopScale,
    /// Form slides up into place.
    SlideUp,
    /// Horizontal jitter on a rejected submit.
    Shake,
}

#[derive(Debug, Clone)]
pub struct ScreenEffect {
    kind: ScreenEffectKind,
    timer: EffectTimer,
}

impl ScreenEffect {
    #[must_use]
    pub fn pop_scale(duration: Duration) -> Self {
        Self {
            kind: ScreenEffectKind::PopScale,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn slide_up(duration: Duration) -> Self {
        Self {
            kind: ScreenEffectKind::SlideUp,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn shake(duration: Duration) -> Self {
        Self {
            kind: ScreenEffectKind::Shake,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn kind(&self) -> ScreenEffectKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, ScreenEffect, ScreenEffectKind};
    use std::time::Duration;

    #[test]
    fn pop_scale_initial_state() {
        let effect = ScreenEffect::pop_scale(Duration::from_millis(200));
        assert_eq!(effect.kind(), ScreenEffectKind::PopScale);
        assert!(matches!(effect.phase(), AnimPhase::Running { progress } if progress < 0.1));
    }

    #[test]
    fn shake_initial_state() {
        let effect = ScreenEffect::shake(Duration::from_millis(250));
        assert_eq!(effect.kind(), ScreenEffectKind::Shake);
        assert!(matches!(effect.phase(), AnimPhase::Running { .. }));
    }

    #[test]
    fn completed_after_duration() {
        let mut effect = ScreenEffect::slide_up(Duration::from_millis(100));
        effect.advance(Duration::from_millis(150));
        assert!(matches!(effect.phase(), AnimPhase::Completed));
    }
}
