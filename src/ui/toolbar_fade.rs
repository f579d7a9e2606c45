// SPDX-License-Identifier: MPL-2.0
//! Toolbar fade-in / fade-out driven by pointer motion.
//!
//! Motion over the image reveals the toolbar with a short fade-in and arms a
//! debounce timer. Further motion while the timer is pending only re-arms it,
//! so a moving pointer never restarts the fade. When the timer fires the
//! toolbar fades back out.
//!
//! ```text
//!            motion                      fade-in done
//!  Hidden ───────────▶ FadingIn ─────────────────────▶ Visible
//!    ▲                  │  ▲ motion: re-arm timer        │  ▲ motion: re-arm timer
//!    │ fade-out done    │  └────────┘                    │  └────────┘
//!    │                  ▼ timer (fade-in still running)  │ timer
//!  FadingOut ◀──────────┴────────────────────────────────┘
//!    │ motion: restart fade-in from 0
//!    └──────────────────────────▶ FadingIn
//! ```

use crate::config::{FADE_IN_MS, FADE_OUT_MS, TOOLBAR_VISIBLE_OPACITY};
use crate::ui::animation::{ActorId, AnimationScheduler, TimerId, TimerService, TweenSpec};
use crate::ui::state::ToolbarHideDelay;
use std::time::{Duration, Instant};

/// Durations and target opacity of the fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeTiming {
    pub fade_in: Duration,
    pub fade_out: Duration,
    pub hide_delay: ToolbarHideDelay,
    /// Opacity reached when fully shown, out of 255.
    pub visible_opacity: f32,
}

impl Default for FadeTiming {
    fn default() -> Self {
        Self {
            fade_in: Duration::from_millis(FADE_IN_MS),
            fade_out: Duration::from_millis(FADE_OUT_MS),
            hide_delay: ToolbarHideDelay::default(),
            visible_opacity: f32::from(TOOLBAR_VISIBLE_OPACITY),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
    Hidden,
    FadingIn,
    Visible,
    FadingOut,
}

/// What a pointer motion event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// The toolbar was already shown; only the hide timer was re-armed.
    Rearmed,
    /// The toolbar must be raised above the image; its fade-in started.
    Revealed,
}

#[derive(Debug, Clone)]
pub struct ToolbarFade {
    target: ActorId,
    timing: FadeTiming,
    pending: Option<TimerId>,
}

impl ToolbarFade {
    #[must_use]
    pub fn new(target: ActorId, timing: FadeTiming) -> Self {
        Self {
            target,
            timing,
            pending: None,
        }
    }

    #[cfg(test)]
    fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    pub fn on_pointer_motion<A, T>(
        &mut self,
        now: Instant,
        animations: &mut A,
        timers: &mut T,
    ) -> Motion
    where
        A: AnimationScheduler,
        T: TimerService,
    {
        let motion = if let Some(id) = self.pending.take() {
            timers.cancel(id);
            Motion::Rearmed
        } else {
            animations.remove_all_tweens(self.target);
            animations.set_value(self.target, 0.0);
            animations.add_tween(
                self.target,
                TweenSpec::ease_out_quad(self.timing.visible_opacity, self.timing.fade_in),
                now,
            );
            log::debug!("toolbar fade-in started");
            Motion::Revealed
        };

        self.pending = Some(timers.schedule_once(self.timing.hide_delay.as_duration(), now));
        motion
    }

    /// Handles a fired timer. Returns false when `id` is not the pending hide
    /// timer (it was cancelled and replaced), in which case nothing happens.
    pub fn on_timer<A>(&mut self, id: TimerId, now: Instant, animations: &mut A) -> bool
    where
        A: AnimationScheduler,
    {
        if self.pending != Some(id) {
            return false;
        }

        self.pending = None;
        animations.add_tween(
            self.target,
            TweenSpec::ease_out_quad(0.0, self.timing.fade_out),
            now,
        );
        log::debug!("toolbar fade-out started");
        true
    }

    #[must_use]
    pub fn state<A>(&self, animations: &A) -> FadeState
    where
        A: AnimationScheduler,
    {
        match (self.pending.is_some(), animations.is_animating(self.target)) {
            (true, true) => FadeState::FadingIn,
            (true, false) => FadeState::Visible,
            (false, true) => FadeState::FadingOut,
            (false, false) => FadeState::Hidden,
        }
    }
}
