// SPDX-License-Identifier: MPL-2.0
//! Frame-driven [`AnimationScheduler`].

use super::{ActorId, AnimationScheduler, Tween, TweenSpec};
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default)]
struct Animated {
    value: f32,
    tween: Option<Tween>,
}

/// Holds one animated value per actor and advances running tweens each
/// time [`Tweener::advance`] is called with a frame timestamp.
#[derive(Debug, Clone, Default)]
pub struct Tweener {
    actors: HashMap<ActorId, Animated>,
}

impl Tweener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves every running tween to its value at `now`. Finished tweens
    /// snap to their end value and are dropped.
    pub fn advance(&mut self, now: Instant) {
        for animated in self.actors.values_mut() {
            let Some(tween) = animated.tween else {
                continue;
            };
            animated.value = tween.value_at(now);
            if tween.is_finished(now) {
                animated.value = tween.to;
                animated.tween = None;
            }
        }
    }

    /// True when no tween is running on any actor.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.actors.values().all(|animated| animated.tween.is_none())
    }
}

impl AnimationScheduler for Tweener {
    fn add_tween(&mut self, target: ActorId, spec: TweenSpec, now: Instant) {
        let animated = self.actors.entry(target).or_default();
        animated.tween = Some(Tween::new(animated.value, spec, now));
    }

    fn remove_all_tweens(&mut self, target: ActorId) {
        if let Some(animated) = self.actors.get_mut(&target) {
            animated.tween = None;
        }
    }

    fn set_value(&mut self, target: ActorId, value: f32) {
        self.actors.entry(target).or_default().value = value;
    }

    fn value(&self, target: ActorId) -> f32 {
        self.actors
            .get(&target)
            .map_or(0.0, |animated| animated.value)
    }

    fn is_animating(&self, target: ActorId) -> bool {
        self.actors
            .get(&target)
            .is_some_and(|animated| animated.tween.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const ACTOR: ActorId = ActorId(1);

    #[test]
    fn unknown_actor_reads_zero() {
        let tweener = Tweener::new();
        assert_eq!(tweener.value(ACTOR), 0.0);
        assert!(!tweener.is_animating(ACTOR));
        assert!(tweener.is_idle());
    }

    #[test]
    fn advance_runs_tween_to_completion() {
        let start = Instant::now();
        let mut tweener = Tweener::new();
        tweener.add_tween(
            ACTOR,
            TweenSpec::ease_out_quad(200.0, Duration::from_millis(100)),
            start,
        );
        assert!(tweener.is_animating(ACTOR));

        tweener.advance(start + Duration::from_millis(40));
        let mid = tweener.value(ACTOR);
        assert!(mid > 0.0 && mid < 200.0);

        tweener.advance(start + Duration::from_millis(150));
        assert_eq!(tweener.value(ACTOR), 200.0);
        assert!(!tweener.is_animating(ACTOR));
        assert!(tweener.is_idle());
    }

    #[test]
    fn new_tween_replaces_running_one_from_current_value() {
        let start = Instant::now();
        let mut tweener = Tweener::new();
        tweener.add_tween(
            ACTOR,
            TweenSpec::ease_out_quad(200.0, Duration::from_millis(100)),
            start,
        );
        tweener.advance(start + Duration::from_millis(50));
        let reached = tweener.value(ACTOR);

        let later = start + Duration::from_millis(50);
        tweener.add_tween(
            ACTOR,
            TweenSpec::ease_out_quad(0.0, Duration::from_millis(250)),
            later,
        );
        tweener.advance(later + Duration::from_millis(10));
        assert!(tweener.value(ACTOR) < reached);

        tweener.advance(later + Duration::from_millis(250));
        assert_eq!(tweener.value(ACTOR), 0.0);
    }

    #[test]
    fn remove_all_tweens_freezes_value() {
        let start = Instant::now();
        let mut tweener = Tweener::new();
        tweener.add_tween(
            ACTOR,
            TweenSpec::ease_out_quad(200.0, Duration::from_millis(100)),
            start,
        );
        tweener.advance(start + Duration::from_millis(50));
        let frozen = tweener.value(ACTOR);

        tweener.remove_all_tweens(ACTOR);
        tweener.advance(start + Duration::from_millis(100));
        assert_eq!(tweener.value(ACTOR), frozen);
        assert!(!tweener.is_animating(ACTOR));
    }

    #[test]
    fn set_value_applies_immediately() {
        let mut tweener = Tweener::new();
        tweener.set_value(ACTOR, 42.0);
        assert_eq!(tweener.value(ACTOR), 42.0);
    }
}
