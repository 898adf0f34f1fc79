//! One-shot reveal animation for post cards
//!
//! The first time a card becomes sufficiently visible inside the feed
//! viewport it fades in and slides up once, then stays at rest for good.

use std::collections::HashMap;

/// Fraction of a card that must be visible to trigger its reveal
const VISIBILITY_THRESHOLD: f32 = 0.1;
/// Pause between triggering and the start of the tween, in seconds
const REVEAL_DELAY: f64 = 0.1;
/// Tween duration in seconds
const REVEAL_DURATION: f64 = 0.6;
/// Vertical slide distance in points
const SLIDE_DISTANCE: f32 = 20.0;

/// Opacity and vertical offset to apply to a card this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealEffect {
    pub opacity: f32,
    /// Extra space above the card; shrinks to zero as the card slides up
    pub offset: f32,
}

impl RevealEffect {
    /// The no-op effect for cards at rest
    pub const REST: Self = Self {
        opacity: 1.0,
        offset: 0.0,
    };
}

/// Tracks which cards have revealed and tweens the ones in flight.
///
/// One-shot per element: once a card triggers, scrolling it out of view and
/// back changes nothing. `reset` re-arms everything after a feed rebuild.
#[derive(Debug, Default)]
pub struct RevealAnimator {
    /// Trigger time by post id
    started: HashMap<u64, f64>,
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a card's visible fraction for this frame, triggering its
    /// reveal the first time the fraction reaches the threshold.
    pub fn observe(&mut self, id: u64, visible_fraction: f32, now: f64) {
        if visible_fraction >= VISIBILITY_THRESHOLD {
            self.started.entry(id).or_insert(now);
        }
    }

    /// Sample the effect for a card.
    ///
    /// Cards that never triggered render untouched; triggered cards tween
    /// from (transparent, 20 points low) to rest.
    pub fn effect(&self, id: u64, now: f64) -> RevealEffect {
        let Some(&t0) = self.started.get(&id) else {
            return RevealEffect::REST;
        };

        let t = ((now - t0 - REVEAL_DELAY) / REVEAL_DURATION).clamp(0.0, 1.0) as f32;
        let eased = ease_out(t);
        RevealEffect {
            opacity: eased,
            offset: (1.0 - eased) * SLIDE_DISTANCE,
        }
    }

    /// Whether any reveal is still tweening; callers keep requesting
    /// repaints while this holds
    pub fn is_animating(&self, now: f64) -> bool {
        self.started
            .values()
            .any(|&t0| now - t0 < REVEAL_DELAY + REVEAL_DURATION)
    }

    /// Forget everything so freshly built cards animate again
    pub fn reset(&mut self) {
        self.started.clear();
    }
}

/// Cubic ease-out
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_never_triggers() {
        let mut animator = RevealAnimator::new();
        animator.observe(1, 0.05, 0.0);

        assert_eq!(animator.effect(1, 0.0), RevealEffect::REST);
        assert_eq!(animator.effect(1, 10.0), RevealEffect::REST);
        assert!(!animator.is_animating(0.0));
    }

    #[test]
    fn test_trigger_starts_hidden_then_settles() {
        let mut animator = RevealAnimator::new();
        animator.observe(1, 0.1, 0.0);

        // Inside the delay window the card is fully hidden and offset.
        let start = animator.effect(1, 0.05);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.offset, 20.0);

        // Mid-tween it is partially revealed.
        let mid = animator.effect(1, 0.4);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.offset > 0.0 && mid.offset < 20.0);

        // Past delay + duration it is at rest.
        assert_eq!(animator.effect(1, 1.0), RevealEffect::REST);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut animator = RevealAnimator::new();
        animator.observe(1, 0.5, 0.0);

        // Scrolled out of view and back in, well after the tween finished.
        animator.observe(1, 0.0, 5.0);
        animator.observe(1, 1.0, 6.0);

        assert_eq!(animator.effect(1, 6.0), RevealEffect::REST);
        assert!(!animator.is_animating(6.0));
    }

    #[test]
    fn test_is_animating_tracks_the_tween_window() {
        let mut animator = RevealAnimator::new();
        animator.observe(1, 1.0, 0.0);

        assert!(animator.is_animating(0.0));
        assert!(animator.is_animating(0.5));
        assert!(!animator.is_animating(0.8));
    }

    #[test]
    fn test_reset_rearms_elements() {
        let mut animator = RevealAnimator::new();
        animator.observe(1, 1.0, 0.0);
        assert_eq!(animator.effect(1, 2.0), RevealEffect::REST);

        animator.reset();
        assert_eq!(animator.effect(1, 10.0), RevealEffect::REST);

        animator.observe(1, 1.0, 10.0);
        assert_eq!(animator.effect(1, 10.0).opacity, 0.0);
    }

    #[test]
    fn test_elements_animate_independently() {
        let mut animator = RevealAnimator::new();
        animator.observe(1, 1.0, 0.0);
        animator.observe(2, 0.05, 0.0);

        assert_eq!(animator.effect(1, 0.0).opacity, 0.0);
        assert_eq!(animator.effect(2, 0.0), RevealEffect::REST);
    }
}
