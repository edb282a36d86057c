//! Reveal-on-scroll state per section
//!
//! A section starts in [`RevealState::Init`], moves to `Observing` once an
//! intersection observer is attached, and to `Revealed` the first time it is
//! seen. `Revealed` is terminal apart from disposal, and disposal remembers
//! whether the section had been revealed, so `is_revealed()` never goes from
//! true back to false.

use serde::{Deserialize, Serialize};

/// Default trigger margin: a section counts as entered once its top is
/// 100px above the bottom edge of the viewport.
pub const DEFAULT_ROOT_MARGIN: RootMargin = RootMargin {
    top: 0,
    right: 0,
    bottom: -100,
    left: 0,
};

/// Intersection root margin in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootMargin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl RootMargin {
    /// CSS margin shorthand as accepted by `IntersectionObserver`
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        DEFAULT_ROOT_MARGIN
    }
}

/// When a section counts as having entered the viewport
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerOptions {
    /// Minimum visible ratio, 0.0 means any overlap
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: DEFAULT_ROOT_MARGIN,
        }
    }
}

impl TriggerOptions {
    /// Whether an intersection notification satisfies this trigger
    pub fn is_met(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio >= self.threshold
    }
}

/// Lifecycle of one section's reveal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Init,
    Observing,
    Revealed,
    Disposed {
        revealed: bool,
    },
}

/// Inputs that drive [`RevealState`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealEvent {
    /// An observer was attached to the section root
    Observe,
    /// Intersection notification for the section root
    Intersect { is_intersecting: bool, ratio: f64 },
    /// Reveal without waiting: on mount, or when observation is unavailable
    RevealNow,
    /// The section was torn down
    Dispose,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        matches!(
            self,
            RevealState::Revealed | RevealState::Disposed { revealed: true }
        )
    }

    /// Whether an observer should currently be attached
    pub fn wants_observer(&self) -> bool {
        matches!(self, RevealState::Observing)
    }

    /// Next state for `event`
    pub fn apply(self, event: RevealEvent, trigger: &TriggerOptions) -> RevealState {
        use RevealEvent as E;
        use RevealState as S;

        match (self, event) {
            (S::Disposed { .. }, _) => self,
            (S::Revealed, E::Dispose) => S::Disposed { revealed: true },
            (S::Revealed, _) => self,
            (_, E::Dispose) => S::Disposed { revealed: false },
            (S::Init, E::Observe) => S::Observing,
            (S::Observing, E::Observe) => self,
            (_, E::RevealNow) => S::Revealed,
            (
                S::Init | S::Observing,
                E::Intersect {
                    is_intersecting,
                    ratio,
                },
            ) => {
                if trigger.is_met(is_intersecting, ratio) {
                    S::Revealed
                } else {
                    self
                }
            }
        }
    }
}

/// Explicit per-section reveal coordinator
///
/// Owns the section's [`RevealState`] and reports the single false-to-true
/// edge of `revealed`, which is where the stagger sequence starts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealCoordinator {
    state: RevealState,
    trigger: TriggerOptions,
}

impl RevealCoordinator {
    pub fn new(trigger: TriggerOptions) -> Self {
        Self {
            state: RevealState::Init,
            trigger,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn trigger(&self) -> &TriggerOptions {
        &self.trigger
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    /// Apply `event`, returning `true` only when this call revealed the section
    pub fn handle(&mut self, event: RevealEvent) -> bool {
        let was_revealed = self.state.is_revealed();
        self.state = self.state.apply(event, &self.trigger);
        !was_revealed && self.state.is_revealed()
    }

    /// Start observing, or reveal at once when observation is unavailable
    pub fn attach(&mut self, observer_available: bool) -> bool {
        if observer_available {
            self.handle(RevealEvent::Observe)
        } else {
            self.handle(RevealEvent::RevealNow)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit() -> RevealEvent {
        RevealEvent::Intersect {
            is_intersecting: true,
            ratio: 0.4,
        }
    }

    fn miss() -> RevealEvent {
        RevealEvent::Intersect {
            is_intersecting: false,
            ratio: 0.0,
        }
    }

    #[test]
    fn test_starts_unrevealed() {
        let coordinator = RevealCoordinator::default();
        assert_eq!(coordinator.state(), RevealState::Init);
        assert!(!coordinator.is_revealed());
    }

    #[test]
    fn test_first_intersection_reveals_once() {
        let mut coordinator = RevealCoordinator::default();
        assert!(!coordinator.attach(true));
        assert_eq!(coordinator.state(), RevealState::Observing);

        assert!(!coordinator.handle(miss()));
        assert!(coordinator.handle(hit()));
        assert!(coordinator.is_revealed());

        // Duplicate notifications are not a second reveal
        assert!(!coordinator.handle(hit()));
        assert!(!coordinator.handle(miss()));
        assert!(coordinator.is_revealed());
    }

    #[test]
    fn test_revealed_never_reverts() {
        let events = [
            RevealEvent::Observe,
            miss(),
            hit(),
            miss(),
            RevealEvent::Observe,
            hit(),
            RevealEvent::Dispose,
            miss(),
            RevealEvent::Observe,
        ];

        let mut coordinator = RevealCoordinator::default();
        let mut seen_revealed = false;
        let mut edges = 0;
        for event in events {
            if coordinator.handle(event) {
                edges += 1;
            }
            if seen_revealed {
                assert!(coordinator.is_revealed(), "reverted after {event:?}");
            }
            seen_revealed |= coordinator.is_revealed();
        }

        assert_eq!(edges, 1);
        assert_eq!(
            coordinator.state(),
            RevealState::Disposed { revealed: true }
        );
    }

    #[test]
    fn test_unavailable_observer_fails_open() {
        let mut coordinator = RevealCoordinator::default();
        assert!(coordinator.attach(false));
        assert_eq!(coordinator.state(), RevealState::Revealed);
    }

    #[test]
    fn test_threshold_respected() {
        let trigger = TriggerOptions {
            threshold: 0.5,
            ..Default::default()
        };
        let mut coordinator = RevealCoordinator::new(trigger);
        coordinator.attach(true);

        assert!(!coordinator.handle(hit()));
        assert!(coordinator.handle(RevealEvent::Intersect {
            is_intersecting: true,
            ratio: 0.5,
        }));
    }

    #[test]
    fn test_dispose_before_reveal_stays_hidden() {
        let mut coordinator = RevealCoordinator::default();
        coordinator.attach(true);
        coordinator.handle(RevealEvent::Dispose);

        assert_eq!(
            coordinator.state(),
            RevealState::Disposed { revealed: false }
        );
        // Late notifications after teardown do nothing
        assert!(!coordinator.handle(hit()));
        assert!(!coordinator.handle(RevealEvent::RevealNow));
        assert!(!coordinator.is_revealed());
    }

    #[test]
    fn test_wants_observer_only_while_observing() {
        let trigger = TriggerOptions::default();
        assert!(!RevealState::Init.wants_observer());
        assert!(RevealState::Observing.wants_observer());
        assert!(!RevealState::Observing.apply(hit(), &trigger).wants_observer());
    }

    #[test]
    fn test_root_margin_css() {
        assert_eq!(DEFAULT_ROOT_MARGIN.to_css(), "0px 0px -100px 0px");
    }
}
