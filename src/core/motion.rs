//! Staggered entry transitions
//!
//! Children of a revealed section animate from a hidden keyframe (transparent,
//! shifted down) to their static layout position. Child `k` starts
//! `base_delay + k * interval` after the reveal. Transitions are expressed as
//! inline CSS so the browser does the interpolation; the final keyframe is
//! exactly the un-animated layout (`opacity: 1; transform: none`).

/// Timing curve for an entry transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    /// Damped spring; duration is derived from its settling time
    Spring {
        stiffness: f64,
        damping: f64,
        mass: f64,
    },
}

impl Easing {
    pub const fn spring(stiffness: f64, damping: f64) -> Self {
        Easing::Spring {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// CSS `transition-timing-function`
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "cubic-bezier(0.16, 1, 0.3, 1)",
            Easing::EaseInOut => "cubic-bezier(0.65, 0, 0.35, 1)",
            Easing::Spring { .. } => {
                let zeta = self.damping_ratio().unwrap_or(1.0);
                if zeta < 0.5 {
                    "cubic-bezier(0.34, 1.56, 0.64, 1)"
                } else if zeta < 1.0 {
                    "cubic-bezier(0.34, 1.3, 0.64, 1)"
                } else {
                    "cubic-bezier(0.22, 1, 0.36, 1)"
                }
            }
        }
    }

    /// Damping ratio `c / (2 * sqrt(k * m))` for springs
    pub fn damping_ratio(&self) -> Option<f64> {
        match *self {
            Easing::Spring {
                stiffness,
                damping,
                mass,
            } if stiffness > 0.0 && mass > 0.0 => Some(damping / (2.0 * (stiffness * mass).sqrt())),
            _ => None,
        }
    }

    /// Time for a spring to settle within 2% of rest, in milliseconds
    ///
    /// Uses the slowest decay rate of the damped oscillator, which is
    /// `zeta * omega` when underdamped and `omega * (zeta - sqrt(zeta^2 - 1))`
    /// otherwise. Clamped to [`MIN_SPRING_MS`, `MAX_SPRING_MS`].
    pub fn settle_ms(&self) -> Option<u32> {
        let Easing::Spring {
            stiffness, mass, ..
        } = *self
        else {
            return None;
        };
        let zeta = self.damping_ratio()?;
        let omega = (stiffness / mass).sqrt();
        let decay = if zeta < 1.0 {
            zeta * omega
        } else {
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        if decay <= 0.0 || !decay.is_finite() {
            return Some(MAX_SPRING_MS);
        }
        let ms = (4.0 / decay * 1000.0).round() as u32;
        Some(ms.clamp(MIN_SPRING_MS, MAX_SPRING_MS))
    }
}

pub const MIN_SPRING_MS: u32 = 150;
pub const MAX_SPRING_MS: u32 = 2000;

/// Starting keyframe; the end keyframe is always the static layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Keyframe {
    /// Static layout: fully opaque, untransformed
    pub const REST: Keyframe = Keyframe {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    /// Transparent and shifted down by `px`
    pub const fn rise(px: f32) -> Keyframe {
        Keyframe {
            opacity: 0.0,
            offset_x: 0.0,
            offset_y: px,
            scale: 1.0,
        }
    }

    pub const fn fade() -> Keyframe {
        Keyframe {
            opacity: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }

    fn transform_css(&self) -> String {
        if self.offset_x == 0.0 && self.offset_y == 0.0 && self.scale == 1.0 {
            return "none".to_string();
        }
        let mut transform = format!("translate3d({}px, {}px, 0)", self.offset_x, self.offset_y);
        if self.scale != 1.0 {
            transform.push_str(&format!(" scale({})", self.scale));
        }
        transform
    }
}

/// One entry transition: from a keyframe to rest
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: Keyframe,
    /// Used for non-spring easings
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    /// Effective duration, derived from the spring when there is one
    pub fn duration_ms(&self) -> u32 {
        self.easing.settle_ms().unwrap_or(self.duration_ms)
    }
}

/// Fixed per-child delay offsets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggerPlan {
    pub base_delay_ms: u32,
    pub interval_ms: u32,
}

/// A child's slot in a stagger sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledChild {
    pub index: usize,
    pub delay_ms: u32,
}

impl StaggerPlan {
    pub const fn new(base_delay_ms: u32, interval_ms: u32) -> Self {
        Self {
            base_delay_ms,
            interval_ms,
        }
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay_ms
            .saturating_add(index.saturating_mul(self.interval_ms))
    }

    pub fn schedule(&self, children: usize) -> Vec<ScheduledChild> {
        (0..children)
            .map(|index| ScheduledChild {
                index,
                delay_ms: self.delay_for(index),
            })
            .collect()
    }

    /// Time from reveal until the last of `children` has settled
    pub fn total_ms(&self, children: usize, transition: &Transition) -> u32 {
        if children == 0 {
            return 0;
        }
        self.delay_for(children - 1)
            .saturating_add(transition.duration_ms())
    }
}

/// Motion preset for one revealable section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionMotion {
    /// Heading block and other non-staggered content
    pub heading: Transition,
    /// Cards and other staggered children
    pub child: Transition,
    pub stagger: StaggerPlan,
    /// Nested list items inside a child (e.g. a track's topics)
    pub item: Transition,
    pub item_stagger: StaggerPlan,
}

impl SectionMotion {
    /// Fade-up headings, spring cards staggered 100ms apart
    pub const fn cards() -> Self {
        Self {
            heading: Transition {
                from: Keyframe::rise(20.0),
                duration_ms: 600,
                easing: Easing::EaseOut,
            },
            child: Transition {
                from: Keyframe::rise(20.0),
                duration_ms: 600,
                easing: Easing::spring(100.0, 12.0),
            },
            stagger: StaggerPlan::new(100, 100),
            item: Transition {
                from: Keyframe {
                    opacity: 0.0,
                    offset_x: -10.0,
                    offset_y: 0.0,
                    scale: 1.0,
                },
                duration_ms: 300,
                easing: Easing::EaseOut,
            },
            item_stagger: StaggerPlan::new(200, 100),
        }
    }

    /// Header entry: slides down on mount, nav links follow 100ms apart
    pub const fn header() -> Self {
        Self {
            heading: Transition {
                from: Keyframe {
                    opacity: 1.0,
                    offset_x: 0.0,
                    offset_y: -100.0,
                    scale: 1.0,
                },
                duration_ms: 500,
                easing: Easing::spring(100.0, 20.0),
            },
            child: Transition {
                from: Keyframe {
                    opacity: 0.0,
                    offset_x: 0.0,
                    offset_y: -20.0,
                    scale: 1.0,
                },
                duration_ms: 300,
                easing: Easing::EaseOut,
            },
            stagger: StaggerPlan::new(300, 100),
            item: Transition {
                from: Keyframe {
                    opacity: 0.0,
                    offset_x: 0.0,
                    offset_y: 0.0,
                    scale: 0.8,
                },
                duration_ms: 500,
                easing: Easing::EaseOut,
            },
            item_stagger: StaggerPlan::new(500, 0),
        }
    }

    /// Hero copy cascades in on mount, social icons pop in after
    pub const fn hero() -> Self {
        Self {
            heading: Transition {
                from: Keyframe {
                    opacity: 0.0,
                    offset_x: -50.0,
                    offset_y: 0.0,
                    scale: 1.0,
                },
                duration_ms: 800,
                easing: Easing::EaseOut,
            },
            child: Transition {
                from: Keyframe::rise(20.0),
                duration_ms: 500,
                easing: Easing::EaseOut,
            },
            stagger: StaggerPlan::new(200, 200),
            item: Transition {
                from: Keyframe {
                    opacity: 0.0,
                    offset_x: 0.0,
                    offset_y: 0.0,
                    scale: 0.0,
                },
                duration_ms: 400,
                easing: Easing::spring(260.0, 20.0),
            },
            item_stagger: StaggerPlan::new(1100, 100),
        }
    }

    /// Footer columns fade up, links slide in
    pub const fn footer() -> Self {
        Self {
            heading: Transition {
                from: Keyframe::fade(),
                duration_ms: 600,
                easing: Easing::EaseOut,
            },
            child: Transition {
                from: Keyframe::rise(20.0),
                duration_ms: 500,
                easing: Easing::EaseOut,
            },
            stagger: StaggerPlan::new(200, 200),
            item: Transition {
                from: Keyframe {
                    opacity: 0.0,
                    offset_x: -20.0,
                    offset_y: 0.0,
                    scale: 1.0,
                },
                duration_ms: 300,
                easing: Easing::EaseOut,
            },
            item_stagger: StaggerPlan::new(500, 100),
        }
    }

    /// Time until every child and nested item has settled
    pub fn settle_ms(&self, children: usize, items_per_child: usize) -> u32 {
        let heading = self.heading.duration_ms();
        let cards = self.stagger.total_ms(children, &self.child);
        let items = if children == 0 || items_per_child == 0 {
            0
        } else {
            self.stagger
                .delay_for(children - 1)
                .saturating_add(self.item_stagger.total_ms(items_per_child, &self.item))
        };
        heading.max(cards).max(items)
    }
}

/// Where a transition is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not armed yet: server markup and the first client render sit at rest
    /// so content stays visible if the client never hydrates
    Static,
    /// Armed, before reveal: held at the starting keyframe
    Hidden,
    /// Revealed and interpolating toward rest
    Entering,
    /// Done; plain static layout
    Settled,
}

impl Phase {
    pub fn from_flags(armed: bool, revealed: bool, settled: bool) -> Self {
        match (armed, revealed, settled) {
            (false, ..) => Phase::Static,
            (true, false, _) => Phase::Hidden,
            (true, true, false) => Phase::Entering,
            (true, true, true) => Phase::Settled,
        }
    }
}

/// Inline style for one child at `delay_ms`
///
/// With `reduced_motion` set the child jumps straight to rest.
pub fn inline_style(transition: &Transition, delay_ms: u32, phase: Phase, reduced_motion: bool) -> String {
    match phase {
        Phase::Static | Phase::Settled => String::new(),
        Phase::Hidden if reduced_motion => String::new(),
        Phase::Hidden => format!(
            "opacity: {}; transform: {}; will-change: opacity, transform;",
            transition.from.opacity,
            transition.from.transform_css()
        ),
        Phase::Entering if reduced_motion => String::new(),
        Phase::Entering => {
            let duration = transition.duration_ms();
            let easing = transition.easing.css();
            format!(
                "opacity: {}; transform: {}; will-change: opacity, transform; \
                 transition: opacity {duration}ms {easing} {delay_ms}ms, transform {duration}ms {easing} {delay_ms}ms;",
                Keyframe::REST.opacity,
                Keyframe::REST.transform_css()
            )
        }
    }
}

/// One-shot sequencer guarding a section's stagger schedule
///
/// `start` yields the schedule on the first reveal only, so a replayed reveal
/// never schedules children twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaggerSequencer {
    started: bool,
}

impl StaggerSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn start(&mut self, plan: &StaggerPlan, children: usize) -> Option<Vec<ScheduledChild>> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(plan.schedule(children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_formula() {
        let plan = StaggerPlan::new(50, 80);
        assert_eq!(plan.delay_for(0), 50);
        assert_eq!(plan.delay_for(1), 130);
        assert_eq!(plan.delay_for(4), 370);
    }

    #[test]
    fn test_schedule_is_monotonic() {
        let plan = SectionMotion::cards().stagger;
        let schedule = plan.schedule(12);

        assert_eq!(schedule.len(), 12);
        for (k, child) in schedule.iter().enumerate() {
            assert_eq!(child.index, k);
        }
        assert!(schedule.windows(2).all(|w| w[0].delay_ms <= w[1].delay_ms));
    }

    #[test]
    fn test_zero_interval_schedules_together() {
        let schedule = StaggerPlan::new(500, 0).schedule(3);
        assert!(schedule.iter().all(|c| c.delay_ms == 500));
    }

    #[test]
    fn test_delay_saturates() {
        let plan = StaggerPlan::new(u32::MAX - 1, 10);
        assert_eq!(plan.delay_for(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_spring_settle_time() {
        // k=100, c=12: zeta=0.6, omega=10, decay=6/s -> ~667ms
        let spring = Easing::spring(100.0, 12.0);
        assert!((spring.damping_ratio().unwrap() - 0.6).abs() < 1e-9);
        assert_eq!(spring.settle_ms(), Some(667));

        // Critically damped: decay = omega
        assert_eq!(Easing::spring(100.0, 20.0).settle_ms(), Some(400));

        assert_eq!(Easing::EaseOut.settle_ms(), None);
    }

    #[test]
    fn test_spring_settle_clamped() {
        assert_eq!(Easing::spring(1000.0, 1000.0).settle_ms(), Some(MAX_SPRING_MS));
        assert_eq!(Easing::spring(10_000.0, 400.0).settle_ms(), Some(MIN_SPRING_MS));
        assert_eq!(Easing::spring(100.0, 0.0).settle_ms(), Some(MAX_SPRING_MS));
    }

    #[test]
    fn test_transition_duration_prefers_spring() {
        let motion = SectionMotion::cards();
        assert_eq!(motion.heading.duration_ms(), 600);
        assert_eq!(motion.child.duration_ms(), 667);
    }

    #[test]
    fn test_total_ms() {
        let motion = SectionMotion::cards();
        assert_eq!(motion.stagger.total_ms(0, &motion.child), 0);
        // last child starts at 100 + 2*100, runs 667ms
        assert_eq!(motion.stagger.total_ms(3, &motion.child), 967);
    }

    #[test]
    fn test_settle_covers_nested_items() {
        let motion = SectionMotion::cards();
        let settle = motion.settle_ms(5, 9);
        let last_item = motion.stagger.delay_for(4) + motion.item_stagger.delay_for(8);
        assert!(settle >= last_item + motion.item.duration_ms());
        assert!(settle >= motion.stagger.total_ms(5, &motion.child));
    }

    #[test]
    fn test_hidden_style_holds_start_keyframe() {
        let style = inline_style(&SectionMotion::cards().child, 0, Phase::Hidden, false);
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("translate3d(0px, 20px, 0)"));
    }

    #[test]
    fn test_entering_style_targets_rest_with_delay() {
        let motion = SectionMotion::cards();
        let style = inline_style(&motion.child, 300, Phase::Entering, false);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("transform: none;"));
        assert!(style.contains("667ms"));
        assert!(style.contains(" 300ms"));
    }

    #[test]
    fn test_settled_and_reduced_motion_are_static() {
        let transition = SectionMotion::cards().child;
        assert_eq!(inline_style(&transition, 0, Phase::Settled, false), "");
        assert_eq!(inline_style(&transition, 0, Phase::Hidden, true), "");
        assert_eq!(inline_style(&transition, 100, Phase::Entering, true), "");
    }

    #[test]
    fn test_phase_from_flags() {
        assert_eq!(Phase::from_flags(true, false, false), Phase::Hidden);
        assert_eq!(Phase::from_flags(true, false, true), Phase::Hidden);
        assert_eq!(Phase::from_flags(true, true, false), Phase::Entering);
        assert_eq!(Phase::from_flags(true, true, true), Phase::Settled);
    }

    #[test]
    fn test_unarmed_phase_renders_at_rest() {
        for (revealed, settled) in [(false, false), (true, false), (true, true)] {
            assert_eq!(Phase::from_flags(false, revealed, settled), Phase::Static);
        }
        let transition = SectionMotion::hero().heading;
        assert_eq!(inline_style(&transition, 0, Phase::Static, false), "");
    }

    #[test]
    fn test_sequencer_schedules_once() {
        let plan = StaggerPlan::new(0, 100);
        let mut sequencer = StaggerSequencer::new();

        let first = sequencer.start(&plan, 4).expect("first start schedules");
        assert_eq!(first.len(), 4);
        assert!(sequencer.has_started());
        assert!(sequencer.start(&plan, 4).is_none());
    }
}
