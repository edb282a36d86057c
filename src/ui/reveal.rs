//! Reveal-on-scroll wiring for page sections
//!
//! Each section owns a [`RevealCoordinator`] in a signal. On the client an
//! `IntersectionObserver` feeds it intersection events; once it reports the
//! section revealed the observer is dropped and a timer marks the stagger
//! sequence settled. Both the observer and the timer live in owned guards that
//! are released in `on_cleanup`, so nothing fires after the section unmounts.
//!
//! Server markup and the first client render carry no hidden keyframe. The
//! page is armed after hydration, and only then do unrevealed elements take
//! their starting keyframe; if the client never hydrates, content stays at
//! rest. When observation is impossible (no `IntersectionObserver`, missing
//! anchor, constructor error) the section is revealed immediately.

use leptos::prelude::*;

use crate::core::motion::{Phase, inline_style};
use crate::core::{RevealCoordinator, RevealEvent, SectionMotion, Transition, TriggerOptions};

/// Attribute marking an element whose inline style is driven by a reveal
pub const REVEAL_ATTR: &str = "data-reveal";

/// Page-wide motion flags
#[derive(Clone, Copy)]
pub struct MotionPreference {
    /// Set once the client has hydrated; hidden keyframes apply only after
    pub armed: RwSignal<bool>,
    /// User's reduced-motion preference
    pub reduced: RwSignal<bool>,
}

/// Provide the motion flags to the page
///
/// Both start `false` so server and client markup agree; they are set after
/// hydration.
pub fn provide_motion_preference() -> MotionPreference {
    let armed = RwSignal::new(false);
    let reduced = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            reduced.set(prefers_reduced_motion());
            armed.set(true);
        });
    }

    let pref = MotionPreference { armed, reduced };
    provide_context(pref);
    pref
}

/// `(armed, reduced)`; without a provider the page is never armed
fn use_motion_flags() -> (Signal<bool>, Signal<bool>) {
    match use_context::<MotionPreference>() {
        Some(pref) => (pref.armed.into(), pref.reduced.into()),
        None => (Signal::stored(false), Signal::stored(false)),
    }
}

#[cfg(not(feature = "ssr"))]
fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Reactive handle to one section's reveal, shared with its children
#[derive(Clone, Copy)]
pub struct RevealScope {
    coordinator: RwSignal<RevealCoordinator>,
    revealed: Memo<bool>,
    settled: RwSignal<bool>,
    armed: Signal<bool>,
    reduced: Signal<bool>,
    pub motion: SectionMotion,
}

impl RevealScope {
    fn new(motion: SectionMotion) -> Self {
        let coordinator = RwSignal::new(RevealCoordinator::new(TriggerOptions::default()));
        let (armed, reduced) = use_motion_flags();
        Self {
            coordinator,
            revealed: Memo::new(move |_| coordinator.with(|c| c.is_revealed())),
            settled: RwSignal::new(false),
            armed,
            reduced,
            motion,
        }
    }

    pub fn phase(&self) -> Phase {
        Phase::from_flags(self.armed.get(), self.revealed.get(), self.settled.get())
    }

    /// Style closure for an element entering with `transition` after `delay_ms`
    pub fn style(
        self,
        transition: Transition,
        delay_ms: u32,
    ) -> impl Fn() -> String + Clone + Send + Sync + 'static {
        move || inline_style(&transition, delay_ms, self.phase(), self.reduced.get())
    }

    /// Heading block: enters at the reveal instant
    pub fn heading(self) -> impl Fn() -> String + Clone + Send + Sync + 'static {
        self.style(self.motion.heading, 0)
    }

    /// Staggered child at `index`
    pub fn child(self, index: usize) -> impl Fn() -> String + Clone + Send + Sync + 'static {
        self.style(self.motion.child, self.motion.stagger.delay_for(index))
    }

    /// Nested item `index` inside staggered child `parent`
    pub fn item(
        self,
        parent: usize,
        index: usize,
    ) -> impl Fn() -> String + Clone + Send + Sync + 'static {
        let delay = self
            .motion
            .stagger
            .delay_for(parent)
            .saturating_add(self.motion.item_stagger.delay_for(index));
        self.style(self.motion.item, delay)
    }

    #[cfg_attr(feature = "ssr", allow(dead_code))]
    fn handle(&self, event: RevealEvent) -> bool {
        self.coordinator
            .try_update(|c| c.handle(event))
            .unwrap_or(false)
    }
}

/// Reveal a section the first time element `#anchor` scrolls into view
///
/// `children` and `items_per_child` size the stagger sequence so the settle
/// timer fires after the last child has finished.
pub fn use_reveal(
    anchor: impl Into<String>,
    motion: SectionMotion,
    children: usize,
    items_per_child: usize,
) -> RevealScope {
    let scope = RevealScope::new(motion);
    let anchor = anchor.into();

    #[cfg(not(feature = "ssr"))]
    client::observe(scope, anchor, children, items_per_child);

    #[cfg(feature = "ssr")]
    {
        let _ = (anchor, children, items_per_child);
    }

    scope
}

/// Reveal on mount, for content that is in view on page load
pub fn use_mount_reveal(motion: SectionMotion, children: usize, items_per_child: usize) -> RevealScope {
    let scope = RevealScope::new(motion);

    #[cfg(not(feature = "ssr"))]
    client::reveal_on_mount(scope, children, items_per_child);

    #[cfg(feature = "ssr")]
    {
        let _ = (children, items_per_child);
    }

    scope
}

#[cfg(not(feature = "ssr"))]
mod client {
    use gloo_timers::callback::Timeout;
    use leptos::logging::warn;
    use leptos::prelude::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::RevealScope;
    use crate::core::{RevealEvent, RevealState, StaggerSequencer, TriggerOptions};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// A live observer and its callback; disconnects when dropped
    struct ObserverGuard {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl ObserverGuard {
        fn observe(
            element: &web_sys::Element,
            trigger: &TriggerOptions,
            mut on_entry: impl FnMut(bool, f64) + 'static,
        ) -> Result<Self, JsValue> {
            let callback: ObserverCallback = Closure::new(
                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                            on_entry(entry.is_intersecting(), entry.intersection_ratio());
                        }
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_root_margin(&trigger.root_margin.to_css());
            init.set_threshold(&JsValue::from_f64(trigger.threshold));

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            observer.observe(element);

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for ObserverGuard {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    fn observer_available(window: &web_sys::Window) -> bool {
        js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    }

    pub(super) fn observe(
        scope: RevealScope,
        anchor: String,
        children: usize,
        items_per_child: usize,
    ) {
        let guard = StoredValue::new_local(None::<ObserverGuard>);
        let trigger = scope.coordinator.with_untracked(|c| *c.trigger());

        Effect::new(move |_| {
            if !scope.armed.get() {
                return;
            }
            if scope.coordinator.with_untracked(|c| c.state()) != RevealState::Init {
                return;
            }

            let Some(window) = web_sys::window() else {
                scope.handle(RevealEvent::RevealNow);
                return;
            };
            if !observer_available(&window) {
                warn!("IntersectionObserver unavailable, revealing #{anchor}");
                scope.handle(RevealEvent::RevealNow);
                return;
            }
            let Some(element) = window
                .document()
                .and_then(|document| document.get_element_by_id(&anchor))
            else {
                warn!("reveal target #{anchor} not found, revealing");
                scope.handle(RevealEvent::RevealNow);
                return;
            };

            let observed = ObserverGuard::observe(&element, &trigger, move |is_intersecting, ratio| {
                scope.handle(RevealEvent::Intersect {
                    is_intersecting,
                    ratio,
                });
            });
            match observed {
                Ok(observer) => {
                    scope.handle(RevealEvent::Observe);
                    guard.set_value(Some(observer));
                }
                Err(err) => {
                    warn!("IntersectionObserver failed for #{anchor}: {err:?}");
                    scope.handle(RevealEvent::RevealNow);
                }
            }
        });

        // Once revealed the observer has nothing left to report
        Effect::new(move |_| {
            if scope.revealed.get() {
                guard.set_value(None);
            }
        });

        settle_after_reveal(scope, children, items_per_child);

        on_cleanup(move || {
            scope.handle(RevealEvent::Dispose);
            drop(guard.try_update_value(|g| g.take()));
        });
    }

    pub(super) fn reveal_on_mount(scope: RevealScope, children: usize, items_per_child: usize) {
        let frame = StoredValue::new(None::<AnimationFrameRequestHandle>);

        // Two frames: the first paints the hidden keyframe, the second reveals
        Effect::new(move |_| {
            if !scope.armed.get() {
                return;
            }
            let painted = request_animation_frame_with_handle(move || {
                let reveal = request_animation_frame_with_handle(move || {
                    frame.try_update_value(|f| *f = None);
                    scope.handle(RevealEvent::RevealNow);
                });
                match reveal {
                    Ok(handle) => {
                        frame.try_update_value(|f| *f = Some(handle));
                    }
                    Err(_) => {
                        scope.handle(RevealEvent::RevealNow);
                    }
                }
            });
            match painted {
                Ok(handle) => frame.set_value(Some(handle)),
                Err(err) => {
                    warn!("requestAnimationFrame failed: {err:?}, revealing");
                    scope.handle(RevealEvent::RevealNow);
                }
            }
        });

        settle_after_reveal(scope, children, items_per_child);

        on_cleanup(move || {
            scope.handle(RevealEvent::Dispose);
            if let Some(handle) = frame.try_update_value(|f| f.take()).flatten() {
                handle.cancel();
            }
        });
    }

    /// Start the settle timer once, on the first reveal
    fn settle_after_reveal(scope: RevealScope, children: usize, items_per_child: usize) {
        let sequencer = StoredValue::new(StaggerSequencer::new());
        let timer = StoredValue::new_local(None::<Timeout>);
        let plan = scope.motion.stagger;

        Effect::new(move |_| {
            if !scope.revealed.get() {
                return;
            }
            let Some(schedule) = sequencer
                .try_update_value(|s| s.start(&plan, children))
                .flatten()
            else {
                return;
            };

            let settle_ms = scope.motion.settle_ms(schedule.len(), items_per_child);
            let settled = scope.settled;
            timer.set_value(Some(Timeout::new(settle_ms, move || {
                let _ = settled.try_set(true);
            })));
        });

        on_cleanup(move || {
            drop(timer.try_update_value(|t| t.take()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_keyframe_waits_for_arming() {
        Owner::new().with(|| {
            let pref = provide_motion_preference();
            let scope = use_reveal("about", SectionMotion::cards(), 3, 0);
            let child = scope.child(1);

            assert_eq!(scope.phase(), Phase::Static);
            assert_eq!(child(), "");

            pref.armed.set(true);
            assert_eq!(scope.phase(), Phase::Hidden);
            assert!(child().contains("opacity: 0;"));

            scope.handle(RevealEvent::RevealNow);
            assert_eq!(scope.phase(), Phase::Entering);
            assert!(child().contains("transition: opacity"));
        });
    }

    #[test]
    fn test_reduced_motion_never_hides() {
        Owner::new().with(|| {
            let pref = provide_motion_preference();
            let scope = use_mount_reveal(SectionMotion::header(), 4, 1);

            pref.reduced.set(true);
            pref.armed.set(true);
            assert_eq!(scope.heading()(), "");
            assert_eq!(scope.item(0, 0)(), "");
        });
    }

    #[test]
    fn test_without_provider_stays_at_rest() {
        Owner::new().with(|| {
            let scope = use_reveal("tracks", SectionMotion::cards(), 5, 9);
            assert_eq!(scope.phase(), Phase::Static);
            assert_eq!(scope.item(4, 8)(), "");
        });
    }
}
