//! Glue between the motion scheduler and Leptos.
//!
//! One [`SharedScheduler`] lives per thread. Components open a
//! [`MotionScope`] on mount; the scope closes itself when the owning reactive
//! node is cleaned up, which drops every track the component started. In the
//! browser, a `requestAnimationFrame` loop steps the scheduler while it has
//! work. Natively nothing drives the clock, so signals keep the values they
//! were created with and render as static markup.

#[cfg(target_arch = "wasm32")]
mod browser;

use leptos::html;
use leptos::prelude::*;
use portfolio_motion::{
    Lerp, Motion, MotionConfig, ObserverOptions, ScopeId, SharedScheduler, TrackId, Transition,
    VisibilityLatch,
};
use tracing::warn;

/// Config compiled into the page.
const EMBEDDED_CONFIG: &str = include_str!("../../portfolio.toml");

thread_local! {
    static SCHEDULER: SharedScheduler = SharedScheduler::new();
}

/// Handle to this thread's scheduler.
pub fn scheduler() -> SharedScheduler {
    SCHEDULER.with(Clone::clone)
}

/// Page clock in seconds. Always zero outside the browser.
pub fn now() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        browser::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

fn wake() {
    #[cfg(target_arch = "wasm32")]
    browser::request_frames();
}

/// Config for the running page: the embedded `portfolio.toml`, with reduced
/// motion forced on when the browser asks for it.
pub fn site_config() -> MotionConfig {
    #[allow(unused_mut)]
    let mut config = match MotionConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "embedded config rejected, using defaults");
            MotionConfig::default()
        }
    };
    #[cfg(target_arch = "wasm32")]
    if browser::prefers_reduced_motion() {
        config.reduced_motion = true;
    }
    config
}

/// Config provided by the root, or defaults when rendered standalone.
pub fn use_motion_config() -> MotionConfig {
    use_context::<MotionConfig>().unwrap_or_default()
}

/// The motion tracks owned by one mounted component.
#[derive(Debug, Clone, Copy)]
pub struct MotionScope {
    id: ScopeId,
    reduced: bool,
}

impl MotionScope {
    /// Open a scope that closes with the current reactive owner.
    pub fn new() -> Self {
        let reduced = use_motion_config().reduced_motion;
        let id = scheduler().open_scope();
        on_cleanup(move || {
            scheduler().close_scope(id);
        });
        Self { id, reduced }
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn reduced(&self) -> bool {
        self.reduced
    }

    /// Play `motion` into `set`. With reduced motion the target is applied at
    /// once and nothing is scheduled.
    pub fn play<T>(&self, motion: Motion<T>, set: WriteSignal<T>) -> Option<TrackId>
    where
        T: Lerp + Send + Sync + 'static,
    {
        if self.reduced {
            set.try_set(motion.target().clone());
            return None;
        }
        let track = scheduler().play(self.id, now(), motion, move |value: &T| {
            set.try_set(value.clone());
        });
        if track.is_some() {
            wake();
        }
        track
    }

    /// A value that animates between `off` and `on` as `flag` changes.
    ///
    /// Each change retargets from wherever the value currently is, so a
    /// pointer leaving mid-animation reverses smoothly.
    pub fn toggle<T>(
        &self,
        flag: impl Into<Signal<bool>>,
        off: T,
        on: T,
        transition: Transition,
    ) -> ReadSignal<T>
    where
        T: Lerp + Send + Sync + 'static,
    {
        let flag = flag.into();
        let start = flag.get_untracked();
        let (value, set_value) = signal(if start { on.clone() } else { off.clone() });
        let scope = *self;

        Effect::new(move |prev: Option<(bool, Option<TrackId>)>| {
            let (was_on, track) = prev.unwrap_or((start, None));
            let is_on = flag.get();
            if is_on == was_on {
                return (is_on, track);
            }
            if let Some(id) = track {
                scheduler().cancel(id);
            }
            let target = if is_on { on.clone() } else { off.clone() };
            let from = value.get_untracked();
            (is_on, scope.play(Motion::to(from, target, transition), set_value))
        });

        value
    }

    /// A one-shot motion from `from` to `to`, started now. With reduced
    /// motion the value is simply `to`.
    pub fn enter<T>(&self, from: T, to: T, transition: Transition) -> ReadSignal<T>
    where
        T: Lerp + Send + Sync + 'static,
    {
        if self.reduced {
            return signal(to).0;
        }
        let (value, set_value) = signal(from.clone());
        self.play(Motion::to(from, to, transition), set_value);
        value
    }

    /// A looping background motion, started now and running until the scope
    /// closes. With reduced motion nothing is scheduled and the value rests
    /// on the first frame.
    pub fn ambient<T>(&self, motion: Motion<T>) -> ReadSignal<T>
    where
        T: Lerp + Send + Sync + 'static,
    {
        let rest = motion.initial().clone();
        self.ambient_at_rest(motion, rest)
    }

    /// Like [`ambient`](Self::ambient), but with reduced motion the value
    /// rests on `rest` instead of the first frame.
    pub fn ambient_at_rest<T>(&self, motion: Motion<T>, rest: T) -> ReadSignal<T>
    where
        T: Lerp + Send + Sync + 'static,
    {
        if self.reduced {
            return signal(rest).0;
        }
        let (value, set_value) = signal(motion.initial().clone());
        self.play(motion, set_value);
        value
    }
}

impl Default for MotionScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Trigger-once "in view" flag for the element bound to the returned ref.
///
/// With reduced motion the flag starts true and no observer is attached.
pub fn use_in_view(options: ObserverOptions) -> (NodeRef<html::Div>, ReadSignal<bool>) {
    let reduced = use_motion_config().reduced_motion;
    let latch = if reduced {
        VisibilityLatch::already_visible(options)
    } else {
        VisibilityLatch::new(options).unwrap_or_else(|e| {
            warn!(error = %e, "invalid observer options, using section defaults");
            VisibilityLatch::already_visible(ObserverOptions::SECTION)
        })
    };

    let node_ref = NodeRef::<html::Div>::new();
    let (in_view, set_in_view) = signal(latch.in_view());

    #[cfg(target_arch = "wasm32")]
    if !latch.is_frozen() {
        browser::watch_visibility(node_ref, latch, set_in_view);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_in_view;

    (node_ref, in_view)
}

/// Pointer position in viewport pixels, `None` until the pointer first moves.
pub fn use_pointer() -> ReadSignal<Option<(f64, f64)>> {
    let (pointer, set_pointer) = signal(None::<(f64, f64)>);

    #[cfg(target_arch = "wasm32")]
    browser::watch_pointer(set_pointer);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_pointer;

    pointer
}
