//! Browser side of the runtime: frame loop, intersection observers, pointer
//! tracking and the reduced-motion media query.
//!
//! JS callbacks are not `Send`, while Leptos cleanups must be. Each callback
//! therefore lives in a thread-local registry under a numeric handle, and
//! cleanups only carry the handle.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::html;
use leptos::prelude::*;
use portfolio_motion::VisibilityLatch;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type FrameCallback = Closure<dyn FnMut(f64)>;
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
type PointerCallback = Closure<dyn FnMut(web_sys::MouseEvent)>;

thread_local! {
    static FRAME: RefCell<Option<FrameCallback>> = const { RefCell::new(None) };
    static RUNNING: Cell<bool> = const { Cell::new(false) };
    static OBSERVERS: RefCell<HashMap<u64, (IntersectionObserver, ObserverCallback)>> =
        RefCell::new(HashMap::new());
    static POINTERS: RefCell<HashMap<u64, PointerCallback>> = RefCell::new(HashMap::new());
}

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

fn next_handle() -> u64 {
    NEXT_HANDLE.fetch_add(1, Ordering::Relaxed)
}

/// `performance.now()` in seconds.
pub(super) fn now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

pub(super) fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

// ============================================================================
// Frame loop
// ============================================================================

/// Make sure a frame is pending. The loop stops by itself once the scheduler
/// runs out of tracks.
pub(super) fn request_frames() {
    if RUNNING.with(|running| running.replace(true)) {
        return;
    }
    FRAME.with(|slot| {
        let mut slot = slot.borrow_mut();
        let callback = slot.get_or_insert_with(|| {
            Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>)
        });
        schedule(callback);
    });
}

fn on_frame(timestamp: f64) {
    let scheduler = super::scheduler();
    scheduler.tick(timestamp / 1000.0);
    if scheduler.is_idle() {
        RUNNING.with(|running| running.set(false));
        return;
    }
    FRAME.with(|slot| {
        if let Some(callback) = slot.borrow().as_ref() {
            schedule(callback);
        }
    });
}

fn schedule(callback: &FrameCallback) {
    let requested = web_sys::window()
        .map(|w| w.request_animation_frame(callback.as_ref().unchecked_ref()).is_ok())
        .unwrap_or(false);
    if !requested {
        RUNNING.with(|running| running.set(false));
    }
}

// ============================================================================
// Visibility
// ============================================================================

/// Feed intersection ratios of the element behind `node_ref` into `latch`
/// and publish its flag. The observer disconnects once the latch freezes and
/// is released when the owner is cleaned up.
pub(super) fn watch_visibility(
    node_ref: NodeRef<html::Div>,
    latch: VisibilityLatch,
    set_in_view: WriteSignal<bool>,
) {
    let handle = Arc::new(AtomicU64::new(0));
    let attached = handle.clone();

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        if attached.load(Ordering::Relaxed) != 0 {
            return;
        }
        if let Some(id) = observe(&element, latch.clone(), set_in_view) {
            attached.store(id, Ordering::Relaxed);
        }
    });

    on_cleanup(move || release_observer(handle.load(Ordering::Relaxed)));
}

fn observe(
    element: &web_sys::Element,
    mut latch: VisibilityLatch,
    set_in_view: WriteSignal<bool>,
) -> Option<u64> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if let Some(flag) = latch.observe(entry.intersection_ratio()) {
                    set_in_view.try_set(flag);
                }
            }
            if latch.is_frozen() {
                // The closure itself stays registered until cleanup; dropping
                // it here would free it while it runs.
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&latch_threshold(&latch));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);

    let id = next_handle();
    debug!(handle = id, "intersection observer attached");
    OBSERVERS.with(|map| map.borrow_mut().insert(id, (observer, callback)));
    Some(id)
}

fn latch_threshold(latch: &VisibilityLatch) -> wasm_bindgen::JsValue {
    // Zero never counts as visible, so ask for the first visible pixel.
    let threshold = latch.options().threshold;
    if threshold > 0.0 {
        threshold.into()
    } else {
        f64::MIN_POSITIVE.into()
    }
}

fn release_observer(id: u64) {
    if id == 0 {
        return;
    }
    if let Some((observer, _callback)) = OBSERVERS.with(|map| map.borrow_mut().remove(&id)) {
        observer.disconnect();
        debug!(handle = id, "intersection observer released");
    }
}

// ============================================================================
// Pointer
// ============================================================================

/// Publish the pointer position on every `mousemove` until cleanup.
pub(super) fn watch_pointer(set_pointer: WriteSignal<Option<(f64, f64)>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        set_pointer.try_set(Some((event.client_x() as f64, event.client_y() as f64)));
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    if window
        .add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }
    let id = next_handle();
    POINTERS.with(|map| map.borrow_mut().insert(id, callback));
    on_cleanup(move || release_pointer(id));
}

fn release_pointer(id: u64) {
    let Some(callback) = POINTERS.with(|map| map.borrow_mut().remove(&id)) else {
        return;
    };
    if let Some(window) = web_sys::window() {
        let _ = window
            .remove_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref());
    }
}
