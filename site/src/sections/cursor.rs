//! Neon cursor: a dot pinned to the pointer and a ring that trails it on a
//! spring. Hidden until the pointer first moves.

use leptos::prelude::*;
use portfolio_motion::{Motion, TrackId, Transition};

use crate::runtime::{MotionScope, scheduler, use_pointer};

const RING_SPRING: Transition = Transition::spring(500.0, 28.0);

fn translate(x: f64, y: f64) -> String {
    format!("transform: translate3d({x:.1}px, {y:.1}px, 0);")
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let scope = MotionScope::new();
    let pointer = use_pointer();
    let (ring, set_ring) = signal((0.0_f64, 0.0_f64));

    Effect::new(move |previous: Option<Option<TrackId>>| {
        let target = pointer.get()?;
        match previous.flatten() {
            Some(id) => {
                scheduler().cancel(id);
            }
            // First move: start the ring under the pointer instead of
            // flying in from the corner.
            None if ring.get_untracked() == (0.0, 0.0) => {
                set_ring.set(target);
                return None;
            }
            None => {}
        }
        scope.play(Motion::to(ring.get_untracked(), target, RING_SPRING), set_ring)
    });

    view! {
        <div class="cursor-layer" class:hidden=move || pointer.get().is_none() aria-hidden="true">
            <div
                class="cursor-ring"
                style=move || {
                    let (x, y) = ring.get();
                    translate(x, y)
                }
            ></div>
            <div
                class="cursor-dot"
                style=move || pointer.get().map(|(x, y)| translate(x, y)).unwrap_or_default()
            ></div>
        </div>
    }
}
