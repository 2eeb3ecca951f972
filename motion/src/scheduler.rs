//! Frame scheduler with scope-based teardown.
//!
//! Every mounted component opens a [`ScopeId`] and plays its motions inside
//! it. Closing the scope on unmount drops all of them, looping ones included,
//! and no sink of a closed scope is called again. The host drives
//! [`SharedScheduler::tick`] from its frame callback while
//! [`SharedScheduler::is_idle`] is false.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::keyframes::Lerp;
use crate::motion::Motion;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Owner of a group of tracks, usually one mounted component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

/// Handle to one playing motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(u64);

trait Animate {
    /// Deliver the frame at `elapsed`; returns true when finished.
    fn step(&mut self, elapsed: f64) -> bool;
}

struct Bound<T, F> {
    motion: Motion<T>,
    sink: F,
}

impl<T: Lerp, F: FnMut(&T)> Animate for Bound<T, F> {
    fn step(&mut self, elapsed: f64) -> bool {
        let frame = self.motion.sample(elapsed);
        (self.sink)(&frame.value);
        frame.done
    }
}

struct Track {
    id: TrackId,
    scope: ScopeId,
    started_at: f64,
    animator: Box<dyn Animate>,
}

impl Track {
    fn step(&mut self, now: f64) -> bool {
        self.animator.step(now - self.started_at)
    }
}

/// All running tracks, grouped by scope.
#[derive(Default)]
pub struct Scheduler {
    live: HashSet<ScopeId>,
    tracks: Vec<Track>,
    cancelled: HashSet<TrackId>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new scope that motions can be played into.
    pub fn open_scope(&mut self) -> ScopeId {
        let scope = ScopeId(next_id());
        self.live.insert(scope);
        debug!(scope = scope.0, "motion scope opened");
        scope
    }

    /// Close a scope and drop every track in it. Returns how many were dropped.
    pub fn close_scope(&mut self, scope: ScopeId) -> usize {
        if !self.live.remove(&scope) {
            return 0;
        }
        let before = self.tracks.len();
        self.tracks.retain(|t| t.scope != scope);
        let dropped = before - self.tracks.len();
        debug!(scope = scope.0, dropped, "motion scope closed");
        dropped
    }

    pub fn is_live(&self, scope: ScopeId) -> bool {
        self.live.contains(&scope)
    }

    /// Start `motion` at time `now`, feeding each frame to `sink`.
    ///
    /// The first frame is delivered immediately. Returns `None` when the scope
    /// is already closed or the motion finished on its first frame.
    pub fn play<T, F>(
        &mut self,
        scope: ScopeId,
        now: f64,
        motion: Motion<T>,
        sink: F,
    ) -> Option<TrackId>
    where
        T: Lerp + 'static,
        F: FnMut(&T) + 'static,
    {
        if !self.is_live(scope) {
            trace!(scope = scope.0, "play into closed scope ignored");
            return None;
        }
        let mut track = Track {
            id: TrackId(next_id()),
            scope,
            started_at: now,
            animator: Box::new(Bound { motion, sink }),
        };
        if track.step(now) {
            return None;
        }
        let id = track.id;
        self.tracks.push(track);
        Some(id)
    }

    /// Stop one track. Its sink is not called again.
    pub fn cancel(&mut self, id: TrackId) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id != id);
        if self.tracks.len() == before {
            // May be mid-tick inside a SharedScheduler.
            self.cancelled.insert(id);
            false
        } else {
            true
        }
    }

    /// Advance every track to `now`. Returns the number of frames delivered.
    pub fn tick(&mut self, now: f64) -> usize {
        let delivered = self.tracks.len();
        self.tracks.retain_mut(|track| !track.step(now));
        self.cancelled.clear();
        delivered
    }

    pub fn is_idle(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of running tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of running tracks owned by `scope`.
    pub fn tracks_in(&self, scope: ScopeId) -> usize {
        self.tracks.iter().filter(|t| t.scope == scope).count()
    }

    fn take_tracks(&mut self) -> Vec<Track> {
        std::mem::take(&mut self.tracks)
    }

    fn accepts(&self, track: &Track) -> bool {
        self.is_live(track.scope) && !self.cancelled.contains(&track.id)
    }

    /// Put in-flight tracks back after a shared tick, dropping any that were
    /// closed or cancelled while their sinks ran.
    fn restore(&mut self, mut in_flight: Vec<Track>) {
        in_flight.retain(|t| self.live.contains(&t.scope) && !self.cancelled.contains(&t.id));
        in_flight.append(&mut self.tracks);
        self.tracks = in_flight;
        self.cancelled.clear();
    }
}

/// Single-threaded handle to a [`Scheduler`] that sinks may call back into.
///
/// While a tick runs, the scheduler is not borrowed, so a sink can open or
/// close scopes and play or cancel motions. Tracks belonging to a scope that
/// closes mid-tick are skipped for the rest of that tick.
#[derive(Clone, Default)]
pub struct SharedScheduler {
    inner: Rc<RefCell<Scheduler>>,
    ticking: Rc<Cell<bool>>,
}

impl SharedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_scope(&self) -> ScopeId {
        self.inner.borrow_mut().open_scope()
    }

    pub fn close_scope(&self, scope: ScopeId) -> usize {
        self.inner.borrow_mut().close_scope(scope)
    }

    pub fn is_live(&self, scope: ScopeId) -> bool {
        self.inner.borrow().is_live(scope)
    }

    pub fn play<T, F>(
        &self,
        scope: ScopeId,
        now: f64,
        motion: Motion<T>,
        sink: F,
    ) -> Option<TrackId>
    where
        T: Lerp + 'static,
        F: FnMut(&T) + 'static,
    {
        // The first frame runs the sink, so build the track outside the borrow.
        if !self.inner.borrow().is_live(scope) {
            return None;
        }
        let mut track = Track {
            id: TrackId(next_id()),
            scope,
            started_at: now,
            animator: Box::new(Bound { motion, sink }),
        };
        if track.step(now) {
            return None;
        }
        let id = track.id;
        let mut sched = self.inner.borrow_mut();
        if !sched.accepts(&track) {
            return None;
        }
        sched.tracks.push(track);
        Some(id)
    }

    pub fn cancel(&self, id: TrackId) -> bool {
        self.inner.borrow_mut().cancel(id)
    }

    /// Advance every track to `now`. Re-entrant calls are no-ops.
    pub fn tick(&self, now: f64) -> usize {
        if self.ticking.replace(true) {
            return 0;
        }
        let mut in_flight = match self.inner.try_borrow_mut() {
            Ok(mut sched) => sched.take_tracks(),
            Err(_) => {
                self.ticking.set(false);
                return 0;
            }
        };

        let mut delivered = 0;
        in_flight.retain_mut(|track| {
            if !self.inner.borrow().accepts(track) {
                return false;
            }
            delivered += 1;
            !track.step(now)
        });

        self.inner.borrow_mut().restore(in_flight);
        self.ticking.set(false);
        delivered
    }

    pub fn is_idle(&self) -> bool {
        self.inner.borrow().is_idle()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn tracks_in(&self, scope: ScopeId) -> usize {
        self.inner.borrow().tracks_in(scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyframes::Keyframes;
    use crate::pose::Pose;
    use crate::stagger::Stagger;
    use crate::transition::Transition;

    fn float_loop() -> Motion<f64> {
        Motion::new(
            Keyframes::pulse(-10.0, 10.0),
            Transition::tween(4.0).forever(),
        )
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut(&f64) + 'static) {
        let count = Rc::new(Cell::new(0));
        let sink_count = count.clone();
        (count, move |_: &f64| sink_count.set(sink_count.get() + 1))
    }

    #[test]
    fn play_delivers_first_frame_immediately() {
        let mut sched = Scheduler::new();
        let scope = sched.open_scope();
        let (count, sink) = counter();
        assert!(sched.play(scope, 0.0, float_loop(), sink).is_some());
        assert_eq!(count.get(), 1);
        assert_eq!(sched.tracks_in(scope), 1);
    }

    #[test]
    fn finite_tracks_are_removed_when_done() {
        let mut sched = Scheduler::new();
        let scope = sched.open_scope();
        let last = Rc::new(Cell::new(f64::NAN));
        let sink_last = last.clone();
        let motion = Motion::to(0.0, 1.0, Transition::tween(0.5));
        sched.play(scope, 10.0, motion, move |v: &f64| sink_last.set(*v));

        sched.tick(10.25);
        assert!(!sched.is_idle());
        sched.tick(10.6);
        assert!(sched.is_idle());
        assert_eq!(last.get(), 1.0);
    }

    #[test]
    fn instant_motion_is_never_stored() {
        let mut sched = Scheduler::new();
        let scope = sched.open_scope();
        let (count, sink) = counter();
        let id = sched.play(scope, 0.0, Motion::to(0.0, 1.0, Transition::instant()), sink);
        assert_eq!(id, None);
        assert_eq!(count.get(), 1);
        assert!(sched.is_idle());
    }

    #[test]
    fn no_frames_after_scope_closes() {
        let mut sched = Scheduler::new();
        let scope = sched.open_scope();
        let (count, sink) = counter();
        sched.play(scope, 0.0, float_loop(), sink);
        sched.tick(0.016);
        sched.tick(0.032);
        let seen = count.get();

        assert_eq!(sched.close_scope(scope), 1);
        for i in 0..100 {
            sched.tick(1.0 + i as f64 * 0.016);
        }
        assert_eq!(count.get(), seen);
        assert!(sched.is_idle());
    }

    #[test]
    fn closing_one_scope_leaves_others_running() {
        let mut sched = Scheduler::new();
        let a = sched.open_scope();
        let b = sched.open_scope();
        let (count_a, sink_a) = counter();
        let (count_b, sink_b) = counter();
        sched.play(a, 0.0, float_loop(), sink_a);
        sched.play(b, 0.0, float_loop(), sink_b);

        sched.close_scope(a);
        sched.tick(0.5);
        assert_eq!(count_a.get(), 1);
        assert_eq!(count_b.get(), 2);
    }

    #[test]
    fn play_into_closed_scope_is_ignored() {
        let mut sched = Scheduler::new();
        let scope = sched.open_scope();
        sched.close_scope(scope);
        let (count, sink) = counter();
        assert_eq!(sched.play(scope, 0.0, float_loop(), sink), None);
        assert_eq!(count.get(), 0);
        assert_eq!(sched.close_scope(scope), 0);
    }

    #[test]
    fn cancel_stops_a_single_track() {
        let mut sched = Scheduler::new();
        let scope = sched.open_scope();
        let (count, sink) = counter();
        let id = sched.play(scope, 0.0, float_loop(), sink).unwrap();
        assert!(sched.cancel(id));
        sched.tick(1.0);
        assert_eq!(count.get(), 1);
        assert!(!sched.cancel(id));
    }

    #[test]
    fn staggered_entrances_start_in_index_order() {
        let mut sched = Scheduler::new();
        let scope = sched.open_scope();
        let stagger = Stagger::default();
        let hidden = Pose::IDENTITY.with_y(100.0).with_opacity(0.0).with_scale(0.3);
        let poses: Vec<Rc<Cell<Pose>>> = (0..8).map(|_| Rc::new(Cell::new(hidden))).collect();

        for (i, slot) in poses.iter().enumerate() {
            let slot = slot.clone();
            let motion = Motion::to(hidden, Pose::IDENTITY, Transition::spring(120.0, 15.0))
                .delayed(stagger.delay_for(i));
            sched.play(scope, 0.0, motion, move |p: &Pose| slot.set(*p));
        }

        // Between onsets of item 2 and item 3.
        sched.tick(0.65);
        let moved: Vec<bool> = poses.iter().map(|p| p.get() != hidden).collect();
        assert_eq!(moved, vec![true, true, true, false, false, false, false, false]);

        sched.tick(20.0);
        assert!(sched.is_idle());
        for slot in &poses {
            assert_eq!(slot.get().opacity, 1.0);
            assert_eq!(slot.get().scale, 1.0);
        }
    }

    #[test]
    fn shared_close_during_tick_silences_rest_of_scope() {
        let shared = SharedScheduler::new();
        let scope = shared.open_scope();

        // First track closes its own scope on its second frame.
        let closer = shared.clone();
        let frames = Rc::new(Cell::new(0));
        let closer_frames = frames.clone();
        shared.play(scope, 0.0, float_loop(), move |_: &f64| {
            closer_frames.set(closer_frames.get() + 1);
            if closer_frames.get() == 2 {
                closer.close_scope(scope);
            }
        });
        let (count, sink) = counter();
        shared.play(scope, 0.0, float_loop(), sink);
        assert_eq!(count.get(), 1);

        shared.tick(0.1);
        assert_eq!(frames.get(), 2);
        assert_eq!(count.get(), 1, "second track ran after its scope closed");
        assert!(shared.is_idle());

        shared.tick(0.2);
        assert_eq!(frames.get(), 2);
    }

    #[test]
    fn shared_sink_may_play_new_tracks() {
        let shared = SharedScheduler::new();
        let scope = shared.open_scope();
        let spawner = shared.clone();
        let spawned = Rc::new(Cell::new(false));
        let flag = spawned.clone();
        shared.play(scope, 0.0, Motion::to(0.0, 1.0, Transition::tween(0.1)), move |v: &f64| {
            if *v >= 1.0 && !flag.get() {
                flag.set(true);
                spawner.play(scope, 1.0, float_loop(), |_: &f64| {});
            }
        });

        shared.tick(1.0);
        assert!(spawned.get());
        assert_eq!(shared.tracks_in(scope), 1);
    }

    #[test]
    fn shared_reentrant_tick_is_a_no_op() {
        let shared = SharedScheduler::new();
        let scope = shared.open_scope();
        let inner = shared.clone();
        let nested = Rc::new(Cell::new(usize::MAX));
        let nested_out = nested.clone();
        shared.play(scope, 0.0, float_loop(), move |_: &f64| {
            nested_out.set(inner.tick(5.0));
        });
        shared.tick(1.0);
        assert_eq!(nested.get(), 0);
        assert_eq!(shared.len(), 1);
    }
}
