//! # portfolio-motion
//!
//! Declarative motion primitives for the portfolio page.
//!
//! An animation is described as data: a [`Keyframes`] track of values plus a
//! [`Transition`] saying how those values are laid out in time (tween or
//! spring, delay, repeat). A [`Scheduler`] samples the running motions once
//! per frame and hands each value to a sink. The host only has to supply a
//! clock and a frame callback.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_motion::{Motion, Pose, Scheduler, Transition};
//!
//! let mut scheduler = Scheduler::new();
//! let scope = scheduler.open_scope();
//!
//! let hidden = Pose::IDENTITY.with_opacity(0.0).with_y(50.0);
//! let reveal = Motion::to(hidden, Pose::IDENTITY, Transition::tween(0.8));
//! scheduler.play(scope, 0.0, reveal, |pose: &Pose| {
//!     let _css = pose.to_style();
//! });
//!
//! scheduler.tick(0.4);
//! scheduler.tick(1.0);
//! assert!(scheduler.is_idle());
//!
//! // Unmount: nothing in the scope runs again.
//! scheduler.close_scope(scope);
//! ```
//!
//! ## Modules
//!
//! - [`easing`], [`spring`], [`transition`] - timing
//! - [`keyframes`], [`pose`], [`color`] - values and interpolation
//! - [`motion`], [`stagger`] - animation descriptions
//! - [`scheduler`] - frame-driven playback with scope teardown
//! - [`visibility`] - trigger-once "in view" latch
//! - [`particles`] - randomized decorative points
//! - [`config`] - TOML configuration

pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod keyframes;
pub mod motion;
pub mod particles;
pub mod pose;
pub mod scheduler;
pub mod spring;
pub mod stagger;
pub mod transition;
pub mod visibility;

pub use color::Hsla;
pub use config::{MotionConfig, ParticleConfig};
pub use easing::Easing;
pub use error::MotionError;
pub use keyframes::{Keyframes, Lerp};
pub use motion::{Frame, Motion};
pub use particles::{PARTICLE_COUNT, Particle, ParticleField};
pub use pose::Pose;
pub use scheduler::{Scheduler, ScopeId, SharedScheduler, TrackId};
pub use spring::Spring;
pub use stagger::Stagger;
pub use transition::{Phase, Repeat, Timing, Transition};
pub use visibility::{ObserverOptions, VisibilityLatch};
