//! Randomized decorative particles.
//!
//! Each field owns its own generator, so two mounts never share randomness.
//! Passing a seed makes a field reproducible, which the static export uses.

use fastrand::Rng;

use crate::error::MotionError;
use crate::keyframes::Keyframes;
use crate::motion::Motion;
use crate::pose::Pose;
use crate::transition::Transition;

/// Particles per achievements section.
pub const PARTICLE_COUNT: usize = 12;

/// Particle delays are drawn from `[0, MAX_DELAY)` seconds.
pub const MAX_DELAY: f64 = 3.0;

/// Largest field a config may ask for.
pub const MAX_PARTICLES: usize = 512;

/// One decorative point. `x` and `y` are percentages of the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub delay: f64,
}

impl Particle {
    fn sample(id: usize, rng: &mut Rng) -> Self {
        Self {
            id,
            x: rng.f64() * 100.0,
            y: rng.f64() * 100.0,
            delay: rng.f64() * MAX_DELAY,
        }
    }

    /// CSS placement inside the container.
    pub fn placement(&self) -> String {
        format!("left: {:.3}%; top: {:.3}%;", self.x, self.y)
    }

    /// Endless drift: bob vertically, breathe in size and brightness.
    /// Longer-delayed particles also drift more slowly.
    pub fn drift(&self) -> Motion<Pose> {
        let low = Pose::IDENTITY.with_y(-20.0).with_opacity(0.2).with_scale(0.5);
        let high = Pose::IDENTITY.with_y(20.0).with_opacity(0.8).with_scale(1.2);
        Motion::new(
            Keyframes::pulse(low, high),
            Transition::tween(6.0 + self.delay)
                .with_delay(self.delay)
                .forever(),
        )
    }
}

/// A set of particles sampled once at mount.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Sample `count` particles from `rng`.
    pub fn from_rng(count: usize, rng: &mut Rng) -> Result<Self, MotionError> {
        if count == 0 || count > MAX_PARTICLES {
            return Err(MotionError::InvalidParticleCount {
                count,
                max: MAX_PARTICLES,
            });
        }
        let particles = (0..count).map(|id| Particle::sample(id, rng)).collect();
        Ok(Self { particles })
    }

    /// Sample with a fresh generator, seeded when `seed` is given.
    pub fn spawn(count: usize, seed: Option<u64>) -> Result<Self, MotionError> {
        let mut rng = match seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        Self::from_rng(count, &mut rng)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

impl<'a> IntoIterator for &'a ParticleField {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_ranges(field: &ParticleField) -> bool {
        field.iter().all(|p| {
            (0.0..100.0).contains(&p.x)
                && (0.0..100.0).contains(&p.y)
                && (0.0..MAX_DELAY).contains(&p.delay)
        })
    }

    #[test]
    fn every_mount_gets_twelve_particles_in_range() {
        for _ in 0..200 {
            let field = ParticleField::spawn(PARTICLE_COUNT, None).unwrap();
            assert_eq!(field.len(), 12);
            assert!(in_ranges(&field));
        }
    }

    #[test]
    fn ids_follow_generation_order() {
        let field = ParticleField::spawn(PARTICLE_COUNT, Some(7)).unwrap();
        let ids: Vec<usize> = field.iter().map(|p| p.id).collect();
        assert_eq!(ids, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn separate_mounts_sample_independently() {
        let a = ParticleField::spawn(PARTICLE_COUNT, None).unwrap();
        let b = ParticleField::spawn(PARTICLE_COUNT, None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn same_seed_reproduces_the_field() {
        let a = ParticleField::spawn(PARTICLE_COUNT, Some(42)).unwrap();
        let b = ParticleField::spawn(PARTICLE_COUNT, Some(42)).unwrap();
        let c = ParticleField::spawn(PARTICLE_COUNT, Some(43)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn count_is_bounded() {
        assert_eq!(
            ParticleField::spawn(0, None),
            Err(MotionError::InvalidParticleCount {
                count: 0,
                max: MAX_PARTICLES
            })
        );
        assert!(ParticleField::spawn(MAX_PARTICLES + 1, None).is_err());
        assert!(ParticleField::spawn(MAX_PARTICLES, Some(1)).is_ok());
    }

    #[test]
    fn drift_loops_forever_after_its_delay() {
        let particle = Particle {
            id: 0,
            x: 10.0,
            y: 20.0,
            delay: 1.5,
        };
        let drift = particle.drift();
        assert_eq!(drift.transition.delay, 1.5);
        assert_eq!(drift.transition.period(), 7.5);
        assert_eq!(drift.transition.total(), None);
        assert_eq!(drift.initial().y, -20.0);
        assert_eq!(particle.placement(), "left: 10.000%; top: 20.000%;");
    }
}
