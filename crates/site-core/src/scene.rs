//! Particle cloud and pulsing sphere shown behind the hero section when the
//! 3D library is loaded.
//!
//! This module owns the data and per-frame motion; the web frontend hands
//! the buffers to the library's scene graph and copies [`SceneMotion`] onto
//! its objects every frame.

use crate::constants::{
    PARTICLE_SPIN, PARTICLE_SPREAD, SCENE_POINTER_DIVISOR, SCENE_POINTER_INFLUENCE,
    SPHERE_PULSE_AMPLITUDE, SPHERE_PULSE_RATE_PER_MS, SPHERE_SPIN,
};
use glam::Vec2;
use rand::Rng;

/// Interleaved xyz positions and rgb colours, three floats per particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleBuffers {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl ParticleBuffers {
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Scatter `count` particles in a cube centred on the origin, tinted blue
/// to purple.
pub fn particle_buffers<R: Rng>(rng: &mut R, count: usize) -> ParticleBuffers {
    let half = PARTICLE_SPREAD * 0.5;
    let mut positions = Vec::with_capacity(count * 3);
    let mut colors = Vec::with_capacity(count * 3);
    for _ in 0..count {
        for _ in 0..3 {
            positions.push(rng.gen_range(-half..half));
        }
        colors.push(rng.gen_range(0.5..1.0)); // r
        colors.push(rng.gen_range(0.3..0.6)); // g
        colors.push(rng.gen_range(0.5..1.0)); // b
    }
    ParticleBuffers { positions, colors }
}

/// Pointer position in scene units: offset from the viewport centre,
/// scaled down.
#[inline]
pub fn scene_pointer(client: Vec2, viewport: Vec2) -> Vec2 {
    (client - viewport * 0.5) / SCENE_POINTER_DIVISOR
}

/// Uniform sphere scale at wall-clock time `now_ms`.
#[inline]
pub fn sphere_scale(now_ms: f64) -> f32 {
    (1.0 + (now_ms * SPHERE_PULSE_RATE_PER_MS).sin() * SPHERE_PULSE_AMPLITUDE) as f32
}

/// Accumulated Euler rotations (x, y) of the particle cloud and sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneMotion {
    pub particles: Vec2,
    pub sphere: Vec2,
}

impl SceneMotion {
    /// Advance one frame. Horizontal pointer offset spins the cloud about y,
    /// vertical offset about x.
    pub fn step(&mut self, pointer: Vec2) {
        self.particles += Vec2::from(PARTICLE_SPIN);
        self.sphere += Vec2::from(SPHERE_SPIN);
        self.particles += Vec2::new(pointer.y, pointer.x) * SCENE_POINTER_INFLUENCE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn buffers_are_seeded_and_in_range() {
        let a = particle_buffers(&mut StdRng::seed_from_u64(3), 1500);
        let b = particle_buffers(&mut StdRng::seed_from_u64(3), 1500);
        assert_eq!(a, b);
        assert_eq!(a.len(), 1500);
        assert_eq!(a.colors.len(), 4500);
        assert!(a.positions.iter().all(|p| (-5.0..5.0).contains(p)));
        for rgb in a.colors.chunks(3) {
            assert!((0.5..1.0).contains(&rgb[0]));
            assert!((0.3..0.6).contains(&rgb[1]));
            assert!((0.5..1.0).contains(&rgb[2]));
        }
    }

    #[test]
    fn idle_pointer_spins_at_base_rate() {
        let mut m = SceneMotion::default();
        for _ in 0..10 {
            m.step(Vec2::ZERO);
        }
        assert!((m.particles - Vec2::new(0.01, 0.02)).abs().max_element() < 1e-6);
        assert!((m.sphere - Vec2::new(0.05, 0.03)).abs().max_element() < 1e-6);
    }

    #[test]
    fn pointer_offset_adds_cross_axis_spin() {
        let viewport = Vec2::new(1000.0, 800.0);
        let p = scene_pointer(Vec2::new(700.0, 400.0), viewport);
        assert_eq!(p, Vec2::new(2.0, 0.0));

        let mut m = SceneMotion::default();
        m.step(p);
        // x offset feeds rotation about y
        assert!((m.particles.y - (0.002 + 2.0 * 0.0005)).abs() < 1e-7);
        assert!((m.particles.x - 0.001).abs() < 1e-7);
        assert_eq!(m.sphere, Vec2::new(0.005, 0.003));
    }

    #[test]
    fn sphere_pulse_bounds() {
        assert_eq!(sphere_scale(0.0), 1.0);
        let peak = sphere_scale(std::f64::consts::FRAC_PI_2 * 1000.0);
        assert!((peak - 1.2).abs() < 1e-6);
        for ms in (0..20_000).step_by(37) {
            let s = sphere_scale(ms as f64);
            assert!((0.8..=1.2).contains(&s));
        }
    }
}
