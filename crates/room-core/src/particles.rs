use crate::constants::{DUST_MAX_STEP_SEC, DUST_PARTICLE_COUNT, DUST_RESPAWN_MARGIN};
use crate::pen::Pen;
use glam::Vec2;
use rand::prelude::*;

/// Decorative dust mote in normalized viewport coordinates (0..1 on both axes).
#[derive(Clone, Debug, PartialEq)]
pub struct DustParticle {
    pub position: Vec2,
    /// Upward speed, normalized units per second.
    pub rise: f32,
    /// Lateral drift, normalized units per second.
    pub drift: f32,
    /// Radius in CSS pixels.
    pub size: f32,
    pub alpha: f32,
}

/// Fixed pool of dust motes that float up and wrap around.
pub struct DustField {
    particles: Vec<DustParticle>,
    rng: StdRng,
}

impl DustField {
    pub fn new(seed: u64) -> Self {
        Self::with_count(DUST_PARTICLE_COUNT, seed)
    }

    pub fn with_count(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        // per-frame speeds at 60 fps, expressed per second
        let particles = (0..count)
            .map(|_| DustParticle {
                position: Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()),
                size: rng.gen::<f32>() * 1.5 + 0.5,
                rise: (rng.gen::<f32>() * 0.0003 + 0.0001) * 60.0,
                drift: (rng.gen::<f32>() - 0.5) * 0.0002 * 60.0,
                alpha: rng.gen::<f32>() * 0.35 + 0.1,
            })
            .collect();
        Self { particles, rng }
    }

    pub fn particles(&self) -> &[DustParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Move every mote by `dt_sec` (capped) and respawn the ones that left the band.
    pub fn advance(&mut self, dt_sec: f32) {
        if !(dt_sec > 0.0) {
            return;
        }
        let dt = dt_sec.min(DUST_MAX_STEP_SEC);
        for p in &mut self.particles {
            p.position.y -= p.rise * dt;
            p.position.x += p.drift * dt;
            if p.position.y < -DUST_RESPAWN_MARGIN {
                p.position.y = 1.0 + DUST_RESPAWN_MARGIN;
                p.position.x = self.rng.gen::<f32>();
            }
            if !(0.0..=1.0).contains(&p.position.x) {
                p.position.x = self.rng.gen::<f32>();
            }
        }
    }

    /// Draw at `intensity` (the particles progress value).
    pub fn draw(&self, pen: &mut Pen, intensity: f32) {
        if !(intensity > 0.0) {
            return;
        }
        let viewport = pen.viewport();
        for p in &self.particles {
            pen.dot(p.position * viewport, p.size, p.alpha * intensity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_is_fixed_and_seeded() {
        let a = DustField::new(7);
        let b = DustField::new(7);
        assert_eq!(a.len(), DUST_PARTICLE_COUNT);
        assert_eq!(a.particles(), b.particles());
        for p in a.particles() {
            assert!((0.0..=1.0).contains(&p.position.x));
            assert!(p.rise > 0.0);
            assert!(p.size >= 0.5 && p.size <= 2.0);
        }
    }

    #[test]
    fn motes_rise_and_wrap() {
        let mut field = DustField::with_count(8, 1);
        let before: Vec<f32> = field.particles().iter().map(|p| p.position.y).collect();
        field.advance(0.05);
        for (p, y0) in field.particles().iter().zip(before) {
            assert!(p.position.y < y0 || p.position.y > 1.0);
        }
        // long enough to push everything past the top at least once
        for _ in 0..2000 {
            field.advance(0.1);
        }
        for p in field.particles() {
            assert!(p.position.y >= -DUST_RESPAWN_MARGIN - 1e-6);
            assert!(p.position.y <= 1.0 + DUST_RESPAWN_MARGIN + 1e-6);
            assert!((0.0..=1.0).contains(&p.position.x));
        }
    }

    #[test]
    fn non_positive_step_is_ignored() {
        let mut field = DustField::with_count(4, 3);
        let before = field.particles().to_vec();
        field.advance(0.0);
        field.advance(-1.0);
        field.advance(f32::NAN);
        assert_eq!(field.particles(), &before[..]);
    }
}
