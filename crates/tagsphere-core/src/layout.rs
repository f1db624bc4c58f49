//! Even distribution of points over a sphere surface.

use glam::Vec3;
use rand::Rng;

/// Golden angle in radians, `π·(3 − √5)`.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// `n` points on a sphere of `radius` using the golden-angle (Fibonacci)
/// spiral. Index 0 sits near the +Z pole and the last index near −Z.
pub fn fibonacci_sphere(n: usize, radius: f32) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let t = i as f32 + 0.5;
            let phi = (1.0 - 2.0 * t / n as f32).clamp(-1.0, 1.0).acos();
            let theta = GOLDEN_ANGLE * t;
            let (sin_phi, cos_phi) = phi.sin_cos();
            let (sin_theta, cos_theta) = theta.sin_cos();
            Vec3::new(
                radius * sin_phi * cos_theta,
                radius * sin_phi * sin_theta,
                radius * cos_phi,
            )
        })
        .collect()
}

/// Offset each axis of `p` independently by a value in `[-amount, amount)`.
pub fn jitter<R: Rng>(p: Vec3, amount: f32, rng: &mut R) -> Vec3 {
    if amount <= 0.0 {
        return p;
    }
    let mut offset = || rng.gen_range(-amount..amount);
    p + Vec3::new(offset(), offset(), offset())
}

/// Layout plus a one-time jitter so the initial arrangement does not look
/// mechanical.
pub fn jittered_sphere<R: Rng>(n: usize, radius: f32, amount: f32, rng: &mut R) -> Vec<Vec3> {
    fibonacci_sphere(n, radius)
        .into_iter()
        .map(|p| jitter(p, amount, rng))
        .collect()
}
