//! Two-axis rotation of label positions.
//!
//! Positions are always recomputed from each label's home position and the
//! absolute cumulative angles, never composed frame over frame. Applying the
//! same angles twice is therefore a no-op, and long sessions cannot
//! accumulate floating-point drift.

use crate::label::Label;
use glam::{Mat3, Vec3};

/// Rotation around axis A (the X axis):
/// `y' = y·cos a − z·sin a`, `z' = z·cos a + y·sin a`, with `a = angle·step`.
#[inline]
pub fn axis_a_matrix(angle: f32, base_step: f32) -> Mat3 {
    Mat3::from_rotation_x(angle * base_step)
}

/// Rotation around axis B (the Y axis):
/// `x' = x·cos a − z·sin a`, `z' = z·cos a + x·sin a`, with `a = angle·step`.
#[inline]
pub fn axis_b_matrix(angle: f32, base_step: f32) -> Mat3 {
    // glam's Y rotation uses the opposite handedness for this pair of terms
    Mat3::from_rotation_y(-angle * base_step)
}

/// Combined rotation: axis A first, then axis B.
#[inline]
pub fn rotation_matrix(angle_a: f32, angle_b: f32, base_step: f32) -> Mat3 {
    axis_b_matrix(angle_b, base_step) * axis_a_matrix(angle_a, base_step)
}

/// Rotate a single point around axis A.
#[inline]
pub fn rotate_around_axis_a(p: Vec3, angle: f32, base_step: f32) -> Vec3 {
    axis_a_matrix(angle, base_step) * p
}

/// Rotate a single point around axis B.
#[inline]
pub fn rotate_around_axis_b(p: Vec3, angle: f32, base_step: f32) -> Vec3 {
    axis_b_matrix(angle, base_step) * p
}

/// Applies the current cumulative angles to a label set.
#[derive(Clone, Copy, Debug)]
pub struct RotationEngine {
    pub base_step: f32,
}

impl RotationEngine {
    pub fn new(base_step: f32) -> Self {
        Self { base_step }
    }

    /// Set every label's position to its home position rotated by the
    /// absolute angles.
    pub fn apply(&self, labels: &mut [Label], angle_a: f32, angle_b: f32) {
        let m = rotation_matrix(angle_a, angle_b, self.base_step);
        for label in labels {
            label.position = m * label.home;
        }
    }
}
