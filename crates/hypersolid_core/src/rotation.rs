//! Cumulative rotation angles
//!
//! A [`RotationState`] stores the total angle applied about each of the six
//! rotation planes since a shape was created, normalized into `[0, 2π)`.

use std::f64::consts::TAU;

use hypersolid_math::{RotationPlane, Vec4};

/// Six cumulative angles, one per rotation plane, in radians
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    /// Indexed by [`RotationPlane::index`]
    angles: [f64; 6],
}

impl RotationState {
    /// All angles zero
    pub const IDENTITY: Self = Self { angles: [0.0; 6] };

    /// Create a state with all six angles at zero
    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Current cumulative angle for `plane`
    #[inline]
    pub fn angle(&self, plane: RotationPlane) -> f64 {
        self.angles[plane.index()]
    }

    /// Add `delta` to the angle of `plane`, wrapping into `[0, 2π)`
    ///
    /// Returns the new angle. A non-finite `delta` leaves the angle unchanged.
    pub fn add(&mut self, plane: RotationPlane, delta: f64) -> f64 {
        let slot = &mut self.angles[plane.index()];
        if !delta.is_finite() {
            return *slot;
        }
        let mut angle = (*slot + delta).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if angle >= TAU {
            angle = 0.0;
        }
        *slot = angle;
        angle
    }

    /// Zero every angle
    pub fn reset(&mut self) {
        self.angles = [0.0; 6];
    }

    /// True when every angle is zero
    pub fn is_identity(&self) -> bool {
        self.angles.iter().all(|&a| a == 0.0)
    }

    /// Iterate `(plane, angle)` pairs in application order
    pub fn iter(&self) -> impl Iterator<Item = (RotationPlane, f64)> + '_ {
        RotationPlane::APPLICATION_ORDER
            .iter()
            .map(move |&plane| (plane, self.angle(plane)))
    }

    /// Apply all six plane rotations to `v` in application order
    pub fn apply(&self, v: Vec4) -> Vec4 {
        self.iter()
            .fold(v, |acc, (plane, angle)| plane.rotate_by(acc, angle))
    }

    /// Apply all six rotations to every vertex of `reference`, writing into `out`
    ///
    /// `out` is overwritten from `reference` first, so nothing from a previous
    /// frame survives. Each plane's sine and cosine is computed once.
    pub fn apply_all(&self, reference: &[Vec4], out: &mut Vec<Vec4>) {
        out.clear();
        out.extend_from_slice(reference);

        for (plane, angle) in self.iter() {
            let (s, c) = angle.sin_cos();
            for v in out.iter_mut() {
                *v = plane.rotate(*v, s, c);
            }
        }
    }
}
