//! Three-component vector math for the movement plane.
//!
//! `Vec3` uses `f32` throughout — agents number in the low thousands and move
//! at game-world scale, so single precision is plenty and halves the memory
//! traffic of the SoA columns.
//!
//! The movement plane is the XZ plane with +Y up.  Steering flattens
//! direction vectors onto that plane; heights (chest, eye) are added back
//! only when building probe and visibility rays.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Magnitudes below this are treated as degenerate by the normalize guards.
pub const EPSILON: f32 = 1e-5;

/// A 3-component single-precision vector.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    /// World up — the normal of the movement plane.
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    /// Default facing for agents registered without one.
    pub const FORWARD: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[inline]
    pub fn length_sq(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Squared distance — the comparison currency of every registry scan.
    #[inline]
    pub fn distance_sq(self, other: Vec3) -> f32 {
        (self - other).length_sq()
    }

    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// `true` if every component is a finite number.  Registry scans skip
    /// rows that fail this — a corrupted transform must not poison a query.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Project onto the movement plane (zero the vertical component).
    #[inline]
    pub fn flattened(self) -> Vec3 {
        Vec3 { x: self.x, y: 0.0, z: self.z }
    }

    /// Unit vector, or `fallback` when the magnitude is degenerate.
    ///
    /// This is the normalize guard from the steering kernel: a near-zero
    /// vector silently resolves to the supplied previous direction instead of
    /// producing NaN components.
    #[inline]
    pub fn normalized_or(self, fallback: Vec3) -> Vec3 {
        let len = self.length();
        if len > EPSILON { self * (1.0 / len) } else { fallback }
    }

    /// Unit vector, or `None` when degenerate.
    #[inline]
    pub fn try_normalized(self) -> Option<Vec3> {
        let len = self.length();
        if len > EPSILON { Some(self * (1.0 / len)) } else { None }
    }

    /// `true` if the magnitude is below the degenerate threshold.
    #[inline]
    pub fn is_near_zero(self) -> bool {
        self.length_sq() < EPSILON * EPSILON
    }

    /// Linear interpolation: `self + (other − self) × t`.
    #[inline]
    pub fn lerp(self, other: Vec3, t: f32) -> Vec3 {
        self + (other - self) * t
    }

    /// Rotate this unit vector toward `target` (also unit) by at most
    /// `max_angle` radians — spherical interpolation with a clamped step.
    ///
    /// Facing vectors feed through here once per tick, so the two corner
    /// cases both matter:
    /// - already within `max_angle` → snaps exactly onto `target`;
    /// - antipodal inputs (sin θ ≈ 0) → rotates around world up (or world X
    ///   when the vector is vertical) so the turn direction stays defined.
    pub fn rotate_toward(self, target: Vec3, max_angle: f32) -> Vec3 {
        if max_angle <= 0.0 {
            return self;
        }
        let cos_angle = self.dot(target).clamp(-1.0, 1.0);
        let angle = cos_angle.acos();
        if angle <= max_angle || angle < EPSILON {
            return target;
        }
        if cos_angle < -0.9999 {
            // Antipodal: the interpolation axis is undefined, so turn about
            // world up — planar facings stay in the movement plane.  A
            // vertical vector has no in-plane turn; use world X instead.
            let axis = if self.cross(Vec3::UP).is_near_zero() {
                Vec3::new(1.0, 0.0, 0.0)
            } else {
                Vec3::UP
            };
            return self.rotated_about(axis, max_angle);
        }
        let t = max_angle / angle;
        let sin_angle = angle.sin();
        let a = ((1.0 - t) * angle).sin() / sin_angle;
        let b = (t * angle).sin() / sin_angle;
        (self * a + target * b).normalized_or(target)
    }

    /// Rotate about world up by `angle` radians (positive turns toward +X
    /// when facing +Z).  The vertical component is untouched.
    #[inline]
    pub fn yawed(self, angle: f32) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(self.x * cos + self.z * sin, self.y, -self.x * sin + self.z * cos)
    }

    /// Rodrigues rotation of `self` about unit `axis` by `angle` radians.
    fn rotated_about(self, axis: Vec3, angle: f32) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        self * cos + axis.cross(self) * sin + axis * (axis.dot(self) * (1.0 - cos))
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
