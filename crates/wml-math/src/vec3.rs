//! 3-component vector with a chaining, in-place API
//!
//! Mutators take `&mut self` and hand the same vector back, so calls compose
//! left to right:
//!
//! ```rust
//! use wml_math::Vector3;
//!
//! let mut v = Vector3::default();
//! v.set_x(3.0).set_y(4.0).multiply_scalar(2.0);
//! assert_eq!(v.length(), 10.0);
//! ```

use std::ops::{Add, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use lin_alg::f32::Vec3;

use crate::error::{MathError, MathResult};

/// A 3-D vector of single-precision components
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// Create a new vector from components
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }

    pub fn set_x(&mut self, x: f32) -> &mut Self {
        self.x = x;
        self
    }

    pub fn set_y(&mut self, y: f32) -> &mut Self {
        self.y = y;
        self
    }

    pub fn set_z(&mut self, z: f32) -> &mut Self {
        self.z = z;
        self
    }

    /// Euclidean length
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Scale to unit length in place. The zero vector is left unchanged.
    ///
    /// Components are first divided by the largest magnitude so squaring
    /// cannot overflow or underflow f32.
    pub fn normalize(&mut self) -> &mut Self {
        let max = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if !(max > 0.0 && max.is_finite()) {
            return self;
        }
        let (x, y, z) = (self.x / max, self.y / max, self.z / max);
        let len = (x * x + y * y + z * z).sqrt();
        self.x = x / len;
        self.y = y / len;
        self.z = z / len;
        self
    }

    /// Set to `a + b`
    pub fn add_vectors(&mut self, a: &Vector3, b: &Vector3) -> &mut Self {
        self.x = a.x + b.x;
        self.y = a.y + b.y;
        self.z = a.z + b.z;
        self
    }

    /// Add `v` in place
    pub fn add_vector(&mut self, v: &Vector3) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self
    }

    /// Set to `a - b`; neither operand is modified
    pub fn sub_vectors(&mut self, a: &Vector3, b: &Vector3) -> &mut Self {
        self.x = a.x - b.x;
        self.y = a.y - b.y;
        self.z = a.z - b.z;
        self
    }

    /// Subtract `v` in place
    pub fn sub_vector(&mut self, v: &Vector3) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
        self
    }

    pub fn multiply_scalar(&mut self, scalar: f32) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self
    }

    /// Set to the component-wise product of `a` and `b`
    pub fn multiply_vectors(&mut self, a: &Vector3, b: &Vector3) -> &mut Self {
        self.x = a.x * b.x;
        self.y = a.y * b.y;
        self.z = a.z * b.z;
        self
    }

    /// Component-wise multiply by `v` in place
    pub fn multiply_vector(&mut self, v: &Vector3) -> &mut Self {
        self.x *= v.x;
        self.y *= v.y;
        self.z *= v.z;
        self
    }

    /// Set to the component-wise quotient `a / b`.
    ///
    /// Follows IEEE-754: a zero component in `b` produces an infinity or NaN.
    pub fn divide_vectors(&mut self, a: &Vector3, b: &Vector3) -> &mut Self {
        self.x = a.x / b.x;
        self.y = a.y / b.y;
        self.z = a.z / b.z;
        self
    }

    /// Component-wise divide by `v` in place (IEEE-754 semantics)
    pub fn divide_vector(&mut self, v: &Vector3) -> &mut Self {
        self.x /= v.x;
        self.y /= v.y;
        self.z /= v.z;
        self
    }

    /// Like [`Vector3::divide_vectors`] but rejects a zero component in `b`.
    /// The receiver is untouched on error.
    pub fn checked_divide_vectors(&mut self, a: &Vector3, b: &Vector3) -> MathResult<&mut Self> {
        b.check_divisor()?;
        Ok(self.divide_vectors(a, b))
    }

    /// Like [`Vector3::divide_vector`] but rejects a zero component in `v`
    pub fn checked_divide_vector(&mut self, v: &Vector3) -> MathResult<&mut Self> {
        v.check_divisor()?;
        Ok(self.divide_vector(v))
    }

    fn check_divisor(&self) -> MathResult<()> {
        for (axis, value) in [('x', self.x), ('y', self.y), ('z', self.z)] {
            if value == 0.0 {
                return Err(MathError::ZeroComponent { axis });
            }
        }
        Ok(())
    }

    /// Dot product
    pub fn dot(&self, other: &Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product; returns a new vector
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        let Vector3 { x: x1, y: y1, z: z1 } = *self;
        let Vector3 { x: x2, y: y2, z: z2 } = *other;
        Vector3::new(y1 * z2 - y2 * z1, x2 * z1 - x1 * z2, x1 * y2 - x2 * y1)
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(arr: [f32; 3]) -> Self {
        Vector3::new(arr[0], arr[1], arr[2])
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
