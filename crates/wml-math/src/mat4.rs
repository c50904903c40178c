//! 4×4 column-major matrix
//!
//! A [`Matrix4`] is a flat `[f32; 16]` buffer laid out column by column, so
//! the element at (row, col) lives at `data[4 * col + row]`. This is the
//! layout WebGL/wgpu uniforms and `lin_alg::f32::Mat4` use.
//!
//! Every producing operation comes in two flavors: one returns a fresh
//! matrix, the other (`*_into`) writes into a caller-owned target so hot
//! paths can reuse storage. Inputs and target of an `*_into` call can never
//! alias (the borrow checker rejects it); the `*_assign` / `pre_multiply` /
//! `post_multiply` variants cover the in-place cases and snapshot their
//! inputs before writing.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use bytemuck::{Pod, Zeroable};
use lin_alg::f32::Mat4;

use crate::error::{MathError, MathResult};

/// Number of floats in a matrix buffer
pub const MATRIX4_LEN: usize = 16;

/// Absolute per-element tolerance used by [`Matrix4::is_identity`]
pub const IDENTITY_TOLERANCE: f32 = 1e-4;

/// A 4×4 single-precision matrix in column-major order
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Matrix4 {
    /// Column-major elements: `data[4 * col + row]`
    pub data: [f32; 16],
}

/// Minors, signed cofactors and determinant of a matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cofactors {
    /// Matrix of 3×3 minors, same column-major layout as the source
    pub cofactor: Matrix4,
    /// Minors with the (-1)^(row+col) checkerboard applied
    pub algebraic_cofactor: Matrix4,
    /// Determinant, expanded along the first column
    pub determinant: f32,
}

/// Outcome of a non-strict inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Inversion {
    /// The target holds the inverse
    Inverted,
    /// Determinant was exactly zero; the target holds the identity
    SingularFallback,
}

impl Inversion {
    /// True when the identity was substituted for a singular matrix
    pub fn is_singular(self) -> bool {
        self == Inversion::SingularFallback
    }
}

impl Matrix4 {
    /// The identity matrix
    pub const IDENTITY: Matrix4 = Matrix4 {
        data: [
            1.0, 0.0, 0.0, 0.0, // column 0
            0.0, 1.0, 0.0, 0.0, // column 1
            0.0, 0.0, 1.0, 0.0, // column 2
            0.0, 0.0, 0.0, 1.0, // column 3
        ],
    };

    /// The all-zero matrix
    pub const ZERO: Matrix4 = Matrix4 { data: [0.0; 16] };

    /// Wrap a column-major buffer
    pub const fn new(data: [f32; 16]) -> Self {
        Matrix4 { data }
    }

    /// Create a new identity matrix
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Overwrite this matrix with the identity
    pub fn set_identity(&mut self) -> &mut Self {
        self.data = Self::IDENTITY.data;
        self
    }

    /// Copy a flat column-major buffer into a new matrix.
    ///
    /// Fails if `source` does not hold exactly 16 floats.
    pub fn from_slice(source: &[f32]) -> MathResult<Self> {
        let data: [f32; 16] = source.try_into().map_err(|_| {
            log::debug!("rejecting {}-element matrix buffer", source.len());
            MathError::buffer_length(MATRIX4_LEN, source.len())
        })?;
        Ok(Matrix4 { data })
    }

    /// Overwrite this matrix with a flat column-major buffer.
    ///
    /// The matrix is left untouched on a length mismatch.
    pub fn copy_from_slice(&mut self, source: &[f32]) -> MathResult<&mut Self> {
        *self = Self::from_slice(source)?;
        Ok(self)
    }

    /// Write the column-major elements into `target`, which must hold exactly 16 floats
    pub fn write_to_slice(&self, target: &mut [f32]) -> MathResult<()> {
        if target.len() != MATRIX4_LEN {
            log::debug!("rejecting {}-element output buffer", target.len());
            return Err(MathError::buffer_length(MATRIX4_LEN, target.len()));
        }
        target.copy_from_slice(&self.data);
        Ok(())
    }

    /// View a packed buffer of column-major matrices without copying.
    ///
    /// The buffer length must be a multiple of 16.
    pub fn cast_slice(buffer: &[f32]) -> MathResult<&[Matrix4]> {
        check_packed_len(buffer.len())?;
        Ok(bytemuck::cast_slice(buffer))
    }

    /// Mutable counterpart of [`Matrix4::cast_slice`]
    pub fn cast_slice_mut(buffer: &mut [f32]) -> MathResult<&mut [Matrix4]> {
        check_packed_len(buffer.len())?;
        Ok(bytemuck::cast_slice_mut(buffer))
    }

    /// Build from four rows given in conventional reading order
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut m = Self::ZERO;
        for (row, values) in rows.iter().enumerate() {
            for (col, &v) in values.iter().enumerate() {
                m.data[4 * col + row] = v;
            }
        }
        m
    }

    /// Build from four columns
    pub fn from_columns(columns: [[f32; 4]; 4]) -> Self {
        let mut m = Self::ZERO;
        for (col, values) in columns.iter().enumerate() {
            m.data[4 * col..4 * col + 4].copy_from_slice(values);
        }
        m
    }

    /// Element at (row, col).
    ///
    /// Panics if `row` or `col` is not below 4.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        check_cell(row, col);
        self.data[4 * col + row]
    }

    /// Set the element at (row, col). Panics on an index past 3.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> &mut Self {
        check_cell(row, col);
        self.data[4 * col + row] = value;
        self
    }

    /// Column `col` as a 4-vector
    pub fn column(&self, col: usize) -> [f32; 4] {
        assert!(col < 4, "column index {col} out of range for a 4x4 matrix");
        let start = 4 * col;
        [
            self.data[start],
            self.data[start + 1],
            self.data[start + 2],
            self.data[start + 3],
        ]
    }

    /// Row `row` as a 4-vector
    pub fn row(&self, row: usize) -> [f32; 4] {
        assert!(row < 4, "row index {row} out of range for a 4x4 matrix");
        [
            self.data[row],
            self.data[4 + row],
            self.data[8 + row],
            self.data[12 + row],
        ]
    }

    /// Column-major elements as a slice
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Element-wise sum
    pub fn add(m1: &Matrix4, m2: &Matrix4) -> Matrix4 {
        let mut out = Self::ZERO;
        Self::add_into(m1, m2, &mut out);
        out
    }

    /// Element-wise sum written into `target`
    pub fn add_into(m1: &Matrix4, m2: &Matrix4, target: &mut Matrix4) {
        for ((t, a), b) in target.data.iter_mut().zip(&m1.data).zip(&m2.data) {
            *t = a + b;
        }
    }

    /// Element-wise difference
    pub fn sub(m1: &Matrix4, m2: &Matrix4) -> Matrix4 {
        let mut out = Self::ZERO;
        Self::sub_into(m1, m2, &mut out);
        out
    }

    /// Element-wise difference written into `target`
    pub fn sub_into(m1: &Matrix4, m2: &Matrix4, target: &mut Matrix4) {
        for ((t, a), b) in target.data.iter_mut().zip(&m1.data).zip(&m2.data) {
            *t = a - b;
        }
    }

    /// Scale every element in place.
    ///
    /// A scalar of exactly `1.0` returns without touching the buffer, so the
    /// elements stay bit-identical.
    pub fn multiply_scalar(&mut self, scalar: f32) -> &mut Self {
        if scalar == 1.0 {
            return self;
        }
        for v in self.data.iter_mut() {
            *v *= scalar;
        }
        self
    }

    /// Row/column swap
    pub fn transpose(&self) -> Matrix4 {
        let mut out = Self::ZERO;
        self.transpose_into(&mut out);
        out
    }

    /// Row/column swap written into `target`
    pub fn transpose_into(&self, target: &mut Matrix4) {
        for col in 0..4 {
            for row in 0..4 {
                target.data[4 * row + col] = self.data[4 * col + row];
            }
        }
    }

    /// Transpose in place
    pub fn transpose_assign(&mut self) -> &mut Self {
        let src = *self;
        src.transpose_into(self);
        self
    }

    /// Composition `next · prev`: the result applies `prev` first, then `next`
    pub fn multiply(next: &Matrix4, prev: &Matrix4) -> Matrix4 {
        let mut out = Self::ZERO;
        Self::multiply_into(next, prev, &mut out);
        out
    }

    /// Composition `next · prev` written into `target`
    pub fn multiply_into(next: &Matrix4, prev: &Matrix4, target: &mut Matrix4) {
        // Snapshot both operands; target is only written after all reads.
        let n = next.data;
        let p = prev.data;
        for col in 0..4 {
            let c = 4 * col;
            for row in 0..4 {
                target.data[c + row] = n[row] * p[c]
                    + n[4 + row] * p[c + 1]
                    + n[8 + row] * p[c + 2]
                    + n[12 + row] * p[c + 3];
            }
        }
    }

    /// Replace `self` with `next · self` (apply `self`, then `next`)
    pub fn pre_multiply(&mut self, next: &Matrix4) -> &mut Self {
        let prev = *self;
        Self::multiply_into(next, &prev, self);
        self
    }

    /// Replace `self` with `self · prev` (apply `prev`, then `self`)
    pub fn post_multiply(&mut self, prev: &Matrix4) -> &mut Self {
        let next = *self;
        Self::multiply_into(&next, prev, self);
        self
    }

    /// Determinant together with the minor and signed cofactor matrices
    pub fn det(&self) -> Cofactors {
        let mut cofactor = Self::ZERO;
        let mut algebraic_cofactor = Self::ZERO;
        let determinant = self.det_into(&mut cofactor, &mut algebraic_cofactor);
        Cofactors {
            cofactor,
            algebraic_cofactor,
            determinant,
        }
    }

    /// Determinant only
    pub fn determinant(&self) -> f32 {
        self.det().determinant
    }

    /// Fill `cofactor` with the minors and `algebraic_cofactor` with the
    /// signed cofactors, returning the determinant.
    ///
    /// The determinant is expanded along the first column:
    /// `a00·M00 − a10·M10 + a20·M20 − a30·M30`, where `Mr0` is the minor left
    /// after deleting row `r` and column 0. The 2×2 sub-determinants of
    /// column pairs (2,3), (1,3) and (1,2) are computed once and shared by
    /// all sixteen minors.
    pub fn det_into(&self, cofactor: &mut Matrix4, algebraic_cofactor: &mut Matrix4) -> f32 {
        // aCR: column C, row R
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.data;

        // kXY_RS: det of columns X,Y restricted to rows R,S
        let k23_23 = a22 * a33 - a23 * a32;
        let k23_13 = a21 * a33 - a23 * a31;
        let k23_12 = a21 * a32 - a22 * a31;
        let k23_03 = a20 * a33 - a23 * a30;
        let k23_02 = a20 * a32 - a22 * a30;
        let k23_01 = a20 * a31 - a21 * a30;

        let k13_23 = a12 * a33 - a13 * a32;
        let k13_13 = a11 * a33 - a13 * a31;
        let k13_12 = a11 * a32 - a12 * a31;
        let k13_03 = a10 * a33 - a13 * a30;
        let k13_02 = a10 * a32 - a12 * a30;
        let k13_01 = a10 * a31 - a11 * a30;

        let k12_23 = a12 * a23 - a13 * a22;
        let k12_13 = a11 * a23 - a13 * a21;
        let k12_12 = a11 * a22 - a12 * a21;
        let k12_03 = a10 * a23 - a13 * a20;
        let k12_02 = a10 * a22 - a12 * a20;
        let k12_01 = a10 * a21 - a11 * a20;

        // mCR: minor with column C and row R deleted
        let m00 = a11 * k23_23 - a12 * k23_13 + a13 * k23_12;
        let m01 = a10 * k23_23 - a12 * k23_03 + a13 * k23_02;
        let m02 = a10 * k23_13 - a11 * k23_03 + a13 * k23_01;
        let m03 = a10 * k23_12 - a11 * k23_02 + a12 * k23_01;

        let determinant = a00 * m00 - a01 * m01 + a02 * m02 - a03 * m03;

        let m10 = a01 * k23_23 - a02 * k23_13 + a03 * k23_12;
        let m11 = a00 * k23_23 - a02 * k23_03 + a03 * k23_02;
        let m12 = a00 * k23_13 - a01 * k23_03 + a03 * k23_01;
        let m13 = a00 * k23_12 - a01 * k23_02 + a02 * k23_01;

        let m20 = a01 * k13_23 - a02 * k13_13 + a03 * k13_12;
        let m21 = a00 * k13_23 - a02 * k13_03 + a03 * k13_02;
        let m22 = a00 * k13_13 - a01 * k13_03 + a03 * k13_01;
        let m23 = a00 * k13_12 - a01 * k13_02 + a02 * k13_01;

        let m30 = a01 * k12_23 - a02 * k12_13 + a03 * k12_12;
        let m31 = a00 * k12_23 - a02 * k12_03 + a03 * k12_02;
        let m32 = a00 * k12_13 - a01 * k12_03 + a03 * k12_01;
        let m33 = a00 * k12_12 - a01 * k12_02 + a02 * k12_01;

        cofactor.data = [
            m00, m01, m02, m03, //
            m10, m11, m12, m13, //
            m20, m21, m22, m23, //
            m30, m31, m32, m33, //
        ];
        algebraic_cofactor.data = [
            m00, -m01, m02, -m03, //
            -m10, m11, -m12, m13, //
            m20, -m21, m22, -m23, //
            -m30, m31, -m32, m33, //
        ];

        determinant
    }

    /// Inverse via the adjugate.
    ///
    /// A singular matrix (determinant exactly 0) logs a warning and yields
    /// the identity. Use [`Matrix4::inverse_into`] to observe the outcome or
    /// [`Matrix4::try_inverse`] to get an error instead.
    pub fn inverse(&self) -> Matrix4 {
        let mut out = Self::ZERO;
        let _ = self.inverse_into(&mut out);
        out
    }

    /// Inverse written into `target`; the identity on a singular matrix
    pub fn inverse_into(&self, target: &mut Matrix4) -> Inversion {
        match self.adjugate_inverse() {
            Some(inv) => {
                *target = inv;
                Inversion::Inverted
            }
            None => {
                log::warn!("cannot invert matrix, determinant is 0; falling back to identity");
                target.set_identity();
                Inversion::SingularFallback
            }
        }
    }

    /// Invert in place; the identity on a singular matrix
    pub fn inverse_assign(&mut self) -> Inversion {
        let src = *self;
        src.inverse_into(self)
    }

    /// Strict inverse: fails on a singular matrix instead of substituting the identity
    pub fn try_inverse(&self) -> MathResult<Matrix4> {
        self.adjugate_inverse().ok_or(MathError::SingularMatrix)
    }

    fn adjugate_inverse(&self) -> Option<Matrix4> {
        let Cofactors {
            algebraic_cofactor,
            determinant,
            ..
        } = self.det();
        if determinant == 0.0 {
            return None;
        }

        let mut inv = algebraic_cofactor.transpose();
        for v in inv.data.iter_mut() {
            *v /= determinant;
        }
        Some(inv)
    }

    /// Check if this matrix is approximately the identity
    pub fn is_identity(&self) -> bool {
        self.abs_diff_eq(&Self::IDENTITY, IDENTITY_TOLERANCE)
    }

    /// True when every element differs from `other` by less than `epsilon`
    pub fn abs_diff_eq(&self, other: &Matrix4, epsilon: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

// A row past 3 would still land inside the 16-float buffer.
#[inline]
fn check_cell(row: usize, col: usize) {
    assert!(
        row < 4 && col < 4,
        "cell ({row}, {col}) out of range for a 4x4 matrix"
    );
}

fn check_packed_len(len: usize) -> MathResult<()> {
    if len % MATRIX4_LEN != 0 {
        log::debug!("rejecting packed matrix buffer of {len} floats");
        return Err(MathError::buffer_length(len.next_multiple_of(MATRIX4_LEN), len));
    }
    Ok(())
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Matrix4 {
    fn from(data: [f32; 16]) -> Self {
        Matrix4 { data }
    }
}

impl From<Matrix4> for [f32; 16] {
    fn from(m: Matrix4) -> Self {
        m.data
    }
}

impl TryFrom<&[f32]> for Matrix4 {
    type Error = MathError;

    fn try_from(source: &[f32]) -> MathResult<Self> {
        Self::from_slice(source)
    }
}

// lin_alg's Mat4 is column-major too, so the buffers carry over unchanged.
impl From<Mat4> for Matrix4 {
    fn from(m: Mat4) -> Self {
        Matrix4 { data: m.data }
    }
}

impl From<Matrix4> for Mat4 {
    fn from(m: Matrix4) -> Self {
        Mat4 { data: m.data }
    }
}

impl Add for Matrix4 {
    type Output = Matrix4;

    fn add(self, rhs: Matrix4) -> Matrix4 {
        Matrix4::add(&self, &rhs)
    }
}

impl Sub for Matrix4 {
    type Output = Matrix4;

    fn sub(self, rhs: Matrix4) -> Matrix4 {
        Matrix4::sub(&self, &rhs)
    }
}

/// `a * b` is `Matrix4::multiply(&a, &b)`: apply `b`, then `a`
impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        Matrix4::multiply(&self, &rhs)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            let r = self.row(row);
            writeln!(f, "[{}, {}, {}, {}]", r[0], r[1], r[2], r[3])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix4 {
        Matrix4::from_rows([
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 3.0, 0.0, -1.0],
            [0.0, 1.0, 4.0, 2.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    fn assert_close(a: &Matrix4, b: &Matrix4, eps: f32) {
        for i in 0..16 {
            assert!(
                (a.data[i] - b.data[i]).abs() < eps,
                "mismatch at index {i}: {} vs {}",
                a.data[i],
                b.data[i]
            );
        }
    }

    #[test]
    fn test_identity_layout() {
        let id = Matrix4::identity();
        assert_eq!(id.data[0], 1.0);
        assert_eq!(id.data[5], 1.0);
        assert_eq!(id.data[10], 1.0);
        assert_eq!(id.data[15], 1.0);
        assert_eq!(id.data.iter().sum::<f32>(), 4.0);
        assert_eq!(Matrix4::default(), id);

        let mut m = sample();
        m.set_identity();
        assert_eq!(m, id);
    }

    #[test]
    fn test_column_major_indexing() {
        let m = sample();
        // row 0, col 3 sits at 4*3 + 0
        assert_eq!(m.get(0, 3), 3.0);
        assert_eq!(m.data[12], 3.0);
        assert_eq!(m.column(2), [1.0, 0.0, 4.0, 0.0]);
        assert_eq!(m.row(1), [1.0, 3.0, 0.0, -1.0]);
        assert_eq!(
            Matrix4::from_columns([m.column(0), m.column(1), m.column(2), m.column(3)]),
            m
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_row_out_of_range() {
        // (4, 0) would alias data[4], the (0, 1) element
        let _ = Matrix4::new(std::array::from_fn(|i| i as f32)).get(4, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_row_out_of_range() {
        let mut m = Matrix4::IDENTITY;
        m.set(5, 0, 9.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_row_out_of_range() {
        let _ = sample().row(4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_column_out_of_range() {
        let _ = sample().column(4);
    }

    #[test]
    fn test_from_slice() {
        let src: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let m = Matrix4::from_slice(&src).unwrap();
        assert_eq!(m.as_slice(), src.as_slice());

        let mut target = Matrix4::identity();
        target.copy_from_slice(&src).unwrap();
        assert_eq!(target, m);
    }

    #[test]
    fn test_from_slice_length_mismatch() {
        let short = [1.0f32; 9];
        assert_eq!(
            Matrix4::from_slice(&short),
            Err(MathError::BufferLength { expected: 16, actual: 9 })
        );

        let mut target = sample();
        assert!(target.copy_from_slice(&[0.0; 17]).is_err());
        assert_eq!(target, sample());

        let mut out = [0.0f32; 12];
        assert!(sample().write_to_slice(&mut out).is_err());
    }

    #[test]
    fn test_cast_slice() {
        let mut buffer = vec![0.0f32; 32];
        buffer[..16].copy_from_slice(&Matrix4::IDENTITY.data);
        buffer[16..].copy_from_slice(&sample().data);

        let mats = Matrix4::cast_slice(&buffer).unwrap();
        assert_eq!(mats.len(), 2);
        assert!(mats[0].is_identity());
        assert_eq!(mats[1], sample());

        Matrix4::cast_slice_mut(&mut buffer).unwrap()[1].set_identity();
        assert_eq!(&buffer[16..], &Matrix4::IDENTITY.data);

        assert_eq!(
            Matrix4::cast_slice(&buffer[..20]).unwrap_err(),
            MathError::BufferLength { expected: 32, actual: 20 }
        );
    }

    #[test]
    fn test_add_sub() {
        let a = sample();
        let b = Matrix4::identity();
        let sum = Matrix4::add(&a, &b);
        assert_eq!(sum.get(0, 0), 3.0);
        assert_eq!(sum.get(3, 3), 2.0);
        assert_eq!(sum.get(1, 3), -1.0);
        assert_eq!(sum - b, a);

        let mut out = Matrix4::ZERO;
        Matrix4::sub_into(&a, &a, &mut out);
        assert_eq!(out, Matrix4::ZERO);
    }

    #[test]
    fn test_multiply_scalar() {
        let mut m = sample();
        m.multiply_scalar(2.0);
        assert_eq!(m.get(2, 2), 8.0);
        assert_eq!(m.get(1, 3), -2.0);

        let mut n = sample();
        n.data[7] = 0.1;
        let before = n;
        n.multiply_scalar(1.0);
        for i in 0..16 {
            assert_eq!(n.data[i].to_bits(), before.data[i].to_bits());
        }
    }

    #[test]
    fn test_transpose() {
        let m = sample();
        let t = m.transpose();
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(t.get(row, col), m.get(col, row));
            }
        }
        assert_eq!(t.transpose(), m);

        let mut in_place = m;
        in_place.transpose_assign();
        assert_eq!(in_place, t);
    }

    #[test]
    fn test_multiply_identity() {
        let m = sample();
        let id = Matrix4::identity();
        assert_close(&Matrix4::multiply(&id, &m), &m, 1e-6);
        assert_close(&Matrix4::multiply(&m, &id), &m, 1e-6);
    }

    #[test]
    fn test_multiply_order() {
        // scale x by 2, then translate x by 5
        let scale = Matrix4::from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let translate = Matrix4::from_rows([
            [1.0, 0.0, 0.0, 5.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let m = Matrix4::multiply(&translate, &scale);
        assert_eq!(m.get(0, 0), 2.0);
        assert_eq!(m.get(0, 3), 5.0);

        // the other order scales the translation too
        let n = scale * translate;
        assert_eq!(n.get(0, 3), 10.0);
    }

    #[test]
    fn test_multiply_in_place() {
        let a = sample();
        let b = sample().transpose();
        let expected = Matrix4::multiply(&a, &b);

        let mut pre = b;
        pre.pre_multiply(&a);
        assert_eq!(pre, expected);

        let mut post = a;
        post.post_multiply(&b);
        assert_eq!(post, expected);

        let mut square = a;
        square.post_multiply(&a);
        assert_eq!(square, Matrix4::multiply(&a, &a));
    }

    #[test]
    fn test_det_identity_and_zero() {
        let id = Matrix4::identity().det();
        assert_eq!(id.determinant, 1.0);
        assert_eq!(id.cofactor, Matrix4::IDENTITY);
        assert_eq!(id.algebraic_cofactor, Matrix4::IDENTITY);
        assert_eq!(Matrix4::ZERO.determinant(), 0.0);
    }

    #[test]
    fn test_det_known_value() {
        // upper-triangular: product of the diagonal
        let m = Matrix4::from_rows([
            [2.0, 7.0, -1.0, 4.0],
            [0.0, 3.0, 5.0, 2.0],
            [0.0, 0.0, -4.0, 9.0],
            [0.0, 0.0, 0.0, 0.5],
        ]);
        assert_eq!(m.determinant(), -12.0);
        assert_eq!(m.transpose().determinant(), -12.0);
        assert_eq!(sample().determinant(), 25.0);
    }

    #[test]
    fn test_cofactor_signs() {
        let c = sample().det();
        for col in 0..4 {
            for row in 0..4 {
                let minor = c.cofactor.get(row, col);
                let signed = c.algebraic_cofactor.get(row, col);
                if (row + col) % 2 == 0 {
                    assert_eq!(signed, minor);
                } else {
                    assert_eq!(signed, -minor);
                }
            }
        }
    }

    #[test]
    fn test_det_expansion_matches_other_columns() {
        let m = sample();
        let c = m.det();
        for col in 0..4 {
            let along_col: f32 = (0..4)
                .map(|row| m.get(row, col) * c.algebraic_cofactor.get(row, col))
                .sum();
            assert!((along_col - c.determinant).abs() < 1e-4, "column {col}");
        }
    }

    #[test]
    fn test_inverse_roundtrip() {
        let m = sample();
        let inv = m.inverse();
        assert!(Matrix4::multiply(&m, &inv).is_identity());
        assert!(Matrix4::multiply(&inv, &m).is_identity());
    }

    #[test]
    fn test_inverse_scale() {
        let m = Matrix4::from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 0.5, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let inv = m.try_inverse().unwrap();
        assert_eq!(inv.get(0, 0), 0.5);
        assert_eq!(inv.get(1, 1), 0.25);
        assert_eq!(inv.get(2, 2), 2.0);
        assert_eq!(inv.get(3, 3), 1.0);
    }

    #[test]
    fn test_inverse_singular_fallback() {
        let singular = Matrix4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [1.0, 2.0, 3.0, 4.0],
            [0.0, 1.0, 0.0, 2.0],
            [5.0, 0.0, 1.0, 1.0],
        ]);
        assert_eq!(singular.determinant(), 0.0);
        assert_eq!(singular.inverse(), Matrix4::IDENTITY);
        assert_eq!(Matrix4::ZERO.inverse(), Matrix4::IDENTITY);

        let mut target = sample();
        let outcome = singular.inverse_into(&mut target);
        assert!(outcome.is_singular());
        assert_eq!(target, Matrix4::IDENTITY);

        assert_eq!(singular.try_inverse(), Err(MathError::SingularMatrix));
    }

    #[test]
    fn test_inverse_assign() {
        let mut m = sample();
        assert_eq!(m.inverse_assign(), Inversion::Inverted);
        assert_close(&m, &sample().inverse(), 1e-6);
    }

    #[test]
    fn test_is_identity() {
        assert!(Matrix4::identity().is_identity());
        let mut m = Matrix4::identity();
        m.set(0, 3, 0.1);
        assert!(!m.is_identity());
    }

    #[test]
    fn test_display() {
        let m = Matrix4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let s = format!("{}", m);
        assert_eq!(s.lines().next(), Some("[1, 2, 3, 4]"));
        assert_eq!(s.lines().count(), 4);
    }

    #[test]
    fn test_lin_alg_layout() {
        let m = sample();
        let converted: Mat4 = m.into();
        assert_eq!(converted.data, m.data);
        assert_eq!(Matrix4::from(converted), m);
    }
}
