//! WML math primitives
//!
//! Small linear-algebra building blocks for graphics and geometry code:
//! - [`Matrix4`] - 4×4 single-precision matrix, column-major
//!   (`data[4 * col + row]`): composition, transpose, determinant with
//!   cofactor matrices, adjugate inverse
//! - [`Vector3`] - 3-component vector with a chaining in-place API
//!
//! All operations are pure computations over caller-owned values; nothing
//! is retained between calls.
//!
//! # Example
//!
//! ```rust
//! use wml_math::{Inversion, Matrix4};
//!
//! let scale = Matrix4::from_rows([
//!     [2.0, 0.0, 0.0, 0.0],
//!     [0.0, 2.0, 0.0, 0.0],
//!     [0.0, 0.0, 2.0, 0.0],
//!     [0.0, 0.0, 0.0, 1.0],
//! ]);
//!
//! let mut inv = Matrix4::ZERO;
//! assert_eq!(scale.inverse_into(&mut inv), Inversion::Inverted);
//! assert!(Matrix4::multiply(&scale, &inv).is_identity());
//!
//! // Singular input falls back to the identity and says so
//! assert!(Matrix4::ZERO.inverse_into(&mut inv).is_singular());
//! assert_eq!(inv, Matrix4::IDENTITY);
//! ```

mod error;
pub mod mat4;
pub mod vec3;

pub use error::{MathError, MathResult};
pub use mat4::{Cofactors, Inversion, Matrix4, IDENTITY_TOLERANCE, MATRIX4_LEN};
pub use vec3::Vector3;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Cofactors, Inversion, MathError, MathResult, Matrix4, Vector3};
}
