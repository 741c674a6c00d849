//! Quaternions over `f64`: construction from several source kinds,
//! the Hamilton product in both directions, conjugate, inverse and
//! division.
//!
//! ```
//! use num_complex::Complex64;
//! use quaternion::Quaternion;
//!
//! let u = Quaternion::from(Complex64::new(1.0, 6.0));
//! let v = Quaternion::from([-12.0, 4.0, 7.0, -1.0]);
//!
//! assert_eq!((u + v).to_string(), "-11 + 10i + 7j - 1k");
//! assert_ne!(u * v, v * u);
//! assert!(u.try_div(Quaternion::ZERO).is_err());
//! ```

mod checked;
pub mod config;
pub mod error;
pub mod operand;
pub mod quaternion;

pub use crate::error::{DomainError, QuatResult};
pub use crate::operand::Operand;
pub use crate::quaternion::Quaternion;
