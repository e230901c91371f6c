// src/ops/mod.rs
//! Operations on [`Multivector`](crate::multivector::Multivector)s.
//!
//! Every operation is a free function taking its operands by reference and
//! returning a new value, mirrored as a method on `Multivector`.

pub mod dual;
pub mod exp;
pub mod involution;
pub mod linear;
pub mod norm;
pub mod products;

pub use dual::{dual, undual};
pub use exp::{exp, exp_default, DEFAULT_EXP_ORDER, EXP_SCALAR_SQUARE_EPS};
pub use involution::{clifford_conjugate, grade_involution, negate, reverse};
pub use linear::{add, equals, extract_grade, is_zero, sas, subtract};
pub use norm::{apply_unit_versor, apply_versor, norm, norm2, unit, versor_inverse};
pub use products::{gp, gp_scalar, lc, mhip, op, product, sp, Product};
