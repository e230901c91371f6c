// src/views/vector_e3.rs
//! Euclidean 3-vectors inside the conformal algebra.
//!
//! The metric helpers below run through the general products, so they agree
//! with the algebra by construction.

use crate::multivector::Multivector;
use crate::ops::{lc, norm, op, sp};
use crate::types::Scalar;

view! {
    /// A Euclidean vector `x e1 + y e2 + z e3`.
    VectorE3, group 1;
    e1 => [1] * 1.0,
    e2 => [2] * 1.0,
    e3 => [3] * 1.0,
}

/// `(e1^e2^e3)⁻¹ = -e1^e2^e3`.
fn euclidean_pseudoscalar_inverse() -> Multivector {
    let mut i3 = Multivector::zero();
    i3.set_e1_e2_e3(-1.0);
    i3
}

impl VectorE3 {
    /// Scalar product of the embedded vectors.
    pub fn dot(&self, other: &Self) -> Scalar {
        sp(&(*self).into(), &(*other).into())
    }

    /// The Euclidean dual of `self ^ other`: `(a ^ b) ⌋ (e1^e2^e3)⁻¹`.
    pub fn cross(&self, other: &Self) -> Self {
        let wedge = op(&(*self).into(), &(*other).into());
        Self::from(lc(&wedge, &euclidean_pseudoscalar_inverse()))
    }

    /// Length under the conformal norm, which is Euclidean on `e1, e2, e3`.
    pub fn norm(&self) -> Scalar {
        norm(&(*self).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_is_euclidean() {
        let a = VectorE3::new(1.0, 2.0, 3.0);
        let b = VectorE3::new(-2.0, 0.5, 4.0);
        assert_eq!(a.dot(&b), 11.0);
        assert_eq!(VectorE3::new(3.0, 4.0, 0.0).norm(), 5.0);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = VectorE3::new(1.0, 0.0, 0.0);
        let y = VectorE3::new(0.0, 1.0, 0.0);
        let z = VectorE3::new(0.0, 0.0, 1.0);
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
        assert_eq!(y.cross(&x), VectorE3::new(0.0, 0.0, -1.0));

        let a = VectorE3::new(1.0, 2.0, 3.0);
        let b = VectorE3::new(-2.0, 0.5, 4.0);
        let c = a.cross(&b);
        assert_eq!(c, VectorE3::new(6.5, -10.0, 4.5));
        assert_eq!(c.dot(&a), 0.0);
        assert_eq!(c.dot(&b), 0.0);
    }

    #[test]
    fn conversion_ignores_null_components() {
        let mut mv = Multivector::zero();
        mv.set_no(5.0);
        mv.set_e2(1.0);
        mv.set_ni(-3.0);
        let v = VectorE3::from(&mv);
        assert_eq!(v, VectorE3::new(0.0, 1.0, 0.0));
        assert_eq!(Multivector::from(v).group(1).unwrap(), &[0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(v.to_string(), "1.00*e2");
    }
}
