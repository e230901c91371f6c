// src/ops/norm.rs
//! Norms, versor inverse and versor application.

use crate::group;
use crate::multivector::Multivector;
use crate::ops::involution::reverse;
use crate::ops::linear::extract_grade;
use crate::ops::products::gp;
use crate::tables::tables;
use crate::types::Scalar;

/// Grades whose self-product contributes negatively to the squared norm
/// (the sign of the reverse).
#[inline]
const fn reverse_negates(g: usize) -> bool {
    g == 2 || g == 3
}

/// Squared norm `<a ~a>`, which may be negative in this metric.
pub fn norm2(a: &Multivector) -> Scalar {
    let t = tables();
    let mut n2 = 0.0;
    for (g, ac) in a.present_groups() {
        let mut c = [0.0];
        if let Some(k) = t.kernel(g, g, 0) {
            k.apply(ac, ac, &mut c);
        }
        if reverse_negates(g) {
            n2 -= c[0];
        } else {
            n2 += c[0];
        }
    }
    n2
}

/// `sqrt(|norm2(a)|)`.
pub fn norm(a: &Multivector) -> Scalar {
    norm2(a).abs().sqrt()
}

/// `a / norm(a)`. A null multivector yields `inf`/`NaN` coordinates.
pub fn unit(a: &Multivector) -> Multivector {
    let n = norm(a);
    let mut c = Multivector::zero();
    for (g, ac) in a.present_groups() {
        group::copy_div(ac, c.group_mut(g), n);
    }
    c
}

/// Inverse of a versor, `~a / norm2(a)`.
pub fn versor_inverse(a: &Multivector) -> Multivector {
    let n2 = norm2(a);
    let mut c = Multivector::zero();
    for (g, ac) in a.present_groups() {
        let d = if reverse_negates(g) { -n2 } else { n2 };
        group::copy_div(ac, c.group_mut(g), d);
    }
    c
}

/// `a b a⁻¹`, restricted to the groups of `b`.
pub fn apply_versor(a: &Multivector, b: &Multivector) -> Multivector {
    extract_grade(&gp(&gp(a, b), &versor_inverse(a)), b.gu())
}

/// `a b ~a`, restricted to the groups of `b`. Only correct when
/// `norm2(a) == 1`; this is not checked.
pub fn apply_unit_versor(a: &Multivector, b: &Multivector) -> Multivector {
    extract_grade(&gp(&gp(a, b), &reverse(a)), b.gu())
}

impl Multivector {
    pub fn norm2(&self) -> Scalar {
        norm2(self)
    }

    pub fn norm(&self) -> Scalar {
        norm(self)
    }

    pub fn unit(&self) -> Self {
        unit(self)
    }

    pub fn versor_inverse(&self) -> Self {
        versor_inverse(self)
    }

    /// Apply `self` as a versor to `other`.
    pub fn apply_versor(&self, other: &Self) -> Self {
        apply_versor(self, other)
    }

    /// Apply `self` as a unit versor to `other`.
    pub fn apply_unit_versor(&self, other: &Self) -> Self {
        apply_unit_versor(self, other)
    }
}
