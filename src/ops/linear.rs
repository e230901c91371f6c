// src/ops/linear.rs
//! Linear operations: sums, grade extraction, scale-and-add, comparisons,
//! and the operator impls built on them.

use std::ops::{Add, Mul, Neg, Sub};

use crate::group;
use crate::multivector::Multivector;
use crate::ops::involution::negate;
use crate::ops::products::gp_scalar;
use crate::types::Scalar;

fn combine(
    a: &Multivector,
    b: &Multivector,
    both: fn(&[Scalar], &[Scalar], &mut [Scalar]),
    only_b: fn(&[Scalar], &mut [Scalar]),
) -> Multivector {
    let mut c = Multivector::zero();
    for g in 0..a.groups().len() {
        match (a.group(g), b.group(g)) {
            (Some(ac), Some(bc)) => both(ac, bc, c.group_mut(g)),
            (Some(ac), None) => group::copy(c.group_mut(g), ac),
            (None, Some(bc)) => only_b(bc, c.group_mut(g)),
            (None, None) => {}
        }
    }
    c
}

/// `a + b`. Groups present in either operand are present in the result.
pub fn add(a: &Multivector, b: &Multivector) -> Multivector {
    combine(a, b, group::add, |src, dst| group::copy(dst, src))
}

/// `a - b`. Groups present in either operand are present in the result.
pub fn subtract(a: &Multivector, b: &Multivector) -> Multivector {
    combine(a, b, group::sub, group::neg)
}

/// The groups of `a` selected by `group_bitmap`.
pub fn extract_grade(a: &Multivector, group_bitmap: u32) -> Multivector {
    let mut c = Multivector::zero();
    for (g, ac) in a.present_groups() {
        if group_bitmap & (1 << g) != 0 {
            group::copy(c.group_mut(g), ac);
        }
    }
    c
}

/// Scale and add scalar: `b * a + c`.
///
/// The scalar group of the result is present if `a` has one or `c != 0`.
pub fn sas(a: &Multivector, b: Scalar, c: Scalar) -> Multivector {
    let mut r = gp_scalar(a, b);
    if r.group(0).is_some() || c != 0.0 {
        r.group_mut(0)[0] += c;
    }
    r
}

/// Coordinate-wise equality within `eps`. A group missing on one side
/// compares as zero.
pub fn equals(a: &Multivector, b: &Multivector, eps: Scalar) -> bool {
    (0..a.groups().len()).all(|g| match (a.group(g), b.group(g)) {
        (Some(ac), Some(bc)) => group::equals(ac, bc, eps),
        (Some(c), None) | (None, Some(c)) => group::is_zero(c, eps),
        (None, None) => true,
    })
}

/// True if every coordinate of `a` is within `eps` of zero.
pub fn is_zero(a: &Multivector, eps: Scalar) -> bool {
    a.present_groups().all(|(_, c)| group::is_zero(c, eps))
}

impl Multivector {
    pub fn extract_grade(&self, group_bitmap: u32) -> Self {
        extract_grade(self, group_bitmap)
    }

    pub fn sas(&self, b: Scalar, c: Scalar) -> Self {
        sas(self, b, c)
    }

    /// Equality up to `eps` per coordinate.
    pub fn equals(&self, other: &Self, eps: Scalar) -> bool {
        equals(self, other, eps)
    }

    pub fn is_zero(&self, eps: Scalar) -> bool {
        is_zero(self, eps)
    }
}

impl Add for &Multivector {
    type Output = Multivector;
    fn add(self, rhs: &Multivector) -> Multivector {
        add(self, rhs)
    }
}

impl Add for Multivector {
    type Output = Multivector;
    fn add(self, rhs: Multivector) -> Multivector {
        add(&self, &rhs)
    }
}

impl Sub for &Multivector {
    type Output = Multivector;
    fn sub(self, rhs: &Multivector) -> Multivector {
        subtract(self, rhs)
    }
}

impl Sub for Multivector {
    type Output = Multivector;
    fn sub(self, rhs: Multivector) -> Multivector {
        subtract(&self, &rhs)
    }
}

impl Neg for &Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        negate(self)
    }
}

impl Neg for Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        negate(&self)
    }
}

impl Mul<Scalar> for &Multivector {
    type Output = Multivector;
    fn mul(self, s: Scalar) -> Multivector {
        gp_scalar(self, s)
    }
}

impl Mul<Scalar> for Multivector {
    type Output = Multivector;
    fn mul(self, s: Scalar) -> Multivector {
        gp_scalar(&self, s)
    }
}
