// src/group.rs
//! Plain per-group coordinate utilities.
//!
//! Groups of equal length (1, 5 or 10 coordinates) share these routines; they
//! work on slices and never allocate. Division does not check for zero, so
//! IEEE `inf`/`NaN` propagate.

use crate::types::Scalar;

#[inline]
pub fn zero(dst: &mut [Scalar]) {
    dst.fill(0.0);
}

#[inline]
pub fn copy(dst: &mut [Scalar], src: &[Scalar]) {
    dst.copy_from_slice(src);
}

/// `dst = a + b`
#[inline]
pub fn add(a: &[Scalar], b: &[Scalar], dst: &mut [Scalar]) {
    for ((d, x), y) in dst.iter_mut().zip(a).zip(b) {
        *d = x + y;
    }
}

/// `dst = a - b`
#[inline]
pub fn sub(a: &[Scalar], b: &[Scalar], dst: &mut [Scalar]) {
    for ((d, x), y) in dst.iter_mut().zip(a).zip(b) {
        *d = x - y;
    }
}

/// `dst = -src`
#[inline]
pub fn neg(src: &[Scalar], dst: &mut [Scalar]) {
    for (d, x) in dst.iter_mut().zip(src) {
        *d = -x;
    }
}

/// `dst = src * s`
#[inline]
pub fn copy_mul(src: &[Scalar], dst: &mut [Scalar], s: Scalar) {
    for (d, x) in dst.iter_mut().zip(src) {
        *d = x * s;
    }
}

/// `dst = src / s`
#[inline]
pub fn copy_div(src: &[Scalar], dst: &mut [Scalar], s: Scalar) {
    for (d, x) in dst.iter_mut().zip(src) {
        *d = x / s;
    }
}

/// Elementwise `dst = a * b`.
#[inline]
pub fn mul(a: &[Scalar], b: &[Scalar], dst: &mut [Scalar]) {
    for ((d, x), y) in dst.iter_mut().zip(a).zip(b) {
        *d = x * y;
    }
}

/// Elementwise `dst = a / b`.
#[inline]
pub fn div(a: &[Scalar], b: &[Scalar], dst: &mut [Scalar]) {
    for ((d, x), y) in dst.iter_mut().zip(a).zip(b) {
        *d = x / y;
    }
}

/// True if every pair of coordinates differs by at most `eps`.
#[inline]
pub fn equals(a: &[Scalar], b: &[Scalar], eps: Scalar) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() <= eps)
}

/// True if every coordinate is within `eps` of zero.
#[inline]
pub fn is_zero(a: &[Scalar], eps: Scalar) -> bool {
    a.iter().all(|x| x.abs() <= eps)
}
