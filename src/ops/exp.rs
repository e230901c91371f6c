// src/ops/exp.rs
//! The exponential of a multivector.
//!
//! When `x * x` is (numerically) a scalar the result has a closed form. The
//! general case uses scaling and squaring around a truncated Taylor series,
//! with no convergence check.

use tracing::trace;

use crate::multivector::Multivector;
use crate::ops::linear::{add, sas};
use crate::ops::norm::norm2;
use crate::ops::products::{gp, gp_scalar};
use crate::types::Scalar;

/// Number of series terms used by [`exp_default`].
pub const DEFAULT_EXP_ORDER: u32 = 12;

/// Threshold on `norm2(x²) - scalar(x²)²` below which `x²` counts as a
/// scalar.
pub const EXP_SCALAR_SQUARE_EPS: Scalar = 1e-6;

/// `exp(x)` with [`DEFAULT_EXP_ORDER`] series terms.
pub fn exp_default(x: &Multivector) -> Multivector {
    exp(x, DEFAULT_EXP_ORDER)
}

/// `exp(x)`, using `order` Taylor terms when no closed form applies.
pub fn exp(x: &Multivector, order: u32) -> Multivector {
    let x2 = gp(x, x);
    let s = x2.scalar();
    if norm2(&x2) - s * s < EXP_SCALAR_SQUARE_EPS {
        trace!(square = s, "exp: closed form");
        return if s < 0.0 {
            let a = (-s).sqrt();
            sas(x, a.sin() / a, a.cos())
        } else if s > 0.0 {
            let a = s.sqrt();
            sas(x, a.sinh() / a, a.cosh())
        } else {
            sas(x, 1.0, 1.0)
        };
    }

    let mut result = Multivector::from_scalar(1.0);
    if order == 0 {
        return result;
    }

    // power of two bringing the largest coordinate below one
    let mut max_c = x.largest_coordinate() as i64;
    let mut scale: i64 = 1;
    if max_c > 1 {
        scale <<= 1;
    }
    while max_c != 0 {
        max_c >>= 1;
        scale <<= 1;
    }
    trace!(order, scale, "exp: series");

    let x_scaled = gp_scalar(x, 1.0 / scale as Scalar);
    let mut x_pow = Multivector::from_scalar(1.0);
    for i in 1..=order {
        x_pow = gp_scalar(&gp(&x_pow, &x_scaled), 1.0 / i as Scalar);
        result = add(&result, &x_pow);
    }

    while scale > 1 {
        result = gp(&result, &result);
        scale >>= 1;
    }
    result
}

impl Multivector {
    /// Exponential with the default series order.
    pub fn exp(&self) -> Self {
        exp_default(self)
    }

    /// Exponential with an explicit series order.
    pub fn exp_with_order(&self, order: u32) -> Self {
        exp(self, order)
    }
}
