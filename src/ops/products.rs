// src/ops/products.rs
//! Bilinear product dispatchers.
//!
//! Every product is the geometric product restricted to a subset of kernels.
//! A dispatcher walks the present group pairs of its operands, runs the
//! kernels its rule selects, and allocates each output group (zeroed) the
//! first time a selected kernel targets it. Output groups no selected kernel
//! can write stay absent.

use crate::multivector::Multivector;
use crate::tables::tables;
use crate::types::Scalar;

/// The products built from the geometric-product kernels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Product {
    /// Geometric product.
    Geometric,
    /// Outer (wedge) product.
    Outer,
    /// Left contraction.
    LeftContraction,
    /// Scalar product.
    Scalar,
    /// Modified Hestenes inner product.
    ModifiedHestenes,
}

impl Product {
    /// Does this product keep the `(ga, gb) -> gc` part of the geometric
    /// product?
    #[inline]
    pub const fn selects(self, ga: usize, gb: usize, gc: usize) -> bool {
        match self {
            Product::Geometric => true,
            Product::Outer => gc == ga + gb,
            Product::LeftContraction => gb >= ga && gc == gb - ga,
            Product::Scalar => gc == 0,
            Product::ModifiedHestenes => {
                ga == 0 || gb == 0 || gc == if ga > gb { ga - gb } else { gb - ga }
            }
        }
    }
}

/// Run `product` on `a` and `b`.
pub fn product(kind: Product, a: &Multivector, b: &Multivector) -> Multivector {
    let t = tables();
    let mut c = Multivector::zero();
    for (ga, ac) in a.present_groups() {
        for (gb, bc) in b.present_groups() {
            for k in t.kernels_for(ga, gb) {
                if kind.selects(ga, gb, k.grade_c) {
                    k.apply(ac, bc, c.group_mut(k.grade_c));
                }
            }
        }
    }
    c
}

/// Geometric product.
pub fn gp(a: &Multivector, b: &Multivector) -> Multivector {
    product(Product::Geometric, a, b)
}

/// Outer product.
pub fn op(a: &Multivector, b: &Multivector) -> Multivector {
    product(Product::Outer, a, b)
}

/// Left contraction.
pub fn lc(a: &Multivector, b: &Multivector) -> Multivector {
    product(Product::LeftContraction, a, b)
}

/// Modified Hestenes inner product.
pub fn mhip(a: &Multivector, b: &Multivector) -> Multivector {
    product(Product::ModifiedHestenes, a, b)
}

/// Scalar product, as a bare scalar.
pub fn sp(a: &Multivector, b: &Multivector) -> Scalar {
    let t = tables();
    let mut c = [0.0];
    for (g, ac) in a.present_groups() {
        if let (Some(bc), Some(k)) = (b.group(g), t.kernel(g, g, 0)) {
            k.apply(ac, bc, &mut c);
        }
    }
    c[0]
}

/// Geometric product with a scalar. The result has the groups of `a`.
pub fn gp_scalar(a: &Multivector, s: Scalar) -> Multivector {
    let mut c = Multivector::zero();
    for (g, ac) in a.present_groups() {
        crate::group::copy_mul(ac, c.group_mut(g), s);
    }
    c
}

impl Multivector {
    /// Geometric product `self * other`.
    pub fn gp(&self, other: &Self) -> Self {
        gp(self, other)
    }

    /// Outer product `self ^ other`.
    pub fn op(&self, other: &Self) -> Self {
        op(self, other)
    }

    /// Left contraction of `other` by `self`.
    pub fn lc(&self, other: &Self) -> Self {
        lc(self, other)
    }

    pub fn sp(&self, other: &Self) -> Scalar {
        sp(self, other)
    }

    pub fn mhip(&self, other: &Self) -> Self {
        mhip(self, other)
    }

    /// Geometric product with a scalar.
    pub fn gp_scalar(&self, s: Scalar) -> Self {
        gp_scalar(self, s)
    }
}
