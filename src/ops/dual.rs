// src/ops/dual.rs
//! Dual and undual with respect to the pseudoscalar `I = no^e1^e2^e3^ni`.
//!
//! `dual(A) = A ⌋ I⁻¹` and `undual(A) = A ⌋ I`, with `I⁻¹ = -I`. Both are
//! signed permutations mapping group `g` onto group `5 - g`; the maps are
//! tabulated in [`crate::tables`].

use crate::basis::NB_GROUPS;
use crate::multivector::Multivector;
use crate::tables::{tables, GroupMap};

fn map_groups<'a>(a: &Multivector, map: impl Fn(usize) -> &'a GroupMap) -> Multivector {
    let mut c = Multivector::zero();
    for (g, ac) in a.present_groups() {
        map(g).apply(ac, c.group_mut(NB_GROUPS - 1 - g));
    }
    c
}

pub fn dual(a: &Multivector) -> Multivector {
    let t = tables();
    map_groups(a, |g| t.dual_map(g))
}

pub fn undual(a: &Multivector) -> Multivector {
    let t = tables();
    map_groups(a, |g| t.undual_map(g))
}

impl Multivector {
    /// Dual with respect to the full pseudoscalar.
    pub fn dual(&self) -> Self {
        dual(self)
    }

    /// Inverse of [`Multivector::dual`].
    pub fn undual(&self) -> Self {
        undual(self)
    }
}
