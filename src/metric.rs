// src/metric.rs
//! The conformal metric and the geometric product of null-basis blades.
//!
//! The null basis `[no, e1, e2, e3, ni]` has a non-diagonal metric
//! (`no · ni = -1`). Products are computed in the orthonormal eigenbasis
//! `[e+, e1, e2, e3, e-]` with `e+² = 1`, `e-² = -1`, where
//!
//! ```text
//! no = (e- - e+) / 2      e+ = ni / 2 - no
//! ni = e- + e+            e- = no + ni / 2
//! ```
//!
//! and the result is mapped back to the null basis.

use crate::basis::{NB_BLADES, SPACE_DIM};
use crate::blade::BasisBlade;
use crate::types::Scalar;

/// Inner products of the null basis vectors, `METRIC[i][j] = b_i · b_j`.
pub const METRIC: [[Scalar; SPACE_DIM]; SPACE_DIM] = [
    [0.0, 0.0, 0.0, 0.0, -1.0],
    [0.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [-1.0, 0.0, 0.0, 0.0, 0.0],
];

/// Squares of the orthonormal basis vectors `[e+, e1, e2, e3, e-]`.
pub const ORTHONORMAL_METRIC: [Scalar; SPACE_DIM] = [1.0, 1.0, 1.0, 1.0, -1.0];

/// A vector as a list of `(coefficient, basis vector index)` pairs.
type VectorTerms = &'static [(Scalar, usize)];

/// Null basis vectors written in the orthonormal basis.
const NULL_TO_ORTHONORMAL: [VectorTerms; SPACE_DIM] = [
    &[(-0.5, 0), (0.5, 4)],
    &[(1.0, 1)],
    &[(1.0, 2)],
    &[(1.0, 3)],
    &[(1.0, 0), (1.0, 4)],
];

/// Orthonormal basis vectors written in the null basis.
const ORTHONORMAL_TO_NULL: [VectorTerms; SPACE_DIM] = [
    &[(-1.0, 0), (0.5, 4)],
    &[(1.0, 1)],
    &[(1.0, 2)],
    &[(1.0, 3)],
    &[(1.0, 0), (0.5, 4)],
];

/// Dense blade-coordinate buffer indexed by bitmap.
pub type BladeSum = [Scalar; NB_BLADES];

/// Rewrite the unit blade `bitmap` in another basis, given how each basis
/// vector is expressed there. The blade is the outer product of its vectors.
fn change_basis(bitmap: u32, vectors: &[VectorTerms; SPACE_DIM]) -> BladeSum {
    let mut acc = [0.0; NB_BLADES];
    acc[0] = 1.0;
    for (i, terms) in vectors.iter().enumerate() {
        if (bitmap >> i) & 1 == 0 {
            continue;
        }
        let mut next = [0.0; NB_BLADES];
        for (b, &s) in acc.iter().enumerate() {
            if s == 0.0 {
                continue;
            }
            let blade = BasisBlade::new(b as u32, s);
            for &(coef, v) in terms.iter() {
                let r = blade.outer(&BasisBlade::new(1 << v, coef));
                if r.scale != 0.0 {
                    next[r.bitmap as usize] += r.scale;
                }
            }
        }
        acc = next;
    }
    acc
}

/// Geometric product of two unit null-basis blades, as a sum of null-basis
/// blades indexed by bitmap.
pub fn gp_null_blades(a: u32, b: u32) -> BladeSum {
    let a_orth = change_basis(a, &NULL_TO_ORTHONORMAL);
    let b_orth = change_basis(b, &NULL_TO_ORTHONORMAL);

    let mut product = [0.0; NB_BLADES];
    for (x, &sx) in a_orth.iter().enumerate() {
        if sx == 0.0 {
            continue;
        }
        for (y, &sy) in b_orth.iter().enumerate() {
            if sy == 0.0 {
                continue;
            }
            let r = BasisBlade::new(x as u32, sx)
                .gp_diagonal(&BasisBlade::new(y as u32, sy), &ORTHONORMAL_METRIC);
            product[r.bitmap as usize] += r.scale;
        }
    }

    let mut out = [0.0; NB_BLADES];
    for (z, &sz) in product.iter().enumerate() {
        if sz == 0.0 {
            continue;
        }
        for (w, &sw) in change_basis(z as u32, &ORTHONORMAL_TO_NULL).iter().enumerate() {
            out[w] += sz * sw;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO: u32 = 0b00001;
    const E1: u32 = 0b00010;
    const NI: u32 = 0b10000;

    #[test]
    fn vector_products_reproduce_the_metric() {
        for i in 0..SPACE_DIM {
            for j in 0..SPACE_DIM {
                let p = gp_null_blades(1 << i, 1 << j);
                assert_eq!(p[0], METRIC[i][j], "b{i} . b{j}");
            }
        }
    }

    #[test]
    fn no_times_ni() {
        // no ni = no . ni + no ^ ni = -1 + no^ni
        let p = gp_null_blades(NO, NI);
        assert_eq!(p[0], -1.0);
        assert_eq!(p[(NO | NI) as usize], 1.0);
        assert_eq!(p.iter().filter(|&&s| s != 0.0).count(), 2);
    }

    #[test]
    fn basis_changes_are_inverse() {
        for bitmap in 0..NB_BLADES as u32 {
            let orth = change_basis(bitmap, &NULL_TO_ORTHONORMAL);
            let mut back = [0.0; NB_BLADES];
            for (z, &s) in orth.iter().enumerate() {
                if s != 0.0 {
                    for (w, &t) in change_basis(z as u32, &ORTHONORMAL_TO_NULL).iter().enumerate() {
                        back[w] += s * t;
                    }
                }
            }
            for (w, &s) in back.iter().enumerate() {
                let expected = if w as u32 == bitmap { 1.0 } else { 0.0 };
                assert_eq!(s, expected, "blade {bitmap:05b}, component {w:05b}");
            }
        }
    }

    #[test]
    fn flat_point_squares_to_one() {
        let p = gp_null_blades(NO | NI, NO | NI);
        assert_eq!(p[0], 1.0);
        let q = gp_null_blades(E1 | NI, E1 | NI);
        assert_eq!(q.iter().filter(|&&s| s != 0.0).count(), 0);
    }
}
