// src/blade.rs
//! Scaled basis blades: the unit of work for building product tables and for
//! the multivector parser.
//!
//! A blade is a bitmap of basis vectors plus a scale. Products of two blades
//! under a diagonal metric are a single blade: the result bitmap is `a ^ b`
//! and the sign is determined by counting bit swaps.

use crate::basis::SPACE_DIM;
use crate::types::Scalar;

/// A basis blade `scale * e_i ^ e_j ^ ...` in canonical (ascending) order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BasisBlade {
    /// Which basis vectors the blade contains.
    pub bitmap: u32,
    /// Coefficient of the blade.
    pub scale: Scalar,
}

/// Sign (±1) of reordering `a ∧ b` into canonical order.
///
/// For every basis vector in `a`, count the vectors of `b` that have to move
/// past it.
#[inline]
pub const fn canonical_reordering_sign(a: u32, b: u32) -> Scalar {
    let mut swaps = 0u32;
    let mut bit = 0;
    while bit < SPACE_DIM {
        if (a >> bit) & 1 == 1 {
            swaps += (b & ((1 << bit) - 1)).count_ones();
        }
        bit += 1;
    }
    if swaps & 1 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl BasisBlade {
    /// A blade with the given bitmap and scale.
    #[inline]
    pub const fn new(bitmap: u32, scale: Scalar) -> Self {
        Self { bitmap, scale }
    }

    /// The unit scalar blade, the starting point of incremental wedging.
    #[inline]
    pub const fn one() -> Self {
        Self::new(0, 1.0)
    }

    /// Number of basis vectors in the blade.
    #[inline]
    pub const fn grade(&self) -> usize {
        self.bitmap.count_ones() as usize
    }

    /// Outer product. Zero if the blades share a basis vector.
    #[inline]
    pub fn outer(&self, other: &Self) -> Self {
        if self.bitmap & other.bitmap != 0 {
            return Self::new(0, 0.0);
        }
        let sign = canonical_reordering_sign(self.bitmap, other.bitmap);
        Self::new(self.bitmap | other.bitmap, sign * self.scale * other.scale)
    }

    /// Geometric product under a diagonal metric (`metric[i] = e_i · e_i`).
    #[inline]
    pub fn gp_diagonal(&self, other: &Self, metric: &[Scalar; SPACE_DIM]) -> Self {
        let mut scale = canonical_reordering_sign(self.bitmap, other.bitmap) * self.scale * other.scale;
        let common = self.bitmap & other.bitmap;
        for (i, m) in metric.iter().enumerate() {
            if (common >> i) & 1 == 1 {
                scale *= *m;
            }
        }
        Self::new(self.bitmap ^ other.bitmap, scale)
    }

    /// Wedge basis vector `index` onto the right of this blade, in place.
    ///
    /// Wedging a vector that is already present annihilates the blade.
    /// Otherwise the scale flips once per higher-indexed vector it crosses.
    pub fn wedge_basis_vector(&mut self, index: usize) {
        let b = 1u32 << index;
        if self.bitmap & b != 0 {
            self.scale = 0.0;
            return;
        }
        self.bitmap |= b;
        for higher in (index + 1)..SPACE_DIM {
            if self.bitmap & (1 << higher) != 0 {
                self.scale = -self.scale;
            }
        }
    }

    /// Multiply the scale by `s`, in place.
    #[inline]
    pub fn multiply(&mut self, s: Scalar) {
        self.scale *= s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EUCLIDEAN: [Scalar; SPACE_DIM] = [1.0; SPACE_DIM];

    #[test]
    fn reordering_sign() {
        // e1 ^ e2 is canonical, e2 ^ e1 needs one swap
        assert_eq!(canonical_reordering_sign(0b01, 0b10), 1.0);
        assert_eq!(canonical_reordering_sign(0b10, 0b01), -1.0);
        // e12 * e12: one swap
        assert_eq!(canonical_reordering_sign(0b11, 0b11), -1.0);
    }

    #[test]
    fn outer_annihilates_shared_vectors() {
        let a = BasisBlade::new(0b011, 2.0);
        let b = BasisBlade::new(0b010, 3.0);
        assert_eq!(a.outer(&b).scale, 0.0);
        let c = BasisBlade::new(0b100, 3.0);
        assert_eq!(a.outer(&c), BasisBlade::new(0b111, 6.0));
    }

    #[test]
    fn euclidean_gp_of_bivector_squares_to_minus_one() {
        let e12 = BasisBlade::new(0b011, 1.0);
        assert_eq!(e12.gp_diagonal(&e12, &EUCLIDEAN), BasisBlade::new(0, -1.0));
    }

    #[test]
    fn wedging_tracks_anticommutation() {
        // e1 ^ no = -no ^ e1
        let mut bb = BasisBlade::one();
        bb.wedge_basis_vector(1);
        bb.wedge_basis_vector(0);
        assert_eq!(bb, BasisBlade::new(0b11, -1.0));

        // ni ^ e2 ^ no: two swaps to move no left, one to move e2 left of ni
        let mut bb = BasisBlade::one();
        bb.wedge_basis_vector(4);
        bb.wedge_basis_vector(2);
        bb.wedge_basis_vector(0);
        assert_eq!(bb.bitmap, 0b10101);
        assert_eq!(bb.scale, -1.0);

        bb.wedge_basis_vector(2);
        assert_eq!(bb.scale, 0.0);
    }
}
