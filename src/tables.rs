// src/tables.rs
//! Structure-constant tables of the conformal algebra.
//!
//! Every grade triple `(ga, gb, gc)` for which the geometric product of a
//! grade-`ga` group and a grade-`gb` group has a nonzero grade-`gc` part gets
//! one [`Kernel`]: a flat list of `(coef, ia, ib, ic)` terms meaning
//! `C[ic] += coef * A[ia] * B[ib]`. The tables are generated once, on first
//! use, from [`crate::metric`], and shared read-only afterwards.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::basis::{bitmap_of, group_of_bitmap, GROUP_SIZE, NB_GROUPS};
use crate::metric::gp_null_blades;
use crate::types::Scalar;

/// One term of a kernel: `C[c] += coef * A[a] * B[b]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Term {
    pub coef: Scalar,
    pub a: u8,
    pub b: u8,
    pub c: u8,
}

/// One sparse block of the multiplication tensor, mapping a pair of grade
/// groups into one output grade group.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    pub grade_a: usize,
    pub grade_b: usize,
    pub grade_c: usize,
    pub terms: Vec<Term>,
}

impl Kernel {
    /// Accumulate the contribution of `a` and `b` into `c`.
    ///
    /// `c` must already be initialized; kernels never overwrite or allocate.
    #[inline]
    pub fn apply(&self, a: &[Scalar], b: &[Scalar], c: &mut [Scalar]) {
        debug_assert_eq!(a.len(), GROUP_SIZE[self.grade_a]);
        debug_assert_eq!(b.len(), GROUP_SIZE[self.grade_b]);
        debug_assert_eq!(c.len(), GROUP_SIZE[self.grade_c]);
        for t in &self.terms {
            c[t.c as usize] += t.coef * a[t.a as usize] * b[t.b as usize];
        }
    }
}

/// A signed re-indexing of one group into another (`dst[to] = coef * src[from]`).
#[derive(Clone, Debug, PartialEq)]
pub struct GroupMap {
    pub source_grade: usize,
    pub target_grade: usize,
    pub entries: Vec<(usize, usize, Scalar)>,
}

impl GroupMap {
    /// Write the image of `src` into `dst`, overwriting it.
    #[inline]
    pub fn apply(&self, src: &[Scalar], dst: &mut [Scalar]) {
        for &(from, to, coef) in &self.entries {
            dst[to] = coef * src[from];
        }
    }
}

/// All generated tables.
#[derive(Debug)]
pub struct ProductTables {
    kernels: Vec<Kernel>,
    // indices into `kernels`, by (grade_a, grade_b), ascending grade_c
    by_pair: [[Vec<usize>; NB_GROUPS]; NB_GROUPS],
    dual: Vec<GroupMap>,
    undual: Vec<GroupMap>,
}

static TABLES: Lazy<ProductTables> = Lazy::new(ProductTables::build);

/// The process-wide structure-constant tables.
#[inline]
pub fn tables() -> &'static ProductTables {
    &TABLES
}

impl ProductTables {
    fn build() -> Self {
        // dense (ga, gb, gc) -> terms accumulation
        let mut blocks: Vec<Vec<Term>> = vec![Vec::new(); NB_GROUPS * NB_GROUPS * NB_GROUPS];
        for ga in 0..NB_GROUPS {
            for ia in 0..GROUP_SIZE[ga] {
                let bm_a = bitmap_of(ga, ia);
                for gb in 0..NB_GROUPS {
                    for ib in 0..GROUP_SIZE[gb] {
                        let bm_b = bitmap_of(gb, ib);
                        let product = gp_null_blades(bm_a, bm_b);
                        for (bm_c, &coef) in product.iter().enumerate() {
                            if coef == 0.0 {
                                continue;
                            }
                            let (gc, ic) = group_of_bitmap(bm_c as u32);
                            blocks[(ga * NB_GROUPS + gb) * NB_GROUPS + gc].push(Term {
                                coef,
                                a: ia as u8,
                                b: ib as u8,
                                c: ic as u8,
                            });
                        }
                    }
                }
            }
        }

        let mut kernels = Vec::new();
        let mut by_pair: [[Vec<usize>; NB_GROUPS]; NB_GROUPS] = Default::default();
        for ga in 0..NB_GROUPS {
            for gb in 0..NB_GROUPS {
                for gc in 0..NB_GROUPS {
                    let terms = std::mem::take(&mut blocks[(ga * NB_GROUPS + gb) * NB_GROUPS + gc]);
                    if terms.is_empty() {
                        continue;
                    }
                    by_pair[ga][gb].push(kernels.len());
                    kernels.push(Kernel {
                        grade_a: ga,
                        grade_b: gb,
                        grade_c: gc,
                        terms,
                    });
                }
            }
        }

        let mut tables = Self {
            kernels,
            by_pair,
            dual: Vec::new(),
            undual: Vec::new(),
        };
        // dual(A) = A ⌋ I⁻¹ with I⁻¹ = -I; undual(A) = A ⌋ I
        tables.dual = (0..NB_GROUPS).map(|g| tables.pseudoscalar_map(g, -1.0)).collect();
        tables.undual = (0..NB_GROUPS).map(|g| tables.pseudoscalar_map(g, 1.0)).collect();

        debug!(
            kernels = tables.kernels.len(),
            terms = tables.kernels.iter().map(|k| k.terms.len()).sum::<usize>(),
            "built conformal product tables"
        );
        tables
    }

    /// The map `A_g -> A_g ⌋ (s I)` read off the `(g, 5, 5 - g)` kernel.
    fn pseudoscalar_map(&self, g: usize, s: Scalar) -> GroupMap {
        let target = NB_GROUPS - 1 - g;
        let entries = self
            .kernel(g, NB_GROUPS - 1, target)
            .map(|k| k.terms.iter().map(|t| (t.a as usize, t.c as usize, s * t.coef)).collect())
            .unwrap_or_default();
        GroupMap {
            source_grade: g,
            target_grade: target,
            entries,
        }
    }

    /// All kernels, ordered by `(grade_a, grade_b, grade_c)`.
    pub fn kernels(&self) -> &[Kernel] {
        &self.kernels
    }

    /// Kernels taking groups `(ga, gb)`, ascending output grade.
    #[inline]
    pub fn kernels_for(&self, ga: usize, gb: usize) -> impl Iterator<Item = &Kernel> + '_ {
        self.by_pair[ga][gb].iter().map(move |&k| &self.kernels[k])
    }

    /// The kernel `(ga, gb) -> gc`, if the structure constants there are not
    /// all zero.
    pub fn kernel(&self, ga: usize, gb: usize, gc: usize) -> Option<&Kernel> {
        self.kernels_for(ga, gb).find(|k| k.grade_c == gc)
    }

    /// Dual map of group `g` into group `5 - g`.
    #[inline]
    pub fn dual_map(&self, g: usize) -> &GroupMap {
        &self.dual[g]
    }

    /// Undual map of group `g` into group `5 - g`.
    #[inline]
    pub fn undual_map(&self, g: usize) -> &GroupMap {
        &self.undual[g]
    }
}
