// src/basis.rs
//! Basis metadata for the 5-D conformal algebra.
//!
//! Basis vectors are `[no, e1, e2, e3, ni]`, bit `i` of a blade bitmap marks
//! basis vector `i`. Coordinates are stored grade by grade; within a grade,
//! blades appear in ascending bitmap order. All tables are `const` and are
//! derived from `BASIS_ELEMENT_BITMAP_BY_INDEX` where possible.

use crate::types::Scalar;

/// The dimension of the space.
pub const SPACE_DIM: usize = 5;

/// Number of coordinate groups (one per grade) in a multivector.
pub const NB_GROUPS: usize = 6;

/// Total number of basis blades (2^5).
pub const NB_BLADES: usize = 1 << SPACE_DIM;

/// Is the metric of the space Euclidean?
pub const METRIC_EUCLIDEAN: bool = false;

/// Names of the basis vectors, in canonical order.
pub const BASIS_VECTOR_NAMES: [&str; SPACE_DIM] = ["no", "e1", "e2", "e3", "ni"];

pub const GROUP_0: u32 = 1 << 0;
pub const GROUP_1: u32 = 1 << 1;
pub const GROUP_2: u32 = 1 << 2;
pub const GROUP_3: u32 = 1 << 3;
pub const GROUP_4: u32 = 1 << 4;
pub const GROUP_5: u32 = 1 << 5;
/// Usage bitmap with every group present.
pub const ALL_GROUPS: u32 = (1 << NB_GROUPS) - 1;

/// Usage-bitmap constants indexed by grade.
pub const GROUPS: [u32; NB_GROUPS] = [GROUP_0, GROUP_1, GROUP_2, GROUP_3, GROUP_4, GROUP_5];

/// Number of coordinates in each group.
pub const GROUP_SIZE: [usize; NB_GROUPS] = [1, 5, 10, 10, 5, 1];

/// Global index of the first coordinate of each group.
pub const GROUP_START: [usize; NB_GROUPS] = make_group_start();

/// Blade bitmap at each global coordinate index:
/// `[1, no, e1, e2, e3, ni, no^e1, no^e2, e1^e2, no^e3, ...]`
pub const BASIS_ELEMENT_BITMAP_BY_INDEX: [u32; NB_BLADES] = [
    0, 1, 2, 4, 8, 16, 3, 5, 6, 9, 10, 12, 17, 18, 20, 24, 7, 11, 13, 14, 19, 21, 22, 25, 26, 28,
    15, 23, 27, 29, 30, 31,
];

/// Global coordinate index of each blade bitmap.
pub const BASIS_ELEMENT_INDEX_BY_BITMAP: [usize; NB_BLADES] = make_index_by_bitmap();

/// Grade of each blade bitmap.
pub const BASIS_ELEMENT_GRADE_BY_BITMAP: [usize; NB_BLADES] = make_grade_by_bitmap();

/// Group of each blade bitmap. Groups coincide with grades in this algebra.
pub const BASIS_ELEMENT_GROUP_BY_BITMAP: [usize; NB_BLADES] = make_grade_by_bitmap();

/// Sign of the stored blade relative to canonical (ascending) order, by index.
pub const BASIS_ELEMENT_SIGN_BY_INDEX: [Scalar; NB_BLADES] = [1.0; NB_BLADES];

/// Sign of the stored blade relative to canonical (ascending) order, by bitmap.
pub const BASIS_ELEMENT_SIGN_BY_BITMAP: [Scalar; NB_BLADES] = [1.0; NB_BLADES];

/// Number of coordinates for every usage bitmap (64 entries).
pub const MV_SIZE: [usize; 1 << NB_GROUPS] = make_mv_size();

const fn make_group_start() -> [usize; NB_GROUPS] {
    let mut start = [0; NB_GROUPS];
    let mut g = 1;
    while g < NB_GROUPS {
        start[g] = start[g - 1] + GROUP_SIZE[g - 1];
        g += 1;
    }
    start
}

const fn make_index_by_bitmap() -> [usize; NB_BLADES] {
    let mut table = [0; NB_BLADES];
    let mut idx = 0;
    while idx < NB_BLADES {
        table[BASIS_ELEMENT_BITMAP_BY_INDEX[idx] as usize] = idx;
        idx += 1;
    }
    table
}

const fn make_grade_by_bitmap() -> [usize; NB_BLADES] {
    let mut table = [0; NB_BLADES];
    let mut bitmap = 0;
    while bitmap < NB_BLADES {
        table[bitmap] = (bitmap as u32).count_ones() as usize;
        bitmap += 1;
    }
    table
}

const fn make_mv_size() -> [usize; 1 << NB_GROUPS] {
    let mut table = [0; 1 << NB_GROUPS];
    let mut gu = 0;
    while gu < (1 << NB_GROUPS) {
        let mut g = 0;
        while g < NB_GROUPS {
            if (gu >> g) & 1 == 1 {
                table[gu] += GROUP_SIZE[g];
            }
            g += 1;
        }
        gu += 1;
    }
    table
}

/// Split a global coordinate index into `(group, index within group)`.
#[inline]
pub const fn group_of_index(index: usize) -> (usize, usize) {
    let mut g = NB_GROUPS - 1;
    while GROUP_START[g] > index {
        g -= 1;
    }
    (g, index - GROUP_START[g])
}

/// Split a blade bitmap into `(group, index within group)`.
#[inline]
pub const fn group_of_bitmap(bitmap: u32) -> (usize, usize) {
    group_of_index(BASIS_ELEMENT_INDEX_BY_BITMAP[bitmap as usize])
}

/// Blade bitmap stored at `(group, index within group)`.
#[inline]
pub const fn bitmap_of(group: usize, index: usize) -> u32 {
    BASIS_ELEMENT_BITMAP_BY_INDEX[GROUP_START[group] + index]
}

/// Basis vectors (indices into [`BASIS_VECTOR_NAMES`]) composing a blade, in
/// canonical order.
pub fn basis_vectors(bitmap: u32) -> impl Iterator<Item = usize> {
    (0..SPACE_DIM).filter(move |i| (bitmap >> i) & 1 == 1)
}

/// Name of a blade such as `no^e1^ni`; the scalar blade is `1`.
pub fn blade_name(bitmap: u32, wedge: &str) -> String {
    if bitmap == 0 {
        return "1".to_string();
    }
    basis_vectors(bitmap)
        .map(|i| BASIS_VECTOR_NAMES[i])
        .collect::<Vec<_>>()
        .join(wedge)
}

/// Index of a basis-vector name, if it is one.
pub fn basis_vector_index(name: &str) -> Option<usize> {
    BASIS_VECTOR_NAMES.iter().position(|&n| n == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_sizes_match_grade_counts() {
        for g in 0..NB_GROUPS {
            let count = (0..NB_BLADES)
                .filter(|&b| BASIS_ELEMENT_GROUP_BY_BITMAP[b] == g)
                .count();
            assert_eq!(count, GROUP_SIZE[g], "group {g}");
        }
        assert_eq!(GROUP_SIZE.iter().sum::<usize>(), NB_BLADES);
    }

    #[test]
    fn index_tables_are_inverse_bijections() {
        for idx in 0..NB_BLADES {
            let bm = BASIS_ELEMENT_BITMAP_BY_INDEX[idx];
            assert_eq!(BASIS_ELEMENT_INDEX_BY_BITMAP[bm as usize], idx);
        }
        for bm in 0..NB_BLADES {
            let idx = BASIS_ELEMENT_INDEX_BY_BITMAP[bm];
            assert_eq!(BASIS_ELEMENT_BITMAP_BY_INDEX[idx] as usize, bm);
        }
    }

    #[test]
    fn coordinates_are_grouped_by_grade_in_ascending_bitmap_order() {
        for g in 0..NB_GROUPS {
            let mut prev = None;
            for i in 0..GROUP_SIZE[g] {
                let bm = bitmap_of(g, i);
                assert_eq!(BASIS_ELEMENT_GRADE_BY_BITMAP[bm as usize], g);
                assert_eq!(group_of_bitmap(bm), (g, i));
                if let Some(p) = prev {
                    assert!(bm > p);
                }
                prev = Some(bm);
            }
        }
    }

    #[test]
    fn mv_size_counts_present_groups() {
        assert_eq!(MV_SIZE[0], 0);
        assert_eq!(MV_SIZE[GROUP_1 as usize], 5);
        assert_eq!(MV_SIZE[(GROUP_0 | GROUP_2) as usize], 11);
        assert_eq!(MV_SIZE[ALL_GROUPS as usize], 32);
        assert_eq!(MV_SIZE[33], 2);
    }

    #[test]
    fn blade_names() {
        assert_eq!(blade_name(0, "^"), "1");
        assert_eq!(blade_name(0b10001, "^"), "no^ni");
        assert_eq!(blade_name(bitmap_of(3, 6), "^"), "e1^e2^ni");
        assert_eq!(basis_vector_index("e3"), Some(3));
        assert_eq!(basis_vector_index("e4"), None);
    }
}
