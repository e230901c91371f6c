// src/multivector.rs
//! The general multivector: six optional coordinate groups, one per grade.
//!
//! An absent group stands for all-zero coordinates and is never materialized
//! until something writes to it. The usage bitmap (`gu`) is derived from which
//! groups are present.

use crate::basis::{
    group_of_bitmap, GROUP_SIZE, MV_SIZE, NB_GROUPS, BASIS_ELEMENT_BITMAP_BY_INDEX, GROUP_START,
};
use crate::error::{CgaError, Result};
use crate::group;
use crate::types::{Group, Scalar};

/// A multivector of the conformal algebra over `[no, e1, e2, e3, ni]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Multivector {
    groups: [Option<Group>; NB_GROUPS],
}

impl Multivector {
    /// The zero multivector (no groups present).
    pub fn zero() -> Self {
        Self::default()
    }

    /// A pure scalar. The scalar group is present even if `s == 0`.
    pub fn from_scalar(s: Scalar) -> Self {
        let mut mv = Self::zero();
        mv.groups[0] = Some(vec![s]);
        mv
    }

    /// Build from a usage bitmap and the coordinates of the present groups,
    /// concatenated in ascending grade order.
    pub fn from_compressed(gu: u32, coordinates: &[Scalar]) -> Result<Self> {
        if gu >= 1 << NB_GROUPS {
            return Err(CgaError::InvalidUsage(gu));
        }
        let expected = MV_SIZE[gu as usize];
        if coordinates.len() != expected {
            return Err(CgaError::CoordinateCount {
                usage: gu,
                expected,
                got: coordinates.len(),
            });
        }
        let mut mv = Self::zero();
        let mut offset = 0;
        for g in 0..NB_GROUPS {
            if gu & (1 << g) != 0 {
                let end = offset + GROUP_SIZE[g];
                mv.groups[g] = Some(coordinates[offset..end].to_vec());
                offset = end;
            }
        }
        Ok(mv)
    }

    /// Build from six optional groups. Present groups must have the length of
    /// their grade.
    pub fn from_groups(groups: [Option<Group>; NB_GROUPS]) -> Result<Self> {
        for (g, slot) in groups.iter().enumerate() {
            check_group_len(g, slot.as_deref())?;
        }
        Ok(Self { groups })
    }

    /// Build from a full 32-coordinate array in global index order. Every
    /// group is present.
    pub fn from_coordinates(coordinates: &[Scalar; 32]) -> Self {
        let mut mv = Self::zero();
        for g in 0..NB_GROUPS {
            let start = GROUP_START[g];
            mv.groups[g] = Some(coordinates[start..start + GROUP_SIZE[g]].to_vec());
        }
        mv
    }

    /// Usage bitmap: bit `g` is set when group `g` is present.
    #[inline]
    pub fn gu(&self) -> u32 {
        self.groups
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_some())
            .fold(0, |acc, (g, _)| acc | (1 << g))
    }

    /// Coordinates of group `g`, if present.
    #[inline]
    pub fn group(&self, g: usize) -> Option<&[Scalar]> {
        self.groups[g].as_deref()
    }

    /// Coordinates of group `g`, allocating it to zeros if absent.
    #[inline]
    pub fn group_mut(&mut self, g: usize) -> &mut [Scalar] {
        self.groups[g].get_or_insert_with(|| vec![0.0; GROUP_SIZE[g]])
    }

    /// Replace (or with `None`, drop) group `g`.
    pub fn set_group(&mut self, g: usize, coordinates: Option<Group>) -> Result<()> {
        check_group_len(g, coordinates.as_deref())?;
        self.groups[g] = coordinates;
        Ok(())
    }

    /// All six group slots.
    #[inline]
    pub fn groups(&self) -> &[Option<Group>; NB_GROUPS] {
        &self.groups
    }

    /// Iterate over the present groups as `(grade, coordinates)`.
    pub fn present_groups(&self) -> impl Iterator<Item = (usize, &[Scalar])> {
        self.groups
            .iter()
            .enumerate()
            .filter_map(|(g, c)| c.as_deref().map(|c| (g, c)))
    }

    /// Coordinates of the present groups, concatenated in grade order. The
    /// inverse of [`Multivector::from_compressed`].
    pub fn compressed_coordinates(&self) -> Vec<Scalar> {
        self.present_groups().flat_map(|(_, c)| c.iter().copied()).collect()
    }

    /// All 32 coordinates in global index order; absent groups read as zero.
    pub fn to_coordinates(&self) -> [Scalar; 32] {
        let mut out = [0.0; 32];
        for (g, c) in self.present_groups() {
            out[GROUP_START[g]..GROUP_START[g] + GROUP_SIZE[g]].copy_from_slice(c);
        }
        out
    }

    /// Coordinate `i` of group `g`; zero if the group is absent.
    #[inline]
    pub fn get(&self, g: usize, i: usize) -> Scalar {
        self.groups[g].as_ref().map_or(0.0, |c| c[i])
    }

    /// Set coordinate `i` of group `g`, allocating the group if needed.
    #[inline]
    pub fn set(&mut self, g: usize, i: usize, value: Scalar) {
        self.group_mut(g)[i] = value;
    }

    /// Coordinate of the blade with the given bitmap.
    #[inline]
    pub fn get_by_bitmap(&self, bitmap: u32) -> Scalar {
        let (g, i) = group_of_bitmap(bitmap);
        self.get(g, i)
    }

    /// Set the coordinate of the blade with the given bitmap.
    #[inline]
    pub fn set_by_bitmap(&mut self, bitmap: u32, value: Scalar) {
        let (g, i) = group_of_bitmap(bitmap);
        self.set(g, i, value);
    }

    /// Drop every group whose coordinates are all within `eps` of zero.
    pub fn compress(&mut self, eps: Scalar) {
        for slot in self.groups.iter_mut() {
            if slot.as_deref().is_some_and(|c| group::is_zero(c, eps)) {
                *slot = None;
            }
        }
    }

    /// Largest absolute coordinate, zero for the zero multivector.
    pub fn largest_coordinate(&self) -> Scalar {
        self.largest_basis_blade().0
    }

    /// Largest absolute coordinate together with the bitmap of its blade.
    /// The first maximum in index order wins; a multivector with no groups
    /// yields `(0, 0)`.
    pub fn largest_basis_blade(&self) -> (Scalar, u32) {
        let mut best: Option<(Scalar, u32)> = None;
        for (g, c) in self.present_groups() {
            for (i, x) in c.iter().enumerate() {
                if best.map_or(true, |(m, _)| x.abs() > m) {
                    best = Some((x.abs(), BASIS_ELEMENT_BITMAP_BY_INDEX[GROUP_START[g] + i]));
                }
            }
        }
        best.unwrap_or((0.0, 0))
    }
}

fn check_group_len(g: usize, coordinates: Option<&[Scalar]>) -> Result<()> {
    match coordinates {
        Some(c) if c.len() != GROUP_SIZE[g] => Err(CgaError::GroupSize {
            group: g,
            expected: GROUP_SIZE[g],
            got: c.len(),
        }),
        _ => Ok(()),
    }
}

impl From<Scalar> for Multivector {
    fn from(s: Scalar) -> Self {
        Self::from_scalar(s)
    }
}

macro_rules! coordinate_accessors {
    ($($get:ident, $set:ident => ($g:expr, $i:expr);)*) => {
        impl Multivector {
            $(
                #[doc = concat!("The `", stringify!($get), "` coordinate; zero if its group is absent.")]
                #[inline]
                pub fn $get(&self) -> Scalar {
                    self.get($g, $i)
                }

                #[doc = concat!("Set the `", stringify!($get), "` coordinate, allocating its group.")]
                #[inline]
                pub fn $set(&mut self, value: Scalar) {
                    self.set($g, $i, value)
                }
            )*
        }
    };
}

coordinate_accessors! {
    scalar, set_scalar => (0, 0);
    no, set_no => (1, 0);
    e1, set_e1 => (1, 1);
    e2, set_e2 => (1, 2);
    e3, set_e3 => (1, 3);
    ni, set_ni => (1, 4);
    no_e1, set_no_e1 => (2, 0);
    no_e2, set_no_e2 => (2, 1);
    e1_e2, set_e1_e2 => (2, 2);
    no_e3, set_no_e3 => (2, 3);
    e1_e3, set_e1_e3 => (2, 4);
    e2_e3, set_e2_e3 => (2, 5);
    no_ni, set_no_ni => (2, 6);
    e1_ni, set_e1_ni => (2, 7);
    e2_ni, set_e2_ni => (2, 8);
    e3_ni, set_e3_ni => (2, 9);
    no_e1_e2, set_no_e1_e2 => (3, 0);
    no_e1_e3, set_no_e1_e3 => (3, 1);
    no_e2_e3, set_no_e2_e3 => (3, 2);
    e1_e2_e3, set_e1_e2_e3 => (3, 3);
    no_e1_ni, set_no_e1_ni => (3, 4);
    no_e2_ni, set_no_e2_ni => (3, 5);
    e1_e2_ni, set_e1_e2_ni => (3, 6);
    no_e3_ni, set_no_e3_ni => (3, 7);
    e1_e3_ni, set_e1_e3_ni => (3, 8);
    e2_e3_ni, set_e2_e3_ni => (3, 9);
    no_e1_e2_e3, set_no_e1_e2_e3 => (4, 0);
    no_e1_e2_ni, set_no_e1_e2_ni => (4, 1);
    no_e1_e3_ni, set_no_e1_e3_ni => (4, 2);
    no_e2_e3_ni, set_no_e2_e3_ni => (4, 3);
    e1_e2_e3_ni, set_e1_e2_e3_ni => (4, 4);
    no_e1_e2_e3_ni, set_no_e1_e2_e3_ni => (5, 0);
}
