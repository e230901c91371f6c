// src/views/mod.rs
//! Specialized multivector types.
//!
//! Each view stores a fixed subset of one coordinate group. Converting from a
//! [`Multivector`] is a fixed re-indexing (with sign flips where the view's
//! blade order differs from the canonical one); a multivector lacking the
//! group converts to all zeros. Converting back allocates only that group.

use crate::multivector::Multivector;
use crate::types::Scalar;

/// Declares a view struct with one public field per stored coordinate.
///
/// `field => [index] * sign` maps a field to an index of group `group`;
/// `fixed [index] = value` marks an implied coordinate that is written on
/// embedding and counted by `largest_coordinate`.
macro_rules! view {
    (
        $(#[$meta:meta])*
        $name:ident, group $g:literal $(, fixed [$fi:literal] = $fv:expr)*;
        $($field:ident => [$idx:literal] * $sign:expr),+ $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $(pub $field: $crate::types::Scalar,)+
        }

        impl $name {
            /// The multivector group this view reads and writes.
            pub const GROUP: usize = $g;

            #[allow(clippy::too_many_arguments)]
            pub const fn new($($field: $crate::types::Scalar),+) -> Self {
                Self { $($field),+ }
            }

            /// `(value, blade bitmap)` of every coordinate, implied ones
            /// first.
            fn entries(&self) -> Vec<($crate::types::Scalar, u32)> {
                let mut entries: Vec<($crate::types::Scalar, u32)> =
                    vec![$(($fv, $crate::basis::bitmap_of($g, $fi))),*];
                entries.extend([$(($sign * self.$field, $crate::basis::bitmap_of($g, $idx))),+]);
                entries
            }

            /// Largest absolute coordinate, implied coordinates included.
            pub fn largest_coordinate(&self) -> $crate::types::Scalar {
                self.largest_basis_blade().0
            }

            /// Largest absolute coordinate and the bitmap of its blade.
            pub fn largest_basis_blade(&self) -> ($crate::types::Scalar, u32) {
                $crate::views::first_max(self.entries().into_iter())
            }
        }

        impl From<&$crate::multivector::Multivector> for $name {
            fn from(mv: &$crate::multivector::Multivector) -> Self {
                match mv.group($g) {
                    Some(c) => Self { $($field: $sign * c[$idx]),+ },
                    None => Self::default(),
                }
            }
        }

        impl From<$crate::multivector::Multivector> for $name {
            fn from(mv: $crate::multivector::Multivector) -> Self {
                Self::from(&mv)
            }
        }

        impl From<$name> for $crate::multivector::Multivector {
            fn from(v: $name) -> Self {
                let mut mv = Self::zero();
                let c = mv.group_mut($g);
                $(c[$fi] = $fv;)*
                $(c[$idx] = $sign * v.$field;)+
                mv
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Display::fmt(&$crate::multivector::Multivector::from(*self), f)
            }
        }
    };
}

mod dual_line;
mod flat_point;
mod line;
mod normalized_point;
mod plane;
mod vector_e3;

pub use dual_line::DualLine;
pub use flat_point::FlatPoint;
pub use line::Line;
pub use normalized_point::{cga_point, NormalizedPoint};
pub use plane::Plane;
pub use vector_e3::VectorE3;

/// First entry of largest magnitude, as `(|value|, bitmap)`.
fn first_max(entries: impl Iterator<Item = (Scalar, u32)>) -> (Scalar, u32) {
    let mut best: Option<(Scalar, u32)> = None;
    for (v, bm) in entries {
        if best.map_or(true, |(m, _)| v.abs() > m) {
            best = Some((v.abs(), bm));
        }
    }
    best.unwrap_or((0.0, 0))
}

fn basis_vector(index: usize) -> Multivector {
    let mut mv = Multivector::zero();
    mv.set(1, index, 1.0);
    mv
}

/// The origin `no`.
pub fn no() -> Multivector {
    basis_vector(0)
}

pub fn e1() -> Multivector {
    basis_vector(1)
}

pub fn e2() -> Multivector {
    basis_vector(2)
}

pub fn e3() -> Multivector {
    basis_vector(3)
}

/// The point at infinity `ni`.
pub fn ni() -> Multivector {
    basis_vector(4)
}
