// src/views/normalized_point.rs
//! Conformal points with unit `no` coordinate.

use crate::ops::op;
use crate::types::Scalar;
use crate::views::{ni, FlatPoint, Line, Plane, VectorE3};

view! {
    /// A point `no + x e1 + y e2 + z e3 + ni * |x|² / 2`. The `no` coordinate
    /// is implied to be 1 and is not stored.
    NormalizedPoint, group 1, fixed [0] = 1.0;
    e1 => [1] * 1.0,
    e2 => [2] * 1.0,
    e3 => [3] * 1.0,
    ni => [4] * 1.0,
}

/// Embed the Euclidean point `(x, y, z)`.
pub fn cga_point(x: Scalar, y: Scalar, z: Scalar) -> NormalizedPoint {
    NormalizedPoint::new(x, y, z, 0.5 * x * x + 0.5 * y * y + 0.5 * z * z)
}

impl NormalizedPoint {
    /// The point a flat point `p ^ ni` represents: its `e_i ^ ni` coordinates
    /// divided by the `no ^ ni` weight.
    pub fn from_flat_point(fp: &FlatPoint) -> Self {
        cga_point(fp.e1_ni / fp.no_ni, fp.e2_ni / fp.no_ni, fp.e3_ni / fp.no_ni)
    }

    /// The Euclidean part.
    pub fn position(&self) -> VectorE3 {
        VectorE3::new(self.e1, self.e2, self.e3)
    }

    /// `self ^ ni`.
    pub fn op_ni(&self) -> FlatPoint {
        FlatPoint::from(op(&(*self).into(), &ni()))
    }

    /// `self ^ fp`: the line through this point and the flat point.
    pub fn op_flat_point(&self, fp: &FlatPoint) -> Line {
        Line::from(op(&(*self).into(), &(*fp).into()))
    }

    /// `self ^ line`: the plane through this point and the line.
    pub fn op_line(&self, line: &Line) -> Plane {
        Plane::from(op(&(*self).into(), &(*line).into()))
    }
}

impl From<VectorE3> for NormalizedPoint {
    fn from(v: VectorE3) -> Self {
        cga_point(v.e1, v.e2, v.e3)
    }
}
