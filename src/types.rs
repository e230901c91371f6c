// src/types.rs
//! Coordinate type shared by every multivector group.

#[cfg(feature = "f32")]
pub type Scalar = f32;
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;

// one coordinate group, always `GROUP_SIZE[g]` long when present
pub type Group = Vec<Scalar>;
