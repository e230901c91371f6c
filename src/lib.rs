//! # CGA Engine Quickstart
//!
//! ```rust
//! use cga_engine::prelude::*;
//!
//! // a line through two points and a plane through three
//! let line = op(&cga_point(1.0, 0.0, 0.0).into(), &op(&cga_point(1.0, 1.0, 0.0).into(), &ni()));
//! let plane = op(
//!     &cga_point(1.0, 2.0, 0.0).into(),
//!     &op(&cga_point(1.0, 2.0, 1.0).into(), &op(&cga_point(0.0, 2.0, 1.0).into(), &ni())),
//! );
//!
//! // their intersection is a flat point at (1, 2, 0)
//! let meet = FlatPoint::from(lc(&dual(&line), &plane));
//! let p = NormalizedPoint::from_flat_point(&meet);
//!
//! const EPS: Scalar = 1e-5;
//! assert!((p.e1 - 1.0).abs() < EPS);
//! assert!((p.e2 - 2.0).abs() < EPS);
//! assert!(p.e3.abs() < EPS);
//! ```
//!
#![doc = include_str!("../README.md")]

// Algebra definition
pub mod basis;
pub mod blade;
pub mod metric;
pub mod tables;
pub mod types;

// Values and operations
pub mod group;
pub mod multivector;
pub mod ops;
pub mod views;

// Text I/O
pub mod format;
pub mod parser;

pub mod error;
pub mod prelude;

// --- Public API exports ---

pub use error::{CgaError, ParseError, ParseErrorKind, Result};
pub use format::{set_string_format, string_format, StringFormat};
pub use multivector::Multivector;
pub use parser::{parse, parse_named};
pub use types::Scalar;
pub use views::{cga_point, DualLine, FlatPoint, Line, NormalizedPoint, Plane, VectorE3};
