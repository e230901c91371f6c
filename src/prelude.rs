// src/prelude.rs
//! The “everything” import for the CGA engine.
//!
//! Brings you the multivector, the views and every operation with one glob:
//! ```rust
//! use cga_engine::prelude::*;
//! ```

// core data types
pub use crate::multivector::Multivector;
pub use crate::types::Scalar;
pub use crate::views::{DualLine, FlatPoint, Line, NormalizedPoint, Plane, VectorE3};

// constants and constructors
pub use crate::basis::{ALL_GROUPS, GROUP_0, GROUP_1, GROUP_2, GROUP_3, GROUP_4, GROUP_5};
pub use crate::views::{cga_point, e1, e2, e3, ni, no};

// operations
pub use crate::ops::*;

// text
pub use crate::format::{format, set_string_format, StringFormat};
pub use crate::parser::{parse, parse_named};

pub use crate::error::{CgaError, ParseError};
