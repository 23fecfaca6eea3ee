// Enable no_std mode.
#![cfg_attr(not(feature = "std"), no_std)]
// Ensure allow(unsafe_code) / forbid(unsafe_code) markers.
#![cfg_attr(feature = "unsafe", allow(unsafe_code))]
#![cfg_attr(not(feature = "unsafe"), forbid(unsafe_code))]
// Only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined.
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod alpha_beta;
pub mod equations;
mod estimation;
pub mod linalg;
mod macros;
mod num_traits;
mod system_cycle;

pub use crate::alpha_beta::AlphaBetaFilter;
pub use crate::estimation::{EstimationFilter, Measurable};
pub use crate::linalg::{Matrix, MatrixError, MatrixInverseOperation, PivotCheck};
pub use crate::system_cycle::SystemCycle;

pub use crate::num_traits::*;
