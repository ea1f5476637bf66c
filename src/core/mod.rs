//! Core types and errors (always included).
//!
//! Entity projections, the viewer's reaction type, and the error taxonomy
//! shared by every layer.

mod error;
mod types;

pub use error::*;
pub use types::*;
