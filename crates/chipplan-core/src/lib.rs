//! # ChipPlan Core
//!
//! Core types shared by every ChipPlan crate: measurement units, editor
//! policies, layout constants and the error taxonomy.

pub mod constants;
pub mod error;
pub mod policy;
pub mod units;

pub use error::{DocumentError, Error, Result};
pub use policy::{DrawPolicy, LoadPolicy};
pub use units::Units;
