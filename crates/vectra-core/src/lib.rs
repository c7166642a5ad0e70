//! Vectra Core
//!
//! Shared plumbing for the Vectra crates: logging setup, profiling hooks,
//! math re-exports and the RGBA [`Color`](color::Color) type.

pub mod color;
pub mod logging;
pub mod math;
pub mod profiling;

pub use color::Color;
