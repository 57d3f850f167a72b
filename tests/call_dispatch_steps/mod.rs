//! Step definitions for call dispatch scenarios.

mod given;
pub mod world;
