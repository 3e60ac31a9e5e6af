//! Library surface of the scrib CLI.
//!
//! The binary's logic lives in main.rs; the transforms are exposed here so
//! they can be unit tested and reused.

pub mod transforms;
