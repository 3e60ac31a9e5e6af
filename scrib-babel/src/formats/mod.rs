//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the scrib symbol tree and text representations.

pub mod markdown;
pub mod scrib;
pub mod treeviz;

pub use markdown::MarkdownFormat;
pub use scrib::ScribFormat;
pub use treeviz::TreevizFormat;
