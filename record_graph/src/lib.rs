//! # Record Graph
//!
//! The data-model crate - holds a parsed genealogical file as typed collections
//! of tagged records linked by pointer identifiers. It contains no narrative
//! logic; `biography_core` reads from it.
//!
//! - **record**: identifiers, record kinds and the tagged record tree
//! - **graph**: the type-partitioned graph, pointer resolution and selectors

pub mod error;
pub mod graph;
pub mod record;

pub use error::*;
pub use graph::*;
pub use record::*;
