//! # Biography Core
//!
//! Writes narrative biographies of individuals held in a [`record_graph`].
//! Everything here reads the graph; nothing writes to it.
//!
//! ## Components
//!
//! - **date**: qualified dates, ages and intervals
//! - **format**: rendering of names, sexes and places by format key
//! - **template**: conditional templates evaluated against a record
//! - **references**: citation collection with per-document deduplication
//! - **composer**: assembles introduction, facts, relationships and final days
//! - **locale**: phrase catalogs for English, Dutch and German
//! - **index** / **person**: the individual index and person summaries
//!
//! ## Design Philosophy
//!
//! - **Explicit context**: locale and reference birth date travel in a
//!   [`RenderContext`], never in global state
//! - **Quiet on absence**: missing data shrinks the text instead of failing
//! - **Loud on corruption**: dangling pointers and malformed identifiers are errors

pub mod composer;
pub mod config;
pub mod context;
pub mod date;
pub mod error;
pub mod format;
pub mod index;
pub mod locale;
pub mod person;
pub mod references;
pub mod template;

pub use composer::*;
pub use config::*;
pub use context::*;
pub use date::*;
pub use error::*;
pub use format::*;
pub use index::*;
pub use locale::*;
pub use person::*;
pub use references::*;
pub use template::*;
