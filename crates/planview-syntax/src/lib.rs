//! planview-syntax - parse product plan documents into a typed model.
//!
//! Everything here is pure: callers hand in file contents (Markdown text,
//! decoded JSON, file name listings) and get records back. Locating those
//! bytes on disk is the job of the `planview` binary.
//!
//! - [`slug`] - title → identifier normalization
//! - [`markdown`] - block and bullet primitives shared by every parser
//! - [`parser`] - overview, roadmap, data model, shell and section parsers
//! - [`correlate`] - per-section join and roadmap statistics
//! - [`design`] - design-system token projection
//! - [`product`] - the aggregate product and section payloads

pub mod correlate;
pub mod design;
pub mod markdown;
pub mod model;
pub mod parser;
pub mod product;
pub mod slug;

pub use slug::slugify;
