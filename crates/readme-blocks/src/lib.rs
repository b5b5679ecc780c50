//! Sentinel-delimited region parsing and replacement.
//!
//! A README carries named replaceable regions delimited by HTML comment
//! sentinels:
//!
//! ```text
//! <!-- blog starts -->
//! content here
//! <!-- blog ends -->
//! ```
//!
//! [`region`] parses regions out of a document; [`writer`] substitutes
//! new content between a region's sentinels while leaving every byte
//! outside the matched span untouched.

pub mod error;
pub mod region;
pub mod writer;

pub use error::{Error, Result};
pub use region::{Region, find_region, has_region, parse_regions};
pub use writer::{replace_region, replace_region_inline, update_region};
