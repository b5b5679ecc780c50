//! Command implementations for the readme CLI

mod check;
mod regions;
mod sync;

pub use check::run_check;
pub use regions::run_regions;
pub use sync::run_sync;
