//! CLI command handlers.

mod escape;
mod input;
mod roundtrip;
mod scan;

pub use escape::run_escape;
pub use roundtrip::run_roundtrip;
pub use scan::run_scan;
