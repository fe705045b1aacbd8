//! Search module: local ranked search and the remote result merge.
//!
//! The local engine is pure and synchronous; the merge layer wraps the
//! remote search call with a short timeout and deduplication. Both cap
//! their output at 10 results.

pub mod engine;
pub mod merge;

pub use engine::{search_buildings, MAX_SEARCH_RESULTS};
pub use merge::merge_remote;
