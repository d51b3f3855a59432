pub mod analyzer;
pub mod cache;
pub mod rules;

pub use analyzer::analyze;
pub use cache::{query_hash, QueryCache};
