pub mod library;

pub use library::{LightingLibrary, Recommendation};
