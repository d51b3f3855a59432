pub mod catalog;
pub mod colors;
pub mod descriptors;

pub use catalog::EffectCatalog;
pub use colors::ColorFamily;
pub use descriptors::{query_labels, TagLabel};
