pub mod definitions;
pub mod store;
pub mod tree;

pub use store::CatalogStore;
pub use tree::CatalogTree;
