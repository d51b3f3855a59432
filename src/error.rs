use std::fmt;

/// Errors raised while building or walking the catalog.
///
/// Unknown ids and empty searches are not errors: they resolve to generic
/// metadata or empty collections. What ends up here is corrupted static or
/// injected data, which the caller should treat as fatal configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Parent chain loops back on itself, or is deeper than allowed
    InvalidHierarchy { node_id: String, reason: String },
    /// A node points at a parent that does not exist
    DanglingParent { node_id: String, parent_id: String },
    /// Two nodes share an id
    DuplicateNode(String),
}

impl CatalogError {
    pub fn invalid_hierarchy(node_id: &str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidHierarchy {
            node_id: node_id.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidHierarchy { node_id, reason } => {
                write!(f, "Invalid hierarchy at '{}': {}", node_id, reason)
            }
            CatalogError::DanglingParent { node_id, parent_id } => write!(
                f,
                "Node '{}' references missing parent '{}'",
                node_id, parent_id
            ),
            CatalogError::DuplicateNode(id) => write!(f, "Duplicate catalog node id '{}'", id),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<CatalogError> for String {
    fn from(e: CatalogError) -> Self {
        e.to_string()
    }
}
