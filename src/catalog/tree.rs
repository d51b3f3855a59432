use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::DiGraph;

use crate::error::CatalogError;
use crate::models::LibraryNode;

/// Immutable, validated snapshot of the catalog hierarchy.
///
/// Nodes are stored once in `nodes`; `by_id` and `by_parent` index into it.
/// Children lists are kept pre-sorted by `sort_order`.
#[derive(Debug)]
pub struct CatalogTree {
    nodes: Vec<LibraryNode>,
    by_id: HashMap<String, usize>,
    by_parent: HashMap<String, Vec<usize>>,
    roots: Vec<usize>,
    max_depth: usize,
}

impl CatalogTree {
    /// Index a flat node list. Fails on duplicate ids, parents that do not
    /// exist and parent chains that loop.
    pub fn build(nodes: Vec<LibraryNode>, max_depth: usize) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for (idx, node) in nodes.iter().enumerate() {
            if by_id.insert(node.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateNode(node.id.clone()));
            }
        }

        let mut graph: DiGraph<&str, ()> = DiGraph::new();
        let indices: Vec<_> = nodes.iter().map(|n| graph.add_node(n.id.as_str())).collect();

        let mut by_parent: HashMap<String, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();
        for (idx, node) in nodes.iter().enumerate() {
            let Some(parent_id) = node.parent_id.as_deref() else {
                roots.push(idx);
                continue;
            };
            let Some(&parent_idx) = by_id.get(parent_id) else {
                return Err(CatalogError::DanglingParent {
                    node_id: node.id.clone(),
                    parent_id: parent_id.to_string(),
                });
            };
            graph.add_edge(indices[parent_idx], indices[idx], ());
            by_parent.entry(parent_id.to_string()).or_default().push(idx);
        }

        toposort(&graph, None).map_err(|cycle| {
            let node_id = graph[cycle.node_id()];
            CatalogError::invalid_hierarchy(node_id, "parent chain forms a cycle")
        })?;

        let sort_key = |idx: &usize| (nodes[*idx].sort_order, nodes[*idx].id.clone());
        roots.sort_by_key(sort_key);
        for children in by_parent.values_mut() {
            children.sort_by_key(sort_key);
        }

        let tree = Self {
            nodes,
            by_id,
            by_parent,
            roots,
            max_depth,
        };

        // Acyclic but possibly too deep; every walk must terminate inside the bound
        for node in &tree.nodes {
            tree.get_ancestors(&node.id)?;
        }

        log::debug!(
            "[catalog] built tree: {} nodes, {} roots",
            tree.nodes.len(),
            tree.roots.len()
        );
        Ok(tree)
    }

    pub fn get_node(&self, id: &str) -> Option<&LibraryNode> {
        self.by_id.get(id).map(|idx| &self.nodes[*idx])
    }

    /// Children of `parent_id` sorted by `sort_order`, or the root categories
    /// when no parent is given. Unknown ids yield an empty list.
    pub fn get_children(&self, parent_id: Option<&str>) -> Vec<&LibraryNode> {
        let indices = match parent_id {
            None => Some(&self.roots),
            Some(id) => self.by_parent.get(id),
        };
        indices
            .map(|list| list.iter().map(|idx| &self.nodes[*idx]).collect())
            .unwrap_or_default()
    }

    /// Breadcrumb from the root down to the node's parent. Roots and unknown
    /// ids have no ancestors.
    pub fn get_ancestors(&self, id: &str) -> Result<Vec<&LibraryNode>, CatalogError> {
        let Some(node) = self.get_node(id) else {
            return Ok(Vec::new());
        };

        let mut chain = Vec::new();
        let mut current = node.parent_id.as_deref();
        while let Some(parent_id) = current {
            if chain.len() >= self.max_depth {
                return Err(CatalogError::invalid_hierarchy(
                    id,
                    format!("ancestor chain deeper than {}", self.max_depth),
                ));
            }
            let parent = self.get_node(parent_id).ok_or_else(|| CatalogError::DanglingParent {
                node_id: id.to_string(),
                parent_id: parent_id.to_string(),
            })?;
            chain.push(parent);
            current = parent.parent_id.as_deref();
        }
        chain.reverse();
        Ok(chain)
    }

    /// Root ancestor of a node; a root is its own root category
    pub fn find_root_category(&self, id: &str) -> Result<Option<&LibraryNode>, CatalogError> {
        let Some(node) = self.get_node(id) else {
            return Ok(None);
        };
        let ancestors = self.get_ancestors(id)?;
        Ok(Some(ancestors.first().copied().unwrap_or(node)))
    }

    pub fn nodes(&self) -> &[LibraryNode] {
        &self.nodes
    }

    pub fn palettes(&self) -> impl Iterator<Item = &LibraryNode> {
        self.nodes.iter().filter(|n| n.is_palette())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::definitions::static_nodes;

    fn sample() -> Vec<LibraryNode> {
        vec![
            LibraryNode::category("b", "B", 1),
            LibraryNode::category("a", "A", 0),
            LibraryNode::folder("a.f", "Folder", "a", 0),
            LibraryNode::palette("a.f.p2", "Second", "a.f", vec![], 2),
            LibraryNode::palette("a.f.p1", "First", "a.f", vec![], 1),
        ]
    }

    #[test]
    fn roots_and_children_are_sorted() {
        let tree = CatalogTree::build(sample(), 32).unwrap();
        let roots: Vec<&str> = tree.get_children(None).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(roots, vec!["a", "b"]);
        let kids: Vec<&str> = tree
            .get_children(Some("a.f"))
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(kids, vec!["a.f.p1", "a.f.p2"]);
        assert!(tree.get_children(Some("missing")).is_empty());
    }

    #[test]
    fn ancestors_run_root_to_parent() {
        let tree = CatalogTree::build(sample(), 32).unwrap();
        assert!(tree.get_ancestors("a").unwrap().is_empty());
        let chain: Vec<&str> = tree
            .get_ancestors("a.f.p1")
            .unwrap()
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(chain, vec!["a", "a.f"]);
        assert!(tree.get_ancestors("missing").unwrap().is_empty());
    }

    #[test]
    fn root_category_of_root_is_itself() {
        let tree = CatalogTree::build(sample(), 32).unwrap();
        assert_eq!(tree.find_root_category("a").unwrap().unwrap().id, "a");
        assert_eq!(tree.find_root_category("a.f.p2").unwrap().unwrap().id, "a");
        assert!(tree.find_root_category("nope").unwrap().is_none());
    }

    #[test]
    fn duplicate_ids_fail() {
        let mut nodes = sample();
        nodes.push(LibraryNode::category("a", "Again", 5));
        let err = CatalogTree::build(nodes, 32).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateNode("a".into()));
    }

    #[test]
    fn dangling_parent_fails() {
        let mut nodes = sample();
        nodes.push(LibraryNode::palette("x", "X", "ghost", vec![], 0));
        let err = CatalogTree::build(nodes, 32).unwrap_err();
        assert!(matches!(err, CatalogError::DanglingParent { .. }));
    }

    #[test]
    fn cycles_fail() {
        let nodes = vec![
            LibraryNode::folder("x", "X", "y", 0),
            LibraryNode::folder("y", "Y", "x", 0),
        ];
        let err = CatalogTree::build(nodes, 32).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidHierarchy { .. }));
    }

    #[test]
    fn depth_bound_is_enforced() {
        let err = CatalogTree::build(sample(), 1).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidHierarchy { .. }));
    }

    #[test]
    fn static_catalog_builds() {
        let tree = CatalogTree::build(static_nodes(), 32).unwrap();
        let christmas = tree.get_ancestors("holidays.winter.christmas").unwrap();
        assert_eq!(christmas.len(), 2);
        assert_eq!(christmas[0].id, "holidays");
        assert_eq!(christmas[1].id, "holidays.winter");
    }
}
