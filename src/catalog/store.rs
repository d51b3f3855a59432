use std::sync::{Arc, RwLock};

use crate::catalog::definitions::{followed_team_nodes, live_event_nodes, static_nodes};
use crate::catalog::tree::CatalogTree;
use crate::error::CatalogError;
use crate::models::{FollowedTeam, LiveEvent};

#[derive(Default)]
struct DynamicSources {
    live_events: Vec<LiveEvent>,
    followed_teams: Vec<FollowedTeam>,
}

/// Owns the memoized catalog snapshot.
///
/// The tree is built on first read and shared as an `Arc`; updating a dynamic
/// source drops the snapshot so the next read rebuilds it. Readers holding an
/// older `Arc` keep a complete tree.
pub struct CatalogStore {
    max_depth: usize,
    sources: RwLock<DynamicSources>,
    snapshot: RwLock<Option<Arc<CatalogTree>>>,
}

impl CatalogStore {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            sources: RwLock::new(DynamicSources::default()),
            snapshot: RwLock::new(None),
        }
    }

    /// Current tree, building it if needed
    pub fn snapshot(&self) -> Result<Arc<CatalogTree>, CatalogError> {
        if let Some(tree) = self
            .snapshot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            return Ok(Arc::clone(tree));
        }

        let mut slot = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        // Another writer may have filled the slot while we waited
        if let Some(tree) = slot.as_ref() {
            return Ok(Arc::clone(tree));
        }

        let nodes = {
            let sources = self.sources.read().unwrap_or_else(|e| e.into_inner());
            let mut nodes = static_nodes();
            nodes.extend(live_event_nodes(&sources.live_events));
            nodes.extend(followed_team_nodes(&sources.followed_teams));
            nodes
        };
        let tree = Arc::new(CatalogTree::build(nodes, self.max_depth)?);
        *slot = Some(Arc::clone(&tree));
        Ok(tree)
    }

    pub fn set_live_events(&self, events: Vec<LiveEvent>) {
        self.sources
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .live_events = events;
        self.invalidate();
    }

    pub fn set_followed_teams(&self, teams: Vec<FollowedTeam>) {
        self.sources
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .followed_teams = teams;
        self.invalidate();
    }

    pub fn invalidate(&self) {
        let mut slot = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        if slot.take().is_some() {
            log::debug!("[catalog] snapshot invalidated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;

    #[test]
    fn snapshot_is_memoized() {
        let store = CatalogStore::new(32);
        let a = store.snapshot().unwrap();
        let b = store.snapshot().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn team_update_rebuilds_tree() {
        let store = CatalogStore::new(32);
        let before = store.snapshot().unwrap();
        assert!(before.get_children(Some("my_teams")).is_empty());

        store.set_followed_teams(vec![FollowedTeam {
            team_id: "seahawks".into(),
            name: "Seattle Seahawks".into(),
            league: "NFL".into(),
            colors: vec![Rgb::new(0, 34, 68), Rgb::new(105, 190, 40)],
        }]);

        let after = store.snapshot().unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after.get_children(Some("my_teams")).len(), 1);
        // The old snapshot is untouched
        assert!(before.get_node("my_teams.seahawks").is_none());
    }

    #[test]
    fn duplicate_dynamic_ids_leave_the_catalog_usable() {
        let store = CatalogStore::new(32);
        let team = FollowedTeam {
            team_id: "seahawks".into(),
            name: "Seattle Seahawks".into(),
            league: "NFL".into(),
            colors: vec![],
        };
        store.set_followed_teams(vec![team.clone(), team]);

        let tree = store.snapshot().unwrap();
        assert_eq!(tree.get_children(Some("my_teams")).len(), 1);
        assert!(tree.get_node("holidays.winter.christmas").is_some());
    }
}
