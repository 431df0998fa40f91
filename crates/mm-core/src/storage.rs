//! Saving and loading maps through an opaque key-value blob store.
//!
//! A map is flattened into a nested [`MapSnapshot`] (children inline, branch
//! targets as pre-order positions) and encoded with MessagePack. Arena ids
//! are not persisted; loading assigns fresh ones.

use crate::config::MapperConfig;
use crate::error::{MapError, Result};
use crate::id::IdeaId;
use crate::model::{Branch, Idea, MindMap};
use crate::routing::Side;
use crate::style::{Color, IdeaStyle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key maps are stored under unless the caller picks another.
pub const DEFAULT_KEY: &str = "mind_mapper";

const SNAPSHOT_VERSION: u32 = 1;

/// Byte-blob persistence backend.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn put(&mut self, key: &str, bytes: Vec<u8>) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<bool>;
}

/// In-process store; useful for tests and as a scratch backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn put(&mut self, key: &str, bytes: Vec<u8>) -> Result<()> {
        self.blobs.insert(key.to_string(), bytes);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.blobs.remove(key).is_some())
    }
}

// ─── Snapshot ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub version: u32,
    pub roots: Vec<IdeaSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaSnapshot {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub width: f64,
    pub height: f64,
    pub style: IdeaStyle,
    pub display: bool,
    pub branches: Vec<BranchSnapshot>,
    pub ideas: Vec<IdeaSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchSnapshot {
    /// Pre-order position of the target idea within the whole snapshot.
    pub to: usize,
    pub start_side: Option<Side>,
    pub end_side: Option<Side>,
    pub weight: f64,
    pub color: Color,
    pub display: bool,
}

impl MindMap {
    pub fn snapshot(&self) -> MapSnapshot {
        let order: HashMap<IdeaId, usize> = self
            .depth_first()
            .into_iter()
            .enumerate()
            .map(|(pos, id)| (id, pos))
            .collect();

        MapSnapshot {
            version: SNAPSHOT_VERSION,
            roots: self
                .roots()
                .iter()
                .filter_map(|&id| self.snapshot_idea(id, &order))
                .collect(),
        }
    }

    fn snapshot_idea(&self, id: IdeaId, order: &HashMap<IdeaId, usize>) -> Option<IdeaSnapshot> {
        let idea = self.get(id)?;
        Some(IdeaSnapshot {
            text: idea.text.clone(),
            x: idea.x,
            y: idea.y,
            width: idea.width,
            height: idea.height,
            style: idea.style.clone(),
            display: idea.display,
            branches: idea
                .branches
                .iter()
                .filter_map(|b| {
                    Some(BranchSnapshot {
                        to: *order.get(&b.to)?,
                        start_side: b.start_side,
                        end_side: b.end_side,
                        weight: b.weight,
                        color: b.color,
                        display: b.display,
                    })
                })
                .collect(),
            ideas: self
                .ideas(Some(id))
                .into_iter()
                .filter_map(|child| self.snapshot_idea(child, order))
                .collect(),
        })
    }

    /// Rebuild a map from a snapshot. Branch targets that point outside the
    /// snapshot are dropped with a warning.
    pub fn from_snapshot(snapshot: &MapSnapshot, config: &MapperConfig) -> Self {
        let mut map = MindMap::new(config);
        let mut ids = Vec::new();
        let mut pending: Vec<(IdeaId, &BranchSnapshot)> = Vec::new();

        fn restore<'a>(
            map: &mut MindMap,
            parent: Option<IdeaId>,
            level: u32,
            snap: &'a IdeaSnapshot,
            ids: &mut Vec<IdeaId>,
            pending: &mut Vec<(IdeaId, &'a BranchSnapshot)>,
        ) {
            let mut idea = Idea::new(
                snap.text.clone(),
                snap.x,
                snap.y,
                snap.width,
                snap.height,
                snap.style.clone(),
                level,
            );
            idea.display = snap.display;
            let id = map.insert(parent, idea);
            ids.push(id);
            pending.extend(snap.branches.iter().map(|b| (id, b)));
            for child in &snap.ideas {
                restore(map, Some(id), level + 1, child, ids, pending);
            }
        }

        for root in &snapshot.roots {
            restore(&mut map, None, 0, root, &mut ids, &mut pending);
        }

        for (from, b) in pending {
            let Some(&to) = ids.get(b.to) else {
                log::warn!("dropping branch from {from} to missing idea #{}", b.to);
                continue;
            };
            if let Some(owner) = map.get_mut(from) {
                owner.branches.push(Branch {
                    from,
                    to,
                    start_side: b.start_side,
                    end_side: b.end_side,
                    weight: b.weight,
                    color: b.color,
                    display: b.display,
                });
            }
        }
        map
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(&self.snapshot())?)
    }

    pub fn from_bytes(bytes: &[u8], config: &MapperConfig) -> Result<Self> {
        let snapshot: MapSnapshot = rmp_serde::from_slice(bytes)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(MapError::Storage(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }
        Ok(Self::from_snapshot(&snapshot, config))
    }

    pub fn save(&self, store: &mut dyn BlobStore, key: &str) -> Result<()> {
        let bytes = self.to_bytes()?;
        log::debug!("saving {} ideas ({} bytes) under {key:?}", self.len(), bytes.len());
        store.put(key, bytes)
    }

    /// Load the map stored under `key`, or `None` if nothing is stored there.
    pub fn load(store: &dyn BlobStore, key: &str, config: &MapperConfig) -> Result<Option<Self>> {
        match store.get(key)? {
            Some(bytes) => Self::from_bytes(&bytes, config).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::ApproxMeasure;
    use pretty_assertions::assert_eq;

    fn sample() -> MindMap {
        let mut map = MindMap::default();
        let m = ApproxMeasure;
        let topic = map.create_idea(None, 200, 200, "Topic", None, &m).unwrap();
        let first = map.create_idea(Some(topic), 100, 100, "First", None, &m).unwrap();
        let second = map.create_idea(Some(topic), 200, 100, "Second", None, &m).unwrap();
        map.create_idea(Some(first), 50, 50, "Deep", None, &m).unwrap();
        map.create_branch(second, first, Some(Side::Left), None).unwrap();
        map.set_display(second, false).unwrap();
        map
    }

    #[test]
    fn bytes_round_trip_preserves_tree() {
        let map = sample();
        let cfg = MapperConfig::default();
        let loaded = MindMap::from_bytes(&map.to_bytes().unwrap(), &cfg).unwrap();

        assert_eq!(loaded.snapshot(), map.snapshot());
        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded.branch_count(), 4);

        let topic = loaded.roots()[0];
        let kids = loaded.ideas(Some(topic));
        assert_eq!(kids.len(), 2);
        let deep = loaded.ideas(Some(kids[0]))[0];
        assert_eq!(loaded.get(deep).unwrap().level, 2);
        assert!(!loaded.get(kids[1]).unwrap().display);

        let cross = &loaded.branches(kids[1])[0];
        assert_eq!(cross.to, kids[0]);
        assert_eq!(cross.start_side, Some(Side::Left));
    }

    #[test]
    fn save_and_load_through_store() {
        let map = sample();
        let cfg = MapperConfig::default();
        let mut store = MemoryStore::new();

        assert!(MindMap::load(&store, DEFAULT_KEY, &cfg).unwrap().is_none());
        map.save(&mut store, DEFAULT_KEY).unwrap();
        assert_eq!(store.len(), 1);

        let loaded = MindMap::load(&store, DEFAULT_KEY, &cfg).unwrap().unwrap();
        assert_eq!(loaded.snapshot(), map.snapshot());
        assert!(store.remove(DEFAULT_KEY).unwrap());
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = MindMap::from_bytes(&[0xc1, 0x00], &MapperConfig::default());
        assert!(matches!(err, Err(MapError::Decode(_))));
    }

    #[test]
    fn dangling_branch_targets_are_dropped() {
        let mut snap = sample().snapshot();
        snap.roots[0].branches[0].to = 99;
        let map = MindMap::from_snapshot(&snap, &MapperConfig::default());
        assert_eq!(map.branch_count(), 3);
    }
}
