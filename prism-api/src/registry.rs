//! Static scene registry: which scenes exist, their flags, and the
//! open-tab capacity.

use std::collections::HashMap;

use thiserror::Error;

use crate::scene::{SceneDef, SceneId};

/// Default cap on simultaneously open scenes.
pub const DEFAULT_MAX_OPEN_SCENES: usize = 6;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate scene definition: {0}")]
    DuplicateScene(SceneId),

    #[error("max_open must be at least 1")]
    ZeroCapacity,

    #[error("{count} default-open scenes exceed max_open of {max_open}")]
    DefaultOpenOverflow { count: usize, max_open: usize },
}

/// Ordered, read-only table of scene definitions.
///
/// Contents and capacity are configuration supplied at construction; the
/// stores never mutate the registry and never invent ids beyond it.
#[derive(Debug, Clone)]
pub struct SceneRegistry {
    defs: Vec<SceneDef>,
    by_id: HashMap<SceneId, usize>,
    max_open: usize,
}

impl SceneRegistry {
    /// Build a registry, validating the definition table up front.
    pub fn new(defs: Vec<SceneDef>, max_open: usize) -> Result<Self, RegistryError> {
        if max_open == 0 {
            return Err(RegistryError::ZeroCapacity);
        }
        let mut by_id = HashMap::new();
        for (idx, def) in defs.iter().enumerate() {
            if by_id.insert(def.id, idx).is_some() {
                return Err(RegistryError::DuplicateScene(def.id));
            }
        }
        let count = defs.iter().filter(|d| d.default_open).count();
        if count > max_open {
            return Err(RegistryError::DefaultOpenOverflow { count, max_open });
        }
        Ok(Self {
            defs,
            by_id,
            max_open,
        })
    }

    /// The scene table as shipped with the stock shell: the welcome scene
    /// greets on launch, everything else opens on demand.
    pub fn builtin() -> Self {
        let defs = vec![
            SceneDef {
                id: SceneId::Welcome,
                pinned: false,
                singleton: true,
                default_open: true,
            },
            SceneDef {
                id: SceneId::Session,
                pinned: false,
                singleton: true,
                default_open: false,
            },
            SceneDef::plain(SceneId::Terminal),
            SceneDef::plain(SceneId::Git),
            SceneDef::plain(SceneId::Settings),
            SceneDef::plain(SceneId::FileViewer),
            SceneDef::plain(SceneId::Profile),
            SceneDef::plain(SceneId::Capabilities),
            SceneDef::plain(SceneId::Team),
        ];
        Self::new(defs, DEFAULT_MAX_OPEN_SCENES).expect("builtin scene table is valid")
    }

    /// All definitions in display order.
    pub fn defs(&self) -> &[SceneDef] {
        &self.defs
    }

    pub fn def(&self, id: SceneId) -> Option<&SceneDef> {
        self.by_id.get(&id).map(|&idx| &self.defs[idx])
    }

    pub fn contains(&self, id: SceneId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn is_pinned(&self, id: SceneId) -> bool {
        self.def(id).is_some_and(|d| d.pinned)
    }

    /// Definitions that seed the initial open set, in registry order.
    pub fn default_open(&self) -> impl Iterator<Item = &SceneDef> {
        self.defs.iter().filter(|d| d.default_open)
    }

    pub fn max_open(&self) -> usize {
        self.max_open
    }
}
