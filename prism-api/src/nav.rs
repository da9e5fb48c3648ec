//! Which scenes carry a companion navigation view.

use crate::scene::SceneId;

/// Lookup consulted when the active scene changes: does this scene have a
/// scene-specific navigation panel that should replace the default sidebar?
pub trait NavAssociations {
    fn has_nav(&self, id: SceneId) -> bool;
}

/// Fixed association table.
#[derive(Debug, Clone, Default)]
pub struct StaticNavAssociations {
    scenes: Vec<SceneId>,
}

impl StaticNavAssociations {
    pub fn new(scenes: impl IntoIterator<Item = SceneId>) -> Self {
        Self {
            scenes: scenes.into_iter().collect(),
        }
    }

    /// Associations as shipped with the stock shell: source control and the
    /// file viewer drive their own sidebars.
    pub fn builtin() -> Self {
        Self::new([SceneId::Git, SceneId::FileViewer])
    }
}

impl NavAssociations for StaticNavAssociations {
    fn has_nav(&self, id: SceneId) -> bool {
        self.scenes.contains(&id)
    }
}
