//! Runtime tab instances.

use prism_api::SceneId;

/// A live tab for an open scene. At most one instance per id exists.
///
/// `last_used` is a recency stamp drawn from the store's monotonic
/// sequence, not wall time; eviction only needs ordering. Stamp 0 marks a
/// tab nobody has focused yet (the session companion), making it the first
/// eviction candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneTab {
    pub id: SceneId,
    pub last_used: u64,
}

impl SceneTab {
    pub fn new(id: SceneId, last_used: u64) -> Self {
        Self { id, last_used }
    }
}
