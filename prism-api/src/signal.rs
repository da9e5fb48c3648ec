//! Cross-module scene signals.

use serde::{Deserialize, Serialize};

use crate::scene::SceneId;

/// A request from an unrelated part of the shell to change the scene set.
///
/// Delivered over the bridge channel so producers (command palette, "create
/// and show me" actions, deep links) never import the scene store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneSignal {
    /// Open the scene, or focus it if already open.
    OpenScene { scene: SceneId },
}
