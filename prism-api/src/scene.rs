//! Scene identifiers and definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a top-level scene — one workspace view per tab.
///
/// The set is closed: scenes are compiled into the shell, and the registry
/// decides which of them exist for a given build. Wire names are kebab-case
/// so config files read naturally (`file-viewer`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneId {
    Welcome,
    Session,
    Terminal,
    Git,
    Settings,
    FileViewer,
    Profile,
    Capabilities,
    Team,
}

impl SceneId {
    /// Stable name used in logs and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneId::Welcome => "welcome",
            SceneId::Session => "session",
            SceneId::Terminal => "terminal",
            SceneId::Git => "git",
            SceneId::Settings => "settings",
            SceneId::FileViewer => "file-viewer",
            SceneId::Profile => "profile",
            SceneId::Capabilities => "capabilities",
            SceneId::Team => "team",
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scene as declared in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneDef {
    pub id: SceneId,
    /// Pinned scenes can be neither evicted nor manually closed.
    #[serde(default)]
    pub pinned: bool,
    /// Carried for hosts that persist scene tables; membership is id-keyed,
    /// so every scene already behaves as a singleton at runtime.
    #[serde(default)]
    pub singleton: bool,
    /// Seeds the initial open set.
    #[serde(default)]
    pub default_open: bool,
}

impl SceneDef {
    /// A plain, closable, non-default scene.
    pub fn plain(id: SceneId) -> Self {
        Self {
            id,
            pinned: false,
            singleton: false,
            default_open: false,
        }
    }
}
