//! Decoupled entry point for open-scene requests.
//!
//! Any part of the shell can hold a [`SceneRequester`] and ask for a scene
//! without importing the store; the shell loop owns the [`SceneBridge`] and
//! drains it into the store between frames.

use tokio::sync::mpsc;

use prism_api::{SceneId, SceneSignal};

use crate::store::SceneStore;

/// Producer half: cheap to clone, safe to hand to any subsystem.
#[derive(Debug, Clone)]
pub struct SceneRequester {
    tx: mpsc::UnboundedSender<SceneSignal>,
}

impl SceneRequester {
    /// Request that `scene` be opened or focused.
    pub fn open_scene(&self, scene: SceneId) {
        self.send(SceneSignal::OpenScene { scene });
    }

    pub fn send(&self, signal: SceneSignal) {
        // Fire-and-forget: a closed bridge means the shell is shutting
        // down and the intent is moot.
        let _ = self.tx.send(signal);
    }
}

/// Consumer half, owned by the shell loop.
pub struct SceneBridge {
    rx: mpsc::UnboundedReceiver<SceneSignal>,
}

impl SceneBridge {
    pub fn channel() -> (SceneRequester, SceneBridge) {
        let (tx, rx) = mpsc::unbounded_channel();
        (SceneRequester { tx }, SceneBridge { rx })
    }

    /// Apply every queued signal to the store, returning how many were
    /// applied.
    pub fn drain(&mut self, store: &mut SceneStore) -> usize {
        let mut applied = 0;
        while let Ok(signal) = self.rx.try_recv() {
            Self::apply(signal, store);
            applied += 1;
        }
        applied
    }

    /// Await the next signal, for async host loops. Returns `None` once
    /// every requester has been dropped.
    pub async fn recv(&mut self) -> Option<SceneSignal> {
        self.rx.recv().await
    }

    pub fn apply(signal: SceneSignal, store: &mut SceneStore) {
        match signal {
            SceneSignal::OpenScene { scene } => store.open_scene(scene),
        }
    }
}
