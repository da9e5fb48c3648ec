//! The scene store: authoritative open-tab set, active scene, and
//! navigation history.

use std::rc::Rc;

use prism_api::{SceneId, SceneRegistry};

use crate::history::NavHistory;
use crate::tab::SceneTab;

/// State owned by [`SceneStore`]; subscribers observe it read-only after
/// every commit.
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    open_tabs: Vec<SceneTab>,
    active: Option<SceneId>,
    history: NavHistory,
}

impl SceneState {
    /// Open tabs in display order.
    pub fn open_tabs(&self) -> &[SceneTab] {
        &self.open_tabs
    }

    /// The active scene; `None` only when no tabs are open.
    pub fn active(&self) -> Option<SceneId> {
        self.active
    }

    pub fn is_open(&self, id: SceneId) -> bool {
        self.open_tabs.iter().any(|t| t.id == id)
    }

    pub fn history(&self) -> &NavHistory {
        &self.history
    }

    fn remove_tab(&mut self, id: SceneId) {
        self.open_tabs.retain(|t| t.id != id);
    }

    fn touch(&mut self, id: SceneId, stamp: u64) {
        if let Some(tab) = self.open_tabs.iter_mut().find(|t| t.id == id) {
            tab.last_used = stamp;
        }
    }

    /// The agent's session tab always sits first in display order.
    fn ensure_session_first(&mut self) {
        if let Some(pos) = self.open_tabs.iter().position(|t| t.id == SceneId::Session) {
            if pos > 0 {
                let tab = self.open_tabs.remove(pos);
                self.open_tabs.insert(0, tab);
            }
        }
    }
}

type Listener = Box<dyn FnMut(&SceneState)>;

/// Owns the open scene set and the back/forward history.
///
/// All mutation goes through the public operations below; each builds the
/// full post-state, swaps it in, then synchronously notifies subscribers.
/// Invalid requests (unregistered ids, pinned closes, capacity with no
/// evictable tab, exhausted history) degrade to silent no-ops — callers use
/// the selectors to disable affordances up front instead of probing for
/// failure.
pub struct SceneStore {
    registry: Rc<SceneRegistry>,
    state: SceneState,
    listeners: Vec<Listener>,
    /// Monotonic recency sequence; stamp 0 is reserved for tabs nobody has
    /// focused yet.
    seq: u64,
}

impl SceneStore {
    /// Create a store seeded with the registry's default-open scenes; the
    /// first of them (registry order) starts active.
    pub fn new(registry: Rc<SceneRegistry>) -> Self {
        let mut state = SceneState::default();
        let mut seq = 0;
        for def in registry.default_open() {
            seq += 1;
            state.open_tabs.push(SceneTab::new(def.id, seq));
        }
        state.ensure_session_first();
        if let Some(first) = registry.default_open().next() {
            state.active = Some(first.id);
            state.history.push(first.id);
        }

        let store = Self {
            registry,
            state,
            listeners: Vec::new(),
            seq,
        };
        store.check_invariants();
        store
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn open_tabs(&self) -> &[SceneTab] {
        self.state.open_tabs()
    }

    pub fn active_scene(&self) -> Option<SceneId> {
        self.state.active()
    }

    /// Register a subscriber. It is invoked synchronously after every
    /// commit with the fully updated state; it must not mutate this store
    /// re-entrantly (write to other stores only).
    pub fn subscribe(&mut self, listener: impl FnMut(&SceneState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Open `id`, or focus it if already open.
    pub fn open_scene(&mut self, id: SceneId) {
        if !self.registry.contains(id) {
            tracing::debug!(scene = %id, "ignoring open for unregistered scene");
            return;
        }

        // Focusing the already-active scene changes nothing, but
        // subscribers get another look so a desynced nav mirror can repair
        // itself.
        if self.state.active == Some(id) {
            self.notify();
            return;
        }

        let mut next = self.state.clone();

        // The welcome scene only lives until the first real scene opens.
        if id != SceneId::Welcome && next.is_open(SceneId::Welcome) {
            next.remove_tab(SceneId::Welcome);
            let anchor = next.active.filter(|&a| a != SceneId::Welcome);
            next.history.purge(SceneId::Welcome, anchor);
            if next.active == Some(SceneId::Welcome) {
                next.active = None; // reassigned below
            }
            // Keep the agent one tab away: the first real scene brings the
            // session scene along, stamped least-recently-used.
            if id != SceneId::Session && !next.is_open(SceneId::Session) {
                next.open_tabs.push(SceneTab::new(SceneId::Session, 0));
                next.ensure_session_first();
            }
        }

        next.history.push(id);

        if next.is_open(id) {
            self.seq += 1;
            next.touch(id, self.seq);
            next.active = Some(id);
            self.commit(next);
            return;
        }

        // Insert, evicting the least recently used candidate at capacity.
        if next.open_tabs.len() >= self.registry.max_open() {
            let candidate = next
                .open_tabs
                .iter()
                .filter(|t| !self.registry.is_pinned(t.id) && Some(t.id) != next.active)
                .min_by_key(|t| t.last_used)
                .map(|t| t.id);
            let Some(evicted) = candidate else {
                // Capacity is a hard ceiling. Nothing is committed, so the
                // welcome/history work above is abandoned with the request.
                tracing::debug!(scene = %id, "open dropped: at capacity with no evictable tab");
                return;
            };
            tracing::debug!(scene = %id, evicted = %evicted, "evicting least recently used tab");
            next.remove_tab(evicted);
            next.history.purge(evicted, Some(id));
        }

        self.seq += 1;
        next.open_tabs.push(SceneTab::new(id, self.seq));
        next.ensure_session_first();
        next.active = Some(id);
        self.commit(next);
    }

    /// Focus a scene. Alias for [`open_scene`]: focusing and opening share
    /// one transition path.
    pub fn activate_scene(&mut self, id: SceneId) {
        self.open_scene(id);
    }

    /// Close a scene. Pinned scenes and scenes that are not open are left
    /// alone.
    pub fn close_scene(&mut self, id: SceneId) {
        if self.registry.is_pinned(id) {
            tracing::debug!(scene = %id, "ignoring close for pinned scene");
            return;
        }
        if !self.state.is_open(id) {
            return;
        }

        let mut next = self.state.clone();
        next.remove_tab(id);

        if next.active == Some(id) {
            // Closing the active tab falls back to the most recently used
            // survivor; an empty set is a legitimate terminal state.
            next.active = next.open_tabs.iter().max_by_key(|t| t.last_used).map(|t| t.id);
            if next.active.is_none() {
                next.history.reset();
                self.commit(next);
                return;
            }
        }

        next.history.purge(id, next.active);
        self.commit(next);
    }

    /// Step back to the nearest still-open history entry, if any.
    pub fn go_back(&mut self) {
        let Some(index) = self.state.history.scan_back(|id| self.state.is_open(id)) else {
            tracing::trace!("back navigation exhausted");
            return;
        };
        self.navigate_to(index);
    }

    /// Step forward to the nearest still-open history entry, if any.
    pub fn go_forward(&mut self) {
        let Some(index) = self.state.history.scan_forward(|id| self.state.is_open(id)) else {
            tracing::trace!("forward navigation exhausted");
            return;
        };
        self.navigate_to(index);
    }

    pub fn can_go_back(&self) -> bool {
        self.state.history.scan_back(|id| self.state.is_open(id)).is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state
            .history
            .scan_forward(|id| self.state.is_open(id))
            .is_some()
    }

    fn navigate_to(&mut self, index: usize) {
        let mut next = self.state.clone();
        let id = next.history.seek(index);
        // Landing on a tab via history counts as using it.
        self.seq += 1;
        next.touch(id, self.seq);
        next.active = Some(id);
        self.commit(next);
    }

    fn commit(&mut self, next: SceneState) {
        self.state = next;
        self.check_invariants();
        self.notify();
    }

    fn notify(&mut self) {
        let Self { listeners, state, .. } = self;
        for listener in listeners.iter_mut() {
            listener(state);
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        let st = &self.state;
        debug_assert!(
            st.open_tabs.len() <= self.registry.max_open(),
            "open tabs exceed capacity"
        );
        match st.active {
            Some(a) => debug_assert!(st.is_open(a), "active scene {a} is not open"),
            None => debug_assert!(st.open_tabs.is_empty(), "no active scene with tabs open"),
        }
        if let Some(pos) = st.open_tabs.iter().position(|t| t.id == SceneId::Session) {
            debug_assert_eq!(pos, 0, "session tab must be first");
        }
        for entry in st.history.entries() {
            debug_assert!(st.is_open(*entry), "history entry {entry} is not open");
        }
        debug_assert_eq!(st.history.cursor().is_none(), st.history.is_empty());
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) {}
}
