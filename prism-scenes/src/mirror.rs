//! Mirror store for the navigation sidebar.
//!
//! Downstream nav UI reads this to decide whether the default sidebar or a
//! scene-specific one is showing. Unlike the scene store it carries no
//! history of its own: "back" means returning to the default sidebar, and
//! "forward" re-shows whichever scene nav was last set.

use prism_api::SceneId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMirrorState {
    pub show_scene_nav: bool,
    pub nav_scene: Option<SceneId>,
}

type Listener = Box<dyn FnMut(&NavMirrorState)>;

/// Two-field store; both fields are set together and cleared together.
#[derive(Default)]
pub struct NavMirrorStore {
    state: NavMirrorState,
    listeners: Vec<Listener>,
}

impl NavMirrorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavMirrorState {
        self.state
    }

    pub fn show_scene_nav(&self) -> bool {
        self.state.show_scene_nav
    }

    pub fn nav_scene(&self) -> Option<SceneId> {
        self.state.nav_scene
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&NavMirrorState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Show the scene-specific nav for `id`.
    ///
    /// Callable by the synchronizer or directly by the nav UI when the user
    /// browses a scene's sub-navigation without changing the active scene.
    pub fn open_nav_scene(&mut self, id: SceneId) {
        self.commit(NavMirrorState {
            show_scene_nav: true,
            nav_scene: Some(id),
        });
    }

    /// Return to the default sidebar and forget the scene.
    pub fn close_nav_scene(&mut self) {
        self.commit(NavMirrorState {
            show_scene_nav: false,
            nav_scene: None,
        });
    }

    /// Hide the scene nav but retain the scene so `go_forward` can restore
    /// it.
    pub fn go_back(&mut self) {
        if !self.state.show_scene_nav {
            return;
        }
        self.commit(NavMirrorState {
            show_scene_nav: false,
            ..self.state
        });
    }

    /// Re-show the retained scene nav; silent no-op when none was ever set.
    pub fn go_forward(&mut self) {
        if self.state.show_scene_nav || self.state.nav_scene.is_none() {
            return;
        }
        self.commit(NavMirrorState {
            show_scene_nav: true,
            ..self.state
        });
    }

    pub fn can_go_back(&self) -> bool {
        self.state.show_scene_nav
    }

    pub fn can_go_forward(&self) -> bool {
        !self.state.show_scene_nav && self.state.nav_scene.is_some()
    }

    fn commit(&mut self, next: NavMirrorState) {
        self.state = next;
        let Self { listeners, state, .. } = self;
        for listener in listeners.iter_mut() {
            listener(state);
        }
    }
}
