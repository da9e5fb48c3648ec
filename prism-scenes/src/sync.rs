//! One-way synchronization from the scene store to the nav mirror.

use std::cell::RefCell;
use std::rc::Rc;

use prism_api::{NavAssociations, SceneId};

use crate::mirror::NavMirrorStore;
use crate::store::SceneStore;

/// Subscribe the nav mirror to the store's active-scene changes.
///
/// When the active scene changes, scenes with an associated nav view open
/// it and everything else (including the empty store) falls back to the
/// default sidebar. A notification without an active change is the
/// re-sync nudge: if the mirror drifted (the user toggled the nav panel by
/// hand), it is put back in step.
///
/// The mirror is the only thing written from inside the store's notify
/// loop; writing back into the scene store from here would re-enter a
/// commit in progress.
pub fn attach_nav_sync(
    store: &mut SceneStore,
    mirror: Rc<RefCell<NavMirrorStore>>,
    lookup: Rc<dyn NavAssociations>,
) {
    let mut last_seen = store.active_scene();

    // Align the mirror with whatever is active at attach time.
    apply(&mirror, &*lookup, last_seen);

    store.subscribe(move |state| {
        let active = state.active();
        if active != last_seen {
            last_seen = active;
            apply(&mirror, &*lookup, active);
        } else if let Some(id) = active {
            if lookup.has_nav(id) {
                let desynced = {
                    let m = mirror.borrow();
                    !m.show_scene_nav() || m.nav_scene() != Some(id)
                };
                if desynced {
                    mirror.borrow_mut().open_nav_scene(id);
                }
            }
        }
    });
}

fn apply(mirror: &RefCell<NavMirrorStore>, lookup: &dyn NavAssociations, active: Option<SceneId>) {
    let mut mirror = mirror.borrow_mut();
    match active {
        Some(id) if lookup.has_nav(id) => mirror.open_nav_scene(id),
        _ => mirror.close_nav_scene(),
    }
}
