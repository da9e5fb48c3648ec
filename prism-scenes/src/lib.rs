//! Scene lifecycle for the Prism shell.
//!
//! Decides which top-level scenes are open, which one is active, how many
//! may be open at once, and how back/forward navigation behaves when tabs
//! are closed out from under the history stack.
//!
//! [`SceneStore`] is the single owner of tab membership, the active scene,
//! and the navigation history; [`NavMirrorStore`] keeps the navigation
//! sidebar in step with it via [`attach_nav_sync`]. Everything else in the
//! shell talks to the stores through read selectors, the subscription
//! surface, or the [`SceneBridge`] request channel.

mod bridge;
mod history;
mod mirror;
mod store;
mod sync;
mod tab;

pub use bridge::{SceneBridge, SceneRequester};
pub use history::NavHistory;
pub use mirror::{NavMirrorState, NavMirrorStore};
pub use store::{SceneState, SceneStore};
pub use sync::attach_nav_sync;
pub use tab::SceneTab;
