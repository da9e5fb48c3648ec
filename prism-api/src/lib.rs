//! Prism API - shared scene types for the Prism shell.
//!
//! Everything the shell's subsystems need to talk *about* scenes without
//! touching the scene store itself: identifiers, registry definitions, the
//! nav-association lookup, and the cross-module open-scene signal.

mod nav;
mod registry;
mod scene;
mod signal;

pub use nav::*;
pub use registry::*;
pub use scene::*;
pub use signal::*;
