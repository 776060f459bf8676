//! Platform-agnostic carousel logic.
//!
//! Nothing in here touches `web_sys`; the web frontend feeds DOM events into
//! these types and reads back angles, depth factors and gating decisions.
//! Host-side tests exercise this module directly.

pub mod constants;
pub mod depth;
pub mod drag;
pub mod error;
pub mod focus;
pub mod fx;
pub mod layout;
pub mod projects;
pub mod rotation;
pub mod state;
pub mod view_mode;

pub use constants::*;
pub use depth::*;
pub use drag::*;
pub use error::*;
pub use focus::*;
pub use fx::*;
pub use layout::*;
pub use projects::*;
pub use rotation::*;
pub use state::*;
pub use view_mode::*;
