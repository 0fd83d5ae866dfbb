//! Viewport-driven rendering utilities.
//!
//! Two leaf components shared by the page sections: one-shot visibility
//! gating for deferred work, and windowed rendering of long fixed-extent
//! lists.

pub mod visibility;
pub mod window;

pub use visibility::VisibilityObserver;
pub use window::{windowed_list, WindowParams, WindowRange, WindowState, DEFAULT_OVERSCAN};
