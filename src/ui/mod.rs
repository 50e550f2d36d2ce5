//! Interactive skin selector built on ratatui.
//!
//! One fullscreen screen: a filter input, the candidate list, a keybind
//! footer. Highlighting never touches any settings file; only a confirmed
//! selection is handed back to the caller for applying, and cancelling
//! leaves every target untouched.

/// Frame rendering for the selector screen.
mod render;
/// Selector state machine and the blocking event loop.
mod selector;

pub use selector::{SelectorState, run_selector};
