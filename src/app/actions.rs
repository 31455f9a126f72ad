//! Actions representing side effects to be executed by the runtime shell.
//!
//! The event handler returns actions alongside its redraw flag, keeping pure
//! state transitions separate from effects on the process environment. The
//! browser has a single effectful operation (leaving the event loop), but
//! the seam is kept so transitions never reach outside application state
//! themselves.

/// Commands for the runtime shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ends the event loop and restores the terminal.
    ///
    /// Emitted when the user requests exit from the browsing mode.
    Quit,
}
