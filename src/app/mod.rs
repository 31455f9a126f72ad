//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! runtime shell (main.rs) and the domain/catalog layers. It implements the
//! event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Render
//!                                     → Actions → Side Effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Interaction mode state machine and overlay form types
//! - [`pager`]: Reveal cursor over the current result set
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod pager;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Mode, SearchField, SearchForm, SettingsForm};
pub use pager::Pager;
pub use state::AppState;
