//! Application-Layer: Controller, State, Events und Editor.

pub mod command_log;
pub mod controller;
pub mod editor;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Hält Editor, Presets, Ansicht und Optionen.
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use editor::{EditMode, EditorAction, EditorPreview, SeedEditor};
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, ViewMode, ViewState};
