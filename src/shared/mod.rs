//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die sowohl `app` als auch `render` lesen.

pub mod options;

pub use options::EditorOptions;
pub use options::{GRID_OFFSET, GRID_SIZE, MAX_DEPTH};
