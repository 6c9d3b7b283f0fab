//! Fractal Explorer Library.
//! Seed-Kurven, Fraktal-Rendering, Dimensions-Schätzung und Editor als
//! Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditMode, EditorAction, SeedEditor, ViewMode,
};
pub use core::{
    estimate_dimension, Preset, PresetCatalog, SeedCurve, SeedPoint, SegmentType,
};
pub use render::{LineStyle, RecordingSurface, Surface, SvgSurface};
pub use shared::EditorOptions;
