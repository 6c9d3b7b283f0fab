//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::Vec2;

use super::state::ViewMode;
use crate::core::SegmentType;
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger über der Zeichenfläche bewegt (Flächenkoordinaten)
    PointerMoved { pos: Vec2 },
    /// Einfacher Klick auf die Zeichenfläche
    PointerClicked { pos: Vec2 },
    /// Doppelklick auf die Zeichenfläche
    PointerDoubleClicked { pos: Vec2 },
    /// Entfernen- oder Rücktaste
    DeleteKeyPressed,
    /// Segment-Typ im Auswahlfeld gewählt
    SegmentTypeSelected { segment_type: SegmentType },
    /// Preset aus dem Katalog gewählt
    PresetSelected { name: String },
    /// Seed-Datei (JSON) zum Laden gewählt
    SeedFileSelected { path: String },
    /// Aktuelle Seed-Kurve als JSON speichern
    SeedSaveRequested { path: String },
    /// "Clear"-Schaltfläche
    ClearRequested,
    /// Rekursionstiefe gewählt ("Iter n")
    DepthSelected { depth: u32 },
    /// Strichstärke des Fraktals geändert
    StrokeWidthChanged { width: f32 },
    /// Einrasten umgeschaltet
    SnapToggled { enabled: bool },
    /// Zwischen Zeichnen und Bearbeiten wechseln
    ViewModeSelected { mode: ViewMode },
    /// Optionen übernehmen und als TOML nach `path` speichern
    OptionsApplied {
        options: Box<EditorOptions>,
        path: String,
    },
    /// Optionen auf Standardwerte zurücksetzen und nach `path` speichern
    OptionsResetRequested { path: String },
}

/// Mutierende Commands, die der Controller ausführt.
#[derive(Debug, Clone)]
pub enum AppCommand {
    EditorPointerMove { pos: Vec2 },
    EditorClick { pos: Vec2 },
    EditorDoubleClick { pos: Vec2 },
    EditorDeletePoint,
    SetSegmentType { segment_type: SegmentType },
    LoadPreset { name: String },
    LoadSeedFile { path: String },
    SaveSeedFile { path: String },
    ClearSeed,
    SetDepth { depth: u32 },
    SetStrokeWidth { width: f32 },
    SetSnapToGrid { enabled: bool },
    SetViewMode { mode: ViewMode },
    ApplyOptions {
        options: Box<EditorOptions>,
        path: String,
    },
    ResetOptions { path: String },
}
