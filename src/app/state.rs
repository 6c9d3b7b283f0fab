//! Application State: zentrale Datenhaltung.

use super::editor::SeedEditor;
use super::CommandLog;
use crate::core::{estimate_dimension, PresetCatalog};
use crate::shared::EditorOptions;

/// Aktive Ansicht
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Fraktal zeichnen
    #[default]
    Draw,
    /// Seed-Kurve bearbeiten
    Edit,
}

/// Ansichtsbezogener Zustand
#[derive(Debug, Clone)]
pub struct ViewState {
    pub mode: ViewMode,
    /// Aktuelle Rekursionstiefe (1..=max_depth)
    pub depth: u32,
}

impl ViewState {
    /// Erstellt den Standard-Ansichtszustand mit gegebener Tiefe.
    pub fn new(depth: u32) -> Self {
        Self {
            mode: ViewMode::Draw,
            depth,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Seed-Editor mit der aktuellen Kurve
    pub editor: SeedEditor,
    /// Verfügbare Presets
    pub presets: PresetCatalog,
    /// Name des geladenen, noch unveränderten Presets
    pub active_preset: Option<String>,
    pub view: ViewState,
    /// Laufzeit-Optionen (Farben, Raster, Radien)
    pub options: EditorOptions,
    /// Zuletzt berechnete Dimension (`None` = undefiniert)
    pub dimension: Option<f32>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host, die Fläche neu zu zeichnen
    pub needs_redraw: bool,
}

impl AppState {
    /// Erstellt einen App-State mit leerer Kurve.
    pub fn new(options: EditorOptions, presets: PresetCatalog) -> Self {
        let depth = options.clamp_depth(options.default_depth);
        Self {
            editor: SeedEditor::new(&options),
            presets,
            active_preset: None,
            view: ViewState::new(depth),
            options,
            dimension: None,
            command_log: CommandLog::new(),
            needs_redraw: true,
        }
    }

    /// Aktuelle Strichstärke des Fraktals.
    pub fn stroke_width(&self) -> f32 {
        self.editor.stroke_width()
    }

    /// Berechnet die Dimension der aktuellen Kurve neu.
    pub fn refresh_dimension(&mut self) {
        self.dimension = estimate_dimension(self.editor.curve());
    }

    /// Anzeigetext, z.B. `Dim=1.262` oder `Dim=?`.
    pub fn dimension_label(&self) -> String {
        match self.dimension {
            Some(dim) => format!("Dim={}", (dim * 1000.0).round() / 1000.0),
            None => "Dim=?".to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EditorOptions::default(), PresetCatalog::default())
    }
}
