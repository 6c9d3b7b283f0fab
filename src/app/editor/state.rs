//! Zustandsdefinitionen und Konstruktor des Seed-Editors.

use std::sync::Arc;

use glam::Vec2;

use crate::core::{SeedCurve, SegmentType};
use crate::shared::EditorOptions;

/// Bearbeitungsmodus des Editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Leere Kurve, erster Klick setzt den Startpunkt
    #[default]
    Init,
    /// Kurve wird Punkt für Punkt aufgebaut
    Defining,
    /// Kurve fertig, Punkte/Segmente können gewählt werden
    Done,
    /// Ein Punkt hängt am Cursor und wird beim nächsten Klick abgesetzt
    MovePoint,
    /// Geteiltes Preset; der erste Klick erzeugt eine eigene Kopie
    Locked,
}

/// Offenes Segmentende mit ausstehendem Tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub position: Vec2,
    pub segment_type: SegmentType,
}

impl Anchor {
    /// Erstellt einen Anker mit ausstehendem Segment-Typ.
    pub fn new(position: Vec2, segment_type: SegmentType) -> Self {
        Self {
            position,
            segment_type,
        }
    }
}

/// Rastereinstellungen für Klickpositionen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSnap {
    pub enabled: bool,
    pub size: f32,
    pub offset: f32,
}

impl GridSnap {
    /// Rastet `raw` auf `size * round(raw / size) + offset` ein (falls aktiv).
    pub fn apply(&self, raw: Vec2) -> Vec2 {
        if !self.enabled || self.size <= 0.0 {
            return raw;
        }
        (raw / self.size).round() * self.size + Vec2::splat(self.offset)
    }
}

/// Letzte Zeigerposition: roh für Trefferprüfung, eingerastet für Platzierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub raw: Vec2,
    pub snapped: Vec2,
}

/// Ergebnis einer Editor-Operation für den Aufrufer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Nichts hat sich geändert
    Unchanged,
    /// Nur die Vorschau (Anker/Cursor) hat sich geändert
    PreviewChanged,
    /// Die Seed-Kurve wurde verändert
    CurveChanged,
}

impl EditorAction {
    /// `true`, wenn der Host neu zeichnen muss.
    pub fn needs_redraw(self) -> bool {
        self != EditorAction::Unchanged
    }
}

/// Vorschau-Daten für das Overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorPreview {
    /// Offene Anker mit dem Stil ihres ausstehenden Segments
    pub anchors: Vec<(Vec2, SegmentType)>,
    /// Eingerastete Cursor-Position (nur in zeichnenden Modi)
    pub cursor: Option<Vec2>,
    /// Punkt, der gerade verschoben wird
    pub moving_point: Option<usize>,
}

/// Interaktiver Seed-Kurven-Editor.
#[derive(Debug, Clone)]
pub struct SeedEditor {
    /// Geteilt mit dem Preset-Katalog, bis die erste Änderung eine Kopie erzwingt
    pub(crate) curve: Arc<SeedCurve>,
    pub(crate) mode: EditMode,
    pub(crate) active_type: SegmentType,
    pub(crate) anchor1: Option<Anchor>,
    pub(crate) anchor2: Option<Anchor>,
    pub(crate) move_point: Option<usize>,
    pub(crate) pointer: Option<PointerInput>,
    pub(crate) snap: GridSnap,
    pub(crate) point_pick_radius: f32,
    pub(crate) segment_pick_radius: f32,
    /// Strichstärke für die Fraktal-Darstellung
    pub(crate) stroke_width: f32,
    /// Strichstärke nach `reset()`
    pub(crate) default_stroke_width: f32,
}

impl SeedEditor {
    /// Erstellt einen leeren Editor im Modus `Init`.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            curve: Arc::new(SeedCurve::new()),
            mode: EditMode::Init,
            active_type: SegmentType::Regular,
            anchor1: None,
            anchor2: None,
            move_point: None,
            pointer: None,
            snap: GridSnap {
                enabled: options.snap_to_grid,
                size: options.grid_size,
                offset: options.grid_offset,
            },
            point_pick_radius: options.point_pick_radius,
            segment_pick_radius: options.segment_pick_radius,
            stroke_width: options.fractal_line_width,
            default_stroke_width: options.fractal_line_width,
        }
    }

    /// Aktueller Editor-Modus.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Aktuelle Seed-Kurve (read-only).
    pub fn curve(&self) -> &SeedCurve {
        &self.curve
    }

    /// Geteilter Besitz der Kurve (z.B. für Vergleiche mit dem Preset).
    pub fn shared_curve(&self) -> &Arc<SeedCurve> {
        &self.curve
    }

    /// Segment-Typ für neue und umgetaggte Segmente.
    pub fn active_segment_type(&self) -> SegmentType {
        self.active_type
    }

    /// Offene Anker (Vorgänger, Nachfolger).
    pub fn anchors(&self) -> (Option<Anchor>, Option<Anchor>) {
        (self.anchor1, self.anchor2)
    }

    /// Index des gerade verschobenen Punkts.
    pub fn move_point(&self) -> Option<usize> {
        self.move_point
    }

    /// Letzte Zeigerposition (roh und eingerastet).
    pub fn pointer(&self) -> Option<PointerInput> {
        self.pointer
    }

    /// Strichstärke des Fraktals.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Gibt `true` zurück, wenn Klicks auf das Raster einrasten.
    pub fn snap_enabled(&self) -> bool {
        self.snap.enabled
    }

    /// Übernimmt Raster- und Trefferradien aus geänderten Optionen.
    pub fn apply_options(&mut self, options: &EditorOptions) {
        self.snap = GridSnap {
            enabled: options.snap_to_grid,
            size: options.grid_size,
            offset: options.grid_offset,
        };
        self.point_pick_radius = options.point_pick_radius;
        self.segment_pick_radius = options.segment_pick_radius;
        self.default_stroke_width = options.fractal_line_width;
    }

    /// Vorschau-Daten für das Overlay.
    pub fn preview(&self) -> EditorPreview {
        let cursor = match self.mode {
            EditMode::Init | EditMode::Defining | EditMode::MovePoint => {
                self.pointer.map(|p| p.snapped)
            }
            EditMode::Done | EditMode::Locked => None,
        };
        EditorPreview {
            anchors: [self.anchor1, self.anchor2]
                .into_iter()
                .flatten()
                .map(|a| (a.position, a.segment_type))
                .collect(),
            cursor,
            moving_point: self.move_point,
        }
    }

    /// Ermittelt roh/eingerastete Position und merkt sie sich.
    pub(crate) fn observe_pointer(&mut self, raw: Vec2) -> PointerInput {
        let input = PointerInput {
            raw,
            snapped: self.snap.apply(raw),
        };
        self.pointer = Some(input);
        input
    }

    pub(crate) fn clear_transient(&mut self) {
        self.anchor1 = None;
        self.anchor2 = None;
        self.move_point = None;
    }
}
