//! Eingabe-Lifecycle des Seed-Editors (Zeiger, Klick, Doppelklick, Tasten).

use std::sync::Arc;

use glam::Vec2;

use super::state::{Anchor, EditMode, EditorAction, SeedEditor};
use crate::core::{SeedCurve, SeedPoint, SegmentType};

impl SeedEditor {
    /// Zeigerbewegung: aktualisiert nur die Vorschau.
    /// In `Done` und `Locked` wird die Bewegung ignoriert.
    pub fn on_pointer_move(&mut self, raw: Vec2) -> EditorAction {
        if matches!(self.mode, EditMode::Done | EditMode::Locked) {
            return EditorAction::Unchanged;
        }
        let previous = self.pointer.map(|p| p.snapped);
        let input = self.observe_pointer(raw);
        if previous == Some(input.snapped) {
            EditorAction::Unchanged
        } else {
            EditorAction::PreviewChanged
        }
    }

    /// Einfacher Klick.
    pub fn on_click(&mut self, raw: Vec2) -> EditorAction {
        let input = self.observe_pointer(raw);

        match self.mode {
            EditMode::Init => {
                // Der erste Punkt hat kein eingehendes Segment
                self.curve = Arc::new(SeedCurve::from_points(vec![SeedPoint::new(
                    input.snapped,
                    SegmentType::Regular,
                )]));
                self.anchor1 = Some(Anchor::new(input.snapped, self.active_type));
                self.mode = EditMode::Defining;
                EditorAction::CurveChanged
            }
            EditMode::Defining => {
                let appended = Arc::make_mut(&mut self.curve)
                    .push(SeedPoint::new(input.snapped, self.active_type));
                self.anchor1 = Some(Anchor::new(input.snapped, self.active_type));
                if appended {
                    EditorAction::CurveChanged
                } else {
                    EditorAction::PreviewChanged
                }
            }
            EditMode::Locked => {
                self.detach_from_preset();
                match self.select_at(input.raw) {
                    EditorAction::Unchanged => EditorAction::PreviewChanged,
                    action => action,
                }
            }
            EditMode::Done => self.select_at(input.raw),
            EditMode::MovePoint => self.drop_moving_point(input.snapped),
        }
    }

    /// Doppelklick: schließt die Definition ab oder fügt einen Punkt ein.
    pub fn on_double_click(&mut self, raw: Vec2) -> EditorAction {
        let input = self.observe_pointer(raw);

        match self.mode {
            EditMode::Defining => {
                Arc::make_mut(&mut self.curve)
                    .push(SeedPoint::new(input.snapped, self.active_type));
                self.clear_transient();
                self.mode = EditMode::Done;
                log::debug!("Seed-Kurve definiert: {} Punkte", self.curve.len());
                EditorAction::CurveChanged
            }
            EditMode::Done => self.insert_at(input.raw, input.snapped),
            EditMode::Init | EditMode::MovePoint | EditMode::Locked => EditorAction::Unchanged,
        }
    }

    /// Entfernen-Taste: löscht den verschobenen Punkt, solange die Basislinie bleibt.
    pub fn on_delete_key(&mut self) -> EditorAction {
        if self.mode != EditMode::MovePoint {
            return EditorAction::Unchanged;
        }
        let Some(index) = self.move_point else {
            return EditorAction::Unchanged;
        };
        if Arc::make_mut(&mut self.curve).remove(index).is_none() {
            return EditorAction::Unchanged;
        }
        self.clear_transient();
        self.mode = EditMode::Done;
        EditorAction::CurveChanged
    }

    /// Wählt den Segment-Typ für neue bzw. umgetaggte Segmente.
    /// Ein offener Anker übernimmt den Typ sofort (nur Vorschau).
    pub fn set_active_segment_type(&mut self, segment_type: SegmentType) -> EditorAction {
        log::debug!("Segment-Typ gewählt: {}", segment_type.label());
        self.active_type = segment_type;
        match self.anchor1.as_mut() {
            Some(anchor) if anchor.segment_type != segment_type => {
                anchor.segment_type = segment_type;
                EditorAction::PreviewChanged
            }
            _ => EditorAction::Unchanged,
        }
    }

    /// Lädt ein geteiltes Preset. Die Kurve bleibt bis zur ersten Änderung gesperrt.
    pub fn load_preset(&mut self, curve: Arc<SeedCurve>, stroke_width: f32) -> EditorAction {
        self.reset();
        self.curve = curve;
        self.stroke_width = stroke_width.max(1.0);
        self.mode = EditMode::Locked;
        EditorAction::CurveChanged
    }

    /// Übernimmt eine eigene, sofort editierbare Kurve.
    pub fn load_curve(&mut self, curve: SeedCurve, stroke_width: f32) -> EditorAction {
        self.reset();
        self.mode = if curve.is_empty() {
            EditMode::Init
        } else {
            EditMode::Done
        };
        self.curve = Arc::new(curve);
        self.stroke_width = stroke_width.max(1.0);
        EditorAction::CurveChanged
    }

    /// Leere Kurve, Modus `Init`, Standard-Strichstärke.
    pub fn reset(&mut self) -> EditorAction {
        self.mode = EditMode::Init;
        self.clear_transient();
        self.curve = Arc::new(SeedCurve::new());
        self.stroke_width = self.default_stroke_width;
        EditorAction::CurveChanged
    }

    /// Verwirft die aktuelle Kurve (auch ein gesperrtes Preset).
    pub fn clear(&mut self) -> EditorAction {
        if self.mode == EditMode::Locked {
            log::debug!("Gesperrtes Preset verworfen");
        }
        self.reset()
    }

    /// Setzt die Strichstärke des Fraktals (mindestens 1).
    pub fn set_stroke_width(&mut self, width: f32) -> EditorAction {
        let width = width.max(1.0);
        if self.stroke_width == width {
            return EditorAction::Unchanged;
        }
        self.stroke_width = width;
        EditorAction::PreviewChanged
    }

    /// Schaltet das Einrasten auf das Raster um.
    pub fn set_snap_enabled(&mut self, enabled: bool) -> EditorAction {
        if self.snap.enabled == enabled {
            return EditorAction::Unchanged;
        }
        self.snap.enabled = enabled;
        match self.pointer {
            Some(pointer) => {
                self.observe_pointer(pointer.raw);
                EditorAction::PreviewChanged
            }
            None => EditorAction::Unchanged,
        }
    }

    /// Löst die Kurve vom geteilten Preset und wechselt nach `Done`.
    fn detach_from_preset(&mut self) {
        Arc::make_mut(&mut self.curve);
        self.clear_transient();
        self.mode = EditMode::Done;
        log::debug!("Preset zur Bearbeitung kopiert ({} Punkte)", self.curve.len());
    }

    /// Klick in `Done`: Punkt aufnehmen oder Segment umtaggen.
    fn select_at(&mut self, raw: Vec2) -> EditorAction {
        if let Some(index) = self.curve.nearest_point_index(raw, self.point_pick_radius) {
            self.pick_up_point(index);
            return EditorAction::PreviewChanged;
        }

        match self
            .curve
            .nearest_segment_index(raw, self.segment_pick_radius)
        {
            Some(segment) => {
                let active = self.active_type;
                Arc::make_mut(&mut self.curve).set_segment_type(segment + 1, active);
                log::debug!("Segment {} umgetaggt: {}", segment + 1, active.label());
                EditorAction::CurveChanged
            }
            None => EditorAction::Unchanged,
        }
    }

    /// Nimmt Punkt `index` auf; die Anker sind seine Nachbarn.
    fn pick_up_point(&mut self, index: usize) {
        let points = self.curve.points();
        if index == 0 {
            self.anchor1 = points
                .get(1)
                .map(|next| Anchor::new(next.position, next.segment_type));
            self.anchor2 = None;
        } else {
            self.anchor1 = Some(Anchor::new(
                points[index - 1].position,
                points[index].segment_type,
            ));
            self.anchor2 = points
                .get(index + 1)
                .map(|next| Anchor::new(next.position, next.segment_type));
        }
        self.move_point = Some(index);
        self.mode = EditMode::MovePoint;
    }

    /// Doppelklick in `Done` auf ein Segment (nicht auf einen Punkt):
    /// neuen Punkt einfügen und sofort aufnehmen.
    fn insert_at(&mut self, raw: Vec2, snapped: Vec2) -> EditorAction {
        if self
            .curve
            .nearest_point_index(raw, self.point_pick_radius)
            .is_some()
        {
            return EditorAction::Unchanged;
        }
        let Some(segment) = self
            .curve
            .nearest_segment_index(raw, self.segment_pick_radius)
        else {
            return EditorAction::Unchanged;
        };

        let points = self.curve.points();
        let start = points[segment].position;
        let end = points[segment + 1];
        let index = segment + 1;

        Arc::make_mut(&mut self.curve).insert(index, SeedPoint::new(snapped, end.segment_type));
        self.anchor1 = Some(Anchor::new(start, end.segment_type));
        self.anchor2 = Some(Anchor::new(end.position, end.segment_type));
        self.move_point = Some(index);
        self.mode = EditMode::MovePoint;
        EditorAction::CurveChanged
    }

    /// Klick in `MovePoint`: Punkt an der eingerasteten Position absetzen.
    ///
    /// Das eingehende Segment behält den ausstehenden Tag von Anker 1; der
    /// Startpunkt hat kein eingehendes Segment und behält seinen eigenen.
    fn drop_moving_point(&mut self, snapped: Vec2) -> EditorAction {
        let Some(index) = self.move_point else {
            self.mode = EditMode::Done;
            return EditorAction::PreviewChanged;
        };
        let own_type = self
            .curve
            .get(index)
            .map_or(SegmentType::Regular, |p| p.segment_type);
        let segment_type = match (index, self.anchor1) {
            (0, _) | (_, None) => own_type,
            (_, Some(anchor)) => anchor.segment_type,
        };

        Arc::make_mut(&mut self.curve).set_point(index, SeedPoint::new(snapped, segment_type));
        self.clear_transient();
        self.mode = EditMode::Done;
        EditorAction::CurveChanged
    }
}
