//! Handler für Editor-Eingaben auf der Seed-Kurve.

use glam::Vec2;

use crate::app::editor::{EditMode, EditorAction};
use crate::app::AppState;
use crate::core::SegmentType;

/// Übernimmt das Ergebnis einer Editor-Operation in den App-State.
pub(crate) fn apply_editor_action(state: &mut AppState, action: EditorAction) {
    match action {
        EditorAction::Unchanged => {}
        EditorAction::PreviewChanged => state.needs_redraw = true,
        EditorAction::CurveChanged => {
            state.refresh_dimension();
            state.needs_redraw = true;
        }
    }
    // Ein kopiertes oder verworfenes Preset ist nicht mehr "aktiv"
    if state.editor.mode() != EditMode::Locked {
        state.active_preset = None;
    }
}

/// Zeigerbewegung an den Editor weitergeben.
pub fn pointer_move(state: &mut AppState, pos: Vec2) {
    let action = state.editor.on_pointer_move(pos);
    apply_editor_action(state, action);
}

/// Klick an den Editor weitergeben.
pub fn click(state: &mut AppState, pos: Vec2) {
    let action = state.editor.on_click(pos);
    apply_editor_action(state, action);
}

/// Doppelklick an den Editor weitergeben.
pub fn double_click(state: &mut AppState, pos: Vec2) {
    let action = state.editor.on_double_click(pos);
    apply_editor_action(state, action);
}

/// Löscht den gerade verschobenen Punkt.
pub fn delete_point(state: &mut AppState) {
    let action = state.editor.on_delete_key();
    apply_editor_action(state, action);
}

/// Setzt den aktiven Segment-Typ.
pub fn set_segment_type(state: &mut AppState, segment_type: SegmentType) {
    let action = state.editor.set_active_segment_type(segment_type);
    apply_editor_action(state, action);
}

/// Verwirft die aktuelle Kurve.
pub fn clear(state: &mut AppState) {
    let action = state.editor.clear();
    apply_editor_action(state, action);
    log::info!("Seed-Kurve geleert");
}

/// Schaltet das Einrasten um.
pub fn set_snap(state: &mut AppState, enabled: bool) {
    state.options.snap_to_grid = enabled;
    let action = state.editor.set_snap_enabled(enabled);
    apply_editor_action(state, action);
}
