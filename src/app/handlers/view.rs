//! Handler für Ansicht, Tiefe und Strichstärke.

use super::editing::apply_editor_action;
use crate::app::{AppState, ViewMode};

/// Setzt die Rekursionstiefe (begrenzt auf `1..=max_depth`).
pub fn set_depth(state: &mut AppState, depth: u32) {
    let clamped = state.options.clamp_depth(depth);
    if clamped != depth {
        log::warn!(
            "Tiefe {} ausserhalb 1..={}, verwende {}",
            depth,
            state.options.max_depth,
            clamped
        );
    }
    if state.view.depth != clamped {
        state.view.depth = clamped;
        if state.view.mode == ViewMode::Draw {
            state.needs_redraw = true;
        }
    }
}

/// Setzt die Strichstärke des Fraktals (mindestens 1).
pub fn set_stroke_width(state: &mut AppState, width: f32) {
    let action = state.editor.set_stroke_width(width);
    apply_editor_action(state, action);
}

/// Wechselt zwischen Zeichnen und Bearbeiten.
pub fn set_view_mode(state: &mut AppState, mode: ViewMode) {
    if state.view.mode == mode {
        return;
    }
    state.view.mode = mode;
    if mode == ViewMode::Draw {
        state.refresh_dimension();
    }
    state.needs_redraw = true;
}
