//! Handler für Laufzeit-Optionen.

use std::path::Path;

use anyhow::Context;

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen und speichert sie als TOML nach `path`.
///
/// Der Host übergibt üblicherweise [`EditorOptions::config_path`].
pub fn apply_options(
    state: &mut AppState,
    options: EditorOptions,
    path: &str,
) -> anyhow::Result<()> {
    state.options = options;
    state.editor.apply_options(&state.options);
    state.view.depth = state.options.clamp_depth(state.view.depth);
    state.needs_redraw = true;
    state
        .options
        .save_to_file(Path::new(path))
        .with_context(|| format!("Optionen nicht speicherbar: {}", path))
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default(), path)
}
