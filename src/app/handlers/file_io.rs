//! Handler für Presets und Seed-Dateien.

use std::sync::Arc;

use anyhow::Context;

use super::editing::apply_editor_action;
use crate::app::AppState;
use crate::core::SeedCurve;

/// Lädt ein Preset aus dem Katalog (gesperrt bis zur ersten Änderung).
pub fn load_preset(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    let Some(preset) = state.presets.find(name) else {
        anyhow::bail!("Unbekanntes Preset: {}", name);
    };
    let seed = Arc::clone(&preset.seed);
    let stroke_width = preset.stroke_width;
    let preset_name = preset.name.clone();
    log::info!(
        "Preset geladen: {} ({} Punkte)",
        preset.full_name,
        seed.len()
    );

    let action = state.editor.load_preset(seed, stroke_width);
    apply_editor_action(state, action);
    state.active_preset = Some(preset_name);
    Ok(())
}

/// Lädt eine Seed-Kurve aus einer JSON-Datei (sofort editierbar).
pub fn load_seed_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Seed-Datei nicht lesbar: {}", path))?;
    let curve =
        SeedCurve::from_json(&json).with_context(|| format!("Seed-Datei fehlerhaft: {}", path))?;
    log::info!("Seed-Kurve geladen: {} ({} Punkte)", path, curve.len());

    let stroke_width = state.options.fractal_line_width;
    let action = state.editor.load_curve(curve, stroke_width);
    apply_editor_action(state, action);
    Ok(())
}

/// Speichert die aktuelle Seed-Kurve als JSON.
pub fn save_seed_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let json = state.editor.curve().to_json()?;
    std::fs::write(path, json).with_context(|| format!("Seed-Datei nicht schreibbar: {}", path))?;
    log::info!(
        "Seed-Kurve gespeichert nach: {} ({} Punkte)",
        path,
        state.editor.curve().len()
    );
    Ok(())
}
