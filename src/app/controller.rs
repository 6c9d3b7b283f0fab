//! Application Controller für zentrale Event-Verarbeitung.

use super::editor::EditMode;
use super::{AppCommand, AppIntent, AppState, ViewMode};
use crate::render::{self, Surface};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editor ===
            AppCommand::EditorPointerMove { pos } => handlers::editing::pointer_move(state, pos),
            AppCommand::EditorClick { pos } => handlers::editing::click(state, pos),
            AppCommand::EditorDoubleClick { pos } => handlers::editing::double_click(state, pos),
            AppCommand::EditorDeletePoint => handlers::editing::delete_point(state),
            AppCommand::SetSegmentType { segment_type } => {
                handlers::editing::set_segment_type(state, segment_type)
            }
            AppCommand::ClearSeed => handlers::editing::clear(state),
            AppCommand::SetSnapToGrid { enabled } => handlers::editing::set_snap(state, enabled),

            // === Presets & Dateien ===
            AppCommand::LoadPreset { name } => handlers::file_io::load_preset(state, &name)?,
            AppCommand::LoadSeedFile { path } => handlers::file_io::load_seed_file(state, &path)?,
            AppCommand::SaveSeedFile { path } => handlers::file_io::save_seed_file(state, &path)?,

            // === Ansicht ===
            AppCommand::SetDepth { depth } => handlers::view::set_depth(state, depth),
            AppCommand::SetStrokeWidth { width } => handlers::view::set_stroke_width(state, width),
            AppCommand::SetViewMode { mode } => handlers::view::set_view_mode(state, mode),

            // === Optionen ===
            AppCommand::ApplyOptions { options, path } => {
                handlers::options::apply_options(state, *options, &path)?
            }
            AppCommand::ResetOptions { path } => handlers::options::reset_options(state, &path)?,
        }

        Ok(())
    }

    /// Zeichnet die aktive Ansicht.
    ///
    /// Gibt die Anzahl gezeichneter Fraktal- bzw. Seed-Linien zurück (ohne Raster).
    pub fn redraw<S: Surface + ?Sized>(&self, state: &AppState, surface: &mut S) -> usize {
        let curve = state.editor.curve();
        match state.view.mode {
            ViewMode::Draw => {
                let style = state.options.fractal_style(state.stroke_width());
                render::render(curve, state.view.depth, &style, surface)
            }
            ViewMode::Edit => {
                surface.clear();
                let extent = state.options.canvas_extent();
                render::draw_grid(extent.x, extent.y, &state.options, surface);

                let preview = state.editor.preview();
                let with_baseline =
                    matches!(state.editor.mode(), EditMode::Done | EditMode::Locked);
                let drawn = render::draw_seed(
                    curve,
                    &state.options,
                    preview.moving_point,
                    with_baseline,
                    surface,
                );
                render::draw_preview(&preview.anchors, preview.cursor, &state.options, surface);
                drawn
            }
        }
    }

    /// Zeichnet nur, wenn der State es anfordert, und setzt die Anforderung zurück.
    pub fn redraw_if_needed<S: Surface + ?Sized>(
        &self,
        state: &mut AppState,
        surface: &mut S,
    ) -> bool {
        if !state.needs_redraw {
            return false;
        }
        self.redraw(state, surface);
        state.needs_redraw = false;
        true
    }
}
