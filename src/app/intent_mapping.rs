//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, ViewMode};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let editing = state.view.mode == ViewMode::Edit;

    match intent {
        // Zeigereingaben gehören nur in der Bearbeiten-Ansicht zum Editor
        AppIntent::PointerMoved { pos } if editing => vec![AppCommand::EditorPointerMove { pos }],
        AppIntent::PointerClicked { pos } if editing => vec![AppCommand::EditorClick { pos }],
        AppIntent::PointerDoubleClicked { pos } if editing => {
            vec![AppCommand::EditorDoubleClick { pos }]
        }
        AppIntent::DeleteKeyPressed if editing => vec![AppCommand::EditorDeletePoint],
        AppIntent::PointerMoved { .. }
        | AppIntent::PointerClicked { .. }
        | AppIntent::PointerDoubleClicked { .. }
        | AppIntent::DeleteKeyPressed => Vec::new(),

        AppIntent::SegmentTypeSelected { segment_type } => {
            vec![AppCommand::SetSegmentType { segment_type }]
        }
        AppIntent::PresetSelected { name } => {
            // Empfohlene Tiefe des Presets gleich mit übernehmen
            let depth = state.presets.find(&name).map(|preset| preset.iterations);
            let mut commands = vec![AppCommand::LoadPreset { name }];
            if let Some(depth) = depth {
                commands.push(AppCommand::SetDepth { depth });
            }
            commands
        }
        AppIntent::SeedFileSelected { path } => vec![AppCommand::LoadSeedFile { path }],
        AppIntent::SeedSaveRequested { path } => vec![AppCommand::SaveSeedFile { path }],
        AppIntent::ClearRequested => vec![AppCommand::ClearSeed],
        AppIntent::DepthSelected { depth } => vec![AppCommand::SetDepth { depth }],
        AppIntent::StrokeWidthChanged { width } => vec![AppCommand::SetStrokeWidth { width }],
        AppIntent::SnapToggled { enabled } => vec![AppCommand::SetSnapToGrid { enabled }],
        AppIntent::ViewModeSelected { mode } => vec![AppCommand::SetViewMode { mode }],
        AppIntent::OptionsApplied { options, path } => {
            vec![AppCommand::ApplyOptions { options, path }]
        }
        AppIntent::OptionsResetRequested { path } => vec![AppCommand::ResetOptions { path }],
    }
}
