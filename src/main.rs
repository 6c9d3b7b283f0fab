//! Fractal Explorer.
//!
//! Rendert eine Seed-Kurve (Preset oder JSON-Datei) als Fraktal in eine
//! SVG-Datei und gibt die geschätzte Dimension aus.

use anyhow::Context;
use fractal_explorer::{
    AppController, AppIntent, AppState, EditorOptions, PresetCatalog, SvgSurface, ViewMode,
};

const USAGE: &str = "Aufruf: Fractal-Explorer [--preset NAME | --seed DATEI.json] \
[--depth N] [--out DATEI.svg] [--list]";

/// Kommandozeilenargumente
#[derive(Debug, Default)]
struct CliArgs {
    preset: Option<String>,
    seed: Option<String>,
    depth: Option<u32>,
    out: Option<String>,
    list: bool,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--preset" => parsed.preset = Some(Self::value(&mut args, "--preset")?),
                "--seed" => parsed.seed = Some(Self::value(&mut args, "--seed")?),
                "--depth" => {
                    let raw = Self::value(&mut args, "--depth")?;
                    let depth = raw
                        .parse()
                        .with_context(|| format!("Ungueltige Tiefe: {}", raw))?;
                    parsed.depth = Some(depth);
                }
                "--out" => parsed.out = Some(Self::value(&mut args, "--out")?),
                "--list" => parsed.list = true,
                "-h" | "--help" => anyhow::bail!(USAGE),
                other => anyhow::bail!("Unbekanntes Argument: {}\n{}", other, USAGE),
            }
        }
        if parsed.preset.is_some() && parsed.seed.is_some() {
            anyhow::bail!("--preset und --seed schliessen sich aus\n{}", USAGE);
        }
        Ok(parsed)
    }

    fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
        args.next()
            .with_context(|| format!("{} erwartet einen Wert", flag))
    }
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Fractal Explorer v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let presets = PresetCatalog::builtin()?;

    if args.list {
        for preset in presets.iter() {
            println!(
                "{:<12} {:<28} Tiefe {}",
                preset.name, preset.full_name, preset.iterations
            );
        }
        return Ok(());
    }

    let mut state = AppState::new(options, presets);
    let mut controller = AppController::new();

    match (&args.preset, &args.seed) {
        (_, Some(path)) => controller.handle_intent(
            &mut state,
            AppIntent::SeedFileSelected { path: path.clone() },
        )?,
        (preset, None) => {
            let name = preset.clone().unwrap_or_else(|| "koch".to_string());
            controller.handle_intent(&mut state, AppIntent::PresetSelected { name })?;
        }
    }
    if let Some(depth) = args.depth {
        controller.handle_intent(&mut state, AppIntent::DepthSelected { depth })?;
    }
    controller.handle_intent(
        &mut state,
        AppIntent::ViewModeSelected {
            mode: ViewMode::Draw,
        },
    )?;

    let extent = state.options.canvas_extent();
    let mut surface = SvgSurface::new(extent.x, extent.y);
    let lines = controller.redraw(&state, &mut surface);

    let out = args.out.unwrap_or_else(|| "fractal.svg".to_string());
    std::fs::write(&out, surface.to_svg_string())
        .with_context(|| format!("SVG nicht schreibbar: {}", out))?;

    log::info!(
        "{} Linien bei Tiefe {} nach {} geschrieben",
        lines,
        state.view.depth,
        out
    );
    println!("{}", state.dimension_label());
    Ok(())
}
