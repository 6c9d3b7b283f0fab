//! Zentrale Konfiguration für den Fractal Explorer.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{SegmentType, POINT_PICK_RADIUS, SEGMENT_PICK_RADIUS};
use crate::render::LineStyle;

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Mindestbreite der Zeichenfläche.
pub const CANVAS_WIDTH: f32 = 640.0;
/// Mindesthöhe der Zeichenfläche.
pub const CANVAS_HEIGHT: f32 = 320.0;

// ── Raster ──────────────────────────────────────────────────────────

/// Rasterweite für Snap-to-Grid (Pixel).
pub const GRID_SIZE: f32 = 20.0;
/// Versatz der Rasterpunkte (Pixelmitte).
pub const GRID_OFFSET: f32 = 0.5;
/// Farbe der Rasterkreuze (RGBA: #a0a0a0).
pub const GRID_COLOR: [f32; 4] = [0.627, 0.627, 0.627, 1.0];
/// Halbe Armlänge eines Rasterkreuzes.
pub const GRID_MARK_HALF: f32 = 2.5;

// ── Segment-Darstellung ─────────────────────────────────────────────

/// Farbe für Regular-Segmente (RGBA: Rot, #e41a1c).
pub const SEGMENT_COLOR_REGULAR: [f32; 4] = [0.894, 0.102, 0.110, 1.0];
/// Farbe für Flipped-Segmente (RGBA: Blau, #377eb8).
pub const SEGMENT_COLOR_FLIPPED: [f32; 4] = [0.216, 0.494, 0.722, 1.0];
/// Farbe für rückwärts gespiegelte Segmente (RGBA: Orange, #ff7f00).
pub const SEGMENT_COLOR_FLIPPED_REVERSE: [f32; 4] = [1.0, 0.498, 0.0, 1.0];
/// Farbe für rückwärts laufende Segmente (RGBA: Violett, #984ea3).
pub const SEGMENT_COLOR_REGULAR_REVERSE: [f32; 4] = [0.596, 0.306, 0.639, 1.0];
/// Farbe für nicht rekursive Segmente (RGBA: Grün, #4daf4a).
pub const SEGMENT_COLOR_NON_RECURSING: [f32; 4] = [0.302, 0.686, 0.290, 1.0];
/// Farbe für unsichtbare Segmente im Editor (RGBA: Grau, #808080).
pub const SEGMENT_COLOR_INVISIBLE: [f32; 4] = [0.502, 0.502, 0.502, 1.0];
/// Strichstärke sichtbarer Seed-Segmente.
pub const SEGMENT_WIDTH: f32 = 2.0;
/// Strichstärke unsichtbarer Seed-Segmente im Editor.
pub const SEGMENT_WIDTH_INVISIBLE: f32 = 1.0;

// ── Fraktal ─────────────────────────────────────────────────────────

/// Linienfarbe des Fraktals (RGBA: Schwarz).
pub const FRACTAL_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Standard-Strichstärke des Fraktals.
pub const FRACTAL_LINE_WIDTH: f32 = 1.0;
/// Standard-Rekursionstiefe.
pub const DEFAULT_DEPTH: u32 = 1;
/// Maximale Rekursionstiefe, die die App zulässt.
pub const MAX_DEPTH: u32 = 8;

// ── Editor-Overlay ──────────────────────────────────────────────────

/// Farbe der gestrichelten Basislinie.
pub const BASELINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Strichmuster der Basislinie [Strich, Lücke].
pub const BASELINE_DASH: [f32; 2] = [10.0, 10.0];
/// Radius der Cursor-Markierung.
pub const HIGHLIGHT_RADIUS: f32 = 3.5;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `fractal_explorer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Größe der Zeichenfläche [Breite, Höhe]
    pub canvas_size: [f32; 2],

    // ── Raster ──────────────────────────────────────────────────
    /// Klickpositionen auf das Raster einrasten
    pub snap_to_grid: bool,
    /// Rasterweite in Pixeln
    pub grid_size: f32,
    /// Versatz der Rasterpunkte
    pub grid_offset: f32,
    pub grid_color: [f32; 4],

    // ── Trefferprüfung ──────────────────────────────────────────
    /// Trefferradius für Seed-Punkte
    pub point_pick_radius: f32,
    /// Trefferradius für Seed-Segmente
    pub segment_pick_radius: f32,

    // ── Segmente ────────────────────────────────────────────────
    pub segment_color_regular: [f32; 4],
    pub segment_color_flipped: [f32; 4],
    pub segment_color_flipped_reverse: [f32; 4],
    pub segment_color_regular_reverse: [f32; 4],
    pub segment_color_non_recursing: [f32; 4],
    pub segment_color_invisible: [f32; 4],
    /// Strichstärke sichtbarer Segmente
    pub segment_width: f32,
    /// Strichstärke unsichtbarer Segmente
    pub segment_width_invisible: f32,

    // ── Fraktal ─────────────────────────────────────────────────
    pub fractal_color: [f32; 4],
    /// Strichstärke, solange kein Preset eine eigene vorgibt
    pub fractal_line_width: f32,
    pub default_depth: u32,
    pub max_depth: u32,

    // ── Overlay ─────────────────────────────────────────────────
    pub baseline_color: [f32; 4],
    pub baseline_dash: [f32; 2],
    pub highlight_radius: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_size: [CANVAS_WIDTH, CANVAS_HEIGHT],

            snap_to_grid: true,
            grid_size: GRID_SIZE,
            grid_offset: GRID_OFFSET,
            grid_color: GRID_COLOR,

            point_pick_radius: POINT_PICK_RADIUS,
            segment_pick_radius: SEGMENT_PICK_RADIUS,

            segment_color_regular: SEGMENT_COLOR_REGULAR,
            segment_color_flipped: SEGMENT_COLOR_FLIPPED,
            segment_color_flipped_reverse: SEGMENT_COLOR_FLIPPED_REVERSE,
            segment_color_regular_reverse: SEGMENT_COLOR_REGULAR_REVERSE,
            segment_color_non_recursing: SEGMENT_COLOR_NON_RECURSING,
            segment_color_invisible: SEGMENT_COLOR_INVISIBLE,
            segment_width: SEGMENT_WIDTH,
            segment_width_invisible: SEGMENT_WIDTH_INVISIBLE,

            fractal_color: FRACTAL_COLOR,
            fractal_line_width: FRACTAL_LINE_WIDTH,
            default_depth: DEFAULT_DEPTH,
            max_depth: MAX_DEPTH,

            baseline_color: BASELINE_COLOR,
            baseline_dash: BASELINE_DASH,
            highlight_radius: HIGHLIGHT_RADIUS,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fractal_explorer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fractal_explorer.toml")
    }

    /// Zeichenstil eines Seed-Segments im Editor.
    pub fn segment_style(&self, segment_type: SegmentType) -> LineStyle {
        let color = match segment_type {
            SegmentType::Regular => self.segment_color_regular,
            SegmentType::Flipped => self.segment_color_flipped,
            SegmentType::FlippedReverse => self.segment_color_flipped_reverse,
            SegmentType::RegularReverse => self.segment_color_regular_reverse,
            SegmentType::NonRecursing => self.segment_color_non_recursing,
            SegmentType::Invisible => self.segment_color_invisible,
        };
        let width = match segment_type {
            SegmentType::Invisible => self.segment_width_invisible,
            _ => self.segment_width,
        };
        LineStyle::solid(color, width)
    }

    /// Zeichenstil der Fraktal-Linien bei gegebener Strichstärke.
    pub fn fractal_style(&self, stroke_width: f32) -> LineStyle {
        LineStyle::solid(self.fractal_color, stroke_width)
    }

    /// Zeichenstil der gestrichelten Basislinie.
    pub fn baseline_style(&self) -> LineStyle {
        LineStyle::dashed(self.baseline_color, 1.0, self.baseline_dash)
    }

    /// Zeichenflächengröße, mindestens [`CANVAS_WIDTH`] × [`CANVAS_HEIGHT`].
    pub fn canvas_extent(&self) -> glam::Vec2 {
        glam::Vec2::new(
            self.canvas_size[0].max(CANVAS_WIDTH),
            self.canvas_size[1].max(CANVAS_HEIGHT),
        )
    }

    /// Begrenzt eine angefragte Tiefe auf `1..=max_depth`.
    pub fn clamp_depth(&self, depth: u32) -> u32 {
        depth.clamp(1, self.max_depth.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let opts = EditorOptions::default();
        assert!(opts.snap_to_grid);
        assert_eq!(opts.grid_size, GRID_SIZE);
        assert_eq!(opts.point_pick_radius, 10.0);
        assert_eq!(opts.segment_pick_radius, 5.0);
        assert_eq!(opts.max_depth, MAX_DEPTH);
    }

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut opts = EditorOptions::default();
        opts.grid_size = 25.0;
        opts.snap_to_grid = false;

        let content = toml::to_string_pretty(&opts).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&content).expect("lesbar");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let parsed: EditorOptions = toml::from_str("grid_size = 10.0\n").expect("lesbar");
        assert_eq!(parsed.grid_size, 10.0);
        assert_eq!(parsed.max_depth, MAX_DEPTH);
        assert_eq!(parsed.segment_color_flipped, SEGMENT_COLOR_FLIPPED);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("fractal_explorer_gibt_es_nicht.toml");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn invisible_segments_are_thinner() {
        let opts = EditorOptions::default();
        assert_eq!(opts.segment_style(SegmentType::Invisible).width, 1.0);
        assert_eq!(opts.segment_style(SegmentType::Regular).width, 2.0);
        assert_eq!(
            opts.segment_style(SegmentType::NonRecursing).color,
            SEGMENT_COLOR_NON_RECURSING
        );
    }

    #[test]
    fn canvas_never_shrinks_below_minimum() {
        let opts = EditorOptions {
            canvas_size: [100.0, 900.0],
            ..EditorOptions::default()
        };
        assert_eq!(opts.canvas_extent(), glam::Vec2::new(640.0, 900.0));
    }

    #[test]
    fn depth_is_clamped() {
        let opts = EditorOptions::default();
        assert_eq!(opts.clamp_depth(0), 1);
        assert_eq!(opts.clamp_depth(5), 5);
        assert_eq!(opts.clamp_depth(50), MAX_DEPTH);
    }
}
