//! Editor-Overlay: Raster, Seed-Kurve, Basislinie und Gummiband-Vorschau.

use glam::Vec2;

use super::surface::{LineStyle, Surface};
use crate::core::{SeedCurve, SegmentType};
use crate::shared::options::GRID_MARK_HALF;
use crate::shared::EditorOptions;

/// Zeichnet kleine Kreuze auf allen inneren Rasterpunkten der Fläche.
pub fn draw_grid<S: Surface + ?Sized>(
    width: f32,
    height: f32,
    options: &EditorOptions,
    surface: &mut S,
) {
    if options.grid_size <= 0.0 {
        return;
    }
    let style = LineStyle::solid(options.grid_color, 1.0);
    let columns = (width / options.grid_size).floor() as u32;
    let rows = (height / options.grid_size).floor() as u32;
    for x in 1..columns {
        for y in 1..rows {
            let center = Vec2::new(x as f32, y as f32) * options.grid_size
                + Vec2::splat(options.grid_offset);
            surface.draw_line(
                center - Vec2::X * GRID_MARK_HALF,
                center + Vec2::X * GRID_MARK_HALF,
                &style,
            );
            surface.draw_line(
                center - Vec2::Y * GRID_MARK_HALF,
                center + Vec2::Y * GRID_MARK_HALF,
                &style,
            );
        }
    }
}

/// Zeichnet die Seed-Segmente im Stil ihres Segment-Typs.
///
/// Ist `hidden_point` gesetzt, entfallen beide an diesen Punkt angrenzenden
/// Segmente (der Punkt wird gerade verschoben). `with_baseline` ergänzt die
/// gestrichelte Verbindung vom ersten zum letzten Punkt.
/// Gibt die Anzahl gezeichneter Linien zurück.
pub fn draw_seed<S: Surface + ?Sized>(
    curve: &SeedCurve,
    options: &EditorOptions,
    hidden_point: Option<usize>,
    with_baseline: bool,
    surface: &mut S,
) -> usize {
    let mut drawn = 0;
    for segment in curve.segments() {
        let touches_hidden =
            hidden_point.is_some_and(|h| h + 1 == segment.index || h == segment.index);
        if touches_hidden {
            continue;
        }
        surface.draw_line(
            segment.start,
            segment.end,
            &options.segment_style(segment.segment_type),
        );
        drawn += 1;
    }

    if with_baseline && let Some((start, end)) = curve.baseline() {
        surface.draw_line(start, end, &options.baseline_style());
        drawn += 1;
    }
    drawn
}

/// Zeichnet die Gummiband-Linien von den offenen Ankern zum Cursor und
/// die Cursor-Markierung.
pub fn draw_preview<S: Surface + ?Sized>(
    anchors: &[(Vec2, SegmentType)],
    cursor: Option<Vec2>,
    options: &EditorOptions,
    surface: &mut S,
) {
    let Some(cursor) = cursor else {
        return;
    };
    for &(anchor, segment_type) in anchors {
        surface.draw_line(anchor, cursor, &options.segment_style(segment_type));
    }
    surface.draw_marker(cursor, options.highlight_radius, options.baseline_color);
}
