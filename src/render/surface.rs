//! Zeichenflächen-Vertrag zwischen Renderer und Host.

use glam::Vec2;

/// Strichattribute einer Linie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// RGBA, Komponenten in `[0, 1]`
    pub color: [f32; 4],
    pub width: f32,
    /// Optionales Strichmuster [Strich, Lücke]
    pub dash: Option<[f32; 2]>,
}

impl LineStyle {
    /// Durchgezogene Linie.
    pub const fn solid(color: [f32; 4], width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    /// Gestrichelte Linie mit Muster [Strich, Lücke].
    pub const fn dashed(color: [f32; 4], width: f32, dash: [f32; 2]) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

/// Vom Host bereitgestellte Zeichenfläche.
pub trait Surface {
    /// Löscht den gesamten Inhalt.
    fn clear(&mut self);

    /// Zeichnet eine gerade Linie.
    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle);

    /// Zeichnet eine gefüllte Kreismarkierung (z.B. Cursor-Hervorhebung).
    fn draw_marker(&mut self, _center: Vec2, _radius: f32, _color: [f32; 4]) {}
}

/// Eine aufgezeichnete Linie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnLine {
    pub from: Vec2,
    pub to: Vec2,
    pub style: LineStyle,
}

/// Eine aufgezeichnete Markierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnMarker {
    pub center: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
}

/// Zeichenfläche, die alle Aufrufe nur mitschreibt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pub lines: Vec<DrawnLine>,
    pub markers: Vec<DrawnMarker>,
    /// Anzahl der `clear()`-Aufrufe
    pub clear_count: usize,
}

impl RecordingSurface {
    /// Leere Aufzeichnung.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.lines.clear();
        self.markers.clear();
        self.clear_count += 1;
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle) {
        self.lines.push(DrawnLine {
            from,
            to,
            style: *style,
        });
    }

    fn draw_marker(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.markers.push(DrawnMarker {
            center,
            radius,
            color,
        });
    }
}
