//! SVG-Ausgabe als [`Surface`]-Implementierung.

use glam::Vec2;

use super::surface::{LineStyle, Surface};

/// Sammelt Linien als `<line>`-Elemente.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f32,
    height: f32,
    body: String,
    element_count: usize,
}

impl SvgSurface {
    /// Neue, leere Fläche mit `viewBox="0 0 width height"`.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            element_count: 0,
        }
    }

    /// Anzahl der bisher geschriebenen Elemente.
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Vollständiges SVG-Dokument.
    pub fn to_svg_string(&self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 256);
        svg.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<g fill="none" stroke-linecap="round">
"#,
            w = self.width,
            h = self.height
        ));
        svg.push_str(&self.body);
        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

/// Wandelt RGBA in `#rrggbb` plus Deckkraft um.
fn css_color(color: [f32; 4]) -> (String, f32) {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    (
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(color[0]),
            channel(color[1]),
            channel(color[2])
        ),
        color[3].clamp(0.0, 1.0),
    )
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
        self.element_count = 0;
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle) {
        let (stroke, opacity) = css_color(style.color);
        self.body.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"",
            from.x, from.y, to.x, to.y, stroke, style.width
        ));
        if opacity < 1.0 {
            self.body
                .push_str(&format!(" stroke-opacity=\"{:.3}\"", opacity));
        }
        if let Some([dash, gap]) = style.dash {
            self.body
                .push_str(&format!(" stroke-dasharray=\"{} {}\"", dash, gap));
        }
        self.body.push_str("/>\n");
        self.element_count += 1;
    }

    fn draw_marker(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let (fill, _) = css_color(color);
        self.body.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"/>\n",
            center.x, center.y, radius, fill
        ));
        self.element_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_line_elements_with_style() {
        let mut svg = SvgSurface::new(640.0, 320.0);
        svg.draw_line(
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 4.0),
            &LineStyle::dashed([1.0, 0.0, 0.0, 1.0], 2.0, [10.0, 10.0]),
        );

        let doc = svg.to_svg_string();
        assert!(doc.contains(r#"viewBox="0 0 640 320""#));
        assert!(doc.contains(
            r##"<line x1="1.00" y1="2.00" x2="3.00" y2="4.00" stroke="#ff0000""##
        ));
        assert!(doc.contains(r#"stroke-dasharray="10 10""#));
        assert_eq!(svg.element_count(), 1);
    }

    #[test]
    fn clear_discards_previous_elements() {
        let mut svg = SvgSurface::new(10.0, 10.0);
        svg.draw_marker(Vec2::new(5.0, 5.0), 3.5, [0.0, 0.0, 0.0, 1.0]);
        svg.clear();

        assert_eq!(svg.element_count(), 0);
        assert!(!svg.to_svg_string().contains("<circle"));
    }
}
