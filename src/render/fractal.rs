//! Rekursive Fraktal-Expansion einer Seed-Kurve.
//!
//! Jedes rekursive Segment wird durch eine ähnlichkeitstransformierte Kopie
//! der gesamten Seed-Kurve ersetzt, bis die Tiefe aufgebraucht ist. Die Zahl
//! der Blattsegmente wächst mit `(rekursive Segmente)^depth`; die Tiefe muss
//! daher vom Aufrufer begrenzt werden (siehe [`MAX_RENDER_DEPTH`]).

use glam::Vec2;

use super::surface::{LineStyle, Surface};
use crate::core::{
    similarity_map, Handedness, ReplicationRole, SeedCurve, Traversal,
};

/// Empfohlene Obergrenze der Rekursionstiefe. Tiefere Aufrufe werden
/// ausgeführt, aber protokolliert.
pub const MAX_RENDER_DEPTH: u32 = 8;
/// Zielsegmente mit kleinerem quadrierten Abstand werden direkt gezeichnet.
pub const MIN_TARGET_LENGTH_SQ: f32 = 1.0;

/// Zeichnet das Fraktal von `curve` mit Rekursionstiefe `depth`.
///
/// Die Fläche wird vorher geleert. Kurven mit weniger als zwei Punkten
/// erzeugen keine Linien; Tiefe 0 wird wie Tiefe 1 behandelt.
/// Gibt die Anzahl gezeichneter Linien zurück.
pub fn render<S: Surface + ?Sized>(
    curve: &SeedCurve,
    depth: u32,
    style: &LineStyle,
    surface: &mut S,
) -> usize {
    surface.clear();

    let Some((base_start, base_end)) = curve.baseline() else {
        return 0;
    };
    if depth > MAX_RENDER_DEPTH {
        log::warn!(
            "Rendertiefe {} ueber empfohlenem Maximum {}",
            depth,
            MAX_RENDER_DEPTH
        );
    }

    let mut expander = Expander {
        curve,
        base_start,
        base_end,
        style,
        surface,
        drawn: 0,
    };
    expander.expand(base_start, base_end, Handedness::Normal, depth.max(1));
    log::debug!("Fraktal gezeichnet: Tiefe {}, {} Linien", depth, expander.drawn);
    expander.drawn
}

/// Gemeinsamer Zustand einer Render-Durchführung.
struct Expander<'a, S: Surface + ?Sized> {
    curve: &'a SeedCurve,
    base_start: Vec2,
    base_end: Vec2,
    style: &'a LineStyle,
    surface: &'a mut S,
    drawn: usize,
}

impl<S: Surface + ?Sized> Expander<'_, S> {
    fn draw(&mut self, from: Vec2, to: Vec2) {
        self.surface.draw_line(from, to, self.style);
        self.drawn += 1;
    }

    fn expand(&mut self, start: Vec2, end: Vec2, handedness: Handedness, level: u32) {
        if start.distance_squared(end) < MIN_TARGET_LENGTH_SQ {
            self.draw(start, end);
            return;
        }
        let Some(map) = similarity_map(self.base_start, self.base_end, start, end, handedness)
        else {
            self.draw(start, end);
            return;
        };

        let curve = self.curve;
        let mut current = map.transform_point2(self.base_start);
        for point in curve.points().iter().skip(1) {
            let next = map.transform_point2(point.position);
            match point.segment_type.role() {
                ReplicationRole::Skip => {}
                ReplicationRole::Straight => self.draw(current, next),
                ReplicationRole::Recurse { .. } if level <= 1 => self.draw(current, next),
                ReplicationRole::Recurse { traversal, mirror } => {
                    let (from, to) = match traversal {
                        Traversal::Forward => (current, next),
                        Traversal::Reverse => (next, current),
                    };
                    self.expand(from, to, handedness.combine(mirror), level - 1);
                }
            }
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;
    use approx::assert_abs_diff_eq;

    const STYLE: LineStyle = LineStyle::solid([0.0, 0.0, 0.0, 1.0], 1.0);

    fn curve(triples: &[(f32, f32, u8)]) -> SeedCurve {
        SeedCurve::from_triples(triples).expect("gueltige Tags")
    }

    fn koch() -> SeedCurve {
        curve(&[
            (60.0, 280.0, 0),
            (200.0, 280.0, 0),
            (320.0, 140.0, 0),
            (440.0, 280.0, 0),
            (580.0, 280.0, 0),
        ])
    }

    #[test]
    fn depth_one_draws_seed_segments() {
        let mut surface = RecordingSurface::new();
        let drawn = render(&koch(), 1, &STYLE, &mut surface);

        assert_eq!(drawn, 4);
        assert_eq!(surface.lines.len(), 4);
        assert_eq!(surface.lines[0].from, Vec2::new(60.0, 280.0));
        assert_abs_diff_eq!(surface.lines[3].to.x, 580.0, epsilon = 1e-3);
        assert_abs_diff_eq!(surface.lines[3].to.y, 280.0, epsilon = 1e-3);
    }

    #[test]
    fn depth_two_replaces_every_segment() {
        let mut surface = RecordingSurface::new();
        assert_eq!(render(&koch(), 2, &STYLE, &mut surface), 16);
    }

    #[test]
    fn depth_zero_behaves_like_one() {
        let mut surface = RecordingSurface::new();
        assert_eq!(render(&koch(), 0, &STYLE, &mut surface), 4);
    }

    #[test]
    fn short_curves_draw_nothing_but_clear() {
        let mut surface = RecordingSurface::new();
        assert_eq!(render(&curve(&[(5.0, 5.0, 0)]), 3, &STYLE, &mut surface), 0);
        assert!(surface.lines.is_empty());
        assert_eq!(surface.clear_count, 1);
    }

    #[test]
    fn invisible_segments_are_skipped_at_every_level() {
        let seed = curve(&[(0.0, 0.0, 0), (50.0, 0.0, 5), (100.0, 0.0, 0)]);
        let mut surface = RecordingSurface::new();
        // Pro Ebene bleibt genau ein rekursives Segment übrig
        assert_eq!(render(&seed, 3, &STYLE, &mut surface), 1);
    }

    #[test]
    fn non_recursing_segments_stay_straight() {
        let seed = curve(&[(0.0, 0.0, 0), (50.0, 0.0, 4), (100.0, 0.0, 0)]);
        let mut surface = RecordingSurface::new();
        // Ebene 2: 1 gerades + (1 gerades + 1 rekursiv → 2 Linien)
        assert_eq!(render(&seed, 2, &STYLE, &mut surface), 3);
        assert_eq!(render(&seed, 3, &STYLE, &mut surface), 4);
    }

    #[test]
    fn reverse_traversal_swaps_endpoints() {
        // Ein rückwärts laufendes Segment über die ganze Basislinie
        let seed = curve(&[(0.0, 0.0, 0), (0.0, 100.0, 0), (100.0, 100.0, 3), (100.0, 0.0, 0)]);
        let mut surface = RecordingSurface::new();
        render(&seed, 2, &STYLE, &mut surface);

        // Mittleres Segment (0,100)→(100,100) wird rückwärts expandiert:
        // erste Teillinie startet am Ende (100,100).
        let middle_first = surface.lines[3];
        assert_abs_diff_eq!(middle_first.from.x, 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(middle_first.from.y, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn mirroring_flips_the_bump_side() {
        let regular = curve(&[(0.0, 0.0, 0), (50.0, -50.0, 0), (100.0, 0.0, 0)]);
        let flipped = curve(&[(0.0, 0.0, 0), (50.0, -50.0, 1), (100.0, 0.0, 0)]);

        let mut a = RecordingSurface::new();
        let mut b = RecordingSurface::new();
        render(&regular, 2, &STYLE, &mut a);
        render(&flipped, 2, &STYLE, &mut b);

        assert_eq!(a.lines.len(), 4);
        assert_eq!(b.lines.len(), 4);
        // Erster Knick der ersten Unterkopie liegt auf gegenüberliegenden Seiten
        assert_ne!(a.lines[0].to, b.lines[0].to);
    }

    #[test]
    fn recursing_tags_pick_traversal_and_bump_side() {
        // Zweites Segment (50,-50)→(100,0) trägt das geprüfte Tag; seine
        // Unterkopie bei Tiefe 2 liefert Startpunkt und Spitze der Beule.
        let cases = [
            (0, Vec2::new(50.0, -50.0), Vec2::new(100.0, -50.0)),
            (1, Vec2::new(50.0, -50.0), Vec2::new(50.0, 0.0)),
            (2, Vec2::new(100.0, 0.0), Vec2::new(100.0, -50.0)),
            (3, Vec2::new(100.0, 0.0), Vec2::new(50.0, 0.0)),
        ];

        for (tag, from, apex) in cases {
            let seed = curve(&[(0.0, 0.0, 0), (50.0, -50.0, 0), (100.0, 0.0, tag)]);
            let mut surface = RecordingSurface::new();
            assert_eq!(render(&seed, 2, &STYLE, &mut surface), 4);

            // Die erste Unterkopie (Regular) ist für alle Fälle gleich
            assert_abs_diff_eq!(surface.lines[0].to.x, 0.0, epsilon = 1e-3);
            assert_abs_diff_eq!(surface.lines[0].to.y, -50.0, epsilon = 1e-3);

            let first = surface.lines[2];
            assert!(first.from.abs_diff_eq(from, 1e-3), "Tag {}: Start {:?}", tag, first.from);
            assert!(first.to.abs_diff_eq(apex, 1e-3), "Tag {}: Spitze {:?}", tag, first.to);
        }
    }

    #[test]
    fn tiny_targets_hit_recursion_floor() {
        let seed = curve(&[(0.0, 0.0, 0), (0.4, 0.3, 0), (0.8, 0.0, 0)]);
        let mut surface = RecordingSurface::new();
        assert_eq!(render(&seed, 6, &STYLE, &mut surface), 1);
    }
}
