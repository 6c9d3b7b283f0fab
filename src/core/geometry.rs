//! Abstands- und Trefferabfragen auf Polylinien.
//!
//! Alle Vergleiche laufen über quadrierte Abstände; die Toleranzradien werden
//! dafür einmal quadriert.

use glam::Vec2;

/// Standard-Trefferradius für Punkte (quadriert: 100).
pub const POINT_PICK_RADIUS: f32 = 10.0;
/// Standard-Trefferradius für Segmente (quadriert: 25).
pub const SEGMENT_PICK_RADIUS: f32 = 5.0;

/// Quadrierter euklidischer Abstand.
#[inline]
pub fn squared_distance(p: Vec2, q: Vec2) -> f32 {
    p.distance_squared(q)
}

/// Nächster Punkt auf dem Segment `a → b` (Projektion mit `t ∈ [0, 1]`).
///
/// Ein entartetes Segment (`a == b`) liefert `a`.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Quadrierter Abstand von `p` zum Segment `a → b`.
#[inline]
pub fn squared_distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    squared_distance(p, closest_point_on_segment(p, a, b))
}

/// Index des Punkts mit minimalem Abstand zu `query`, falls innerhalb `max_distance`.
///
/// Bei Gleichstand gewinnt der niedrigste Index.
pub fn nearest_point_index<I>(points: I, query: Vec2, max_distance: f32) -> Option<usize>
where
    I: IntoIterator<Item = Vec2>,
{
    let mut best: Option<(usize, f32)> = None;
    for (index, point) in points.into_iter().enumerate() {
        let dist_sq = squared_distance(point, query);
        if best.is_none_or(|(_, best_sq)| dist_sq < best_sq) {
            best = Some((index, dist_sq));
        }
    }

    best.filter(|&(_, dist_sq)| dist_sq <= max_distance * max_distance)
        .map(|(index, _)| index)
}

/// Index `i` des Segments `i → i+1` mit minimalem Abstand zu `query`.
///
/// Liefert `None` bei weniger als zwei Punkten oder wenn das Minimum außerhalb
/// von `max_distance` liegt. Bei Gleichstand gewinnt das erste Segment.
pub fn nearest_segment_index<I>(points: I, query: Vec2, max_distance: f32) -> Option<usize>
where
    I: IntoIterator<Item = Vec2>,
{
    let mut iter = points.into_iter();
    let mut previous = iter.next()?;
    let mut best: Option<(usize, f32)> = None;

    for (index, current) in iter.enumerate() {
        let dist_sq = squared_distance_to_segment(query, previous, current);
        if best.is_none_or(|(_, best_sq)| dist_sq < best_sq) {
            best = Some((index, dist_sq));
        }
        previous = current;
    }

    best.filter(|&(_, dist_sq)| dist_sq <= max_distance * max_distance)
        .map(|(index, _)| index)
}
