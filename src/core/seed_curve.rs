//! Seed-Kurve: geordnete Folge getaggter Punkte.

use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry;
use super::segment_type::{InvalidSegmentTag, SegmentType};

/// Mindestanzahl an Punkten, die beim Löschen erhalten bleibt (Basislinie).
pub const MIN_BASELINE_POINTS: usize = 2;

/// Ein Punkt der Seed-Kurve.
///
/// `segment_type` beschreibt das *eingehende* Segment (Vorgänger → dieser Punkt).
/// Beim ersten Punkt wird das Tag ignoriert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f32, f32, u8)", into = "(f32, f32, u8)")]
pub struct SeedPoint {
    pub position: Vec2,
    pub segment_type: SegmentType,
}

impl SeedPoint {
    /// Erstellt einen Punkt mit dem Tag seines eingehenden Segments.
    pub fn new(position: Vec2, segment_type: SegmentType) -> Self {
        Self {
            position,
            segment_type,
        }
    }
}

impl TryFrom<(f32, f32, u8)> for SeedPoint {
    type Error = InvalidSegmentTag;

    fn try_from((x, y, tag): (f32, f32, u8)) -> Result<Self, Self::Error> {
        Ok(Self::new(Vec2::new(x, y), SegmentType::try_from(tag)?))
    }
}

impl From<SeedPoint> for (f32, f32, u8) {
    fn from(point: SeedPoint) -> Self {
        (point.position.x, point.position.y, point.segment_type.tag())
    }
}

/// Ein Segment `start → end` mit dem Tag seines Endpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedSegment {
    /// Index des Endpunkts (≥ 1)
    pub index: usize,
    pub start: Vec2,
    pub end: Vec2,
    pub segment_type: SegmentType,
}

impl SeedSegment {
    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Generator-Polylinie eines selbstähnlichen Fraktals.
///
/// Aufeinanderfolgende Duplikate werden nur beim Anhängen verhindert; Presets
/// dürfen sie enthalten (z.B. für Stiftsprünge über unsichtbare Segmente).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedCurve {
    points: Vec<SeedPoint>,
}

impl SeedCurve {
    /// Erstellt eine leere Kurve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt die Punkte unverändert.
    pub fn from_points(points: Vec<SeedPoint>) -> Self {
        Self { points }
    }

    /// Baut eine Kurve aus `(x, y, tag)`-Tripeln.
    pub fn from_triples(triples: &[(f32, f32, u8)]) -> Result<Self, InvalidSegmentTag> {
        let points = triples
            .iter()
            .map(|&triple| SeedPoint::try_from(triple))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points })
    }

    /// Liest eine Kurve im JSON-Format `[[x, y, tag], ...]`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Seed-Kurve konnte nicht gelesen werden")
    }

    /// Serialisiert die Kurve als JSON-Tripel-Liste.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true`, wenn die Kurve keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Alle Punkte in Reihenfolge.
    pub fn points(&self) -> &[SeedPoint] {
        &self.points
    }

    /// Punkt an `index`, falls vorhanden.
    pub fn get(&self, index: usize) -> Option<&SeedPoint> {
        self.points.get(index)
    }

    /// Startpunkt der Basislinie.
    pub fn first(&self) -> Option<&SeedPoint> {
        self.points.first()
    }

    /// Endpunkt der Basislinie.
    pub fn last(&self) -> Option<&SeedPoint> {
        self.points.last()
    }

    /// Iterator über alle Punktpositionen.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().map(|p| p.position)
    }

    /// Iterator über alle Segmente `i-1 → i` (i ≥ 1).
    pub fn segments(&self) -> impl Iterator<Item = SeedSegment> + '_ {
        self.points
            .windows(2)
            .enumerate()
            .map(|(i, pair)| SeedSegment {
                index: i + 1,
                start: pair[0].position,
                end: pair[1].position,
                segment_type: pair[1].segment_type,
            })
    }

    /// Basislinie (erster → letzter Punkt), ab zwei Punkten definiert.
    pub fn baseline(&self) -> Option<(Vec2, Vec2)> {
        if self.points.len() < MIN_BASELINE_POINTS {
            return None;
        }
        Some((self.points[0].position, self.points[self.points.len() - 1].position))
    }

    /// Länge der Basislinie.
    pub fn baseline_length(&self) -> Option<f32> {
        self.baseline().map(|(start, end)| start.distance(end))
    }

    /// Hängt einen Punkt an. Ein Duplikat des letzten Punkts wird verworfen.
    ///
    /// Gibt `true` zurück, wenn der Punkt übernommen wurde.
    pub fn push(&mut self, point: SeedPoint) -> bool {
        if self
            .points
            .last()
            .is_some_and(|last| last.position == point.position)
        {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Fügt einen Punkt an `index` ein (`index == len` hängt an).
    pub fn insert(&mut self, index: usize, point: SeedPoint) -> bool {
        if index > self.points.len() {
            return false;
        }
        self.points.insert(index, point);
        true
    }

    /// Entfernt den Punkt an `index`, solange danach noch die Basislinie übrig bleibt.
    pub fn remove(&mut self, index: usize) -> Option<SeedPoint> {
        if self.points.len() <= MIN_BASELINE_POINTS || index >= self.points.len() {
            return None;
        }
        Some(self.points.remove(index))
    }

    /// Ersetzt den Punkt an `index`.
    pub fn set_point(&mut self, index: usize, point: SeedPoint) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    /// Setzt das Tag des Punkts `index` (also des Segments `index-1 → index`).
    pub fn set_segment_type(&mut self, index: usize, segment_type: SegmentType) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.segment_type = segment_type;
                true
            }
            None => false,
        }
    }

    /// Nächster Punkt innerhalb `max_distance` (Standard: [`geometry::POINT_PICK_RADIUS`]).
    pub fn nearest_point_index(&self, query: Vec2, max_distance: f32) -> Option<usize> {
        geometry::nearest_point_index(self.positions(), query, max_distance)
    }

    /// Nächstes Segment `i → i+1` innerhalb `max_distance`.
    pub fn nearest_segment_index(&self, query: Vec2, max_distance: f32) -> Option<usize> {
        geometry::nearest_segment_index(self.positions(), query, max_distance)
    }

    /// Kopie mit transformierten Positionen (Tags bleiben erhalten).
    pub fn map_positions(&self, f: impl Fn(Vec2) -> Vec2) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| SeedPoint::new(f(p.position), p.segment_type))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::POINT_PICK_RADIUS;

    fn pt(x: f32, y: f32, segment_type: SegmentType) -> SeedPoint {
        SeedPoint::new(Vec2::new(x, y), segment_type)
    }

    fn sample() -> SeedCurve {
        SeedCurve::from_points(vec![
            pt(0.0, 0.0, SegmentType::Regular),
            pt(10.0, 0.0, SegmentType::Flipped),
            pt(20.0, 5.0, SegmentType::Invisible),
        ])
    }

    #[test]
    fn push_refuses_consecutive_duplicate() {
        let mut curve = SeedCurve::new();
        assert!(curve.push(pt(1.0, 1.0, SegmentType::Regular)));
        assert!(!curve.push(pt(1.0, 1.0, SegmentType::Flipped)));
        assert!(curve.push(pt(2.0, 1.0, SegmentType::Flipped)));
        assert!(curve.push(pt(1.0, 1.0, SegmentType::Flipped)));
        assert_eq!(curve.len(), 3);
    }

    #[test]
    fn baseline_needs_two_points() {
        let mut curve = SeedCurve::new();
        assert_eq!(curve.baseline(), None);
        curve.push(pt(3.0, 4.0, SegmentType::Regular));
        assert_eq!(curve.baseline_length(), None);
        curve.push(pt(0.0, 0.0, SegmentType::Regular));
        assert_eq!(curve.baseline_length(), Some(5.0));
    }

    #[test]
    fn segments_carry_tag_of_end_point() {
        let segments: Vec<SeedSegment> = sample().segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].index, 1);
        assert_eq!(segments[0].segment_type, SegmentType::Flipped);
        assert_eq!(segments[1].start, Vec2::new(10.0, 0.0));
        assert_eq!(segments[1].segment_type, SegmentType::Invisible);
    }

    #[test]
    fn remove_keeps_baseline_points() {
        let mut curve = sample();
        assert_eq!(curve.remove(1).map(|p| p.position), Some(Vec2::new(10.0, 0.0)));
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.remove(0), None);
        assert_eq!(curve.len(), 2);
    }

    #[test]
    fn insert_and_retag_check_bounds() {
        let mut curve = sample();
        assert!(!curve.insert(5, pt(0.0, 0.0, SegmentType::Regular)));
        assert!(curve.insert(3, pt(30.0, 0.0, SegmentType::NonRecursing)));
        assert!(curve.set_segment_type(1, SegmentType::RegularReverse));
        assert!(!curve.set_segment_type(9, SegmentType::Regular));
        assert_eq!(curve.points()[1].segment_type, SegmentType::RegularReverse);
        assert_eq!(curve.len(), 4);
    }

    #[test]
    fn every_point_finds_itself() {
        let curve = sample();
        for (index, point) in curve.points().iter().enumerate() {
            assert_eq!(
                curve.nearest_point_index(point.position, POINT_PICK_RADIUS),
                Some(index)
            );
        }
    }

    #[test]
    fn json_triples_roundtrip_tags() {
        let curve = SeedCurve::from_json("[[0, 0, 0], [10.5, 2, 4], [20, 0, 5]]")
            .expect("gueltiges Seed-JSON");
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.points()[1].position, Vec2::new(10.5, 2.0));
        assert_eq!(curve.points()[1].segment_type, SegmentType::NonRecursing);

        let json = curve.to_json().expect("serialisierbar");
        assert_eq!(SeedCurve::from_json(&json).expect("Roundtrip"), curve);
    }

    #[test]
    fn json_with_unknown_tag_fails() {
        assert!(SeedCurve::from_json("[[0, 0, 0], [1, 1, 7]]").is_err());
    }
}
