//! Ähnlichkeitsdimension einer Seed-Kurve per Bisektion.
//!
//! Gesucht ist `d ∈ [0, 2]` mit `Σ (len_i / baseline)^d = 1` über alle
//! rekursiv ersetzten Segmente. Nicht definierte Fälle liefern `None`.

use super::seed_curve::SeedCurve;
use super::segment_type::ReplicationRole;

/// Kürzeste Basislinie, für die eine Dimension berechnet wird.
pub const MIN_BASELINE_LENGTH: f32 = 1.0;
/// Abbruchbreite des Bisektionsintervalls.
pub const BISECTION_TOLERANCE: f32 = 0.0005;
/// Untere Grenze des Suchintervalls.
pub const DIMENSION_MIN: f32 = 0.0;
/// Obere Grenze des Suchintervalls.
pub const DIMENSION_MAX: f32 = 2.0;

/// Längenanteile einer Seed-Kurve relativ zur Basislinie.
#[derive(Debug, Clone, PartialEq)]
struct LengthFractions {
    /// Anteile der rekursiv ersetzten Segmente
    recursing: Vec<f32>,
    /// Summe der sichtbaren, nicht rekursiven Anteile
    non_recursing: f32,
}

fn length_fractions(curve: &SeedCurve) -> Option<LengthFractions> {
    let baseline = curve.baseline_length()?;
    if baseline < MIN_BASELINE_LENGTH {
        return None;
    }

    let mut fractions = LengthFractions {
        recursing: Vec::new(),
        non_recursing: 0.0,
    };
    for segment in curve.segments() {
        let fraction = segment.length() / baseline;
        match segment.segment_type.role() {
            ReplicationRole::Recurse { .. } => fractions.recursing.push(fraction),
            ReplicationRole::Straight => fractions.non_recursing += fraction,
            ReplicationRole::Skip => {}
        }
    }
    Some(fractions)
}

/// `Σ (len_i / baseline)^d` über die rekursiven Segmente.
///
/// `None` bei weniger als zwei Punkten oder einer Basislinie unter
/// [`MIN_BASELINE_LENGTH`].
pub fn similarity_sum(curve: &SeedCurve, dimension: f32) -> Option<f32> {
    let fractions = length_fractions(curve)?;
    Some(scaled_sum(&fractions.recursing, dimension))
}

fn scaled_sum(fractions: &[f32], dimension: f32) -> f32 {
    fractions.iter().map(|f| f.powf(dimension)).sum()
}

/// Schätzt die Ähnlichkeitsdimension der Seed-Kurve.
///
/// - Nicht rekursive, sichtbare Segmente vorhanden: `1.0`, sofern die
///   rekursiven Anteile zusammen unter 1 bleiben, sonst `None`.
/// - Nur unsichtbare Segmente: `0.0`.
/// - Sonst Bisektion auf `[0, 2]`; verletzte Randbedingungen liefern `None`.
pub fn estimate_dimension(curve: &SeedCurve) -> Option<f32> {
    let fractions = length_fractions(curve)?;
    let recursing_total: f32 = fractions.recursing.iter().sum();

    if fractions.non_recursing > 0.0 {
        return (recursing_total < 1.0).then_some(1.0);
    }
    if recursing_total == 0.0 {
        return Some(0.0);
    }

    let mut lo = DIMENSION_MIN;
    let mut hi = DIMENSION_MAX;
    if scaled_sum(&fractions.recursing, lo) < 1.0 || scaled_sum(&fractions.recursing, hi) > 1.0 {
        log::debug!(
            "Dimension undefiniert: Seed ist kein kontrahierender Generator ({} Segmente)",
            fractions.recursing.len()
        );
        return None;
    }

    while hi - lo > BISECTION_TOLERANCE {
        let mid = (lo + hi) / 2.0;
        if scaled_sum(&fractions.recursing, mid) >= 1.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Some((lo + hi) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn curve(triples: &[(f32, f32, u8)]) -> SeedCurve {
        SeedCurve::from_triples(triples).expect("gueltige Tags")
    }

    #[test]
    fn koch_generator_has_log4_log3() {
        // Vier Segmente mit je 1/3 der Basislinie
        let koch = curve(&[
            (0.0, 0.0, 0),
            (100.0, 0.0, 0),
            (150.0, -86.60254, 0),
            (200.0, 0.0, 0),
            (300.0, 0.0, 0),
        ]);
        let expected = 4.0_f32.ln() / 3.0_f32.ln();
        let dim = estimate_dimension(&koch).expect("Koch ist wohldefiniert");
        assert_abs_diff_eq!(dim, expected, epsilon = BISECTION_TOLERANCE);
    }

    #[test]
    fn straight_halves_have_dimension_one() {
        let halves = curve(&[(0.0, 0.0, 0), (100.0, 0.0, 1), (200.0, 0.0, 0)]);
        let dim = estimate_dimension(&halves).expect("definiert");
        assert_abs_diff_eq!(dim, 1.0, epsilon = BISECTION_TOLERANCE);
    }

    #[test]
    fn non_recursing_segments_pin_dimension_to_one() {
        let seed = curve(&[(0.0, 0.0, 0), (50.0, 0.0, 4), (100.0, 0.0, 0)]);
        assert_eq!(estimate_dimension(&seed), Some(1.0));
    }

    #[test]
    fn non_recursing_with_overfull_recursion_is_undefined() {
        let seed = curve(&[(0.0, 0.0, 0), (0.0, 100.0, 0), (100.0, 100.0, 4), (100.0, 0.0, 0)]);
        assert_eq!(estimate_dimension(&seed), None);
    }

    #[test]
    fn only_invisible_segments_give_zero() {
        let seed = curve(&[(0.0, 0.0, 0), (40.0, 30.0, 5), (100.0, 0.0, 5)]);
        assert_eq!(estimate_dimension(&seed), Some(0.0));
    }

    #[test]
    fn degenerate_inputs_are_undefined() {
        assert_eq!(estimate_dimension(&SeedCurve::new()), None);
        assert_eq!(estimate_dimension(&curve(&[(1.0, 1.0, 0)])), None);
        // Geschlossene Kurve: Basislinie 0
        let closed = curve(&[(0.0, 0.0, 0), (50.0, 50.0, 0), (0.0, 0.0, 0)]);
        assert_eq!(estimate_dimension(&closed), None);
        assert_eq!(similarity_sum(&closed, 1.0), None);
    }

    #[test]
    fn failed_endpoint_check_is_undefined() {
        // Zwei lange Umwege: Summe bei d=2 liegt weit über 1
        let long_detour = curve(&[(0.0, 0.0, 0), (0.0, 300.0, 0), (10.0, 0.0, 0)]);
        assert_eq!(estimate_dimension(&long_detour), None);
    }

    #[test]
    fn similarity_sum_at_zero_counts_recursing_segments() {
        let seed = curve(&[(0.0, 0.0, 0), (10.0, 0.0, 1), (20.0, 0.0, 4), (30.0, 0.0, 3)]);
        assert_abs_diff_eq!(similarity_sum(&seed, 0.0).expect("definiert"), 2.0);
        assert_abs_diff_eq!(
            similarity_sum(&seed, 1.0).expect("definiert"),
            2.0 / 3.0,
            epsilon = 1e-6
        );
    }
}
