//! Ähnlichkeitsabbildung Basislinie → Zielsegment.

use glam::{Affine2, Mat2, Vec2};

/// Händigkeit eines Rekursionsrahmens relativ zur obersten Ebene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handedness {
    #[default]
    Normal,
    Mirrored,
}

impl Handedness {
    /// Vorzeichen (`+1` / `-1`) für die Senkrechte.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Handedness::Normal => 1.0,
            Handedness::Mirrored => -1.0,
        }
    }

    /// Invertiert die Händigkeit, wenn `mirror` gesetzt ist.
    #[inline]
    pub fn combine(self, mirror: bool) -> Self {
        match (self, mirror) {
            (h, false) => h,
            (Handedness::Normal, true) => Handedness::Mirrored,
            (Handedness::Mirrored, true) => Handedness::Normal,
        }
    }
}

/// Bildet `base_start → base_end` auf `target_start → target_end` ab.
///
/// Rotation + uniforme Skalierung + Translation; bei [`Handedness::Mirrored`]
/// zusätzlich an der Basislinie gespiegelt. `None`, wenn die Basislinie
/// Länge 0 hat.
pub fn similarity_map(
    base_start: Vec2,
    base_end: Vec2,
    target_start: Vec2,
    target_end: Vec2,
    handedness: Handedness,
) -> Option<Affine2> {
    let base = base_end - base_start;
    let target = target_end - target_start;
    let len_sq = base.length_squared();
    if len_sq == 0.0 {
        return None;
    }

    let h = handedness.sign();
    let a = (base.x * target.x + h * base.y * target.y) / len_sq;
    let b = (target.x * base.y - h * base.x * target.y) / len_sq;
    let c = (base.x * target.y - h * base.y * target.x) / len_sq;
    let d = (target.y * base.y + h * base.x * target.x) / len_sq;

    // Spalten: Bild von (1,0) = (a,c), Bild von (0,1) = (b,d)
    let linear = Mat2::from_cols(Vec2::new(a, c), Vec2::new(b, d));
    let translation = target_start - linear * base_start;
    Some(Affine2::from_mat2_translation(linear, translation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_vec_eq(actual: Vec2, expected: Vec2) {
        assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-3);
        assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-3);
    }

    #[test]
    fn endpoints_map_onto_target() {
        let base_start = Vec2::new(60.0, 280.0);
        let base_end = Vec2::new(580.0, 280.0);
        let target_start = Vec2::new(10.0, 10.0);
        let target_end = Vec2::new(40.0, 50.0);

        for handedness in [Handedness::Normal, Handedness::Mirrored] {
            let map = similarity_map(base_start, base_end, target_start, target_end, handedness)
                .expect("Basislinie nicht entartet");
            assert_vec_eq(map.transform_point2(base_start), target_start);
            assert_vec_eq(map.transform_point2(base_end), target_end);
        }
    }

    #[test]
    fn mirrored_map_flips_perpendicular_side() {
        let base_start = Vec2::new(0.0, 0.0);
        let base_end = Vec2::new(10.0, 0.0);
        let above = Vec2::new(5.0, 5.0);

        let normal =
            similarity_map(base_start, base_end, base_start, base_end, Handedness::Normal)
                .expect("gueltig");
        let mirrored =
            similarity_map(base_start, base_end, base_start, base_end, Handedness::Mirrored)
                .expect("gueltig");

        assert_vec_eq(normal.transform_point2(above), above);
        assert_vec_eq(mirrored.transform_point2(above), Vec2::new(5.0, -5.0));
    }

    #[test]
    fn map_preserves_angles_and_scales_uniformly() {
        let map = similarity_map(
            Vec2::ZERO,
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 5.0),
            Handedness::Normal,
        )
        .expect("gueltig");
        let ex = map.transform_vector2(Vec2::X);
        let ey = map.transform_vector2(Vec2::Y);
        assert_abs_diff_eq!(ex.length(), 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(ey.length(), 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(ex.dot(ey), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn zero_length_baseline_has_no_map() {
        let p = Vec2::new(3.0, 3.0);
        assert!(similarity_map(p, p, Vec2::ZERO, Vec2::X, Handedness::Normal).is_none());
    }

    #[test]
    fn combine_toggles_only_when_mirroring() {
        assert_eq!(Handedness::Normal.combine(false), Handedness::Normal);
        assert_eq!(Handedness::Normal.combine(true), Handedness::Mirrored);
        assert_eq!(Handedness::Mirrored.combine(true), Handedness::Normal);
    }
}
