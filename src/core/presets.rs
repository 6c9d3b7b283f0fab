//! Katalog vordefinierter Seed-Kurven.
//!
//! Die Daten liegen als JSON im Binary (`assets/presets.json`). Beim Laden
//! werden Koordinaten um einen halben Pixel versetzt und die Strichstärke
//! um 1 reduziert (mindestens 1).

use std::sync::Arc;

use anyhow::Context;
use glam::Vec2;
use serde::Deserialize;

use super::seed_curve::SeedCurve;

const BUILTIN_PRESETS_JSON: &str = include_str!("../../assets/presets.json");

/// Versatz, mit dem Preset-Koordinaten auf Pixelmitten gelegt werden.
pub const PRESET_PIXEL_OFFSET: f32 = 0.5;

/// Rohdaten eines Presets im JSON-Katalog.
#[derive(Debug, Clone, Deserialize)]
struct PresetEntry {
    name: String,
    full_name: String,
    thickness: f32,
    #[serde(default = "default_iterations")]
    iterations: u32,
    seed: SeedCurve,
}

fn default_iterations() -> u32 {
    1
}

/// Ein geladenes Preset. Die Seed-Kurve wird geteilt und nie mutiert.
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: String,
    pub full_name: String,
    /// Empfohlene Rekursionstiefe
    pub iterations: u32,
    /// Strichstärke für die Fraktal-Darstellung
    pub stroke_width: f32,
    pub seed: Arc<SeedCurve>,
}

impl From<PresetEntry> for Preset {
    fn from(entry: PresetEntry) -> Self {
        let offset = Vec2::splat(PRESET_PIXEL_OFFSET);
        Self {
            name: entry.name.to_lowercase(),
            full_name: entry.full_name,
            iterations: entry.iterations.max(1),
            stroke_width: (entry.thickness - 1.0).max(1.0),
            seed: Arc::new(entry.seed.map_positions(|p| p + offset)),
        }
    }
}

/// Geordnete Preset-Liste.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Lädt den eingebauten Katalog.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN_PRESETS_JSON).context("Eingebauter Preset-Katalog ist fehlerhaft")
    }

    /// Liest einen Katalog aus JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let entries: Vec<PresetEntry> =
            serde_json::from_str(json).context("Fehler beim Parsen des Preset-Katalogs")?;
        let presets: Vec<Preset> = entries.into_iter().map(Preset::from).collect();
        log::info!("{} Presets geladen", presets.len());
        Ok(Self { presets })
    }

    /// Anzahl der Presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Gibt `true` zurück, wenn der Katalog leer ist.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Presets in Katalog-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    /// Sucht ein Preset über den Kurznamen (Groß-/Kleinschreibung egal).
    pub fn find(&self, name: &str) -> Option<&Preset> {
        let wanted = name.to_lowercase();
        self.presets.iter().find(|preset| preset.name == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SegmentType;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = PresetCatalog::builtin().expect("eingebauter Katalog gueltig");
        assert!(catalog.len() >= 4);
        assert!(catalog.iter().all(|preset| preset.seed.len() >= 2));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = PresetCatalog::builtin().expect("gueltig");
        let koch = catalog.find("KOCH").expect("Koch vorhanden");
        assert_eq!(koch.full_name, "Koch Curve");
        assert!(catalog.find("gibtsnicht").is_none());
    }

    #[test]
    fn loading_applies_pixel_offset_and_thickness_nudge() {
        let catalog = PresetCatalog::from_json(
            r#"[{"name": "Line", "full_name": "Line", "thickness": 3.0,
                 "seed": [[0, 0, 0], [10, 0, 4]]}]"#,
        )
        .expect("gueltig");
        let line = catalog.find("line").expect("vorhanden");

        assert_eq!(line.seed.points()[0].position, Vec2::new(0.5, 0.5));
        assert_eq!(line.seed.points()[1].segment_type, SegmentType::NonRecursing);
        assert_eq!(line.stroke_width, 2.0);
        assert_eq!(line.iterations, 1);
    }

    #[test]
    fn thin_presets_keep_minimum_width() {
        let catalog = PresetCatalog::from_json(
            r#"[{"name": "thin", "full_name": "Thin", "thickness": 1.0, "iterations": 4,
                 "seed": [[0, 0, 0], [10, 0, 0]]}]"#,
        )
        .expect("gueltig");
        let thin = catalog.find("thin").expect("vorhanden");
        assert_eq!(thin.stroke_width, 1.0);
        assert_eq!(thin.iterations, 4);
    }
}
