//! Core-Domänentypen: Segment-Typen, Seed-Kurve, Geometrie, Dimension, Presets.

pub mod dimension;
pub mod geometry;
pub mod presets;
/// Seed-Kurve und ihre Punkte
///
/// Die Kurve ist die einzige mutierbare Ressource des Editors; Renderer und
/// Dimensions-Schätzer lesen sie nur.
pub mod seed_curve;
pub mod segment_type;
pub mod transform;

pub use dimension::{estimate_dimension, similarity_sum};
pub use geometry::{
    nearest_point_index, nearest_segment_index, squared_distance, POINT_PICK_RADIUS,
    SEGMENT_PICK_RADIUS,
};
pub use presets::{Preset, PresetCatalog};
pub use seed_curve::{SeedCurve, SeedPoint, SeedSegment};
pub use segment_type::{InvalidSegmentTag, ReplicationRole, SegmentType, Traversal};
pub use transform::{similarity_map, Handedness};
