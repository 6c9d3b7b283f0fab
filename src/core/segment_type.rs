//! Segment-Typen einer Seed-Kurve und ihre Rekursionsrolle.

use serde::{Deserialize, Serialize};

/// Verhalten eines Seed-Segments beim Rendern.
///
/// Das Tag sitzt immer am *Endpunkt* des Segments (Punkt `i` beschreibt das
/// Segment `i-1 → i`). Im Datenformat wird es als Zahl `0..=5` abgelegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SegmentType {
    /// Rekursion vorwärts, Händigkeit bleibt
    #[default]
    Regular,
    /// Rekursion vorwärts, gespiegelt
    Flipped,
    /// Rekursion rückwärts (Ende → Start), gespiegelt
    FlippedReverse,
    /// Rekursion rückwärts (Ende → Start), Händigkeit bleibt
    RegularReverse,
    /// Wird auf jeder Ebene als gerade Linie gezeichnet
    NonRecursing,
    /// Weder gezeichnet noch rekursiv ersetzt (reine Stiftbewegung)
    Invisible,
}

/// Traversierungsrichtung beim rekursiven Ersetzen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Start → Ende
    Forward,
    /// Ende → Start
    Reverse,
}

/// Wie der Renderer ein Segment behandelt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplicationRole {
    /// Segment wird durch eine transformierte Kopie der Seed-Kurve ersetzt
    Recurse {
        traversal: Traversal,
        /// `true` = Händigkeit wird für die Unterebene invertiert
        mirror: bool,
    },
    /// Immer als gerade Linie zeichnen
    Straight,
    /// Nichts zeichnen, nur den Stift versetzen
    Skip,
}

impl SegmentType {
    /// Alle Varianten in Tag-Reihenfolge.
    pub const ALL: [SegmentType; 6] = [
        SegmentType::Regular,
        SegmentType::Flipped,
        SegmentType::FlippedReverse,
        SegmentType::RegularReverse,
        SegmentType::NonRecursing,
        SegmentType::Invisible,
    ];

    /// Numerisches Tag im Seed-Format.
    pub fn tag(self) -> u8 {
        match self {
            SegmentType::Regular => 0,
            SegmentType::Flipped => 1,
            SegmentType::FlippedReverse => 2,
            SegmentType::RegularReverse => 3,
            SegmentType::NonRecursing => 4,
            SegmentType::Invisible => 5,
        }
    }

    /// Kurzname für Status- und Log-Ausgaben.
    pub fn label(self) -> &'static str {
        match self {
            SegmentType::Regular => "Reg",
            SegmentType::Flipped => "Flip",
            SegmentType::FlippedReverse => "Flip-Rev",
            SegmentType::RegularReverse => "Reg-Rev",
            SegmentType::NonRecursing => "No Recurse",
            SegmentType::Invisible => "No Line",
        }
    }

    /// Rekursionsrolle für Renderer und Dimensions-Schätzer.
    pub fn role(self) -> ReplicationRole {
        match self {
            SegmentType::Regular => ReplicationRole::Recurse {
                traversal: Traversal::Forward,
                mirror: false,
            },
            SegmentType::Flipped => ReplicationRole::Recurse {
                traversal: Traversal::Forward,
                mirror: true,
            },
            SegmentType::FlippedReverse => ReplicationRole::Recurse {
                traversal: Traversal::Reverse,
                mirror: true,
            },
            SegmentType::RegularReverse => ReplicationRole::Recurse {
                traversal: Traversal::Reverse,
                mirror: false,
            },
            SegmentType::NonRecursing => ReplicationRole::Straight,
            SegmentType::Invisible => ReplicationRole::Skip,
        }
    }
}

/// Fehler beim Einlesen eines Segment-Tags außerhalb von `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("ungueltiges Segment-Tag {0} (erlaubt: 0..=5)")]
pub struct InvalidSegmentTag(pub u8);

impl TryFrom<u8> for SegmentType {
    type Error = InvalidSegmentTag;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        SegmentType::ALL
            .get(tag as usize)
            .copied()
            .ok_or(InvalidSegmentTag(tag))
    }
}

impl From<SegmentType> for u8 {
    fn from(segment_type: SegmentType) -> Self {
        segment_type.tag()
    }
}
