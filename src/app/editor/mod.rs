//! Seed-Editor: Zustandsautomat zum Aufbauen und Bearbeiten der Seed-Kurve.
//!
//! Modi: `Init → Defining → Done ⇄ MovePoint`, dazu `Locked` für geladene
//! Presets. Trefferprüfungen laufen auf der rohen Zeigerposition, neue oder
//! verschobene Punkte landen auf der eingerasteten.

mod lifecycle;
mod state;


pub use state::{
    Anchor, EditMode, EditorAction, EditorPreview, GridSnap, PointerInput, SeedEditor,
};
