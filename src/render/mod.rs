//! Zeichnen auf eine vom Host bereitgestellte Fläche.
//!
//! Der Renderer kennt nur den [`Surface`]-Vertrag; Canvas, Fenster oder
//! Dateiformat liegen beim Host. [`SvgSurface`] und [`RecordingSurface`]
//! sind die mitgelieferten Implementierungen.

pub mod fractal;
pub mod seed_view;
mod surface;
mod svg;

pub use fractal::{render, MAX_RENDER_DEPTH};
pub use seed_view::{draw_grid, draw_preview, draw_seed};
pub use surface::{DrawnLine, DrawnMarker, LineStyle, RecordingSurface, Surface};
pub use svg::SvgSurface;
