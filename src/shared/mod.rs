//! Layer-übergreifende Hilfsmodule ohne Core-Abhängigkeiten.

pub mod route_geometry;

pub use route_geometry::{
    catmull_rom_point, catmull_rom_route, polyline_length, route_segments, DEFAULT_CURVE_SAMPLES,
};
