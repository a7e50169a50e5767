//! Engine-wide numeric constants.
//! Lengths are in meters unless noted otherwise.

/// Inset from the lot edge that rooms may not cross (wall thickness).
pub const WALL_MARGIN: f64 = 0.5;
/// Gap between adjacent rooms and between packing rows.
pub const ROOM_GAP: f64 = 0.3;
/// Per-axis share of remaining space drawn by the size sampler:
/// `[FILL_RATIO_MIN, FILL_RATIO_MIN + FILL_RATIO_SPAN)`.
pub const FILL_RATIO_MIN: f64 = 0.3;
pub const FILL_RATIO_SPAN: f64 = 0.3;
/// Default render scale (px per meter).
pub const DEFAULT_SCALE: f64 = 40.0;
/// Blank border around the rendered lot (px).
pub const CANVAS_PADDING: f64 = 20.0;
/// Length of generated room and blueprint identifiers.
pub const ID_LENGTH: usize = 9;
