//! 16-point compass rose math for wind bearings
//!
//! All functions here are total: unrecognized labels pass through
//! unchanged rather than failing, so a bad upstream value degrades to
//! "display what we got" instead of breaking the pipeline.

/// The 16-point rose, starting at north and proceeding clockwise in
/// 22.5 degree steps.
pub const ROSE: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Convert a bearing in degrees to its cardinal label.
///
/// The circle is divided into 16 equal sectors centered on each label, so
/// sector boundaries sit at 11.25 degree offsets. Input is normalized into
/// [0, 360) first, which keeps the wrap-around correct (355 -> "N").
#[must_use]
pub fn degrees_to_cardinal(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let sector = ((normalized + 11.25) / 22.5).floor() as usize % 16;
    ROSE[sector]
}

/// Return the label 180 degrees opposite the given one.
///
/// Unknown labels are returned unchanged.
#[must_use]
pub fn opposite_direction(label: &str) -> &str {
    match ROSE.iter().position(|d| *d == label) {
        Some(index) => ROSE[(index + 8) % 16],
        None => label,
    }
}

/// Look up the bearing at the center of a label's sector.
///
/// Returns `None` for unknown labels; callers default to 0.
#[must_use]
pub fn cardinal_to_degrees(label: &str) -> Option<f64> {
    ROSE.iter()
        .position(|d| *d == label)
        .map(|index| index as f64 * 22.5)
}
