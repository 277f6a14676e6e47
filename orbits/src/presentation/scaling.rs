//! Map SI radii and positions of catalog bodies onto screen space.

use crate::simulation::catalog::{FROM_SUN, PLUTO_RADIUS, SUN_RADIUS};
use crate::simulation::states::NVec2;

/// Position that maps to the edge of the screen for the linear mapping
pub const MAX_LOCATION: f64 = 6500.0 * FROM_SUN;
/// Same for the square-root mapping
pub const MAX_LOG_LOCATION: f64 = 6000.0 * FROM_SUN;

/// Linear map of `radius` from [Pluto, Sun] onto [min, max]
pub fn scaled_radius(radius: f64, min: f64, max: f64) -> f64 {
    (radius - PLUTO_RADIUS) / (SUN_RADIUS - PLUTO_RADIUS) * (max - min) + min
}

/// Square-root map so small bodies stay visible next to the Sun
pub fn log_scaled_radius(radius: f64, min: f64, max: f64) -> f64 {
    (radius / SUN_RADIUS).sqrt() * (max - min) + min
}

pub fn scaled_location(position: NVec2, scaled_max: f64) -> NVec2 {
    position / MAX_LOCATION * scaled_max
}

/// Compress the distance from the origin by a square root, keeping the direction
pub fn log_scaled_location(position: NVec2, scaled_max: f64) -> NVec2 {
    let r = position.norm();
    if r == 0.0 {
        return NVec2::zeros();
    }
    let scaled = (r / MAX_LOG_LOCATION).sqrt() * scaled_max;
    position * (scaled / r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_endpoints() {
        assert!((scaled_radius(PLUTO_RADIUS, 2.0, 20.0) - 2.0).abs() < 1e-9);
        assert!((scaled_radius(SUN_RADIUS, 2.0, 20.0) - 20.0).abs() < 1e-9);
        assert!((log_scaled_radius(SUN_RADIUS, 1.0, 5.0) - 5.0).abs() < 1e-12);
        assert!((log_scaled_radius(SUN_RADIUS / 4.0, 0.0, 10.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn log_location_keeps_direction() {
        let p = NVec2::new(3.0, 4.0) * FROM_SUN * 240.0; // |p| = 1200 Gm
        let s = log_scaled_location(p, 100.0);

        assert!((s.norm() - (0.2f64).sqrt() * 100.0).abs() < 1e-9);
        assert!((s.x / s.y - 0.75).abs() < 1e-12);
        assert_eq!(log_scaled_location(NVec2::zeros(), 100.0), NVec2::zeros());
    }

    #[test]
    fn linear_location() {
        let s = scaled_location(NVec2::new(MAX_LOCATION, -MAX_LOCATION / 2.0), 400.0);
        assert!((s.x - 400.0).abs() < 1e-9);
        assert!((s.y + 200.0).abs() < 1e-9);
    }
}
