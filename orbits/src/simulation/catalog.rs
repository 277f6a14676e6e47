//! Fixed body catalogs for the direct simulator, in SI units.

use crate::simulation::states::{Body, NVec2};

/// Catalog masses are given in units of 1e24 kg
pub const MASS_UNIT: f64 = 1e24;
pub const KM_TO_M: f64 = 1000.0;
/// 1e6 km, the distance unit of the catalog positions
pub const FROM_SUN: f64 = 1e6 * KM_TO_M;

pub const SUN_RADIUS: f64 = 695_700.0 * KM_TO_M;
pub const PLUTO_RADIUS: f64 = (2376.0 / 2.0) * KM_TO_M;

/// A catalog body together with the name renderers look its color up by
#[derive(Debug, Clone, PartialEq)]
pub struct NamedBody {
    pub name: String,
    pub body: Body,
}

impl NamedBody {
    fn new(name: &str, mass: f64, radius: f64, x: [f64; 2], v: [f64; 2]) -> Self {
        Self {
            name: name.to_string(),
            body: Body::new(NVec2::new(x[0], x[1]), NVec2::new(v[0], v[1]), mass, radius),
        }
    }
}

/// The Sun and the nine classical planets, all starting on the +x axis and
/// moving along +y
pub fn sol() -> Vec<NamedBody> {
    vec![
        NamedBody::new("SOL", 1_988_400.0 * MASS_UNIT, SUN_RADIUS, [0.0, 0.0], [0.0, 0.0]),
        NamedBody::new("MERCURY", 0.330 * MASS_UNIT, 4879.0 * KM_TO_M / 2.0, [57.9 * FROM_SUN, 0.0], [0.0, 47.4 * KM_TO_M]),
        NamedBody::new("VENUS", 4.87 * MASS_UNIT, 12104.0 * KM_TO_M / 2.0, [108.2 * FROM_SUN, 0.0], [0.0, 35.0 * KM_TO_M]),
        NamedBody::new("EARTH", 5.97 * MASS_UNIT, 12756.0 * KM_TO_M / 2.0, [149.6 * FROM_SUN, 0.0], [0.0, 29.8 * KM_TO_M]),
        NamedBody::new("MARS", 0.642 * MASS_UNIT, 6792.0 * KM_TO_M / 2.0, [228.0 * FROM_SUN, 0.0], [0.0, 24.1 * KM_TO_M]),
        NamedBody::new("JUPITER", 1898.0 * MASS_UNIT, 142_984.0 * KM_TO_M / 2.0, [778.5 * FROM_SUN, 0.0], [0.0, 13.1 * KM_TO_M]),
        NamedBody::new("SATURN", 568.0 * MASS_UNIT, 120_536.0 * KM_TO_M / 2.0, [1432.0 * FROM_SUN, 0.0], [0.0, 9.7 * KM_TO_M]),
        NamedBody::new("URANUS", 86.8 * MASS_UNIT, 51118.0 * KM_TO_M / 2.0, [2867.0 * FROM_SUN, 0.0], [0.0, 6.8 * KM_TO_M]),
        NamedBody::new("NEPTUNE", 102.0 * MASS_UNIT, 49528.0 * KM_TO_M / 2.0, [4515.0 * FROM_SUN, 0.0], [0.0, 5.4 * KM_TO_M]),
        NamedBody::new("PLUTO", 0.0130 * MASS_UNIT, PLUTO_RADIUS, [5906.4 * FROM_SUN, 0.0], [0.0, 4.7 * KM_TO_M]),
    ]
}

/// Three Sun-like stars starting at rest
pub fn sun_test() -> Vec<NamedBody> {
    vec![
        NamedBody::new("SOL", 1_988_400.0 * MASS_UNIT, SUN_RADIUS, [549.6 * FROM_SUN, -300.0 * FROM_SUN], [0.0, 0.0]),
        NamedBody::new("SOL", 988_400.0 * MASS_UNIT, SUN_RADIUS, [-349.6 * FROM_SUN, 500.0 * FROM_SUN], [0.0, 0.0]),
        NamedBody::new("SOL", 1_088_400.0 * MASS_UNIT, SUN_RADIUS, [550.6 * FROM_SUN, 430.0 * FROM_SUN], [0.0, 0.0]),
    ]
}
