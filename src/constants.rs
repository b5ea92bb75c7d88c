// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Arrow Constants
pub const ARROW_MASS: f64 = 0.1; // kg
pub const ARROW_DRAG_COEFFICIENT: f64 = 0.47; // dimensionless, close to a sphere
pub const ARROW_CROSS_SECTIONAL_AREA: f64 = 0.005; // m²
pub const DRAG_FACTOR: f64 = 0.02; // combined drag scale for the simplified model

// Launch Constants
pub const BOW_EFFICIENCY: f64 = 0.85; // fraction of draw energy reaching the arrow
pub const STRING_EFFICIENCY: f64 = 0.95; // loss in the string/arrow coupling

// Simulation Parameters
pub const TIME_STEP: f64 = 0.02; // s
pub const MAX_TRAJECTORY_SAMPLES: usize = 100_000; // guard against non-terminating flights
