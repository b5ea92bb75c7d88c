use crate::utils::vector2d::Vector2D;

/// Drag strategy applied to the arrow on every integration step.
///
/// Two formulations are supported and deliberately kept separate: a
/// simplified model that folds drag coefficient, air density and
/// cross-section into a single factor `k`, and the explicit drag
/// equation with the full aerodynamic terms. They are not numerically
/// equivalent for the same nominal coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragModel {
    /// `a = -(k/m) * |v| * v_component`. `k = 0` disables drag.
    Simplified { k: f64 },
    /// `F = 0.5 * Cd * rho * A * |v|²`, applied opposite the velocity
    /// direction and divided by mass.
    Aerodynamic {
        drag_coefficient: f64,
        air_density: f64,
        cross_section: f64,
    },
}

impl DragModel {
    /// Drag contribution to the acceleration for the current velocity.
    /// At exactly zero speed there is no direction to oppose, so the
    /// contribution is zero; gravity alone acts on a motionless arrow.
    pub fn drag_acceleration(&self, velocity: Vector2D, mass: f64) -> Vector2D {
        let speed = velocity.magnitude();
        if speed == 0.0 {
            return Vector2D::new(0.0, 0.0);
        }

        match *self {
            DragModel::Simplified { k } => velocity * (-(k / mass) * speed),
            DragModel::Aerodynamic {
                drag_coefficient,
                air_density,
                cross_section,
            } => {
                let drag_magnitude =
                    0.5 * drag_coefficient * air_density * cross_section * speed.powi(2);
                -velocity.normalize() * (drag_magnitude / mass)
            }
        }
    }
}
