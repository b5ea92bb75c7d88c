use crate::errors::SimulationError;

/// User-controlled launch inputs for one shot.
///
/// Angles are in degrees, speed in m/s. The efficiency factors model
/// the energy lost between the bow and the arrow; both default to 1.0
/// (an ideal launch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    pub launch_angle: f64,
    pub initial_speed: f64,
    pub launcher_tilt: f64,
    pub bow_efficiency: f64,
    pub string_efficiency: f64,
}

impl LaunchParameters {
    pub fn new(launch_angle: f64, initial_speed: f64) -> Self {
        LaunchParameters {
            launch_angle,
            initial_speed,
            launcher_tilt: 0.0,
            bow_efficiency: 1.0,
            string_efficiency: 1.0,
        }
    }

    /// Tilts the launcher off its axis; the effective speed is derated
    /// by the cosine of the tilt.
    pub fn with_tilt(mut self, launcher_tilt: f64) -> Self {
        self.launcher_tilt = launcher_tilt;
        self
    }

    pub fn with_launch_losses(mut self, bow_efficiency: f64, string_efficiency: f64) -> Self {
        self.bow_efficiency = bow_efficiency;
        self.string_efficiency = string_efficiency;
        self
    }

    /// Speed actually imparted to the arrow, after tilt and bow losses.
    pub fn effective_speed(&self) -> f64 {
        self.initial_speed
            * self.bow_efficiency
            * self.string_efficiency
            * self.launcher_tilt.to_radians().cos()
    }

    /// Checks every parameter against its intended domain.
    ///
    /// Out-of-range values are rejected, never clamped: clamping hides
    /// caller bugs and makes otherwise identical runs diverge.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.launch_angle.is_finite() || !(0.0..=90.0).contains(&self.launch_angle) {
            return Err(SimulationError::InvalidParameter(format!(
                "launch angle must be within [0, 90] degrees, got {}",
                self.launch_angle
            )));
        }
        if !self.initial_speed.is_finite() || self.initial_speed <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "initial speed must be positive, got {}",
                self.initial_speed
            )));
        }
        if !self.launcher_tilt.is_finite() || !(-45.0..=45.0).contains(&self.launcher_tilt) {
            return Err(SimulationError::InvalidParameter(format!(
                "launcher tilt must be within [-45, 45] degrees, got {}",
                self.launcher_tilt
            )));
        }
        if !self.bow_efficiency.is_finite()
            || self.bow_efficiency <= 0.0
            || self.bow_efficiency > 1.0
        {
            return Err(SimulationError::InvalidParameter(format!(
                "bow efficiency must be within (0, 1], got {}",
                self.bow_efficiency
            )));
        }
        if !self.string_efficiency.is_finite()
            || self.string_efficiency <= 0.0
            || self.string_efficiency > 1.0
        {
            return Err(SimulationError::InvalidParameter(format!(
                "string efficiency must be within (0, 1], got {}",
                self.string_efficiency
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_lossless() {
        let params = LaunchParameters::new(45.0, 50.0);
        assert_relative_eq!(params.effective_speed(), 50.0, epsilon = 1e-12);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_effective_speed_combines_losses_and_tilt() {
        let params = LaunchParameters::new(30.0, 40.0)
            .with_tilt(30.0)
            .with_launch_losses(0.85, 0.95);

        let expected = 40.0 * 0.85 * 0.95 * 30.0_f64.to_radians().cos();
        assert_relative_eq!(params.effective_speed(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_validate_rejects_out_of_domain_values() {
        let bad = [
            LaunchParameters::new(-1.0, 50.0),
            LaunchParameters::new(90.5, 50.0),
            LaunchParameters::new(45.0, 0.0),
            LaunchParameters::new(45.0, -10.0),
            LaunchParameters::new(45.0, f64::NAN),
            LaunchParameters::new(45.0, 50.0).with_tilt(46.0),
            LaunchParameters::new(45.0, 50.0).with_tilt(-50.0),
            LaunchParameters::new(45.0, 50.0).with_launch_losses(0.0, 0.95),
            LaunchParameters::new(45.0, 50.0).with_launch_losses(0.85, 1.2),
        ];

        for params in bad {
            assert!(
                matches!(
                    params.validate(),
                    Err(SimulationError::InvalidParameter(_))
                ),
                "expected rejection for {:?}",
                params
            );
        }
    }

    #[test]
    fn test_validate_accepts_domain_boundaries() {
        assert!(LaunchParameters::new(0.0, 50.0).validate().is_ok());
        assert!(LaunchParameters::new(90.0, 50.0).validate().is_ok());
        assert!(LaunchParameters::new(45.0, 50.0)
            .with_tilt(45.0)
            .validate()
            .is_ok());
        assert!(LaunchParameters::new(45.0, 50.0)
            .with_tilt(-45.0)
            .validate()
            .is_ok());
    }
}
