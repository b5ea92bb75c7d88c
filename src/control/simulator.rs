use crate::{
    errors::SimulationError,
    trajectory_system::kinematics::{KinematicState, Trajectory, TrajectoryModel},
    utils::vector2d::Vector2D,
};

use super::launch::LaunchParameters;

#[derive(PartialEq, Debug, Clone)]
pub enum SimulatorState {
    Idle,
    Running,
    Landed,
}

/// Drives the trajectory model one step at a time until ground impact.
///
/// The simulator does no timing of its own: an external controller
/// calls `advance()` once per tick and reads the current position and
/// the growing trajectory between calls.
pub struct Simulator {
    pub model: TrajectoryModel,
    pub kinematics: KinematicState,
    pub state: SimulatorState,
    actual: Trajectory,
    theoretical: Trajectory,
}

impl Simulator {
    pub fn new(model: TrajectoryModel) -> Self {
        Simulator {
            model,
            kinematics: KinematicState::at_rest(),
            state: SimulatorState::Idle,
            actual: Trajectory::new(),
            theoretical: Trajectory::new(),
        }
    }

    /// Begins a new shot, replacing any run in progress.
    ///
    /// Parameters are validated here, at the boundary; nothing is
    /// touched if they are rejected. The drag-free reference
    /// trajectory is fully precomputed before the first step.
    pub fn start(&mut self, params: LaunchParameters) -> Result<(), SimulationError> {
        params.validate()?;
        self.theoretical = self.model.compute_theoretical(&params)?;
        self.kinematics = KinematicState::new(self.model.initial_velocity(&params));
        self.actual = Trajectory::new();
        self.actual.push(self.kinematics.position);
        self.state = SimulatorState::Running;
        Ok(())
    }

    /// Performs exactly one integration step.
    ///
    /// A step that ends below ground lands the arrow and its sample is
    /// discarded, so the last retained sample always has `y >= 0`.
    /// Once landed (or before `start`), this is a no-op.
    pub fn advance(&mut self) {
        if self.state != SimulatorState::Running {
            return;
        }

        self.model.step(&mut self.kinematics);

        if self.kinematics.position.y >= 0.0 {
            self.actual.push(self.kinematics.position);
        } else {
            self.state = SimulatorState::Landed;
        }
    }

    pub fn position(&self) -> Vector2D {
        self.kinematics.position
    }

    pub fn is_landed(&self) -> bool {
        self.state == SimulatorState::Landed
    }

    pub fn actual_trajectory(&self) -> &Trajectory {
        &self.actual
    }

    pub fn theoretical_trajectory(&self) -> &Trajectory {
        &self.theoretical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ARROW_MASS;
    use crate::trajectory_system::aerodynamics::DragModel;

    fn drag_free_simulator() -> Simulator {
        Simulator::new(TrajectoryModel::new(
            ARROW_MASS,
            DragModel::Simplified { k: 0.0 },
        ))
    }

    #[test]
    fn test_starts_idle() {
        let simulator = drag_free_simulator();
        assert_eq!(simulator.state, SimulatorState::Idle);
        assert!(simulator.actual_trajectory().is_empty());
    }

    #[test]
    fn test_advance_before_start_is_noop() {
        let mut simulator = drag_free_simulator();
        simulator.advance();
        assert_eq!(simulator.state, SimulatorState::Idle);
        assert!(simulator.actual_trajectory().is_empty());
    }

    #[test]
    fn test_start_primes_the_run() {
        let mut simulator = drag_free_simulator();
        simulator
            .start(LaunchParameters::new(45.0, 50.0))
            .unwrap();

        assert_eq!(simulator.state, SimulatorState::Running);
        assert_eq!(simulator.actual_trajectory().len(), 1);
        assert_eq!(simulator.position(), Vector2D::new(0.0, 0.0));
        assert!(!simulator.theoretical_trajectory().is_empty());
    }

    #[test]
    fn test_rejected_parameters_leave_state_untouched() {
        let mut simulator = drag_free_simulator();
        let result = simulator.start(LaunchParameters::new(120.0, 50.0));

        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter(_))
        ));
        assert_eq!(simulator.state, SimulatorState::Idle);
        assert!(simulator.actual_trajectory().is_empty());
        assert!(simulator.theoretical_trajectory().is_empty());
    }

    #[test]
    fn test_flat_shot_lands_after_one_step() {
        let mut simulator = drag_free_simulator();
        simulator
            .start(LaunchParameters::new(0.0, 50.0))
            .unwrap();

        // vy starts at zero, so the first step already dips below
        // ground; the sample is discarded and only the origin remains.
        simulator.advance();

        assert_eq!(simulator.state, SimulatorState::Landed);
        assert_eq!(simulator.actual_trajectory().len(), 1);
        assert_eq!(
            simulator.actual_trajectory().last(),
            Some(Vector2D::new(0.0, 0.0))
        );
    }

    #[test]
    fn test_retained_samples_stay_above_ground() {
        let mut simulator = drag_free_simulator();
        simulator
            .start(LaunchParameters::new(30.0, 25.0))
            .unwrap();

        while !simulator.is_landed() {
            simulator.advance();
        }

        assert!(simulator
            .actual_trajectory()
            .samples()
            .iter()
            .all(|p| p.y >= 0.0));
    }

    #[test]
    fn test_advance_after_landing_is_idempotent() {
        let mut simulator = drag_free_simulator();
        simulator
            .start(LaunchParameters::new(0.0, 50.0))
            .unwrap();
        simulator.advance();
        assert!(simulator.is_landed());

        let position = simulator.position();
        let samples = simulator.actual_trajectory().len();

        for _ in 0..5 {
            simulator.advance();
        }

        assert_eq!(simulator.state, SimulatorState::Landed);
        assert_eq!(simulator.position(), position);
        assert_eq!(simulator.actual_trajectory().len(), samples);
    }

    #[test]
    fn test_restart_overwrites_previous_run() {
        let mut simulator = drag_free_simulator();
        simulator
            .start(LaunchParameters::new(45.0, 50.0))
            .unwrap();
        for _ in 0..20 {
            simulator.advance();
        }
        assert_eq!(simulator.state, SimulatorState::Running);

        simulator
            .start(LaunchParameters::new(30.0, 25.0))
            .unwrap();

        assert_eq!(simulator.state, SimulatorState::Running);
        assert_eq!(simulator.actual_trajectory().len(), 1);
        assert_eq!(simulator.position(), Vector2D::new(0.0, 0.0));
    }
}
