use crate::{
    constants::{GRAVITY, MAX_TRAJECTORY_SAMPLES, TIME_STEP},
    control::launch::LaunchParameters,
    errors::SimulationError,
    utils::vector2d::Vector2D,
};

use super::aerodynamics::DragModel;

#[derive(Debug, Clone, PartialEq)]
pub struct KinematicState {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub time: f64,
}

impl KinematicState {
    pub fn new(velocity: Vector2D) -> Self {
        KinematicState {
            position: Vector2D::new(0.0, 0.0),
            velocity,
            time: 0.0,
        }
    }

    pub fn at_rest() -> Self {
        KinematicState::new(Vector2D::new(0.0, 0.0))
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

/// Append-only sequence of position samples, ordered in time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    samples: Vec<Vector2D>,
}

impl Trajectory {
    pub fn new() -> Self {
        Trajectory {
            samples: Vec::new(),
        }
    }

    pub fn push(&mut self, sample: Vector2D) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<Vector2D> {
        self.samples.last().copied()
    }

    pub fn samples(&self) -> &[Vector2D] {
        &self.samples
    }

    /// Horizontal distance covered, i.e. the x of the last sample.
    pub fn range(&self) -> f64 {
        self.last().map_or(0.0, |p| p.x)
    }

    /// Highest altitude reached over the retained samples.
    pub fn apex(&self) -> f64 {
        self.samples
            .iter()
            .map(|p| p.y)
            .fold(0.0, f64::max)
    }
}

/// Physical constants and pure trajectory math for a single arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryModel {
    pub gravity: f64,
    pub time_step: f64,
    pub mass: f64,
    pub drag: DragModel,
}

impl TrajectoryModel {
    pub fn new(mass: f64, drag: DragModel) -> Self {
        TrajectoryModel {
            gravity: GRAVITY,
            time_step: TIME_STEP,
            mass,
            drag,
        }
    }

    /// Resolves the launch parameters into the initial velocity vector.
    /// Tilt and bow losses derate the speed before it is split into
    /// components; the launch angle only sets the direction.
    pub fn initial_velocity(&self, params: &LaunchParameters) -> Vector2D {
        let theta = params.launch_angle.to_radians();
        let speed = params.effective_speed();
        Vector2D::new(speed * theta.cos(), speed * theta.sin())
    }

    /// Closed-form drag-free trajectory, sampled at the fixed time step.
    ///
    /// Sampling starts at `t = 0` (always yielding `(0, 0)`) and stops
    /// at the first sample below ground, which is excluded. Uses the
    /// raw initial speed: the reference overlay shows the ideal shot,
    /// before tilt and bow losses.
    pub fn compute_theoretical(
        &self,
        params: &LaunchParameters,
    ) -> Result<Trajectory, SimulationError> {
        let theta = params.launch_angle.to_radians();
        let v0 = params.initial_speed;
        let mut trajectory = Trajectory::new();

        // y(t) is a downward parabola, so this terminates for g > 0;
        // the sample bound guards the degenerate configurations.
        for i in 0..MAX_TRAJECTORY_SAMPLES {
            let t = i as f64 * self.time_step;
            let x = v0 * theta.cos() * t;
            let y = v0 * theta.sin() * t - 0.5 * self.gravity * t.powi(2);
            if y < 0.0 {
                return Ok(trajectory);
            }
            trajectory.push(Vector2D::new(x, y));
        }

        Err(SimulationError::NonTerminatingTrajectory(format!(
            "no ground impact within {} samples",
            MAX_TRAJECTORY_SAMPLES
        )))
    }

    /// Advances the state by one time step with semi-implicit Euler.
    ///
    /// The velocity is updated first and the position then moves with
    /// the updated velocity. The ordering is part of the numerical
    /// contract: moving the position with the pre-update velocity
    /// changes the trajectory shape at this step size.
    pub fn step(&self, state: &mut KinematicState) {
        let drag = self.drag.drag_acceleration(state.velocity, self.mass);
        let acceleration = drag + Vector2D::new(0.0, -self.gravity);

        state.velocity = state.velocity + acceleration * self.time_step;
        state.position = state.position + state.velocity * self.time_step;
        state.time += self.time_step;
    }
}
