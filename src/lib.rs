pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::launch::LaunchParameters;
pub use control::simulator::{Simulator, SimulatorState};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::DragModel;
pub use trajectory_system::kinematics::{KinematicState, Trajectory, TrajectoryModel};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
