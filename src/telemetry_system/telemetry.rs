use crate::control::simulator::{Simulator, SimulatorState};
use crate::utils::vector2d::Vector2D;

/// Collects per-tick flight data for display once the run ends.
///
/// This is the crate's stand-in for a renderer: it consumes the
/// current position after every `advance()` call and never feeds
/// anything back into the physics.
pub struct Telemetry {
    pub log: Vec<String>,
    max_speed: f64,
    apex: f64,
    range: f64,
    impact_velocity: Option<Vector2D>,
    state_times: Vec<(SimulatorState, f64)>,
    simulation_time: f64,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_speed: 0.0,
            apex: 0.0,
            range: 0.0,
            impact_velocity: None,
            state_times: Vec::new(),
            simulation_time: 0.0,
        }
    }

    fn format_vector2d(vec: &Vector2D, precision: usize) -> String {
        format!(
            "x = {:.precision$} m, y = {:.precision$} m",
            vec.x,
            vec.y,
            precision = precision
        )
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    pub fn collect_data(&mut self, simulator: &Simulator, delta_time: f64) {
        self.simulation_time += delta_time;

        if simulator.state == SimulatorState::Running {
            let position = simulator.position();
            let speed = simulator.kinematics.speed();

            if speed > self.max_speed {
                self.max_speed = speed;
            }
            if position.y > self.apex {
                self.apex = position.y;
            }
            self.range = position.x;

            self.log.push(format!(
                "t={} | pos: {} | speed: {:.2} m/s",
                Self::format_time(self.simulation_time),
                Self::format_vector2d(&position, 2),
                speed
            ));
        }

        // Track state transitions
        if let Some((last_state, _)) = self.state_times.last() {
            if *last_state != simulator.state {
                self.state_times
                    .push((simulator.state.clone(), self.simulation_time));
                if simulator.state == SimulatorState::Landed {
                    self.impact_velocity = Some(simulator.kinematics.velocity);
                }
            }
        } else {
            self.state_times
                .push((simulator.state.clone(), self.simulation_time));
        }
    }

    pub fn display_data(&self) {
        println!("--- Flight Log ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Flight Log ---");

        println!("\n--- Flight Summary ---");
        println!("Max Speed: {:.2} m/s", self.max_speed);
        println!("Apex: {:.2} m", self.apex);
        println!("Range: {:.2} m", self.range);
        println!(
            "Flight Time: {}",
            Self::format_time(self.simulation_time)
        );
        if let Some(impact) = self.impact_velocity {
            println!(
                "Impact: {:.2} m/s at {:.1}°",
                impact.magnitude(),
                impact.angle().to_degrees()
            );
        }

        println!("\n--- State Transitions ---");
        for (state, time) in &self.state_times {
            println!("State {:?} reached at: {}", state, Self::format_time(*time));
        }
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Telemetry::new()
    }
}
