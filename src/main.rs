use arrow_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = TrajectoryModel::new(ARROW_MASS, DragModel::Simplified { k: DRAG_FACTOR });
    let mut simulator = Simulator::new(model);

    let params = LaunchParameters::new(45.0, 50.0)
        .with_launch_losses(BOW_EFFICIENCY, STRING_EFFICIENCY);
    simulator.start(params)?;

    let mut telemetry = Telemetry::new();
    telemetry.collect_data(&simulator, 0.0);

    let mut steps = 0;
    while steps < MAX_TRAJECTORY_SAMPLES {
        simulator.advance();
        telemetry.collect_data(&simulator, TIME_STEP);
        steps += 1;

        if simulator.is_landed() {
            println!("Arrow has landed. Ending simulation.");
            break;
        }
    }

    telemetry.display_data();

    println!(
        "\nTheoretical range: {:.2} m | Actual range: {:.2} m",
        simulator.theoretical_trajectory().range(),
        simulator.actual_trajectory().range()
    );

    Ok(())
}
