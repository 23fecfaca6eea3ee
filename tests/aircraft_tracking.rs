use alpha_beta_estimation::{AlphaBetaFilter, Measurable};
use approx::assert_abs_diff_eq;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::error::Error;

/// One radar range measurement and the expected filter output after it.
#[derive(Debug, Deserialize)]
struct Cycle {
    measurement: f64,
    estimate: f64,
    velocity: f64,
    prediction: f64,
}

fn read_cycles(path: &str) -> Result<Vec<Cycle>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut cycles = Vec::new();
    for record in reader.deserialize::<Cycle>() {
        cycles.push(record?);
    }
    Ok(cycles)
}

#[test]
fn test_aircraft_range_tracking() -> Result<(), Box<dyn Error>> {
    let cycles = read_cycles(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/data/aircraft-range.csv"
    ))?;
    assert_eq!(cycles.len(), 10);

    let mut filter = AlphaBetaFilter::<f64>::new(30000.0, 40.0, 0.2, 0.1);
    assert_eq!(filter.state_prediction(), 30200.0);

    for (index, cycle) in cycles.iter().enumerate() {
        filter.measure(cycle.measurement);

        assert_eq!(filter.iteration(), index + 1);
        assert_eq!(filter.cycle_info().measurement, cycle.measurement);
        assert_abs_diff_eq!(filter.state_estimate(), cycle.estimate, epsilon = 1e-9);
        assert_abs_diff_eq!(filter.velocity(), cycle.velocity, epsilon = 1e-9);
        assert_abs_diff_eq!(filter.state_prediction(), cycle.prediction, epsilon = 1e-9);
    }

    Ok(())
}

#[test]
fn test_prediction_carries_into_next_cycle() {
    let mut filter = AlphaBetaFilter::<f64>::new(30000.0, 40.0, 0.2, 0.1);
    for measurement in [30171.0, 30353.0, 30756.0] {
        let prior_prediction = filter.state_prediction();
        filter.measure(measurement);

        let expected_estimate = prior_prediction + 0.2 * (measurement - prior_prediction);
        assert_eq!(filter.state_estimate(), expected_estimate);
    }
}

#[test]
fn test_filter_through_trait() {
    fn run<F: Measurable<f32>>(filter: &mut F, measurements: &[f32]) {
        for &measurement in measurements {
            filter.measure(measurement);
        }
    }

    let mut filter = AlphaBetaFilter::<f32>::with_time_interval(0.0, 1.0, 0.5, 0.5, 1.0);
    run(&mut filter, &[1.0, 2.0, 3.0, 4.0]);

    assert_eq!(filter.iteration(), 4);
    assert_eq!(filter.state_estimate(), 4.0);
    assert_eq!(filter.velocity(), 1.0);
}
