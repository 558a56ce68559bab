use approx::assert_relative_eq;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use freshet_series::{Observation, StepSize, build_grid};

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 12, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn grid_is_uniform_for_every_step_size() {
    for minutes in [5, 15, 60] {
        let step = StepSize::from_minutes(minutes).unwrap();
        let obs = [
            Observation::new(start(), 1.0),
            Observation::new(start() + TimeDelta::hours(6), 2.0),
        ];
        let grid = build_grid(&obs, step).unwrap();

        assert_eq!(grid.len(), 6 * step.steps_per_hour() as usize + 1);
        assert_eq!(grid.step_hours()[0], 0.0);
        for &dt in &grid.step_hours()[1..] {
            assert_relative_eq!(dt, step.hours(), epsilon = 1e-12);
        }
        for w in grid.timestamps().windows(2) {
            assert!(w[1] > w[0]);
        }
    }
}

#[test]
fn irregular_record_maps_onto_grid() {
    // Hourly logger with a two-hour outage and one late reading.
    let obs = [
        Observation::new(start(), 10.0),
        Observation::new(start() + TimeDelta::hours(1), 12.0),
        Observation::new(start() + TimeDelta::minutes(130), 50.0),
        Observation::new(start() + TimeDelta::hours(4), 18.0),
    ];
    let grid = build_grid(&obs, StepSize::SixtyMinutes).unwrap();
    assert_eq!(
        grid.raw(),
        &[Some(10.0), Some(12.0), None, None, Some(18.0)]
    );
}

#[test]
fn bounded_interpolation_end_to_end() {
    let obs = [
        Observation::new(start(), 10.0),
        Observation::new(start() + TimeDelta::hours(3), 16.0),
        Observation::new(start() + TimeDelta::hours(10), 30.0),
    ];
    let grid = build_grid(&obs, StepSize::SixtyMinutes)
        .unwrap()
        .interpolate(Some(3.0))
        .unwrap();
    let interp = grid.interpolated();

    // Two missing hours: filled.
    assert_relative_eq!(interp[1].unwrap(), 12.0);
    assert_relative_eq!(interp[2].unwrap(), 14.0);
    // Six missing hours exceed the three-hour bound: left open.
    assert!(interp[4..10].iter().all(Option::is_none));
    // Raw flow is untouched.
    assert!(grid.raw()[1].is_none());
}

#[test]
fn unbounded_interpolation_fills_long_gaps() {
    let obs = [
        Observation::new(start(), 0.0),
        Observation::new(start() + TimeDelta::hours(100), 100.0),
    ];
    let grid = build_grid(&obs, StepSize::SixtyMinutes)
        .unwrap()
        .interpolate(None)
        .unwrap();
    assert!(grid.interpolated().iter().all(Option::is_some));
    assert_relative_eq!(grid.interpolated()[37].unwrap(), 37.0, epsilon = 1e-9);
}
