//! Property tests over the whole parameter space accepted at intake.

use kinelab::config::{FreeFallParameters, InclineParameters, PendulumParameters, Locale};
use kinelab::math::END_TOLERANCE;
use kinelab::model::{free_fall, incline, pendulum, ExperimentKind, InclineOutcome};
use kinelab::report::Table;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn free_fall_lands_and_never_rises(height in 1.0f64..=100.0, gravity in 9.0f64..=10.0) {
        let params = FreeFallParameters::new(height, gravity).unwrap();
        let trajectory = free_fall::trajectory(&params);

        prop_assert_eq!(trajectory.len(), 100);
        prop_assert!(trajectory.last().unwrap().position.abs() < END_TOLERANCE);
        let heights: Vec<f64> = trajectory.positions().collect();
        prop_assert!(heights.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn pendulum_angle_is_bounded(length in 0.1f64..=2.0, angle in 1.0f64..=30.0) {
        let params = PendulumParameters::new(length, angle).unwrap();
        let trajectory = pendulum::trajectory(&params);
        let bound = params.initial_angle() * (1.0 + 1e-12);

        prop_assert_eq!(trajectory.len(), 200);
        prop_assert!(trajectory.positions().all(|a| a.abs() <= bound));
    }

    #[test]
    fn fitted_period_is_within_one_sample(length in 0.1f64..=2.0, angle in 1.0f64..=10.0) {
        let params = PendulumParameters::new(length, angle).unwrap();
        let trajectory = pendulum::trajectory_over(&params, 4.5, 450);
        let estimate = pendulum::estimate_period(&params, &trajectory);

        if estimate.fitted_from_peaks {
            prop_assert!((estimate.fitted - estimate.theoretical).abs() <= trajectory.sample_interval());
        } else {
            prop_assert_eq!(estimate.fitted, estimate.theoretical);
        }
    }

    #[test]
    fn sliding_body_covers_the_slope(
        angle in 1.0f64..=80.0,
        friction in 0.0f64..=1.0,
        velocity in 0.0f64..=5.0,
        length in 1.0f64..=10.0,
    ) {
        let params = InclineParameters::new(angle, friction, velocity, length).unwrap();
        match incline::simulate(&params) {
            InclineOutcome::Sliding { acceleration, trajectory } => {
                prop_assert!(acceleration > 0.0);
                prop_assert_eq!(trajectory.len(), 100);
                prop_assert!((trajectory.last().unwrap().position - length).abs() < END_TOLERANCE);
                let velocities: Vec<f64> = trajectory.velocities().collect();
                prop_assert!(velocities.windows(2).all(|w| w[1] >= w[0]));
            }
            InclineOutcome::NotApplicable { acceleration } => {
                prop_assert!(acceleration <= 0.0);
            }
        }
    }

    #[test]
    fn csv_round_trip(height in 1.0f64..=100.0, gravity in 9.0f64..=10.0) {
        let params = FreeFallParameters::new(height, gravity).unwrap();
        let trajectory = free_fall::trajectory(&params);
        let bytes = Table::from_trajectory(&trajectory, Locale::En).to_csv().unwrap();

        let parsed = Table::from_csv_reader(ExperimentKind::FreeFall, bytes.as_slice())
            .unwrap()
            .to_trajectory()
            .unwrap();
        prop_assert_eq!(parsed, trajectory);
    }

    #[test]
    fn out_of_range_input_is_clamped(height in -1e3f64..1e3, gravity in -50.0f64..50.0) {
        let params = FreeFallParameters::new(height, gravity).unwrap();
        prop_assert!((1.0..=100.0).contains(&params.height()));
        prop_assert!((9.0..=10.0).contains(&params.gravity()));
    }
}
