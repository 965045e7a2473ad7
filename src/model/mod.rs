//! Closed-form kinematic models.
//!
//! Each model maps intake parameters to a [`Trajectory`]: a fixed number of
//! uniformly spaced samples over the whole motion. Models are pure, so the
//! same parameters always give the same samples; [`TrajectoryCache`] relies
//! on that.

pub mod cache;
pub mod free_fall;
pub mod incline;
pub mod pendulum;
pub mod trajectory;

pub use cache::TrajectoryCache;
pub use incline::InclineOutcome;
pub use pendulum::PeriodEstimate;
pub use trajectory::{TimeSample, Trajectory};

use crate::config::ExperimentParameters;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentKind {
    FreeFall,
    Pendulum,
    Incline,
}

impl ExperimentKind {
    pub const ALL: [ExperimentKind; 3] = [Self::FreeFall, Self::Pendulum, Self::Incline];

    /// Whether `position` holds an angle (radians) rather than a distance.
    pub fn is_angular(&self) -> bool {
        matches!(self, Self::Pendulum)
    }
}

/// The motion admits no trajectory. Only the incline can end up here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotApplicable {
    /// Net acceleration along the slope, m/s² (≤ 0)
    pub acceleration: f64,
}

/// Result of one model evaluation, shared by everything downstream of it.
#[derive(Debug, Clone)]
pub enum ModelOutcome {
    Ready(Arc<Trajectory>),
    NotApplicable(NotApplicable),
}

impl ModelOutcome {
    pub fn trajectory(&self) -> Option<&Trajectory> {
        match self {
            Self::Ready(trajectory) => Some(trajectory),
            Self::NotApplicable(_) => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Evaluate the model for `params`.
pub fn evaluate(params: &ExperimentParameters) -> ModelOutcome {
    match params {
        ExperimentParameters::FreeFall(p) => ModelOutcome::Ready(Arc::new(free_fall::trajectory(p))),
        ExperimentParameters::Pendulum(p) => ModelOutcome::Ready(Arc::new(pendulum::trajectory(p))),
        ExperimentParameters::Incline(p) => match incline::simulate(p) {
            InclineOutcome::Sliding { trajectory, .. } => ModelOutcome::Ready(Arc::new(trajectory)),
            InclineOutcome::NotApplicable { acceleration } => {
                ModelOutcome::NotApplicable(NotApplicable { acceleration })
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FreeFallParameters, InclineParameters, PendulumParameters};

    #[test]
    fn evaluate_dispatches_by_experiment() {
        let fall = evaluate(&FreeFallParameters::default().into());
        assert_eq!(fall.trajectory().unwrap().kind(), ExperimentKind::FreeFall);
        assert_eq!(fall.trajectory().unwrap().len(), 100);

        let pendulum = evaluate(&PendulumParameters::default().into());
        assert_eq!(pendulum.trajectory().unwrap().kind(), ExperimentKind::Pendulum);
        assert_eq!(pendulum.trajectory().unwrap().len(), 200);

        let incline = evaluate(&InclineParameters::default().into());
        assert_eq!(incline.trajectory().unwrap().kind(), ExperimentKind::Incline);
    }

    #[test]
    fn extreme_intake_still_gives_ordered_samples() {
        let inputs: [ExperimentParameters; 6] = [
            FreeFallParameters::new(-5.0, 0.0).unwrap().into(),
            FreeFallParameters::new(f64::INFINITY, f64::NEG_INFINITY).unwrap().into(),
            PendulumParameters::new(0.0, 0.0).unwrap().into(),
            PendulumParameters::with_gravity(-1.0, 90.0, 100.0).unwrap().into(),
            InclineParameters::new(90.0, 0.0, -3.0, 0.0).unwrap().into(),
            InclineParameters::with_gravity(1e9, -1.0, 1e9, 1e9, 0.0).unwrap().into(),
        ];
        for params in inputs {
            let outcome = evaluate(&params);
            let trajectory = outcome.trajectory().unwrap();
            let samples = trajectory.samples().to_vec();
            assert!(samples.iter().all(|s| s.position.is_finite() && s.velocity.is_finite()));
            assert!(Trajectory::new(trajectory.kind(), samples).is_ok(), "{params:?}");
        }
    }

    #[test]
    fn stuck_incline_is_not_applicable() {
        let params = InclineParameters::new(10.0, 0.9, 0.0, 2.0).unwrap();
        let outcome = evaluate(&params.into());
        assert!(!outcome.is_applicable());
        assert!(outcome.trajectory().is_none());
    }
}
