use crate::config::InclineParameters;
use crate::math::{linspace, END_TOLERANCE};
use crate::model::{ExperimentKind, Trajectory};
use tracing::debug;

pub const SAMPLE_COUNT: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub enum InclineOutcome {
    Sliding {
        acceleration: f64,
        trajectory: Trajectory,
    },
    /// Friction holds the body (or decelerates it); there is no motion to sample.
    NotApplicable { acceleration: f64 },
}

impl InclineOutcome {
    pub fn acceleration(&self) -> f64 {
        match self {
            Self::Sliding { acceleration, .. } | Self::NotApplicable { acceleration } => *acceleration,
        }
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        match self {
            Self::Sliding { trajectory, .. } => Some(trajectory),
            Self::NotApplicable { .. } => None,
        }
    }
}

/// Net acceleration along the slope `g·(sin θ − μ·cos θ)`, m/s².
pub fn acceleration(params: &InclineParameters) -> f64 {
    params.gravity() * (params.angle().sin() - params.friction() * params.angle().cos())
}

/// Positive root of `½·a·t² + v0·t − L = 0`.
///
/// Written as `2L / (v0 + sqrt(v0² + 2aL))` so small `a` does not cancel.
pub fn travel_time(acceleration: f64, initial_velocity: f64, length: f64) -> f64 {
    let discriminant = initial_velocity * initial_velocity + 2.0 * acceleration * length;
    2.0 * length / (initial_velocity + discriminant.sqrt())
}

pub fn displacement_at(params: &InclineParameters, acceleration: f64, t: f64) -> f64 {
    params.initial_velocity() * t + 0.5 * acceleration * t * t
}

pub fn velocity_at(params: &InclineParameters, acceleration: f64, t: f64) -> f64 {
    params.initial_velocity() + acceleration * t
}

pub fn simulate(params: &InclineParameters) -> InclineOutcome {
    let a = acceleration(params);
    if a <= 0.0 {
        debug!(
            acceleration = a,
            angle_deg = params.angle_deg(),
            friction = params.friction(),
            "acceleration <= 0, the body cannot slide"
        );
        return InclineOutcome::NotApplicable { acceleration: a };
    }

    let total = travel_time(a, params.initial_velocity(), params.length());
    let times = linspace(0.0, total, SAMPLE_COUNT);
    let trajectory = Trajectory::sampled(ExperimentKind::Incline, &times, |t| {
        (displacement_at(params, a, t), velocity_at(params, a, t))
    });
    debug_assert!((displacement_at(params, a, total) - params.length()).abs() < END_TOLERANCE);

    InclineOutcome::Sliding {
        acceleration: a,
        trajectory,
    }
}
