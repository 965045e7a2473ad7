use crate::config::FreeFallParameters;
use crate::math::linspace;
use crate::model::{ExperimentKind, Trajectory};

pub const SAMPLE_COUNT: usize = 100;

/// Time to reach the ground, s.
pub fn fall_time(params: &FreeFallParameters) -> f64 {
    (2.0 * params.height() / params.gravity()).sqrt()
}

pub fn height_at(params: &FreeFallParameters, t: f64) -> f64 {
    (params.height() - 0.5 * params.gravity() * t * t).max(0.0)
}

pub fn velocity_at(params: &FreeFallParameters, t: f64) -> f64 {
    params.gravity() * t
}

pub fn trajectory(params: &FreeFallParameters) -> Trajectory {
    let times = linspace(0.0, fall_time(params), SAMPLE_COUNT);
    Trajectory::sampled(ExperimentKind::FreeFall, &times, |t| {
        (height_at(params, t), velocity_at(params, t))
    })
}
