use crate::config::PendulumParameters;
use crate::math::{linspace, sampling::sign};
use crate::model::{ExperimentKind, Trajectory};
use serde::Serialize;
use std::f64::consts::TAU;
use tracing::debug;

pub const SAMPLE_COUNT: usize = 200;
/// Sampled window, in theoretical periods.
pub const SPAN_PERIODS: f64 = 2.0;

/// Small-angle period `2π·sqrt(L/g)`, s.
pub fn theoretical_period(params: &PendulumParameters) -> f64 {
    TAU * (params.length() / params.gravity()).sqrt()
}

/// Angular frequency `sqrt(g/L)`, rad/s.
pub fn angular_frequency(params: &PendulumParameters) -> f64 {
    (params.gravity() / params.length()).sqrt()
}

pub fn angle_at(params: &PendulumParameters, t: f64) -> f64 {
    params.initial_angle() * (angular_frequency(params) * t).cos()
}

pub fn angular_velocity_at(params: &PendulumParameters, t: f64) -> f64 {
    let omega = angular_frequency(params);
    -params.initial_angle() * omega * (omega * t).sin()
}

pub fn trajectory(params: &PendulumParameters) -> Trajectory {
    trajectory_over(params, SPAN_PERIODS, SAMPLE_COUNT)
}

/// Sample `count` points over `span_periods` theoretical periods.
pub fn trajectory_over(params: &PendulumParameters, span_periods: f64, count: usize) -> Trajectory {
    let times = linspace(0.0, span_periods * theoretical_period(params), count);
    Trajectory::sampled(ExperimentKind::Pendulum, &times, |t| {
        (angle_at(params, t), angular_velocity_at(params, t))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodEstimate {
    pub theoretical: f64,
    pub fitted: f64,
    /// False when fewer than two maxima were found and `fitted` is the theoretical value.
    pub fitted_from_peaks: bool,
}

/// Indices of local maxima, found by scanning the sign of the discrete slope.
///
/// A maximum is where a rise is followed by a fall. Zero-slope runs between
/// them belong to the same maximum, reported at the first index of the run.
pub fn peak_indices(values: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    let mut top: Option<usize> = None;
    for (i, w) in values.windows(2).enumerate() {
        match sign(w[1] - w[0]) {
            1 => top = Some(i + 1),
            0 => {}
            _ => {
                if let Some(index) = top.take() {
                    peaks.push(index);
                }
            }
        }
    }
    peaks
}

/// Peak-to-peak period of a sampled swing, falling back to `theoretical`.
pub fn fit_period(trajectory: &Trajectory, theoretical: f64) -> PeriodEstimate {
    let angles: Vec<f64> = trajectory.positions().collect();
    let peaks = peak_indices(&angles);
    let samples = trajectory.samples();

    match peaks.as_slice() {
        [first, second, ..] => {
            let fitted = samples[*second].t - samples[*first].t;
            debug!(peaks = peaks.len(), fitted, "fitted pendulum period");
            PeriodEstimate {
                theoretical,
                fitted,
                fitted_from_peaks: true,
            }
        }
        _ => {
            debug!(peaks = peaks.len(), "too few maxima, using theoretical period");
            PeriodEstimate {
                theoretical,
                fitted: theoretical,
                fitted_from_peaks: false,
            }
        }
    }
}

pub fn estimate_period(params: &PendulumParameters, trajectory: &Trajectory) -> PeriodEstimate {
    fit_period(trajectory, theoretical_period(params))
}
