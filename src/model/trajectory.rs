use crate::error::{Error, Result};
use crate::model::ExperimentKind;
use serde::Serialize;

/// State at one instant.
///
/// For the pendulum `position` is the swing angle (rad) and `velocity` the
/// angular velocity (rad/s); otherwise both are linear, in m and m/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSample {
    pub t: f64,
    pub position: f64,
    pub velocity: f64,
}

impl TimeSample {
    pub fn new(t: f64, position: f64, velocity: f64) -> Self {
        Self { t, position, velocity }
    }
}

/// Samples of one motion, strictly increasing in `t` from 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    kind: ExperimentKind,
    samples: Vec<TimeSample>,
}

impl Trajectory {
    pub fn new(kind: ExperimentKind, samples: Vec<TimeSample>) -> Result<Self> {
        let mut previous: Option<f64> = None;
        for (index, sample) in samples.iter().enumerate() {
            let ordered = match previous {
                Some(prev) => sample.t > prev,
                None => sample.t >= 0.0,
            };
            if !ordered {
                return Err(Error::NonMonotonicTime {
                    index,
                    t: sample.t,
                    previous: previous.unwrap_or(0.0),
                });
            }
            previous = Some(sample.t);
        }
        Ok(Self { kind, samples })
    }

    /// Build from `times` mapped through `state`. `times` must already be
    /// strictly increasing from 0, which every model's uniform grid is.
    pub(crate) fn sampled(
        kind: ExperimentKind,
        times: &[f64],
        state: impl Fn(f64) -> (f64, f64),
    ) -> Self {
        debug_assert!(
            times.first().map_or(true, |&t| t >= 0.0) && times.windows(2).all(|w| w[1] > w[0]),
            "sample times must increase strictly from 0"
        );
        let samples = times
            .iter()
            .map(|&t| {
                let (position, velocity) = state(t);
                TimeSample::new(t, position, velocity)
            })
            .collect();
        Self { kind, samples }
    }

    pub fn kind(&self) -> ExperimentKind {
        self.kind
    }

    pub fn samples(&self) -> &[TimeSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&TimeSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TimeSample> {
        self.samples.last()
    }

    /// Time of the last sample.
    pub fn duration(&self) -> f64 {
        self.last().map_or(0.0, |s| s.t)
    }

    /// Spacing of the uniform time grid.
    pub fn sample_interval(&self) -> f64 {
        if self.samples.len() < 2 {
            return 0.0;
        }
        self.duration() / (self.samples.len() - 1) as f64
    }

    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.position)
    }

    pub fn velocities(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_increasing_times() {
        let samples = vec![TimeSample::new(0.0, 1.0, 0.0), TimeSample::new(0.5, 0.5, 1.0)];
        let trajectory = Trajectory::new(ExperimentKind::FreeFall, samples).unwrap();
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.duration(), 0.5);
        assert_eq!(trajectory.sample_interval(), 0.5);
    }

    #[test]
    fn rejects_repeated_time() {
        let samples = vec![TimeSample::new(0.0, 1.0, 0.0), TimeSample::new(0.0, 0.5, 1.0)];
        let err = Trajectory::new(ExperimentKind::Incline, samples).unwrap_err();
        assert!(matches!(err, Error::NonMonotonicTime { index: 1, .. }));
    }

    #[test]
    fn rejects_negative_start() {
        let samples = vec![TimeSample::new(-0.1, 1.0, 0.0)];
        assert!(Trajectory::new(ExperimentKind::Pendulum, samples).is_err());
    }

    #[test]
    fn empty_trajectory_has_zero_duration() {
        let trajectory = Trajectory::new(ExperimentKind::FreeFall, Vec::new()).unwrap();
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.duration(), 0.0);
        assert_eq!(trajectory.sample_interval(), 0.0);
    }
}
