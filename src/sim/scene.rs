use crate::config::ExperimentParameters;
use crate::math::Vec2;
use crate::model::{ExperimentKind, TimeSample};
use std::f64::consts::FRAC_PI_2;

/// Fixed plot window of an animation, metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

/// Static geometry drawn under the moving body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fixture {
    Ground { y: f64 },
    Pivot(Vec2),
    Surface { from: Vec2, to: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Geometry {
    Vertical,
    Swing { pivot: Vec2, length: f64 },
    Slope { foot: Vec2, angle: f64 },
}

/// Everything about an animation that does not change from frame to frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub kind: ExperimentKind,
    pub bounds: Bounds,
    pub fixture: Fixture,
    geometry: Geometry,
}

impl Scene {
    pub fn for_parameters(params: &ExperimentParameters) -> Self {
        match params {
            ExperimentParameters::FreeFall(p) => Self {
                kind: ExperimentKind::FreeFall,
                bounds: Bounds {
                    x_min: -1.0,
                    x_max: 1.0,
                    y_min: 0.0,
                    y_max: p.height() + 1.0,
                },
                fixture: Fixture::Ground { y: 0.0 },
                geometry: Geometry::Vertical,
            },
            ExperimentParameters::Pendulum(p) => Self {
                kind: ExperimentKind::Pendulum,
                bounds: Bounds {
                    x_min: -p.length() - 0.5,
                    x_max: p.length() + 0.5,
                    y_min: -p.length() - 0.5,
                    y_max: 0.5,
                },
                fixture: Fixture::Pivot(Vec2::zero()),
                geometry: Geometry::Swing {
                    pivot: Vec2::zero(),
                    length: p.length(),
                },
            },
            ExperimentParameters::Incline(p) => {
                let top = Vec2::polar(p.length(), p.angle());
                Self {
                    kind: ExperimentKind::Incline,
                    bounds: Bounds {
                        x_min: -0.5,
                        x_max: top.x + 0.5,
                        y_min: -0.5,
                        y_max: top.y + 0.5,
                    },
                    fixture: Fixture::Surface {
                        from: Vec2::zero(),
                        to: top,
                    },
                    geometry: Geometry::Slope {
                        foot: Vec2::zero(),
                        angle: p.angle(),
                    },
                }
            }
        }
    }

    /// Where the moving body is drawn for `sample`.
    pub fn marker(&self, sample: &TimeSample) -> Vec2 {
        match self.geometry {
            Geometry::Vertical => Vec2::new(0.0, sample.position),
            // Angle measured from straight down: (L·sinθ, −L·cosθ).
            Geometry::Swing { pivot, length } => pivot + Vec2::polar(length, sample.position - FRAC_PI_2),
            Geometry::Slope { foot, angle } => foot + Vec2::polar(sample.position, angle),
        }
    }

    /// Line from the pivot to the bob, for the pendulum only.
    pub fn rod(&self, marker: Vec2) -> Option<(Vec2, Vec2)> {
        match self.fixture {
            Fixture::Pivot(pivot) => Some((pivot, marker)),
            _ => None,
        }
    }
}
