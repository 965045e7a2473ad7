use crate::error::{Error, Result};
use crate::math::STANDARD_GRAVITY;
use crate::model::ExperimentKind;
use tracing::warn;

/// Closed interval a parameter is clamped into at intake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl Range {
    pub const fn new(name: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self { name, min, max, default }
    }

    /// Clamp `value` into the interval. NaN cannot be clamped and is rejected.
    pub fn clamp(&self, value: f64) -> Result<f64> {
        if value.is_nan() {
            return Err(Error::InvalidParameter { name: self.name, value });
        }
        let clamped = value.clamp(self.min, self.max);
        if clamped != value {
            warn!(
                parameter = self.name,
                requested = value,
                clamped,
                "parameter outside [{}, {}], clamped",
                self.min,
                self.max
            );
        }
        Ok(clamped)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const HEIGHT: Range = Range::new("height", 1.0, 100.0, 10.0);
pub const GRAVITY: Range = Range::new("gravity", 9.0, 10.0, STANDARD_GRAVITY);
pub const PENDULUM_LENGTH: Range = Range::new("pendulum_length", 0.1, 2.0, 1.0);
pub const INITIAL_ANGLE_DEG: Range = Range::new("initial_angle", 1.0, 30.0, 5.0);
pub const INCLINE_ANGLE_DEG: Range = Range::new("incline_angle", 1.0, 80.0, 30.0);
pub const FRICTION: Range = Range::new("friction", 0.0, 1.0, 0.1);
pub const INITIAL_VELOCITY: Range = Range::new("initial_velocity", 0.0, 5.0, 0.0);
pub const INCLINE_LENGTH: Range = Range::new("incline_length", 1.0, 10.0, 2.0);

/// Free-fall inputs. Only obtainable through intake, so every value is in range:
///
/// ```compile_fail
/// let p = kinelab::config::FreeFallParameters { height: -5.0, gravity: 9.8 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeFallParameters {
    height: f64,
    gravity: f64,
}

impl FreeFallParameters {
    pub fn new(height: f64, gravity: f64) -> Result<Self> {
        Ok(Self {
            height: HEIGHT.clamp(height)?,
            gravity: GRAVITY.clamp(gravity)?,
        })
    }

    /// Drop height, m
    pub fn height(&self) -> f64 {
        self.height
    }

    /// m/s²
    pub fn gravity(&self) -> f64 {
        self.gravity
    }
}

impl Default for FreeFallParameters {
    fn default() -> Self {
        Self {
            height: HEIGHT.default,
            gravity: GRAVITY.default,
        }
    }
}

/// Pendulum inputs. The release angle is taken in degrees and held in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumParameters {
    length: f64,
    initial_angle: f64,
    gravity: f64,
}

impl PendulumParameters {
    pub fn new(length: f64, initial_angle_deg: f64) -> Result<Self> {
        Self::with_gravity(length, initial_angle_deg, GRAVITY.default)
    }

    pub fn with_gravity(length: f64, initial_angle_deg: f64, gravity: f64) -> Result<Self> {
        Ok(Self {
            length: PENDULUM_LENGTH.clamp(length)?,
            initial_angle: INITIAL_ANGLE_DEG.clamp(initial_angle_deg)?.to_radians(),
            gravity: GRAVITY.clamp(gravity)?,
        })
    }

    /// m
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Release angle, rad
    pub fn initial_angle(&self) -> f64 {
        self.initial_angle
    }

    pub fn initial_angle_deg(&self) -> f64 {
        self.initial_angle.to_degrees()
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }
}

impl Default for PendulumParameters {
    fn default() -> Self {
        Self {
            length: PENDULUM_LENGTH.default,
            initial_angle: INITIAL_ANGLE_DEG.default.to_radians(),
            gravity: GRAVITY.default,
        }
    }
}

/// Incline inputs. The slope angle is taken in degrees and held in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InclineParameters {
    angle: f64,
    friction: f64,
    initial_velocity: f64,
    length: f64,
    gravity: f64,
}

impl InclineParameters {
    pub fn new(angle_deg: f64, friction: f64, initial_velocity: f64, length: f64) -> Result<Self> {
        Self::with_gravity(angle_deg, friction, initial_velocity, length, GRAVITY.default)
    }

    pub fn with_gravity(
        angle_deg: f64,
        friction: f64,
        initial_velocity: f64,
        length: f64,
        gravity: f64,
    ) -> Result<Self> {
        Ok(Self {
            angle: INCLINE_ANGLE_DEG.clamp(angle_deg)?.to_radians(),
            friction: FRICTION.clamp(friction)?,
            initial_velocity: INITIAL_VELOCITY.clamp(initial_velocity)?,
            length: INCLINE_LENGTH.clamp(length)?,
            gravity: GRAVITY.clamp(gravity)?,
        })
    }

    /// Slope angle, rad
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle.to_degrees()
    }

    /// Kinetic friction coefficient
    pub fn friction(&self) -> f64 {
        self.friction
    }

    /// m/s along the slope
    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    /// Slope length, m
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }
}

impl Default for InclineParameters {
    fn default() -> Self {
        Self {
            angle: INCLINE_ANGLE_DEG.default.to_radians(),
            friction: FRICTION.default,
            initial_velocity: INITIAL_VELOCITY.default,
            length: INCLINE_LENGTH.default,
            gravity: GRAVITY.default,
        }
    }
}

/// Parameters of any one experiment, as they leave intake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExperimentParameters {
    FreeFall(FreeFallParameters),
    Pendulum(PendulumParameters),
    Incline(InclineParameters),
}

/// Exact identity of a parameter set, usable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterKey {
    kind: ExperimentKind,
    bits: [u64; 5],
}

impl ExperimentParameters {
    pub fn kind(&self) -> ExperimentKind {
        match self {
            Self::FreeFall(_) => ExperimentKind::FreeFall,
            Self::Pendulum(_) => ExperimentKind::Pendulum,
            Self::Incline(_) => ExperimentKind::Incline,
        }
    }

    pub fn key(&self) -> ParameterKey {
        let values = match self {
            Self::FreeFall(p) => [p.height, p.gravity, 0.0, 0.0, 0.0],
            Self::Pendulum(p) => [p.length, p.initial_angle, p.gravity, 0.0, 0.0],
            Self::Incline(p) => [p.angle, p.friction, p.initial_velocity, p.length, p.gravity],
        };
        ParameterKey {
            kind: self.kind(),
            bits: values.map(f64::to_bits),
        }
    }
}

impl From<FreeFallParameters> for ExperimentParameters {
    fn from(p: FreeFallParameters) -> Self {
        Self::FreeFall(p)
    }
}

impl From<PendulumParameters> for ExperimentParameters {
    fn from(p: PendulumParameters) -> Self {
        Self::Pendulum(p)
    }
}

impl From<InclineParameters> for ExperimentParameters {
    fn from(p: InclineParameters) -> Self {
        Self::Incline(p)
    }
}
