pub mod intake;
pub mod lab;

pub use intake::{
    ExperimentParameters, FreeFallParameters, InclineParameters, PendulumParameters, Range,
};
pub use lab::{LabConfig, Locale, PlaybackConfig};
