//! # kinelab
//!
//! Three classical-mechanics experiments (free fall, simple pendulum,
//! inclined plane) evaluated from their closed-form equations, replayed as
//! paced animation frames, summarised as plots and exported as CSV.
//!
//! ```rust,no_run
//! use kinelab::config::{FreeFallParameters, LabConfig};
//! use kinelab::sim::{Lab, LogSink, StopToken};
//!
//! let mut lab = Lab::new(LabConfig::default());
//! let pass = lab.pass(FreeFallParameters::new(10.0, 9.8)?.into());
//! pass.animate(&mut LogSink::new(lab.locale()), StopToken::new(), None)?;
//! pass.export(std::path::Path::new(pass.export_file_name()))?;
//! # Ok::<(), kinelab::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod labels;
pub mod math;
pub mod model;
pub mod report;
pub mod sim;

pub use error::{Error, Result};
