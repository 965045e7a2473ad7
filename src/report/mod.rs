//! Static summary plots and tabular export of a finished trajectory.

pub mod summary;
pub mod table;

pub use summary::{render_summary, render_summary_svg};
pub use table::Table;

use crate::model::{ModelOutcome, NotApplicable, Trajectory};

/// Output of a downstream component: the value, or the terminal state
/// inherited from a model that produced no trajectory.
#[derive(Debug, Clone, PartialEq)]
pub enum Report<T> {
    Ready(T),
    NotApplicable(NotApplicable),
}

impl<T> Report<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::NotApplicable(_) => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Run `f` on the outcome's trajectory, or pass the not-applicable state through.
pub fn with_trajectory<T>(
    outcome: &ModelOutcome,
    f: impl FnOnce(&Trajectory) -> crate::Result<T>,
) -> crate::Result<Report<T>> {
    match outcome {
        ModelOutcome::Ready(trajectory) => Ok(Report::Ready(f(trajectory.as_ref())?)),
        ModelOutcome::NotApplicable(state) => Ok(Report::NotApplicable(*state)),
    }
}
