use crate::config::intake::ParameterKey;
use crate::config::ExperimentParameters;
use crate::model::{evaluate, ExperimentKind, ModelOutcome};
use std::collections::HashMap;
use tracing::debug;

/// Latest model outcome of each experiment, keyed by the exact parameters
/// that produced it.
///
/// Every render pass asks for its trajectory again; unchanged parameters
/// return the stored outcome instead of resampling. A new parameter set
/// replaces the previous entry of its experiment, so the cache holds at
/// most one outcome per [`ExperimentKind`].
#[derive(Debug, Default)]
pub struct TrajectoryCache {
    entries: HashMap<ExperimentKind, (ParameterKey, ModelOutcome)>,
    hits: u64,
    misses: u64,
}

impl TrajectoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_evaluate(&mut self, params: &ExperimentParameters) -> ModelOutcome {
        let kind = params.kind();
        let key = params.key();
        if let Some((stored, outcome)) = self.entries.get(&kind) {
            if *stored == key {
                self.hits += 1;
                debug!(kind = ?kind, hits = self.hits, "trajectory cache hit");
                return outcome.clone();
            }
        }

        self.misses += 1;
        debug!(kind = ?kind, misses = self.misses, "trajectory cache miss");
        let outcome = evaluate(params);
        self.entries.insert(kind, (key, outcome.clone()));
        outcome
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
