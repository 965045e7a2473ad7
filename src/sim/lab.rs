use crate::config::{ExperimentParameters, LabConfig, Locale};
use crate::error::Result;
use crate::labels;
use crate::model::{pendulum, ModelOutcome, PeriodEstimate, TrajectoryCache};
use crate::report::{self, table, Report, Table};
use crate::sim::scene::Scene;
use crate::sim::sink::RenderSink;
use crate::sim::streamer::{play, FrameStream, Pacing, PlaybackSummary, StopToken};
use std::path::Path;
use tracing::{info, warn};

/// Host for the three experiments. Each user action becomes one
/// [`RenderPass`]; trajectories are memoized across passes.
pub struct Lab {
    pub config: LabConfig,
    cache: TrajectoryCache,
}

impl Lab {
    pub fn new(config: LabConfig) -> Self {
        Self {
            config,
            cache: TrajectoryCache::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn cache(&self) -> &TrajectoryCache {
        &self.cache
    }

    /// Evaluate the model for `params` and open a render pass over the result.
    pub fn pass(&mut self, params: ExperimentParameters) -> RenderPass {
        let kind = params.kind();
        let outcome = self.cache.get_or_evaluate(&params);
        let locale = self.config.locale;

        match &outcome {
            ModelOutcome::Ready(trajectory) => info!(
                kind = ?kind,
                samples = trajectory.len(),
                duration = trajectory.duration(),
                "{}",
                labels::experiment(kind, locale).title
            ),
            ModelOutcome::NotApplicable(state) => {
                warn!(kind = ?kind, "{}", labels::not_applicable(locale, state))
            }
        }

        let pacing = if self.config.playback.real_time {
            Pacing::real_time(self.config.playback.interval(kind))
        } else {
            Pacing::unpaced()
        };

        RenderPass {
            params,
            outcome,
            scene: Scene::for_parameters(&params),
            locale,
            pacing,
        }
    }
}

/// Everything one interaction needs: the shared outcome and the consumers of it.
pub struct RenderPass {
    params: ExperimentParameters,
    outcome: ModelOutcome,
    scene: Scene,
    locale: Locale,
    pacing: Pacing,
}

impl RenderPass {
    pub fn params(&self) -> &ExperimentParameters {
        &self.params
    }

    pub fn outcome(&self) -> &ModelOutcome {
        &self.outcome
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Message shown in place of the experiment's output, if any.
    pub fn warning(&self) -> Option<String> {
        match &self.outcome {
            ModelOutcome::NotApplicable(state) => Some(labels::not_applicable(self.locale, state)),
            ModelOutcome::Ready(_) => None,
        }
    }

    pub fn period(&self) -> Option<PeriodEstimate> {
        match (&self.params, self.outcome.trajectory()) {
            (ExperimentParameters::Pendulum(p), Some(trajectory)) => {
                Some(pendulum::estimate_period(p, trajectory))
            }
            _ => None,
        }
    }

    pub fn frames(&self, stop: StopToken) -> Report<FrameStream<'_>> {
        match &self.outcome {
            ModelOutcome::Ready(trajectory) => {
                Report::Ready(FrameStream::new(&self.scene, trajectory, self.pacing, stop))
            }
            ModelOutcome::NotApplicable(state) => Report::NotApplicable(*state),
        }
    }

    /// Play the animation into `sink`, at most `max_frames` frames when given.
    pub fn animate(
        &self,
        sink: &mut dyn RenderSink,
        stop: StopToken,
        max_frames: Option<usize>,
    ) -> Result<Report<PlaybackSummary>> {
        match self.frames(stop) {
            Report::Ready(stream) => {
                let stream = match max_frames {
                    Some(n) => stream.limit(n),
                    None => stream,
                };
                Ok(Report::Ready(play(stream, sink)?))
            }
            Report::NotApplicable(state) => Ok(Report::NotApplicable(state)),
        }
    }

    pub fn table(&self) -> Report<Table> {
        table::tabulate(&self.outcome, self.locale)
    }

    pub fn plot(&self, path: &Path) -> Result<Report<()>> {
        report::render_summary_svg(&self.outcome, self.locale, path)
    }

    pub fn export(&self, path: &Path) -> Result<Report<()>> {
        table::export(&self.outcome, self.locale, path)
    }

    /// File name the export is offered under for this experiment and locale.
    pub fn export_file_name(&self) -> &'static str {
        labels::experiment(self.params.kind(), self.locale).export_file
    }
}
