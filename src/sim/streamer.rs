use crate::error::Result;
use crate::math::Vec2;
use crate::model::{TimeSample, Trajectory};
use crate::sim::scene::Scene;
use crate::sim::sink::RenderSink;
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Shared flag that ends a running animation at the next frame boundary.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub interval: Duration,
    pub real_time: bool,
}

impl Pacing {
    pub fn real_time(interval: Duration) -> Self {
        Self { interval, real_time: true }
    }

    pub fn unpaced() -> Self {
        Self {
            interval: Duration::ZERO,
            real_time: false,
        }
    }
}

/// One rendered instant of an animation.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub scene: &'a Scene,
    pub index: usize,
    pub total: usize,
    pub sample: TimeSample,
    pub marker: Vec2,
}

impl Frame<'_> {
    pub fn rod(&self) -> Option<(Vec2, Vec2)> {
        self.scene.rod(self.marker)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}

/// Lazy, single-pass sequence of frames over a trajectory.
///
/// Every frame after the first is held back until `interval` has passed
/// since the previous one was handed out. Setting the stop token ends the
/// sequence before the next frame.
pub struct FrameStream<'a> {
    scene: &'a Scene,
    samples: &'a [TimeSample],
    next: usize,
    pacing: Pacing,
    stop: StopToken,
    last_delivery: Option<Instant>,
    stopped: bool,
}

impl<'a> FrameStream<'a> {
    pub fn new(scene: &'a Scene, trajectory: &'a Trajectory, pacing: Pacing, stop: StopToken) -> Self {
        debug_assert_eq!(scene.kind, trajectory.kind());
        Self {
            scene,
            samples: trajectory.samples(),
            next: 0,
            pacing,
            stop,
            last_delivery: None,
            stopped: false,
        }
    }

    /// Cut the sequence to at most `frames` frames.
    pub fn limit(mut self, frames: usize) -> Self {
        let end = frames.min(self.samples.len()).max(self.next);
        self.samples = &self.samples[..end];
        self
    }

    pub fn total(&self) -> usize {
        self.samples.len()
    }

    /// True once the stop token cut the sequence short.
    pub fn was_stopped(&self) -> bool {
        self.stopped
    }

    fn wait_for_slot(&self) {
        if !self.pacing.real_time {
            return;
        }
        if let Some(last) = self.last_delivery {
            let elapsed = last.elapsed();
            if elapsed < self.pacing.interval {
                std::thread::sleep(self.pacing.interval - elapsed);
            }
        }
    }
}

impl<'a> Iterator for FrameStream<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Frame<'a>> {
        if self.stopped || self.next >= self.samples.len() {
            return None;
        }
        if self.stop.is_stopped() {
            self.stopped = true;
            return None;
        }

        self.wait_for_slot();
        if self.stop.is_stopped() {
            self.stopped = true;
            return None;
        }

        let sample = self.samples[self.next];
        let frame = Frame {
            scene: self.scene,
            index: self.next,
            total: self.samples.len(),
            sample,
            marker: self.scene.marker(&sample),
        };
        self.next += 1;
        self.last_delivery = Some(Instant::now());
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.stopped {
            0
        } else {
            self.samples.len() - self.next
        };
        (0, Some(remaining))
    }
}

impl FusedIterator for FrameStream<'_> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEnd {
    Completed,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    pub frames_rendered: usize,
    pub total_frames: usize,
    pub end: PlaybackEnd,
}

/// Drive `stream` into `sink`, one frame at a time, until it is exhausted or stopped.
pub fn play(mut stream: FrameStream<'_>, sink: &mut dyn RenderSink) -> Result<PlaybackSummary> {
    let total_frames = stream.total();
    let started = Instant::now();
    info!(kind = ?stream.scene.kind, frames = total_frames, "animation started");

    let mut frames_rendered = 0;
    for frame in stream.by_ref() {
        sink.render(&frame)?;
        frames_rendered += 1;
        debug!(index = frame.index, t = frame.sample.t, "frame rendered");
    }

    let end = if stream.was_stopped() {
        PlaybackEnd::Stopped
    } else {
        PlaybackEnd::Completed
    };
    let summary = PlaybackSummary {
        frames_rendered,
        total_frames,
        end,
    };
    sink.finish(&summary)?;
    info!(
        frames = frames_rendered,
        elapsed_ms = started.elapsed().as_millis() as u64,
        end = ?end,
        "animation finished"
    );
    Ok(summary)
}
