use crate::config::Locale;
use crate::error::Result;
use crate::labels;
use crate::sim::scene::Fixture;
use crate::sim::streamer::{Frame, PlaybackEnd, PlaybackSummary};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::PathBuf;
use tracing::info;

/// Destination for animation frames. Frames are not retained by the stream,
/// so a sink sees each one exactly once.
pub trait RenderSink {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()>;

    fn finish(&mut self, _summary: &PlaybackSummary) -> Result<()> {
        Ok(())
    }
}

/// Reports each frame as a log line.
pub struct LogSink {
    locale: Locale,
}

impl LogSink {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl RenderSink for LogSink {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        info!(
            frame = frame.index + 1,
            of = frame.total,
            t = format_args!("{:.2}", frame.sample.t),
            x = format_args!("{:.3}", frame.marker.x),
            y = format_args!("{:.3}", frame.marker.y),
            "{}",
            labels::experiment(frame.scene.kind, self.locale).frame_title
        );
        Ok(())
    }

    fn finish(&mut self, summary: &PlaybackSummary) -> Result<()> {
        info!("{}", end_message(self.locale, summary));
        Ok(())
    }
}

pub fn end_message(locale: Locale, summary: &PlaybackSummary) -> &'static str {
    match summary.end {
        PlaybackEnd::Completed => labels::animation_finished(locale),
        PlaybackEnd::Stopped => labels::animation_stopped(locale),
    }
}

pub const FRAME_SIZE: (u32, u32) = (640, 480);

/// Writes every frame as `frame_NNNN.svg` into a directory.
pub struct SvgFrameSink {
    dir: PathBuf,
    locale: Locale,
    written: usize,
}

impl SvgFrameSink {
    pub fn new(dir: impl Into<PathBuf>, locale: Locale) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir, locale, written: 0 })
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("frame_{index:04}.svg"))
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl RenderSink for SvgFrameSink {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        let path = self.frame_path(frame.index);
        let root = SVGBackend::new(&path, FRAME_SIZE).into_drawing_area();
        draw_frame(&root, frame, self.locale)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self, summary: &PlaybackSummary) -> Result<()> {
        info!(dir = %self.dir.display(), frames = self.written, "{}", end_message(self.locale, summary));
        Ok(())
    }
}

/// Draw one animation frame: fixed axes, the experiment's fixture, the body.
pub fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &Frame<'_>,
    locale: Locale,
) -> Result<()> {
    let scene = frame.scene;
    let text = labels::experiment(scene.kind, locale);
    let b = scene.bounds;
    let caption = format!("{} (t={:.2}s)", text.frame_title, frame.sample.t);

    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .caption(caption, ("sans-serif", 20))
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(b.x_min..b.x_max, b.y_min..b.y_max)?;

    chart
        .configure_mesh()
        .x_desc(text.frame_x)
        .y_desc(text.frame_y)
        .draw()?;

    match scene.fixture {
        Fixture::Ground { y } => {
            chart
                .draw_series(LineSeries::new(
                    vec![(b.x_min, y), (b.x_max, y)],
                    BLACK.stroke_width(2),
                ))?
                .label(text.legend[0])
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
        }
        Fixture::Pivot(pivot) => {
            chart
                .draw_series(std::iter::once(Circle::new(pivot.as_tuple(), 4, BLACK.filled())))?
                .label(text.legend[0])
                .legend(|(x, y)| Circle::new((x + 10, y), 4, BLACK.filled()));
        }
        Fixture::Surface { from, to } => {
            chart
                .draw_series(LineSeries::new(
                    vec![from.as_tuple(), to.as_tuple()],
                    BLACK.stroke_width(3),
                ))?
                .label(text.legend[0])
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
        }
    }

    if let Some((pivot, bob)) = frame.rod() {
        chart.draw_series(LineSeries::new(
            vec![pivot.as_tuple(), bob.as_tuple()],
            BLUE.stroke_width(2),
        ))?;
    }

    chart
        .draw_series(std::iter::once(Circle::new(frame.marker.as_tuple(), 8, RED.filled())))?
        .label(text.legend[1])
        .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
