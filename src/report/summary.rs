use crate::config::Locale;
use crate::error::Result;
use crate::labels;
use crate::model::{ExperimentKind, ModelOutcome, Trajectory};
use crate::report::{with_trajectory, Report};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::info;

pub const SUMMARY_SIZE: (u32, u32) = (1200, 400);

fn curve_colors(kind: ExperimentKind) -> [RGBColor; 2] {
    match kind {
        ExperimentKind::FreeFall => [BLUE, RED],
        ExperimentKind::Pendulum => [RGBColor(128, 0, 128), RGBColor(0, 128, 128)],
        ExperimentKind::Incline => [GREEN, RGBColor(255, 165, 0)],
    }
}

/// Position and velocity curves in presentation units.
fn display_series(trajectory: &Trajectory) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let scale = if trajectory.kind().is_angular() {
        1f64.to_degrees()
    } else {
        1.0
    };
    trajectory
        .samples()
        .iter()
        .map(|s| ((s.t, s.position * scale), (s.t, s.velocity * scale)))
        .unzip()
}

fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let pad = 0.05 * (max - min).abs().max(1e-9);
    (min - pad)..(max + pad)
}

fn draw_curve<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    points: &[(f64, f64)],
    color: RGBColor,
) -> Result<()> {
    let x_range = padded_range(points.iter().map(|p| p.0));
    let y_range = padded_range(points.iter().map(|p| p.1));

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .caption(title, ("sans-serif", 22))
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_label_formatter(&|v| format!("{:.2}", v))
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?;
    Ok(())
}

/// Draw the two summary curves side by side on `root`.
pub fn render_summary<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    trajectory: &Trajectory,
    locale: Locale,
) -> Result<()> {
    let kind = trajectory.kind();
    let text = labels::experiment(kind, locale);
    let colors = curve_colors(kind);
    let (position, velocity) = display_series(trajectory);

    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));
    draw_curve(&panels[0], text.curves[0], text.columns[0], text.columns[1], &position, colors[0])?;
    draw_curve(&panels[1], text.curves[1], text.columns[0], text.columns[2], &velocity, colors[1])?;
    root.present()?;
    Ok(())
}

pub fn render_summary_svg(outcome: &ModelOutcome, locale: Locale, path: &Path) -> Result<Report<()>> {
    with_trajectory(outcome, |trajectory| {
        let root = SVGBackend::new(path, SUMMARY_SIZE).into_drawing_area();
        render_summary(&root, trajectory, locale)?;
        info!(path = %path.display(), "summary plot written");
        Ok(())
    })
}

/// Render the summary into an in-memory SVG document.
pub fn summary_svg_string(outcome: &ModelOutcome, locale: Locale) -> Result<Report<String>> {
    with_trajectory(outcome, |trajectory| {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, SUMMARY_SIZE).into_drawing_area();
            render_summary(&root, trajectory, locale)?;
        }
        Ok(svg)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InclineParameters, PendulumParameters};
    use crate::model::evaluate;

    #[test]
    fn summary_carries_axis_labels() {
        let outcome = evaluate(&PendulumParameters::default().into());
        let svg = summary_svg_string(&outcome, Locale::En).unwrap().ready().unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("angle (°)"));
        assert!(svg.contains("angular velocity (°/s)"));
    }

    #[test]
    fn summary_not_applicable_for_stuck_incline() {
        let outcome = evaluate(&InclineParameters::new(10.0, 0.9, 0.0, 2.0).unwrap().into());
        assert!(!summary_svg_string(&outcome, Locale::Zh).unwrap().is_applicable());
    }

    #[test]
    fn summary_file_is_written() {
        let outcome = evaluate(&InclineParameters::default().into());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("incline.svg");
        assert!(render_summary_svg(&outcome, Locale::Zh, &path).unwrap().is_applicable());
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("位移 (m)"));
    }

    #[test]
    fn padded_range_covers_values() {
        let range = padded_range([1.0, 3.0].into_iter());
        assert!(range.start < 1.0 && range.end > 3.0);
        assert_eq!(padded_range(std::iter::empty()), 0.0..1.0);
    }
}
