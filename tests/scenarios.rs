//! End-to-end scenarios through the lab host: intake, model, animation,
//! summary and export sharing one pass.

use approx::assert_abs_diff_eq;
use kinelab::config::{
    FreeFallParameters, InclineParameters, LabConfig, Locale, PendulumParameters, PlaybackConfig,
};
use kinelab::math::END_TOLERANCE;
use kinelab::model::{incline, ExperimentKind};
use kinelab::report::{Report, Table};
use kinelab::sim::{Frame, Lab, PlaybackEnd, RenderSink, StopToken};

fn lab(locale: Locale) -> Lab {
    Lab::new(LabConfig {
        locale,
        playback: PlaybackConfig::headless(),
    })
}

#[derive(Default)]
struct CountingSink {
    heights: Vec<f64>,
}

impl RenderSink for CountingSink {
    fn render(&mut self, frame: &Frame<'_>) -> kinelab::Result<()> {
        self.heights.push(frame.marker.y);
        Ok(())
    }
}

#[test]
fn ten_metre_drop() {
    let mut lab = lab(Locale::Zh);
    let pass = lab.pass(FreeFallParameters::new(10.0, 9.8).unwrap().into());
    let trajectory = pass.outcome().trajectory().unwrap();
    let last = trajectory.last().unwrap();

    assert_abs_diff_eq!(last.t, 1.4286, epsilon = 1e-4);
    assert_abs_diff_eq!(last.velocity, 13.99, epsilon = 2e-2);

    let mut sink = CountingSink::default();
    let summary = pass.animate(&mut sink, StopToken::new(), None).unwrap().ready().unwrap();
    assert_eq!(summary.end, PlaybackEnd::Completed);
    assert_eq!(sink.heights.len(), 100);
    assert_eq!(sink.heights[0], 10.0);
    assert_abs_diff_eq!(sink.heights[99], 0.0, epsilon = END_TOLERANCE);
}

#[test]
fn one_metre_pendulum() {
    let mut lab = lab(Locale::En);
    let pass = lab.pass(PendulumParameters::new(1.0, 5.0).unwrap().into());
    let estimate = pass.period().unwrap();

    assert_abs_diff_eq!(estimate.theoretical, 2.007, epsilon = 1e-3);
    // Two periods in 200 samples: the second maximum is the final sample.
    assert!(!estimate.fitted_from_peaks);
    assert_eq!(estimate.fitted, estimate.theoretical);
}

#[test]
fn thirty_degree_incline() {
    let params = InclineParameters::new(30.0, 0.1, 0.0, 2.0).unwrap();
    assert_abs_diff_eq!(incline::acceleration(&params), 4.0513, epsilon = 1e-4);

    let mut lab = lab(Locale::Zh);
    let pass = lab.pass(params.into());
    let trajectory = pass.outcome().trajectory().unwrap();
    assert_abs_diff_eq!(trajectory.duration(), 0.9936, epsilon = 1e-3);
    assert_abs_diff_eq!(trajectory.last().unwrap().position, 2.0, epsilon = END_TOLERANCE);
}

#[test]
fn rough_incline_is_a_warning_not_an_error() {
    let mut lab = lab(Locale::Zh);
    let pass = lab.pass(InclineParameters::new(10.0, 0.9, 0.0, 2.0).unwrap().into());

    assert!(pass.outcome().trajectory().is_none());
    assert!(pass.warning().is_some());

    let mut sink = CountingSink::default();
    assert!(matches!(
        pass.animate(&mut sink, StopToken::new(), None).unwrap(),
        Report::NotApplicable(_)
    ));
    assert!(sink.heights.is_empty());
    assert!(matches!(pass.table(), Report::NotApplicable(_)));
}

#[test]
fn export_then_import_matches_the_pass() {
    let mut lab = lab(Locale::Zh);
    let pass = lab.pass(PendulumParameters::new(0.5, 15.0).unwrap().into());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(pass.export_file_name());

    assert!(pass.export(&path).unwrap().is_applicable());
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("时间 (s),摆角 (°),角速度 (°/s)"));

    let imported = Table::read_csv(ExperimentKind::Pendulum, &path)
        .unwrap()
        .to_trajectory()
        .unwrap();
    let original = pass.outcome().trajectory().unwrap();
    assert_eq!(imported.len(), original.len());
    for (a, b) in imported.samples().iter().zip(original.samples()) {
        assert_abs_diff_eq!(a.position, b.position, epsilon = 1e-12);
        assert_abs_diff_eq!(a.velocity, b.velocity, epsilon = 1e-12);
    }
}

#[test]
fn summary_plot_and_frames_share_the_pass() {
    let mut lab = lab(Locale::En);
    let pass = lab.pass(FreeFallParameters::default().into());
    let dir = tempfile::tempdir().unwrap();

    let plot = dir.path().join("fall.svg");
    assert!(pass.plot(&plot).unwrap().is_applicable());
    assert!(std::fs::read_to_string(&plot).unwrap().contains("velocity (m/s)"));

    let stop = StopToken::new();
    let mut count = 0;
    if let Report::Ready(stream) = pass.frames(stop.clone()) {
        for frame in stream {
            count += 1;
            if frame.index == 4 {
                stop.stop();
            }
        }
    }
    assert_eq!(count, 5);
    assert_eq!(lab.cache().misses(), 1);
}
