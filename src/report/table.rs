use crate::config::Locale;
use crate::error::{Error, Result};
use crate::labels;
use crate::model::{ExperimentKind, ModelOutcome, TimeSample, Trajectory};
use crate::report::{with_trajectory, Report};
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// A trajectory in presentation units: one row per sample, angles in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub kind: ExperimentKind,
    pub headers: Vec<String>,
    pub rows: Vec<[f64; 3]>,
}

impl Table {
    pub fn from_trajectory(trajectory: &Trajectory, locale: Locale) -> Self {
        let kind = trajectory.kind();
        let headers = labels::experiment(kind, locale)
            .columns
            .iter()
            .map(|c| c.to_string())
            .collect();
        let rows = trajectory
            .samples()
            .iter()
            .map(|s| {
                if kind.is_angular() {
                    [s.t, s.position.to_degrees(), s.velocity.to_degrees()]
                } else {
                    [s.t, s.position, s.velocity]
                }
            })
            .collect();
        Self { kind, headers, rows }
    }

    /// Back to model units. Fails if the rows are not strictly increasing in time.
    pub fn to_trajectory(&self) -> Result<Trajectory> {
        let angular = self.kind.is_angular();
        let samples = self
            .rows
            .iter()
            .map(|&[t, position, velocity]| {
                if angular {
                    TimeSample::new(t, position.to_radians(), velocity.to_radians())
                } else {
                    TimeSample::new(t, position, velocity)
                }
            })
            .collect();
        Trajectory::new(self.kind, samples)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header plus rows, comma separated, UTF-8. Floats are written in their
    /// shortest exact representation.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|v| v.to_string()))?;
        }
        writer.into_inner().map_err(|e| Error::Io(e.into_error()))
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_csv()?)?;
        info!(path = %path.display(), rows = self.rows.len(), "table exported");
        Ok(())
    }

    pub fn from_csv_reader<R: Read>(kind: ExperimentKind, reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        if headers.len() != 3 {
            return Err(Error::MalformedTable(format!(
                "expected 3 columns, found {}",
                headers.len()
            )));
        }

        let mut rows = Vec::new();
        for (line, record) in csv_reader.records().enumerate() {
            let record = record?;
            let mut row = [0.0; 3];
            for (column, cell) in row.iter_mut().enumerate() {
                let text = record.get(column).ok_or_else(|| {
                    Error::MalformedTable(format!("row {} has {} fields", line + 1, record.len()))
                })?;
                *cell = text.trim().parse().map_err(|_| {
                    Error::MalformedTable(format!("row {} column {}: {:?}", line + 1, column + 1, text))
                })?;
            }
            rows.push(row);
        }

        Ok(Self { kind, headers, rows })
    }

    pub fn read_csv(kind: ExperimentKind, path: &Path) -> Result<Self> {
        Self::from_csv_reader(kind, std::fs::File::open(path)?)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 20;
        for header in &self.headers {
            write!(f, "{:>width$}", header, width = WIDTH)?;
        }
        writeln!(f)?;
        for row in &self.rows {
            for value in row {
                write!(f, "{:>width$.6}", value, width = WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn tabulate(outcome: &ModelOutcome, locale: Locale) -> Report<Table> {
    match outcome {
        ModelOutcome::Ready(trajectory) => Report::Ready(Table::from_trajectory(trajectory, locale)),
        ModelOutcome::NotApplicable(state) => Report::NotApplicable(*state),
    }
}

/// Export the outcome's table to `path`.
pub fn export(outcome: &ModelOutcome, locale: Locale, path: &Path) -> Result<Report<()>> {
    with_trajectory(outcome, |trajectory| {
        Table::from_trajectory(trajectory, locale).write_csv(path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FreeFallParameters, InclineParameters, PendulumParameters};
    use crate::math::END_TOLERANCE;
    use crate::model::{evaluate, free_fall, pendulum};
    use approx::assert_relative_eq;

    #[test]
    fn header_and_row_count() {
        let trajectory = free_fall::trajectory(&FreeFallParameters::default());
        let table = Table::from_trajectory(&trajectory, Locale::Zh);
        assert_eq!(table.headers, vec!["时间 (s)", "高度 (m)", "速度 (m/s)"]);
        assert_eq!(table.len(), 100);

        let text = String::from_utf8(table.to_csv().unwrap()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("时间 (s),高度 (m),速度 (m/s)"));
        assert_eq!(lines.next(), Some("0,10,0"));
        assert_eq!(text.lines().count(), 101);
    }

    #[test]
    fn pendulum_table_is_in_degrees() {
        let params = PendulumParameters::new(1.0, 5.0).unwrap();
        let table = Table::from_trajectory(&pendulum::trajectory(&params), Locale::En);
        assert_relative_eq!(table.rows[0][1], 5.0, epsilon = 1e-12);
        assert_eq!(table.headers[1], "angle (°)");
    }

    #[test]
    fn csv_round_trip_keeps_values() {
        let params = PendulumParameters::new(0.7, 20.0).unwrap();
        let trajectory = pendulum::trajectory(&params);
        let bytes = Table::from_trajectory(&trajectory, Locale::Zh).to_csv().unwrap();

        let parsed = Table::from_csv_reader(ExperimentKind::Pendulum, bytes.as_slice())
            .unwrap()
            .to_trajectory()
            .unwrap();
        assert_eq!(parsed.len(), trajectory.len());
        for (a, b) in parsed.samples().iter().zip(trajectory.samples()) {
            assert_eq!(a.t, b.t);
            assert_relative_eq!(a.position, b.position, epsilon = 1e-12);
            assert_relative_eq!(a.velocity, b.velocity, epsilon = 1e-12);
        }
    }

    #[test]
    fn wrong_column_count_is_rejected() {
        let text = "a,b\n1,2\n";
        let err = Table::from_csv_reader(ExperimentKind::FreeFall, text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedTable(_)));
    }

    #[test]
    fn non_numeric_cell_is_rejected() {
        let text = "t,h,v\n0,1,x\n";
        let err = Table::from_csv_reader(ExperimentKind::FreeFall, text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedTable(_)));
    }

    #[test]
    fn stuck_incline_has_no_table() {
        let outcome = evaluate(&InclineParameters::new(10.0, 0.9, 0.0, 2.0).unwrap().into());
        assert!(!tabulate(&outcome, Locale::Zh).is_applicable());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("incline.csv");
        assert!(!export(&outcome, Locale::Zh, &path).unwrap().is_applicable());
        assert!(!path.exists());
    }

    #[test]
    fn export_writes_file() {
        let outcome = evaluate(&InclineParameters::default().into());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(labels::experiment(ExperimentKind::Incline, Locale::Zh).export_file);
        assert!(export(&outcome, Locale::Zh, &path).unwrap().is_applicable());

        let table = Table::read_csv(ExperimentKind::Incline, &path).unwrap();
        assert_eq!(table.len(), 100);
        assert_relative_eq!(table.rows[99][1], 2.0, epsilon = END_TOLERANCE);
    }
}
