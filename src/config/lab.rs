use crate::error::Result;
use crate::model::ExperimentKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Nominal delay between frames, ms
    pub free_fall_interval_ms: u64,
    pub pendulum_interval_ms: u64,
    pub incline_interval_ms: u64,
    /// Sleep between frames. Off for headless rendering.
    pub real_time: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            free_fall_interval_ms: 50,
            pendulum_interval_ms: 30,
            incline_interval_ms: 50,
            real_time: true,
        }
    }
}

impl PlaybackConfig {
    pub fn headless() -> Self {
        Self {
            real_time: false,
            ..Self::default()
        }
    }

    pub fn interval(&self, kind: ExperimentKind) -> Duration {
        let ms = match kind {
            ExperimentKind::FreeFall => self.free_fall_interval_ms,
            ExperimentKind::Pendulum => self.pendulum_interval_ms,
            ExperimentKind::Incline => self.incline_interval_ms,
        };
        Duration::from_millis(ms)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub locale: Locale,
    pub playback: PlaybackConfig,
}

impl LabConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
