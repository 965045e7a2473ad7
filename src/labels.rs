//! User-facing text per locale: column names, axis labels, captions,
//! status messages and export file names.

use crate::config::Locale;
use crate::model::{ExperimentKind, NotApplicable, PeriodEstimate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentLabels {
    pub title: &'static str,
    /// Time, position (or angle), velocity, with units
    pub columns: [&'static str; 3],
    /// Titles of the two summary curves
    pub curves: [&'static str; 2],
    pub frame_title: &'static str,
    pub frame_x: &'static str,
    pub frame_y: &'static str,
    /// Legend entries: the fixed fixture, then the moving body
    pub legend: [&'static str; 2],
    pub export_file: &'static str,
}

pub fn experiment(kind: ExperimentKind, locale: Locale) -> ExperimentLabels {
    match (kind, locale) {
        (ExperimentKind::FreeFall, Locale::Zh) => ExperimentLabels {
            title: "自由落体实验",
            columns: ["时间 (s)", "高度 (m)", "速度 (m/s)"],
            curves: ["高度变化", "速度变化"],
            frame_title: "自由落体运动",
            frame_x: "水平位置",
            frame_y: "高度 (m)",
            legend: ["地面", "下落物体"],
            export_file: "自由落体数据.csv",
        },
        (ExperimentKind::FreeFall, Locale::En) => ExperimentLabels {
            title: "Free fall",
            columns: ["time (s)", "height (m)", "velocity (m/s)"],
            curves: ["Height", "Velocity"],
            frame_title: "Free fall",
            frame_x: "horizontal position",
            frame_y: "height (m)",
            legend: ["ground", "falling body"],
            export_file: "free_fall_data.csv",
        },
        (ExperimentKind::Pendulum, Locale::Zh) => ExperimentLabels {
            title: "单摆周期测量实验",
            columns: ["时间 (s)", "摆角 (°)", "角速度 (°/s)"],
            curves: ["摆角变化", "角速度变化"],
            frame_title: "单摆运动动画",
            frame_x: "水平位置 (m)",
            frame_y: "垂直位置 (m)",
            legend: ["悬点", "摆球"],
            export_file: "单摆数据.csv",
        },
        (ExperimentKind::Pendulum, Locale::En) => ExperimentLabels {
            title: "Simple pendulum period",
            columns: ["time (s)", "angle (°)", "angular velocity (°/s)"],
            curves: ["Angle", "Angular velocity"],
            frame_title: "Pendulum",
            frame_x: "horizontal position (m)",
            frame_y: "vertical position (m)",
            legend: ["pivot", "bob"],
            export_file: "pendulum_data.csv",
        },
        (ExperimentKind::Incline, Locale::Zh) => ExperimentLabels {
            title: "斜面运动实验",
            columns: ["时间 (s)", "位移 (m)", "速度 (m/s)"],
            curves: ["位移变化", "速度变化"],
            frame_title: "斜面运动动画",
            frame_x: "水平位置 (m)",
            frame_y: "垂直位置 (m)",
            legend: ["斜面", "运动物体"],
            export_file: "斜面运动数据.csv",
        },
        (ExperimentKind::Incline, Locale::En) => ExperimentLabels {
            title: "Inclined plane",
            columns: ["time (s)", "displacement (m)", "velocity (m/s)"],
            curves: ["Displacement", "Velocity"],
            frame_title: "Inclined plane",
            frame_x: "horizontal position (m)",
            frame_y: "vertical position (m)",
            legend: ["incline", "sliding body"],
            export_file: "incline_data.csv",
        },
    }
}

pub fn animation_finished(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "动画播放完毕",
        Locale::En => "Animation finished",
    }
}

pub fn animation_stopped(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "动画已停止",
        Locale::En => "Animation stopped",
    }
}

pub fn not_applicable(locale: Locale, state: &NotApplicable) -> String {
    match locale {
        Locale::Zh => format!(
            "加速度≤0（{:.4} m/s²），物体无法下滑！请减小摩擦系数或增大倾角。",
            state.acceleration
        ),
        Locale::En => format!(
            "Acceleration ≤ 0 ({:.4} m/s²): the body cannot slide. Lower the friction or steepen the incline.",
            state.acceleration
        ),
    }
}

pub fn period_summary(locale: Locale, estimate: &PeriodEstimate) -> String {
    match locale {
        Locale::Zh => format!(
            "理论周期：{:.4} s | 拟合周期：{:.4} s",
            estimate.theoretical, estimate.fitted
        ),
        Locale::En => format!(
            "theoretical period: {:.4} s | fitted period: {:.4} s",
            estimate.theoretical, estimate.fitted
        ),
    }
}
