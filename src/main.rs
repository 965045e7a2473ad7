use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use kinelab::config::{
    ExperimentParameters, FreeFallParameters, InclineParameters, LabConfig, Locale, PendulumParameters,
};
use kinelab::labels;
use kinelab::report::Report;
use kinelab::sim::{sink, Lab, LogSink, RenderPass, RenderSink, StopToken, SvgFrameSink};

#[derive(Parser, Debug)]
#[command(name = "kinelab")]
#[command(about = "Free fall, pendulum and inclined-plane experiments with animation, plots and CSV export")]
struct Args {
    /// JSON lab configuration (locale, frame intervals, pacing)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language for labels, messages and export file names
    #[arg(long, value_enum, global = true)]
    locale: Option<LocaleArg>,

    #[command(subcommand)]
    experiment: Experiment,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LocaleArg {
    Zh,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Zh => Locale::Zh,
            LocaleArg::En => Locale::En,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Experiment {
    /// Free fall from rest
    Fall {
        /// Initial height, m [1, 100]
        #[arg(long, default_value_t = 10.0)]
        height: f64,
        /// Gravitational acceleration, m/s² [9, 10]
        #[arg(long, default_value_t = 9.8)]
        gravity: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Simple pendulum, small-angle approximation
    Pendulum {
        /// Length, m [0.1, 2]
        #[arg(long, default_value_t = 1.0)]
        length: f64,
        /// Release angle, degrees [1, 30]
        #[arg(long, default_value_t = 5.0)]
        angle: f64,
        #[arg(long, default_value_t = 9.8)]
        gravity: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Sliding down an inclined plane with friction
    Incline {
        /// Slope angle, degrees [1, 80]
        #[arg(long, default_value_t = 30.0)]
        angle: f64,
        /// Friction coefficient [0, 1]
        #[arg(long, default_value_t = 0.1)]
        friction: f64,
        /// Initial velocity along the slope, m/s [0, 5]
        #[arg(long, default_value_t = 0.0)]
        velocity: f64,
        /// Slope length, m [1, 10]
        #[arg(long, default_value_t = 2.0)]
        length: f64,
        #[arg(long, default_value_t = 9.8)]
        gravity: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct OutputArgs {
    /// Play the animation
    #[arg(long)]
    animate: bool,

    /// Write animation frames as SVG files into this directory instead of logging them
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Render frames as fast as possible
    #[arg(long)]
    no_pacing: bool,

    /// Stop the animation after this many frames
    #[arg(long)]
    max_frames: Option<usize>,

    /// Write the two-curve summary plot to this SVG file
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Print the sample table
    #[arg(long)]
    table: bool,

    /// Export the table as CSV, to the experiment's default file name when no path is given
    #[arg(long, num_args = 0..=1)]
    export: Option<Option<PathBuf>>,
}

impl Experiment {
    fn into_parts(self) -> kinelab::Result<(ExperimentParameters, OutputArgs)> {
        Ok(match self {
            Self::Fall { height, gravity, output } => {
                (FreeFallParameters::new(height, gravity)?.into(), output)
            }
            Self::Pendulum { length, angle, gravity, output } => {
                (PendulumParameters::with_gravity(length, angle, gravity)?.into(), output)
            }
            Self::Incline { angle, friction, velocity, length, gravity, output } => (
                InclineParameters::with_gravity(angle, friction, velocity, length, gravity)?.into(),
                output,
            ),
        })
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> kinelab::Result<()> {
    let mut config = match &args.config {
        Some(path) => LabConfig::load(path)?,
        None => LabConfig::default(),
    };
    if let Some(locale) = args.locale {
        config.locale = locale.into();
    }

    let (params, output) = args.experiment.into_parts()?;
    if output.no_pacing {
        config.playback.real_time = false;
    }

    let mut lab = Lab::new(config);
    let pass = lab.pass(params);
    present(&pass, &output)
}

fn present(pass: &RenderPass, output: &OutputArgs) -> kinelab::Result<()> {
    let locale = pass.locale();
    let text = labels::experiment(pass.params().kind(), locale);
    println!("{}", text.title);

    if let Some(warning) = pass.warning() {
        println!("{warning}");
        return Ok(());
    }

    if let Some(trajectory) = pass.outcome().trajectory() {
        if let Some(last) = trajectory.last() {
            println!(
                "{}: {:.4} | {}: {:.4} | {}: {:.4}",
                text.columns[0],
                last.t,
                text.columns[1],
                if trajectory.kind().is_angular() { last.position.to_degrees() } else { last.position },
                text.columns[2],
                if trajectory.kind().is_angular() { last.velocity.to_degrees() } else { last.velocity },
            );
        }
    }
    if let Some(estimate) = pass.period() {
        println!("{}", labels::period_summary(locale, &estimate));
    }

    if output.animate || output.frames_dir.is_some() {
        let mut renderer: Box<dyn RenderSink> = match &output.frames_dir {
            Some(dir) => Box::new(SvgFrameSink::new(dir.clone(), locale)?),
            None => Box::new(LogSink::new(locale)),
        };
        let played = pass.animate(renderer.as_mut(), StopToken::new(), output.max_frames)?;
        if let Report::Ready(summary) = played {
            println!("{}", sink::end_message(locale, &summary));
        }
    }

    if let Some(path) = &output.plot {
        pass.plot(path)?;
    }

    if output.table {
        if let Report::Ready(table) = pass.table() {
            print!("{table}");
        }
    }

    if let Some(target) = &output.export {
        let path = target
            .clone()
            .unwrap_or_else(|| PathBuf::from(pass.export_file_name()));
        pass.export(&path)?;
        println!("{}", path.display());
    }

    Ok(())
}
