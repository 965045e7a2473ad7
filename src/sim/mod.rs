pub mod lab;
pub mod scene;
pub mod sink;
pub mod streamer;

pub use lab::{Lab, RenderPass};
pub use scene::Scene;
pub use sink::{LogSink, RenderSink, SvgFrameSink};
pub use streamer::{play, Frame, FrameStream, Pacing, PlaybackEnd, PlaybackSummary, StopToken};
