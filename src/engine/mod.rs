pub mod config;
pub mod controller;
pub mod error;
pub mod schedule;

pub use config::EngineConfig;
pub use controller::AnimationLoop;
pub use error::EngineError;
pub use schedule::{FrameScheduler, FrameToken, RepaintScheduler, VirtualScheduler};
