//! Executing call trees against a [`KindRegistry`](crate::KindRegistry).

mod replay_value;
mod replayer;

pub use replay_value::ReplayValue;
pub use replayer::Replayer;
