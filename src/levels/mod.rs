//! Level controller and its supporting pieces.
//!
//! - `controller`: the single controller every tier plays through
//! - `timer`: tick and advancement timers, generation-keyed tokens
//! - `partition`: Beginner "split into two groups" mode
//! - `feedback`: round results and feedback keys

pub mod controller;
pub mod feedback;
pub mod partition;
pub mod timer;

pub use controller::{GameSnapshot, LevelController, Rejection, Submission, TimeReport};
pub use feedback::{FeedbackKey, RoundResult};
pub use partition::{Bucket, Partition};
pub use timer::{AdvanceToken, Countdown, TickTimer};
