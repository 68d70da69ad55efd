//! Kode Animation Timing
//!
//! Everything time-driven in a widget runs on the UI thread as deferred
//! tasks. This crate provides:
//!
//! - **TimerScheduler**: post / post-delayed tasks on a host-advanced clock
//! - **EpisodeCounter**: tokens that make tasks from a finished episode
//!   recognisably stale

pub mod episode;
pub mod scheduler;

pub use episode::EpisodeCounter;
pub use scheduler::{FiredTask, TaskId, TimerScheduler};
