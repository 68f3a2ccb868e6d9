//! Background tasks and scheduled jobs.
//!
//! Each submodule provides a long-running async function intended to be
//! spawned via `tokio::spawn`. All tasks accept a [`CancellationToken`]
//! for graceful shutdown, and each is spawned exactly once, so two scans
//! of the same job never overlap.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

pub mod daily_summary;
pub mod reminders;
pub mod session_cleanup;
