//! Framework-free domain logic shared by the db and api crates.

pub mod error;
pub mod schedule;
pub mod scoring;
pub mod slug;
pub mod streak;
pub mod types;
