//! Utility helpers

pub mod time;

pub use time::now_unix_secs;
